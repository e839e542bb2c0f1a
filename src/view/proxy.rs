// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mirrored view.

use super::ViewError;
use crate::seq::Sequence;

/// A view that fans swaps out from a primary sequence to mirror sequences.
///
/// Reads (`len`, `less`, the renderings) consult only the primary. Every
/// `swap` is applied to the primary first and then to each mirror in the
/// order they were supplied, so positional metadata held in a parallel
/// sequence, such as labels or original indices, tracks a transform applied to the
/// primary.
///
/// All mirrors must report the primary's length. This is checked once at
/// construction, before any swap can be issued, and violating it is fatal
/// on [`Proxy::new`].
///
/// # Example
///
/// ```
/// use permutil::{reverse, Letters, Proxy};
///
/// let mut keys = vec![2u8, 0, 1];
/// let mut labels = Letters::new("xyz");
/// {
///     let mut proxy = Proxy::new(&mut keys, vec![&mut labels]);
///     reverse(&mut proxy);
/// }
/// assert_eq!(keys, vec![1, 0, 2]);
/// assert_eq!(labels.to_string(), "zyx");
/// ```
pub struct Proxy<'a, P> {
    primary: P,
    mirrors: Vec<&'a mut dyn Sequence>,
}

impl<'a, P: Sequence> Proxy<'a, P> {
    /// Mirror swaps on `primary` to every sequence in `mirrors`.
    ///
    /// # Panics
    ///
    /// Panics if any mirror's length differs from the primary's.
    pub fn new(primary: P, mirrors: Vec<&'a mut dyn Sequence>) -> Self {
        match Self::try_new(primary, mirrors) {
            Ok(proxy) => proxy,
            Err(e) => panic!("{e}"),
        }
    }

    /// Mirror swaps on `primary` to every sequence in `mirrors`, reporting a
    /// length mismatch instead of panicking.
    pub fn try_new(primary: P, mirrors: Vec<&'a mut dyn Sequence>) -> Result<Self, ViewError> {
        let expected = primary.len();
        for mirror in &mirrors {
            let found = mirror.len();
            if found != expected {
                return Err(ViewError::MirrorLengthMismatch { expected, found });
            }
        }
        Ok(Self { primary, mirrors })
    }

    /// Unwrap, returning the primary sequence.
    pub fn into_inner(self) -> P {
        self.primary
    }
}

impl<P: Sequence> Sequence for Proxy<'_, P> {
    fn len(&self) -> usize {
        self.primary.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.primary.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.primary.swap(i, j);
        for mirror in &mut self.mirrors {
            mirror.swap(i, j);
        }
    }

    fn render(&self) -> Option<String> {
        self.primary.render()
    }

    fn mark(&self, i: usize, j: usize) -> Option<String> {
        self.primary.mark(i, j)
    }
}
