// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zero-copy views over a sequence.
//!
//! A view wraps an existing [`Sequence`] and presents a transformed
//! perspective of it: a window onto part of it ([`Sub`]), the same elements
//! under inverted comparison order ([`Rev`]), or writes fanned out to
//! several sequences at once ([`Proxy`]). Views hold nothing but the wrapped
//! value and a constant amount of bookkeeping.
//!
//! # Construction
//!
//! Views are built with the [`SequenceExt`] methods, which any sequence
//! picks up automatically. Each has a panicking form and a `try_` form
//! returning [`ViewError`]; out-of-range bounds and mismatched mirror
//! lengths are caller bugs, so the panicking forms are the usual choice and
//! never clamp or correct.
//!
//! # Collapsing
//!
//! Re-wrapping collapses instead of nesting. Narrowing a [`Sub`] yields a
//! `Sub` of the original base with a composed offset, and reversing a
//! [`Rev`] returns the base itself. Both hold by construction: the wrappers
//! carry inherent `sub`/`rev` methods that shadow the [`SequenceExt`] ones,
//! so the collapse is decided at compile time.
//!
//! ```
//! use permutil::{Letters, SequenceExt, Sub};
//!
//! let flat: Sub<Letters> = Letters::ascending(10).sub(2, 10).sub(1, 5);
//! assert_eq!(permutil::Sequence::len(&flat), 4);
//!
//! let back: Letters = Letters::ascending(4).rev().rev();
//! assert_eq!(back.to_string(), "abcd");
//! ```

mod proxy;
mod rev;
mod sub;

pub use proxy::Proxy;
pub use rev::Rev;
pub use sub::Sub;

use crate::seq::Sequence;
use thiserror::Error;

/// A view constructor was handed arguments that violate its preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Sub-range bounds fall outside the base sequence.
    #[error("sub-range {start}..{end} out of bounds for sequence of length {len}")]
    SubOutOfRange {
        /// Requested start of the range.
        start: usize,
        /// Requested end of the range.
        end: usize,
        /// Length of the base sequence.
        len: usize,
    },

    /// A mirror sequence does not match the primary's length.
    #[error("mirror length {found} does not match primary length {expected}")]
    MirrorLengthMismatch {
        /// The primary sequence's length.
        expected: usize,
        /// The offending mirror's length.
        found: usize,
    },
}

/// View constructors, available on every [`Sequence`].
///
/// The wrappers shadow these methods with collapsing versions of their own;
/// call through method syntax (not `SequenceExt::sub(view, ..)`) to get the
/// collapsing behavior.
pub trait SequenceExt: Sequence + Sized {
    /// Wrap `self` in a view of the half-open range `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`.
    fn sub(self, start: usize, end: usize) -> Sub<Self> {
        match self.try_sub(start, end) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Wrap `self` in a view of the half-open range `start..end`, reporting
    /// bad bounds instead of panicking.
    fn try_sub(self, start: usize, end: usize) -> Result<Sub<Self>, ViewError> {
        Sub::new(self, start, end)
    }

    /// Wrap `self` in a view with inverted comparison order.
    fn rev(self) -> Rev<Self> {
        Rev::new(self)
    }
}

impl<S: Sequence> SequenceExt for S {}
