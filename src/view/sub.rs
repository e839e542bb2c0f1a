// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sub-range view.

use super::ViewError;
use crate::seq::Sequence;

/// A view onto a contiguous range of a base sequence.
///
/// `seq.sub(i, j)` is semantically `seq[i..j]`, though the base does not
/// need to be sliceable. Indices passed through the view are translated by
/// the view's offset; the base is otherwise untouched.
///
/// Narrowing an existing `Sub` flattens into a single view over the original
/// base rather than stacking a second translation layer, so the offset
/// arithmetic is always one addition deep.
#[derive(Debug)]
pub struct Sub<S> {
    base: S,
    offset: usize,
    count: usize,
}

impl<S: Sequence> Sub<S> {
    pub(crate) fn new(base: S, start: usize, end: usize) -> Result<Self, ViewError> {
        let len = base.len();
        if start > end || end > len {
            return Err(ViewError::SubOutOfRange { start, end, len });
        }
        Ok(Self {
            base,
            offset: start,
            count: end - start,
        })
    }

    /// Narrow this view to `start..end` of its own range.
    ///
    /// Shadows [`SequenceExt::sub`](super::SequenceExt::sub): the result is
    /// a view over the original base with a composed offset, not a view of
    /// a view.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > self.len()`.
    pub fn sub(self, start: usize, end: usize) -> Sub<S> {
        match self.try_sub(start, end) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Narrow this view to `start..end`, reporting bad bounds instead of
    /// panicking. Flattens like [`Sub::sub`].
    pub fn try_sub(self, start: usize, end: usize) -> Result<Sub<S>, ViewError> {
        if start > end || end > self.count {
            return Err(ViewError::SubOutOfRange {
                start,
                end,
                len: self.count,
            });
        }
        Ok(Sub {
            base: self.base,
            offset: self.offset + start,
            count: end - start,
        })
    }

    /// Offset of this view's first position within the base.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Unwrap, returning the base sequence.
    pub fn into_inner(self) -> S {
        self.base
    }
}

impl<S: Sequence> Sequence for Sub<S> {
    fn len(&self) -> usize {
        self.count
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.base.less(self.offset + i, self.offset + j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.base.swap(self.offset + i, self.offset + j)
    }

    // render/mark stay absent: the base's rendering covers positions this
    // view does not expose, so forwarding it would mislabel indices.
}
