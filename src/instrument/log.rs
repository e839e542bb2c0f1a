// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Call logging.

use crate::seq::Sequence;
use std::cell::{Cell, RefCell};
use std::io::Write;

/// Inline renderings are emitted for sequences up to this long unless the
/// limit is overridden at construction.
pub const DEFAULT_INLINE_LIMIT: isize = 26;

/// Wraps a sequence, writing one line per capability call to a sink.
///
/// Index arguments are right-padded to the decimal width of the largest
/// index, based on the most recent `len` result; the cached length and width
/// start at zero and refresh on every `len` call.
///
/// # Line format
///
/// When the wrapped value renders itself (see below), the rendering leads
/// the line; `less` and `swap` use the marked rendering, and `swap` shows
/// the sequence before and after the exchange:
///
/// ```text
/// (abcdef).len() [6]
/// (aBcdEf).less(1, 4) [true]
/// (AbcdeF).swap(0, 5) [FbcdeA]
/// ```
///
/// Without a rendering the lines carry the calls alone:
///
/// ```text
/// len() [6]
/// less(1, 4) [true]
/// swap(0, 5)
/// ```
///
/// # Inline renderings
///
/// A rendering is emitted only when the wrapped value answers
/// [`mark`](Sequence::mark) (or [`render`](Sequence::render) for `len`
/// lines) and the cached length is at or below the configured inline limit.
/// Long sequences would swamp the sink with their own text, so past the
/// limit the renderings are dropped; a negative limit drops them
/// unconditionally.
///
/// # Sink
///
/// Write failures on the sink are ignored; the capability contract has no
/// failure channel to carry them. The sink sits behind a `RefCell` because
/// `len` and `less` take `&self`, which also makes the logger `!Sync`:
/// concurrent drivers must serialize access externally, and a single `Log`
/// can be reused across separate runs as long as they do not coincide.
pub struct Log<S, W> {
    base: S,
    sink: RefCell<W>,
    inline_limit: isize,
    cached_len: Cell<usize>,
    width: Cell<usize>,
}

impl<S: Sequence, W: Write> Log<S, W> {
    /// Log calls on `base` to `sink` with [`DEFAULT_INLINE_LIMIT`].
    pub fn new(base: S, sink: W) -> Self {
        Self::with_inline_limit(base, sink, DEFAULT_INLINE_LIMIT)
    }

    /// Log calls on `base` to `sink`, emitting inline renderings only while
    /// the cached length is at most `inline_limit`. A negative limit
    /// disables inline renderings entirely.
    pub fn with_inline_limit(base: S, sink: W, inline_limit: isize) -> Self {
        Self {
            base,
            sink: RefCell::new(sink),
            inline_limit,
            cached_len: Cell::new(0),
            width: Cell::new(0),
        }
    }

    /// Unwrap, returning the base sequence and the sink.
    pub fn into_inner(self) -> (S, W) {
        (self.base, self.sink.into_inner())
    }

    fn inline_allowed(&self) -> bool {
        self.inline_limit >= 0 && self.cached_len.get() <= self.inline_limit as usize
    }

    fn inline_render(&self) -> Option<String> {
        if self.inline_allowed() {
            self.base.render()
        } else {
            None
        }
    }

    fn inline_mark(&self, i: usize, j: usize) -> Option<String> {
        if self.inline_allowed() {
            self.base.mark(i, j).or_else(|| self.base.render())
        } else {
            None
        }
    }
}

impl<S: Sequence, W: Write> Sequence for Log<S, W> {
    fn len(&self) -> usize {
        let n = self.base.len();
        self.cached_len.set(n);
        self.width.set(if n > 0 { digits(n - 1) } else { 0 });
        let mut sink = self.sink.borrow_mut();
        let _ = match self.inline_render() {
            Some(text) => writeln!(sink, "({text}).len() [{n}]"),
            None => writeln!(sink, "len() [{n}]"),
        };
        n
    }

    fn less(&self, i: usize, j: usize) -> bool {
        let r = self.base.less(i, j);
        let w = self.width.get();
        let mut sink = self.sink.borrow_mut();
        let _ = match self.inline_mark(i, j) {
            Some(text) => writeln!(sink, "({text}).less({i:w$}, {j:w$}) [{r}]"),
            None => writeln!(sink, "less({i:w$}, {j:w$}) [{r}]"),
        };
        r
    }

    fn swap(&mut self, i: usize, j: usize) {
        let before = self.inline_mark(i, j);
        self.base.swap(i, j);
        let w = self.width.get();
        let mut sink = self.sink.borrow_mut();
        let _ = match before.and_then(|b| self.inline_mark(i, j).map(|a| (b, a))) {
            Some((before, after)) => {
                writeln!(sink, "({before}).swap({i:w$}, {j:w$}) [{after}]")
            }
            None => writeln!(sink, "swap({i:w$}, {j:w$})"),
        };
    }

    fn render(&self) -> Option<String> {
        self.base.render()
    }

    fn mark(&self, i: usize, j: usize) -> Option<String> {
        self.base.mark(i, j)
    }
}

/// Decimal digit width of `n`.
fn digits(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
