// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Small concrete sequences for developing and debugging drivers.
//!
//! [`Letters`] is the workhorse: a lowercase-alphabet sequence whose state
//! reads off as a string, with a marked rendering that the
//! [`Log`](crate::Log) decorator picks up for inline display.

use crate::seq::Sequence;
use std::fmt;

/// A sequence of lowercase ASCII letters.
///
/// Designed for watching reordering drivers work: the whole state is legible
/// as one short string, and [`mark`](Sequence::mark) uppercases two
/// positions so individual comparisons and exchanges can be followed by eye.
///
/// Holds only bytes in `'a'..='z'`; constructing anything else is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letters(Vec<u8>);

impl Letters {
    /// An ascending sequence of `n` letters, restarting at `'a'` every 26.
    pub fn ascending(n: usize) -> Self {
        Self((0..n).map(|i| b'a' + (i % 26) as u8).collect())
    }

    /// A sequence holding exactly `text`.
    ///
    /// # Panics
    ///
    /// Panics if `text` contains anything but ASCII lowercase letters.
    pub fn new(text: &str) -> Self {
        assert!(
            text.bytes().all(|b| b.is_ascii_lowercase()),
            "Letters holds only ASCII lowercase, got {:?}",
            text
        );
        Self(text.as_bytes().to_vec())
    }

    /// The current arrangement as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII bytes get in, so this cannot fail.
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Sequence for Letters {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i] < self.0[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }

    fn render(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn mark(&self, i: usize, j: usize) -> Option<String> {
        let mut bytes = self.0.clone();
        bytes[i] = bytes[i].to_ascii_uppercase();
        bytes[j] = bytes[j].to_ascii_uppercase();
        // Uppercasing is idempotent, so i == j marks one position once.
        Some(String::from_utf8(bytes).unwrap())
    }
}

/// An ascending integer sequence `0..n`.
pub fn int_seq(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}
