// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Utilities for reordering and instrumenting sequences through a minimal
//! swap capability.
//!
//! Nothing here sorts. The crate supplies the pieces around a sorting (or any
//! other reordering) driver: in-place transforms built from pairwise swaps,
//! and decorators that change how an existing sequence is viewed or observed
//! without changing what it does.
//!
//! # Architecture
//!
//! Everything is written against the [`Sequence`] trait (length, pairwise
//! order comparison, pairwise swap) and never against a concrete container:
//!
//! - [`transform`]: stateless positional transforms ([`reverse`], [`rotate`],
//!   [`skew`], [`shuffle`]) that touch the sequence only through swaps and
//!   allocate nothing.
//! - [`view`]: zero-copy wrappers presenting a transformed perspective:
//!   a sub-range ([`Sub`]), inverted comparison order ([`Rev`]), or mirrored
//!   writes across several sequences ([`Proxy`]).
//! - [`instrument`]: wrappers that observe calls without altering their
//!   effect: aggregate and per-position call counts ([`Stat`]), and a line
//!   logger for watching a driver work ([`Log`]).
//! - [`sample`]: small concrete sequences ([`Letters`], [`int_seq`]) for
//!   developing and debugging drivers.
//! - [`analyze`]: a zero-setup harness that runs a driver over fixed inputs
//!   and reports correctness and call statistics.
//!
//! Decorators compose: a [`Log`] around a [`Stat`] around a [`Rev`] of a
//! [`Sub`] is still just a [`Sequence`].
//!
//! # Example
//!
//! ```
//! use permutil::{rotate, Letters, Op, Stat};
//!
//! let mut seq = Letters::ascending(8);
//! {
//!     let mut stat = Stat::new(&mut seq);
//!     rotate(&mut stat, 3);
//!     assert!(stat.count(Op::Swap) > 0);
//! }
//! assert_eq!(seq.to_string(), "fghabcde");
//! ```
//!
//! # Concurrency
//!
//! Execution is synchronous call-and-return throughout. A sequence and any
//! decorators wrapping it are not safe for mutation from multiple threads;
//! less and swap are assumed to run under a single logical driver at a time.

pub mod analyze;
pub mod instrument;
pub mod sample;
pub mod seq;
pub mod transform;
pub mod view;

// Re-export the types most callers need.
pub use analyze::Analyzer;
pub use instrument::{Log, Op, Stat, TouchSummary, DEFAULT_INLINE_LIMIT};
pub use sample::{int_seq, Letters};
pub use seq::{is_sorted, Sequence};
pub use transform::{reverse, rotate, shuffle, shuffle_with, skew};
pub use view::{Proxy, Rev, SequenceExt, Sub, ViewError};
