// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decorators that observe capability calls without changing their effect.
//!
//! [`Stat`] tallies how often a driver calls each operation, optionally down
//! to how often each position is touched. [`Log`] writes one line per call
//! to an output sink, with an inline rendering of small sequences when the
//! wrapped value can draw itself.
//!
//! Both forward the optional `render`/`mark` capabilities, so instrumentation
//! can be layered: a `Log` around a `Stat` logs the calls the `Stat` is
//! counting.

mod log;
mod stat;

pub use log::{Log, DEFAULT_INLINE_LIMIT};
pub use stat::{Op, Stat, TouchSummary};
