// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zero-setup verification of a reordering driver.
//!
//! [`Analyzer`] runs a caller-supplied driver over a fixed table of
//! [`Letters`] patterns, each wrapped in a position-tracking
//! [`Stat`] (and optionally a [`Log`]), then reports which runs left their
//! input correctly ordered and what each one cost. It exists so a sorting
//! algorithm written against the capability contract can be sanity-checked
//! with one call while it is being developed.
//!
//! # Example
//!
//! ```
//! use permutil::{Analyzer, Sequence};
//!
//! // A deliberately naive driver: gnome sort.
//! fn gnome(seq: &mut dyn Sequence) {
//!     let n = seq.len();
//!     let mut i = 1;
//!     while i < n {
//!         if i == 0 || !seq.less(i, i - 1) {
//!             i += 1;
//!         } else {
//!             seq.swap(i, i - 1);
//!             i -= 1;
//!         }
//!     }
//! }
//!
//! let mut report = Vec::new();
//! Analyzer::new(&mut report).run(gnome).unwrap();
//! assert!(!String::from_utf8(report).unwrap().contains("FAIL"));
//! ```

use crate::instrument::{Log, Op, Stat, TouchSummary, DEFAULT_INLINE_LIMIT};
use crate::sample::Letters;
use crate::seq::{is_sorted, Sequence};
use std::io::{self, Write};
use tracing::debug;

/// Fixed inputs every driver is exercised on. Chosen to hit the shapes that
/// trip naive drivers: already ordered, fully inverted, rotated, alternating
/// runs, duplicates, and a single element.
const CASES: &[(&str, &str)] = &[
    ("ordered", "abcdefgh"),
    ("inverted", "hgfedcba"),
    ("rotated", "fghabcde"),
    ("sawtooth", "aebfcgdh"),
    ("repeats", "abababab"),
    ("single", "a"),
];

/// Runs a driver over the fixed cases and writes a report to a sink.
///
/// The report lists correctly-ordered runs first, then failures, one line
/// per case with the before/after arrangements and the aggregate call
/// tallies, plus a per-position swap summary line:
///
/// ```text
/// ok   ordered   abcdefgh -> abcdefgh {len:1 less:7 swap:0}
///      swap touches: min:0 max:0 mean:0.00 sd:0.00
/// ```
pub struct Analyzer<W> {
    sink: W,
    log_ops: bool,
    inline_limit: isize,
}

struct Run {
    name: &'static str,
    before: String,
    after: String,
    ordered: bool,
    tallies: [u64; 3],
    swap_summary: Option<TouchSummary>,
}

impl<W: Write> Analyzer<W> {
    /// Report to `sink`, without per-operation logging.
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            log_ops: false,
            inline_limit: DEFAULT_INLINE_LIMIT,
        }
    }

    /// Also write one log line per capability call, interleaved into the
    /// sink ahead of the report.
    pub fn log_ops(mut self, enabled: bool) -> Self {
        self.log_ops = enabled;
        self
    }

    /// Inline-rendering limit for the per-operation log lines.
    pub fn inline_limit(mut self, limit: isize) -> Self {
        self.inline_limit = limit;
        self
    }

    /// Run `driver` over every case and write the report.
    pub fn run<F>(mut self, mut driver: F) -> io::Result<()>
    where
        F: FnMut(&mut dyn Sequence),
    {
        let mut runs = Vec::with_capacity(CASES.len());
        for &(name, pattern) in CASES {
            let mut letters = Letters::new(pattern);
            let before = letters.to_string();
            let (tallies, swap_summary) = {
                let mut stat = Stat::with_positions(&mut letters);
                if self.log_ops {
                    writeln!(self.sink, "--- {name}")?;
                    let mut log =
                        Log::with_inline_limit(&mut stat, &mut self.sink, self.inline_limit);
                    driver(&mut log);
                } else {
                    driver(&mut stat);
                }
                let tallies = [
                    stat.count(Op::Len),
                    stat.count(Op::Less),
                    stat.count(Op::Swap),
                ];
                (tallies, stat.swap_summary())
            };
            let ordered = is_sorted(&letters);
            debug!(name, ordered, "case analyzed");
            runs.push(Run {
                name,
                before,
                after: letters.to_string(),
                ordered,
                tallies,
                swap_summary,
            });
        }

        // Correct runs first; stable, so case order is kept within each group.
        runs.sort_by_key(|run| !run.ordered);
        for run in &runs {
            let verdict = if run.ordered { "ok  " } else { "FAIL" };
            writeln!(
                self.sink,
                "{verdict} {:<9} {} -> {} {{len:{} less:{} swap:{}}}",
                run.name, run.before, run.after, run.tallies[0], run.tallies[1], run.tallies[2],
            )?;
            if let Some(summary) = run.swap_summary {
                writeln!(self.sink, "     swap touches: {summary}")?;
            }
        }
        Ok(())
    }
}
