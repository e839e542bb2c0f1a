// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Call counting.

use crate::seq::Sequence;
use std::cell::Cell;
use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The operations of the sequence capability, used to index tallies.
#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Op {
    /// Length queries.
    Len,
    /// Order comparisons.
    Less,
    /// Pairwise exchanges.
    Swap,
}

/// Wraps a sequence, counting the calls made through it.
///
/// Aggregate tallies are always kept. Per-position touch counts (how many
/// times each index appeared as an argument of `less` or `swap`) are kept
/// only when requested with [`Stat::with_positions`], which sizes the touch
/// vectors with one length query against the base at construction (that
/// query is the decorator's own and is not tallied).
///
/// `len` and `less` take `&self` through the contract, so the tallies live
/// in [`Cell`]s. The wrapper is consequently not `Sync`, which is no loss:
/// nothing in this crate is meant for shared-state concurrency.
///
/// `Display` renders the aggregate tallies, e.g. `{len:1 less:14 swap:7}`.
pub struct Stat<S> {
    base: S,
    tallies: [Cell<u64>; Op::COUNT],
    touches: Option<Touches>,
}

struct Touches {
    less: Vec<Cell<u64>>,
    swap: Vec<Cell<u64>>,
}

impl Touches {
    fn sized(n: usize) -> Self {
        Self {
            less: vec![Cell::new(0); n],
            swap: vec![Cell::new(0); n],
        }
    }
}

impl<S: Sequence> Stat<S> {
    /// Count aggregate calls only.
    pub fn new(base: S) -> Self {
        Self {
            base,
            tallies: std::array::from_fn(|_| Cell::new(0)),
            touches: None,
        }
    }

    /// Count aggregate calls and per-position touches.
    pub fn with_positions(base: S) -> Self {
        let n = base.len();
        Self {
            base,
            tallies: std::array::from_fn(|_| Cell::new(0)),
            touches: Some(Touches::sized(n)),
        }
    }

    /// The number of times `op` has been called through this wrapper.
    pub fn count(&self, op: Op) -> u64 {
        self.tallies[op as usize].get()
    }

    /// Per-position `less` touch counts, if position tracking is on.
    ///
    /// Both arguments of each call count, so `less(i, i)` touches `i` twice.
    pub fn less_touches(&self) -> Option<Vec<u64>> {
        self.touches
            .as_ref()
            .map(|t| t.less.iter().map(Cell::get).collect())
    }

    /// Per-position `swap` touch counts, if position tracking is on.
    pub fn swap_touches(&self) -> Option<Vec<u64>> {
        self.touches
            .as_ref()
            .map(|t| t.swap.iter().map(Cell::get).collect())
    }

    /// Summary statistics over the `less` touch counts.
    ///
    /// Computed from the current counts on every call.
    pub fn less_summary(&self) -> Option<TouchSummary> {
        self.less_touches().as_deref().and_then(TouchSummary::over)
    }

    /// Summary statistics over the `swap` touch counts.
    pub fn swap_summary(&self) -> Option<TouchSummary> {
        self.swap_touches().as_deref().and_then(TouchSummary::over)
    }

    /// Unwrap, returning the base sequence.
    pub fn into_inner(self) -> S {
        self.base
    }

    fn tally(&self, op: Op) {
        let cell = &self.tallies[op as usize];
        cell.set(cell.get() + 1);
    }

    fn touch(&self, op: Op, i: usize, j: usize) {
        if let Some(touches) = &self.touches {
            let counts = match op {
                Op::Less => &touches.less,
                Op::Swap => &touches.swap,
                Op::Len => return,
            };
            counts[i].set(counts[i].get() + 1);
            counts[j].set(counts[j].get() + 1);
        }
    }
}

impl<S: Sequence> Sequence for Stat<S> {
    fn len(&self) -> usize {
        self.tally(Op::Len);
        self.base.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.tally(Op::Less);
        self.touch(Op::Less, i, j);
        self.base.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.tally(Op::Swap);
        self.touch(Op::Swap, i, j);
        self.base.swap(i, j)
    }

    fn render(&self) -> Option<String> {
        self.base.render()
    }

    fn mark(&self, i: usize, j: usize) -> Option<String> {
        self.base.mark(i, j)
    }
}

impl<S> fmt::Display for Stat<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{len:{} less:{} swap:{}}}",
            self.tallies[Op::Len as usize].get(),
            self.tallies[Op::Less as usize].get(),
            self.tallies[Op::Swap as usize].get(),
        )
    }
}

/// Summary of a per-position touch vector.
///
/// The standard deviation is the population form (divide by the number of
/// positions, not by one less).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSummary {
    /// Fewest touches any position received.
    pub min: u64,
    /// Most touches any position received.
    pub max: u64,
    /// Mean touches per position.
    pub mean: f64,
    /// Population standard deviation of touches per position.
    pub std_dev: f64,
}

impl TouchSummary {
    /// Summarize `counts`, or `None` if there are no positions.
    pub fn over(counts: &[u64]) -> Option<Self> {
        let (&min, &max) = (counts.iter().min()?, counts.iter().max()?);
        let n = counts.len() as f64;
        let mean = counts.iter().sum::<u64>() as f64 / n;
        let variance = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Some(Self {
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

impl fmt::Display for TouchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min:{} max:{} mean:{:.2} sd:{:.2}",
            self.min, self.max, self.mean, self.std_dev
        )
    }
}
