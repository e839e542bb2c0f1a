// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! In-place positional transforms built from pairwise swaps.
//!
//! Every function here is stateless, allocates nothing (except the shuffle's
//! permutation draw), and touches the sequence only through
//! [`Sequence::swap`]. None of them compare elements, so they work on any
//! capability implementor regardless of its ordering.
//!
//! The interesting one is [`skew`]: a recursive, buffer-free block move that
//! [`rotate`] reduces to. The recursion keeps a single rightward code path
//! and terminates because every split strictly shrinks either the block or
//! the gap it must cross.

use crate::seq::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Invert the element order of `seq` in place.
///
/// Swaps position `i` with position `n-1-i` for `i` in `[0, n/2)`. Applying
/// it twice restores the original order.
pub fn reverse<S: Sequence + ?Sized>(seq: &mut S) {
    let n = seq.len();
    for i in 0..n / 2 {
        seq.swap(i, n - i - 1);
    }
}

/// Cycle `seq` by `d` positions to the right.
///
/// The `d` rightmost elements wrap around to the front. A negative `d`
/// shifts leftward. Any `d` is accepted; it is reduced into `[0, n)` first.
/// An empty sequence is left alone.
pub fn rotate<S: Sequence + ?Sized>(seq: &mut S, d: isize) {
    let n = seq.len();
    if n == 0 {
        return;
    }
    let d = d.rem_euclid(n as isize) as usize;
    trace!(n, d, "rotate");
    skew(seq, 0, d, n - d);
}

/// Slide the group of `k` consecutive elements whose minimum index is `i` so
/// that its minimum index becomes `j`.
///
/// If `j > i` the group slides toward larger indices, if `j < i` toward
/// smaller ones. The elements between the group's old and new positions
/// shift the other way to fill the vacated space, keeping their relative
/// order. No auxiliary storage is used; the move is performed entirely with
/// pairwise swaps.
///
/// `i`, `j`, and `k` must be chosen so that both the source range
/// `[i, i+k)` and the destination range `[j, j+k)` lie within
/// `[0, seq.len())`.
pub fn skew<S: Sequence + ?Sized>(seq: &mut S, i: usize, j: usize, k: usize) {
    if k == 0 || i == j {
        return;
    }
    // Reduce the leftward case to the rightward one: sliding [i, i+k) left
    // to j displaces the i-j elements at [j, i), which is the same move as
    // sliding that group right to j+k.
    let (i, j, k) = if j < i { (j, j + k, i - j) } else { (i, j, k) };
    if j - i < k {
        // Block wider than the gap: halve the block and move each half.
        // The higher half goes first so the lower half's target is intact.
        let p = k / 2;
        let q = k - p;
        skew(seq, i + p, j + p, q);
        skew(seq, i, j, p);
    } else {
        let r = (j - i) % k;
        if r != 0 {
            // Gap not a multiple of the block size: stop the slide at the
            // remainder boundary, then finish from there.
            skew(seq, i, j - r, k);
            skew(seq, j - r, j, k);
        } else {
            // Gap is an exact multiple of k: the block leapfrogs into place
            // one pairwise exchange at a time.
            let mut i = i;
            while i < j {
                seq.swap(i, i + k);
                i += 1;
            }
        }
    }
}

/// Randomly permute `seq` using the thread-local generator.
///
/// See [`shuffle_with`] for the entropy caveat.
pub fn shuffle<S: Sequence + ?Sized>(seq: &mut S) {
    shuffle_with(seq, &mut rand::thread_rng());
}

/// Randomly permute `seq`, drawing the permutation from `rng`.
///
/// Draws one random permutation `p` of `[0, n)` and applies
/// `swap(i, p[i])` for each `i` in order. Applying `p` position by position
/// composes successive transpositions rather than realizing `p` itself, so
/// the resulting arrangement is not a uniform draw over all permutations.
/// Treat the randomness as best-effort scrambling, not as uniform and
/// certainly not as cryptographic.
pub fn shuffle_with<S, R>(seq: &mut S, rng: &mut R)
where
    S: Sequence + ?Sized,
    R: Rng + ?Sized,
{
    let n = seq.len();
    trace!(n, "shuffle");
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    for (i, j) in perm.into_iter().enumerate() {
        seq.swap(i, j);
    }
}
