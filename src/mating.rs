//! Parent selection and crossover.
//!
//! Selection is fitness-proportionate: a parent's chance of being drawn is
//! its share of the pool's total score, implemented as a cumulative-weight
//! scan. Pairs are required to differ gene-wise so that crossover has
//! material to work with; a pool that has converged to a single genotype
//! cannot satisfy that, so the distinct-pair search is bounded and falls
//! back to an identical pair instead of spinning forever.
//!
//! Crossover is single-point: children swap tails at a cut drawn from
//! `[1, N-1]`, so each child always has exactly N genes.

use crate::board::Board;
use rand::Rng;

/// Attempts to find a gene-wise distinct second parent before giving up.
///
/// When the bound is hit the pool is degenerate (effectively one genotype)
/// and [`select_distinct_pair`] tolerates an identical pair rather than
/// looping forever.
pub const DISTINCT_PAIR_ATTEMPTS: usize = 64;

/// Draws one parent, weighted by cached score.
///
/// Members with score 0 are never drawn while the pool's total score is
/// positive. When the total is not positive (every member fully
/// conflicted), weighted sampling degenerates and the draw falls back to
/// uniform.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn select_parent<'a, R: Rng>(pool: &'a [Board], rng: &mut R) -> &'a Board {
    assert!(!pool.is_empty(), "cannot select from an empty pool");

    let total: f64 = pool.iter().map(|board| board.score()).sum();
    if total <= 0.0 {
        return &pool[rng.random_range(0..pool.len())];
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for board in pool {
        cumulative += board.score();
        if cumulative > threshold {
            return board;
        }
    }

    &pool[pool.len() - 1] // floating-point fallback
}

/// Draws a parent pair whose genes differ, within a bounded retry count.
///
/// The first parent is drawn once; the second is re-drawn up to
/// [`DISTINCT_PAIR_ATTEMPTS`] times until it is not element-wise identical
/// to the first. A degenerate pool exhausts the bound and yields an
/// identical pair; crossover then just reproduces the genotype.
///
/// # Panics
/// Panics if `pool` is empty.
pub fn select_distinct_pair<'a, R: Rng>(pool: &'a [Board], rng: &mut R) -> (&'a Board, &'a Board) {
    let first = select_parent(pool, rng);
    let mut second = select_parent(pool, rng);

    let mut attempts = 0;
    while second.rows() == first.rows() && attempts < DISTINCT_PAIR_ATTEMPTS {
        second = select_parent(pool, rng);
        attempts += 1;
    }

    (first, second)
}

/// Single-point crossover at `cut`.
///
/// `child1` takes `parent1`'s head and `parent2`'s tail; `child2` is the
/// mirror. Children are unevaluated.
///
/// # Panics
/// Panics if the parents differ in size or `cut` is not in `[1, N-1]`.
pub fn crossover(parent1: &Board, parent2: &Board, cut: usize) -> (Board, Board) {
    let n = parent1.size();
    assert_eq!(n, parent2.size(), "parents must have equal size");
    assert!(cut >= 1 && cut < n, "cut must be in [1, N-1]");

    let mut rows1 = Vec::with_capacity(n);
    rows1.extend_from_slice(&parent1.rows()[..cut]);
    rows1.extend_from_slice(&parent2.rows()[cut..]);

    let mut rows2 = Vec::with_capacity(n);
    rows2.extend_from_slice(&parent2.rows()[..cut]);
    rows2.extend_from_slice(&parent1.rows()[cut..]);

    (Board::new(rows1), Board::new(rows2))
}

// ============================================================================
// Tests
// ============================================================================
