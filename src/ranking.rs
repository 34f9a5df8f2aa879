//! Population scoring and ranking.
//!
//! Ranking is the hot path of the search: one conflict count is O(N²), and
//! a ranking pass touches the whole candidate buffer. Two things keep it
//! cheap: boards cache their score, so members that survived from a previous
//! generation (elites) are never re-scored, and with the `parallel` feature
//! the fresh members can be evaluated across the rayon pool. Evaluation is
//! pure, so the results are independent of scheduling.

use crate::board::Board;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores every member whose cache is unset.
///
/// Already-scored members are left untouched.
pub fn ensure_scored(population: &mut [Board], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        population
            .par_iter_mut()
            .filter(|board| !board.is_scored())
            .for_each(|board| {
                let score = board.evaluate();
                board.set_score(score);
            });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for board in population.iter_mut() {
        if !board.is_scored() {
            let score = board.evaluate();
            board.set_score(score);
        }
    }
}

/// Scores and sorts a population by descending score (best first).
///
/// Scores are never NaN once set, so the comparison is a total order and
/// truncation to the top K is deterministic for a given ordering.
pub fn rank(population: &mut [Board], parallel: bool) {
    ensure_scored(population, parallel);
    population.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
