//! Random board generation and population initialization.
//!
//! Every draw is independent: [`random_population`] never reuses a board,
//! and with the `parallel` feature enabled each rayon task generates from
//! its own seeded stream, so results are independent of scheduling and are
//! reassembled in index order.

use crate::board::Board;
use rand::Rng;

#[cfg(feature = "parallel")]
use crate::random::create_rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Draws a uniform random board: N independent rows in `[0, n-1]`.
pub fn random_board<R: Rng>(n: usize, rng: &mut R) -> Board {
    let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
    Board::new(rows)
}

/// Draws `size` independent random boards.
///
/// With the `parallel` feature and `parallel == true`, per-board seeds are
/// taken from `rng` sequentially and the boards are generated across the
/// rayon pool, each from its own stream. Without the feature the flag is
/// inert and generation is sequential from `rng`.
pub fn random_population<R: Rng>(
    n: usize,
    size: usize,
    parallel: bool,
    rng: &mut R,
) -> Vec<Board> {
    #[cfg(feature = "parallel")]
    if parallel {
        let seeds: Vec<u64> = (0..size).map(|_| rng.random()).collect();
        return seeds
            .into_par_iter()
            .map(|seed| random_board(n, &mut create_rng(seed)))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..size).map(|_| random_board(n, rng)).collect()
}
