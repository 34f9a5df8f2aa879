//! Per-gene mutation with guaranteed change.
//!
//! Each gene (a column's row value) is independently tested against the
//! supplied rate; a triggered gene is replaced by a row drawn uniformly
//! from the n−1 *other* rows. Drawing from `[0, n-2]` and shifting by one
//! at or above the current value makes the change certain in a single
//! draw, with every other row equally likely.
//!
//! The rate always comes from the schedule, never from a literal here.

use crate::board::Board;
use rand::Rng;

/// Mutates each gene of `board` with probability `rate`.
///
/// A triggered gene is guaranteed to actually change. Boards with fewer
/// than two rows have no alternative value and are left untouched.
pub fn mutate_board<R: Rng>(board: &mut Board, rate: f64, rng: &mut R) {
    let n = board.size();
    if n < 2 {
        return;
    }
    for column in 0..n {
        if rng.random_range(0.0..1.0) < rate {
            let current = board.row(column);
            let drawn = rng.random_range(0..n - 1);
            let replacement = if drawn >= current { drawn + 1 } else { drawn };
            board.set_row(column, replacement);
        }
    }
}

/// Mutates every board in a slice.
///
/// The evolution loop passes the candidate buffer's first
/// `parent_pool_size` slots here.
pub fn mutate_pool<R: Rng>(boards: &mut [Board], rate: f64, rng: &mut R) {
    for board in boards.iter_mut() {
        mutate_board(board, rate, rng);
    }
}
