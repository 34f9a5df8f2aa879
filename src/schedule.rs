//! Adaptive parameter schedules.
//!
//! The mutation rate and elitism divisor vary over the run as discrete
//! step functions of the generation counter. The steps are heuristic
//! pulses that alternately tighten elitism and stir the pool, and the
//! branch order matters: the moduli overlap (every 300th generation is
//! also a 100th), and the *first* satisfied branch wins, not the most
//! specific. The functions are pure and evaluated once per generation.

/// Elitism divisor for generation `generation`.
///
/// `parent_pool_size / divisor` parents are carried into the next
/// generation as elites. Returns 10 on every 300th generation, else 4 on
/// every 200th, else 2 on every 100th, else `base`.
pub fn elitism_divisor(generation: usize, base: usize) -> usize {
    if generation % 300 == 0 {
        10
    } else if generation % 200 == 0 {
        4
    } else if generation % 100 == 0 {
        2
    } else {
        base
    }
}

/// Per-gene mutation rate for generation `generation`.
///
/// Returns 0.01 on every 3000th generation, else 0.05 on every 2000th;
/// on other 1000th generations, 0.1 when also divisible by 200, else 0.02
/// when also divisible by 100. Everywhere else, `base`.
pub fn mutation_rate(generation: usize, base: f64) -> f64 {
    if generation % 3000 == 0 {
        0.01
    } else if generation % 2000 == 0 {
        0.05
    } else if generation % 1000 == 0 {
        if generation % 200 == 0 {
            0.1
        } else if generation % 100 == 0 {
            0.02
        } else {
            base
        }
    } else {
        base
    }
}

/// Number of elites carried for a pool of `parent_pool_size` at `divisor`.
pub fn elite_count(parent_pool_size: usize, divisor: usize) -> usize {
    parent_pool_size / divisor
}
