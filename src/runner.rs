//! Evolutionary loop execution.
//!
//! [`SearchState`] owns everything that survives between generations (the
//! ranked parent pool, the tracked working board, and the generation
//! counter) and advances one generation per [`step`](SearchState::step),
//! so a single generation can be tested without running a full search.
//! [`SearchRunner`] drives the loop to termination and reports progress to
//! an observer callback.
//!
//! # Per-generation sequence
//!
//! 1. Increment the generation counter; the runner reports the working
//!    board's score for this generation before the step executes.
//! 2. Budget check → [`StepOutcome::Exhausted`], surfacing the best-ranked
//!    parent as the final board.
//! 3. Score the parent pool (cached scores are reused).
//! 4. Breed `parent_pool_size` children from weighted distinct pairs via
//!    single-point crossover at a per-event random cut.
//! 5. Look up the elitism divisor and mutation rate from the schedule.
//! 6. Append the bottom half of the elites to the candidate buffer.
//! 7. Mutate the buffer's first `parent_pool_size` slots.
//! 8. Every 100 generations, inject `population_size / 100` fresh random
//!    boards to escape local optima.
//! 9. Append the top half of the elites unchanged.
//! 10. Rank the full buffer; the top `parent_pool_size` become the next
//!     parent pool.
//! 11. Sweep the ranked pool best-to-worst through the working board,
//!     re-evaluating each copy and stopping the instant it is optimal.
//! 12. [`StepOutcome::Solved`] if optimal, else continue.

use crate::board::{max_score, Board};
use crate::config::SearchConfig;
use crate::random::create_rng;
use crate::{mating, mutation, ranking, sampler, schedule};
use rand::Rng;

/// Generations between random-board injections.
const INJECTION_INTERVAL: usize = 100;

/// Outcome of advancing the search by one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The generation completed without finding an optimal board.
    Continue,
    /// The working board reached the optimal score.
    Solved,
    /// The generation budget was reached without a solution.
    Exhausted,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Final state of the working board. Optimal when `solved`; otherwise
    /// the best board in the final parent pool.
    pub board: Board,

    /// Score of the final board (same as `board.score()`).
    pub score: f64,

    /// Whether an optimal (conflict-free) board was found.
    pub solved: bool,

    /// Number of generations executed.
    pub generations: usize,

    /// Working-board score reported at the start of each generation.
    pub score_history: Vec<f64>,
}

/// Mutable state of a running search.
///
/// All run-scoped state lives here rather than in ambient globals: the
/// parent pool (ranked best-first between steps), the working board that
/// progress is reported against, and the generation counter.
#[derive(Debug, Clone)]
pub struct SearchState {
    generation: usize,
    parents: Vec<Board>,
    working: Board,
}

impl SearchState {
    /// Initializes a search: samples and ranks `population_size` random
    /// boards, keeps the top `parent_pool_size` as the first parent pool,
    /// and samples the tracked working board.
    ///
    /// # Panics
    /// Panics if `n < 2`; callers validate the user-facing 4..=100 range
    /// before the core is reached.
    pub fn new<R: Rng>(n: usize, config: &SearchConfig, rng: &mut R) -> Self {
        assert!(n >= 2, "board size must be at least 2");

        let working = sampler::random_board(n, rng);
        let mut population =
            sampler::random_population(n, config.population_size, config.parallel, rng);
        ranking::rank(&mut population, config.parallel);
        population.truncate(config.parent_pool_size);

        let mut state = Self {
            generation: 0,
            parents: population,
            working,
        };
        let score = state.working.evaluate();
        state.working.set_score(score);
        state
    }

    /// Generations executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The tracked working board.
    pub fn working(&self) -> &Board {
        &self.working
    }

    /// The current parent pool, ranked best-first.
    pub fn parents(&self) -> &[Board] {
        &self.parents
    }

    /// Advances the search by one generation.
    pub fn step<R: Rng>(&mut self, config: &SearchConfig, rng: &mut R) -> StepOutcome {
        let pool = config.parent_pool_size;
        let n = self.working.size();
        let optimum = max_score(n);

        self.generation += 1;
        if self.generation >= config.max_generations {
            // Surface the best-ranked parent as the final board
            self.working = self.parents[0].clone();
            return StepOutcome::Exhausted;
        }

        ranking::ensure_scored(&mut self.parents, config.parallel);

        // Breed: two children per mating event, pool children total
        let mut buffer: Vec<Board> = Vec::with_capacity(pool * 2);
        for _ in 0..pool / 2 {
            let cut = rng.random_range(1..n);
            let (parent1, parent2) = mating::select_distinct_pair(&self.parents, rng);
            let (child1, child2) = mating::crossover(parent1, parent2, cut);
            buffer.push(child1);
            buffer.push(child2);
        }

        let divisor = schedule::elitism_divisor(self.generation, config.elitism_divisor);
        let rate = schedule::mutation_rate(self.generation, config.mutation_rate);
        let elites = schedule::elite_count(pool, divisor);

        // Bottom elite half enters before the mutation pass, top half after
        for board in &self.parents[elites / 2..elites] {
            buffer.push(board.clone());
        }

        mutation::mutate_pool(&mut buffer[..pool], rate, rng);

        if self.generation % INJECTION_INTERVAL == 0 {
            let injected = config.population_size / INJECTION_INTERVAL;
            buffer.extend(sampler::random_population(n, injected, config.parallel, rng));
        }

        for board in &self.parents[..elites / 2] {
            buffer.push(board.clone());
        }

        ranking::rank(&mut buffer, config.parallel);
        buffer.truncate(pool);

        // Sweep best-to-worst through the working board
        for candidate in &buffer {
            self.working.copy_rows_from(candidate);
            let score = self.working.evaluate();
            self.working.set_score(score);
            if self.working.score() >= optimum {
                break;
            }
        }

        if self.working.score() >= optimum {
            return StepOutcome::Solved;
        }

        self.parents = buffer;
        StepOutcome::Continue
    }
}

/// Executes the evolutionary search.
///
/// # Usage
///
/// ```
/// use evoqueens::{SearchConfig, SearchRunner};
///
/// let config = SearchConfig::fast().with_seed(42);
/// let result = SearchRunner::run(6, &config);
/// if result.solved {
///     assert_eq!(result.board.count_conflicts(), 0);
/// }
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search for a board of `n` queens.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error).
    pub fn run(n: usize, config: &SearchConfig) -> SearchResult {
        Self::run_with_observer(n, config, |_, _| {})
    }

    /// Runs the search, reporting `(generation, working_board_score)` to
    /// `observer` once per generation, before the generation executes.
    pub fn run_with_observer<F>(n: usize, config: &SearchConfig, mut observer: F) -> SearchResult
    where
        F: FnMut(usize, f64),
    {
        config.validate().expect("invalid SearchConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut state = SearchState::new(n, config, &mut rng);
        let mut score_history = Vec::new();

        loop {
            observer(state.generation() + 1, state.working().score());
            score_history.push(state.working().score());

            match state.step(config, &mut rng) {
                StepOutcome::Continue => {}
                outcome => {
                    let board = state.working().clone();
                    return SearchResult {
                        score: board.score(),
                        board,
                        solved: outcome == StepOutcome::Solved,
                        generations: state.generation(),
                        score_history,
                    };
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
