//! Evolutionary N-queens solver.
//!
//! Searches for a placement of N non-attacking queens on an N×N board
//! with a genetic algorithm rather than backtracking: fitness-weighted
//! parent selection, single-point crossover, guaranteed-change mutation,
//! split elitism, periodic random injection, and deterministic schedules
//! that pulse the mutation rate and elitism ratio over generations.
//!
//! # Components
//!
//! - [`board`]: the board value type, conflict counting, evaluation, and
//!   textual rendering.
//! - [`sampler`]: random boards and bulk population initialization.
//! - [`ranking`]: cached scoring and descending sort of a population.
//! - [`mating`]: weighted parent selection, bounded distinct-pair search,
//!   single-point crossover.
//! - [`mutation`]: per-gene guaranteed-change mutation.
//! - [`schedule`]: pure step functions of the generation counter.
//! - [`runner`]: the evolution loop: [`SearchState`], [`SearchRunner`].
//!
//! # Example
//!
//! ```
//! use evoqueens::{SearchConfig, SearchRunner};
//!
//! let config = SearchConfig::fast().with_seed(42);
//! let result = SearchRunner::run(5, &config);
//! if result.solved {
//!     print!("{}", result.board.render());
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-backed population sampling and evaluation.
//! - `serde`: `Serialize`/`Deserialize` on configuration and results.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

pub mod board;
pub mod config;
pub mod mating;
pub mod mutation;
pub mod random;
pub mod ranking;
pub mod runner;
pub mod sampler;
pub mod schedule;

pub use board::{conflicts_between, max_score, Board};
pub use config::SearchConfig;
pub use runner::{SearchResult, SearchRunner, SearchState, StepOutcome};
