//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the evolutionary
//! loop. The defaults are the design's original constants; every one of
//! them is tunable through the builder.

/// Configuration for the evolutionary N-queens search.
///
/// Immutable for the duration of a run.
///
/// # Defaults
///
/// ```
/// use evoqueens::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 100_000);
/// assert_eq!(config.parent_pool_size, 500);
/// assert_eq!(config.max_generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoqueens::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_parent_pool_size(200)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of boards sampled for the initial population, and the base
    /// for the periodic random injection (`population_size / 100` boards
    /// every 100 generations).
    pub population_size: usize,

    /// Number of parents kept between generations; also the number of
    /// children bred per generation. Must be even (two children per
    /// mating event).
    pub parent_pool_size: usize,

    /// Generation budget before the search gives up.
    pub max_generations: usize,

    /// Base per-gene mutation probability (0.0–1.0).
    ///
    /// The schedule overrides this on its step generations; see
    /// [`schedule::mutation_rate`](crate::schedule::mutation_rate).
    pub mutation_rate: f64,

    /// Base elitism divisor: `parent_pool_size / divisor` parents survive
    /// into the next generation. Overridden on the schedule's step
    /// generations; see
    /// [`schedule::elitism_divisor`](crate::schedule::elitism_divisor).
    pub elitism_divisor: usize,

    /// Whether to sample and evaluate populations in parallel using rayon.
    ///
    /// Only effective with the `parallel` cargo feature; inert otherwise.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 100_000,
            parent_pool_size: 500,
            max_generations: 10_000,
            mutation_rate: 0.01,
            elitism_divisor: 2,
            parallel: false,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the initial population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the parent pool size.
    pub fn with_parent_pool_size(mut self, n: usize) -> Self {
        self.parent_pool_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the base mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the base elitism divisor.
    pub fn with_elitism_divisor(mut self, divisor: usize) -> Self {
        self.elitism_divisor = divisor;
        self
    }

    /// Enables or disables parallel sampling and evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for tests and small boards: everything scaled down two
    /// orders of magnitude from the defaults.
    ///
    /// - Population: 2_000, Parent pool: 100, Generations: 2_000
    pub fn fast() -> Self {
        Self {
            population_size: 2_000,
            parent_pool_size: 100,
            max_generations: 2_000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.parent_pool_size < 2 {
            return Err("parent_pool_size must be at least 2".into());
        }
        if self.parent_pool_size % 2 != 0 {
            return Err("parent_pool_size must be even (two children per mating event)".into());
        }
        if self.population_size < self.parent_pool_size {
            return Err("population_size must be at least parent_pool_size".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.elitism_divisor == 0 {
            return Err("elitism_divisor must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        Ok(())
    }
}
