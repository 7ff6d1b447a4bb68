//! Solver configuration.
//!
//! [`OcispConfig`] holds all parameters that control the evolutionary loop.

/// How a provisional E-child member is repaired.
///
/// The crossover computes E-child membership bit by bit from both parents
/// and the O-child; a provisional member is then checked against the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepairPolicy {
    /// Drop the vertex if it has an edge to *any* other vertex of the graph.
    ///
    /// Only isolated vertices survive. This is the historical behaviour and
    /// the default.
    #[default]
    AnyEdge,

    /// Drop the vertex only if it is adjacent to a lower-indexed vertex
    /// already kept in the E-child.
    SelectedOnly,
}

/// Configuration for the OCISP genetic algorithm.
///
/// With every stopping option left unset the solver runs in
/// continuous-improvement mode: it keeps evolving until cancelled.
///
/// # Defaults
///
/// ```
/// use ocisp::ga::OcispConfig;
///
/// let config = OcispConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert!(config.max_generations.is_none());
/// assert!(config.is_unbounded());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ocisp::ga::{OcispConfig, RepairPolicy};
///
/// let config = OcispConfig::default()
///     .with_population_size(40)
///     .with_mutation_rate(0.01)
///     .with_max_generations(500)
///     .with_repair_policy(RepairPolicy::SelectedOnly)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OcispConfig {
    /// Number of chromosomes per generation.
    ///
    /// Must be even: ranked individuals are paired `2i` with `2i + 1`.
    pub population_size: usize,

    /// Per-bit flip probability of the mutation operator (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability that the best-ever chromosome overwrites the last slot of
    /// the new population (0.0–1.0).
    pub elitism_probability: f64,

    /// Maximum number of generations. `None` means no limit.
    pub max_generations: Option<usize>,

    /// Number of consecutive generations without a strictly better best-ever
    /// chromosome before stopping.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed it by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Stop as soon as the best-ever fitness reaches this value.
    pub target_fitness: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Repair applied to provisional E-child members.
    pub echild_repair: RepairPolicy,
}

impl Default for OcispConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            mutation_rate: 0.002,
            elitism_probability: 0.5,
            max_generations: None,
            stagnation_limit: 0,
            time_limit_ms: None,
            target_fitness: None,
            seed: None,
            echild_repair: RepairPolicy::AnyEdge,
        }
    }
}

impl OcispConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elitism probability.
    pub fn with_elitism_probability(mut self, p: f64) -> Self {
        self.elitism_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = Some(n);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Stops once the best-ever fitness reaches `fitness`.
    pub fn with_target_fitness(mut self, fitness: usize) -> Self {
        self.target_fitness = Some(fitness);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the E-child repair policy.
    pub fn with_repair_policy(mut self, policy: RepairPolicy) -> Self {
        self.echild_repair = policy;
        self
    }

    /// Returns `true` if no stopping rule is configured.
    pub fn is_unbounded(&self) -> bool {
        self.max_generations.is_none()
            && self.stagnation_limit == 0
            && self.time_limit_ms.is_none()
            && self.target_fitness.is_none()
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.population_size % 2 != 0 {
            return Err("population_size must be even".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.elitism_probability) {
            return Err("elitism_probability must be within [0, 1]".into());
        }
        if self.max_generations == Some(0) {
            return Err("max_generations must be at least 1 or None".into());
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
