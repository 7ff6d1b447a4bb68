//! Evolutionary loop execution.
//!
//! [`OcispRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → best update → repeat.

use super::chromosome::Chromosome;
use super::config::OcispConfig;
use super::population::Population;
use super::snapshot::{Snapshot, SnapshotCell};
use crate::graph::Graph;
use crate::random::create_rng;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// `max_generations` generations were completed.
    MaxGenerations,
    /// `stagnation_limit` generations passed without improvement.
    Stagnation,
    /// The wall-clock budget was used up.
    TimeLimit,
    /// The best-ever fitness reached `target_fitness`.
    TargetReached,
    /// The cancellation flag was raised.
    Cancelled,
}

/// A strict improvement of the best-ever chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    /// Generation at whose end the improvement was recorded.
    pub generation: usize,
    /// New best-ever fitness.
    pub fitness: usize,
}

/// Result of a solver run.
#[derive(Debug, Clone)]
pub struct OcispResult {
    /// The best independent set found during the entire run.
    pub best: Chromosome,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: usize,

    /// Total number of generations executed.
    pub generations: usize,

    /// Why the loop stopped.
    pub stop_reason: StopReason,

    /// Every strict improvement of the best-ever chromosome, in order.
    pub improvements: Vec<Improvement>,

    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Executes the OCISP genetic algorithm.
///
/// # Usage
///
/// ```
/// use ocisp::ga::{OcispConfig, OcispRunner};
/// use ocisp::graph::Graph;
///
/// // Clique relation {0-1, 0-2, 1-2} on 5 vertices.
/// let graph = Graph::complement(5, [(0, 1), (0, 2), (1, 2)]);
/// let config = OcispConfig::default().with_max_generations(50).with_seed(42);
/// let result = OcispRunner::run(&graph, &config);
/// assert_eq!(result.best_fitness, 3);
/// ```
pub struct OcispRunner;

impl OcispRunner {
    /// Runs the solver until a configured stopping rule fires.
    ///
    /// With an unbounded config (see [`OcispConfig::is_unbounded`]) this
    /// never returns; use [`run_with_cancel`](Self::run_with_cancel).
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`OcispConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(graph: &Graph, config: &OcispConfig) -> OcispResult {
        Self::run_with_cancel(graph, config, None)
    }

    /// Runs the solver with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the solver stops
    /// at the start of the next generation and returns the best solution
    /// found so far.
    pub fn run_with_cancel(
        graph: &Graph,
        config: &OcispConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> OcispResult {
        run_loop(graph, config, cancel.as_deref(), None)
    }

    /// Like [`run_with_cancel`](Self::run_with_cancel), additionally
    /// publishing a [`Snapshot`] into `cell` after initialization and after
    /// every generation.
    pub fn run_observed(
        graph: &Graph,
        config: &OcispConfig,
        cancel: Option<Arc<AtomicBool>>,
        cell: &SnapshotCell,
    ) -> OcispResult {
        run_loop(graph, config, cancel.as_deref(), Some(cell))
    }
}

fn run_loop(
    graph: &Graph,
    config: &OcispConfig,
    cancel: Option<&AtomicBool>,
    cell: Option<&SnapshotCell>,
) -> OcispResult {
    config.validate().expect("invalid OcispConfig");

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = create_rng(seed);
    let started = Instant::now();
    let time_limit = config.time_limit_ms.map(Duration::from_millis);

    info!(
        "starting OCISP solver: {} vertices, {} edges, population {}, seed {}",
        graph.node_count(),
        graph.edge_count(),
        config.population_size,
        seed
    );

    // Init
    let mut population = Population::initial(graph, config.population_size, &mut rng);
    let mut best = Chromosome::empty(graph.node_count());
    let mut improvements = Vec::new();
    publish(cell, 0, &population, &best);

    let mut generation = 0usize;
    let mut stagnation_counter = 0usize;

    let stop_reason = loop {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            break StopReason::Cancelled;
        }
        if config.max_generations.is_some_and(|max| generation >= max) {
            break StopReason::MaxGenerations;
        }
        if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
            break StopReason::TimeLimit;
        }

        population.select();
        let mut next = population.crossover(graph, &best, config, &mut rng);
        next.mutate(graph, config.mutation_rate, &mut rng);
        population = next;
        generation += 1;

        if population.update_best(&mut best) {
            stagnation_counter = 0;
            improvements.push(Improvement {
                generation,
                fitness: best.fitness(),
            });
            info!("generation {generation}: new best fitness {}", best.fitness());
        } else {
            stagnation_counter += 1;
        }

        debug!(
            "generation {generation}: current {}, best {}",
            population.max_fitness(),
            best.fitness()
        );
        publish(cell, generation, &population, &best);

        if config.target_fitness.is_some_and(|t| best.fitness() >= t) {
            break StopReason::TargetReached;
        }
        if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
            break StopReason::Stagnation;
        }
    };

    let elapsed = started.elapsed();
    info!(
        "stopped after {generation} generations ({stop_reason:?}) in {:.3}s, best fitness {}",
        elapsed.as_secs_f64(),
        best.fitness()
    );

    OcispResult {
        best_fitness: best.fitness(),
        best,
        generations: generation,
        stop_reason,
        improvements,
        elapsed,
    }
}

fn publish(cell: Option<&SnapshotCell>, generation: usize, population: &Population, best: &Chromosome) {
    if let Some(cell) = cell {
        cell.store(Snapshot {
            generation,
            population: population.members().to_vec(),
            current_fitness: population.max_fitness(),
            best: best.clone(),
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::RepairPolicy;
    use crate::random::create_rng;
    use rand::Rng;

    /// Clique relation with a planted clique on `0..k` plus random extra
    /// declared edges, complemented into the working graph.
    fn planted_graph(n: usize, k: usize, density: f64, seed: u64) -> Graph {
        let mut rng = create_rng(seed);
        let mut declared = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if (u < k && v < k) || rng.random_bool(density) {
                    declared.push((u, v));
                }
            }
        }
        Graph::complement(n, declared)
    }

    #[test]
    fn test_four_vertices_single_declared_edge() {
        // Working graph: every pair adjacent except 0-1, so the optimum is {0, 1}.
        let graph = Graph::complement(4, [(0, 1)]);
        let config = OcispConfig::default()
            .with_max_generations(100)
            .with_seed(42);

        let result = OcispRunner::run(&graph, &config);

        assert_eq!(result.best_fitness, 2);
        assert_eq!(result.best.vertices(), vec![0, 1]);
        assert_eq!(result.best.display_vertices(), vec![1, 2]);
        assert_eq!(result.stop_reason, StopReason::MaxGenerations);
    }

    #[test]
    fn test_run_on_induced_subgraph() {
        let graph = Graph::complement(8, [(5, 7)]).induced_subgraph(&[5, 6, 7], true);
        let config = OcispConfig::default()
            .with_max_generations(20)
            .with_seed(1);

        let result = OcispRunner::run(&graph, &config);

        assert_eq!(result.best.len(), 3);
        assert_eq!(result.best_fitness, 2);
        assert_eq!(graph.global_ids(&result.best.vertices()), vec![5, 7]);
    }

    #[test]
    fn test_all_pairs_declared_gives_edgeless_graph() {
        let declared: Vec<(usize, usize)> = (0..5)
            .flat_map(|u| ((u + 1)..5).map(move |v| (u, v)))
            .collect();
        let graph = Graph::complement(5, declared);
        assert_eq!(graph.edge_count(), 0);

        let config = OcispConfig::default()
            .with_target_fitness(5)
            .with_max_generations(50)
            .with_seed(7);
        let result = OcispRunner::run(&graph, &config);

        assert_eq!(result.best_fitness, 5);
        assert_eq!(result.stop_reason, StopReason::TargetReached);
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_planted_clique_is_approached() {
        let graph = planted_graph(24, 8, 0.2, 11);
        let config = OcispConfig::default()
            .with_max_generations(300)
            .with_seed(42);

        let result = OcispRunner::run(&graph, &config);

        assert!(result.best.is_independent(&graph));
        assert!(
            result.best_fitness >= 6,
            "expected fitness >= 6 with a planted 8-clique, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_best_is_monotone_and_independent() {
        let graph = planted_graph(30, 6, 0.3, 5);
        let config = OcispConfig::default()
            .with_max_generations(80)
            .with_mutation_rate(0.05)
            .with_seed(3);

        let result = OcispRunner::run(&graph, &config);

        for window in result.improvements.windows(2) {
            assert!(
                window[1].fitness > window[0].fitness,
                "improvements must be strictly increasing: {:?}",
                window
            );
            assert!(window[1].generation > window[0].generation);
        }
        assert_eq!(
            result.improvements.last().map(|i| i.fitness),
            Some(result.best_fitness)
        );
        assert!(result.best.is_independent(&graph));
    }

    #[test]
    fn test_observed_state_every_generation() {
        let graph = planted_graph(20, 5, 0.3, 8);
        let config = OcispConfig::default()
            .with_max_generations(40)
            .with_seed(1);

        // Drive generations by hand to inspect every intermediate population.
        let mut rng = create_rng(1);
        let mut population = Population::initial(&graph, config.population_size, &mut rng);
        let mut best = Chromosome::empty(graph.node_count());
        let mut previous = 0;
        for _ in 0..40 {
            population.select();
            let mut next = population.crossover(&graph, &best, &config, &mut rng);
            next.mutate(&graph, config.mutation_rate, &mut rng);
            population = next;
            assert_eq!(population.len(), config.population_size);
            for c in population.members() {
                assert!(c.is_independent(&graph));
            }
            let improved = population.update_best(&mut best);
            assert_eq!(improved, best.fitness() > previous);
            assert!(best.fitness() >= previous);
            previous = best.fitness();
        }

        let cell = SnapshotCell::new();
        let result = OcispRunner::run_observed(&graph, &config, None, &cell);
        let snap = cell.load();
        assert_eq!(snap.generation, result.generations);
        assert_eq!(snap.population.len(), config.population_size);
        assert_eq!(snap.best, result.best);
        assert!(snap.current_fitness <= snap.best_fitness());
    }

    #[test]
    fn test_same_seed_same_result() {
        let graph = planted_graph(25, 6, 0.25, 4);
        let config = OcispConfig::default()
            .with_max_generations(30)
            .with_seed(99);

        let a = OcispRunner::run(&graph, &config);
        let b = OcispRunner::run(&graph, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.improvements, b.improvements);
    }

    #[test]
    fn test_stagnation_termination() {
        // Edgeless graph: the optimum is found at once, then nothing improves.
        let graph = Graph::complement(6, (0..6).flat_map(|u| ((u + 1)..6).map(move |v| (u, v))));
        let config = OcispConfig::default()
            .with_max_generations(1000)
            .with_stagnation_limit(10)
            .with_seed(42);

        let result = OcispRunner::run(&graph, &config);

        assert_eq!(result.stop_reason, StopReason::Stagnation);
        assert_eq!(result.generations, 11);
    }

    #[test]
    fn test_time_limit_termination() {
        let graph = planted_graph(20, 5, 0.3, 2);
        let config = OcispConfig::default().with_time_limit_ms(20).with_seed(42);

        let result = OcispRunner::run(&graph, &config);

        assert_eq!(result.stop_reason, StopReason::TimeLimit);
        assert!(result.elapsed >= Duration::from_millis(20));
    }

    #[test]
    fn test_cancellation() {
        let graph = planted_graph(20, 5, 0.3, 2);
        // No stopping rule at all: continuous-improvement mode.
        let config = OcispConfig::default().with_seed(42);
        assert!(config.is_unbounded());

        let cancel = Arc::new(AtomicBool::new(false));

        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result = OcispRunner::run_with_cancel(&graph, &config, Some(cancel));

        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert!(result.best.is_independent(&graph));
    }

    #[test]
    fn test_cancel_before_start() {
        let graph = Graph::complete(4);
        let config = OcispConfig::default().with_seed(1);
        let cancel = Arc::new(AtomicBool::new(true));

        let result = OcispRunner::run_with_cancel(&graph, &config, Some(cancel));

        assert_eq!(result.stop_reason, StopReason::Cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.best_fitness, 0);
        assert!(result.improvements.is_empty());
    }

    #[test]
    fn test_selected_only_repair_runs() {
        let graph = planted_graph(20, 6, 0.2, 6);
        let config = OcispConfig::default()
            .with_max_generations(50)
            .with_repair_policy(RepairPolicy::SelectedOnly)
            .with_seed(5);

        let result = OcispRunner::run(&graph, &config);

        assert!(result.best.is_independent(&graph));
        assert!(result.best_fitness >= 3);
    }

    #[test]
    #[should_panic(expected = "invalid OcispConfig")]
    fn test_invalid_config_panics() {
        let graph = Graph::complete(3);
        let config = OcispConfig::default().with_population_size(3);
        OcispRunner::run(&graph, &config);
    }
}
