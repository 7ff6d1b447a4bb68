use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use flexi_logger::Logger;
use log::{debug, info, warn};
use ocisp::dimacs;
use ocisp::ga::{OcispConfig, OcispRunner, RepairPolicy, SnapshotCell};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Searches for a maximum clique of a DIMACS benchmark by evolving
/// independent sets of its complement graph.
///
/// Without any stopping option the search keeps improving until Ctrl-C,
/// after which the best set found so far is printed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Benchmark file (`.clq`)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Chromosomes per generation (even)
    #[arg(short, long, value_name = "NUM", default_value = "20")]
    population_size: usize,

    /// Per-bit mutation probability
    #[arg(short, long, value_name = "RATE", default_value = "0.002")]
    mutation_rate: f64,

    /// Probability that the best-ever set survives into the next generation
    #[arg(short, long, value_name = "PROB", default_value = "0.5")]
    elitism_probability: f64,

    /// Stop after this many generations
    #[arg(short = 'g', long, value_name = "NUM")]
    max_generations: Option<usize>,

    /// Stop after this many generations without improvement
    #[arg(long, value_name = "NUM")]
    stagnation_limit: Option<usize>,

    /// Stop after this many milliseconds
    #[arg(short, long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Stop once a set of this size is found
    #[arg(long, value_name = "SIZE")]
    target_fitness: Option<usize>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// E-child repair policy
    #[arg(long, value_enum, default_value = "any-edge")]
    repair: Repair,

    /// Progress report interval
    #[arg(short, long, value_name = "MS", default_value = "500")]
    report_interval_ms: u64,

    /// Log level
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Repair {
    AnyEdge,
    SelectedOnly,
}

impl From<Repair> for RepairPolicy {
    fn from(r: Repair) -> Self {
        match r {
            Repair::AnyEdge => RepairPolicy::AnyEdge,
            Repair::SelectedOnly => RepairPolicy::SelectedOnly,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _logger = Logger::try_with_env_or_str(&args.log_level)
        .context("invalid log level")?
        .start()
        .context("failed to start logger")?;

    let meta = dimacs::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    println!("Nodes: {}", meta.nodes);
    println!("Edges: {}", meta.edges);

    let mut config = OcispConfig::default()
        .with_population_size(args.population_size)
        .with_mutation_rate(args.mutation_rate)
        .with_elitism_probability(args.elitism_probability)
        .with_repair_policy(args.repair.into());
    config.max_generations = args.max_generations;
    config.stagnation_limit = args.stagnation_limit.unwrap_or(0);
    config.time_limit_ms = args.time_limit_ms;
    config.target_fitness = args.target_fitness;
    config.seed = args.seed;
    if let Err(msg) = config.validate() {
        bail!("invalid configuration: {msg}");
    }
    if config.is_unbounded() {
        warn!("no stopping rule given; running until Ctrl-C");
    }

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = Arc::clone(&cancel);
        ctrlc::set_handler(move || cancel.store(true, Ordering::Relaxed))
            .context("failed to install Ctrl-C handler")?;
    }

    let cell = Arc::new(SnapshotCell::new());
    let graph = meta.graph;

    let solver = {
        let cell = Arc::clone(&cell);
        thread::Builder::new()
            .name("ocisp-solver".into())
            .spawn(move || OcispRunner::run_observed(&graph, &config, Some(cancel), &cell))
            .context("failed to spawn solver thread")?
    };

    let interval = Duration::from_millis(args.report_interval_ms.max(1));
    let mut last_reported = None;
    while !solver.is_finished() {
        thread::sleep(interval);
        let snap = cell.load();
        if last_reported != Some(snap.generation) {
            info!(
                "generation {}: current {}, best {}, selected {:?}",
                snap.generation,
                snap.current_fitness,
                snap.best_fitness(),
                snap.best.display_vertices()
            );
            for (rank, member) in snap.population.iter().enumerate() {
                debug!("  #{rank}: {:?}", member.display_vertices());
            }
            last_reported = Some(snap.generation);
        }
    }

    let result = match solver.join() {
        Ok(result) => result,
        Err(_) => bail!("solver thread panicked"),
    };

    println!("Generations: {}", result.generations);
    println!("Stopped: {:?}", result.stop_reason);
    println!("Best Evaluate: {}", result.best_fitness);
    println!("Selected: {:?}", result.best.display_vertices());
    Ok(())
}
