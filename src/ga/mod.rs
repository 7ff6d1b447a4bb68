//! Genetic algorithm for maximum independent sets.
//!
//! Chromosomes are membership bitmasks over the working graph and every
//! operator keeps them independent. Each generation the population is ranked
//! by fitness, consecutive pairs are recombined by the matching-based
//! crossover, every child is mutated with neighbor-eviction repair, and the
//! best-ever chromosome is updated (and, with some probability, carried into
//! the next generation).
//!
//! # Key Types
//!
//! - [`Chromosome`]: candidate independent set and its fitness
//! - [`OcispConfig`]: algorithm parameters and stopping rules
//! - [`OcispRunner`]: executes the evolutionary loop
//! - [`OcispResult`]: final result with improvement history
//! - [`SnapshotCell`]: latest population/best state for external observers
//!
//! # Submodules
//!
//! - [`operators`]: random construction, crossover, and mutation operators
//!
//! # References
//!
//! - Aggarwal, Orlin & Tai (1997), "Optimized Crossover for the Independent
//!   Set Problem", *Operations Research* 45(2)

mod chromosome;
mod config;
pub mod operators;
mod population;
mod runner;
mod snapshot;

pub use chromosome::Chromosome;
pub use config::{OcispConfig, RepairPolicy};
pub use population::Population;
pub use runner::{Improvement, OcispResult, OcispRunner, StopReason};
pub use snapshot::{Snapshot, SnapshotCell};
