//! Read-only views of the solver state for external observers.
//!
//! The solver never mutates a published snapshot. After every generation it
//! builds a new [`Snapshot`] and swaps the `Arc` held by a [`SnapshotCell`];
//! readers clone the `Arc` and keep a consistent view for as long as they
//! like. The lock is held only for the pointer swap.

use super::chromosome::Chromosome;
use std::sync::{Arc, PoisonError, RwLock};

/// Solver state at the end of a generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Completed generations; 0 for the initial population.
    pub generation: usize,
    /// Current population.
    pub population: Vec<Chromosome>,
    /// Highest fitness in the current population.
    pub current_fitness: usize,
    /// Best chromosome seen so far.
    pub best: Chromosome,
}

impl Snapshot {
    /// Fitness of the best-ever chromosome.
    pub fn best_fitness(&self) -> usize {
        self.best.fitness()
    }
}

/// Shared slot holding the latest [`Snapshot`].
#[derive(Debug, Default)]
pub struct SnapshotCell {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotCell {
    /// Creates a cell holding an empty generation-0 snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently published snapshot.
    pub fn load(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publishes `snapshot`, replacing the previous one.
    pub fn store(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = next;
    }
}
