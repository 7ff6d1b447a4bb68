//! Generation-level steps of the evolutionary loop.
//!
//! A [`Population`] is replaced wholesale every generation: [`select`] ranks
//! it in place, [`crossover`] derives the next population from the ranking,
//! and [`mutate`] perturbs the new one in place.
//!
//! [`select`]: Population::select
//! [`crossover`]: Population::crossover
//! [`mutate`]: Population::mutate

use super::chromosome::Chromosome;
use super::config::OcispConfig;
use super::operators;
use crate::graph::Graph;
use rand::Rng;

/// Ordered list of chromosomes of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<Chromosome>,
}

impl Population {
    /// Creates `size` random maximal independent sets.
    pub fn initial<R: Rng>(graph: &Graph, size: usize, rng: &mut R) -> Self {
        let members = (0..size)
            .map(|_| operators::random_independent_set(graph, rng))
            .collect();
        Self { members }
    }

    /// Wraps an explicit member list, kept in the given order.
    pub fn from_members(members: Vec<Chromosome>) -> Self {
        Self { members }
    }

    /// Members in their current order.
    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sorts by fitness, best first. Equal-fitness members keep their order.
    pub fn select(&mut self) {
        self.members.sort_by_key(|c| std::cmp::Reverse(c.fitness()));
    }

    /// Breeds the next population from a ranked one.
    ///
    /// Members `2i` and `2i + 1` are crossed (the former as the higher-ranked
    /// parent); each pair contributes its O-child then its E-child. With
    /// probability `config.elitism_probability` the last slot is then
    /// overwritten by a copy of `best_ever`.
    pub fn crossover<R: Rng>(
        &self,
        graph: &Graph,
        best_ever: &Chromosome,
        config: &OcispConfig,
        rng: &mut R,
    ) -> Population {
        let mut children = Vec::with_capacity(self.members.len());

        for pair in self.members.chunks_exact(2) {
            let kids = operators::crossover(graph, &pair[0], &pair[1], config.echild_repair, rng);
            children.push(kids.o_child);
            children.push(kids.e_child);
        }

        if rng.random_bool(config.elitism_probability) {
            if let Some(last) = children.last_mut() {
                *last = best_ever.clone();
            }
        }

        Population { members: children }
    }

    /// Applies [`operators::mutate`] to every member.
    pub fn mutate<R: Rng>(&mut self, graph: &Graph, rate: f64, rng: &mut R) {
        for member in &mut self.members {
            operators::mutate(graph, member, rate, rng);
        }
    }

    /// The first member with the highest fitness.
    pub fn fittest(&self) -> Option<&Chromosome> {
        self.members
            .iter()
            .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
    }

    /// Highest fitness in the population, 0 when empty.
    pub fn max_fitness(&self) -> usize {
        self.fittest().map_or(0, Chromosome::fitness)
    }

    /// Replaces `best` by the fittest member if that member is strictly
    /// fitter. Returns `true` if `best` changed.
    pub fn update_best(&self, best: &mut Chromosome) -> bool {
        match self.fittest() {
            Some(candidate) if candidate.fitness() > best.fitness() => {
                *best = candidate.clone();
                true
            }
            _ => false,
        }
    }
}
