//! Independent-set genetic operators.
//!
//! Every operator here returns (or leaves behind) an independent set of the
//! working graph.
//!
//! # Construction
//!
//! - [`random_independent_set`]: greedy insertion over a shuffled vertex order
//!
//! # Crossover
//!
//! - [`crossover`]: set-difference bipartite crossover. The second parent's
//!   members and the first parent's extra members form the two partitions of
//!   a bipartite graph; a maximum matching on it yields a maximum independent
//!   set of that graph (the O-child), and a per-bit combination of both
//!   parents and the O-child yields the E-child.
//!
//! # Mutation
//!
//! - [`mutate`]: per-bit flip; a vertex switched on evicts its neighbors
//!
//! # References
//!
//! - Aggarwal, Orlin & Tai (1997), "Optimized Crossover for the Independent
//!   Set Problem"
//! - König (1931), Berge (1957) for the alternating-path construction

use super::chromosome::Chromosome;
use super::config::RepairPolicy;
use crate::graph::{BipartiteGraph, Graph};
use crate::matching::maximum_matching;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

// ============================================================================
// Construction
// ============================================================================

/// Builds a random maximal independent set.
///
/// Vertices are visited in a uniformly shuffled order and kept whenever they
/// have no edge to a vertex kept before them. The members are read back from
/// the induced subgraph of the selection, so they come out in graph order.
pub fn random_independent_set<R: Rng>(graph: &Graph, rng: &mut R) -> Chromosome {
    let n = graph.node_count();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut selected: Vec<usize> = Vec::new();
    for &v in &order {
        if selected.iter().all(|&s| !graph.has_edge(v, s)) {
            selected.push(v);
        }
    }

    let induced = graph.induced_subgraph(&graph.global_ids(&selected), false);
    Chromosome::from_vertices(n, &graph.local_indices(induced.node_numbers()))
}

// ============================================================================
// Crossover
// ============================================================================

/// Offspring of one crossover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offspring {
    /// Child built from the alternating-path vertex set.
    pub o_child: Chromosome,
    /// Child built from the per-bit parent/O-child combination.
    pub e_child: Chromosome,
}

/// Set-difference bipartite crossover.
///
/// `parent1` is the higher-ranked parent of the pair. With `I1` the members
/// of `parent2` and `D` the members of `parent1` not in `I1`, the larger of
/// `I1` and `D` (ties go to `I1`) becomes `N1` and the other `N2`.
///
/// A child with no members is replaced by a fresh
/// [`random_independent_set`].
///
/// # Panics
/// Panics if the parents do not both have `graph.node_count()` genes.
pub fn crossover<R: Rng>(
    graph: &Graph,
    parent1: &Chromosome,
    parent2: &Chromosome,
    repair: RepairPolicy,
    rng: &mut R,
) -> Offspring {
    let n = graph.node_count();
    assert_eq!(parent1.len(), n, "parent1 has wrong length");
    assert_eq!(parent2.len(), n, "parent2 has wrong length");

    let o_raw = o_child(graph, parent1, parent2);
    let e_raw = e_child(graph, parent1, parent2, &o_raw, repair);

    Offspring {
        o_child: or_random(graph, o_raw, "O-child", rng),
        e_child: or_random(graph, e_raw, "E-child", rng),
    }
}

/// Computes the O-child of a parent pair without empty-child substitution.
///
/// The result has at least `max(|I1|, |D|)` members.
pub fn o_child(graph: &Graph, parent1: &Chromosome, parent2: &Chromosome) -> Chromosome {
    let i1 = parent2.vertices();
    let diff: Vec<usize> = parent1
        .vertices()
        .into_iter()
        .filter(|&v| !parent2.get(v))
        .collect();

    let (left, right) = if i1.len() >= diff.len() {
        (i1, diff)
    } else {
        (diff, i1)
    };

    let bipartite =
        BipartiteGraph::between(graph, graph.global_ids(&left), graph.global_ids(&right));
    let matching = maximum_matching(&bipartite);
    let mut network = bipartite.auxiliary_network(&matching);
    let members = network.o_child_vertices(&matching);

    Chromosome::from_vertices(graph.node_count(), &graph.local_indices(&members))
}

/// Computes the E-child without empty-child substitution.
///
/// A vertex is provisionally in when
/// `(p1 ∧ o) ∨ (p1 ∧ p2) ∨ (p2 ∧ ¬o)`, then kept or dropped per `repair`.
pub fn e_child(
    graph: &Graph,
    parent1: &Chromosome,
    parent2: &Chromosome,
    o_child: &Chromosome,
    repair: RepairPolicy,
) -> Chromosome {
    let n = graph.node_count();
    let mut child = Chromosome::empty(n);
    let mut kept: Vec<usize> = Vec::new();

    for i in 0..n {
        let (p1, p2, o) = (parent1.get(i), parent2.get(i), o_child.get(i));
        let provisional = (p1 && o) || (p1 && p2) || (p2 && !o);
        if !provisional {
            continue;
        }

        let conflict = match repair {
            RepairPolicy::AnyEdge => graph.has_any_neighbor(i),
            RepairPolicy::SelectedOnly => kept.iter().any(|&k| graph.has_edge(i, k)),
        };
        if !conflict {
            child.set(i, true);
            kept.push(i);
        }
    }

    child
}

fn or_random<R: Rng>(graph: &Graph, child: Chromosome, label: &str, rng: &mut R) -> Chromosome {
    if child.fitness() == 0 {
        trace!("{label} is empty, substituting a random independent set");
        random_independent_set(graph, rng)
    } else {
        child
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each gene with probability `rate`.
///
/// A gene switched on clears every neighbor of its vertex immediately, so the
/// chromosome stays independent if it was before.
pub fn mutate<R: Rng>(graph: &Graph, chromosome: &mut Chromosome, rate: f64, rng: &mut R) {
    for j in 0..chromosome.len() {
        if !rng.random_bool(rate) {
            continue;
        }
        let on = !chromosome.get(j);
        chromosome.set(j, on);
        if on {
            for f in graph.neighbors(j) {
                chromosome.set(f, false);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
