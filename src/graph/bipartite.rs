//! Bipartite adjacency structures.
//!
//! Both structures split their vertices into two partitions, `N1` (left) and
//! `N2` (right), each with its own local → global numbering, and store a
//! rectangular `|N1| × |N2|` matrix.
//!
//! - [`BipartiteGraph`]: undirected bipartite graph, input to
//!   [`maximum_matching`](crate::matching::maximum_matching).
//! - [`AuxiliaryNetwork`]: directed version of a matched bipartite graph.
//!   Matched edges point `N2 → N1`, unmatched edges point `N1 → N2`, so a
//!   directed walk out of a free `N1` vertex is an alternating path.
//!
//! # References
//!
//! - Berge (1957), "Two Theorems in Graph Theory"
//! - König (1931), "Gráfok és mátrixok"

use super::Graph;
use crate::matching::Matching;

/// Undirected bipartite graph between two disjoint vertex partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    left: Vec<usize>,
    right: Vec<usize>,
    adjacency: Vec<bool>,
}

impl BipartiteGraph {
    /// Creates an edgeless bipartite graph. `left` and `right` hold the
    /// global ids of `N1` and `N2`.
    pub fn new(left: Vec<usize>, right: Vec<usize>) -> Self {
        let adjacency = vec![false; left.len() * right.len()];
        Self {
            left,
            right,
            adjacency,
        }
    }

    /// Creates the bipartite graph between `left` and `right` whose edges are
    /// the edges of `graph` running between the two partitions.
    ///
    /// Global ids are resolved through `graph`'s numbering.
    ///
    /// # Panics
    /// Panics if an id is not a vertex of `graph`.
    pub fn between(graph: &Graph, left: Vec<usize>, right: Vec<usize>) -> Self {
        let resolve = |ids: &[usize]| -> Vec<usize> {
            ids.iter()
                .map(|&id| {
                    graph
                        .index_of(id)
                        .unwrap_or_else(|| panic!("vertex {id} is not in the graph"))
                })
                .collect()
        };
        let left_idx = resolve(&left);
        let right_idx = resolve(&right);

        let mut bipartite = Self::new(left, right);
        for (i, &u) in left_idx.iter().enumerate() {
            for (j, &v) in right_idx.iter().enumerate() {
                if graph.has_edge(u, v) {
                    bipartite.create_edge(i, j);
                }
            }
        }
        bipartite
    }

    /// Size of `N1`.
    pub fn left_len(&self) -> usize {
        self.left.len()
    }

    /// Size of `N2`.
    pub fn right_len(&self) -> usize {
        self.right.len()
    }

    /// Global ids of `N1`.
    pub fn left_ids(&self) -> &[usize] {
        &self.left
    }

    /// Global ids of `N2`.
    pub fn right_ids(&self) -> &[usize] {
        &self.right
    }

    /// Returns `true` if `N1` index `i` and `N2` index `j` are adjacent.
    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacency[i * self.right.len() + j]
    }

    /// Sets or clears the edge between `N1` index `i` and `N2` index `j`.
    pub fn set_edge(&mut self, i: usize, j: usize, value: bool) {
        let width = self.right.len();
        self.adjacency[i * width + j] = value;
    }

    /// Adds the edge `i`-`j`.
    pub fn create_edge(&mut self, i: usize, j: usize) {
        self.set_edge(i, j, true);
    }

    /// `N2` indices adjacent to `N1` index `i`, ascending.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.right.len()).filter(move |&j| self.has_edge(i, j))
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|&&e| e).count()
    }

    /// Orients every edge by membership in `matching`: matched edges become
    /// `N2 → N1` arcs, the rest `N1 → N2` arcs.
    pub fn auxiliary_network(&self, matching: &Matching) -> AuxiliaryNetwork {
        let mut network = AuxiliaryNetwork::new(self.left.clone(), self.right.clone());
        for i in 0..self.left_len() {
            for j in self.neighbors(i) {
                if matching.contains(i, j) {
                    network.add_incoming(i, j);
                } else {
                    network.add_outgoing(i, j);
                }
            }
        }
        network
    }
}

/// Directed bipartite network over a matched [`BipartiteGraph`].
///
/// Two `|N1| × |N2|` matrices are kept, both indexed `[n1][n2]`:
/// `incoming` holds `N2 → N1` arcs and `outgoing` holds `N1 → N2` arcs.
/// Per-partition visited flags record the alternating-path traversal.
#[derive(Debug, Clone)]
pub struct AuxiliaryNetwork {
    left: Vec<usize>,
    right: Vec<usize>,
    incoming: Vec<bool>,
    outgoing: Vec<bool>,
    visited_left: Vec<bool>,
    visited_right: Vec<bool>,
}

impl AuxiliaryNetwork {
    /// Creates an arc-free network over the given partitions.
    pub fn new(left: Vec<usize>, right: Vec<usize>) -> Self {
        let cells = left.len() * right.len();
        let (a, b) = (left.len(), right.len());
        Self {
            left,
            right,
            incoming: vec![false; cells],
            outgoing: vec![false; cells],
            visited_left: vec![false; a],
            visited_right: vec![false; b],
        }
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> usize {
        i * self.right.len() + j
    }

    /// Returns `true` if the arc `N2[j] → N1[i]` exists.
    pub fn has_incoming(&self, i: usize, j: usize) -> bool {
        self.incoming[self.cell(i, j)]
    }

    /// Returns `true` if the arc `N1[i] → N2[j]` exists.
    pub fn has_outgoing(&self, i: usize, j: usize) -> bool {
        self.outgoing[self.cell(i, j)]
    }

    /// Adds the matched arc `N2[j] → N1[i]`.
    pub fn add_incoming(&mut self, i: usize, j: usize) {
        let c = self.cell(i, j);
        self.incoming[c] = true;
    }

    /// Adds the unmatched arc `N1[i] → N2[j]`.
    pub fn add_outgoing(&mut self, i: usize, j: usize) {
        let c = self.cell(i, j);
        self.outgoing[c] = true;
    }

    /// `N1` vertices reached by the traversal so far.
    pub fn visited_left(&self) -> &[bool] {
        &self.visited_left
    }

    /// `N2` vertices reached by the traversal so far.
    pub fn visited_right(&self) -> &[bool] {
        &self.visited_right
    }

    /// Depth-first traversal from `N1` index `start`, alternating sides.
    ///
    /// From `N1` only outgoing (unmatched) arcs are followed, from `N2` only
    /// incoming (matched) arcs. Visited flags persist across calls, so
    /// successive starts share one visited set. Recursion depth never exceeds
    /// `|N1| + |N2|` because every frame marks a new vertex.
    pub fn alternating_dfs(&mut self, start: usize) {
        if !self.visited_left[start] {
            self.visit_left(start);
        }
    }

    fn visit_left(&mut self, i: usize) {
        self.visited_left[i] = true;
        for j in 0..self.right.len() {
            if self.has_outgoing(i, j) && !self.visited_right[j] {
                self.visit_right(j);
            }
        }
    }

    fn visit_right(&mut self, j: usize) {
        self.visited_right[j] = true;
        for i in 0..self.left.len() {
            if self.has_incoming(i, j) && !self.visited_left[i] {
                self.visit_left(i);
            }
        }
    }

    /// Global ids of `L1 ∪ (N2 − L2)`.
    ///
    /// Runs [`alternating_dfs`](Self::alternating_dfs) from every `N1` vertex
    /// left free by `matching`; `L1`/`L2` are the vertices reached on each
    /// side. For a maximum matching this is a maximum independent set of the
    /// bipartite graph. `L1` members come first in `N1` order, then the
    /// unreached `N2` members in `N2` order.
    pub fn o_child_vertices(&mut self, matching: &Matching) -> Vec<usize> {
        for i in matching.free_left(self.left.len()) {
            self.alternating_dfs(i);
        }

        let reached_left = self
            .left
            .iter()
            .zip(&self.visited_left)
            .filter(|(_, &seen)| seen)
            .map(|(&id, _)| id);
        let unreached_right = self
            .right
            .iter()
            .zip(&self.visited_right)
            .filter(|(_, &seen)| !seen)
            .map(|(&id, _)| id);

        reached_left.chain(unreached_right).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMode;
    use crate::matching::maximum_matching;

    fn path_graph() -> BipartiteGraph {
        // N1 = {10, 11}, N2 = {20, 21}; edges 10-20, 11-20, 11-21
        let mut g = BipartiteGraph::new(vec![10, 11], vec![20, 21]);
        g.create_edge(0, 0);
        g.create_edge(1, 0);
        g.create_edge(1, 1);
        g
    }

    #[test]
    fn test_between_uses_graph_adjacency() {
        let mut g = Graph::new(5, EdgeMode::Undirected);
        g.create_edge(0, 3);
        g.create_edge(1, 4);
        g.create_edge(0, 1); // inside N1, must be ignored
        let b = BipartiteGraph::between(&g, vec![0, 1], vec![3, 4]);
        assert!(b.has_edge(0, 0));
        assert!(b.has_edge(1, 1));
        assert!(!b.has_edge(0, 1));
        assert_eq!(b.edge_count(), 2);
    }

    #[test]
    fn test_between_resolves_through_numbering() {
        let mut g = Graph::new(6, EdgeMode::Undirected);
        g.create_edge(2, 5);
        let sub = g.induced_subgraph(&[2, 4, 5], true);
        let b = BipartiteGraph::between(&sub, vec![2], vec![4, 5]);
        assert!(!b.has_edge(0, 0));
        assert!(b.has_edge(0, 1));
    }

    #[test]
    fn test_auxiliary_network_orientation() {
        let g = path_graph();
        let m = maximum_matching(&g);
        let net = g.auxiliary_network(&m);
        for i in 0..2 {
            for j in 0..2 {
                if g.has_edge(i, j) {
                    assert_ne!(net.has_incoming(i, j), net.has_outgoing(i, j));
                    assert_eq!(net.has_incoming(i, j), m.contains(i, j));
                } else {
                    assert!(!net.has_incoming(i, j) && !net.has_outgoing(i, j));
                }
            }
        }
    }

    #[test]
    fn test_o_child_perfect_matching_takes_n2() {
        let g = path_graph();
        let m = maximum_matching(&g);
        assert_eq!(m.size(), 2);
        let mut net = g.auxiliary_network(&m);
        // No free N1 vertex: L1 = L2 = {} so the set is N2.
        assert_eq!(net.o_child_vertices(&m), vec![20, 21]);
    }

    #[test]
    fn test_o_child_follows_alternating_path() {
        // N1 = {0, 1, 2}, N2 = {5}; every N1 vertex adjacent to 5.
        let mut g = BipartiteGraph::new(vec![0, 1, 2], vec![5]);
        for i in 0..3 {
            g.create_edge(i, 0);
        }
        let m = maximum_matching(&g);
        assert_eq!(m.size(), 1);
        let mut net = g.auxiliary_network(&m);
        let set = net.o_child_vertices(&m);
        // Free N1 vertices reach 5, which leads back to its partner.
        assert_eq!(set, vec![0, 1, 2]);
        assert!(net.visited_right()[0]);
        assert!(net.visited_left().iter().all(|&v| v));
    }

    #[test]
    fn test_o_child_no_edges_takes_everything() {
        let g = BipartiteGraph::new(vec![1, 3], vec![2]);
        let m = maximum_matching(&g);
        let mut net = g.auxiliary_network(&m);
        assert_eq!(net.o_child_vertices(&m), vec![1, 3, 2]);
    }
}
