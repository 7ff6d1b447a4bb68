//! Dense adjacency-matrix graphs.
//!
//! [`Graph`] stores a square boolean matrix together with a local → global
//! vertex numbering. The root graph built at load time uses the identity
//! numbering; induced subgraphs keep the global ids of the vertices they were
//! cut from so that solutions can always be expressed in root-graph ids.
//!
//! Edge writes follow an explicit [`EdgeMode`]: undirected graphs write both
//! symmetric entries, directed graphs write a single entry.
//!
//! # Submodules
//!
//! - [`bipartite`]: bipartite adjacency structures used by the crossover
//!   operator (undirected bipartite graph and the auxiliary directed network)

pub mod bipartite;

pub use bipartite::{AuxiliaryNetwork, BipartiteGraph};

/// Edge-write semantics of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeMode {
    /// `set_edge(u, v, x)` writes both `(u, v)` and `(v, u)`.
    #[default]
    Undirected,
    /// `set_edge(u, v, x)` writes only `(u, v)`.
    Directed,
}

/// Dense graph backed by a row-major `n × n` boolean matrix.
///
/// Self-loops are not expected; nothing prevents writing one, but the solver
/// treats the diagonal as irrelevant.
///
/// # Examples
///
/// ```
/// use ocisp::graph::{EdgeMode, Graph};
///
/// let mut g = Graph::new(3, EdgeMode::Undirected);
/// g.create_edge(0, 2);
/// assert!(g.has_edge(2, 0));
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    mode: EdgeMode,
    node_count: usize,
    adjacency: Vec<bool>,
    node_numbers: Vec<usize>,
}

impl Graph {
    /// Creates an edgeless graph on `node_count` vertices with identity numbering.
    pub fn new(node_count: usize, mode: EdgeMode) -> Self {
        Self {
            mode,
            node_count,
            adjacency: vec![false; node_count * node_count],
            node_numbers: (0..node_count).collect(),
        }
    }

    /// Creates the complete undirected graph on `node_count` vertices.
    ///
    /// Every pair of distinct vertices is connected; the diagonal stays empty.
    pub fn complete(node_count: usize) -> Self {
        let mut graph = Self::new(node_count, EdgeMode::Undirected);
        for u in 0..node_count {
            for v in (u + 1)..node_count {
                graph.create_edge(u, v);
            }
        }
        graph
    }

    /// Builds the complement of a declared (clique) relation.
    ///
    /// Starts from [`Graph::complete`] and deletes every declared edge. Edge
    /// endpoints are 0-indexed here; the DIMACS loader does the 1-indexed
    /// translation.
    ///
    /// # Panics
    /// Panics if an endpoint is out of range.
    pub fn complement<I>(node_count: usize, declared_edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::complete(node_count);
        for (u, v) in declared_edges {
            graph.delete_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Local index → global vertex id.
    pub fn node_numbers(&self) -> &[usize] {
        &self.node_numbers
    }

    /// Local index of the vertex with global id `id`, found by linear scan.
    pub fn index_of(&self, id: usize) -> Option<usize> {
        self.node_numbers.iter().position(|&n| n == id)
    }

    /// Global ids of the vertices at the given local indices.
    pub fn global_ids(&self, indices: &[usize]) -> Vec<usize> {
        indices.iter().map(|&i| self.node_numbers[i]).collect()
    }

    /// Local indices of the given global ids; ids not in the graph are
    /// skipped.
    pub fn local_indices(&self, ids: &[usize]) -> Vec<usize> {
        ids.iter().filter_map(|&id| self.index_of(id)).collect()
    }

    /// Returns `true` if the arc `(source, destination)` is present.
    #[inline]
    pub fn has_edge(&self, source: usize, destination: usize) -> bool {
        self.adjacency[source * self.node_count + destination]
    }

    /// Writes an edge value according to the graph's [`EdgeMode`].
    pub fn set_edge(&mut self, source: usize, destination: usize, value: bool) {
        let n = self.node_count;
        self.adjacency[source * n + destination] = value;
        if self.mode == EdgeMode::Undirected {
            self.adjacency[destination * n + source] = value;
        }
    }

    /// Shorthand for `set_edge(source, destination, true)`.
    pub fn create_edge(&mut self, source: usize, destination: usize) {
        self.set_edge(source, destination, true);
    }

    /// Shorthand for `set_edge(source, destination, false)`.
    pub fn delete_edge(&mut self, source: usize, destination: usize) {
        self.set_edge(source, destination, false);
    }

    /// Local indices `v != u` with an arc `(u, v)`, ascending.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.adjacency[u * self.node_count..(u + 1) * self.node_count];
        row.iter()
            .enumerate()
            .filter(move |&(v, &present)| present && v != u)
            .map(|(v, _)| v)
    }

    /// Returns `true` if `u` has at least one neighbor other than itself.
    pub fn has_any_neighbor(&self, u: usize) -> bool {
        self.neighbors(u).next().is_some()
    }

    /// Number of edges, ignoring the diagonal.
    ///
    /// Undirected graphs count each symmetric pair once.
    pub fn edge_count(&self) -> usize {
        let n = self.node_count;
        let mut count = 0;
        for u in 0..n {
            let start = match self.mode {
                EdgeMode::Undirected => u + 1,
                EdgeMode::Directed => 0,
            };
            for v in start..n {
                if u != v && self.has_edge(u, v) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns `true` if no two vertices of `vertices` (local indices) are adjacent.
    pub fn is_independent(&self, vertices: &[usize]) -> bool {
        vertices.iter().enumerate().all(|(k, &u)| {
            vertices[k + 1..]
                .iter()
                .all(|&v| !self.has_edge(u, v) && !self.has_edge(v, u))
        })
    }

    /// Builds the subgraph induced by the vertices whose global ids are in
    /// `selected`.
    ///
    /// Members keep the order they have in this graph's numbering, not the
    /// order of `selected`. The new graph owns a fresh matrix; when
    /// `copy_edges` is false it is left edgeless and only the numbering is
    /// carried over. Ids absent from this graph are ignored.
    pub fn induced_subgraph(&self, selected: &[usize], copy_edges: bool) -> Graph {
        let parent_indices: Vec<usize> = self
            .node_numbers
            .iter()
            .enumerate()
            .filter(|(_, id)| selected.contains(id))
            .map(|(idx, _)| idx)
            .collect();

        let mut sub = Graph::new(parent_indices.len(), self.mode);
        sub.node_numbers = parent_indices
            .iter()
            .map(|&idx| self.node_numbers[idx])
            .collect();

        if copy_edges {
            for (i, &pi) in parent_indices.iter().enumerate() {
                for (j, &pj) in parent_indices.iter().enumerate() {
                    sub.adjacency[i * sub.node_count + j] = self.has_edge(pi, pj);
                }
            }
        }

        sub
    }
}
