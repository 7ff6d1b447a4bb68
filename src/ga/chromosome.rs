//! Bitmask encoding of candidate independent sets.

use crate::graph::Graph;

/// A candidate independent set.
///
/// Bit `i` set means the vertex at local index `i` of the working graph is a
/// member. On a graph with its own numbering (an induced subgraph), map
/// members through [`Graph::global_ids`]. Fitness is the number of
/// members; higher is better.
///
/// # Examples
///
/// ```
/// use ocisp::ga::Chromosome;
///
/// let c = Chromosome::from_vertices(6, &[4, 1]);
/// assert_eq!(c.fitness(), 2);
/// assert_eq!(c.vertices(), vec![1, 4]);
/// assert_eq!(c.display_vertices(), vec![2, 5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// The empty set over `problem_size` vertices.
    pub fn empty(problem_size: usize) -> Self {
        Self {
            genes: vec![false; problem_size],
        }
    }

    /// Encodes a set of local vertex indices.
    ///
    /// # Panics
    /// Panics if an id is `>= problem_size`.
    pub fn from_vertices(problem_size: usize, vertices: &[usize]) -> Self {
        let mut genes = vec![false; problem_size];
        for &v in vertices {
            genes[v] = true;
        }
        Self { genes }
    }

    /// Decodes to the ascending list of member indices.
    pub fn vertices(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter(|(_, &g)| g)
            .map(|(i, _)| i)
            .collect()
    }

    /// Member indices shifted to the 1-indexed convention of the input files.
    pub fn display_vertices(&self) -> Vec<usize> {
        self.vertices().into_iter().map(|v| v + 1).collect()
    }

    /// Number of members.
    pub fn fitness(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Number of genes (the problem size).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if there are no genes at all.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The raw bitmask.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Returns `true` if `vertex` is a member.
    #[inline]
    pub fn get(&self, vertex: usize) -> bool {
        self.genes[vertex]
    }

    /// Adds or removes `vertex`.
    #[inline]
    pub fn set(&mut self, vertex: usize, member: bool) {
        self.genes[vertex] = member;
    }

    /// Returns `true` if no two members are adjacent in `graph`.
    pub fn is_independent(&self, graph: &Graph) -> bool {
        graph.is_independent(&self.vertices())
    }
}
