//! Maximum bipartite matching.
//!
//! Kuhn's augmenting-path algorithm over a [`BipartiteGraph`]. For every
//! `N1` vertex in ascending order a depth-first search looks for an
//! augmenting path; `N2` neighbors are scanned in ascending order as well,
//! so the result is fully determined by the adjacency matrix and the
//! partition order.
//!
//! # Complexity
//! O(|N1| · E) time, O(|N2|) extra space. Recursion depth of the augmenting
//! search is bounded by `|N1|`.
//!
//! # References
//!
//! - Kuhn (1955), "The Hungarian Method for the Assignment Problem"

use crate::graph::BipartiteGraph;

/// A matching between `N1` and `N2`, stored from the `N2` side.
///
/// `partner_of(j)` is the `N1` index matched to `N2` index `j`, or `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    assignment: Vec<Option<usize>>,
}

impl Matching {
    /// An empty matching over `right_len` `N2` vertices.
    pub fn empty(right_len: usize) -> Self {
        Self {
            assignment: vec![None; right_len],
        }
    }

    /// The `N1` partner of `N2` index `j`.
    pub fn partner_of(&self, j: usize) -> Option<usize> {
        self.assignment[j]
    }

    /// Per-`N2` assignment array.
    pub fn assignment(&self) -> &[Option<usize>] {
        &self.assignment
    }

    /// Returns `true` if the edge `(i, j)` is in the matching.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.assignment[j] == Some(i)
    }

    /// Number of matched pairs.
    pub fn size(&self) -> usize {
        self.assignment.iter().filter(|a| a.is_some()).count()
    }

    /// Matched `(n1, n2)` pairs in ascending `N2` order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.assignment
            .iter()
            .enumerate()
            .filter_map(|(j, a)| a.map(|i| (i, j)))
    }

    /// `N1` indices in `0..left_len` that are not matched, ascending.
    pub fn free_left(&self, left_len: usize) -> Vec<usize> {
        let mut matched = vec![false; left_len];
        for (i, _) in self.pairs() {
            matched[i] = true;
        }
        (0..left_len).filter(|&i| !matched[i]).collect()
    }
}

/// Computes a maximum matching of `graph`.
///
/// # Examples
///
/// ```
/// use ocisp::graph::BipartiteGraph;
/// use ocisp::matching::maximum_matching;
///
/// let mut g = BipartiteGraph::new(vec![0, 1], vec![2, 3]);
/// g.create_edge(0, 0);
/// g.create_edge(1, 1);
/// let m = maximum_matching(&g);
/// assert_eq!(m.size(), 2);
/// ```
pub fn maximum_matching(graph: &BipartiteGraph) -> Matching {
    let mut assignment = vec![None; graph.right_len()];
    let mut seen = vec![false; graph.right_len()];

    for u in 0..graph.left_len() {
        seen.iter_mut().for_each(|s| *s = false);
        try_augment(graph, u, &mut seen, &mut assignment);
    }

    Matching { assignment }
}

/// Tries to match `u`, re-routing already matched `N1` vertices along an
/// augmenting path if necessary.
fn try_augment(
    graph: &BipartiteGraph,
    u: usize,
    seen: &mut [bool],
    assignment: &mut [Option<usize>],
) -> bool {
    for v in 0..graph.right_len() {
        if !graph.has_edge(u, v) || seen[v] {
            continue;
        }
        seen[v] = true;

        let free = match assignment[v] {
            None => true,
            Some(owner) => try_augment(graph, owner, seen, assignment),
        };
        if free {
            assignment[v] = Some(u);
            return true;
        }
    }
    false
}
