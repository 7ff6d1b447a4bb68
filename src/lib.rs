//! Maximum independent set / maximum clique by genetic algorithm.
//!
//! OCISP loads a clique benchmark, takes the complement of its declared
//! edges as the working graph, and evolves independent sets of that graph,
//! which are exactly the cliques of the declared one.
//!
//! - **Graph model** ([`graph`]): dense adjacency matrices with undirected /
//!   directed edge writes, induced subgraphs, and the bipartite structures
//!   used during crossover.
//! - **Matching** ([`matching`]): maximum bipartite matching by augmenting
//!   paths.
//! - **Genetic algorithm** ([`ga`]): population management, the
//!   matching-based O-/E-child crossover, repair mutation, elitism, and an
//!   observable evolution loop with explicit stopping rules.
//! - **Loader** ([`dimacs`]): DIMACS `.clq` parsing into the complement
//!   working graph.
//!
//! # Example
//!
//! ```
//! use ocisp::dimacs;
//! use ocisp::ga::{OcispConfig, OcispRunner};
//!
//! let meta = dimacs::parse("p col 4 1\ne 1 2\n").unwrap();
//! let config = OcispConfig::default().with_max_generations(20).with_seed(1);
//! let result = OcispRunner::run(&meta.graph, &config);
//! assert_eq!(result.best.display_vertices(), vec![1, 2]);
//! ```

pub mod dimacs;
pub mod ga;
pub mod graph;
pub mod matching;
pub mod random;
