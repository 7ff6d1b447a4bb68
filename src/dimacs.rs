//! DIMACS clique-benchmark loader.
//!
//! Reads the `.clq` text format and builds the *complement* working graph:
//! declared edges describe a clique relation, so solving maximum independent
//! set on the complement solves maximum clique on the declared graph.
//!
//! ```text
//! c comment
//! p col 4 1
//! e 1 2
//! ```
//!
//! - `c` lines and blank lines are skipped
//! - `p col <nodes> <edges>` / `p edge <nodes> <edges>` starts the graph
//!   as the complete graph on `nodes` vertices
//! - `e <u> <v>` (1-indexed) deletes `(u - 1, v - 1)` from it
//!
//! Lines with any other leading token are ignored.

use crate::graph::Graph;
use log::warn;
use std::path::Path;
use thiserror::Error;

/// Parsed benchmark file.
#[derive(Debug, Clone)]
pub struct OcispMetaData {
    /// Vertex count from the problem line.
    pub nodes: usize,
    /// Edge count declared on the problem line.
    pub edges: usize,
    /// Complement working graph.
    pub graph: Graph,
}

/// Errors raised while loading a benchmark file. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("no problem line (`p col <nodes> <edges>`) found")]
    MissingProblemLine,

    #[error("line {line}: second problem line")]
    DuplicateProblemLine { line: usize },

    #[error("line {line}: edge declared before the problem line")]
    EdgeBeforeProblemLine { line: usize },

    #[error("line {line}: unsupported problem format `{format}`")]
    UnsupportedFormat { line: usize, format: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{token}` is not a non-negative integer")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: vertex {vertex} is outside 1..={nodes}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        nodes: usize,
    },
}

/// Reads and parses the file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<OcispMetaData, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parses benchmark text.
pub fn parse(text: &str) -> Result<OcispMetaData, LoadError> {
    let mut header: Option<(usize, usize)> = None;
    let mut declared: Vec<(usize, usize)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        let Some(&kind) = fields.first() else {
            continue;
        };

        match kind {
            "c" => {}
            "p" => {
                if header.is_some() {
                    return Err(LoadError::DuplicateProblemLine { line });
                }
                expect_fields(line, &fields, 4)?;
                if fields[1] != "col" && fields[1] != "edge" {
                    return Err(LoadError::UnsupportedFormat {
                        line,
                        format: fields[1].to_string(),
                    });
                }
                header = Some((number(line, fields[2])?, number(line, fields[3])?));
            }
            "e" => {
                let Some((nodes, _)) = header else {
                    return Err(LoadError::EdgeBeforeProblemLine { line });
                };
                expect_fields(line, &fields, 3)?;
                let u = vertex(line, fields[1], nodes)?;
                let v = vertex(line, fields[2], nodes)?;
                declared.push((u, v));
            }
            _ => {}
        }
    }

    let (nodes, edges) = header.ok_or(LoadError::MissingProblemLine)?;
    if declared.len() != edges {
        warn!(
            "problem line declares {edges} edges but {} edge lines were read",
            declared.len()
        );
    }

    Ok(OcispMetaData {
        nodes,
        edges,
        graph: Graph::complement(nodes, declared),
    })
}

fn expect_fields(line: usize, fields: &[&str], expected: usize) -> Result<(), LoadError> {
    if fields.len() != expected {
        return Err(LoadError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn number(line: usize, token: &str) -> Result<usize, LoadError> {
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parses a 1-indexed vertex and returns its 0-indexed id.
fn vertex(line: usize, token: &str, nodes: usize) -> Result<usize, LoadError> {
    let v = number(line, token)?;
    if v == 0 || v > nodes {
        return Err(LoadError::VertexOutOfRange {
            line,
            vertex: v,
            nodes,
        });
    }
    Ok(v - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complements_declared_edges() {
        let meta = parse("c tiny\np col 4 1\ne 1 2\n").expect("valid input");
        assert_eq!(meta.nodes, 4);
        assert_eq!(meta.edges, 1);
        let g = &meta.graph;
        assert!(!g.has_edge(0, 1));
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 3));
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_parse_edge_format_and_blank_lines() {
        let text = "\n  \np edge 3 3\ne 1 2\ne 2 3\n\ne 1 3\n";
        let meta = parse(text).expect("valid input");
        assert_eq!(meta.graph.edge_count(), 0);
    }

    #[test]
    fn test_parse_ignores_unknown_lines() {
        let meta = parse("x whatever\np col 2 0\nn 1 5\n").expect("valid input");
        assert_eq!(meta.graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_tolerates_edge_count_mismatch() {
        // Edges listed in both directions, as many benchmark files do.
        let meta = parse("p col 3 1\ne 1 2\ne 2 1\n").expect("mismatch is not fatal");
        assert_eq!(meta.edges, 1);
        assert!(!meta.graph.has_edge(0, 1));
    }

    #[test]
    fn test_missing_problem_line() {
        assert!(matches!(parse("c only comments\n"), Err(LoadError::MissingProblemLine)));
    }

    #[test]
    fn test_edge_before_problem_line() {
        assert!(matches!(
            parse("e 1 2\np col 2 1\n"),
            Err(LoadError::EdgeBeforeProblemLine { line: 1 })
        ));
    }

    #[test]
    fn test_duplicate_problem_line() {
        assert!(matches!(
            parse("p col 2 0\np col 3 0\n"),
            Err(LoadError::DuplicateProblemLine { line: 2 })
        ));
    }

    #[test]
    fn test_unsupported_format() {
        let err = parse("p sp 2 0\n").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { line: 1, .. }));
        assert_eq!(err.to_string(), "line 1: unsupported problem format `sp`");
    }

    #[test]
    fn test_bad_numbers() {
        assert!(matches!(
            parse("p col x 0\n"),
            Err(LoadError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse("p col 3 1\ne 1 -2\n"),
            Err(LoadError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_field_count() {
        assert!(matches!(
            parse("p col 3\n"),
            Err(LoadError::FieldCount {
                line: 1,
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            parse("p col 3 1\ne 1 2 3\n"),
            Err(LoadError::FieldCount { line: 2, .. })
        ));
    }

    #[test]
    fn test_vertex_out_of_range() {
        assert!(matches!(
            parse("p col 3 1\ne 0 2\n"),
            Err(LoadError::VertexOutOfRange { vertex: 0, .. })
        ));
        let err = parse("p col 3 1\ne 1 4\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: vertex 4 is outside 1..=3");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load("/nonexistent/ocisp/input.clq").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("ocisp-load-{}.clq", std::process::id()));
        std::fs::write(&path, "p col 5 2\ne 1 2\ne 4 5\n").expect("write temp file");
        let meta = load(&path);
        std::fs::remove_file(&path).ok();
        let meta = meta.expect("valid file");
        assert_eq!(meta.nodes, 5);
        assert_eq!(meta.graph.edge_count(), 8);
    }
}
