//! Parsers for the optional node and edge allow-lists of a perturbation search.
//!
//! Both formats are line-oriented. Empty lines and lines starting with `#` (comments or
//! column headers) are skipped, and only the first column of every line is used; columns
//! are separated by commas, spaces or tabs.
//!
//! A node list contains one node name per line. An edge list describes one edge per line
//! in the form `TARGET = TYPE(SOURCE)`, where `TYPE` contains `a` for activation or `r` for
//! repression (but never both).

use crate::{EdgeSign, PerturbError, PoolEdge};
use std::path::Path;

/// Read node names from the contents of a node list file.
pub fn parse_node_list(content: &str) -> Vec<String> {
    data_lines(content)
        .filter_map(|line| columns(line).next())
        .map(|name| name.to_string())
        .collect()
}

/// Read edges from the contents of an edge list file.
///
/// Fails if a line does not describe an edge, or if the regulation type of an edge is
/// not exactly one of activation or repression.
pub fn parse_edge_list(content: &str) -> Result<Vec<PoolEdge>, PerturbError> {
    let mut result = Vec::new();
    for line in data_lines(content) {
        let malformed = || PerturbError::MalformedAllowList {
            line: line.to_string(),
        };
        let mut words = line
            .split(|c: char| c == ',' || c == '=' || c.is_whitespace())
            .filter(|it| !it.is_empty());
        let target = words.next().ok_or_else(malformed)?;
        let regulation = words.next().ok_or_else(malformed)?;
        let mut parts = regulation
            .split(|c: char| c == '(' || c == ')')
            .filter(|it| !it.is_empty());
        let (Some(kind), Some(source)) = (parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let sign = EdgeSign::try_from_type_token(kind)
            .ok_or_else(|| PerturbError::InvalidEdgeType(kind.to_string()))?;
        result.push(PoolEdge::new(source, target, sign));
    }
    Ok(result)
}

/// Read a node list file, see [parse_node_list].
pub fn read_node_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, PerturbError> {
    read_file(path.as_ref()).map(|content| parse_node_list(&content))
}

/// Read an edge list file, see [parse_edge_list].
pub fn read_edge_file<P: AsRef<Path>>(path: P) -> Result<Vec<PoolEdge>, PerturbError> {
    read_file(path.as_ref()).and_then(|content| parse_edge_list(&content))
}

/// **(internal)** Read a file into a string, attaching the path to a potential error.
pub(crate) fn read_file(path: &Path) -> Result<String, PerturbError> {
    std::fs::read_to_string(path).map_err(|source| PerturbError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// **(internal)** Non-empty lines that are not comments.
fn data_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
}

/// **(internal)** Comma/space/tab separated columns of a line.
fn columns(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|it| !it.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{parse_edge_list, parse_node_list};
    use crate::EdgeSign::{Activation, Repression};
    use crate::{PerturbError, PoolEdge};
    use pretty_assertions::assert_eq;

    #[test]
    fn read_node_list() {
        let content = "# name, score\nX1, 0.5\n\nX2\t0.3\nX3 extra columns\n";
        assert_eq!(vec!["X1", "X2", "X3"], parse_node_list(content));
        assert!(parse_node_list("# only a header\n").is_empty());
    }

    #[test]
    fn read_edge_list() {
        let content = "# edge, score\nX1 = a(X2), 0.9\nX2=r(X3)\tcomment\nX3 = repression(X3)\n";
        assert_eq!(
            vec![
                PoolEdge::new("X2", "X1", Activation),
                PoolEdge::new("X3", "X2", Repression),
                PoolEdge::new("X3", "X3", Repression),
            ],
            parse_edge_list(content).unwrap()
        );
    }

    #[test]
    fn read_invalid_edge_list() {
        assert!(matches!(
            parse_edge_list("X1 = ar(X2)\n"),
            Err(PerturbError::InvalidEdgeType(kind)) if kind == "ar"
        ));
        assert!(matches!(
            parse_edge_list("X1 = inhibits(X2)\n"),
            Err(PerturbError::InvalidEdgeType(_))
        ));
        assert!(matches!(
            parse_edge_list("X1\n"),
            Err(PerturbError::MalformedAllowList { .. })
        ));
        assert!(matches!(
            parse_edge_list("X1 = a()\n"),
            Err(PerturbError::MalformedAllowList { .. })
        ));
    }
}
