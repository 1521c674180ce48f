use crate::{EdgeSign, LabeledGraph, PerturbError, VertexId, NAME_REGEX, SPEC_LINE_REGEX};
use fxhash::FxHashMap;
use std::convert::TryFrom;

impl LabeledGraph {
    /// Build a `LabeledGraph` from an essential network specification.
    ///
    /// Vertex identifiers are assigned by line order (the first declared node is vertex `0`),
    /// so that re-reading a specification produced by [LabeledGraph::to_spec] assigns the same
    /// identifiers to the same nodes. Blank lines are ignored, the `: E` marker is optional.
    ///
    /// Fails when a line cannot be tokenized into a name followed by a colon-delimited
    /// expression, when a node is declared twice, when a regulator is never declared, or
    /// when the same regulation is mentioned twice (which would create a multi-edge).
    pub fn try_from_spec(spec: &str) -> Result<LabeledGraph, PerturbError> {
        let mut declarations = Vec::new();
        for line in spec.lines().filter(|it| !it.trim().is_empty()) {
            let malformed = || PerturbError::MalformedSpec {
                line: line.to_string(),
            };
            let captures = SPEC_LINE_REGEX.captures(line).ok_or_else(malformed)?;
            let name = captures
                .name("name")
                .map(|it| it.as_str())
                .ok_or_else(malformed)?;
            let expression = captures.name("expr").map_or("", |it| it.as_str());
            let regulators = parse_regulators(expression).ok_or_else(malformed)?;
            declarations.push((name, regulators));
        }

        let mut graph = LabeledGraph::new();
        let mut name_to_vertex: FxHashMap<&str, VertexId> = FxHashMap::default();
        for (name, _) in &declarations {
            if name_to_vertex.contains_key(name) {
                return Err(PerturbError::DuplicateNode(name.to_string()));
            }
            name_to_vertex.insert(*name, graph.add_vertex(name));
        }

        for (target, regulators) in &declarations {
            let target_vertex = name_to_vertex[target];
            for (regulator, sign) in regulators {
                let regulator_vertex = *name_to_vertex.get(regulator).ok_or_else(|| {
                    PerturbError::UnknownRegulator {
                        regulator: regulator.to_string(),
                        target: target.to_string(),
                    }
                })?;
                if graph
                    .add_edge(regulator_vertex, target_vertex, *sign)
                    .is_some()
                {
                    return Err(PerturbError::MultiEdge {
                        regulator: regulator.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(graph)
    }
}

impl TryFrom<&str> for LabeledGraph {
    type Error = PerturbError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        LabeledGraph::try_from_spec(value)
    }
}

/// **(internal)** Split a regulatory expression into regulator names with their signs.
///
/// Parentheses, `+` and `*` only delimit names. A leading `~` marks a repressor.
/// Returns `None` if some token is not a valid name.
fn parse_regulators(expression: &str) -> Option<Vec<(&str, EdgeSign)>> {
    expression
        .split(|c: char| c == '(' || c == ')' || c == '+' || c == '*' || c.is_whitespace())
        .filter(|it| !it.is_empty())
        .map(|token| {
            let (name, sign) = match token.strip_prefix('~') {
                Some(name) => (name, EdgeSign::Repression),
                None => (token, EdgeSign::Activation),
            };
            if NAME_REGEX.is_match(name) {
                Some((name, sign))
            } else {
                None
            }
        })
        .collect()
}
