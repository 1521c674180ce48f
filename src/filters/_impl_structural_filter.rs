use crate::filters::{Rejection, StructuralFilter};
use crate::{LabeledGraph, PerturbError};
use serde_json::Value;

impl StructuralFilter {
    /// Names of all filters in the registry.
    pub const NAMES: [&'static str; 5] = [
        "is_connected",
        "is_strongly_connected",
        "is_feed_forward",
        "constrained_inedges",
        "constrained_outedges",
    ];

    /// Create a filter from its registry `name` and keyword arguments.
    ///
    /// The arguments must be a JSON object (or `null`). Degree filters accept optional
    /// non-negative integer bounds `min_inedges`/`max_inedges` (resp. `min_outedges`/
    /// `max_outedges`); other filters accept no arguments.
    pub fn from_name(name: &str, kwargs: &Value) -> Result<StructuralFilter, PerturbError> {
        let expected: &[&str] = match name {
            "constrained_inedges" => &["min_inedges", "max_inedges"],
            "constrained_outedges" => &["min_outedges", "max_outedges"],
            _ if Self::NAMES.contains(&name) => &[],
            _ => {
                return Err(PerturbError::UnknownFilter {
                    name: name.to_string(),
                })
            }
        };
        let invalid = |argument: &str, reason: &str| PerturbError::InvalidFilterArgument {
            filter: name.to_string(),
            argument: argument.to_string(),
            reason: reason.to_string(),
        };

        let arguments = match kwargs {
            Value::Null => None,
            Value::Object(map) => Some(map),
            _ => return Err(invalid("kwargs", "expected an object")),
        };
        let mut bounds = [None, None];
        for (key, value) in arguments.into_iter().flatten() {
            let Some(position) = expected.iter().position(|it| *it == key.as_str()) else {
                return Err(invalid(key, "unknown argument"));
            };
            if value.is_null() {
                continue;
            }
            let bound = value
                .as_u64()
                .and_then(|it| usize::try_from(it).ok())
                .ok_or_else(|| invalid(key, "expected a non-negative integer"))?;
            bounds[position] = Some(bound);
        }
        let [min, max] = bounds;

        Ok(match name {
            "is_connected" => StructuralFilter::Connected,
            "is_strongly_connected" => StructuralFilter::StronglyConnected,
            "is_feed_forward" => StructuralFilter::FeedForward,
            "constrained_inedges" => StructuralFilter::InDegree { min, max },
            _ => StructuralFilter::OutDegree { min, max },
        })
    }

    /// The registry name of this filter.
    pub fn name(&self) -> &'static str {
        match self {
            StructuralFilter::Connected => "is_connected",
            StructuralFilter::StronglyConnected => "is_strongly_connected",
            StructuralFilter::FeedForward => "is_feed_forward",
            StructuralFilter::InDegree { .. } => "constrained_inedges",
            StructuralFilter::OutDegree { .. } => "constrained_outedges",
        }
    }

    /// Check that `graph` satisfies this filter.
    ///
    /// An empty graph is neither connected nor strongly connected.
    pub fn check(&self, graph: &LabeledGraph) -> Result<(), Rejection> {
        let satisfied = match *self {
            StructuralFilter::Connected => graph.is_weakly_connected(),
            StructuralFilter::StronglyConnected => graph.is_strongly_connected(),
            StructuralFilter::FeedForward => graph.is_feed_forward(),
            StructuralFilter::InDegree { min, max } => graph
                .vertices()
                .all(|v| in_bounds(graph.in_degree(v), min, max)),
            StructuralFilter::OutDegree { min, max } => graph
                .vertices()
                .all(|v| in_bounds(graph.out_degree(v), min, max)),
        };
        if satisfied {
            Ok(())
        } else {
            Err(self.rejection())
        }
    }

    fn rejection(&self) -> Rejection {
        match self {
            StructuralFilter::Connected => Rejection::NotConnected,
            StructuralFilter::StronglyConnected => Rejection::NotStronglyConnected,
            StructuralFilter::FeedForward => Rejection::NotFeedForward,
            StructuralFilter::InDegree { .. } => Rejection::InDegreeOutOfRange,
            StructuralFilter::OutDegree { .. } => Rejection::OutDegreeOutOfRange,
        }
    }
}

fn in_bounds(value: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

#[cfg(test)]
mod tests {
    use crate::filters::{Rejection, StructuralFilter};
    use crate::{LabeledGraph, PerturbError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn filter_registry() {
        for name in StructuralFilter::NAMES {
            let filter = StructuralFilter::from_name(name, &json!({})).unwrap();
            assert_eq!(name, filter.name());
        }
        assert_eq!(
            StructuralFilter::Connected,
            StructuralFilter::from_name("is_connected", &json!(null)).unwrap()
        );
        assert!(matches!(
            StructuralFilter::from_name("is_acyclic", &json!({})),
            Err(PerturbError::UnknownFilter { .. })
        ));
        assert!(matches!(
            StructuralFilter::from_name("is_connected", &json!({"min_inedges": 1})),
            Err(PerturbError::InvalidFilterArgument { .. })
        ));
        assert!(matches!(
            StructuralFilter::from_name("constrained_inedges", &json!({"min_inedges": -1})),
            Err(PerturbError::InvalidFilterArgument { .. })
        ));
        assert!(matches!(
            StructuralFilter::from_name("constrained_outedges", &json!([1, 2])),
            Err(PerturbError::InvalidFilterArgument { .. })
        ));
    }

    #[test]
    fn degree_bounds_are_optional() {
        let filter =
            StructuralFilter::from_name("constrained_inedges", &json!({"max_inedges": 2}))
                .unwrap();
        assert_eq!(
            StructuralFilter::InDegree {
                min: None,
                max: Some(2)
            },
            filter
        );
        let filter = StructuralFilter::from_name(
            "constrained_outedges",
            &json!({"min_outedges": 1, "max_outedges": 1}),
        )
        .unwrap();
        assert_eq!(
            StructuralFilter::OutDegree {
                min: Some(1),
                max: Some(1)
            },
            filter
        );
    }

    #[test]
    fn check_structural_filters() {
        // A 2-cycle with a self-activation on A.
        let cycle = LabeledGraph::try_from_spec("A : (A)(~B) : E\nB : (A) : E\n").unwrap();
        // A path A -> B -> C.
        let path = LabeledGraph::try_from_spec("A : (A) : E\nB : (A) : E\nC : (B) : E\n").unwrap();
        // Two disconnected self-loops.
        let split = LabeledGraph::try_from_spec("A : (A) : E\nB : (B) : E\n").unwrap();

        let connected = StructuralFilter::Connected;
        assert_eq!(Ok(()), connected.check(&cycle));
        assert_eq!(Ok(()), connected.check(&path));
        assert_eq!(Err(Rejection::NotConnected), connected.check(&split));
        assert_eq!(Err(Rejection::NotConnected), connected.check(&LabeledGraph::new()));

        let strong = StructuralFilter::StronglyConnected;
        assert_eq!(Ok(()), strong.check(&cycle));
        assert_eq!(Err(Rejection::NotStronglyConnected), strong.check(&path));

        let feed_forward = StructuralFilter::FeedForward;
        assert_eq!(Err(Rejection::NotFeedForward), feed_forward.check(&cycle));
        assert_eq!(Ok(()), feed_forward.check(&path));
        assert_eq!(Ok(()), feed_forward.check(&split));

        let in_degree = StructuralFilter::InDegree {
            min: Some(1),
            max: Some(1),
        };
        assert_eq!(Ok(()), in_degree.check(&path));
        assert_eq!(Err(Rejection::InDegreeOutOfRange), in_degree.check(&cycle));

        let out_degree = StructuralFilter::OutDegree {
            min: None,
            max: Some(1),
        };
        assert_eq!(Ok(()), out_degree.check(&split));
        assert_eq!(Err(Rejection::OutDegreeOutOfRange), out_degree.check(&path));
    }
}
