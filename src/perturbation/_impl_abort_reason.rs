use crate::perturbation::AbortReason;
use std::fmt::{Display, Error, Formatter};

impl AbortReason {
    /// A short, stable description used to aggregate aborted candidates.
    pub fn category(&self) -> &'static str {
        match self {
            AbortReason::TooManyNodeRemovals => "Too many nodes to remove",
            AbortReason::TooManyEdgeRemovals => "Too many edges to remove",
            AbortReason::NoCompatibleEdge => "No compatible edge for degree completion",
            AbortReason::EdgeBudgetExceeded => "Degree completion exceeded edge budget",
            AbortReason::EdgeSpaceExhausted => "Edge space exhausted",
        }
    }
}

impl Display for AbortReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.category())
    }
}
