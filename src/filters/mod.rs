//! Acceptance filters for perturbed networks.
//!
//! Every candidate network passes through a [FilterPipeline]. The pipeline first asks
//! a [ComputabilityOracle] whether the network specification is well-formed and how large
//! its parameter space is. Networks which are not computable, or have too many parameters,
//! are rejected. The remaining networks are then checked by the user-selected
//! [StructuralFilter]s, in order, stopping at the first failure.

use num_bigint::BigUint;

/// **(internal)** Utility methods for `Rejection`.
mod _impl_rejection;
/// **(internal)** The structural filter registry.
mod _impl_structural_filter;
/// **(internal)** Closure oracles and the built-in `MonotoneFunctionOracle`.
mod _impl_computability_oracle;
/// **(internal)** Evaluation of the whole `FilterPipeline`.
mod _impl_filter_pipeline;

/// The reason why a candidate network was rejected by a filter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Rejection {
    NotComputable,
    TooManyParameters,
    NotConnected,
    NotStronglyConnected,
    NotFeedForward,
    InDegreeOutOfRange,
    OutDegreeOutOfRange,
}

/// A structural predicate over a candidate network.
///
/// Filters are created by name using [StructuralFilter::from_name], which validates
/// the filter's keyword arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StructuralFilter {
    /// The network is weakly connected (connected as an undirected graph).
    Connected,
    /// Every vertex of the network can reach every other vertex.
    StronglyConnected,
    /// The network has no strongly connected component with more than one vertex.
    FeedForward,
    /// The in-degree of every vertex is within the given inclusive bounds.
    InDegree {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// The out-degree of every vertex is within the given inclusive bounds.
    OutDegree {
        min: Option<usize>,
        max: Option<usize>,
    },
}

/// An external system that validates network specifications and computes the size
/// of their parameter space.
///
/// An `Err` result means the specification is not computable, with a human-readable
/// explanation. Any closure `Fn(&str) -> Result<BigUint, String>` is an oracle.
pub trait ComputabilityOracle {
    fn parameter_count(&self, spec: &str) -> Result<BigUint, String>;
}

/// A self-contained oracle that counts, for every node, the monotone Boolean functions
/// which are consistent with the signs of its regulations and depend on all of them.
///
/// The parameter count of the network is the product of these per-node counts. Nodes with
/// more than [MonotoneFunctionOracle::MAX_REGULATORS] regulators are not computable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MonotoneFunctionOracle;

/// The computability check followed by a sequence of structural filters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterPipeline {
    structural: Vec<StructuralFilter>,
    max_parameters: u64,
}
