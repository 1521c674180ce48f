//! The error type shared by all fallible operations of this crate.
//!
//! Only fatal conditions are errors: invalid configuration, an invalid seed network, or
//! unreadable input files. Rejected or aborted perturbation candidates are ordinary values
//! (see [crate::search::CandidateOutcome]).

use crate::VertexId;
use thiserror::Error;

/// Fatal errors raised while configuring or initialising a perturbation search.
#[derive(Debug, Error)]
pub enum PerturbError {
    /// A filter name that is not present in the filter registry.
    #[error("filter `{name}` is not implemented")]
    UnknownFilter { name: String },
    /// A filter keyword argument with an unexpected name or value.
    #[error("invalid argument `{argument}` for filter `{filter}`: {reason}")]
    InvalidFilterArgument {
        filter: String,
        argument: String,
        reason: String,
    },
    /// Operation probabilities that cannot be normalised.
    #[error("invalid operation probabilities: {0}")]
    InvalidProbabilities(String),
    /// An empty or inverted operation count range.
    #[error("invalid operation range [{min}, {max}]")]
    InvalidRange { min: usize, max: usize },
    /// A negative or non-finite search timeout.
    #[error("invalid timeout of {0} seconds")]
    InvalidTimeout(f64),
    /// The number of networks to generate must be positive.
    #[error("the number of requested networks must be positive")]
    InvalidTarget,
    /// An edge allow-list entry whose type is not exactly one of activation or repression.
    #[error("regulation type `{0}` is ill-specified in edge list")]
    InvalidEdgeType(String),
    /// An allow-list line that does not have the expected `TARGET = TYPE(SOURCE)` shape.
    #[error("malformed allow-list line `{line}`")]
    MalformedAllowList { line: String },
    /// A network specification line that cannot be tokenized.
    #[error("malformed network specification line `{line}`")]
    MalformedSpec { line: String },
    /// A network specification that declares the same node twice.
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),
    /// A network specification that references a node that is never declared.
    #[error("node `{target}` is regulated by undeclared node `{regulator}`")]
    UnknownRegulator { regulator: String, target: String },
    /// A network specification that mentions the same regulation more than once.
    #[error("node `{target}` is regulated by `{regulator}` more than once")]
    MultiEdge { regulator: String, target: String },
    /// A repression edge from a vertex to itself.
    #[error("node `{0}` is self-repressing")]
    SelfRepression(String),
    /// A vertex label lookup that matched more than one vertex.
    #[error("label `{label}` is shared by vertices {vertices:?}")]
    AmbiguousLabel {
        label: String,
        vertices: Vec<VertexId>,
    },
    /// Neither the command line nor the parameters name a seed network file.
    #[error("no seed network file given")]
    MissingNetworkFile,
    /// An input file that cannot be read.
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A parameter or network file that is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
