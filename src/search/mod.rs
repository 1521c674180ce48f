//! The perturbation search loop.
//!
//! A [NetworkSearch] repeatedly clones the seed network, applies a random batch of
//! mutations, and submits the result to the [FilterPipeline](crate::filters::FilterPipeline).
//! Accepted specifications are collected in a set until either the requested number of
//! networks is reached, or the search times out. Each candidate ends up as
//! a [CandidateOutcome]; failed candidates are tallied by category.

use crate::config::SearchConfig;
use crate::filters::Rejection;
use crate::perturbation::AbortReason;
use crate::LabeledGraph;
use rand::rngs::StdRng;
use std::collections::{BTreeMap, BTreeSet};

/// **(internal)** Construction and execution of a `NetworkSearch`.
mod _impl_network_search;
/// **(internal)** Utility methods for search results.
mod _impl_search_outcome;

pub use _impl_network_search::perturb_networks;

/// The result of building and filtering one candidate network.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CandidateOutcome {
    /// The candidate passed all filters; contains its network specification.
    Accepted(String),
    /// The candidate could not be built.
    Aborted(AbortReason),
    /// The candidate was built, but rejected by a filter.
    Rejected(Rejection),
}

/// The reason why a search stopped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Termination {
    TargetReached,
    TimedOut,
}

/// Everything a finished search produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    /// Distinct accepted network specifications.
    pub networks: BTreeSet<String>,
    /// The number of aborted and rejected candidates, by category.
    pub tally: BTreeMap<&'static str, usize>,
    /// The number of generated candidates (not counting the seed).
    pub iterations: usize,
    pub termination: Termination,
}

/// A single perturbation search around one seed network.
///
/// The search owns its random number generator, so two searches with the same seed
/// network and configuration produce the same networks.
pub struct NetworkSearch<'a, O: ?Sized> {
    config: SearchConfig,
    oracle: &'a O,
    seed: LabeledGraph,
    seed_spec: String,
    rng: StdRng,
}
