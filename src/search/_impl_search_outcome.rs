use crate::search::{CandidateOutcome, SearchOutcome, Termination};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Error, Formatter};

impl CandidateOutcome {
    /// The tally category of a failed candidate, or `None` if it was accepted.
    pub fn category(&self) -> Option<&'static str> {
        match self {
            CandidateOutcome::Accepted(_) => None,
            CandidateOutcome::Aborted(reason) => Some(reason.category()),
            CandidateOutcome::Rejected(rejection) => Some(rejection.category()),
        }
    }
}

impl SearchOutcome {
    pub(crate) fn new() -> SearchOutcome {
        SearchOutcome {
            networks: BTreeSet::new(),
            tally: BTreeMap::new(),
            iterations: 0,
            termination: Termination::TimedOut,
        }
    }

    /// Increment the tally of the given category.
    pub(crate) fn record(&mut self, category: &'static str) {
        *self.tally.entry(category).or_insert(0) += 1;
    }

    /// The total number of aborted and rejected candidates.
    pub fn failures(&self) -> usize {
        self.tally.values().sum()
    }
}

impl Display for Termination {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Termination::TargetReached => write!(f, "target reached"),
            Termination::TimedOut => write!(f, "timed out"),
        }
    }
}
