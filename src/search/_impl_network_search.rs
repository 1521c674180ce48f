use crate::config::SearchConfig;
use crate::filters::ComputabilityOracle;
use crate::search::{CandidateOutcome, NetworkSearch, SearchOutcome, Termination};
use crate::{LabeledGraph, PerturbError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, info};

/// How often (in iterations) the search reports its progress.
const PROGRESS_INTERVAL: usize = 1000;

impl<'a, O: ComputabilityOracle + ?Sized> NetworkSearch<'a, O> {
    /// Prepare a search around the network described by `seed_spec`.
    ///
    /// Fails when the seed cannot be parsed, or when it contains a self-repression. The
    /// seed is never repaired.
    pub fn new(
        config: SearchConfig,
        oracle: &'a O,
        seed_spec: &str,
    ) -> Result<NetworkSearch<'a, O>, PerturbError> {
        let seed = LabeledGraph::try_from_spec(seed_spec)?;
        seed.validate()?;
        let seed_spec = seed.to_spec();
        let rng = StdRng::seed_from_u64(config.random_seed);
        Ok(NetworkSearch {
            config,
            oracle,
            seed,
            seed_spec,
            rng,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn seed(&self) -> &LabeledGraph {
        &self.seed
    }

    /// The normalised specification of the seed network.
    pub fn seed_spec(&self) -> &str {
        &self.seed_spec
    }

    /// Build and evaluate one random perturbation of the seed network.
    pub fn candidate(&mut self) -> CandidateOutcome {
        let mut graph = self.seed.clone();
        let counts = self.config.scheduler.sample(&mut self.rng);
        if let Err(reason) = self.config.mutator.apply(&mut graph, &counts, &mut self.rng) {
            if self.config.verbose {
                info!(%reason, ?counts, "Aborted network.");
            }
            return CandidateOutcome::Aborted(reason);
        }
        let spec = graph.to_spec();
        match self.config.pipeline.evaluate(&graph, &spec, self.oracle) {
            Ok(()) => CandidateOutcome::Accepted(spec),
            Err(rejection) => {
                if self.config.verbose {
                    info!(%rejection, %spec, "Not using network.");
                }
                CandidateOutcome::Rejected(rejection)
            }
        }
    }

    /// Run the search until enough networks are found or the time runs out.
    ///
    /// The seed network itself is part of the result if it passes the filters. Reaching
    /// the timeout is not an error; the networks found so far are returned.
    #[tracing::instrument(name = "search", skip_all, fields(random_seed = self.config.random_seed))]
    pub fn run(mut self) -> SearchOutcome {
        info!(
            nodes = self.seed.num_vertices(),
            edges = self.seed.num_edges(),
            target = self.config.target,
            timeout = ?self.config.timeout,
            "Starting perturbation search."
        );
        let mut outcome = SearchOutcome::new();
        match self
            .config
            .pipeline
            .evaluate(&self.seed, &self.seed_spec, self.oracle)
        {
            Ok(()) => {
                outcome.networks.insert(self.seed_spec.clone());
            }
            Err(rejection) => {
                info!(%rejection, "Seed network does not pass the filters.");
                outcome.record(rejection.category());
            }
        }

        let start = Instant::now();
        while outcome.networks.len() < self.config.target && start.elapsed() < self.config.timeout
        {
            outcome.iterations += 1;
            match self.candidate() {
                CandidateOutcome::Accepted(spec) => {
                    if !outcome.networks.insert(spec) {
                        debug!("Duplicate network.");
                    }
                }
                failed => {
                    if let Some(category) = failed.category() {
                        outcome.record(category);
                    }
                }
            }
            if outcome.iterations % PROGRESS_INTERVAL == 0 {
                info!(
                    iterations = outcome.iterations,
                    accepted = outcome.networks.len(),
                    tally = ?outcome.tally,
                    "Search progress."
                );
            }
        }

        outcome.termination = if outcome.networks.len() >= self.config.target {
            Termination::TargetReached
        } else {
            Termination::TimedOut
        };
        info!(
            iterations = outcome.iterations,
            accepted = outcome.networks.len(),
            tally = ?outcome.tally,
            termination = %outcome.termination,
            "Perturbation search finished."
        );
        outcome
    }
}

/// Run an independent search around every network in `seeds` and return the union of
/// all accepted networks.
///
/// Every search starts from the same random seed. Fails on the first invalid seed network,
/// before any search is started.
pub fn perturb_networks<O, S>(
    config: &SearchConfig,
    oracle: &O,
    seeds: &[S],
) -> Result<BTreeSet<String>, PerturbError>
where
    O: ComputabilityOracle + ?Sized,
    S: AsRef<str>,
{
    let searches = seeds
        .iter()
        .map(|seed| NetworkSearch::new(config.clone(), oracle, seed.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut networks = BTreeSet::new();
    for search in searches {
        networks.extend(search.run().networks);
    }
    Ok(networks)
}

#[cfg(test)]
mod tests {
    use crate::config::{SearchConfig, SearchParams};
    use crate::filters::{MonotoneFunctionOracle, Rejection};
    use crate::perturbation::AbortReason;
    use crate::search::{perturb_networks, CandidateOutcome, NetworkSearch, Termination};
    use crate::{LabeledGraph, PerturbError};
    use num_bigint::BigUint;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn accept_all(_: &str) -> Result<BigUint, String> {
        Ok(BigUint::from(1u32))
    }

    fn config(json: &str) -> SearchConfig {
        SearchParams::from_json(json).unwrap().into_config().unwrap()
    }

    #[test]
    fn invalid_seed_is_fatal() {
        let config = config(r#"{"random_seed": 1}"#);
        let oracle = accept_all;
        assert!(matches!(
            NetworkSearch::new(config.clone(), &oracle, "A : (~A) : E\n"),
            Err(PerturbError::SelfRepression(_))
        ));
        assert!(matches!(
            NetworkSearch::new(config.clone(), &oracle, "A : (A)(A) : E\n"),
            Err(PerturbError::MultiEdge { .. })
        ));
        assert!(matches!(
            NetworkSearch::new(config, &oracle, "A (A) E\n"),
            Err(PerturbError::MalformedSpec { .. })
        ));
    }

    #[test]
    fn seed_spec_is_normalised() {
        let config = config(r#"{"random_seed": 1}"#);
        let oracle = accept_all;
        let search = NetworkSearch::new(config, &oracle, "B : (A) : E\nA : (A)").unwrap();
        assert_eq!("A : (A) : E\nB : (A) : E\n", search.seed_spec());
        assert_eq!(2, search.seed().num_vertices());
    }

    #[test]
    fn candidate_outcomes() {
        let config = config(
            r#"{"random_seed": 3, "range_operations": [1, 1],
                "probabilities": {"addNode": 0, "addEdge": 0, "removeEdge": 0, "removeNode": 1}}"#,
        );
        let oracle = accept_all;
        // A single vertex can never be removed.
        let mut search = NetworkSearch::new(config, &oracle, "A : (A) : E\n").unwrap();
        for _ in 0..5 {
            assert_eq!(
                CandidateOutcome::Aborted(AbortReason::TooManyNodeRemovals),
                search.candidate()
            );
        }
    }

    #[test]
    fn run_until_target() {
        let config = config(
            r#"{"random_seed": 7, "numneighbors": 3, "time_to_wait": 10,
                "probabilities": {"addNode": 0, "addEdge": 1, "removeEdge": 0, "removeNode": 0},
                "range_operations": [1, 1]}"#,
        );
        let oracle = MonotoneFunctionOracle;
        let outcome = NetworkSearch::new(config, &oracle, "A : (A) : E\nB : (A) : E\n")
            .unwrap()
            .run();
        assert_eq!(Termination::TargetReached, outcome.termination);
        // B has no outgoing edge, so the added edge is always `B -> A`.
        assert_eq!(3, outcome.networks.len());
        assert!(outcome.networks.contains("A : (A) : E\nB : (A) : E\n"));
        for spec in &outcome.networks {
            let graph = LabeledGraph::try_from_spec(spec).unwrap();
            assert_eq!(2, graph.num_vertices());
            assert!(graph.validate().is_ok());
        }
    }

    #[test]
    fn rejected_seed_is_tallied() {
        let config = config(
            r#"{"random_seed": 7, "numneighbors": 2, "time_to_wait": 0,
                "filters": {"is_feed_forward": {}}}"#,
        );
        let oracle = accept_all;
        let outcome = NetworkSearch::new(config, &oracle, "A : (~B) : E\nB : (A) : E\n")
            .unwrap()
            .run();
        assert_eq!(Termination::TimedOut, outcome.termination);
        assert_eq!(0, outcome.iterations);
        assert!(outcome.networks.is_empty());
        assert_eq!(
            Some(&1),
            outcome.tally.get(Rejection::NotFeedForward.category())
        );
    }

    #[test]
    fn multiple_seeds() {
        let mut config = config(r#"{"numneighbors": 1, "random_seed": 5}"#);
        config.timeout = Duration::from_secs(5);
        let oracle = accept_all;
        let seeds = ["A : (A) : E\n", "B : (B) : E\n"];
        let networks = perturb_networks(&config, &oracle, &seeds).unwrap();
        assert_eq!(
            vec!["A : (A) : E\n", "B : (B) : E\n"],
            networks.iter().map(|it| it.as_str()).collect::<Vec<_>>()
        );
        assert!(perturb_networks(&config, &oracle, &["A : (~A) : E\n"]).is_err());
    }
}
