//! Search parameters, as read from a `.json` parameter file.
//!
//! A [SearchParams] object mirrors the parameter file one-to-one, including its historical
//! key names (`numneighbors`, `DSGRN_optimized`, ...). Every key is optional. Calling
//! [SearchParams::into_config] validates the parameters and produces an immutable
//! [SearchConfig] which is then consumed by the search itself. All configuration errors
//! are reported at that point, before the search begins.

use crate::allow_lists::{parse_edge_list, read_edge_file, read_node_file};
use crate::filters::FilterPipeline;
use crate::perturbation::{Mutator, OperationScheduler, OperationWeights};
use crate::{PerturbError, PoolEdge};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Raw search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Path to the file with the seed network(s). Only used by the command line tool.
    #[serde(default)]
    pub networkfile: Option<String>,
    /// The number of networks to generate.
    #[serde(default = "default_numneighbors", alias = "numperturbations")]
    pub numneighbors: usize,
    #[serde(default)]
    pub probabilities: OperationWeights,
    /// Inclusive range `[min, max]` of operations applied to a single candidate.
    #[serde(default = "default_range_operations")]
    pub range_operations: [usize; 2],
    /// Search timeout in seconds.
    #[serde(default = "default_time_to_wait")]
    pub time_to_wait: f64,
    /// The largest accepted parameter count.
    #[serde(default = "default_maxparams")]
    pub maxparams: u64,
    /// Structural filters and their keyword arguments.
    #[serde(default)]
    pub filters: Map<String, Value>,
    /// When false, every rejected candidate is logged individually.
    #[serde(default = "default_true")]
    pub compressed_output: bool,
    #[serde(default = "default_true", rename = "DSGRN_optimized")]
    pub dsgrn_optimized: bool,
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default)]
    pub nodelist: Vec<String>,
    /// Inline edge allow-list, one `TARGET = TYPE(SOURCE)` entry per item.
    #[serde(default)]
    pub edgelist: Vec<String>,
    /// Node allow-list file. Takes precedence over `nodelist`.
    #[serde(default)]
    pub nodefile: Option<String>,
    /// Edge allow-list file. Takes precedence over `edgelist`.
    #[serde(default)]
    pub edgefile: Option<String>,
}

/// Validated configuration of a single perturbation search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    pub target: usize,
    pub timeout: Duration,
    pub scheduler: OperationScheduler,
    pub mutator: Mutator,
    pub pipeline: FilterPipeline,
    pub random_seed: u64,
    pub verbose: bool,
}

fn default_numneighbors() -> usize {
    1000
}

fn default_range_operations() -> [usize; 2] {
    [1, 5]
}

fn default_time_to_wait() -> f64 {
    30.0
}

fn default_maxparams() -> u64 {
    20000
}

fn default_true() -> bool {
    true
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            networkfile: None,
            numneighbors: default_numneighbors(),
            probabilities: OperationWeights::default(),
            range_operations: default_range_operations(),
            time_to_wait: default_time_to_wait(),
            maxparams: default_maxparams(),
            filters: Map::new(),
            compressed_output: true,
            dsgrn_optimized: true,
            random_seed: None,
            nodelist: Vec::new(),
            edgelist: Vec::new(),
            nodefile: None,
            edgefile: None,
        }
    }
}

impl SearchParams {
    pub fn from_json(json: &str) -> Result<SearchParams, PerturbError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<SearchParams, PerturbError> {
        let content = crate::allow_lists::read_file(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Validate these parameters and build a [SearchConfig].
    ///
    /// Allow-list files are read at this point. When `random_seed` is missing, a seed is
    /// derived from the system clock.
    pub fn into_config(self) -> Result<SearchConfig, PerturbError> {
        if self.numneighbors == 0 {
            return Err(PerturbError::InvalidTarget);
        }
        let timeout = Duration::try_from_secs_f64(self.time_to_wait)
            .map_err(|_| PerturbError::InvalidTimeout(self.time_to_wait))?;
        let [min, max] = self.range_operations;
        let scheduler = OperationScheduler::new(self.probabilities, min, max)?;
        let pipeline = FilterPipeline::from_named(&self.filters, self.maxparams)?;

        let node_pool = match &self.nodefile {
            Some(path) => read_node_file(path)?,
            None => self.nodelist,
        };
        let edge_pool: Vec<PoolEdge> = match &self.edgefile {
            Some(path) => read_edge_file(path)?,
            None => parse_edge_list(&self.edgelist.join("\n"))?,
        };
        let mutator = Mutator::new(node_pool, edge_pool, self.dsgrn_optimized);

        let random_seed = self.random_seed.unwrap_or_else(clock_seed);

        Ok(SearchConfig {
            target: self.numneighbors,
            timeout,
            scheduler,
            mutator,
            pipeline,
            random_seed,
            verbose: !self.compressed_output,
        })
    }
}

/// **(internal)** A random seed derived from the current time.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|it| it.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::config::SearchParams;
    use crate::filters::StructuralFilter;
    use crate::perturbation::OperationWeights;
    use crate::EdgeSign::{Activation, Repression};
    use crate::{PerturbError, PoolEdge};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn default_parameters() {
        let params = SearchParams::from_json("{}").unwrap();
        assert_eq!(SearchParams::default(), params);
        let config = params.into_config().unwrap();
        assert_eq!(1000, config.target);
        assert_eq!(Duration::from_secs(30), config.timeout);
        assert_eq!(20000, config.pipeline.max_parameters());
        assert!(config.pipeline.structural_filters().is_empty());
        assert!(config.mutator.is_dsgrn_optimized());
        assert!(!config.verbose);
    }

    #[test]
    fn full_parameters() {
        let json = r#"{
            "networkfile": "network.txt",
            "numperturbations": 10,
            "probabilities": {"addNode": 0, "addEdge": 2, "removeEdge": 1, "removeNode": 1},
            "range_operations": [2, 3],
            "time_to_wait": 0.5,
            "maxparams": 100,
            "filters": {"constrained_outedges": {"max_outedges": 3}},
            "compressed_output": false,
            "DSGRN_optimized": false,
            "random_seed": 42,
            "nodelist": ["A", "B"],
            "edgelist": ["A = r(B)", "B = r(B)"]
        }"#;
        let params = SearchParams::from_json(json).unwrap();
        assert_eq!(Some("network.txt".to_string()), params.networkfile);
        assert_eq!(
            OperationWeights {
                add_node: 0.0,
                add_edge: 2.0,
                remove_edge: 1.0,
                remove_node: 1.0,
            },
            params.probabilities
        );
        let config = params.into_config().unwrap();
        assert_eq!(10, config.target);
        assert_eq!(Duration::from_millis(500), config.timeout);
        assert_eq!(42, config.random_seed);
        assert!(config.verbose);
        assert!(!config.mutator.is_dsgrn_optimized());
        assert_eq!(&["A", "B"], config.mutator.node_pool());
        assert_eq!(&[PoolEdge::new("B", "A", Repression)], config.mutator.edge_pool());
        assert_eq!(
            &[StructuralFilter::OutDegree {
                min: None,
                max: Some(3)
            }],
            config.pipeline.structural_filters()
        );
        assert_eq!(
            [0.0, 0.5, 0.75, 1.0],
            config.scheduler.cumulative_probabilities()
        );
    }

    #[test]
    fn allow_list_files_take_precedence() {
        let dir = std::env::temp_dir();
        let node_file = dir.join(format!("perturb-nodes-{}.txt", std::process::id()));
        let edge_file = dir.join(format!("perturb-edges-{}.txt", std::process::id()));
        std::fs::write(&node_file, "# name, score\nY, 0.5\nX, 0.2\n").unwrap();
        std::fs::write(&edge_file, "# target = type(source)\nY = a(X)\n").unwrap();

        let params = SearchParams {
            nodefile: Some(node_file.display().to_string()),
            edgefile: Some(edge_file.display().to_string()),
            nodelist: vec!["A".to_string()],
            edgelist: vec!["A = r(B)".to_string()],
            ..SearchParams::default()
        };
        let config = params.clone().into_config();
        std::fs::remove_file(&node_file).unwrap();
        std::fs::remove_file(&edge_file).unwrap();

        let config = config.unwrap();
        assert_eq!(&["X", "Y"], config.mutator.node_pool());
        assert_eq!(&[PoolEdge::new("X", "Y", Activation)], config.mutator.edge_pool());

        // Both files are gone now.
        assert!(matches!(
            params.clone().into_config(),
            Err(PerturbError::Io { .. })
        ));
        let edges_only = SearchParams {
            nodefile: None,
            ..params
        };
        assert!(matches!(
            edges_only.into_config(),
            Err(PerturbError::Io { .. })
        ));
    }

    #[test]
    fn invalid_parameters() {
        let invalid = |json: &str| SearchParams::from_json(json).unwrap().into_config();
        assert!(matches!(
            invalid(r#"{"numneighbors": 0}"#),
            Err(PerturbError::InvalidTarget)
        ));
        assert!(matches!(
            invalid(r#"{"range_operations": [3, 2]}"#),
            Err(PerturbError::InvalidRange { min: 3, max: 2 })
        ));
        assert!(matches!(
            invalid(r#"{"filters": {"is_acyclic": {}}}"#),
            Err(PerturbError::UnknownFilter { .. })
        ));
        assert!(matches!(
            invalid(r#"{"edgelist": ["A = ar(B)"]}"#),
            Err(PerturbError::InvalidEdgeType(_))
        ));
        assert!(matches!(
            invalid(
                r#"{"probabilities": {"addNode": 0, "addEdge": 0, "removeEdge": 0, "removeNode": 0}}"#
            ),
            Err(PerturbError::InvalidProbabilities(_))
        ));
        assert!(matches!(
            invalid(r#"{"time_to_wait": -1}"#),
            Err(PerturbError::InvalidTimeout(_))
        ));
        assert!(matches!(
            SearchParams::from_json("{\"numneighbors\": -1}"),
            Err(PerturbError::Json(_))
        ));
    }
}
