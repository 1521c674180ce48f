use crate::filters::{ComputabilityOracle, FilterPipeline, Rejection, StructuralFilter};
use crate::{LabeledGraph, PerturbError};
use num_bigint::BigUint;
use serde_json::{Map, Value};

impl FilterPipeline {
    pub fn new(structural: Vec<StructuralFilter>, max_parameters: u64) -> FilterPipeline {
        FilterPipeline {
            structural,
            max_parameters,
        }
    }

    /// Build a pipeline from a map of filter names to their keyword arguments.
    ///
    /// Filters are applied in the iteration order of `filters`.
    pub fn from_named(
        filters: &Map<String, Value>,
        max_parameters: u64,
    ) -> Result<FilterPipeline, PerturbError> {
        let structural = filters
            .iter()
            .map(|(name, kwargs)| StructuralFilter::from_name(name, kwargs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FilterPipeline::new(structural, max_parameters))
    }

    pub fn structural_filters(&self) -> &[StructuralFilter] {
        &self.structural
    }

    pub fn max_parameters(&self) -> u64 {
        self.max_parameters
    }

    /// Decide whether the candidate `graph` with specification `spec` is accepted.
    ///
    /// The oracle is queried exactly once, before any structural filter. An empty
    /// specification is rejected without querying the oracle.
    pub fn evaluate<O: ComputabilityOracle + ?Sized>(
        &self,
        graph: &LabeledGraph,
        spec: &str,
        oracle: &O,
    ) -> Result<(), Rejection> {
        if spec.trim().is_empty() {
            return Err(Rejection::NotComputable);
        }
        let parameters = oracle
            .parameter_count(spec)
            .map_err(|_| Rejection::NotComputable)?;
        if parameters > BigUint::from(self.max_parameters) {
            return Err(Rejection::TooManyParameters);
        }
        self.structural
            .iter()
            .try_for_each(|filter| filter.check(graph))
    }
}
