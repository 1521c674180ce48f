use crate::perturbation::{OperationCounts, OperationScheduler, OperationWeights};
use crate::PerturbError;
use rand::Rng;

impl OperationWeights {
    /// The weights as an array, in the order add node, add edge, remove edge, remove node.
    pub fn to_array(self) -> [f64; 4] {
        [
            self.add_node,
            self.add_edge,
            self.remove_edge,
            self.remove_node,
        ]
    }
}

/// Only node and edge additions, with equal weight.
impl Default for OperationWeights {
    fn default() -> Self {
        OperationWeights {
            add_node: 0.5,
            add_edge: 0.5,
            remove_edge: 0.0,
            remove_node: 0.0,
        }
    }
}

impl OperationCounts {
    /// The total number of scheduled operations.
    pub fn total(&self) -> usize {
        self.add_nodes + self.add_edges + self.remove_edges + self.remove_nodes
    }
}

impl OperationScheduler {
    /// Create a scheduler for the given operation `weights` and an inclusive
    /// `[min_operations, max_operations]` range of total operation counts.
    ///
    /// Weights must be non-negative and finite with a positive sum; they are normalised
    /// to probabilities.
    pub fn new(
        weights: OperationWeights,
        min_operations: usize,
        max_operations: usize,
    ) -> Result<OperationScheduler, PerturbError> {
        if min_operations > max_operations {
            return Err(PerturbError::InvalidRange {
                min: min_operations,
                max: max_operations,
            });
        }
        let weights = weights.to_array();
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(PerturbError::InvalidProbabilities(format!(
                "weight {} is not a non-negative number",
                bad
            )));
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(PerturbError::InvalidProbabilities(
                "at least one weight must be positive".to_string(),
            ));
        }

        let mut cumulative = [0.0; 4];
        let mut running = 0.0;
        for (i, weight) in weights.iter().enumerate() {
            running += weight;
            cumulative[i] = running / sum;
        }
        // Rounding must never leave a sample in [0, 1) without a bucket.
        cumulative[3] = 1.0;

        Ok(OperationScheduler {
            cumulative,
            min_operations,
            max_operations,
        })
    }

    /// The normalised cumulative probabilities of the four operation kinds.
    pub fn cumulative_probabilities(&self) -> [f64; 4] {
        self.cumulative
    }

    /// Draw the number of operations of each kind for one candidate.
    ///
    /// The total is uniform in the configured range. Then, every operation draws a uniform
    /// sample from `[0, 1)` and the sorted samples are assigned to the operation kinds
    /// by the cumulative probability interval they fall into. This amounts to a multinomial
    /// draw that is fully determined by the state of `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OperationCounts {
        let total = rng.gen_range(self.min_operations..=self.max_operations);
        let mut samples: Vec<f64> = (0..total).map(|_| rng.gen::<f64>()).collect();
        samples.sort_by(|a, b| a.total_cmp(b));

        let mut counts = [0usize; 4];
        let mut bucket = 0;
        for sample in samples {
            while bucket < 3 && sample >= self.cumulative[bucket] {
                bucket += 1;
            }
            counts[bucket] += 1;
        }

        OperationCounts {
            add_nodes: counts[0],
            add_edges: counts[1],
            remove_edges: counts[2],
            remove_nodes: counts[3],
        }
    }
}
