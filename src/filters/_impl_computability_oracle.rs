use crate::filters::{ComputabilityOracle, MonotoneFunctionOracle};
use crate::LabeledGraph;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// Dedekind numbers `D(0)` to `D(8)`: the number of monotone Boolean functions
/// of `n` variables.
const DEDEKIND: [u128; 9] = [
    2,
    3,
    6,
    20,
    168,
    7581,
    7828354,
    2414682040998,
    56130437228687557907788,
];

impl<F> ComputabilityOracle for F
where
    F: Fn(&str) -> Result<BigUint, String>,
{
    fn parameter_count(&self, spec: &str) -> Result<BigUint, String> {
        self(spec)
    }
}

impl MonotoneFunctionOracle {
    pub const MAX_REGULATORS: usize = DEDEKIND.len() - 1;

    /// The number of monotone Boolean functions of `arity` variables which depend on all
    /// of them, or `None` when `arity` is too large.
    ///
    /// Computed by inclusion-exclusion over the subsets of variables which are
    /// actually used. A function without inputs is treated as a single free parameter.
    pub fn essential_functions(arity: usize) -> Option<BigUint> {
        if arity == 0 {
            return Some(BigUint::one());
        }
        if arity > Self::MAX_REGULATORS {
            return None;
        }
        let mut total = BigInt::default();
        let mut binomial = BigInt::one();
        for k in (0..=arity).rev() {
            // `binomial` is C(arity, k) here.
            let term = &binomial * BigInt::from(DEDEKIND[k]);
            if (arity - k) % 2 == 0 {
                total += term;
            } else {
                total -= term;
            }
            binomial = binomial * BigInt::from(k) / BigInt::from(arity - k + 1);
        }
        total.to_biguint()
    }
}

impl ComputabilityOracle for MonotoneFunctionOracle {
    fn parameter_count(&self, spec: &str) -> Result<BigUint, String> {
        let graph = LabeledGraph::try_from_spec(spec).map_err(|e| e.to_string())?;
        if graph.num_vertices() == 0 {
            return Err("network has no nodes".to_string());
        }
        let mut count = BigUint::one();
        for vertex in graph.vertices() {
            let arity = graph.in_degree(vertex);
            let functions = Self::essential_functions(arity).ok_or_else(|| {
                format!("node `{}` has {} regulators", &graph[vertex], arity)
            })?;
            count *= functions;
        }
        Ok(count)
    }
}
