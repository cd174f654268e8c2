use serde::Serialize;
use tracing::debug;

use super::error::{DomainError, NumericalError, Result};
use super::matrix::PairwiseMatrix;

/// Largest acceptable consistency ratio.
pub const CR_THRESHOLD: f64 = 0.10;

const MAX_ITERATIONS: usize = 10_000;
const TOLERANCE: f64 = 1e-12;

/// Outcome of a consistency check, with the intermediate values that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub size: usize,
    pub lambda_max: f64,
    pub random_index: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    pub consistent: bool,
}

impl ConsistencyReport {
    /// A 1x1 matrix holds no judgments to contradict.
    pub fn trivial() -> Self {
        Self {
            size: 1,
            lambda_max: 1.0,
            random_index: random_index(1),
            consistency_index: 0.0,
            consistency_ratio: 0.0,
            consistent: true,
        }
    }
}

/// Random index used to scale CI into CR. Not Saaty's table.
pub fn random_index(n: usize) -> f64 {
    let n = n as f64;
    0.1 * (n - 1.0) / n + 0.9
}

/// Check a pairwise matrix for consistency using only its modal values.
///
/// Fails with [`DomainError::MatrixTooSmall`] for n < 2, where CI is undefined.
pub fn check_consistency(matrix: &PairwiseMatrix) -> Result<ConsistencyReport> {
    let n = matrix.size();
    if n < 2 {
        return Err(DomainError::MatrixTooSmall { size: n }.into());
    }

    let modal = matrix.modal_values();
    debug!(?modal, "modal value matrix");

    let lambda_max = principal_eigenvalue(&modal)?;
    let random_index = random_index(n);
    let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
    let consistency_ratio = consistency_index / random_index;
    let consistent = consistency_ratio <= CR_THRESHOLD;

    debug!(
        lambda_max,
        random_index, consistency_index, consistency_ratio, consistent, "consistency check"
    );

    Ok(ConsistencyReport {
        size: n,
        lambda_max,
        random_index,
        consistency_index,
        consistency_ratio,
        consistent,
    })
}

/// Like [`check_consistency`] but treats a single-item matrix as trivially consistent.
pub fn check_consistency_lenient(matrix: &PairwiseMatrix) -> Result<ConsistencyReport> {
    if matrix.size() == 1 {
        return Ok(ConsistencyReport::trivial());
    }
    check_consistency(matrix)
}

/// Perron root of a non-negative square matrix by power iteration.
///
/// For the positive matrices the comparator produces this is the real eigenvalue of
/// largest modulus, i.e. lambda max.
fn principal_eigenvalue(matrix: &[Vec<f64>]) -> Result<f64, NumericalError> {
    let n = matrix.len();
    let mut x = vec![1.0 / n as f64; n];
    let mut previous = f64::NAN;

    for iteration in 0..MAX_ITERATIONS {
        let y: Vec<f64> = matrix
            .iter()
            .map(|row| row.iter().zip(&x).map(|(a, b)| a * b).sum())
            .collect();

        // x sums to 1, so the sum of Mx is the Rayleigh-style estimate
        let estimate: f64 = y.iter().sum();
        if !estimate.is_finite() || estimate <= 0.0 {
            return Err(NumericalError::DegenerateIterate);
        }

        x = y.into_iter().map(|v| v / estimate).collect();

        if (estimate - previous).abs() <= TOLERANCE * estimate.max(1.0) {
            debug!(iterations = iteration + 1, estimate, "power iteration converged");
            return Ok(estimate);
        }
        previous = estimate;
    }

    Err(NumericalError::EigenNoConvergence {
        iterations: MAX_ITERATIONS,
    })
}
