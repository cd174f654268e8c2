use serde::Serialize;
use tracing::debug;

use super::error::DomainError;
use super::matrix::PairwiseMatrix;

/// Intermediate and final values of the fuzzy geometric mean method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyWeights {
    /// Per-row fuzzy geometric mean, component-wise (l, m, u).
    pub geometric_means: Vec<[f64; 3]>,
    /// Column sums of `geometric_means`.
    pub geometric_mean_sum: [f64; 3],
    /// Crisp weight per row before normalization.
    pub raw: Vec<f64>,
    /// Weights summing to 1.
    pub normalized: Vec<f64>,
}

/// Run the fuzzy geometric mean method over a pairwise matrix.
///
/// Each row's TFN components are multiplied across the row and the n-th root taken.
/// The crisp weight of a row is the sum over components of its geometric mean divided
/// by the column sum of that component; weights are then normalized to sum to 1.
pub fn fuzzy_weights(matrix: &PairwiseMatrix) -> Result<FuzzyWeights, DomainError> {
    let n = matrix.size();
    let root = 1.0 / n as f64;

    let geometric_means: Vec<[f64; 3]> = matrix
        .rows()
        .map(|row| {
            let mut mean = [1.0; 3];
            for tfn in row {
                for (acc, c) in mean.iter_mut().zip(tfn.components()) {
                    *acc *= c;
                }
            }
            mean.map(|product| product.powf(root))
        })
        .collect();

    let mut geometric_mean_sum = [0.0; 3];
    for mean in &geometric_means {
        for k in 0..3 {
            geometric_mean_sum[k] += mean[k];
        }
    }
    if geometric_mean_sum.iter().any(|s| *s == 0.0) {
        return Err(DomainError::ZeroGeometricMeanSum);
    }

    let raw: Vec<f64> = geometric_means
        .iter()
        .map(|mean| (0..3).map(|k| mean[k] / geometric_mean_sum[k]).sum())
        .collect();

    let total: f64 = raw.iter().sum();
    let normalized = raw.iter().map(|w| w / total).collect();

    let weights = FuzzyWeights {
        geometric_means,
        geometric_mean_sum,
        raw,
        normalized,
    };
    debug!(
        geometric_means = ?weights.geometric_means,
        geometric_mean_sum = ?weights.geometric_mean_sum,
        raw = ?weights.raw,
        normalized = ?weights.normalized,
        "fuzzy weights"
    );
    Ok(weights)
}

/// Normalized crisp weight vector for a pairwise matrix.
pub fn extract_weights(matrix: &PairwiseMatrix) -> Result<Vec<f64>, DomainError> {
    fuzzy_weights(matrix).map(|w| w.normalized)
}
