use serde::Serialize;
use tracing::{debug, warn};

use super::consistency::{check_consistency_lenient, ConsistencyReport};
use super::error::{DomainError, Result};
use super::matrix::PairwiseMatrix;
use super::weights::extract_weights;

/// One alternative in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    /// 1-based position after sorting by score descending.
    pub rank: usize,
    pub label: String,
    pub score: f64,
    /// Filled in by a tier classifier after aggregation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// Everything an FAHP run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FahpResult {
    pub rows: Vec<RankedRow>,
    pub criteria_weights: Vec<f64>,
    /// `alternative_weights[j][i]`: weight of alternative j under criterion i, in input order.
    pub alternative_weights: Vec<Vec<f64>>,
    pub criteria_consistency: ConsistencyReport,
    pub alternative_consistency: Vec<ConsistencyReport>,
}

impl FahpResult {
    /// True when the criteria matrix and every alternative matrix passed the CR check.
    pub fn all_consistent(&self) -> bool {
        self.criteria_consistency.consistent
            && self.alternative_consistency.iter().all(|r| r.consistent)
    }
}

/// Combine a criteria matrix and one alternative matrix per criterion into ranked scores.
///
/// `alternatives[i]` holds the alternative-vs-alternative judgments under criterion i and
/// `labels` names the alternatives in matrix order. Consistency is checked and reported but
/// never blocks the computation.
pub fn aggregate(
    criteria: &PairwiseMatrix,
    alternatives: &[PairwiseMatrix],
    labels: &[String],
) -> Result<FahpResult> {
    validate_shapes(criteria, alternatives, labels)?;

    let criteria_consistency = check_consistency_lenient(criteria)?;
    if !criteria_consistency.consistent {
        warn!(
            cr = criteria_consistency.consistency_ratio,
            "criteria comparison matrix is inconsistent, judgments should be revised"
        );
    }

    let mut alternative_consistency = Vec::with_capacity(alternatives.len());
    for (i, matrix) in alternatives.iter().enumerate() {
        let report = check_consistency_lenient(matrix)?;
        if !report.consistent {
            warn!(
                criterion = i + 1,
                cr = report.consistency_ratio,
                "alternative comparison matrix is inconsistent, judgments should be revised"
            );
        }
        alternative_consistency.push(report);
    }

    let criteria_weights = extract_weights(criteria)?;
    debug!(?criteria_weights, "criteria weights");

    let per_criterion = alternatives
        .iter()
        .map(extract_weights)
        .collect::<Result<Vec<_>, _>>()?;

    // Transpose to one row per alternative
    let alternative_weights: Vec<Vec<f64>> = (0..labels.len())
        .map(|j| per_criterion.iter().map(|weights| weights[j]).collect())
        .collect();

    let mut rows: Vec<RankedRow> = labels
        .iter()
        .zip(&alternative_weights)
        .map(|(label, weights)| RankedRow {
            rank: 0,
            label: label.clone(),
            score: dot(&criteria_weights, weights),
            tier: None,
        })
        .collect();

    // Stable sort keeps input order for ties
    rows.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, row) in rows.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    Ok(FahpResult {
        rows,
        criteria_weights,
        alternative_weights,
        criteria_consistency,
        alternative_consistency,
    })
}

fn validate_shapes(
    criteria: &PairwiseMatrix,
    alternatives: &[PairwiseMatrix],
    labels: &[String],
) -> Result<(), DomainError> {
    if alternatives.len() != criteria.size() {
        return Err(DomainError::CriteriaCountMismatch {
            criteria: criteria.size(),
            matrices: alternatives.len(),
        });
    }

    let expected = alternatives[0].size();
    for (criterion, matrix) in alternatives.iter().enumerate() {
        if matrix.size() != expected {
            return Err(DomainError::RaggedAlternatives {
                criterion,
                found: matrix.size(),
                expected,
            });
        }
    }

    if labels.len() != expected {
        return Err(DomainError::LabelCountMismatch {
            labels: labels.len(),
            size: expected,
        });
    }
    Ok(())
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
