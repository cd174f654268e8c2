use tracing::trace;

use super::error::DomainError;
use super::matrix::PairwiseMatrix;
use super::tfn::{DiffRounding, Tfn};

/// One criterion, or one alternative rated under one criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub label: String,
    pub score: f64,
}

impl ScoredItem {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Derive a fuzzy pairwise comparison matrix from scored items.
///
/// Items sharing a label or a score are judged equal, (1,1,3). Otherwise the absolute
/// score difference selects a band from [`Tfn::for_difference`], reciprocated when
/// item i scores lower than item j. The diagonal falls out of the equal-score rule.
pub fn compare(items: &[ScoredItem], rounding: DiffRounding) -> Result<PairwiseMatrix, DomainError> {
    if let Some(item) = items.iter().find(|item| !item.score.is_finite()) {
        return Err(DomainError::NonFiniteScore {
            label: item.label.clone(),
        });
    }

    let mut rows = Vec::with_capacity(items.len());
    for a in items {
        let mut row = Vec::with_capacity(items.len());
        for b in items {
            row.push(judge(a, b, rounding)?);
        }
        rows.push(row);
    }

    let matrix = PairwiseMatrix::from_rows(rows)?;
    trace!(size = matrix.size(), "built pairwise comparison matrix");
    Ok(matrix)
}

fn judge(a: &ScoredItem, b: &ScoredItem, rounding: DiffRounding) -> Result<Tfn, DomainError> {
    if a.label == b.label || a.score == b.score {
        return Ok(Tfn::EQUAL);
    }

    let diff = (a.score - b.score).abs();
    let steps = rounding
        .apply(diff)
        .ok_or_else(|| DomainError::FractionalDifference {
            left: a.label.clone(),
            right: b.label.clone(),
            diff,
        })?;

    let band = match Tfn::for_difference(steps) {
        Some(band) => band,
        None => return Ok(Tfn::EQUAL),
    };

    if a.score < b.score {
        Ok(band.reciprocal())
    } else {
        Ok(band)
    }
}
