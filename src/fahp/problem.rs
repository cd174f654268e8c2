use super::aggregate::{aggregate, FahpResult};
use super::comparator::{compare, ScoredItem};
use super::error::{DomainError, Result};
use super::matrix::PairwiseMatrix;
use super::tfn::DiffRounding;

/// Typed input to a full FAHP run: scored criteria plus one rating sequence per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub criteria: Vec<ScoredItem>,
    pub alternatives: Vec<String>,
    /// `ratings[i]` rates every alternative under criterion i, in `alternatives` order.
    pub ratings: Vec<Vec<ScoredItem>>,
    pub rounding: DiffRounding,
}

impl Problem {
    /// Build the criteria matrix and the per-criterion alternative matrices.
    pub fn matrices(&self) -> Result<(PairwiseMatrix, Vec<PairwiseMatrix>)> {
        if self.ratings.len() != self.criteria.len() {
            return Err(DomainError::CriteriaCountMismatch {
                criteria: self.criteria.len(),
                matrices: self.ratings.len(),
            }
            .into());
        }
        for (criterion, rated) in self.ratings.iter().enumerate() {
            if rated.len() != self.alternatives.len() {
                return Err(DomainError::RatingsCountMismatch {
                    criterion,
                    found: rated.len(),
                    expected: self.alternatives.len(),
                }
                .into());
            }
            let misplaced = rated
                .iter()
                .zip(&self.alternatives)
                .position(|(item, name)| item.label != *name);
            if let Some(position) = misplaced {
                return Err(DomainError::RatingsOrderMismatch {
                    criterion,
                    position,
                    found: rated[position].label.clone(),
                    expected: self.alternatives[position].clone(),
                }
                .into());
            }
        }

        let criteria = compare(&self.criteria, self.rounding)?;
        let alternatives = self
            .ratings
            .iter()
            .map(|rated| compare(rated, self.rounding))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((criteria, alternatives))
    }

    pub fn evaluate(&self) -> Result<FahpResult> {
        let (criteria, alternatives) = self.matrices()?;
        aggregate(&criteria, &alternatives, &self.alternatives)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fahp::error::FahpError;

    fn sample_problem() -> Problem {
        Problem {
            criteria: vec![ScoredItem::new("income", 5.0), ScoredItem::new("dependents", 3.0)],
            alternatives: vec!["alice".to_string(), "bob".to_string()],
            ratings: vec![
                vec![ScoredItem::new("alice", 8.0), ScoredItem::new("bob", 2.0)],
                vec![ScoredItem::new("alice", 4.0), ScoredItem::new("bob", 4.0)],
            ],
            rounding: DiffRounding::Round,
        }
    }

    #[test]
    fn test_evaluate() {
        let result = sample_problem().evaluate().unwrap();
        assert_eq!(result.rows[0].label, "alice");
        let total: f64 = result.rows.iter().map(|r| r.score).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ratings_count_mismatch() {
        let mut problem = sample_problem();
        problem.ratings[1].pop();
        assert_eq!(
            problem.evaluate(),
            Err(FahpError::Domain(DomainError::RatingsCountMismatch {
                criterion: 1,
                found: 1,
                expected: 2
            }))
        );
    }

    #[test]
    fn test_ratings_out_of_order() {
        let mut problem = sample_problem();
        problem.ratings[1].swap(0, 1);
        assert_eq!(
            problem.evaluate(),
            Err(FahpError::Domain(DomainError::RatingsOrderMismatch {
                criterion: 1,
                position: 0,
                found: "bob".to_string(),
                expected: "alice".to_string()
            }))
        );
    }

    #[test]
    fn test_missing_criterion_ratings() {
        let mut problem = sample_problem();
        problem.ratings.pop();
        assert!(matches!(
            problem.evaluate(),
            Err(FahpError::Domain(DomainError::CriteriaCountMismatch { .. }))
        ));
    }

    #[test]
    fn test_independent_runs_in_parallel() {
        let problem = sample_problem();
        let expected = problem.evaluate().unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| problem.evaluate())).collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap().unwrap(), expected);
            }
        });
    }
}
