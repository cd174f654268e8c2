use serde::{Deserialize, Serialize};

use crate::fahp::{DiffRounding, Problem, ScoredItem};
use crate::tiers::TierConfig;

/// A decision file: criteria, alternatives and their ratings, and optional tiers.
///
/// Example YAML:
/// ```yaml
/// criteria:
///   - { name: income, score: 5 }
///   - { name: dependents, score: 3 }
/// alternatives:
///   - { name: Alice, ratings: [8, 4] }
///   - { name: Bob, ratings: [2, 4] }
/// rounding: round
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DecisionConfig {
    pub criteria: Vec<CriterionConfig>,

    pub alternatives: Vec<AlternativeConfig>,

    /// How fractional score differences map to judgment bands (default: round)
    #[serde(default)]
    pub rounding: DiffRounding,

    /// Tier thresholds; the built-in discount tiers apply when absent
    #[serde(default)]
    pub tiers: Option<TierConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CriterionConfig {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AlternativeConfig {
    pub name: String,

    /// One rating per criterion, in criteria order
    pub ratings: Vec<f64>,
}

impl DecisionConfig {
    pub fn effective_tiers(&self) -> TierConfig {
        self.tiers.clone().unwrap_or_default()
    }

    /// Reshape the per-alternative rows into the per-criterion sequences the pipeline takes.
    pub fn to_problem(&self) -> Problem {
        let criteria = self
            .criteria
            .iter()
            .map(|c| ScoredItem::new(c.name.clone(), c.score))
            .collect();

        let ratings = (0..self.criteria.len())
            .map(|i| {
                self.alternatives
                    .iter()
                    .filter_map(|alt| {
                        alt.ratings
                            .get(i)
                            .map(|score| ScoredItem::new(alt.name.clone(), *score))
                    })
                    .collect()
            })
            .collect();

        Problem {
            criteria,
            alternatives: self.alternatives.iter().map(|a| a.name.clone()).collect(),
            ratings,
            rounding: self.rounding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
criteria:
  - { name: income, score: 5 }
  - { name: dependents, score: 3 }
alternatives:
  - { name: Alice, ratings: [8, 4] }
  - { name: Bob, ratings: [2, 4] }
"#;

    #[test]
    fn test_parse_minimal() {
        let config: DecisionConfig = serde_saphyr::from_str(SAMPLE).unwrap();
        assert_eq!(config.criteria.len(), 2);
        assert_eq!(config.alternatives[1].ratings, vec![2.0, 4.0]);
        assert_eq!(config.rounding, DiffRounding::Round);
        assert!(config.tiers.is_none());
        assert_eq!(config.effective_tiers(), TierConfig::default());
    }

    #[test]
    fn test_parse_with_rounding_and_tiers() {
        let yaml = format!(
            "{}rounding: reject\ntiers:\n  default: none\n  thresholds:\n    - {{ min: 0.5, label: top }}\n",
            SAMPLE
        );
        let config: DecisionConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config.rounding, DiffRounding::Reject);
        assert_eq!(config.effective_tiers().thresholds[0].label, "top");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let yaml = format!("{}weights: [1, 2]\n", SAMPLE);
        assert!(serde_saphyr::from_str::<DecisionConfig>(&yaml).is_err());
    }

    #[test]
    fn test_to_problem_transposes_ratings() {
        let config: DecisionConfig = serde_saphyr::from_str(SAMPLE).unwrap();
        let problem = config.to_problem();
        assert_eq!(problem.alternatives, vec!["Alice", "Bob"]);
        assert_eq!(problem.ratings.len(), 2);
        assert_eq!(problem.ratings[0][1], ScoredItem::new("Bob", 2.0));
        assert_eq!(problem.ratings[1][0], ScoredItem::new("Alice", 4.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config: DecisionConfig = serde_saphyr::from_str(SAMPLE).unwrap();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: DecisionConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
