use super::schema::DecisionConfig;
use crate::tiers::validate_tiers;

/// Validate a decision file before running the pipeline.
/// Returns all validation errors at once (not just the first).
pub fn validate_decision(config: &DecisionConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.criteria.is_empty() {
        errors.push("criteria: at least one criterion is required".to_string());
    }
    if config.alternatives.is_empty() {
        errors.push("alternatives: at least one alternative is required".to_string());
    }

    for (i, criterion) in config.criteria.iter().enumerate() {
        if criterion.name.trim().is_empty() {
            errors.push(format!("criteria[{}].name: must not be empty", i));
        }
        if !criterion.score.is_finite() {
            errors.push(format!("criteria[{}].score: must be a finite number", i));
        }
    }

    for (i, alternative) in config.alternatives.iter().enumerate() {
        if alternative.name.trim().is_empty() {
            errors.push(format!("alternatives[{}].name: must not be empty", i));
        }
        if alternative.ratings.len() != config.criteria.len() {
            errors.push(format!(
                "alternatives[{}].ratings: expected {} ratings (one per criterion), found {}",
                i,
                config.criteria.len(),
                alternative.ratings.len()
            ));
        }
        for (j, rating) in alternative.ratings.iter().enumerate() {
            if !rating.is_finite() {
                errors.push(format!(
                    "alternatives[{}].ratings[{}]: must be a finite number",
                    i, j
                ));
            }
        }
    }

    if let Some(ref tiers) = config.tiers {
        if let Err(tier_errors) = validate_tiers(tiers) {
            errors.extend(tier_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AlternativeConfig, CriterionConfig};
    use crate::fahp::DiffRounding;
    use crate::tiers::{TierConfig, TierThreshold};

    fn valid_config() -> DecisionConfig {
        DecisionConfig {
            criteria: vec![
                CriterionConfig { name: "income".to_string(), score: 5.0 },
                CriterionConfig { name: "dependents".to_string(), score: 3.0 },
            ],
            alternatives: vec![
                AlternativeConfig { name: "alice".to_string(), ratings: vec![8.0, 4.0] },
                AlternativeConfig { name: "bob".to_string(), ratings: vec![2.0, 4.0] },
            ],
            rounding: DiffRounding::Round,
            tiers: None,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_decision(&valid_config()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = DecisionConfig {
            criteria: vec![],
            alternatives: vec![],
            rounding: DiffRounding::Round,
            tiers: None,
        };
        let errors = validate_decision(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_ratings_count() {
        let mut config = valid_config();
        config.alternatives[1].ratings.pop();
        let errors = validate_decision(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("alternatives[1].ratings"));
    }

    #[test]
    fn test_non_finite_scores() {
        let mut config = valid_config();
        config.criteria[0].score = f64::INFINITY;
        config.alternatives[0].ratings[1] = f64::NAN;
        let errors = validate_decision(&config).unwrap_err();
        assert!(errors[0].contains("criteria[0].score"));
        assert!(errors[1].contains("alternatives[0].ratings[1]"));
    }

    #[test]
    fn test_includes_tier_errors() {
        let mut config = valid_config();
        config.criteria[1].name = "".to_string();
        config.tiers = Some(TierConfig {
            default: "none".to_string(),
            thresholds: vec![
                TierThreshold { min: 0.1, label: "low".to_string() },
                TierThreshold { min: 0.2, label: "high".to_string() },
            ],
        });
        let errors = validate_decision(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("criteria[1].name"));
        assert!(errors[1].contains("tiers.thresholds[1].min"));
    }
}
