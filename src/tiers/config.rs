use serde::{Deserialize, Serialize};

/// Tier thresholds, passed explicitly to the classifier.
///
/// Example YAML:
/// ```yaml
/// tiers:
///   default: No discount
///   thresholds:
///     - { min: 0.0056, label: "Discount 50%" }
///     - { min: 0.0048, label: "Discount 30%" }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    /// Label for scores below every threshold
    pub default: String,

    /// Thresholds in descending order of `min`; the first one a score reaches wins
    pub thresholds: Vec<TierThreshold>,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            default: "No discount".to_string(),
            thresholds: vec![
                TierThreshold {
                    min: 0.0056,
                    label: "Discount 50%".to_string(),
                },
                TierThreshold {
                    min: 0.0048,
                    label: "Discount 30%".to_string(),
                },
                TierThreshold {
                    min: 0.0035,
                    label: "Discount 20%".to_string(),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TierThreshold {
    /// Minimum score (inclusive)
    pub min: f64,
    pub label: String,
}

/// Validate tier configuration. Returns all errors at once.
pub fn validate_tiers(config: &TierConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.default.trim().is_empty() {
        errors.push("tiers.default: label must not be empty".to_string());
    }

    for (i, threshold) in config.thresholds.iter().enumerate() {
        if !threshold.min.is_finite() {
            errors.push(format!("tiers.thresholds[{}].min: must be a finite number", i));
        }
        if threshold.label.trim().is_empty() {
            errors.push(format!("tiers.thresholds[{}].label: must not be empty", i));
        }
    }

    for (i, pair) in config.thresholds.windows(2).enumerate() {
        if pair[1].min >= pair[0].min {
            errors.push(format!(
                "tiers.thresholds[{}].min: {} must be below the previous threshold {}",
                i + 1,
                pair[1].min,
                pair[0].min
            ));
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

    #[test]
    fn test_default_tiers_are_valid() {
        let config = TierConfig::default();
        assert_eq!(config.thresholds.len(), 3);
        assert!(validate_tiers(&config).is_ok());
    }

    #[test]
    fn test_tier_config_parse() {
        let yaml = r#"
default: "None"
thresholds:
  - min: 0.6
    label: "Gold"
  - min: 0.3
    label: "Silver"
"#;
        let config: TierConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.default, "None");
        assert_eq!(config.thresholds[1].label, "Silver");
        assert_eq!(config.thresholds[0].min, 0.6);
    }

    #[test]
    fn test_tier_config_rejects_unknown_fields() {
        let yaml = r#"
default: "None"
thresholds: []
colour: red
"#;
        assert!(serde_saphyr::from_str::<TierConfig>(yaml).is_err());
    }

    #[test]
    fn test_not_descending() {
        let config = TierConfig {
            default: "None".to_string(),
            thresholds: vec![
                TierThreshold { min: 0.3, label: "Silver".to_string() },
                TierThreshold { min: 0.6, label: "Gold".to_string() },
            ],
        };
        let errors = validate_tiers(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("tiers.thresholds[1].min"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = TierConfig {
            default: " ".to_string(),
            thresholds: vec![TierThreshold { min: f64::NAN, label: "".to_string() }],
        };
        let errors = validate_tiers(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
