use serde::Serialize;

use super::config::TierConfig;
use crate::fahp::RankedRow;

/// Label for a score: the first threshold (in the configured descending order) it reaches,
/// else the default.
pub fn classify<'a>(score: f64, config: &'a TierConfig) -> &'a str {
    config
        .thresholds
        .iter()
        .find(|t| score >= t.min)
        .map(|t| t.label.as_str())
        .unwrap_or(config.default.as_str())
}

/// Set the tier label on every ranked row.
pub fn annotate(rows: &mut [RankedRow], config: &TierConfig) {
    for row in rows {
        row.tier = Some(classify(row.score, config).to_string());
    }
}

/// Share of alternatives in one tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCount {
    pub label: String,
    pub count: usize,
    /// Percentage of all rows, rounded to two decimals
    pub percentage: f64,
}

/// Count rows per tier, in threshold order with the default tier last. Empty tiers are omitted.
pub fn summarize(rows: &[RankedRow], config: &TierConfig) -> Vec<TierCount> {
    let total = rows.len();
    let labels = config
        .thresholds
        .iter()
        .map(|t| t.label.as_str())
        .chain(std::iter::once(config.default.as_str()));

    let mut summary: Vec<TierCount> = Vec::new();
    for label in labels {
        if summary.iter().any(|c| c.label == label) {
            continue;
        }
        let count = rows
            .iter()
            .filter(|row| row.tier.as_deref().unwrap_or_else(|| classify(row.score, config)) == label)
            .count();
        if count == 0 {
            continue;
        }
        let percentage = (count as f64 / total as f64 * 10_000.0).round() / 100.0;
        summary.push(TierCount {
            label: label.to_string(),
            count,
            percentage,
        });
    }
    summary
}
