use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::fahp::{ConsistencyReport, FahpResult, RankedRow};
use crate::tiers::TierCount;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with four decimals, the precision tier thresholds are set at
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked rows as a table with columns: Rank, Score, Alternative, Tier
/// No headers. Rank column is right-aligned with a trailing dot.
pub fn format_ranked_table(rows: &[RankedRow], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No alternatives to rank.".to_string();
    }

    let term_width = get_terminal_width();
    let rank_width = format!("{}.", rows.len()).len().max(3);
    let separator = "  ";

    rows.iter()
        .map(|row| {
            let rank_str = format!("{:>width$}", format!("{}.", row.rank), width = rank_width);
            let score_str = format_score(row.score);
            let tier = row.tier.as_deref().unwrap_or("");

            let fixed_width =
                rank_width + 1 + score_str.len() + separator.len() * 2 + tier.chars().count();
            let label = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_label(&row.label, width - fixed_width)
                }
                Some(_) => truncate_label(&row.label, 20),
                None => row.label.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str.dimmed(),
                    score_str.bold(),
                    separator,
                    label,
                    separator,
                    tier.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    rank_str, score_str, separator, label, separator, tier
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked rows as tab-separated values for scripting
/// Columns: rank, alternative, score, tier (no headers, no colors)
pub fn format_tsv(rows: &[RankedRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{:.6}\t{}",
                row.rank,
                row.label,
                row.score,
                row.tier.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a FahpResult,
    tiers: &'a [TierCount],
}

/// Format the full result and tier summary as pretty JSON
pub fn format_json(result: &FahpResult, tiers: &[TierCount]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { result, tiers })
}

/// Format tier counts, one line per tier: "{label}: {count} ({percentage}%)"
pub fn format_tier_summary(summary: &[TierCount], use_colors: bool) -> String {
    summary
        .iter()
        .map(|tier| {
            let line = format!("{}: {} ({:.2}%)", tier.label, tier.count, tier.percentage);
            if use_colors {
                line.cyan().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one consistency report as a single line
pub fn format_consistency(name: &str, report: &ConsistencyReport, use_colors: bool) -> String {
    let verdict = if report.consistent {
        "consistent"
    } else {
        "inconsistent, revise judgments"
    };
    let details = format!(
        "n={} lambda_max={:.4} RI={:.4} CI={:.4} CR={:.4}",
        report.size,
        report.lambda_max,
        report.random_index,
        report.consistency_index,
        report.consistency_ratio
    );

    if use_colors {
        let verdict = if report.consistent {
            verdict.green().to_string()
        } else {
            verdict.red().to_string()
        };
        format!("{}: {}  {}", name.bold(), verdict, details.dimmed())
    } else {
        format!("{}: {}  {}", name, verdict, details)
    }
}

/// Format the criteria report followed by one report per criterion's alternative matrix
pub fn format_consistency_section(
    result: &FahpResult,
    criteria_names: &[String],
    use_colors: bool,
) -> String {
    let mut lines = vec![format_consistency(
        "criteria x criteria",
        &result.criteria_consistency,
        use_colors,
    )];
    for (i, report) in result.alternative_consistency.iter().enumerate() {
        let name = match criteria_names.get(i) {
            Some(criterion) => format!("alternatives under '{}'", criterion),
            None => format!("alternatives under criterion {}", i + 1),
        };
        lines.push(format_consistency(&name, report, use_colors));
    }
    lines.join("\n")
}
