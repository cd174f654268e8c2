use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::schema::{AlternativeConfig, CriterionConfig, DecisionConfig};
use super::validation::validate_decision;
use crate::config::get_config_path;
use crate::fahp::DiffRounding;
use crate::output::write_atomic;
use crate::tiers::{validate_tiers, TierConfig, TierThreshold};

/// Print `question` and read one trimmed line from `input`.
fn ask<R: BufRead>(input: &mut R, question: &str) -> Result<String> {
    print!("{}", question);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Input closed before the decision file was complete");
    }
    Ok(line.trim().to_string())
}

/// Ask repeatedly until `parse` accepts the answer.
fn ask_until<R, T, F>(input: &mut R, question: &str, parse: F) -> Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        match parse(&ask(input, question)?) {
            Ok(value) => return Ok(value),
            Err(reason) => println!("  Invalid: {}. Try again.", reason),
        }
    }
}

/// Ask with a bracketed default that an empty answer accepts.
fn ask_or<R: BufRead>(input: &mut R, question: &str, default: &str) -> Result<String> {
    let answer = ask(input, &format!("{} [{}]: ", question, default))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

fn confirm<R: BufRead>(input: &mut R, question: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    ask_until(input, &format!("{} [{}]: ", question, hint), |answer| {
        match answer.to_lowercase().as_str() {
            "" => Ok(default_yes),
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err("answer y or n".to_string()),
        }
    })
}

fn parse_number(answer: &str) -> Result<f64, String> {
    answer
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{}' is not a number", answer))
}

/// Names are required unless `optional`, where an empty answer ends the list.
fn parse_name(answer: &str, optional: bool) -> Result<Option<String>, String> {
    match (answer.is_empty(), optional) {
        (false, _) => Ok(Some(answer.to_string())),
        (true, true) => Ok(None),
        (true, false) => Err("a name is required".to_string()),
    }
}

fn parse_rounding(answer: &str) -> Result<DiffRounding, String> {
    match answer.to_lowercase().as_str() {
        "round" => Ok(DiffRounding::Round),
        "floor" => Ok(DiffRounding::Floor),
        "reject" => Ok(DiffRounding::Reject),
        other => Err(format!("expected round, floor or reject, got '{}'", other)),
    }
}

/// Run the interactive init wizard to create a decision file.
///
/// If `default_path` is Some, uses that as the suggested file path.
/// Otherwise, suggests the default path under ~/.config/fahp-rank/.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let mut input = std::io::stdin().lock();
    println!();
    println!("FAHP Decision File Wizard");
    println!("=========================");
    println!();

    // 1. Criteria
    println!("Criteria are the factors alternatives are judged on. Each gets a score;");
    println!("the score difference between two criteria sets how much more one matters.");
    let mut criteria: Vec<CriterionConfig> = Vec::new();
    loop {
        let optional = !criteria.is_empty();
        let hint = if optional { " (empty to finish)" } else { "" };
        let question = format!("  Criterion name{}: ", hint);
        let name = match ask_until(&mut input, &question, |a| parse_name(a, optional))? {
            Some(name) => name,
            None => break,
        };
        let question = format!("  Importance score for '{}': ", name);
        let score = ask_until(&mut input, &question, parse_number)?;
        criteria.push(CriterionConfig { name, score });
    }

    // 2. Alternatives and their ratings
    println!();
    println!("Alternatives are the options being ranked. Rate each one under every criterion.");
    let mut alternatives: Vec<AlternativeConfig> = Vec::new();
    loop {
        let optional = !alternatives.is_empty();
        let hint = if optional { " (empty to finish)" } else { "" };
        let question = format!("  Alternative name{}: ", hint);
        let name = match ask_until(&mut input, &question, |a| parse_name(a, optional))? {
            Some(name) => name,
            None => break,
        };
        let mut ratings = Vec::with_capacity(criteria.len());
        for criterion in &criteria {
            let question = format!("    Rating of '{}' for '{}': ", name, criterion.name);
            ratings.push(ask_until(&mut input, &question, parse_number)?);
        }
        alternatives.push(AlternativeConfig { name, ratings });
    }

    // 3. Rounding policy
    println!();
    println!("Score differences map to judgment bands 1, 2, 3 and 4+. Fractional differences");
    println!("can be rounded, floored, or rejected as an error.");
    let rounding = ask_until(&mut input, "Rounding (round/floor/reject) [round]: ", |a| {
        if a.is_empty() {
            Ok(DiffRounding::Round)
        } else {
            parse_rounding(a)
        }
    })?;

    // 4. Tiers
    println!();
    let defaults = TierConfig::default();
    let custom_tiers = confirm(
        &mut input,
        "Configure tier thresholds? (n accepts defaults)",
        false,
    )?;
    let tiers = if custom_tiers {
        loop {
            let default = ask_or(
                &mut input,
                "Label for scores below every threshold",
                &defaults.default,
            )?;
            println!("Enter thresholds from highest to lowest.");
            let mut thresholds = Vec::new();
            loop {
                let label = match ask_until(&mut input, "  Tier label (empty to finish): ", |a| {
                    parse_name(a, true)
                })? {
                    Some(label) => label,
                    None => break,
                };
                let question = format!("  Minimum score for '{}': ", label);
                let min = ask_until(&mut input, &question, parse_number)?;
                thresholds.push(TierThreshold { min, label });
            }
            let tiers = TierConfig { default, thresholds };
            match validate_tiers(&tiers) {
                Ok(()) => break Some(tiers),
                Err(errors) => {
                    for error in errors {
                        println!("  Invalid: {}", error);
                    }
                    println!("  Try again.");
                }
            }
        }
    } else {
        None
    };

    let config = DecisionConfig {
        criteria,
        alternatives,
        rounding,
        tiers,
    };
    if let Err(errors) = validate_decision(&config) {
        anyhow::bail!("Decision file is invalid: {}", errors.join("; "));
    }

    // 5. Path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    println!();
    let path_str = ask_or(
        &mut input,
        "Where should the decision file be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = confirm(
            &mut input,
            &format!(
                "Decision file already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize decision file: {}", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    write_atomic(&config_path, &yaml)?;

    println!();
    println!("Decision file written to {}", config_path.display());
    println!("Run `fahp-rank -c {}` to rank the alternatives.", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("4"), Ok(4.0));
        assert_eq!(parse_number("-2.5"), Ok(-2.5));
        assert!(parse_number("inf").is_err());
        assert!(parse_number("abc").is_err());
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("alice", false), Ok(Some("alice".to_string())));
        assert_eq!(parse_name("", true), Ok(None));
        assert!(parse_name("", false).is_err());
    }

    #[test]
    fn test_parse_rounding() {
        assert_eq!(parse_rounding("Round"), Ok(DiffRounding::Round));
        assert_eq!(parse_rounding("floor"), Ok(DiffRounding::Floor));
        assert_eq!(parse_rounding("REJECT"), Ok(DiffRounding::Reject));
        assert!(parse_rounding("ceil").is_err());
    }

    #[test]
    fn test_ask_until_retries_invalid_answers() {
        let mut input = Cursor::new("abc\n\n7.5\n");
        let value = ask_until(&mut input, "score: ", parse_number).unwrap();
        assert_eq!(value, 7.5);
    }

    #[test]
    fn test_ask_or_uses_default_on_empty() {
        let mut input = Cursor::new("\nfloor\n");
        assert_eq!(ask_or(&mut input, "Rounding", "round").unwrap(), "round");
        assert_eq!(ask_or(&mut input, "Rounding", "round").unwrap(), "floor");
    }

    #[test]
    fn test_confirm() {
        let mut input = Cursor::new("\nmaybe\nYES\n");
        assert!(!confirm(&mut input, "Overwrite?", false).unwrap());
        assert!(confirm(&mut input, "Overwrite?", false).unwrap());
    }

    #[test]
    fn test_ask_fails_on_closed_input() {
        let mut input = Cursor::new("");
        assert!(ask(&mut input, "name: ").is_err());
    }
}
