mod init;
mod schema;
mod validation;

pub use init::run_init_wizard;
pub use schema::{AlternativeConfig, CriterionConfig, DecisionConfig};
pub use validation::validate_decision;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/fahp-rank/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("fahp-rank"))
}

/// Get the default decision file path (~/.config/fahp-rank/decision.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("decision.yaml"))
}

/// Load a decision file from YAML
///
/// # Arguments
///
/// * `path` - Optional path to the decision file. If None, uses the default path
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist
/// - The file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<DecisionConfig> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Decision file not found at {}. Run `fahp-rank init` to create one",
            config_path.display()
        );
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read decision file at {}", config_path.display()))?;

    parse_config(&content, &config_path)
}

fn parse_config(content: &str, path: &Path) -> Result<DecisionConfig> {
    serde_saphyr::from_str(content)
        .with_context(|| format!("Failed to parse decision file: invalid YAML in {}", path.display()))
}
