pub mod classifier;
pub mod config;

pub use classifier::{annotate, classify, summarize, TierCount};
pub use config::{validate_tiers, TierConfig, TierThreshold};
