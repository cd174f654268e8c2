pub mod config;
pub mod fahp;
pub mod output;
pub mod tiers;
