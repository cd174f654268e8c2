pub mod formatter;
pub mod writer;

pub use formatter::{
    format_consistency, format_consistency_section, format_json, format_ranked_table,
    format_score, format_tier_summary, format_tsv, should_use_colors,
};
pub use writer::write_atomic;

/// Rendering used for stdout and `--output` files
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
}
