use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fahp_rank::output::OutputFormat;

const EXIT_SUCCESS: i32 = 0;
const EXIT_COMPUTATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_INCONSISTENT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank alternatives and assign tiers (default if no subcommand)
    Rank {
        /// Output format for stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also write the ranking to this file (TSV, or JSON with --format json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit with an error if any comparison matrix is inconsistent
        #[arg(long)]
        strict: bool,

        /// Print consistency diagnostics after the ranking
        #[arg(long)]
        show_consistency: bool,
    },
    /// Print consistency diagnostics for every comparison matrix
    Check,
    /// Create a decision file interactively
    Init {
        /// Where to save the decision file (prompted if omitted)
        path: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Rank {
            format: OutputFormat::Table,
            output: None,
            strict: false,
            show_consistency: false,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fahp-rank")]
#[command(about = "Fuzzy AHP ranking of alternatives with tiered thresholds", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging (computation diagnostics on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to decision file (defaults to ~/.config/fahp-rank/decision.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "fahp_rank=debug"
    } else {
        "fahp_rank=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or_default();
    let config_path = cli.config.map(PathBuf::from);
    let start_time = Instant::now();

    if let Commands::Init { path } = &command {
        if let Err(e) = fahp_rank::config::run_init_wizard(path.clone().or(config_path)) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load and validate the decision file
    let config = match fahp_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = fahp_rank::config::validate_decision(&config) {
        eprintln!("Decision file errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    info!(
        criteria = config.criteria.len(),
        alternatives = config.alternatives.len(),
        "loaded decision file"
    );

    let mut result = match config.to_problem().evaluate() {
        Ok(r) => r,
        Err(e) if e.is_numerical() => {
            eprintln!("Computation failed: {}", e);
            std::process::exit(EXIT_COMPUTATION);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let criteria_names: Vec<String> = config.criteria.iter().map(|c| c.name.clone()).collect();
    let use_colors = fahp_rank::output::should_use_colors();

    match command {
        Commands::Check => {
            println!(
                "{}",
                fahp_rank::output::format_consistency_section(&result, &criteria_names, use_colors)
            );
            if !result.all_consistent() {
                std::process::exit(EXIT_INCONSISTENT);
            }
        }
        Commands::Rank {
            format,
            output,
            strict,
            show_consistency,
        } => {
            let tiers = config.effective_tiers();
            fahp_rank::tiers::annotate(&mut result.rows, &tiers);
            let summary = fahp_rank::tiers::summarize(&result.rows, &tiers);

            let tsv = fahp_rank::output::format_tsv(&result.rows);
            let json = match fahp_rank::output::format_json(&result, &summary) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Failed to serialize result: {}", e);
                    std::process::exit(EXIT_COMPUTATION);
                }
            };

            match format {
                OutputFormat::Json => println!("{}", json),
                OutputFormat::Tsv => println!("{}", tsv),
                OutputFormat::Table => {
                    println!(
                        "{}",
                        fahp_rank::output::format_ranked_table(&result.rows, use_colors)
                    );
                    println!();
                    println!(
                        "{}",
                        fahp_rank::output::format_tier_summary(&summary, use_colors)
                    );
                }
            }

            if show_consistency {
                println!();
                println!(
                    "{}",
                    fahp_rank::output::format_consistency_section(
                        &result,
                        &criteria_names,
                        use_colors
                    )
                );
            }

            if let Some(path) = output {
                let contents = match format {
                    OutputFormat::Json => &json,
                    _ => &tsv,
                };
                if let Err(e) = fahp_rank::output::write_atomic(&path, contents) {
                    eprintln!("Failed to write output: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
                info!(path = %path.display(), "wrote ranking");
            }

            if strict && !result.all_consistent() {
                eprintln!("Inconsistent pairwise judgments (CR > 0.10); revise the scores or drop --strict.");
                std::process::exit(EXIT_INCONSISTENT);
            }
        }
        Commands::Init { .. } => unreachable!("init handled before loading config"),
    }

    info!(elapsed = ?start_time.elapsed(), "done");
    std::process::exit(EXIT_SUCCESS);
}
