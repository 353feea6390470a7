use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fuzzy_comparer::{build_matrix, Metric};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Compare two strings by edit distance
///
/// Prints the case-sensitive edit distance, the case-insensitive similarity
/// score, or the full distance table for debugging.
///
/// # Usage
///
/// ```bash
/// fuzzy-compare similarity "View tickets" "viwe ticket"
/// fuzzy-compare distance honda ohnda --metric levenshtein
/// fuzzy-compare --json matrix ab ba
/// ```
#[derive(Parser, Debug)]
#[command(name = "fuzzy-compare", author, version, about, long_about = None)]
struct Args {
    /// Print a JSON object instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit distance between two strings (case-sensitive unless --ignore-case).
    Distance {
        original: String,
        modified: String,

        /// Metric name: damerau_levenshtein (default) or levenshtein.
        #[arg(short, long, default_value_t = Metric::default())]
        metric: Metric,

        /// Fold case before computing the distance.
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Similarity score in [0, 1], ignoring case.
    Similarity {
        src: String,
        modified: String,

        /// Metric name: damerau_levenshtein (default) or levenshtein.
        #[arg(short, long, default_value_t = Metric::default())]
        metric: Metric,
    },

    /// Full Damerau-Levenshtein table (case-sensitive).
    Matrix { original: String, modified: String },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Distance {
            original,
            modified,
            metric,
            ignore_case,
        } => {
            let distance = if ignore_case {
                metric.folded_distance(&original, &modified)
            } else {
                metric.distance(&original, &modified)
            };
            tracing::debug!(%metric, ignore_case, distance, "computed distance");

            if args.json {
                let out = json!({
                    "metric": metric,
                    "original": original,
                    "modified": modified,
                    "ignore_case": ignore_case,
                    "distance": distance,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{distance}");
            }
        }
        Command::Similarity {
            src,
            modified,
            metric,
        } => {
            let similarity = metric.comparer().similarity(&src, &modified);
            tracing::debug!(%metric, similarity, "computed similarity");

            if args.json {
                let out = json!({
                    "metric": metric,
                    "src": src,
                    "modified": modified,
                    "similarity": similarity,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{similarity:.4}");
            }
        }
        Command::Matrix { original, modified } => {
            let matrix = build_matrix(&original, &modified);

            if args.json {
                let out = serde_json::to_string_pretty(&matrix)
                    .context("Failed to serialize distance matrix")?;
                println!("{out}");
            } else {
                println!("{matrix}");
            }
        }
    }

    Ok(())
}
