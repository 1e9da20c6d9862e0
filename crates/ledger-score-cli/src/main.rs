mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::classify::ClassifyArgs;
use commands::eligible::EligibleArgs;
use commands::score::ScoreArgs;

/// Ledger-based credit scoring for small-business accounts
#[derive(Parser)]
#[command(
    name = "lscore",
    version,
    about = "Ledger-based credit scoring for small-business accounts",
    long_about = "Computes an alternative credit score (300-850) from an account's \
                  transaction ledger: component breakdown, letter grade, risk tier, \
                  and improvement recommendations. Accepts JSON input via file or stdin."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an account from its profile and transaction history
    Score(ScoreArgs),
    /// Classify an existing 300-850 score into grade and risk tier
    Classify(ClassifyArgs),
    /// Filter a batch of scored accounts by a minimum qualifying score
    Eligible(EligibleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Score(args) => commands::score::run_score(args),
        Commands::Classify(args) => commands::classify::run_classify(args),
        Commands::Eligible(args) => commands::eligible::run_eligible(args),
        Commands::Version => {
            println!("lscore {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
