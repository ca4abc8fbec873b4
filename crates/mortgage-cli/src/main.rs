mod commands;
mod format;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::repayment::{CalculateArgs, ValidateArgs};

/// Mortgage repayment calculator
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Mortgage repayment calculator",
    long_about = "Calculates the monthly payment and total repayment for \
                  repayment and interest-only mortgages with decimal \
                  precision. Field validation mirrors the quote form: every \
                  invalid field is reported, not just the first."
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
    /// Calculate the monthly payment and total repayment for a quote
    Calculate(CalculateArgs),
    /// Check the raw form fields without calculating
    Validate(ValidateArgs),
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
        Commands::Calculate(args) => commands::repayment::run_calculate(args),
        Commands::Validate(args) => commands::repayment::run_validate(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
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
