use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stockworth_valuation::ValuationMethod;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "stockworth", version, about = "Inventory valuation and write-down calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute cost basis, NRV, age reserve and write-down.
    Evaluate {
        #[command(flatten)]
        facts: FactsArgs,
        /// Validate inputs and refuse zero denominators instead of printing inf/NaN.
        #[arg(long)]
        strict: bool,
    },
    /// Build a valuation report for a named recipient.
    Report {
        #[command(flatten)]
        facts: FactsArgs,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        company: Option<String>,
        /// Recipient agreed to receive the report.
        #[arg(long)]
        consent: bool,
    },
    /// Show which reserve band an age falls into.
    Reserve {
        #[arg(long)]
        age: f64,
        /// Facts file whose reserve table is used (default table otherwise).
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// Options shared by commands that evaluate a set of facts.
#[derive(Debug, Clone, Default, Args)]
pub struct FactsArgs {
    /// JSON file with inventory facts (camelCase fields); the built-in example otherwise.
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long, value_parser = parse_method)]
    pub method: Option<ValuationMethod>,
    /// Currency symbol or ISO code used for display.
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

fn parse_method(s: &str) -> Result<ValuationMethod, String> {
    s.parse::<ValuationMethod>().map_err(|e| e.message().to_string())
}
