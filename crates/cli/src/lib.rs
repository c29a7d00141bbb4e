//! Command-line front end: argument parsing, configuration and output.

pub mod cli;
pub mod config;
pub mod input;
pub mod render;

use anyhow::Context;
use chrono::Utc;

use stockworth_core::ReportId;
use stockworth_report::{ReportRecipient, ValuationReport};
use stockworth_valuation::{AgeReserveTable, evaluate, try_evaluate};

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::input::{load_facts, resolve_facts, resolve_format};

/// Execute a parsed command and return what should be printed on stdout.
pub fn run(cli: Cli, settings: &Settings) -> anyhow::Result<String> {
    match cli.command {
        Command::Evaluate { facts, strict } => {
            let format = resolve_format(facts.format, settings);
            let facts = resolve_facts(&facts, settings)?;
            let result = if strict {
                try_evaluate(&facts).context("inputs rejected")?
            } else {
                evaluate(&facts)
            };
            tracing::info!(
                method = facts.valuation_method.as_str(),
                adjusted_inventory_value = result.adjusted_inventory_value,
                total_write_down = result.total_write_down,
                "inventory evaluated"
            );
            render::evaluation(&facts, &result, format)
        }
        Command::Report {
            facts,
            name,
            email,
            company,
            consent,
        } => {
            let format = resolve_format(facts.format, settings);
            let facts = resolve_facts(&facts, settings)?;
            let mut recipient = ReportRecipient::new(name, email, consent);
            if let Some(company) = company {
                recipient = recipient.with_company(company);
            }

            let result = try_evaluate(&facts).context("inputs rejected")?;
            let report = ValuationReport::build(ReportId::new(), recipient, &facts, result, Utc::now())
                .context("cannot generate report")?;
            tracing::info!(report_id = %report.id, file_stem = %report.file_stem(), "report generated");
            render::report(&report, format)
        }
        Command::Reserve { age, input, format } => {
            let format = resolve_format(format, settings);
            let table = match input {
                Some(path) => load_facts(&path)?.age_reserve_table,
                None => AgeReserveTable::default(),
            };
            if let Err(e) = table.validate() {
                tracing::warn!(error = %e, "reserve table is not a clean step function");
            }
            render::reserve(age, table.band_for(age), format)
        }
    }
}
