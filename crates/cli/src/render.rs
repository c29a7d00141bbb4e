//! Text and JSON rendering of command results.

use serde_json::json;

use stockworth_core::{format_percent, resolve_symbol};
use stockworth_report::{ChartSeries, ValuationReport, metric_cards};
use stockworth_valuation::{AgeReserveBand, InventoryFacts, ValuationResult};

use crate::config::OutputFormat;

pub fn evaluation(
    facts: &InventoryFacts,
    result: &ValuationResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let body = json!({
                "facts": facts,
                "result": result,
                "charts": ChartSeries::from_result(result),
            });
            Ok(serde_json::to_string_pretty(&body)?)
        }
        OutputFormat::Text => Ok(evaluation_text(facts, result)),
    }
}

fn evaluation_text(facts: &InventoryFacts, result: &ValuationResult) -> String {
    let symbol = resolve_symbol(&facts.currency);
    let mut lines = vec![format!("Valuation ({})", facts.valuation_method)];

    for card in metric_cards(result, &symbol) {
        lines.push(format!("  {}: {}", card.label, card.value));
    }

    let band = facts
        .age_reserve_table
        .band_for(facts.age_months)
        .map(|b| b.label.as_str())
        .filter(|label| !label.is_empty())
        .unwrap_or("no matching band");
    lines.push(format!(
        "  Reserve Band: {band} ({})",
        format_percent(result.reserve_percent, 0)
    ));
    lines.push(format!(
        "  Original Margin: {}",
        format_percent(result.original_margin, 2)
    ));
    lines.push(format!(
        "  Adjusted Margin: {}",
        format_percent(result.adjusted_margin, 2)
    ));
    lines.push(format!("  Margin Impact: {:.2} pts", result.margin_impact));

    lines.join("\n")
}

pub fn report(report: &ValuationReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut body = serde_json::to_value(report)?;
            body["fileStem"] = json!(report.file_stem());
            Ok(serde_json::to_string_pretty(&body)?)
        }
        OutputFormat::Text => Ok(report.to_string().trim_end().to_string()),
    }
}

pub fn reserve(
    age_months: f64,
    band: Option<&AgeReserveBand>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let reserve_percent = band.map(|b| b.reserve_percent).unwrap_or(0.0);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "ageMonths": age_months,
            "band": band,
            "reservePercent": reserve_percent,
        }))?),
        OutputFormat::Text => Ok(match band {
            Some(b) if !b.label.is_empty() => format!(
                "{age_months} months: {} ({} reserve)",
                b.label,
                format_percent(reserve_percent, 0)
            ),
            Some(_) => format!(
                "{age_months} months: {} reserve",
                format_percent(reserve_percent, 0)
            ),
            None => format!("{age_months} months: no matching band (0% reserve)"),
        }),
    }
}
