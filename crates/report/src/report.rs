//! Valuation report content.
//!
//! A report is plain data (metric cards, insights, recommendations) that any
//! export surface can lay out. `Display` gives a plain-text rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockworth_core::{DomainResult, ReportId, format_amount, format_percent, resolve_symbol};
use stockworth_valuation::{InventoryFacts, ValuationMethod, ValuationResult};

use crate::recipient::ReportRecipient;

/// Capital-locked share above which liquidation is recommended.
pub const URGENT_CAPITAL_LOCKED_PERCENT: f64 = 30.0;

/// Visual emphasis hint for a metric or chart element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Destructive,
}

/// One labelled, pre-formatted metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub tone: Tone,
    pub highlight: bool,
}

impl MetricCard {
    fn new(label: &str, value: String, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            value,
            tone,
            highlight: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

/// The six headline metrics, formatted with `symbol`.
pub fn metric_cards(result: &ValuationResult, symbol: &str) -> Vec<MetricCard> {
    vec![
        MetricCard::new("Cost Basis", format_amount(result.cost_basis, symbol), Tone::Primary),
        MetricCard::new(
            "Net Realizable Value",
            format_amount(result.net_realizable_value, symbol),
            Tone::Secondary,
        ),
        MetricCard::new(
            "Age-Adjusted Value",
            format_amount(result.age_adjusted_value, symbol),
            Tone::Accent,
        ),
        MetricCard::new(
            "Adjusted Inventory Value",
            format_amount(result.adjusted_inventory_value, symbol),
            Tone::Success,
        )
        .highlighted(),
        MetricCard::new(
            "Total Write-Down",
            format_amount(result.total_write_down, symbol),
            Tone::Destructive,
        )
        .highlighted(),
        MetricCard::new(
            "Capital Locked",
            format_percent(result.capital_locked_percent, 1),
            Tone::Warning,
        ),
    ]
}

/// Plain-language reading of the result.
pub fn insights(result: &ValuationResult, symbol: &str) -> Vec<String> {
    vec![
        format!(
            "You currently have {} tied up in slow-moving stock.",
            format_amount(result.total_write_down, symbol)
        ),
        format!(
            "Adjusted value is {} of your original cost.",
            format_percent(result.retained_percent(), 1)
        ),
        format!(
            "If sold at current market, margin would change by {:.2} percentage points.",
            result.margin_impact.abs()
        ),
    ]
}

pub fn recommendations(result: &ValuationResult) -> Vec<String> {
    let first = if result.capital_locked_percent > URGENT_CAPITAL_LOCKED_PERCENT {
        "Consider liquidating or repurposing this inventory urgently"
    } else {
        "Monitor this inventory closely to prevent further devaluation"
    };
    vec![
        first.to_string(),
        "Review pricing strategy for similar future inventory".to_string(),
        "Implement age-based monitoring for all inventory items".to_string(),
    ]
}

/// A generated valuation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationReport {
    pub id: ReportId,
    pub generated_at: DateTime<Utc>,
    pub recipient: ReportRecipient,
    pub method: ValuationMethod,
    pub currency: String,
    pub result: ValuationResult,
    pub metrics: Vec<MetricCard>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ValuationReport {
    /// Assemble a report for `recipient`. Fails only if the recipient is invalid.
    pub fn build(
        id: ReportId,
        recipient: ReportRecipient,
        facts: &InventoryFacts,
        result: ValuationResult,
        generated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        recipient.validate()?;

        let symbol = resolve_symbol(&facts.currency);
        tracing::debug!(
            report_id = %id,
            method = facts.valuation_method.as_str(),
            capital_locked_percent = result.capital_locked_percent,
            "building valuation report"
        );

        Ok(Self {
            id,
            generated_at,
            recipient,
            method: facts.valuation_method,
            metrics: metric_cards(&result, &symbol),
            insights: insights(&result, &symbol),
            recommendations: recommendations(&result),
            currency: symbol,
            result,
        })
    }

    /// Suggested export file name without extension.
    pub fn file_stem(&self) -> String {
        format!("inventory-report-{}", self.generated_at.timestamp_millis())
    }
}

impl core::fmt::Display for ValuationReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Inventory Valuation Report")?;
        writeln!(f)?;
        writeln!(f, "Generated for: {}", self.recipient.full_name)?;
        if let Some(company) = &self.recipient.company_name {
            writeln!(f, "Company: {company}")?;
        }
        writeln!(f, "Date: {}", self.generated_at.format("%Y-%m-%d"))?;
        writeln!(f, "Method: {}", self.method)?;

        writeln!(f)?;
        writeln!(f, "Key Metrics")?;
        for metric in &self.metrics {
            writeln!(f, "  {}: {}", metric.label, metric.value)?;
        }

        writeln!(f)?;
        writeln!(f, "Key Insights")?;
        for insight in &self.insights {
            writeln!(f, "  {insight}")?;
        }

        writeln!(f)?;
        writeln!(f, "Recommendations")?;
        for rec in &self.recommendations {
            writeln!(f, "  • {rec}")?;
        }
        Ok(())
    }
}
