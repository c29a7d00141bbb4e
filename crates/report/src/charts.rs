//! Chart-ready series derived from a valuation result.

use serde::{Deserialize, Serialize};

use stockworth_valuation::ValuationResult;

use crate::report::Tone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginBar {
    pub name: String,
    /// Margin percentage, floored at zero for display.
    #[serde(with = "stockworth_core::float")]
    pub margin: f64,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionSlice {
    pub name: String,
    #[serde(with = "stockworth_core::float")]
    pub value: f64,
    pub tone: Tone,
}

/// Before/after margin bars and the adjusted value vs. write-down split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub margins: Vec<MarginBar>,
    pub composition: Vec<CompositionSlice>,
}

impl ChartSeries {
    pub fn from_result(result: &ValuationResult) -> Self {
        let after_tone = if result.adjusted_margin > result.original_margin {
            Tone::Success
        } else {
            Tone::Destructive
        };

        Self {
            margins: vec![
                MarginBar {
                    name: "Before".to_string(),
                    margin: result.original_margin.max(0.0),
                    tone: Tone::Primary,
                },
                MarginBar {
                    name: "After".to_string(),
                    margin: result.adjusted_margin.max(0.0),
                    tone: after_tone,
                },
            ],
            composition: vec![
                CompositionSlice {
                    name: "Adjusted Value".to_string(),
                    value: result.adjusted_inventory_value,
                    tone: Tone::Success,
                },
                CompositionSlice {
                    name: "Write-Down".to_string(),
                    value: result.total_write_down,
                    tone: Tone::Destructive,
                },
            ],
        }
    }

    /// Whether the write-down improved the margin on a sale at market value.
    pub fn margin_improved(&self) -> bool {
        self.margins.get(1).is_some_and(|bar| bar.tone == Tone::Success)
    }
}
