use serde::{Deserialize, Serialize};

use stockworth_core::{DomainError, DomainResult};

use crate::method::ValuationMethod;
use crate::reserve::AgeReserveTable;

fn default_currency() -> String {
    "$".to_string()
}

/// Inventory facts gathered by the input surface for a single evaluation.
///
/// Percentages are nominal `0..=100` values and are not capped. Amounts are in
/// whole currency units; `currency` is only used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryFacts {
    pub original_cost: f64,
    pub age_months: f64,
    pub current_market_value: f64,

    #[serde(default)]
    pub freight_percent: f64,
    #[serde(default)]
    pub labor_percent: f64,
    #[serde(default)]
    pub overhead_percent: f64,
    /// Landed costs are already folded into `original_cost`.
    #[serde(default)]
    pub costs_included: bool,

    #[serde(default)]
    pub cost_to_complete: f64,
    #[serde(default)]
    pub cost_to_sell: f64,

    #[serde(default)]
    pub valuation_method: ValuationMethod,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub age_reserve_table: AgeReserveTable,
}

impl InventoryFacts {
    /// Facts with no landed costs, no deductions, the conservative method and
    /// the default reserve table.
    pub fn new(original_cost: f64, age_months: f64, current_market_value: f64) -> Self {
        Self {
            original_cost,
            age_months,
            current_market_value,
            freight_percent: 0.0,
            labor_percent: 0.0,
            overhead_percent: 0.0,
            costs_included: false,
            cost_to_complete: 0.0,
            cost_to_sell: 0.0,
            valuation_method: ValuationMethod::default(),
            currency: default_currency(),
            age_reserve_table: AgeReserveTable::default(),
        }
    }

    pub fn with_landed_costs(mut self, freight: f64, labor: f64, overhead: f64) -> Self {
        self.freight_percent = freight;
        self.labor_percent = labor;
        self.overhead_percent = overhead;
        self
    }

    pub fn with_costs_included(mut self, costs_included: bool) -> Self {
        self.costs_included = costs_included;
        self
    }

    pub fn with_deductions(mut self, cost_to_complete: f64, cost_to_sell: f64) -> Self {
        self.cost_to_complete = cost_to_complete;
        self.cost_to_sell = cost_to_sell;
        self
    }

    pub fn with_method(mut self, method: ValuationMethod) -> Self {
        self.valuation_method = method;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_reserve_table(mut self, table: AgeReserveTable) -> Self {
        self.age_reserve_table = table;
        self
    }

    /// Original cost plus landed-cost percentages, unless they are already included.
    pub fn cost_basis(&self) -> f64 {
        if self.costs_included {
            self.original_cost
        } else {
            self.original_cost
                * (1.0
                    + self.freight_percent / 100.0
                    + self.labor_percent / 100.0
                    + self.overhead_percent / 100.0)
        }
    }

    /// Expected net proceeds; not floored at zero.
    pub fn net_realizable_value(&self) -> f64 {
        self.current_market_value - self.cost_to_complete - self.cost_to_sell
    }

    /// Caller-side input checks.
    ///
    /// The engine accepts anything; this is what the input surface runs before
    /// handing the facts over. A market value of exactly zero is accepted here.
    pub fn validate(&self) -> DomainResult<()> {
        if !(self.original_cost.is_finite() && self.original_cost > 0.0) {
            return Err(DomainError::validation("original cost must be positive"));
        }
        if !(self.current_market_value.is_finite() && self.current_market_value >= 0.0) {
            return Err(DomainError::validation(
                "current market value cannot be negative",
            ));
        }
        if !(self.age_months.is_finite() && self.age_months >= 0.0) {
            return Err(DomainError::validation("age cannot be negative"));
        }

        let non_negative = [
            ("freight percent", self.freight_percent),
            ("labor percent", self.labor_percent),
            ("overhead percent", self.overhead_percent),
            ("cost to complete", self.cost_to_complete),
            ("cost to sell", self.cost_to_sell),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DomainError::validation(format!("{name} cannot be negative")));
            }
        }

        Ok(())
    }
}

impl Default for InventoryFacts {
    /// The calculator's prefilled example: a 12,000 lot, eight months old.
    fn default() -> Self {
        InventoryFacts::new(12_000.0, 8.0, 9_000.0)
            .with_landed_costs(10.0, 25.0, 15.0)
            .with_deductions(1_000.0, 500.0)
    }
}
