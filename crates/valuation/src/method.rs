use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockworth_core::DomainError;

/// Policy that decides which derived value becomes the adjusted inventory value.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationMethod {
    /// Lower of cost basis and net realizable value.
    #[serde(rename = "nrv")]
    Nrv,
    /// Age-adjusted value as-is, never compared against cost basis.
    #[serde(rename = "age", alias = "ageBased")]
    AgeBased,
    /// Lowest of cost basis, net realizable value and age-adjusted value.
    #[default]
    #[serde(rename = "conservative")]
    Conservative,
}

impl ValuationMethod {
    pub const ALL: [ValuationMethod; 3] = [
        ValuationMethod::Nrv,
        ValuationMethod::AgeBased,
        ValuationMethod::Conservative,
    ];

    /// Wire name (`nrv`, `age`, `conservative`).
    pub fn as_str(self) -> &'static str {
        match self {
            ValuationMethod::Nrv => "nrv",
            ValuationMethod::AgeBased => "age",
            ValuationMethod::Conservative => "conservative",
        }
    }

    /// Pick the adjusted value from the three candidates.
    ///
    /// A `NaN` candidate that takes part in a comparison propagates to the
    /// result instead of being skipped.
    pub fn select(self, cost_basis: f64, net_realizable_value: f64, age_adjusted_value: f64) -> f64 {
        match self {
            ValuationMethod::Nrv => lowest(&[cost_basis, net_realizable_value]),
            ValuationMethod::AgeBased => age_adjusted_value,
            ValuationMethod::Conservative => {
                lowest(&[cost_basis, net_realizable_value, age_adjusted_value])
            }
        }
    }
}

fn lowest(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            acc.min(v)
        }
    })
}

impl core::fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ValuationMethod::Nrv => "NRV",
            ValuationMethod::AgeBased => "Age-Based",
            ValuationMethod::Conservative => "Conservative",
        };
        f.write_str(label)
    }
}

impl FromStr for ValuationMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nrv" => Ok(ValuationMethod::Nrv),
            "age" | "agebased" | "age-based" | "age_based" => Ok(ValuationMethod::AgeBased),
            "conservative" => Ok(ValuationMethod::Conservative),
            other => Err(DomainError::validation(format!(
                "unknown valuation method '{other}' (expected one of: nrv, age, conservative)"
            ))),
        }
    }
}
