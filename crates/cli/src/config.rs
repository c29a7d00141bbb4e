//! Start-up configuration from the environment.
//!
//! Precedence is defaults, then `STOCKWORTH_*` variables, then command-line
//! flags. Unusable values are logged and ignored rather than aborting.

use stockworth_valuation::ValuationMethod;

pub const CURRENCY_VAR: &str = "STOCKWORTH_CURRENCY";
pub const METHOD_VAR: &str = "STOCKWORTH_METHOD";
pub const OUTPUT_VAR: &str = "STOCKWORTH_OUTPUT";

/// How command results are written to stdout.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Environment-level overrides applied to every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub currency: Option<String>,
    pub method: Option<ValuationMethod>,
    pub output: OutputFormat,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let currency = lookup(CURRENCY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let method = lookup(METHOD_VAR).and_then(|v| match v.parse::<ValuationMethod>() {
            Ok(m) => Some(m),
            Err(e) => {
                tracing::warn!(var = METHOD_VAR, error = %e, "ignoring invalid valuation method");
                None
            }
        });

        let output = lookup(OUTPUT_VAR)
            .and_then(|v| match v.parse::<OutputFormat>() {
                Ok(f) => Some(f),
                Err(e) => {
                    tracing::warn!(var = OUTPUT_VAR, error = %e, "ignoring invalid output format");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            currency,
            method,
            output,
        }
    }
}
