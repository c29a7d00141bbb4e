//! Amount formatting for presentation surfaces.
//!
//! Amounts are plain `f64` values throughout the engine; this module only
//! decides how they are shown: a currency symbol prefix, whole units, and
//! comma thousands separators (`$1,200,000`).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Currencies offered by the input surface.
///
/// Any other string is still accepted as a display prefix by [`format_amount`];
/// this enum only exists so known codes (`USD`) resolve to their symbol (`$`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
    Gbp,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Inr,
        Currency::Gbp,
        Currency::Jpy,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Inr => "₹",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    /// Accepts either the symbol (`€`) or the ISO code (`eur`, `EUR`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.symbol() == s || c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown currency: {s}")))
    }
}

/// Resolve a user-supplied currency string to its display prefix.
///
/// Known codes and symbols map to the symbol; anything else is used verbatim.
pub fn resolve_symbol(currency: &str) -> String {
    match Currency::from_str(currency) {
        Ok(c) => c.symbol().to_string(),
        Err(_) => currency.to_string(),
    }
}

/// Render `value` as `{symbol}{whole units with thousands separators}`.
///
/// Rounds half away from zero. Negative values keep the sign after the symbol
/// (`$-1,500`); `NaN` and infinities render as `NaN`, `∞` and `-∞`.
pub fn format_amount(value: f64, symbol: &str) -> String {
    format!("{symbol}{}", group_thousands(value))
}

/// Render a percentage with a fixed number of decimals (`58.3%`).
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = value.round();
    // Collapses -0 and values that round to zero.
    if rounded == 0.0 {
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_amounts_with_separators() {
        assert_eq!(format_amount(1_200_000.0, "$"), "$1,200,000");
        assert_eq!(format_amount(9000.0, "$"), "$9,000");
        assert_eq!(format_amount(0.0, "€"), "€0");
        assert_eq!(format_amount(999.0, "£"), "£999");
        assert_eq!(format_amount(1000.0, "£"), "£1,000");
        assert_eq!(format_amount(123_456_789.0, "₹"), "₹123,456,789");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_amount(1499.5, "$"), "$1,500");
        assert_eq!(format_amount(1499.49, "$"), "$1,499");
        assert_eq!(format_amount(-2.5, "$"), "$-3");
    }

    #[test]
    fn negative_and_degenerate_values() {
        assert_eq!(format_amount(-1500.0, "$"), "$-1,500");
        assert_eq!(format_amount(-0.0, "$"), "$0");
        assert_eq!(format_amount(-0.3, "$"), "$0");
        assert_eq!(format_amount(f64::NAN, "$"), "$NaN");
        assert_eq!(format_amount(f64::INFINITY, "¥"), "¥∞");
        assert_eq!(format_amount(f64::NEG_INFINITY, "¥"), "¥-∞");
    }

    #[test]
    fn percent_uses_requested_precision() {
        assert_eq!(format_percent(58.333_333, 1), "58.3%");
        assert_eq!(format_percent(12.0, 2), "12.00%");
        assert_eq!(format_percent(0.0, 0), "0%");
    }

    #[test]
    fn currency_parses_symbols_and_codes() {
        assert_eq!("€".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!("gbp".parse::<Currency>().unwrap(), Currency::Gbp);
        assert_eq!(" JPY ".parse::<Currency>().unwrap(), Currency::Jpy);
        assert!("CHF".parse::<Currency>().is_err());
    }

    #[test]
    fn unknown_currency_is_used_verbatim() {
        assert_eq!(resolve_symbol("USD"), "$");
        assert_eq!(resolve_symbol("₹"), "₹");
        assert_eq!(resolve_symbol("CHF "), "CHF ");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: stripping the prefix and separators gives back the rounded integer.
            #[test]
            fn separators_do_not_change_the_number(n in -1_000_000_000_000i64..1_000_000_000_000i64) {
                let rendered = format_amount(n as f64, "$");
                let body: String = rendered
                    .trim_start_matches('$')
                    .chars()
                    .filter(|c| *c != ',')
                    .collect();
                prop_assert_eq!(body.parse::<i64>().unwrap(), n);
            }
        }
    }
}
