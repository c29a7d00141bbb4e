//! Valuation engine.
//!
//! `evaluate` is a single pass over the facts: cost basis, net realizable
//! value, age reserve, method selection, write-down and margins. It never
//! fails. Zero denominators (cost basis or market value) are not guarded and
//! surface as IEEE `inf`/`NaN` in the percentage fields; callers that need those
//! preconditions enforced use [`try_evaluate`].

use serde::{Deserialize, Serialize};

use stockworth_core::{DomainError, DomainResult};

use crate::facts::InventoryFacts;

/// Metrics derived from one set of [`InventoryFacts`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    #[serde(with = "stockworth_core::float")]
    pub cost_basis: f64,
    #[serde(with = "stockworth_core::float")]
    pub net_realizable_value: f64,
    /// Reserve percentage of the age band that matched (0 when none did).
    #[serde(with = "stockworth_core::float")]
    pub reserve_percent: f64,
    #[serde(with = "stockworth_core::float")]
    pub age_adjusted_value: f64,
    #[serde(with = "stockworth_core::float")]
    pub adjusted_inventory_value: f64,
    #[serde(with = "stockworth_core::float")]
    pub total_write_down: f64,
    #[serde(with = "stockworth_core::float")]
    pub capital_locked_percent: f64,
    #[serde(with = "stockworth_core::float")]
    pub original_margin: f64,
    #[serde(with = "stockworth_core::float")]
    pub adjusted_margin: f64,
    #[serde(with = "stockworth_core::float")]
    pub margin_impact: f64,
}

impl ValuationResult {
    /// Adjusted value as a percentage of cost basis.
    pub fn retained_percent(&self) -> f64 {
        self.adjusted_inventory_value / self.cost_basis * 100.0
    }
}

/// Derive the valuation metrics for `facts`.
pub fn evaluate(facts: &InventoryFacts) -> ValuationResult {
    let cost_basis = facts.cost_basis();
    let net_realizable_value = facts.net_realizable_value();

    let reserve_percent = facts.age_reserve_table.reserve_for(facts.age_months);
    let age_adjusted_value = cost_basis * (1.0 - reserve_percent / 100.0);

    let adjusted_inventory_value =
        facts
            .valuation_method
            .select(cost_basis, net_realizable_value, age_adjusted_value);

    let total_write_down = cost_basis - adjusted_inventory_value;
    let capital_locked_percent = total_write_down / cost_basis * 100.0;

    // Margins assume a sale at current market value.
    let selling_price = facts.current_market_value;
    let original_margin = (selling_price - cost_basis) / selling_price * 100.0;
    let adjusted_margin = (selling_price - adjusted_inventory_value) / selling_price * 100.0;

    ValuationResult {
        cost_basis,
        net_realizable_value,
        reserve_percent,
        age_adjusted_value,
        adjusted_inventory_value,
        total_write_down,
        capital_locked_percent,
        original_margin,
        adjusted_margin,
        margin_impact: adjusted_margin - original_margin,
    }
}

/// Validate `facts`, enforce the division preconditions, then evaluate.
pub fn try_evaluate(facts: &InventoryFacts) -> DomainResult<ValuationResult> {
    facts.validate()?;

    if facts.current_market_value <= 0.0 {
        return Err(DomainError::validation(
            "current market value must be positive to compute margins",
        ));
    }
    let cost_basis = facts.cost_basis();
    if !(cost_basis.is_finite() && cost_basis > 0.0) {
        return Err(DomainError::validation("cost basis must be positive"));
    }

    Ok(evaluate(facts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::ValuationMethod;
    use crate::reserve::{AgeReserveBand, AgeReserveTable};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn scenario() -> InventoryFacts {
        InventoryFacts::new(12_000.0, 8.0, 9_000.0)
            .with_landed_costs(10.0, 25.0, 15.0)
            .with_deductions(1_000.0, 500.0)
    }

    #[test]
    fn end_to_end_conservative_scenario() {
        let r = evaluate(&scenario().with_method(ValuationMethod::Conservative));

        assert_eq!(r.cost_basis, 18_000.0);
        assert_eq!(r.net_realizable_value, 7_500.0);
        assert_eq!(r.reserve_percent, 25.0);
        assert_eq!(r.age_adjusted_value, 13_500.0);
        assert_eq!(r.adjusted_inventory_value, 7_500.0);
        assert_eq!(r.total_write_down, 10_500.0);
        assert_close(r.capital_locked_percent, 58.333_333_333_333_336);
        assert_eq!(format!("{:.2}", r.capital_locked_percent), "58.33");
    }

    #[test]
    fn end_to_end_margins() {
        let r = evaluate(&scenario());
        // (9000 - 18000) / 9000 and (9000 - 7500) / 9000
        assert_close(r.original_margin, -100.0);
        assert_close(r.adjusted_margin, 16.666_666_666_666_668);
        assert_close(r.margin_impact, 116.666_666_666_666_67);
    }

    #[test]
    fn nrv_method_ignores_age_reserve() {
        let r = evaluate(&scenario().with_method(ValuationMethod::Nrv));
        assert_eq!(r.adjusted_inventory_value, 7_500.0);

        let healthy = InventoryFacts::new(1_000.0, 30.0, 5_000.0).with_method(ValuationMethod::Nrv);
        let r = evaluate(&healthy);
        assert_eq!(r.adjusted_inventory_value, 1_000.0);
        assert_eq!(r.total_write_down, 0.0);
        assert_eq!(r.capital_locked_percent, 0.0);
    }

    #[test]
    fn age_based_method_uses_reserve_only() {
        let r = evaluate(&scenario().with_method(ValuationMethod::AgeBased));
        assert_eq!(r.adjusted_inventory_value, 13_500.0);
        assert_eq!(r.total_write_down, 4_500.0);
        assert_eq!(r.capital_locked_percent, 25.0);
    }

    #[test]
    fn costs_included_keeps_original_cost() {
        let r = evaluate(&scenario().with_costs_included(true));
        assert_eq!(r.cost_basis, 12_000.0);
        assert_eq!(r.age_adjusted_value, 9_000.0);
        assert_eq!(r.adjusted_inventory_value, 7_500.0);
        assert_eq!(r.total_write_down, 4_500.0);
    }

    #[test]
    fn negative_reserve_can_produce_negative_write_down() {
        let table = AgeReserveTable::new(vec![AgeReserveBand::new(0.0, None, -10.0, "bonus")]);
        let facts = InventoryFacts::new(100.0, 1.0, 500.0)
            .with_method(ValuationMethod::AgeBased)
            .with_reserve_table(table);
        let r = evaluate(&facts);
        assert_close(r.adjusted_inventory_value, 110.0);
        assert_close(r.total_write_down, -10.0);
    }

    #[test]
    fn empty_reserve_table_means_no_reserve() {
        let facts = scenario()
            .with_method(ValuationMethod::AgeBased)
            .with_reserve_table(AgeReserveTable::new(vec![]));
        let r = evaluate(&facts);
        assert_eq!(r.reserve_percent, 0.0);
        assert_eq!(r.age_adjusted_value, r.cost_basis);
        assert_eq!(r.total_write_down, 0.0);
    }

    #[test]
    fn zero_denominators_pass_through_as_ieee_values() {
        let zero_cost = InventoryFacts::new(0.0, 1.0, 100.0).with_method(ValuationMethod::AgeBased);
        let r = evaluate(&zero_cost);
        assert!(r.capital_locked_percent.is_nan());

        let zero_market = InventoryFacts::new(100.0, 1.0, 0.0);
        let r = evaluate(&zero_market);
        assert_eq!(r.original_margin, f64::NEG_INFINITY);
        // Adjusted value is the zero NRV, so the adjusted margin is 0 / 0.
        assert!(r.adjusted_margin.is_nan());
        assert!(r.margin_impact.is_nan());
    }

    #[test]
    fn try_evaluate_enforces_preconditions() {
        assert_eq!(try_evaluate(&scenario()).unwrap(), evaluate(&scenario()));

        let err = try_evaluate(&InventoryFacts::new(100.0, 1.0, 0.0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(m) if m.contains("margins")));

        let err = try_evaluate(&InventoryFacts::new(0.0, 1.0, 10.0)).unwrap_err();
        assert_eq!(err.message(), "original cost must be positive");
    }

    #[test]
    fn retained_percent_of_cost() {
        let r = evaluate(&scenario());
        assert_close(r.retained_percent(), 41.666_666_666_666_664);
    }

    #[test]
    fn result_serializes_camel_case() {
        let value = serde_json::to_value(evaluate(&scenario())).unwrap();
        assert_eq!(value["costBasis"], 18_000.0);
        assert_eq!(value["adjustedInventoryValue"], 7_500.0);
        assert_eq!(value["totalWriteDown"], 10_500.0);
    }

    #[test]
    fn zero_market_value_result_survives_json() {
        let r = evaluate(&InventoryFacts::new(100.0, 1.0, 0.0));

        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""originalMargin":"-Infinity""#));
        assert!(json.contains(r#""adjustedMargin":"NaN""#));

        let back: ValuationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.original_margin, f64::NEG_INFINITY);
        assert!(back.adjusted_margin.is_nan());
        assert!(back.margin_impact.is_nan());
        assert_eq!(back.cost_basis, r.cost_basis);
        assert_eq!(back.total_write_down, r.total_write_down);
    }

    #[test]
    fn result_accepts_null_for_undefined_metrics() {
        let mut value = serde_json::to_value(evaluate(&scenario())).unwrap();
        value["capitalLockedPercent"] = serde_json::Value::Null;
        let back: ValuationResult = serde_json::from_value(value).unwrap();
        assert!(back.capital_locked_percent.is_nan());
        assert_eq!(back.cost_basis, 18_000.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn method() -> impl Strategy<Value = ValuationMethod> {
            prop::sample::select(ValuationMethod::ALL.to_vec())
        }

        prop_compose! {
            fn facts()(
                original_cost in 1.0f64..1_000_000.0,
                age_months in 0.0f64..120.0,
                market in 1.0f64..2_000_000.0,
                freight in 0.0f64..100.0,
                labor in 0.0f64..100.0,
                overhead in 0.0f64..100.0,
                costs_included in any::<bool>(),
                to_complete in 0.0f64..50_000.0,
                to_sell in 0.0f64..50_000.0,
                method in method(),
            ) -> InventoryFacts {
                InventoryFacts::new(original_cost, age_months, market)
                    .with_landed_costs(freight, labor, overhead)
                    .with_costs_included(costs_included)
                    .with_deductions(to_complete, to_sell)
                    .with_method(method)
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: evaluation is bit-for-bit deterministic.
            #[test]
            fn evaluate_is_deterministic(f in facts()) {
                let a = evaluate(&f);
                let b = evaluate(&f);
                let bits = |r: &ValuationResult| [
                    r.cost_basis.to_bits(),
                    r.net_realizable_value.to_bits(),
                    r.age_adjusted_value.to_bits(),
                    r.adjusted_inventory_value.to_bits(),
                    r.total_write_down.to_bits(),
                    r.capital_locked_percent.to_bits(),
                    r.original_margin.to_bits(),
                    r.adjusted_margin.to_bits(),
                    r.margin_impact.to_bits(),
                ];
                prop_assert_eq!(bits(&a), bits(&b));
            }

            /// Property: cost basis is original cost scaled by the landed-cost percentages.
            #[test]
            fn cost_basis_is_additive(f in facts()) {
                let r = evaluate(&f);
                let expected = if f.costs_included {
                    f.original_cost
                } else {
                    f.original_cost
                        * (1.0 + f.freight_percent / 100.0 + f.labor_percent / 100.0 + f.overhead_percent / 100.0)
                };
                prop_assert_eq!(r.cost_basis, expected);
            }

            /// Property: conservative never exceeds the NRV method or the age-adjusted value.
            #[test]
            fn conservative_is_dominant(f in facts()) {
                let conservative = evaluate(&f.clone().with_method(ValuationMethod::Conservative));
                let nrv = evaluate(&f.with_method(ValuationMethod::Nrv));
                prop_assert!(conservative.adjusted_inventory_value <= nrv.adjusted_inventory_value);
                prop_assert!(conservative.adjusted_inventory_value <= conservative.age_adjusted_value);
            }

            /// Property: write-down and capital-locked identities hold exactly.
            #[test]
            fn write_down_identities(f in facts()) {
                let r = evaluate(&f);
                prop_assert_eq!(r.total_write_down, r.cost_basis - r.adjusted_inventory_value);
                prop_assert_eq!(
                    r.capital_locked_percent,
                    r.total_write_down / r.cost_basis * 100.0
                );
                prop_assert_eq!(r.margin_impact, r.adjusted_margin - r.original_margin);
            }

            /// Property: the reserve always comes from the default table's step values.
            #[test]
            fn reserve_is_a_table_step(f in facts()) {
                let r = evaluate(&f);
                prop_assert!([0.0, 10.0, 25.0, 50.0].contains(&r.reserve_percent));
            }
        }
    }
}
