//! Property-based tests for engine invariants
//!
//! These hold for every well-formed scenario, not just the default clinic.

use crate::generators::{active_inputs, valid_inputs};
use proptest::prelude::*;
use voice_roi::domain::roi::staff_savings;
use voice_roi::{compute_roi, RoiInputs};

proptest! {
    #[test]
    fn annual_cost_is_sum_of_usage_components(inputs in valid_inputs()) {
        let results = compute_roi(&inputs);
        let usage = results.usage;
        prop_assert_eq!(
            results.annual_ai_cost,
            usage.base_subscription_cost + usage.minutes_cost + usage.booking_fees
        );
    }

    #[test]
    fn revenue_upside_is_sum_of_breakdown(inputs in valid_inputs()) {
        let results = compute_roi(&inputs);
        let breakdown = results.breakdown;
        prop_assert_eq!(
            results.revenue_upside,
            breakdown.no_show_revenue
                + breakdown.missed_call_revenue
                + breakdown.additional_appts_revenue
        );
    }

    #[test]
    fn net_benefit_is_savings_plus_upside_minus_cost(inputs in valid_inputs()) {
        let results = compute_roi(&inputs);
        prop_assert_eq!(
            results.net_benefit,
            results.cost_savings + results.revenue_upside - results.annual_ai_cost
        );
    }

    #[test]
    fn well_formed_inputs_give_finite_results(inputs in valid_inputs()) {
        prop_assert!(compute_roi(&inputs).is_finite());
    }

    #[test]
    fn equal_no_show_rates_give_zero_no_show_revenue(
        inputs in valid_inputs(),
        rate in 0.0..=100.0f64,
    ) {
        let inputs = RoiInputs { no_show_rate_before: rate, no_show_rate_after: rate, ..inputs };
        prop_assert_eq!(compute_roi(&inputs).breakdown.no_show_revenue, 0.0);
    }

    #[test]
    fn higher_appointment_value_raises_all_revenue(
        inputs in active_inputs(),
        value in 1.0..1_000.0f64,
        increase in 1.0..1_000.0f64,
    ) {
        let lower = compute_roi(&RoiInputs { avg_appointment_value: value, ..inputs });
        let higher = compute_roi(&RoiInputs { avg_appointment_value: value + increase, ..inputs });

        prop_assert!(higher.monthly_revenue > lower.monthly_revenue);
        prop_assert!(higher.annual_revenue > lower.annual_revenue);
        prop_assert!(higher.breakdown.no_show_revenue > lower.breakdown.no_show_revenue);
        prop_assert!(higher.breakdown.missed_call_revenue > lower.breakdown.missed_call_revenue);
        prop_assert!(
            higher.breakdown.additional_appts_revenue > lower.breakdown.additional_appts_revenue
        );
    }

    #[test]
    fn higher_inbound_handling_raises_savings_and_minutes(
        inputs in active_inputs(),
        rate in 0.0..99.0f64,
        step in 0.5..50.0f64,
    ) {
        let higher_rate = (rate + step).min(100.0);
        let lower_inputs = RoiInputs { ai_inbound_handling_rate: rate, ..inputs };
        let higher_inputs = RoiInputs { ai_inbound_handling_rate: higher_rate, ..inputs };

        prop_assert!(
            staff_savings(&higher_inputs).inbound_receptionist
                > staff_savings(&lower_inputs).inbound_receptionist
        );

        let lower = compute_roi(&lower_inputs);
        let higher = compute_roi(&higher_inputs);
        prop_assert!(higher.usage.minutes_cost > lower.usage.minutes_cost);
        prop_assert!(higher.breakdown.missed_call_revenue >= lower.breakdown.missed_call_revenue);
    }

    #[test]
    fn staff_capacity_constraint_never_changes_results(
        inputs in valid_inputs(),
        constraint in 0.0..=100.0f64,
    ) {
        let changed = RoiInputs { staff_capacity_constraint: constraint, ..inputs };
        prop_assert_eq!(compute_roi(&inputs), compute_roi(&changed));
    }
}
