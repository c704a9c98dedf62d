//! Plain-language notes explaining how each figure is derived

use crate::domain::roi::RoiInputs;
use crate::report::currency::CurrencyFormatter;
use serde::Serialize;

/// Closing caveat shown beneath the notes
pub const DISCLAIMER: &str = "Based on RingCentral research showing small businesses miss ~30% of \
calls due to capacity constraints. All calculations are estimates and actual results may vary.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationNote {
    pub title: String,
    pub text: String,
}

/// Notes parametrized by the scenario that produced the figures
pub fn calculation_notes(inputs: &RoiInputs, currency: &CurrencyFormatter) -> Vec<CalculationNote> {
    let note = |title: &str, text: String| CalculationNote {
        title: title.to_string(),
        text,
    };

    vec![
        note(
            "No-Show Reduction",
            format!(
                "Calculated as ({}% - {}%) × {} monthly appointments × {} × 12 months",
                inputs.no_show_rate_before,
                inputs.no_show_rate_after,
                inputs.monthly_appointments,
                currency.format_price(inputs.avg_appointment_value),
            ),
        ),
        note(
            "Missed Call Recovery",
            format!(
                "Based on {}% of daily inbound calls being missed, with {}% of those having booking intent",
                100.0 - inputs.inbound_answer_rate,
                inputs.missed_call_booking_rate,
            ),
        ),
        note(
            "Staff Time Savings",
            format!(
                "Based on hourly wages × time saved from AI handling {}% of inbound and {}% of outbound calls",
                inputs.ai_inbound_handling_rate, inputs.ai_outbound_handling_rate,
            ),
        ),
        note(
            "Call Minutes Cost",
            format!(
                "Calculated as total handled calls × average call duration × {} per minute",
                currency.format_price(inputs.cost_per_minute),
            ),
        ),
        note(
            "Booking Fees",
            "Fees for new bookings gained from missed call recovery and better scheduling"
                .to_string(),
        ),
    ]
}
