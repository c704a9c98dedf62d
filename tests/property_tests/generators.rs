//! Property test generators for engine inputs

use proptest::prelude::*;
use voice_roi::RoiInputs;

/// Any percentage in 0-100
pub fn percentage() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

/// A well-formed scenario: every field in range, nothing forced positive
pub fn valid_inputs() -> impl Strategy<Value = RoiInputs> {
    (
        (0.0..5_000.0f64, 0.0..1_000.0f64, percentage(), percentage()),
        (0.0..500.0f64, 0.0..500.0f64, percentage(), 0.0..60.0f64),
        (0.0..250_000.0f64, 0.0..250_000.0f64),
        (0.0..50_000.0f64, 0.0..5_000.0f64, 0.0..5.0f64, 0.0..50.0f64),
        (percentage(), percentage(), percentage(), percentage(), percentage()),
    )
        .prop_map(
            |(
                (
                    monthly_appointments,
                    avg_appointment_value,
                    no_show_rate_before,
                    no_show_rate_after,
                ),
                (daily_inbound_calls, daily_outbound_calls, inbound_answer_rate, avg_call_minutes),
                (receptionist_salary, manager_salary),
                (setup_fee, monthly_software_cost, cost_per_minute, cost_per_booking),
                (
                    staff_capacity_constraint,
                    ai_inbound_handling_rate,
                    ai_outbound_handling_rate,
                    appointment_increase,
                    missed_call_booking_rate,
                ),
            )| RoiInputs {
                monthly_appointments,
                avg_appointment_value,
                no_show_rate_before,
                no_show_rate_after,
                daily_inbound_calls,
                daily_outbound_calls,
                inbound_answer_rate,
                avg_call_minutes,
                receptionist_salary,
                manager_salary,
                setup_fee,
                monthly_software_cost,
                cost_per_minute,
                cost_per_booking,
                staff_capacity_constraint,
                ai_inbound_handling_rate,
                ai_outbound_handling_rate,
                appointment_increase,
                missed_call_booking_rate,
            },
        )
}

/// A scenario where every revenue mechanism and usage charge is active:
/// appointments, missed calls, handling, conversion and prices all positive,
/// and the no-show rate actually drops
pub fn active_inputs() -> impl Strategy<Value = RoiInputs> {
    (
        valid_inputs(),
        1.0..5_000.0f64,
        1.0..100.0f64,
        0.0..0.9f64,
        1.0..500.0f64,
        0.0..90.0f64,
        (1.0..100.0f64, 1.0..100.0f64, 1.0..100.0f64),
        (1_000.0..250_000.0f64, 0.5..60.0f64, 0.01..5.0f64),
    )
        .prop_map(
            |(
                base,
                monthly_appointments,
                no_show_rate_before,
                after_share,
                daily_inbound_calls,
                inbound_answer_rate,
                (ai_inbound_handling_rate, missed_call_booking_rate, appointment_increase),
                (receptionist_salary, avg_call_minutes, cost_per_minute),
            )| RoiInputs {
                monthly_appointments,
                no_show_rate_before,
                no_show_rate_after: no_show_rate_before * after_share,
                daily_inbound_calls,
                inbound_answer_rate,
                ai_inbound_handling_rate,
                missed_call_booking_rate,
                appointment_increase,
                receptionist_salary,
                avg_call_minutes,
                cost_per_minute,
                ..base
            },
        )
}
