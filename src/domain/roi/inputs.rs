//! Engine input parameter set
//!
//! A flat, unvalidated set of numbers. Percentages are expressed 0-100.
//! Validation happens at the boundary (see [`crate::domain::validation`]);
//! the engine accepts whatever it is given and lets NaN propagate.

use crate::domain::roi::constants::defaults;
use serde::{Deserialize, Serialize};

/// Every parameter the ROI engine reads
///
/// Serialized keys are the camelCase names of the engine input contract.
/// Missing keys fall back to the default clinic scenario when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RoiInputs {
    // Appointments
    pub monthly_appointments: f64,
    pub avg_appointment_value: f64,
    pub no_show_rate_before: f64,
    pub no_show_rate_after: f64,

    // Calls
    pub daily_inbound_calls: f64,
    pub daily_outbound_calls: f64,
    pub inbound_answer_rate: f64,
    pub avg_call_minutes: f64,

    // Staff (annual salaries)
    pub receptionist_salary: f64,
    pub manager_salary: f64,

    // Vendor pricing
    pub setup_fee: f64,
    pub monthly_software_cost: f64,
    pub cost_per_minute: f64,
    pub cost_per_booking: f64,

    // Assumptions
    /// Accepted and carried, but no formula reads it
    pub staff_capacity_constraint: f64,
    pub ai_inbound_handling_rate: f64,
    pub ai_outbound_handling_rate: f64,
    pub appointment_increase: f64,
    pub missed_call_booking_rate: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            monthly_appointments: defaults::MONTHLY_APPOINTMENTS,
            avg_appointment_value: defaults::AVG_APPOINTMENT_VALUE,
            no_show_rate_before: defaults::NO_SHOW_RATE_BEFORE,
            no_show_rate_after: defaults::NO_SHOW_RATE_AFTER,
            daily_inbound_calls: defaults::DAILY_INBOUND_CALLS,
            daily_outbound_calls: defaults::DAILY_OUTBOUND_CALLS,
            inbound_answer_rate: defaults::INBOUND_ANSWER_RATE,
            avg_call_minutes: defaults::AVG_CALL_MINUTES,
            receptionist_salary: defaults::RECEPTIONIST_SALARY,
            manager_salary: defaults::MANAGER_SALARY,
            setup_fee: defaults::SETUP_FEE,
            monthly_software_cost: defaults::MONTHLY_SOFTWARE_COST,
            cost_per_minute: defaults::COST_PER_MINUTE,
            cost_per_booking: defaults::COST_PER_BOOKING,
            staff_capacity_constraint: defaults::STAFF_CAPACITY_CONSTRAINT,
            ai_inbound_handling_rate: defaults::AI_INBOUND_HANDLING_RATE,
            ai_outbound_handling_rate: defaults::AI_OUTBOUND_HANDLING_RATE,
            appointment_increase: defaults::APPOINTMENT_INCREASE,
            missed_call_booking_rate: defaults::MISSED_CALL_BOOKING_RATE,
        }
    }
}

/// Error returned by [`RoiInputs::set_field`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown input field: {0}")]
pub struct UnknownField(pub String);

impl RoiInputs {
    /// All contract field names, in input-table order
    pub const FIELD_NAMES: [&'static str; 19] = [
        "monthlyAppointments",
        "avgAppointmentValue",
        "noShowRateBefore",
        "noShowRateAfter",
        "dailyInboundCalls",
        "dailyOutboundCalls",
        "inboundAnswerRate",
        "avgCallMinutes",
        "receptionistSalary",
        "managerSalary",
        "setupFee",
        "monthlySoftwareCost",
        "costPerMinute",
        "costPerBooking",
        "staffCapacityConstraint",
        "aiInboundHandlingRate",
        "aiOutboundHandlingRate",
        "appointmentIncrease",
        "missedCallBookingRate",
    ];

    /// Overwrite one parameter by its contract name
    pub fn set_field(&mut self, name: &str, value: f64) -> Result<(), UnknownField> {
        let slot = match name {
            "monthlyAppointments" => &mut self.monthly_appointments,
            "avgAppointmentValue" => &mut self.avg_appointment_value,
            "noShowRateBefore" => &mut self.no_show_rate_before,
            "noShowRateAfter" => &mut self.no_show_rate_after,
            "dailyInboundCalls" => &mut self.daily_inbound_calls,
            "dailyOutboundCalls" => &mut self.daily_outbound_calls,
            "inboundAnswerRate" => &mut self.inbound_answer_rate,
            "avgCallMinutes" => &mut self.avg_call_minutes,
            "receptionistSalary" => &mut self.receptionist_salary,
            "managerSalary" => &mut self.manager_salary,
            "setupFee" => &mut self.setup_fee,
            "monthlySoftwareCost" => &mut self.monthly_software_cost,
            "costPerMinute" => &mut self.cost_per_minute,
            "costPerBooking" => &mut self.cost_per_booking,
            "staffCapacityConstraint" => &mut self.staff_capacity_constraint,
            "aiInboundHandlingRate" => &mut self.ai_inbound_handling_rate,
            "aiOutboundHandlingRate" => &mut self.ai_outbound_handling_rate,
            "appointmentIncrease" => &mut self.appointment_increase,
            "missedCallBookingRate" => &mut self.missed_call_booking_rate,
            other => return Err(UnknownField(other.to_string())),
        };
        *slot = value;
        Ok(())
    }
}
