//! Input boundary validation
//!
//! Converts a raw [`RoiInputs`] into [`ValidatedInputs`], rejecting the first
//! field (in input-table order) that is non-finite, negative, or a
//! percentage outside 0-100.

use crate::domain::roi::RoiInputs;
use crate::domain::values::{Amount, Percentage, Volume};
use std::fmt::Display;
use thiserror::Error;
use tracing::warn;

/// A parameter rejected at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} = {value} is out of range: {reason}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        reason: String,
    },
}

impl InputError {
    /// Contract name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }
}

fn check<T, E: Display>(
    field: &'static str,
    value: f64,
    ctor: impl FnOnce(f64) -> Result<T, E>,
) -> Result<T, InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    ctor(value).map_err(|e| InputError::OutOfRange {
        field,
        value,
        reason: e.to_string(),
    })
}

/// Engine inputs that passed boundary validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedInputs {
    pub monthly_appointments: Volume,
    pub avg_appointment_value: Amount,
    pub no_show_rate_before: Percentage,
    pub no_show_rate_after: Percentage,
    pub daily_inbound_calls: Volume,
    pub daily_outbound_calls: Volume,
    pub inbound_answer_rate: Percentage,
    pub avg_call_minutes: Volume,
    pub receptionist_salary: Amount,
    pub manager_salary: Amount,
    pub setup_fee: Amount,
    pub monthly_software_cost: Amount,
    pub cost_per_minute: Amount,
    pub cost_per_booking: Amount,
    pub staff_capacity_constraint: Percentage,
    pub ai_inbound_handling_rate: Percentage,
    pub ai_outbound_handling_rate: Percentage,
    pub appointment_increase: Percentage,
    pub missed_call_booking_rate: Percentage,
}

impl TryFrom<RoiInputs> for ValidatedInputs {
    type Error = InputError;

    fn try_from(raw: RoiInputs) -> Result<Self, Self::Error> {
        let validated = Self {
            monthly_appointments: check(
                "monthlyAppointments",
                raw.monthly_appointments,
                Volume::try_new,
            )?,
            avg_appointment_value: check(
                "avgAppointmentValue",
                raw.avg_appointment_value,
                Amount::try_new,
            )?,
            no_show_rate_before: check(
                "noShowRateBefore",
                raw.no_show_rate_before,
                Percentage::try_new,
            )?,
            no_show_rate_after: check(
                "noShowRateAfter",
                raw.no_show_rate_after,
                Percentage::try_new,
            )?,
            daily_inbound_calls: check(
                "dailyInboundCalls",
                raw.daily_inbound_calls,
                Volume::try_new,
            )?,
            daily_outbound_calls: check(
                "dailyOutboundCalls",
                raw.daily_outbound_calls,
                Volume::try_new,
            )?,
            inbound_answer_rate: check(
                "inboundAnswerRate",
                raw.inbound_answer_rate,
                Percentage::try_new,
            )?,
            avg_call_minutes: check("avgCallMinutes", raw.avg_call_minutes, Volume::try_new)?,
            receptionist_salary: check(
                "receptionistSalary",
                raw.receptionist_salary,
                Amount::try_new,
            )?,
            manager_salary: check("managerSalary", raw.manager_salary, Amount::try_new)?,
            setup_fee: check("setupFee", raw.setup_fee, Amount::try_new)?,
            monthly_software_cost: check(
                "monthlySoftwareCost",
                raw.monthly_software_cost,
                Amount::try_new,
            )?,
            cost_per_minute: check("costPerMinute", raw.cost_per_minute, Amount::try_new)?,
            cost_per_booking: check("costPerBooking", raw.cost_per_booking, Amount::try_new)?,
            staff_capacity_constraint: check(
                "staffCapacityConstraint",
                raw.staff_capacity_constraint,
                Percentage::try_new,
            )?,
            ai_inbound_handling_rate: check(
                "aiInboundHandlingRate",
                raw.ai_inbound_handling_rate,
                Percentage::try_new,
            )?,
            ai_outbound_handling_rate: check(
                "aiOutboundHandlingRate",
                raw.ai_outbound_handling_rate,
                Percentage::try_new,
            )?,
            appointment_increase: check(
                "appointmentIncrease",
                raw.appointment_increase,
                Percentage::try_new,
            )?,
            missed_call_booking_rate: check(
                "missedCallBookingRate",
                raw.missed_call_booking_rate,
                Percentage::try_new,
            )?,
        };

        if validated.no_show_rate_after > validated.no_show_rate_before {
            warn!(
                before = raw.no_show_rate_before,
                after = raw.no_show_rate_after,
                "No-show rate after automation exceeds the rate before; no-show revenue will be negative"
            );
        }

        Ok(validated)
    }
}

impl ValidatedInputs {
    /// Plain engine inputs carrying the validated values
    pub fn inputs(&self) -> RoiInputs {
        RoiInputs {
            monthly_appointments: self.monthly_appointments.into_inner(),
            avg_appointment_value: self.avg_appointment_value.into_inner(),
            no_show_rate_before: self.no_show_rate_before.into_inner(),
            no_show_rate_after: self.no_show_rate_after.into_inner(),
            daily_inbound_calls: self.daily_inbound_calls.into_inner(),
            daily_outbound_calls: self.daily_outbound_calls.into_inner(),
            inbound_answer_rate: self.inbound_answer_rate.into_inner(),
            avg_call_minutes: self.avg_call_minutes.into_inner(),
            receptionist_salary: self.receptionist_salary.into_inner(),
            manager_salary: self.manager_salary.into_inner(),
            setup_fee: self.setup_fee.into_inner(),
            monthly_software_cost: self.monthly_software_cost.into_inner(),
            cost_per_minute: self.cost_per_minute.into_inner(),
            cost_per_booking: self.cost_per_booking.into_inner(),
            staff_capacity_constraint: self.staff_capacity_constraint.into_inner(),
            ai_inbound_handling_rate: self.ai_inbound_handling_rate.into_inner(),
            ai_outbound_handling_rate: self.ai_outbound_handling_rate.into_inner(),
            appointment_increase: self.appointment_increase.into_inner(),
            missed_call_booking_rate: self.missed_call_booking_rate.into_inner(),
        }
    }
}
