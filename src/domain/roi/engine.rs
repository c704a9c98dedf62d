//! The ROI calculation engine
//!
//! A single pass over the inputs in five stages: baseline revenue, call
//! volume, staff savings, revenue upside and vendor cost. Every stage is a
//! pure function so each can be checked on its own. Nothing here validates;
//! NaN and infinities flow through to the results.

use crate::domain::roi::constants::{calendar, percent, staffing};
use crate::domain::roi::inputs::RoiInputs;
use crate::domain::roi::results::{RevenueBreakdown, RoiResults, UsageCosts};
use tracing::debug;

/// Baseline business revenue, independent of automation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRevenue {
    pub monthly: f64,
    pub annual: f64,
}

/// Annual call volumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallVolume {
    pub total_inbound: f64,
    pub answered_inbound: f64,
    pub missed_inbound: f64,
    pub total_outbound: f64,
}

/// Annual labor cost displaced by automation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffSavings {
    pub inbound_receptionist: f64,
    pub outbound_receptionist: f64,
    pub outbound_manager: f64,
}

impl StaffSavings {
    pub fn total(&self) -> f64 {
        self.inbound_receptionist + self.outbound_receptionist + self.outbound_manager
    }
}

/// Annual revenue recaptured by automation, plus the booking volumes behind it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueUpside {
    pub breakdown: RevenueBreakdown,
    /// Bookings won from recovered missed calls
    pub missed_call_bookings: f64,
    /// Appointments added by faster scheduling
    pub scheduling_appointments: f64,
}

fn fraction(percentage: f64) -> f64 {
    percentage / percent::PERCENT_DIVISOR
}

fn hourly_rate(annual_salary: f64) -> f64 {
    annual_salary / (calendar::HOURS_PER_WORK_WEEK * calendar::WEEKS_PER_YEAR)
}

fn annual_calls(daily_calls: f64) -> f64 {
    daily_calls * calendar::WORKING_DAYS_PER_WEEK * calendar::WEEKS_PER_YEAR
}

fn weekly_staff_hours(daily_calls: f64, minutes_per_call: f64) -> f64 {
    (daily_calls * minutes_per_call / calendar::MINUTES_PER_HOUR) * calendar::WORKING_DAYS_PER_WEEK
}

/// Stage A
pub fn baseline_revenue(inputs: &RoiInputs) -> BaselineRevenue {
    let monthly = inputs.monthly_appointments * inputs.avg_appointment_value;
    BaselineRevenue {
        monthly,
        annual: monthly * calendar::MONTHS_PER_YEAR,
    }
}

/// Stage B
pub fn call_volume(inputs: &RoiInputs) -> CallVolume {
    let total_inbound = annual_calls(inputs.daily_inbound_calls);
    let answered_inbound = total_inbound * fraction(inputs.inbound_answer_rate);
    CallVolume {
        total_inbound,
        answered_inbound,
        missed_inbound: total_inbound - answered_inbound,
        total_outbound: annual_calls(inputs.daily_outbound_calls),
    }
}

/// Stage C
///
/// Staff minutes per call are fixed assumptions, independent of the
/// `avg_call_minutes` the vendor bills for.
pub fn staff_savings(inputs: &RoiInputs) -> StaffSavings {
    let receptionist_hourly = hourly_rate(inputs.receptionist_salary);
    let manager_hourly = hourly_rate(inputs.manager_salary);

    let inbound_hours =
        weekly_staff_hours(inputs.daily_inbound_calls, staffing::INBOUND_CALL_MINUTES);
    let automated_inbound_hours = inbound_hours * fraction(inputs.ai_inbound_handling_rate);

    let outbound_hours =
        weekly_staff_hours(inputs.daily_outbound_calls, staffing::OUTBOUND_CALL_MINUTES);
    let automated_outbound_hours = outbound_hours * fraction(inputs.ai_outbound_handling_rate);

    StaffSavings {
        inbound_receptionist: automated_inbound_hours
            * receptionist_hourly
            * calendar::WEEKS_PER_YEAR,
        outbound_receptionist: automated_outbound_hours
            * staffing::OUTBOUND_RECEPTIONIST_SHARE
            * receptionist_hourly
            * calendar::WEEKS_PER_YEAR,
        outbound_manager: automated_outbound_hours
            * staffing::OUTBOUND_MANAGER_SHARE
            * manager_hourly
            * calendar::WEEKS_PER_YEAR,
    }
}

/// Stage D
///
/// Missed-call recovery works on a monthly slice of the annual missed calls
/// and is not annualized again.
pub fn revenue_upside(inputs: &RoiInputs, calls: &CallVolume) -> RevenueUpside {
    let no_show_difference = inputs.no_show_rate_before - inputs.no_show_rate_after;
    let recaptured_appointments =
        inputs.monthly_appointments * fraction(no_show_difference) * calendar::MONTHS_PER_YEAR;
    let no_show_revenue = recaptured_appointments * inputs.avg_appointment_value;

    let recovered_calls_monthly = (calls.missed_inbound / calendar::MONTHS_PER_YEAR)
        * fraction(inputs.ai_inbound_handling_rate);
    let missed_call_bookings =
        recovered_calls_monthly * fraction(inputs.missed_call_booking_rate);
    let missed_call_revenue = missed_call_bookings * inputs.avg_appointment_value;

    let scheduling_appointments = inputs.monthly_appointments
        * fraction(inputs.appointment_increase)
        * calendar::MONTHS_PER_YEAR;
    let additional_appts_revenue = scheduling_appointments * inputs.avg_appointment_value;

    RevenueUpside {
        breakdown: RevenueBreakdown {
            missed_call_revenue,
            no_show_revenue,
            additional_appts_revenue,
        },
        missed_call_bookings,
        scheduling_appointments,
    }
}

/// Stage E
///
/// The inbound handling rate applies to every inbound call, answered or
/// missed. Recaptured no-shows were already booked and carry no booking fee.
pub fn vendor_costs(inputs: &RoiInputs, calls: &CallVolume, upside: &RevenueUpside) -> UsageCosts {
    let base_subscription_cost =
        inputs.setup_fee + inputs.monthly_software_cost * calendar::MONTHS_PER_YEAR;

    let automated_inbound_calls =
        (calls.answered_inbound + calls.missed_inbound) * fraction(inputs.ai_inbound_handling_rate);
    let automated_outbound_calls =
        calls.total_outbound * fraction(inputs.ai_outbound_handling_rate);
    let total_minutes =
        (automated_inbound_calls + automated_outbound_calls) * inputs.avg_call_minutes;
    let minutes_cost = total_minutes * inputs.cost_per_minute;

    let total_new_bookings = upside.missed_call_bookings + upside.scheduling_appointments;
    let booking_fees = total_new_bookings * inputs.cost_per_booking;

    UsageCosts {
        total_minutes,
        minutes_cost,
        total_new_bookings,
        booking_fees,
        base_subscription_cost,
    }
}

/// Compute the full, unrounded result set for one input set
pub fn compute_roi(inputs: &RoiInputs) -> RoiResults {
    let baseline = baseline_revenue(inputs);
    let calls = call_volume(inputs);
    let savings = staff_savings(inputs);
    let upside = revenue_upside(inputs, &calls);
    let usage = vendor_costs(inputs, &calls, &upside);

    let cost_savings = savings.total();
    let revenue_upside = upside.breakdown.total();
    let annual_ai_cost = usage.total();
    let net_benefit = cost_savings + revenue_upside - annual_ai_cost;

    debug!(cost_savings, revenue_upside, annual_ai_cost, net_benefit, "Computed ROI");

    RoiResults {
        cost_savings,
        revenue_upside,
        net_benefit,
        annual_ai_cost,
        monthly_revenue: baseline.monthly,
        annual_revenue: baseline.annual,
        breakdown: upside.breakdown,
        usage,
    }
}
