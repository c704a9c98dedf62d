//! Constants for ROI calculations and the default clinic scenario

/// Calendar and working-time constants
pub mod calendar {
    /// Working days in the modeled week
    pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;

    /// Weeks in a year
    pub const WEEKS_PER_YEAR: f64 = 52.0;

    /// Months in a year
    pub const MONTHS_PER_YEAR: f64 = 12.0;

    /// Paid hours in a full-time work week
    pub const HOURS_PER_WORK_WEEK: f64 = 40.0;

    /// Minutes in an hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Staff time assumptions for calls handled by humans
pub mod staffing {
    /// Staff minutes spent on one inbound call
    pub const INBOUND_CALL_MINUTES: f64 = 5.0;

    /// Staff minutes spent on one outbound call
    pub const OUTBOUND_CALL_MINUTES: f64 = 4.0;

    /// Share of outbound call time valued at the receptionist rate
    pub const OUTBOUND_RECEPTIONIST_SHARE: f64 = 0.7;

    /// Share of outbound call time valued at the manager rate
    pub const OUTBOUND_MANAGER_SHARE: f64 = 0.3;
}

/// Percentage conversion
pub mod percent {
    /// Divisor turning a 0-100 percentage into a fraction
    pub const PERCENT_DIVISOR: f64 = 100.0;
}

/// Default clinic scenario
pub mod defaults {
    pub const MONTHLY_APPOINTMENTS: f64 = 500.0;
    pub const AVG_APPOINTMENT_VALUE: f64 = 100.0;
    pub const NO_SHOW_RATE_BEFORE: f64 = 15.0;
    pub const NO_SHOW_RATE_AFTER: f64 = 7.5;

    pub const DAILY_INBOUND_CALLS: f64 = 22.9;
    pub const DAILY_OUTBOUND_CALLS: f64 = 16.0;
    pub const INBOUND_ANSWER_RATE: f64 = 70.0;
    pub const AVG_CALL_MINUTES: f64 = 3.5;

    pub const RECEPTIONIST_SALARY: f64 = 33_000.0;
    pub const MANAGER_SALARY: f64 = 53_000.0;

    pub const SETUP_FEE: f64 = 2_000.0;
    pub const MONTHLY_SOFTWARE_COST: f64 = 459.0;
    pub const COST_PER_MINUTE: f64 = 0.14;
    pub const COST_PER_BOOKING: f64 = 2.5;

    pub const STAFF_CAPACITY_CONSTRAINT: f64 = 30.0;
    pub const AI_INBOUND_HANDLING_RATE: f64 = 85.0;
    pub const AI_OUTBOUND_HANDLING_RATE: f64 = 90.0;
    pub const APPOINTMENT_INCREASE: f64 = 10.0;
    pub const MISSED_CALL_BOOKING_RATE: f64 = 40.0;
}
