//! Voice-agent ROI model
//!
//! Maps a clinic's business, staffing and vendor-pricing parameters to the
//! annual savings, revenue upside, vendor cost and net benefit of handing
//! call handling to an automated voice agent.

pub mod constants;
pub mod engine;
pub mod inputs;
pub mod results;

pub use engine::{
    baseline_revenue, call_volume, compute_roi, revenue_upside, staff_savings, vendor_costs,
    BaselineRevenue, CallVolume, RevenueUpside, StaffSavings,
};
pub use inputs::{RoiInputs, UnknownField};
pub use results::{round_half_up, RevenueBreakdown, RoiResults, UsageCosts};
