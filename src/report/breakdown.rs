//! Itemized revenue and cost lists

use crate::domain::roi::RoiResults;
use crate::report::currency::group_digits;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

impl LineItem {
    fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// A titled list of line items closed by a total line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemizedList {
    pub title: String,
    pub items: Vec<LineItem>,
    pub total: LineItem,
}

impl ItemizedList {
    /// Where the revenue upside comes from
    pub fn revenue_breakdown(results: &RoiResults) -> Self {
        Self {
            title: "Revenue Breakdown".to_string(),
            items: vec![
                LineItem::new("No-Show Reduction", results.breakdown.no_show_revenue),
                LineItem::new("Missed Call Recovery", results.breakdown.missed_call_revenue),
                LineItem::new(
                    "Additional Appointments",
                    results.breakdown.additional_appts_revenue,
                ),
            ],
            total: LineItem::new("Total Revenue Upside", results.revenue_upside),
        }
    }

    /// What the vendor charges over a year
    pub fn usage_costs(results: &RoiResults) -> Self {
        let usage = &results.usage;
        Self {
            title: "Usage-Based Costs".to_string(),
            items: vec![
                LineItem::new("Base Subscription", usage.base_subscription_cost),
                LineItem::new(
                    format!("Call Minutes ({})", group_digits(usage.total_minutes)),
                    usage.minutes_cost,
                ),
                LineItem::new(
                    format!(
                        "Booking Fees ({} bookings)",
                        group_digits(usage.total_new_bookings)
                    ),
                    usage.booking_fees,
                ),
            ],
            total: LineItem::new("Total Annual Cost", results.annual_ai_cost),
        }
    }
}
