//! Engine result set
//!
//! Values are kept unrounded. [`RoiResults::rounded`] produces the
//! whole-dollar view used for display.

use serde::{Deserialize, Serialize};

/// The three additive components of the revenue upside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueBreakdown {
    pub missed_call_revenue: f64,
    pub no_show_revenue: f64,
    pub additional_appts_revenue: f64,
}

impl RevenueBreakdown {
    pub fn total(&self) -> f64 {
        self.no_show_revenue + self.missed_call_revenue + self.additional_appts_revenue
    }
}

/// The components of the annual vendor cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCosts {
    pub total_minutes: f64,
    pub minutes_cost: f64,
    pub total_new_bookings: f64,
    pub booking_fees: f64,
    pub base_subscription_cost: f64,
}

impl UsageCosts {
    pub fn total(&self) -> f64 {
        self.base_subscription_cost + self.minutes_cost + self.booking_fees
    }
}

/// Annual ROI figures for one input set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResults {
    pub cost_savings: f64,
    pub revenue_upside: f64,
    pub net_benefit: f64,
    #[serde(rename = "annualAICost")]
    pub annual_ai_cost: f64,
    pub monthly_revenue: f64,
    pub annual_revenue: f64,
    pub breakdown: RevenueBreakdown,
    pub usage: UsageCosts,
}

impl RoiResults {
    /// Whole-dollar copy of every figure
    ///
    /// Each field is rounded on its own; the rounded figures need not add up.
    pub fn rounded(&self) -> Self {
        Self {
            cost_savings: round_half_up(self.cost_savings),
            revenue_upside: round_half_up(self.revenue_upside),
            net_benefit: round_half_up(self.net_benefit),
            annual_ai_cost: round_half_up(self.annual_ai_cost),
            monthly_revenue: round_half_up(self.monthly_revenue),
            annual_revenue: round_half_up(self.annual_revenue),
            breakdown: RevenueBreakdown {
                missed_call_revenue: round_half_up(self.breakdown.missed_call_revenue),
                no_show_revenue: round_half_up(self.breakdown.no_show_revenue),
                additional_appts_revenue: round_half_up(self.breakdown.additional_appts_revenue),
            },
            usage: UsageCosts {
                total_minutes: round_half_up(self.usage.total_minutes),
                minutes_cost: round_half_up(self.usage.minutes_cost),
                total_new_bookings: round_half_up(self.usage.total_new_bookings),
                booking_fees: round_half_up(self.usage.booking_fees),
                base_subscription_cost: round_half_up(self.usage.base_subscription_cost),
            },
        }
    }

    /// True when every figure is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.cost_savings,
            self.revenue_upside,
            self.net_benefit,
            self.annual_ai_cost,
            self.monthly_revenue,
            self.annual_revenue,
            self.breakdown.missed_call_revenue,
            self.breakdown.no_show_revenue,
            self.breakdown.additional_appts_revenue,
            self.usage.total_minutes,
            self.usage.minutes_cost,
            self.usage.total_new_bookings,
            self.usage.booking_fees,
            self.usage.base_subscription_cost,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Round to the nearest integer, halves toward positive infinity
///
/// `f64::round` sends halves away from zero; display figures instead
/// round -2.5 to -2. Non-finite values pass through untouched.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
