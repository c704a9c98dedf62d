//! Result consumer: turns engine output into a displayable report
//!
//! The report carries whole-dollar figures, the two chart series, the two
//! itemized lists and the calculation notes. Renderers in [`render`] turn
//! it into text or JSON.

pub mod breakdown;
pub mod charts;
pub mod currency;
pub mod notes;
pub mod render;

pub use breakdown::{ItemizedList, LineItem};
pub use charts::{one_decimal, ChartBar, ColorCode, ImpactChart, NoShowChart};
pub use currency::{group_digits, CurrencyFormatter, DEFAULT_CURRENCY_SYMBOL};
pub use notes::{calculation_notes, CalculationNote, DISCLAIMER};
pub use render::{render, OutputFormat};

use crate::domain::roi::{RoiInputs, RoiResults};
use serde::Serialize;

/// One headline figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub amount: f64,
}

fn card(title: &str, amount: f64) -> SummaryCard {
    SummaryCard {
        title: title.to_string(),
        amount,
    }
}

/// Everything a consumer needs to present one computation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    pub inputs: RoiInputs,
    /// Whole-dollar figures
    pub results: RoiResults,
    pub summary: Vec<SummaryCard>,
    pub impact_chart: ImpactChart,
    pub no_show_chart: NoShowChart,
    pub revenue_breakdown: ItemizedList,
    pub usage_costs: ItemizedList,
    pub notes: Vec<CalculationNote>,
    pub disclaimer: String,
}

impl RoiReport {
    /// Build from the inputs and their unrounded results
    pub fn build(inputs: &RoiInputs, results: &RoiResults, currency: &CurrencyFormatter) -> Self {
        let rounded = results.rounded();
        Self {
            inputs: *inputs,
            results: rounded,
            summary: vec![
                card("Monthly Revenue", rounded.monthly_revenue),
                card("Annual Revenue", rounded.annual_revenue),
                card("Annual Cost Savings", rounded.cost_savings),
                card("Annual Revenue Upside", rounded.revenue_upside),
                card("Net Annual Benefit", rounded.net_benefit),
                card("Annual AI Solution Cost", rounded.annual_ai_cost),
            ],
            impact_chart: ImpactChart::from_results(&rounded),
            no_show_chart: NoShowChart::from_inputs(inputs),
            revenue_breakdown: ItemizedList::revenue_breakdown(&rounded),
            usage_costs: ItemizedList::usage_costs(&rounded),
            notes: calculation_notes(inputs, currency),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
