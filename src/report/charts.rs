//! Chart data series for the financial impact and no-show comparisons
//!
//! Only the series are produced here; drawing them is up to the consumer.

use crate::domain::roi::{round_half_up, RoiInputs, RoiResults};
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// Hex color code for a chart bar (e.g. "#4CAF50")
#[nutype(
    validate(regex = r"^#[0-9A-Fa-f]{6}$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct ColorCode(String);

impl ColorCode {
    /// Green - savings and improvements
    pub fn green() -> Self {
        Self::try_new("#4CAF50".to_string()).unwrap()
    }

    /// Blue - revenue
    pub fn blue() -> Self {
        Self::try_new("#2196F3".to_string()).unwrap()
    }

    /// Red - costs and the pre-automation baseline
    pub fn red() -> Self {
        Self::try_new("#F44336".to_string()).unwrap()
    }

    /// Purple - net benefit
    pub fn purple() -> Self {
        Self::try_new("#9C27B0".to_string()).unwrap()
    }
}

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub name: String,
    pub value: f64,
    pub fill: ColorCode,
}

impl ChartBar {
    fn new(name: &str, value: f64, fill: ColorCode) -> Self {
        Self {
            name: name.to_string(),
            value,
            fill,
        }
    }
}

/// Savings, upside, cost and net benefit side by side
///
/// The vendor cost is plotted as a negative bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactChart {
    pub bars: Vec<ChartBar>,
}

impl ImpactChart {
    pub fn from_results(results: &RoiResults) -> Self {
        Self {
            bars: vec![
                ChartBar::new("Cost Savings", results.cost_savings, ColorCode::green()),
                ChartBar::new("Revenue Upside", results.revenue_upside, ColorCode::blue()),
                ChartBar::new("AI Solution Cost", -results.annual_ai_cost, ColorCode::red()),
                ChartBar::new("Net Benefit", results.net_benefit, ColorCode::purple()),
            ],
        }
    }
}

/// No-show rate before and after automation, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoShowChart {
    pub before: ChartBar,
    pub after: ChartBar,
    /// Drop in percentage points
    pub improvement: f64,
}

impl NoShowChart {
    pub fn from_inputs(inputs: &RoiInputs) -> Self {
        Self {
            before: ChartBar::new("Before", inputs.no_show_rate_before, ColorCode::red()),
            after: ChartBar::new("After", inputs.no_show_rate_after, ColorCode::green()),
            improvement: inputs.no_show_rate_before - inputs.no_show_rate_after,
        }
    }

    /// e.g. "Decrease from 15% to 7.5% = 7.5% improvement"
    pub fn caption(&self) -> String {
        format!(
            "Decrease from {}% to {}% = {}% improvement",
            self.before.value,
            self.after.value,
            one_decimal(self.improvement)
        )
    }
}

/// One decimal place with ties rounded away from zero (`2.25` is `2.3`)
///
/// `{:.1}` alone would round exact ties to even.
pub fn one_decimal(value: f64) -> String {
    let tenths = round_half_up(value.abs() * 10.0) / 10.0;
    let signed = if value < 0.0 { -tenths } else { tenths };
    format!("{signed:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roi::compute_roi;
    use rstest::rstest;

    #[rstest]
    #[case(7.5, "7.5")]
    #[case(2.25, "2.3")]
    #[case(7.25, "7.3")]
    #[case(7.24, "7.2")]
    #[case(-2.25, "-2.3")]
    #[case(0.0, "0.0")]
    fn test_one_decimal_rounds_ties_up(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(one_decimal(value), expected);
    }

    #[test]
    fn test_caption_rounds_tie_improvement_up() {
        let inputs = RoiInputs {
            no_show_rate_before: 10.0,
            no_show_rate_after: 7.75,
            ..RoiInputs::default()
        };
        assert_eq!(
            NoShowChart::from_inputs(&inputs).caption(),
            "Decrease from 10% to 7.75% = 2.3% improvement"
        );
    }

    #[test]
    fn test_color_code_validation() {
        assert!(ColorCode::try_new("#4CAF50".to_string()).is_ok());
        assert!(ColorCode::try_new("4CAF50".to_string()).is_err());
        assert!(ColorCode::try_new("#4CAF5".to_string()).is_err());
        assert_eq!(ColorCode::purple().to_string(), "#9C27B0");
    }

    #[test]
    fn test_impact_chart_plots_cost_as_negative() {
        let results = compute_roi(&RoiInputs::default()).rounded();
        let chart = ImpactChart::from_results(&results);

        let names: Vec<_> = chart.bars.iter().map(|bar| bar.name.as_str()).collect();
        assert_eq!(
            names,
            ["Cost Savings", "Revenue Upside", "AI Solution Cost", "Net Benefit"]
        );
        assert_eq!(chart.bars[2].value, -13_449.0);
        assert_eq!(chart.bars[2].fill, ColorCode::red());
        assert_eq!(chart.bars[3].value, 107_983.0);
    }

    #[test]
    fn test_no_show_chart_caption() {
        let chart = NoShowChart::from_inputs(&RoiInputs::default());
        assert_eq!(chart.improvement, 7.5);
        assert_eq!(
            chart.caption(),
            "Decrease from 15% to 7.5% = 7.5% improvement"
        );
    }
}
