//! Whole-dollar currency display
//!
//! Figures are rounded, grouped in threes with `,` and prefixed with the
//! currency symbol. The sign follows the symbol (`$-1,234`), matching how
//! the calculator has always shown a negative net benefit.

use crate::domain::roi::round_half_up;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Formats amounts for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `$12,345` style rendering of a dollar figure
    pub fn format(&self, value: f64) -> String {
        format!("{}{}", self.symbol, group_digits(value))
    }

    /// Amount with cents, for per-unit prices such as `$0.14`
    pub fn format_price(&self, value: f64) -> String {
        format!("{}{}", self.symbol, value)
    }
}

/// Round to a whole number and group its digits in threes
///
/// Non-finite values render as `NaN`, `∞` or `-∞`.
pub fn group_digits(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = round_half_up(value);
    if rounded == 0.0 {
        return "0".to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
