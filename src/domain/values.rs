//! Validated value types for scenario parameters
//!
//! Used at the input boundary so that only well-formed numbers reach the
//! engine from the command line and configuration files.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Percentage expressed 0-100
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Percentage(f64);

/// Non-negative dollar amount
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Amount(f64);

/// Non-negative count or duration (appointments, calls, minutes)
///
/// Fractional values are allowed: daily call counts are averages.
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Volume(f64);
