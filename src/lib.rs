//! voice_roi - ROI of an automated voice agent for clinic call handling
//!
//! The core is a pure engine ([`domain::roi::compute_roi`]) mapping a flat
//! set of business, staffing and vendor-pricing parameters to annual cost
//! savings, revenue upside, vendor cost and net benefit. Around it sit an
//! input provider (settings, JSON input, CLI overrides, boundary validation)
//! and a result consumer (reports rendered as tables or JSON).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod report;

pub use application::Application;
pub use domain::roi::{compute_roi, RoiInputs, RoiResults};
pub use error::{Error, Result};
