//! Domain types and business logic for voice_roi

pub mod roi;
pub mod validation;
pub mod values;

pub use roi::*;
pub use validation::{InputError, ValidatedInputs};
pub use values::{Amount, Percentage, Volume};
