//! Application services orchestrating input resolution, validation,
//! computation and report output.

pub mod app;
pub mod log_messages;
pub mod logging;

pub use app::Application;
