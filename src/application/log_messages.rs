//! Log message constants for the application layer

pub mod application {
    pub const LOADED_SETTINGS: &str = "Loaded settings";
    pub const READING_INPUT_FILE: &str = "Reading engine inputs from file";
    pub const APPLIED_OVERRIDE: &str = "Applied input override";
    pub const VALIDATED_INPUTS: &str = "Inputs passed validation";
    pub const REJECTED_INPUTS: &str = "Inputs rejected";
    pub const WROTE_REPORT: &str = "Wrote report";
}
