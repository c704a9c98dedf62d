//! Property-based tests for the ROI engine
//!
//! Generators live in `generators`; the invariants checked against them in
//! `roi_invariants`.

mod generators;
mod roi_invariants;
