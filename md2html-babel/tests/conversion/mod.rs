//! Conversion tests
//!
//! Whole-document checks against fixtures plus property tests for the block invariants.

mod document;
mod properties;
