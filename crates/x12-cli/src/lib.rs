//! CLI library components for the X12 validator.

pub mod logging;
pub mod run;
