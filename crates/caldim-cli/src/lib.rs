//! CLI library components for the calendar dimension generator.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod tally;
