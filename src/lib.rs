//! Wendler - 5/3/1 cycle planner
//!
//! Turns one-rep maxes into training maxes and four weeks of
//! percentage-based sets per lift, repeated for the requested number of
//! cycles.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod program;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{render_program, ProgramDisplay};
pub use config::PlannerConfig;
pub use error::PlanError;
pub use log::{GenerationRecord, JsonlLogger};
pub use program::{
    compute_training_max, compute_weight, generate_lift_cycle, generate_program,
    parse_cycle_count, parse_lift_value, LiftInputs, Program,
};
