//! Error types for plan generation
//!
//! All variants are caller-input errors. They are detected before any
//! computation starts, so a failed request never yields a partial program.

use thiserror::Error;

/// Errors raised while parsing or validating planner input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A one-rep max that is not a finite, strictly positive number
    #[error("invalid one-rep max for '{lift}': {value}")]
    InvalidLiftValue {
        /// Lift the value was supplied for
        lift: String,
        /// The offending input, as the caller supplied it
        value: String,
    },

    /// A cycle count that is not a positive integer
    #[error("invalid cycle count: {0} (expected a positive integer)")]
    InvalidCycleCount(String),

    /// A `name=value` lift assignment that could not be split
    #[error("invalid lift assignment '{0}': expected NAME=VALUE")]
    InvalidLiftAssignment(String),

    /// A lift name that is empty or only whitespace
    #[error("lift name cannot be empty")]
    EmptyLiftName,

    /// A program was requested with no lifts at all
    #[error("no lifts to plan: supply at least one one-rep max")]
    NoLifts,
}
