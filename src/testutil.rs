//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::program::LiftInputs;

/// Build `LiftInputs` from `(name, one_rep_max)` pairs, in the given order.
///
/// Panics on invalid values; test inputs are expected to be well formed.
#[must_use]
pub fn make_test_inputs(lifts: &[(&str, f64)]) -> LiftInputs {
    let mut inputs = LiftInputs::new();
    for (name, one_rep_max) in lifts {
        inputs.insert(name, *one_rep_max).unwrap();
    }
    inputs
}
