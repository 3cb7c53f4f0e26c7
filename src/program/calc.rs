//! Training-max and working-weight arithmetic.
//!
//! Both functions are total: zero and negative inputs flow through
//! the arithmetic without panicking. Input validation belongs to
//! [`LiftInputs`](crate::program::inputs::LiftInputs).

/// Fraction of the one-rep max used as the training max.
pub const TRAINING_MAX_RATIO: f64 = 0.9;

/// Working weights are rounded to the nearest multiple of this.
pub const PLATE_INCREMENT: i64 = 5;

/// Round to the nearest integer, with exact halves going toward positive
/// infinity (`283.5 -> 284`, `-2.5 -> -2`).
///
/// Non-finite input yields `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let floor = value.floor();
    // value - floor is exact for every float with a fractional part
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    rounded as i64
}

/// Training max for a one-rep max: `round(one_rep_max * 0.9)`.
#[must_use]
pub fn compute_training_max(one_rep_max: f64) -> i64 {
    round_half_up(one_rep_max * TRAINING_MAX_RATIO)
}

/// Working weight for a set: the training max scaled by `percentage`,
/// rounded to the nearest multiple of [`PLATE_INCREMENT`].
///
/// No lower bound is applied, so a small training max may round to `0`.
/// Results beyond the `i64` range saturate.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_weight(training_max: i64, percentage: f64) -> i64 {
    let increment = PLATE_INCREMENT as f64;
    round_half_up(training_max as f64 * percentage / increment).saturating_mul(PLATE_INCREMENT)
}
