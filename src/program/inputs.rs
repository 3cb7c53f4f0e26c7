//! Lift inputs and the parse steps that produce them.
//!
//! Raw form values arrive as strings. Each one is parsed into a checked
//! number before it reaches the generator, so malformed text is reported
//! instead of flowing through the arithmetic.

use crate::error::PlanError;

/// Initial form state: the four main lifts and their one-rep maxes.
pub const DEFAULT_LIFTS: [(&str, f64); 4] = [
    ("squat", 315.0),
    ("bench", 225.0),
    ("deadlift", 405.0),
    ("press", 135.0),
];

/// Largest accepted one-rep max. Keeps every derived weight an exact integer.
pub const MAX_ONE_REP_MAX: f64 = 1_000_000.0;

/// Cycle count used when the caller does not ask for one.
pub const DEFAULT_CYCLE_COUNT: u32 = 1;

/// Ordered mapping of lift name to one-rep max.
///
/// Iteration follows insertion order, which is also the display order of
/// a generated program. Every stored value is finite, strictly positive and
/// at most [`MAX_ONE_REP_MAX`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiftInputs {
    lifts: Vec<(String, f64)>,
}

impl LiftInputs {
    /// Create an empty set of inputs.
    #[must_use]
    pub const fn new() -> Self {
        Self { lifts: Vec::new() }
    }

    /// The form's initial lifts.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            lifts: DEFAULT_LIFTS
                .iter()
                .map(|(name, value)| ((*name).to_string(), *value))
                .collect(),
        }
    }

    /// Set the one-rep max for `name`.
    ///
    /// An existing lift keeps its position and takes the new value; a new
    /// lift is appended.
    pub fn insert(&mut self, name: &str, one_rep_max: f64) -> Result<(), PlanError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlanError::EmptyLiftName);
        }
        validate_one_rep_max(name, one_rep_max)?;

        if let Some(slot) = self.lifts.iter_mut().find(|(n, _)| n == name) {
            slot.1 = one_rep_max;
        } else {
            self.lifts.push((name.to_string(), one_rep_max));
        }
        Ok(())
    }

    /// Parse a `name=value` assignment and apply it.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), PlanError> {
        let (name, raw) = split_assignment(assignment)?;
        let value = parse_lift_value(name, raw)?;
        self.insert(name, value)
    }

    /// One-rep max for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.lifts.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }

    /// Iterate `(name, one_rep_max)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.lifts.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Lift names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lifts.iter().map(|(n, _)| n.as_str())
    }

    /// Number of lifts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    /// Whether no lifts have been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }
}

fn validate_one_rep_max(lift: &str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() && value > 0.0 && value <= MAX_ONE_REP_MAX {
        Ok(())
    } else {
        Err(PlanError::InvalidLiftValue {
            lift: lift.to_string(),
            value: value.to_string(),
        })
    }
}

/// Parse a one-rep max entered as text.
///
/// Accepts any finite decimal number in `(0, MAX_ONE_REP_MAX]`; surrounding
/// whitespace is ignored.
pub fn parse_lift_value(lift: &str, raw: &str) -> Result<f64, PlanError> {
    let invalid = || PlanError::InvalidLiftValue {
        lift: lift.to_string(),
        value: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    validate_one_rep_max(lift, value).map_err(|_| invalid())?;
    Ok(value)
}

/// Parse a cycle count entered as text. Must be a positive integer.
pub fn parse_cycle_count(raw: &str) -> Result<u32, PlanError> {
    match raw.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(PlanError::InvalidCycleCount(raw.to_string())),
    }
}

fn split_assignment(assignment: &str) -> Result<(&str, &str), PlanError> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| PlanError::InvalidLiftAssignment(assignment.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(PlanError::EmptyLiftName);
    }
    Ok((name, value))
}
