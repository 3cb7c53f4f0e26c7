//! The fixed 5/3/1 week templates.
//!
//! A template is four weeks of prescription rows. Only the percentages and
//! rep targets live here; weights are derived per lift by the generator.

use std::fmt;

use serde::{Serialize, Serializer};

/// Number of weeks in one training cycle.
pub const WEEKS_PER_CYCLE: usize = 4;

/// Rep target for a single set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepTarget {
    /// Perform exactly this many reps
    Exact(u32),
    /// Perform at least this many reps, as many as possible (AMRAP)
    AtLeast(u32),
}

impl RepTarget {
    /// Minimum number of reps the set asks for.
    #[must_use]
    pub const fn minimum(self) -> u32 {
        match self {
            Self::Exact(n) | Self::AtLeast(n) => n,
        }
    }

    /// Whether the set is open-ended.
    #[must_use]
    pub const fn is_amrap(self) -> bool {
        matches!(self, Self::AtLeast(_))
    }
}

impl fmt::Display for RepTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

// Exact targets are plain numbers, AMRAP targets are "n+" strings.
impl Serialize for RepTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Exact(n) => serializer.serialize_u32(*n),
            Self::AtLeast(_) => serializer.collect_str(self),
        }
    }
}

/// One prescribed set: a fraction of the training max and a rep target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prescription {
    /// Fraction of the training max, in `(0, 1]`
    pub percentage: f64,
    /// Rep target for the set
    pub reps: RepTarget,
}

impl Prescription {
    const fn new(percentage: f64, reps: RepTarget) -> Self {
        Self { percentage, reps }
    }
}

/// One week of prescriptions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekTemplate {
    /// Short label such as `week1`
    pub label: &'static str,
    /// Whether this is the reduced-load recovery week
    pub deload: bool,
    /// Rows in the order they are performed
    pub sets: &'static [Prescription],
}

/// A full cycle template: four weeks in fixed order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftSet {
    /// Weeks in the order they are performed
    pub weeks: [WeekTemplate; WEEKS_PER_CYCLE],
}

use RepTarget::{AtLeast, Exact};

const WEEK_1: &[Prescription] = &[
    Prescription::new(0.65, Exact(5)),
    Prescription::new(0.75, Exact(5)),
    Prescription::new(0.85, AtLeast(5)),
];

const WEEK_2: &[Prescription] = &[
    Prescription::new(0.70, Exact(3)),
    Prescription::new(0.80, Exact(3)),
    Prescription::new(0.90, AtLeast(3)),
];

const WEEK_3: &[Prescription] = &[
    Prescription::new(0.75, Exact(5)),
    Prescription::new(0.85, Exact(3)),
    Prescription::new(0.95, AtLeast(1)),
];

const DELOAD: &[Prescription] = &[
    Prescription::new(0.40, Exact(5)),
    Prescription::new(0.50, Exact(5)),
    Prescription::new(0.60, Exact(5)),
];

/// The standard 5/3/1 template shared by every lift.
pub const STANDARD_531: LiftSet = LiftSet {
    weeks: [
        WeekTemplate {
            label: "week1",
            deload: false,
            sets: WEEK_1,
        },
        WeekTemplate {
            label: "week2",
            deload: false,
            sets: WEEK_2,
        },
        WeekTemplate {
            label: "week3",
            deload: false,
            sets: WEEK_3,
        },
        WeekTemplate {
            label: "week4",
            deload: true,
            sets: DELOAD,
        },
    ],
};
