//! Cycle generator
//!
//! Turns lift inputs into a multi-cycle program. Generation is a pure
//! function of its arguments apart from the `generated_at` timestamp.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::PlanError;
use crate::program::calc::{compute_training_max, compute_weight};
use crate::program::inputs::LiftInputs;
use crate::program::template::{LiftSet, RepTarget, WeekTemplate, STANDARD_531};

/// One set to perform: template percentage and reps plus the derived weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrescriptionRow {
    /// Fraction of the training max
    pub percentage: f64,
    /// Rep target copied from the template
    pub reps: RepTarget,
    /// Working weight, a multiple of the plate increment
    pub weight: i64,
}

/// All sets for one week of one lift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekPlan {
    /// Template label, e.g. `week1`
    pub week_label: String,
    /// Whether this is the deload week
    pub deload: bool,
    /// Sets in the order they are performed
    pub sets: Vec<PrescriptionRow>,
}

/// One lift's training max and its four weeks of sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiftCyclePlan {
    /// `round(one_rep_max * 0.9)`
    pub training_max: i64,
    /// Weeks in template order
    pub weeks: Vec<WeekPlan>,
}

/// Per-lift plans of a cycle, in input order.
///
/// Serializes as a JSON object keyed by lift name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleContent {
    lifts: Vec<(String, LiftCyclePlan)>,
}

impl CycleContent {
    /// Plan for `lift`, if it was part of the inputs.
    #[must_use]
    pub fn get(&self, lift: &str) -> Option<&LiftCyclePlan> {
        self.lifts.iter().find(|(n, _)| n == lift).map(|(_, p)| p)
    }

    /// Iterate `(lift, plan)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LiftCyclePlan)> {
        self.lifts.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Lift names in input order.
    pub fn lift_names(&self) -> impl Iterator<Item = &str> {
        self.lifts.iter().map(|(n, _)| n.as_str())
    }

    /// Number of lifts in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lifts.len()
    }

    /// Whether the cycle has no lifts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lifts.is_empty()
    }
}

impl Serialize for CycleContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.lifts.len()))?;
        for (name, plan) in &self.lifts {
            map.serialize_entry(name, plan)?;
        }
        map.end()
    }
}

/// One numbered cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cycle {
    /// 1-based position in the program
    pub cycle_number: u32,
    /// Plan for every input lift
    pub content: CycleContent,
}

/// A generated program of one or more cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// When the program was generated
    pub generated_at: DateTime<Utc>,
    /// Cycles numbered `1..=n`
    pub cycles: Vec<Cycle>,
}

impl Program {
    /// Cycle with the given 1-based number.
    #[must_use]
    pub fn cycle(&self, cycle_number: u32) -> Option<&Cycle> {
        self.cycles.iter().find(|c| c.cycle_number == cycle_number)
    }
}

fn generate_week(week: &WeekTemplate, training_max: i64) -> WeekPlan {
    WeekPlan {
        week_label: week.label.to_string(),
        deload: week.deload,
        sets: week
            .sets
            .iter()
            .map(|row| PrescriptionRow {
                percentage: row.percentage,
                reps: row.reps,
                weight: compute_weight(training_max, row.percentage),
            })
            .collect(),
    }
}

/// Build one lift's cycle from an arbitrary template.
///
/// The training max is computed once; each row keeps its percentage and
/// rep target and gains a weight. Week and row counts mirror the template.
#[must_use]
pub fn generate_lift_cycle_from(template: &LiftSet, one_rep_max: f64) -> LiftCyclePlan {
    let training_max = compute_training_max(one_rep_max);
    LiftCyclePlan {
        training_max,
        weeks: template
            .weeks
            .iter()
            .map(|week| generate_week(week, training_max))
            .collect(),
    }
}

/// Build one lift's cycle from the standard 5/3/1 template.
#[must_use]
pub fn generate_lift_cycle(one_rep_max: f64) -> LiftCyclePlan {
    generate_lift_cycle_from(&STANDARD_531, one_rep_max)
}

fn generate_cycle(inputs: &LiftInputs, cycle_number: u32) -> Cycle {
    Cycle {
        cycle_number,
        content: CycleContent {
            lifts: inputs
                .iter()
                .map(|(name, one_rep_max)| (name.to_string(), generate_lift_cycle(one_rep_max)))
                .collect(),
        },
    }
}

/// Generate a program stamped with an explicit time.
///
/// Every cycle carries the same training maxes; there is no progression
/// between cycles.
pub fn generate_program_at(
    inputs: &LiftInputs,
    cycle_count: u32,
    generated_at: DateTime<Utc>,
) -> Result<Program, PlanError> {
    if cycle_count == 0 {
        return Err(PlanError::InvalidCycleCount(cycle_count.to_string()));
    }
    if inputs.is_empty() {
        return Err(PlanError::NoLifts);
    }

    Ok(Program {
        generated_at,
        cycles: (1..=cycle_count)
            .map(|n| generate_cycle(inputs, n))
            .collect(),
    })
}

/// Generate a program stamped with the current time.
pub fn generate_program(inputs: &LiftInputs, cycle_count: u32) -> Result<Program, PlanError> {
    generate_program_at(inputs, cycle_count, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::template::{Prescription, WEEKS_PER_CYCLE};
    use crate::testutil::make_test_inputs;
    use chrono::TimeZone;

    fn squat_only() -> LiftInputs {
        make_test_inputs(&[("squat", 315.0)])
    }

    fn weights(week: &WeekPlan) -> Vec<i64> {
        week.sets.iter().map(|s| s.weight).collect()
    }

    #[test]
    fn test_squat_cycle_weights() {
        let plan = generate_lift_cycle(315.0);
        assert_eq!(plan.training_max, 284);
        assert_eq!(weights(&plan.weeks[0]), vec![185, 215, 240]);
        assert_eq!(weights(&plan.weeks[1]), vec![200, 225, 255]);
        assert_eq!(weights(&plan.weeks[2]), vec![215, 240, 270]);
        assert_eq!(weights(&plan.weeks[3]), vec![115, 140, 170]);
    }

    #[test]
    fn test_week1_top_set_is_amrap() {
        let plan = generate_lift_cycle(315.0);
        let top = &plan.weeks[0].sets[2];
        assert_eq!(top.reps, RepTarget::AtLeast(5));
        assert!((top.percentage - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bench_week2_top_set() {
        let plan = generate_lift_cycle(225.0);
        assert_eq!(plan.training_max, 203);
        let top = &plan.weeks[1].sets[2];
        assert_eq!(top.reps, RepTarget::AtLeast(3));
        assert_eq!(top.weight, 185);
    }

    #[test]
    fn test_zero_one_rep_max_gives_zero_weights() {
        let plan = generate_lift_cycle(0.0);
        assert_eq!(plan.training_max, 0);
        assert!(plan.weeks.iter().flat_map(|w| &w.sets).all(|s| s.weight == 0));
    }

    #[test]
    fn test_week_labels_and_deload_in_order() {
        let plan = generate_lift_cycle(405.0);
        let labels: Vec<&str> = plan.weeks.iter().map(|w| w.week_label.as_str()).collect();
        assert_eq!(labels, vec!["week1", "week2", "week3", "week4"]);
        assert!(plan.weeks[3].deload);
        assert!(!plan.weeks[0].deload);
    }

    #[test]
    fn test_template_with_more_rows_per_week() {
        const FIVES: &[Prescription] = &[
            Prescription {
                percentage: 0.65,
                reps: RepTarget::Exact(5),
            },
            Prescription {
                percentage: 0.75,
                reps: RepTarget::Exact(5),
            },
            Prescription {
                percentage: 0.85,
                reps: RepTarget::Exact(5),
            },
            Prescription {
                percentage: 0.65,
                reps: RepTarget::Exact(5),
            },
            Prescription {
                percentage: 0.65,
                reps: RepTarget::Exact(5),
            },
        ];
        let mut template = STANDARD_531;
        template.weeks[0].sets = FIVES;

        let plan = generate_lift_cycle_from(&template, 315.0);
        assert_eq!(plan.weeks.len(), WEEKS_PER_CYCLE);
        assert_eq!(weights(&plan.weeks[0]), vec![185, 215, 240, 185, 185]);
        assert_eq!(plan.weeks[1].sets.len(), 3);
    }

    #[test]
    fn test_program_cycles_numbered_densely() {
        let program = generate_program(&LiftInputs::defaults(), 3).unwrap();
        let numbers: Vec<u32> = program.cycles.iter().map(|c| c.cycle_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_program_has_flat_training_max_across_cycles() {
        let program = generate_program(&squat_only(), 4).unwrap();
        for cycle in &program.cycles {
            assert_eq!(cycle.content.get("squat").unwrap().training_max, 284);
        }
        assert_eq!(program.cycles[0].content, program.cycles[3].content);
    }

    #[test]
    fn test_program_preserves_input_order() {
        let program = generate_program(&LiftInputs::defaults(), 1).unwrap();
        let names: Vec<&str> = program.cycles[0].content.lift_names().collect();
        assert_eq!(names, vec!["squat", "bench", "deadlift", "press"]);
    }

    #[test]
    fn test_program_rejects_zero_cycles() {
        assert_eq!(
            generate_program(&squat_only(), 0),
            Err(PlanError::InvalidCycleCount("0".to_string()))
        );
    }

    #[test]
    fn test_program_rejects_empty_inputs() {
        assert_eq!(
            generate_program(&LiftInputs::new(), 2),
            Err(PlanError::NoLifts)
        );
    }

    #[test]
    fn test_program_uses_given_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let program = generate_program_at(&squat_only(), 1, at).unwrap();
        assert_eq!(program.generated_at, at);
    }

    #[test]
    fn test_program_cycle_lookup() {
        let program = generate_program(&squat_only(), 2).unwrap();
        assert_eq!(program.cycle(2).unwrap().cycle_number, 2);
        assert!(program.cycle(3).is_none());
        assert!(program.cycle(0).is_none());
    }

    #[test]
    fn test_program_serializes_lifts_as_ordered_object() {
        let at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let program = generate_program_at(&LiftInputs::defaults(), 1, at).unwrap();
        let json = serde_json::to_value(&program).unwrap();

        assert_eq!(json["generated_at"], "2026-01-15T10:00:00Z");
        assert_eq!(json["cycles"][0]["cycle_number"], 1);

        let squat = &json["cycles"][0]["content"]["squat"];
        assert_eq!(squat["training_max"], 284);
        assert_eq!(squat["weeks"][0]["week_label"], "week1");
        assert!(squat["weeks"][0].get("label").is_none());
        assert_eq!(squat["weeks"][0]["sets"][2]["reps"], "5+");
        assert_eq!(squat["weeks"][0]["sets"][0]["reps"], 5);
        assert_eq!(squat["weeks"][0]["sets"][0]["weight"], 185);

        let text = serde_json::to_string(&program).unwrap();
        let squat_at = text.find("\"squat\"").unwrap();
        let press_at = text.find("\"press\"").unwrap();
        assert!(squat_at < press_at);
    }
}
