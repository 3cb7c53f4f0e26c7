//! 5/3/1 program generation
//!
//! Templates, arithmetic, input parsing and the cycle generator.

pub mod calc;
pub mod generator;
pub mod inputs;
pub mod template;

pub use calc::{compute_training_max, compute_weight};
pub use generator::{
    generate_lift_cycle, generate_program, Cycle, CycleContent, LiftCyclePlan, PrescriptionRow,
    Program, WeekPlan,
};
pub use inputs::{parse_cycle_count, parse_lift_value, LiftInputs};
pub use template::{LiftSet, RepTarget, STANDARD_531};
