//! Terminal display for generated programs
//!
//! The plan itself goes to stdout so it can be piped or redirected.
//! Status and history lines go to stderr.

use colored::Colorize;

use crate::log::GenerationRecord;
use crate::program::{LiftCyclePlan, PrescriptionRow, Program, WeekPlan};

/// Label printed after every weight. Display only; no conversion happens.
pub const WEIGHT_LABEL: &str = "lbs";

/// Uppercase the first character of a lift name.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// `Squat — TM 284 lbs`
#[must_use]
pub fn format_lift_heading(name: &str, plan: &LiftCyclePlan) -> String {
    format!(
        "{} — TM {} {WEIGHT_LABEL}",
        capitalize(name),
        plan.training_max
    )
}

/// `Week 4 (week4, deload)`, with a 0-based `index`.
#[must_use]
pub fn format_week_heading(index: usize, week: &WeekPlan) -> String {
    if week.deload {
        format!("Week {} ({}, deload)", index + 1, week.week_label)
    } else {
        format!("Week {} ({})", index + 1, week.week_label)
    }
}

/// `Set 3: 85% × 5+ @ 240 lbs`, with a 0-based `index`.
#[must_use]
pub fn format_set_line(index: usize, row: &PrescriptionRow) -> String {
    format!(
        "Set {}: {:.0}% × {} @ {} {WEIGHT_LABEL}",
        index + 1,
        row.percentage * 100.0,
        row.reps,
        row.weight
    )
}

/// Render a whole program as uncolored text, one line per heading or set.
#[must_use]
pub fn render_program(program: &Program) -> String {
    let mut lines = Vec::new();
    for cycle in &program.cycles {
        lines.push(format!("Cycle {}", cycle.cycle_number));
        for (name, plan) in cycle.content.iter() {
            lines.push(format!("  {}", format_lift_heading(name, plan)));
            for (w, week) in plan.weeks.iter().enumerate() {
                lines.push(format!("    {}", format_week_heading(w, week)));
                for (s, row) in week.sets.iter().enumerate() {
                    lines.push(format!("      {}", format_set_line(s, row)));
                }
            }
        }
        // blank line between cycles
        lines.push(String::new());
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Colored program display
pub struct ProgramDisplay<'a> {
    program: &'a Program,
}

impl<'a> ProgramDisplay<'a> {
    /// Create a display for the given program
    #[must_use]
    pub const fn new(program: &'a Program) -> Self {
        Self { program }
    }

    /// Print the program to stdout
    pub fn print(&self) {
        for cycle in &self.program.cycles {
            println!(
                "\n{} {}",
                "===".bold().cyan(),
                format!("Cycle {}", cycle.cycle_number).bold().cyan()
            );
            println!("{}", "─".repeat(50).dimmed());
            for (name, plan) in cycle.content.iter() {
                Self::print_lift(name, plan);
            }
        }
    }

    fn print_lift(name: &str, plan: &LiftCyclePlan) {
        println!("  {}", format_lift_heading(name, plan).bold());
        for (w, week) in plan.weeks.iter().enumerate() {
            let heading = format_week_heading(w, week);
            if week.deload {
                println!("    {}", heading.dimmed());
            } else {
                println!("    {heading}");
            }
            for (s, row) in week.sets.iter().enumerate() {
                let line = format_set_line(s, row);
                if row.reps.is_amrap() {
                    println!("      {} {}", line, "AMRAP".yellow());
                } else {
                    println!("      {line}");
                }
            }
        }
        println!();
    }
}

/// Print a one-line generation summary to stderr
pub fn print_summary(program: &Program) {
    let lifts = program.cycles.first().map_or(0, |c| c.content.len());
    eprintln!(
        "{} {} cycle(s) for {} lift(s) at {}",
        "✓ Generated".green().bold(),
        program.cycles.len(),
        lifts,
        program.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}

/// Format one history entry: timestamp, cycle count, then `name tm/1rm` pairs.
#[must_use]
pub fn format_history_entry(record: &GenerationRecord) -> String {
    let lifts = record
        .lifts
        .iter()
        .map(|l| format!("{} {}/{}", l.name, l.training_max, l.one_rep_max))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} | {} cycle(s) | {lifts}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        record.cycle_count
    )
}

/// Print the generation history to stderr, oldest first
pub fn print_history(records: &[GenerationRecord]) {
    if records.is_empty() {
        eprintln!("{}", "No generations recorded yet.".dimmed());
        return;
    }
    eprintln!("{}", "Generation history (TM/1RM)".bold());
    for record in records {
        eprintln!("  {}", format_history_entry(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LiftSummary;
    use crate::program::{generate_lift_cycle, generate_program, LiftInputs, RepTarget};
    use crate::testutil::make_test_inputs;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("squat"), "Squat");
        assert_eq!(capitalize("front squat"), "Front squat");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_lift_heading() {
        let plan = generate_lift_cycle(315.0);
        assert_eq!(format_lift_heading("squat", &plan), "Squat — TM 284 lbs");
    }

    #[test]
    fn test_week_heading() {
        let plan = generate_lift_cycle(315.0);
        assert_eq!(format_week_heading(0, &plan.weeks[0]), "Week 1 (week1)");
        assert_eq!(
            format_week_heading(3, &plan.weeks[3]),
            "Week 4 (week4, deload)"
        );
    }

    #[test]
    fn test_set_line_exact_reps() {
        let row = PrescriptionRow {
            percentage: 0.65,
            reps: RepTarget::Exact(5),
            weight: 185,
        };
        assert_eq!(format_set_line(0, &row), "Set 1: 65% × 5 @ 185 lbs");
    }

    #[test]
    fn test_set_line_amrap() {
        let row = PrescriptionRow {
            percentage: 0.95,
            reps: RepTarget::AtLeast(1),
            weight: 270,
        };
        assert_eq!(format_set_line(2, &row), "Set 3: 95% × 1+ @ 270 lbs");
    }

    #[test]
    fn test_render_program_layout() {
        let program = generate_program(&make_test_inputs(&[("bench", 225.0)]), 2).unwrap();
        let text = render_program(&program);

        assert!(text.starts_with("Cycle 1\n  Bench — TM 203 lbs\n    Week 1 (week1)\n"));
        assert!(text.contains("      Set 3: 90% × 3+ @ 185 lbs\n"));
        assert!(text.contains("Cycle 2\n"));
        assert_eq!(text.matches("Set ").count(), 2 * 4 * 3);
    }

    #[test]
    fn test_render_program_separates_cycles_with_blank_line() {
        let program = generate_program(&make_test_inputs(&[("press", 135.0)]), 2).unwrap();
        let text = render_program(&program);

        assert!(text.contains(" lbs\n\nCycle 2\n"), "got: {text}");
        assert!(text.ends_with(" lbs\n\n"));
        assert_eq!(text.lines().filter(|l| l.is_empty()).count(), 2);
    }

    #[test]
    fn test_format_history_entry() {
        let record = GenerationRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 2, 18, 30, 0).unwrap(),
            cycle_count: 2,
            lifts: vec![
                LiftSummary {
                    name: "squat".to_string(),
                    one_rep_max: 315.0,
                    training_max: 284,
                },
                LiftSummary {
                    name: "bench".to_string(),
                    one_rep_max: 227.5,
                    training_max: 205,
                },
            ],
        };
        assert_eq!(
            format_history_entry(&record),
            "2026-03-02 18:30 | 2 cycle(s) | squat 284/315, bench 205/227.5"
        );
    }

    // Printing must not panic for any program shape
    #[test]
    fn test_print_program_no_panic() {
        let program = generate_program(&LiftInputs::defaults(), 2).unwrap();
        ProgramDisplay::new(&program).print();
        print_summary(&program);
    }

    #[test]
    fn test_print_history_no_panic() {
        print_history(&[]);
    }
}
