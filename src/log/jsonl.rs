//! JSONL (JSON Lines) logging of generation requests
//!
//! Each generation appends one line to `<log-dir>/log.jsonl`. Records hold
//! the inputs and training maxes, not the generated sets.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use crate::program::{LiftInputs, Program};

/// File name of the history inside the log directory.
const HISTORY_FILE: &str = "log.jsonl";

/// One lift as it entered a generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiftSummary {
    /// Lift name
    pub name: String,
    /// One-rep max supplied by the caller
    pub one_rep_max: f64,
    /// Training max the program was built on
    pub training_max: i64,
}

/// Represents a single generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRecord {
    /// ISO 8601 timestamp of when the program was generated
    pub timestamp: DateTime<Utc>,
    /// Number of cycles requested
    pub cycle_count: u32,
    /// Lifts in input order
    pub lifts: Vec<LiftSummary>,
}

impl GenerationRecord {
    /// Summarize a generated program.
    ///
    /// Lifts and training maxes come from the program's first cycle; the
    /// one-rep max is looked up in `inputs` by name. A planned lift with no
    /// matching input is left out.
    #[must_use]
    pub fn from_program(inputs: &LiftInputs, program: &Program) -> Self {
        let lifts: Vec<LiftSummary> = program
            .cycles
            .first()
            .map(|cycle| {
                cycle
                    .content
                    .iter()
                    .filter_map(|(name, plan)| {
                        inputs.get(name).map(|one_rep_max| LiftSummary {
                            name: name.to_string(),
                            one_rep_max,
                            training_max: plan.training_max,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            timestamp: program.generated_at,
            cycle_count: u32::try_from(program.cycles.len()).unwrap_or(u32::MAX),
            lifts,
        }
    }
}

/// Append-only generation history, one JSON record per line.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Open the history kept in `log_dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if `log_dir` cannot be created
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir).with_context(|| {
            format!("Cannot create history directory '{}'", log_dir.display())
        })?;

        Ok(Self {
            log_path: log_dir.join(HISTORY_FILE),
        })
    }

    /// Record one generation at the end of the history.
    ///
    /// # Errors
    /// Returns an error if the history file cannot be opened or written
    pub fn append(&self, record: &GenerationRecord) -> Result<()> {
        let line = serde_json::to_string(record).context("Cannot encode generation record")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Cannot open history '{}'", self.log_path.display()))?;
        writeln!(file, "{line}")
            .with_context(|| format!("Cannot write to history '{}'", self.log_path.display()))
    }

    /// Every recorded generation, oldest first. A missing history is empty.
    ///
    /// # Errors
    /// Returns an error on I/O failure or if a non-blank line is not a record
    pub fn read_all(&self) -> Result<Vec<GenerationRecord>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Cannot open history '{}'", self.log_path.display())
                })
            }
        };

        BufReader::new(file)
            .lines()
            .enumerate()
            .filter_map(|(index, line)| match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(serde_json::from_str(&line).with_context(|| {
                    format!("Corrupt history entry at line {}", index + 1)
                })),
                Err(e) => Some(Err(e).with_context(|| {
                    format!("Cannot read history line {}", index + 1)
                })),
            })
            .collect()
    }

    /// Path of the history file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
