//! Planner file parser
//!
//! Parses a `lifts.toml` file into lift inputs and a cycle count.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::program::inputs::{LiftInputs, DEFAULT_CYCLE_COUNT};

/// Program-wide settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSettings {
    /// Number of cycles to generate (default: 1)
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

const fn default_cycles() -> u32 {
    DEFAULT_CYCLE_COUNT
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            cycles: default_cycles(),
        }
    }
}

/// A single lift entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LiftConfig {
    /// Lift name, e.g. `squat`
    pub name: String,
    /// Current one-rep max
    pub one_rep_max: f64,
}

/// Top-level planner configuration parsed from lifts.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Program-wide settings
    #[serde(default)]
    pub plan: PlanSettings,
    /// Lifts in display order
    #[serde(rename = "lift", default)]
    pub lifts: Vec<LiftConfig>,
}

impl PlannerConfig {
    /// Parse a lifts.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read planner file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse lifts.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse lifts.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Find a lift entry by name
    #[must_use]
    pub fn get_lift(&self, name: &str) -> Option<&LiftConfig> {
        self.lifts.iter().find(|l| l.name == name)
    }

    /// Convert the lift entries into generator inputs, in file order.
    pub fn to_inputs(&self) -> Result<LiftInputs> {
        let mut inputs = LiftInputs::new();
        for lift in &self.lifts {
            inputs
                .insert(&lift.name, lift.one_rep_max)
                .with_context(|| format!("in lift '{}'", lift.name))?;
        }
        Ok(inputs)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.plan.cycles == 0 {
            bail!("Invalid cycle count 0: [plan] cycles must be at least 1");
        }

        // Check that lift names are non-empty
        for lift in &self.lifts {
            if lift.name.trim().is_empty() {
                bail!("Lift name cannot be empty");
            }
        }

        // Check for duplicate lift names
        let mut seen = HashSet::new();
        for lift in &self.lifts {
            if !seen.insert(lift.name.trim()) {
                bail!("Duplicate lift name: '{}'", lift.name);
            }
        }

        // Values must be usable one-rep maxes
        self.to_inputs()?;

        Ok(())
    }
}
