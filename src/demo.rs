use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use bevy_utils::tracing::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::health::{HealthCounter, HealthError};

/// A scripted run: one counter, then heal/damage steps in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub initial: i64,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "amount", rename_all = "snake_case")]
pub enum Step {
    Damage(u32),
    Heal(u32),
}

/// State observed after a step; `step` is `None` for the starting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub step: Option<Step>,
    pub health: u32,
    pub alive: bool,
}

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
    #[error(transparent)]
    Health(#[from] HealthError),
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            initial: 100,
            steps: vec![Step::Damage(30), Step::Heal(20), Step::Damage(100)],
        }
    }
}

impl Step {
    pub fn apply(self, health: &mut HealthCounter) {
        match self {
            Step::Damage(amount) => health.damage(amount),
            Step::Heal(amount) => health.heal(amount),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Damage(amount) => write!(f, "taking {} damage", amount),
            Step::Heal(amount) => write!(f, "healing {}", amount),
        }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step {
            Some(step) => write!(f, "Health after {}: {}", step, self.health)?,
            None => write!(f, "Initial health: {}", self.health)?,
        }
        write!(f, " (alive: {})", self.alive)
    }
}

pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, DemoError> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let raw = fs::read_to_string(path_ref).map_err(|source| DemoError::Io {
        path: path_str.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DemoError::Json {
        path: path_str,
        source,
    })
}

/// Run the scenario, writing one line per checkpoint to `out`.
pub fn run_scenario<W: Write>(
    scenario: &Scenario,
    out: &mut W,
) -> Result<Vec<Checkpoint>, DemoError> {
    let mut health = HealthCounter::new(scenario.initial)?;
    info!(initial = scenario.initial, steps = scenario.steps.len(), "running health scenario");

    let mut checkpoints = Vec::with_capacity(scenario.steps.len() + 1);
    checkpoints.push(record(None, &health, out)?);
    for step in &scenario.steps {
        step.apply(&mut health);
        checkpoints.push(record(Some(*step), &health, out)?);
    }

    info!(final_health = %health, alive = health.is_alive(), "scenario finished");
    Ok(checkpoints)
}

fn record<W: Write>(
    step: Option<Step>,
    health: &HealthCounter,
    out: &mut W,
) -> Result<Checkpoint, DemoError> {
    let checkpoint = Checkpoint {
        step,
        health: health.health(),
        alive: health.is_alive(),
    };
    writeln!(out, "{}", checkpoint)?;
    Ok(checkpoint)
}
