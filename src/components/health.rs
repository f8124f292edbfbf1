use std::fmt;

use bevy_ecs::prelude::*;
use bevy_utils::tracing::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HealthError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Health pool clamped to `[0, maximum]`.
///
/// The maximum is fixed at construction. `heal` and `damage` snap to the
/// nearest bound instead of failing, so every operation after construction
/// is total.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHealth")]
pub struct HealthCounter {
    current: u32,
    maximum: u32,
}

/// Unchecked wire form, validated on the way in.
#[derive(Deserialize)]
struct RawHealth {
    current: u32,
    maximum: u32,
}

impl TryFrom<RawHealth> for HealthCounter {
    type Error = HealthError;

    fn try_from(raw: RawHealth) -> Result<Self, Self::Error> {
        Self::from_parts(raw.current, raw.maximum)
    }
}

impl HealthCounter {
    /// Start at full health: both current and maximum equal `initial`.
    pub fn new(initial: i64) -> Result<Self, HealthError> {
        if initial < 0 {
            return Err(HealthError::InvalidArgument(format!(
                "initial health must be non-negative, got {}",
                initial
            )));
        }
        let initial = u32::try_from(initial).map_err(|_| {
            HealthError::InvalidArgument(format!(
                "initial health {} exceeds {}",
                initial,
                u32::MAX
            ))
        })?;
        Ok(Self {
            current: initial,
            maximum: initial,
        })
    }

    /// Restore a counter to an arbitrary state, e.g. from a save.
    pub fn from_parts(current: u32, maximum: u32) -> Result<Self, HealthError> {
        if current > maximum {
            return Err(HealthError::InvalidArgument(format!(
                "current health {} exceeds maximum {}",
                current, maximum
            )));
        }
        Ok(Self { current, maximum })
    }

    pub fn health(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn heal(&mut self, amount: u32) {
        let raw = self.current.saturating_add(amount);
        if raw > self.maximum {
            debug!(amount, maximum = self.maximum, "heal clamped to maximum");
        }
        self.current = raw.min(self.maximum);
    }

    /// Damage beyond the remaining health floors at zero.
    pub fn damage(&mut self, amount: u32) {
        if amount > self.current {
            debug!(amount, current = self.current, "damage clamped to zero");
        }
        self.current = self.current.saturating_sub(amount);
    }
}

impl fmt::Display for HealthCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.maximum)
    }
}
