//! Coordinator tuning values.
//!
//! # Invariants
//! - Both weights lie in `[MIN_WEIGHT, MAX_WEIGHT]` after `validate()`.

use crate::model::blend::{MAX_WEIGHT, MIN_WEIGHT};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Weight given to the focused reality by the spotlight reset.
pub const DEFAULT_FOCUSED_WEIGHT: f64 = 100.0;
/// Weight given to every other reality by the spotlight reset.
pub const DEFAULT_UNFOCUSED_REST_WEIGHT: f64 = 30.0;

/// Spotlight reset weights used on every focus shift.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoordinatorConfig {
    pub focused_weight: f64,
    pub unfocused_rest_weight: f64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            focused_weight: DEFAULT_FOCUSED_WEIGHT,
            unfocused_rest_weight: DEFAULT_UNFOCUSED_REST_WEIGHT,
        }
    }
}

impl CoordinatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_weight("focused_weight", self.focused_weight)?;
        check_weight("unfocused_rest_weight", self.unfocused_rest_weight)?;
        Ok(())
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::WeightOutOfRange { field, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    WeightOutOfRange { field: &'static str, value: f64 },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeightOutOfRange { field, value } => write!(
                f,
                "`{field}` must be within [{MIN_WEIGHT}, {MAX_WEIGHT}], got {value}"
            ),
        }
    }
}

impl Error for ConfigError {}
