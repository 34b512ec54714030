//! Limits table configuration

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vitals::{
    error::VitalsError,
    types::{Limit, PULSE_RATE, SPO2, TEMPERATURE},
};

/// How many alerts a single evaluation may produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Stop at the first alert.
    #[default]
    First,
    /// Report every alert.
    All,
}

impl FromStr for EvaluationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(EvaluationMode::First),
            "all" => Ok(EvaluationMode::All),
            other => Err(format!("Invalid evaluation mode: {}", other)),
        }
    }
}

/// Limits table handed to the monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsConfig {
    #[serde(default)]
    pub mode: EvaluationMode,
    pub limits: Vec<Limit>,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            mode: EvaluationMode::First,
            limits: vec![
                Limit::new(TEMPERATURE, "Temperature", 95.0, 102.0, true)
                    .with_message("Temperature is critical!"),
                Limit::new(PULSE_RATE, "Pulse Rate", 60.0, 100.0, true),
                Limit::at_least(SPO2, "Oxygen Saturation", 90.0, true),
            ],
        }
    }
}

impl VitalsConfig {
    pub fn new(mode: EvaluationMode, limits: Vec<Limit>) -> Self {
        Self { mode, limits }
    }

    /// Parse a JSON limits table and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, VitalsError> {
        let config: VitalsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON limits file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VitalsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| VitalsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Look up the limit for a vital by name.
    pub fn limit(&self, name: &str) -> Option<&Limit> {
        self.limits.iter().find(|l| l.name == name)
    }

    /// Check every limit: names non-empty and unique, bounds finite or
    /// infinite but never NaN, and `low <= high`.
    pub fn validate(&self) -> Result<(), VitalsError> {
        let mut seen = HashSet::new();

        for limit in &self.limits {
            if limit.name.trim().is_empty() {
                return Err(VitalsError::EmptyName);
            }
            if !seen.insert(limit.name.as_str()) {
                return Err(VitalsError::duplicate_vital(&limit.name));
            }

            let bounds = [("low", limit.low), ("high", limit.high)];
            for (side, bound) in bounds {
                if bound.is_some_and(f64::is_nan) {
                    return Err(VitalsError::invalid_limit(
                        &limit.name,
                        format!("{} bound is NaN", side),
                    ));
                }
            }

            if let (Some(low), Some(high)) = (limit.low, limit.high) {
                if low > high {
                    return Err(VitalsError::invalid_limit(
                        &limit.name,
                        format!("low bound {} exceeds high bound {}", low, high),
                    ));
                }
            }
        }

        Ok(())
    }
}
