use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::alerts::blink::BlinkConfig;
use crate::vitals::{EvaluationMode, VitalsConfig, VitalsError};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub limits_file: Option<PathBuf>,
    /// Overrides the mode of the limits table when set.
    pub evaluation_mode: Option<EvaluationMode>,
    pub blink_enabled: bool,
    pub blink: BlinkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits_file: None,
            evaluation_mode: None,
            blink_enabled: false,
            blink: BlinkConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Every variable is
    /// optional; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) =
            lookup("VITALS_LIMITS_FILE").filter(|p| !p.trim().is_empty())
        {
            config.limits_file = Some(PathBuf::from(path));
        }

        if let Some(mode) = lookup("VITALS_EVALUATION_MODE") {
            let mode = mode
                .parse()
                .map_err(|_| format!("Invalid VITALS_EVALUATION_MODE: {}", mode))?;
            config.evaluation_mode = Some(mode);
        }

        if let Some(enabled) = lookup("VITALS_BLINK") {
            config.blink_enabled = parse_bool(&enabled)
                .ok_or_else(|| format!("Invalid VITALS_BLINK: {}", enabled))?;
        }

        if let Some(cycles) = lookup("VITALS_BLINK_CYCLES") {
            config.blink.cycles = cycles
                .parse::<u32>()
                .map_err(|_| "VITALS_BLINK_CYCLES must be a valid number")?;
        }

        if let Some(interval) = lookup("VITALS_BLINK_INTERVAL_MS") {
            let millis = interval
                .parse::<u64>()
                .map_err(|_| "VITALS_BLINK_INTERVAL_MS must be a valid number")?;
            if millis == 0 {
                return Err(
                    "VITALS_BLINK_INTERVAL_MS must be greater than zero".to_string(),
                );
            }
            config.blink.half_period = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Load the limits table this config points at (or the built-in one)
    /// and apply the evaluation mode override, if any. Without an override
    /// the table keeps its own mode.
    pub fn vitals_config(&self) -> Result<VitalsConfig, VitalsError> {
        let mut vitals_config = match &self.limits_file {
            Some(path) => {
                tracing::info!("Loading limits from {}", path.display());
                VitalsConfig::load(path)?
            }
            None => VitalsConfig::default(),
        };

        if let Some(mode) = self.evaluation_mode {
            vitals_config.mode = mode;
        }

        Ok(vitals_config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
