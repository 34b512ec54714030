use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::vitals::{EvaluationMode, Reading, PULSE_RATE, SPO2, TEMPERATURE};

/// Readings evaluated when none are given on the command line.
pub const DEFAULT_TEMPERATURE: f64 = 98.0;
pub const DEFAULT_PULSE_RATE: f64 = 110.0;
pub const DEFAULT_SPO2: f64 = 98.0;

/// Vitals Monitor CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "vitals-monitor",
    version,
    about = "Check patient vital signs against their acceptable ranges"
)]
pub struct Cli {
    /// Body temperature in degrees Fahrenheit
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE, allow_negative_numbers = true)]
    pub temperature: f64,

    /// Pulse rate in beats per minute
    #[arg(long, default_value_t = DEFAULT_PULSE_RATE, allow_negative_numbers = true)]
    pub pulse_rate: f64,

    /// Oxygen saturation in percent
    #[arg(long, default_value_t = DEFAULT_SPO2, allow_negative_numbers = true)]
    pub spo2: f64,

    /// JSON limits file replacing the built-in table
    #[arg(long)]
    pub limits: Option<PathBuf>,

    /// Report every alert instead of stopping at the first
    #[arg(long)]
    pub all: bool,

    /// Blink the console after reporting alerts
    #[arg(long)]
    pub blink: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.limits {
            config.limits_file = Some(path.clone());
        }
        if self.all {
            config.evaluation_mode = Some(EvaluationMode::All);
        }
        if self.blink {
            config.blink_enabled = true;
        }
        config
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Reading::new(TEMPERATURE, self.temperature),
            Reading::new(PULSE_RATE, self.pulse_rate),
            Reading::new(SPO2, self.spo2),
        ]
    }
}
