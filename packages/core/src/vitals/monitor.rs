//! Vitals Monitor - evaluates a set of readings against the limits table

use crate::vitals::{
    config::{EvaluationMode, VitalsConfig},
    error::VitalsError,
    types::*,
};

/// Alerts produced by one evaluation, in the order they were raised.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    alerts: Vec<Alert>,
}

impl Evaluation {
    /// True when no alert was raised.
    pub fn is_normal(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn first(&self) -> Option<&Alert> {
        self.alerts.first()
    }
}

/// Evaluates readings against a validated limits table.
#[derive(Debug, Clone, Default)]
pub struct VitalsMonitor {
    config: VitalsConfig,
}

impl VitalsMonitor {
    /// Create a monitor, rejecting an invalid limits table.
    pub fn new(config: VitalsConfig) -> Result<Self, VitalsError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Evaluate readings against every configured limit.
    ///
    /// Limits are visited in table order; a limit without a matching reading
    /// raises a `MissingReading` alert. Readings for vitals with no limit
    /// raise `UnknownVital` alerts afterwards. In `First` mode evaluation
    /// stops at the first alert.
    pub fn evaluate(&self, readings: &[Reading]) -> Evaluation {
        let mut alerts = Vec::new();

        for limit in &self.config.limits {
            let alert = match readings.iter().find(|r| r.name == limit.name) {
                Some(reading) => limit.check(reading),
                None => Some(Alert::new(
                    &limit.name,
                    AlertKind::MissingReading,
                    format!("No reading for {}", limit.label),
                    None,
                )),
            };

            if let Some(alert) = alert {
                if self.push(&mut alerts, alert) {
                    return Evaluation { alerts };
                }
            }
        }

        for reading in readings {
            if self.config.limit(&reading.name).is_none() {
                let alert = Alert::new(
                    &reading.name,
                    AlertKind::UnknownVital,
                    format!("Unknown vital: {}", reading.name),
                    Some(reading.value),
                );
                if self.push(&mut alerts, alert) {
                    break;
                }
            }
        }

        Evaluation { alerts }
    }

    /// Positional form for the three standard vitals.
    pub fn evaluate_vitals(&self, temperature: f64, pulse_rate: f64, spo2: f64) -> Evaluation {
        self.evaluate(&[
            Reading::new(TEMPERATURE, temperature),
            Reading::new(PULSE_RATE, pulse_rate),
            Reading::new(SPO2, spo2),
        ])
    }

    /// Record an alert; returns true when evaluation should stop.
    fn push(&self, alerts: &mut Vec<Alert>, alert: Alert) -> bool {
        tracing::warn!(
            vital = %alert.vital,
            kind = ?alert.kind,
            value = ?alert.value,
            "{}",
            alert.message
        );
        alerts.push(alert);
        self.config.mode == EvaluationMode::First
    }
}
