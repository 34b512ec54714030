//! Core data types for vital-sign evaluation

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lookup key for body temperature readings.
pub const TEMPERATURE: &str = "temperature";
/// Lookup key for pulse rate readings.
pub const PULSE_RATE: &str = "pulse_rate";
/// Lookup key for oxygen saturation readings.
pub const SPO2: &str = "spo2";

/// Acceptable range for a single vital sign.
///
/// A missing bound disables that side of the check, so one-sided limits
/// (e.g. oxygen saturation) need no sentinel value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    /// Key used to match readings against this limit.
    pub name: String,
    /// Human-readable name used in alert messages.
    pub label: String,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    /// When true, values equal to a bound are in range.
    #[serde(default = "default_inclusive")]
    pub inclusive: bool,
    /// Overrides the generic "is out of range!" alert text.
    #[serde(default)]
    pub message: Option<String>,
}

fn default_inclusive() -> bool {
    true
}

impl Limit {
    /// Two-sided limit with the generic alert message.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        low: f64,
        high: f64,
        inclusive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            low: Some(low),
            high: Some(high),
            inclusive,
            message: None,
        }
    }

    /// Limit with only a lower bound.
    pub fn at_least(
        name: impl Into<String>,
        label: impl Into<String>,
        low: f64,
        inclusive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            low: Some(low),
            high: None,
            inclusive,
            message: None,
        }
    }

    /// Limit with only an upper bound.
    pub fn at_most(
        name: impl Into<String>,
        label: impl Into<String>,
        high: f64,
        inclusive: bool,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            low: None,
            high: Some(high),
            inclusive,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Text emitted when a reading breaches this limit.
    pub fn alert_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("{} is out of range!", self.label),
        }
    }
}

/// A single measured value for a named vital sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub name: String,
    pub value: f64,
}

impl Reading {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Why an alert was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// The reading breached its limit.
    OutOfRange,
    /// The reading was not a number.
    InvalidReading,
    /// A reading arrived for a vital with no configured limit.
    UnknownVital,
    /// A configured vital had no reading.
    MissingReading,
}

impl AlertKind {
    /// True for alerts about the patient rather than about the input.
    pub fn is_clinical(&self) -> bool {
        matches!(self, AlertKind::OutOfRange)
    }
}

/// A human-readable notification produced by an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub vital: String,
    pub kind: AlertKind,
    pub message: String,
    pub value: Option<f64>,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(
        vital: impl Into<String>,
        kind: AlertKind,
        message: impl Into<String>,
        value: Option<f64>,
    ) -> Self {
        Self {
            vital: vital.into(),
            kind,
            message: message.into(),
            value,
            raised_at: Utc::now(),
        }
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
