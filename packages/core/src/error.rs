use std::error::Error;
use std::fmt;

use crate::vitals::VitalsError;

/// Unified application error.
///
/// Only startup can fail: bad environment, an unreadable limits file, or a
/// runtime problem. Alerts are never errors.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    Limits(VitalsError),
    Runtime(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Limits(err) => write!(f, "Limits error: {}", err),
            AppError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Limits(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VitalsError> for AppError {
    fn from(err: VitalsError) -> Self {
        AppError::Limits(err)
    }
}
