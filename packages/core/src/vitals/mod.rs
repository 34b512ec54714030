//! Vital-sign evaluation
//!
//! Compares named readings against an explicit limits table and produces
//! alerts for every reading that falls outside its acceptable range.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod monitor;
pub mod types;


pub use config::{EvaluationMode, VitalsConfig};
pub use error::VitalsError;
pub use evaluator::is_out_of_range;
pub use monitor::{Evaluation, VitalsMonitor};
pub use types::*;
