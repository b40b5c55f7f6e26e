//! Error types for easetablib

use thiserror::Error;

/// Errors that can occur while sampling easing functions
#[derive(Error, Debug)]
pub enum EasetabError {
    /// A function name has no entry in the registry
    #[error("no easing function named '{name}' in the registry")]
    UnknownFunction { name: String },

    /// An evaluator produced NaN or an infinity
    #[error("easing function '{name}' returned non-finite value {value} at t={t}")]
    NonFiniteSample { name: String, t: f64, value: f64 },
}
