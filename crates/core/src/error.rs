//! Error types for Practigram core domain logic

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid environment variable {name}: {reason}")]
    InvalidEnvVar { name: String, reason: String },
}

/// Response shape errors
///
/// Raised when the status API payload does not have the expected
/// `{"homeworks": [...]}` layout. Element contents are checked later,
/// by verdict rendering.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("Expected response to be an object, got {actual}")]
    NotAnObject { actual: &'static str },

    #[error("Response has no `homeworks` field")]
    MissingHomeworks,

    #[error("Expected `homeworks` to be an array, got {actual}")]
    HomeworksNotAnArray { actual: &'static str },
}

/// Verdict rendering errors for a single homework record
#[derive(Error, Debug)]
pub enum VerdictError {
    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Missing or empty field: {0}")]
    MissingField(&'static str),
}
