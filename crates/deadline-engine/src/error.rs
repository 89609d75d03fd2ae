//! Error types for deadline rendering.
//!
//! Parsing a free-form expression is never an error: an unrecognized
//! string is an `Option::None` so callers can fall back to treating the
//! input as a literal date. Errors exist only on the rendering side,
//! where the input is a stored value that is supposed to be valid.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeadlineError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, DeadlineError>;
