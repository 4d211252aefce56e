//! Structured error types for the log engine.
//!
//! `extract` itself never fails; these surface from the fallible helpers
//! (timestamp normalization, config validation) and from the binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("timestamp: {value}: {reason}")]
  Timestamp { value: String, reason: String },

  #[error("config: {field}: {reason}")]
  Config { field: String, reason: String },

  #[error("usage: {0}")]
  Usage(String),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn timestamp(value: &str, reason: &str) -> Self {
    Self::Timestamp {
      value: value.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn config(field: &str, reason: &str) -> Self {
    Self::Config {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
