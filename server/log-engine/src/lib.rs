//! Eagle Console Log Engine — deterministic, pattern-based extraction.
//!
//! Scans a raw EAGLE console log, finds the station/release banner, windows
//! every Severity 1/2/3 and Obit trigger to its `;`-delimited block, and
//! returns a structured Report with IST-normalized timestamps.
//!
//! No DB, no network, no state between calls; pure computation.

pub mod config;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod identity;
pub mod obit;
pub mod overview;
pub mod patterns;
pub mod severity;
pub mod split;
pub mod timestamp;
pub mod types;
pub mod window;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use overview::{summarize, Overview};
pub use types::{EagleIdentity, ObitRecord, Report, SeverityClass, SeverityRecord};

/// Run the engine with the default EAGLE configuration.
pub fn extract(raw_text: &str, file_identifier: &str) -> Report {
  Engine::with_defaults().extract(raw_text, file_identifier)
}
