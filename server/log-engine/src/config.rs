//! Engine configuration with the EAGLE console defaults.

use crate::error::EngineError;

/// Markers and time-zone constants used while scanning a console log.
#[derive(Debug, Clone)]
pub struct Config {
  /// Trimmed line content that bounds a log block.
  pub delimiter: String,
  /// Zone token the identity banner must carry (third token or later).
  pub zone_marker: String,
  /// Product token that precedes the firmware release in the identity banner.
  pub product_marker: String,
  /// Substring that marks a line as an obit trigger.
  pub obit_keyword: String,
  /// Substring that marks the card/module line inside an obit block.
  pub module_keyword: String,
  /// Fixed offset of the console wall clock, in minutes east of UTC.
  pub source_offset_minutes: i32,
  /// Shift applied to the source instant before rendering.
  pub shift_minutes: i64,
  /// Zone suffix written after the rendered destination timestamp.
  pub destination_suffix: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      delimiter: ";".into(),
      zone_marker: "EST".into(),
      product_marker: "EAGLE".into(),
      obit_keyword: "Obit".into(),
      module_keyword: "Module".into(),
      source_offset_minutes: -5 * 60,
      shift_minutes: 10 * 60 + 30,
      destination_suffix: "+05:30".into(),
    }
  }
}

impl Config {
  /// Reject settings that would make every pass degenerate.
  pub fn validate(&self) -> Result<(), EngineError> {
    let required = [
      ("delimiter", &self.delimiter),
      ("zone_marker", &self.zone_marker),
      ("product_marker", &self.product_marker),
      ("obit_keyword", &self.obit_keyword),
      ("module_keyword", &self.module_keyword),
    ];
    for (field, value) in required {
      if value.trim().is_empty() {
        return Err(EngineError::config(field, "must not be empty"));
      }
    }
    if self.source_offset_minutes.abs() >= 24 * 60 {
      return Err(EngineError::config(
        "source_offset_minutes",
        "must be within +-24h",
      ));
    }
    if self.shift_minutes.abs() >= 24 * 60 {
      return Err(EngineError::config("shift_minutes", "must be within +-24h"));
    }
    Ok(())
  }
}
