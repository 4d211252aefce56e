//! Core engine: runs every pass over one file and assembles the report.

use crate::config::Config;
use crate::error::EngineError;
use crate::fingerprint;
use crate::identity;
use crate::obit;
use crate::severity;
use crate::split;
use crate::types::*;

/// The extraction engine. Holds configuration only; every call starts fresh.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  /// Like `new`, but rejects a config that would break the passes.
  pub fn try_new(config: Config) -> Result<Self, EngineError> {
    config.validate()?;
    Ok(Self::new(config))
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Extract identity, severity alarms and obits from one console log.
  ///
  /// Never fails: text that matches nothing yields a report with zero counts
  /// and an empty identity.
  pub fn extract(&self, raw: &str, file_identifier: &str) -> Report {
    let file = split::split(raw, file_identifier);
    let lines = file.lines.as_slice();

    let identity = identity::scan(lines, &self.config);
    // Three independent passes; one block may land in more than one list.
    let [sev1s, sev2s, sev3s] =
      SeverityClass::ALL.map(|class| severity::extract(lines, class, &self.config));
    let obits = obit::extract(lines, &self.config);

    assemble(&file, identity, sev1s, sev2s, sev3s, obits)
  }
}

fn assemble(
  file: &LogFile<'_>,
  identity: EagleIdentity,
  sev1s: Vec<SeverityRecord>,
  sev2s: Vec<SeverityRecord>,
  sev3s: Vec<SeverityRecord>,
  obits: Vec<ObitRecord>,
) -> Report {
  Report {
    file_name: file_name(file.path).to_string(),
    file_path: file.path.to_string(),
    line_count: file.line_count,
    first_line: file.first_line.to_string(),
    last_line: file.last_line.to_string(),
    content_hash: fingerprint::compute(file.raw),
    obit_count: obits.len(),
    sev1_count: sev1s.len(),
    sev2_count: sev2s.len(),
    sev3_count: sev3s.len(),
    sev1s,
    sev2s,
    sev3s,
    obits,
    identity,
  }
}

/// Last path segment, accepting both Windows and Unix separators.
fn file_name(path: &str) -> &str {
  path.rsplit(['\\', '/']).next().unwrap_or(path)
}
