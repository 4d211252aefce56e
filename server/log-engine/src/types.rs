//! Core types for the log engine (input view + JSON output contract).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input view (what the splitter produces from the caller's text)
// ---------------------------------------------------------------------------

/// Immutable line view over one loaded console log.
#[derive(Debug, Clone)]
pub struct LogFile<'a> {
  pub raw: &'a str,
  pub path: &'a str,
  /// Lines in file order, split on `\n`; a trailing empty line is kept.
  pub lines: Vec<&'a str>,
  pub line_count: usize,
  pub first_line: &'a str,
  pub last_line: &'a str,
}

// ---------------------------------------------------------------------------
// Severity classes
// ---------------------------------------------------------------------------

/// One of the three escalation tiers a console alarm can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SeverityClass {
  One,
  Two,
  Three,
}

impl SeverityClass {
  pub const ALL: [SeverityClass; 3] = [Self::One, Self::Two, Self::Three];

  /// Substring that makes a line a trigger for this class.
  pub fn label(self) -> &'static str {
    match self {
      Self::One => "Severity 1",
      Self::Two => "Severity 2",
      Self::Three => "Severity 3",
    }
  }

  pub fn number(self) -> u8 {
    match self {
      Self::One => 1,
      Self::Two => 2,
      Self::Three => 3,
    }
  }
}

impl From<SeverityClass> for u8 {
  fn from(class: SeverityClass) -> u8 {
    class.number()
  }
}

impl TryFrom<u8> for SeverityClass {
  type Error = String;

  fn try_from(n: u8) -> Result<Self, Self::Error> {
    match n {
      1 => Ok(Self::One),
      2 => Ok(Self::Two),
      3 => Ok(Self::Three),
      other => Err(format!("severity class out of range: {}", other)),
    }
  }
}

impl std::fmt::Display for SeverityClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

// ---------------------------------------------------------------------------
// Extracted records
// ---------------------------------------------------------------------------

/// Station id and firmware release taken from the system banner.
///
/// Both fields stay empty when no banner qualifies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EagleIdentity {
  #[serde(rename = "eagleStation")]
  pub station: String,
  #[serde(rename = "eagleRel")]
  pub release: String,
}

impl EagleIdentity {
  pub fn is_empty(&self) -> bool {
    self.station.is_empty() && self.release.is_empty()
  }
}

/// One alarm block matched by a severity pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityRecord {
  /// Class of the pass that captured the block.
  pub severity_class: SeverityClass,
  pub station: String,
  pub release: String,
  pub card: u64,
  /// `"Severity <n>"`, with `n` read from the detail line.
  pub severity: String,
  pub time: String,
  pub date: String,
  #[serde(rename = "dateTimeIST")]
  pub date_time_ist: String,
  /// Trimmed detail line, verbatim.
  pub sev_header: String,
  pub module: String,
  pub line: u64,
  #[serde(rename = "class")]
  pub class_code: String,
}

/// One reboot event.
///
/// `module`, `line` and `class_code` degrade to `""` / `-1` / `""` when the
/// block has no parsable card/module line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObitRecord {
  pub station: String,
  pub date: String,
  pub time: String,
  #[serde(rename = "dateTimeIST")]
  pub date_time_ist: String,
  pub release: String,
  pub reason: String,
  pub module: String,
  pub line: i64,
  #[serde(rename = "class")]
  pub class_code: String,
  pub full_text: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what the front end renders)
// ---------------------------------------------------------------------------

/// Everything extracted from one file. Built fresh on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  #[serde(rename = "logFileName")]
  pub file_name: String,
  #[serde(rename = "logFilePath")]
  pub file_path: String,
  #[serde(rename = "noOfLines")]
  pub line_count: usize,
  #[serde(rename = "firstLine")]
  pub first_line: String,
  #[serde(rename = "lastLine")]
  pub last_line: String,
  #[serde(rename = "contentHash")]
  pub content_hash: String,
  #[serde(rename = "noOfObits")]
  pub obit_count: usize,
  #[serde(rename = "noOfSev1s")]
  pub sev1_count: usize,
  #[serde(rename = "noOfSev2s")]
  pub sev2_count: usize,
  #[serde(rename = "noOfSev3s")]
  pub sev3_count: usize,
  #[serde(rename = "sev1s_details")]
  pub sev1s: Vec<SeverityRecord>,
  #[serde(rename = "sev2s_details")]
  pub sev2s: Vec<SeverityRecord>,
  #[serde(rename = "sev3s_details")]
  pub sev3s: Vec<SeverityRecord>,
  #[serde(rename = "obit_details")]
  pub obits: Vec<ObitRecord>,
  #[serde(flatten)]
  pub identity: EagleIdentity,
}

impl Report {
  /// Records captured by the given class pass.
  pub fn severities(&self, class: SeverityClass) -> &[SeverityRecord] {
    match class {
      SeverityClass::One => &self.sev1s,
      SeverityClass::Two => &self.sev2s,
      SeverityClass::Three => &self.sev3s,
    }
  }

  pub fn severity_count(&self, class: SeverityClass) -> usize {
    match class {
      SeverityClass::One => self.sev1_count,
      SeverityClass::Two => self.sev2_count,
      SeverityClass::Three => self.sev3_count,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_class_labels_and_numbers() {
    assert_eq!(SeverityClass::One.label(), "Severity 1");
    assert_eq!(SeverityClass::Three.number(), 3);
    assert_eq!(SeverityClass::try_from(2).unwrap(), SeverityClass::Two);
    assert!(SeverityClass::try_from(4).is_err());
  }

  #[test]
  fn empty_report_uses_front_end_keys() {
    let json = serde_json::to_value(Report::default()).unwrap();
    for key in [
      "logFileName",
      "logFilePath",
      "noOfLines",
      "noOfObits",
      "noOfSev1s",
      "noOfSev2s",
      "noOfSev3s",
      "sev1s_details",
      "sev2s_details",
      "sev3s_details",
      "obit_details",
      "eagleRel",
      "eagleStation",
    ] {
      assert!(json.get(key).is_some(), "missing key {}", key);
    }
  }

  #[test]
  fn severity_record_serializes_class_as_number() {
    let record = SeverityRecord {
      severity_class: SeverityClass::Two,
      station: "STATION1".into(),
      release: "48.0.0.0.0-80.20.0".into(),
      card: 1101,
      severity: "Severity 2".into(),
      time: "20:08:40".into(),
      date: "26-02-25".into(),
      date_time_ist: "2026-02-26T11:38:40.000+05:30".into(),
      sev_header: "Card 1101 Module OAM Line 42 Class CARR Severity 2".into(),
      module: "OAM".into(),
      line: 42,
      class_code: "CARR".into(),
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["severityClass"], 2);
    assert_eq!(json["dateTimeIST"], "2026-02-26T11:38:40.000+05:30");
    assert_eq!(json["sevHeader"], record.sev_header);
    assert_eq!(json["class"], "CARR");
  }
}
