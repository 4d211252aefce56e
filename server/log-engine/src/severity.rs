//! Severity 1/2/3 alarm extraction, one independent pass per class.

use tracing::{debug, info};

use crate::config::Config;
use crate::patterns;
use crate::timestamp;
use crate::types::{SeverityClass, SeverityRecord};
use crate::window::{window, Window};

/// Run the pass for `class` over every line of the file.
///
/// Each line containing the class label triggers its block. The banner must
/// sit at block position 1 and the detail line at position 2; a block that
/// does not fit that layout is dropped without a diagnostic.
pub fn extract(lines: &[&str], class: SeverityClass, config: &Config) -> Vec<SeverityRecord> {
  let label = class.label();
  let mut records = Vec::new();

  for (i, line) in lines.iter().enumerate() {
    if !line.contains(label) {
      continue;
    }
    let block = window(lines, i, &config.delimiter);
    if let Some(record) = parse_block(&block, class, config) {
      records.push(record);
    }
  }

  info!("extracted {} {} logs", records.len(), label);
  records
}

fn parse_block(block: &Window<'_>, class: SeverityClass, config: &Config) -> Option<SeverityRecord> {
  let banner = patterns::banner(block.line(1)?)?;
  let header = block.line(2)?;
  let detail = patterns::severity_detail(header)?;

  let date_time_ist = match timestamp::normalize(banner.date, banner.time, config) {
    Ok(s) => s,
    Err(e) => {
      debug!(line = block.start + 1, error = %e, "dropping {} block", class);
      return None;
    }
  };

  Some(SeverityRecord {
    severity_class: class,
    station: banner.station.to_string(),
    release: banner.release.to_string(),
    card: detail.card,
    severity: format!("Severity {}", detail.severity),
    time: banner.time.to_string(),
    date: banner.date.to_string(),
    date_time_ist,
    sev_header: header.to_string(),
    module: detail.module.to_string(),
    line: detail.line,
    class_code: detail.class_code.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
  }

  const SEV1_BLOCK: &str = "\
;
    STATION1 26-02-25 20:08:40 EST SOMETHING 48.0.0.0.0-80.20.0
    Card 1101 Module OAM Line 42 Class CARR Severity 1
    Severity 1 alarm raised
;";

  #[test]
  fn builds_record_from_fixed_positions() {
    // Without a leading line the banner sits at position 0.
    let text = SEV1_BLOCK;
    let records = extract(&lines(text), SeverityClass::One, &Config::default());
    assert_eq!(records.len(), 0, "position 0 is the banner here");

    // Both the detail line and the "alarm raised" line trigger the block.
    let shifted = text.replacen(";\n", ";\nUNSOLICITED 0001\n", 1);
    let records = extract(&lines(&shifted), SeverityClass::One, &Config::default());
    assert_eq!(records.len(), 2);
    let r = &records[0];
    assert_eq!(r.station, "STATION1");
    assert_eq!(r.date, "26-02-25");
    assert_eq!(r.time, "20:08:40");
    assert_eq!(r.release, "48.0.0.0.0-80.20.0");
    assert_eq!(r.card, 1101);
    assert_eq!(r.module, "OAM");
    assert_eq!(r.line, 42);
    assert_eq!(r.class_code, "CARR");
    assert_eq!(r.severity, "Severity 1");
    assert_eq!(r.sev_header, "Card 1101 Module OAM Line 42 Class CARR Severity 1");
    assert_eq!(r.date_time_ist, "2026-02-26T11:38:40.000+05:30");
    assert_eq!(records[0], records[1]);
  }

  #[test]
  fn detail_mismatch_drops_candidate() {
    let text = "\
;
0001
    STATION1 26-02-25 20:08:40 EST SOMETHING 48.0.0.0.0-80.20.0
    Card 1101 Module OAM Class CARR Severity 1
;";
    assert!(extract(&lines(text), SeverityClass::One, &Config::default()).is_empty());
  }

  #[test]
  fn invalid_calendar_date_drops_only_that_record() {
    let text = "\
;
0001
    STATION1 25-02-30 20:08:40 EST SOMETHING 48.0.0.0.0-80.20.0
    Card 1101 Module OAM Line 42 Class CARR Severity 2
;
0002
    STATION1 25-02-28 20:08:40 EST SOMETHING 48.0.0.0.0-80.20.0
    Card 1102 Module OAM Line 43 Class CARR Severity 2
;";
    let records = extract(&lines(text), SeverityClass::Two, &Config::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].card, 1102);
  }

  #[test]
  fn severity_number_comes_from_detail_line() {
    // "Severity 1" is a substring of "Severity 12"; the record keeps 12.
    let text = "\
;
0001
    STATION1 26-02-25 20:08:40 EST SOMETHING 48.0.0.0.0-80.20.0
    Card 1101 Module OAM Line 42 Class CARR Severity 12
;";
    let records = extract(&lines(text), SeverityClass::One, &Config::default());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, "Severity 12");
    assert_eq!(records[0].severity_class, SeverityClass::One);
  }

  #[test]
  fn short_block_is_dropped() {
    let text = ";\nSeverity 3\n;";
    assert!(extract(&lines(text), SeverityClass::Three, &Config::default()).is_empty());
  }
}
