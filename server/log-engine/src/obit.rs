//! Obit (card reboot) extraction.

use tracing::{debug, info};

use crate::config::Config;
use crate::patterns;
use crate::timestamp;
use crate::types::ObitRecord;
use crate::window::{window, Window};

/// Line number reported when an obit block has no parsable module line.
pub const NO_LINE: i64 = -1;

/// Build one record per line containing the obit keyword.
///
/// The banner at block position 1 is mandatory. The card/module line is
/// searched anywhere in the block and is optional; it doubles as the reason
/// text, which falls back to the trigger line when the block has none.
pub fn extract(lines: &[&str], config: &Config) -> Vec<ObitRecord> {
  let mut records = Vec::new();

  for (i, line) in lines.iter().enumerate() {
    if !line.contains(config.obit_keyword.as_str()) {
      continue;
    }
    let block = window(lines, i, &config.delimiter);
    if let Some(record) = parse_block(&block, line.trim(), config) {
      records.push(record);
    }
  }

  info!("extracted {} obit logs", records.len());
  records
}

fn parse_block(block: &Window<'_>, trigger: &str, config: &Config) -> Option<ObitRecord> {
  let banner = patterns::banner(block.line(1)?)?;

  let module_line = block
    .lines
    .iter()
    .find(|l| l.contains(config.module_keyword.as_str()))
    .map(|l| l.trim());
  let module = module_line.and_then(patterns::module_line);
  // Without a module line the trigger line is the best reason available.
  let reason = module_line.unwrap_or(trigger);

  let date_time_ist = match timestamp::normalize(banner.date, banner.time, config) {
    Ok(s) => s,
    Err(e) => {
      debug!(line = block.start + 1, error = %e, "dropping obit block");
      return None;
    }
  };

  Some(ObitRecord {
    station: banner.station.to_string(),
    date: banner.date.to_string(),
    time: banner.time.to_string(),
    date_time_ist,
    release: banner.release.to_string(),
    reason: reason.to_string(),
    module: module.as_ref().map(|m| m.module.to_string()).unwrap_or_default(),
    line: module
      .as_ref()
      .and_then(|m| m.line.parse().ok())
      .unwrap_or(NO_LINE),
    class_code: module
      .as_ref()
      .map(|m| m.class_code.to_string())
      .unwrap_or_default(),
    full_text: block.joined(),
  })
}
