//! Split raw console text into the line view every pass scans.

use crate::types::LogFile;

/// Split `raw` on `\n` and record basic file stats.
///
/// Never fails. Empty input yields a single empty line, and a trailing
/// newline yields a trailing empty line, so `line_count` is always >= 1.
pub fn split<'a>(raw: &'a str, path: &'a str) -> LogFile<'a> {
  let lines: Vec<&str> = raw.split('\n').collect();
  let first_line = lines.first().map(|l| l.trim()).unwrap_or_default();
  let last_line = lines.last().map(|l| l.trim()).unwrap_or_default();

  LogFile {
    raw,
    path,
    line_count: lines.len(),
    first_line,
    last_line,
    lines,
  }
}
