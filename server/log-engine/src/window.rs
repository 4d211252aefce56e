//! Expand a trigger line to its delimiter-bounded block.

/// One logical log entry: a contiguous run of lines around a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
  /// Index of the first line of the block in the file.
  pub start: usize,
  pub lines: &'a [&'a str],
}

impl<'a> Window<'a> {
  /// Trimmed line at `pos` within the block, if the block is that long.
  pub fn line(&self, pos: usize) -> Option<&'a str> {
    self.lines.get(pos).map(|l| l.trim())
  }

  /// Block text joined with `\n`, trimmed as a whole.
  pub fn joined(&self) -> String {
    self.lines.join("\n").trim().to_string()
  }
}

/// Block around `trigger`: every line back to (not including) the previous
/// delimiter line or start of file, the trigger itself, and every line
/// forward to (not including) the next delimiter line or end of file.
///
/// Each direction stops at the first delimiter or file edge, so total work is
/// bounded by the file length even when no delimiter is present.
///
/// Panics if `trigger` is out of range.
pub fn window<'a>(lines: &'a [&'a str], trigger: usize, delimiter: &str) -> Window<'a> {
  let is_delim = |l: &str| l.trim() == delimiter;

  let mut start = trigger;
  while start > 0 && !is_delim(lines[start - 1]) {
    start -= 1;
  }

  let mut end = trigger + 1;
  while end < lines.len() && !is_delim(lines[end]) {
    end += 1;
  }

  Window {
    start,
    lines: &lines[start..end],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stops_at_surrounding_delimiters() {
    let lines = ["a", ";", "b", "c", "d", " ; ", "e"];
    let w = window(&lines, 3, ";");
    assert_eq!(w.start, 2);
    assert_eq!(w.lines, &["b", "c", "d"]);
  }

  #[test]
  fn no_delimiters_means_whole_file() {
    let lines = ["a", "b", "c", "d"];
    let w = window(&lines, 2, ";");
    assert_eq!(w.start, 0);
    assert_eq!(w.lines.len(), 4);
  }

  #[test]
  fn trigger_at_file_edges() {
    let lines = ["x", "y", ";", "z"];
    assert_eq!(window(&lines, 0, ";").lines, &["x", "y"]);
    assert_eq!(window(&lines, 3, ";").lines, &["z"]);
  }

  #[test]
  fn trigger_on_delimiter_keeps_itself() {
    let lines = [";", ";", ";"];
    let w = window(&lines, 1, ";");
    assert_eq!(w.lines, &[";"]);
  }

  #[test]
  fn line_and_joined_trim() {
    let lines = ["", "  head  ", "\tbody\r", ""];
    let w = window(&lines, 1, ";");
    assert_eq!(w.line(1), Some("head"));
    assert_eq!(w.line(2), Some("body"));
    assert_eq!(w.line(9), None);
    assert_eq!(w.joined(), "head  \n\tbody");
  }
}
