//! Fixed line patterns of the EAGLE console block layout.
//!
//! A block looks like:
//!
//! ```text
//! ;
//!     STATION1 26-02-25 20:08:40 EST  EAGLE 48.0.0.0.0-80.20.0
//!     Card 1101 Module OAM Line 42 Class CARR Severity 1
//!     ...
//! ;
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Station, date, time, `EST`, one free token, dotted/dashed release.
static BANNER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^(\S+)\s+(\d{2}-\d{2}-\d{2})\s+(\d{2}:\d{2}:\d{2})\s+EST\s+\S+\s+(\d+\.\d+\.\d+\.\d+\.\d+-\d+\.\d+\.\d+)",
  )
  .unwrap()
});

/// Card/module/line/class followed by the numeric severity.
static SEVERITY_DETAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"Card\s+(\d+)\s+Module\s+(\S+)\s+Line\s+(\d+)\s+Class\s+(\S+)\s+Severity\s+(\d+)")
    .unwrap()
});

/// Card/module/line/class without a severity (obit blocks).
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"Card\s+(\d+)\s+Module\s+(\S+)\s+Line\s+(\d+)\s+Class\s+(\S+)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner<'a> {
  pub station: &'a str,
  pub date: &'a str,
  pub time: &'a str,
  pub release: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityDetail<'a> {
  pub card: u64,
  pub module: &'a str,
  pub line: u64,
  pub class_code: &'a str,
  pub severity: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLine<'a> {
  pub card: &'a str,
  pub module: &'a str,
  pub line: &'a str,
  pub class_code: &'a str,
}

/// Match a (trimmed) banner line, anchored at its start.
pub fn banner(line: &str) -> Option<Banner<'_>> {
  let caps = BANNER_REGEX.captures(line)?;
  Some(Banner {
    station: caps.get(1)?.as_str(),
    date: caps.get(2)?.as_str(),
    time: caps.get(3)?.as_str(),
    release: caps.get(4)?.as_str(),
  })
}

/// Match a severity detail line anywhere in `line`.
///
/// Card and line numbers too large for `u64` count as a mismatch.
pub fn severity_detail(line: &str) -> Option<SeverityDetail<'_>> {
  let caps = SEVERITY_DETAIL_REGEX.captures(line)?;
  Some(SeverityDetail {
    card: caps.get(1)?.as_str().parse().ok()?,
    module: caps.get(2)?.as_str(),
    line: caps.get(3)?.as_str().parse().ok()?,
    class_code: caps.get(4)?.as_str(),
    severity: caps.get(5)?.as_str(),
  })
}

/// Match a card/module line anywhere in `line`.
pub fn module_line(line: &str) -> Option<ModuleLine<'_>> {
  let caps = MODULE_REGEX.captures(line)?;
  Some(ModuleLine {
    card: caps.get(1)?.as_str(),
    module: caps.get(2)?.as_str(),
    line: caps.get(3)?.as_str(),
    class_code: caps.get(4)?.as_str(),
  })
}
