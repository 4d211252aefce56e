//! Console wall clock (fixed EST offset) to the IST string the front end shows.
//!
//! The conversion builds the absolute instant at the source offset, shifts it
//! by a fixed amount, renders the UTC fields and appends the destination
//! suffix. The suffix is a label only; it is not derived from the arithmetic.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::config::Config;
use crate::error::EngineError;

/// Normalize a banner date (`YY-MM-DD`, 20xx) and time (`HH:MM:SS`).
///
/// `26-02-25` + `20:08:40` gives `2026-02-26T11:38:40.000+05:30` with the
/// default config.
pub fn normalize(date: &str, time: &str, config: &Config) -> Result<String, EngineError> {
  let naive = parse_wall_clock(date, time)?;

  let offset = FixedOffset::east_opt(config.source_offset_minutes * 60)
    .ok_or_else(|| EngineError::config("source_offset_minutes", "out of range"))?;
  let local = offset
    .from_local_datetime(&naive)
    .single()
    .ok_or_else(|| EngineError::timestamp(date, "ambiguous local time"))?;

  let shifted = local
    .checked_add_signed(Duration::minutes(config.shift_minutes))
    .ok_or_else(|| EngineError::timestamp(date, "shift overflows"))?;

  Ok(format!(
    "{}{}",
    shifted.with_timezone(&Utc).format("%Y-%m-%dT%H:%M:%S%.3f"),
    config.destination_suffix
  ))
}

fn parse_wall_clock(date: &str, time: &str) -> Result<NaiveDateTime, EngineError> {
  let parts: Vec<&str> = date.split('-').collect();
  let [yy, mm, dd] = parts.as_slice() else {
    return Err(EngineError::timestamp(date, "expected YY-MM-DD"));
  };
  let field = |s: &str| -> Result<u32, EngineError> {
    s.parse::<u32>()
      .map_err(|e| EngineError::timestamp(date, &e.to_string()))
  };
  let yy = field(*yy)?;
  if yy > 99 {
    return Err(EngineError::timestamp(date, "year must be two digits"));
  }
  let year = 2000 + yy as i32;

  let day = NaiveDate::from_ymd_opt(year, field(*mm)?, field(*dd)?)
    .ok_or_else(|| EngineError::timestamp(date, "no such calendar date"))?;
  let clock = NaiveTime::parse_from_str(time, "%H:%M:%S")
    .map_err(|e| EngineError::timestamp(time, &e.to_string()))?;

  Ok(day.and_time(clock))
}
