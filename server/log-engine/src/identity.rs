//! Locate the station id and firmware release in the system banner.

use tracing::warn;

use crate::config::Config;
use crate::types::EagleIdentity;

/// Scan `lines` for the first banner carrying the zone and product markers.
///
/// A candidate line must hold the zone marker as its third token or later,
/// and the product marker after it. Station id is the first token; release is
/// the token right after the product marker.
pub fn scan(lines: &[&str], config: &Config) -> EagleIdentity {
  let zone = config.zone_marker.as_str();
  let product = config.product_marker.as_str();

  for line in lines {
    if !(line.contains(zone) && line.contains(product)) {
      continue;
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let zone_idx = parts.iter().position(|p| *p == zone);
    let product_idx = parts.iter().position(|p| *p == product);

    if let (Some(z), Some(p)) = (zone_idx, product_idx) {
      if z > 1 && p > z {
        return EagleIdentity {
          station: parts[0].to_string(),
          release: parts.get(p + 1).map(|s| s.to_string()).unwrap_or_default(),
        };
      }
    }
  }

  warn!("eagle release and station not found");
  EagleIdentity::default()
}

#[cfg(test)]
mod tests {
  use super::*;

  const BANNER: &str =
    "    tklc1111101 25-02-26 20:08:40 EST  EAGLE 48.0.0.0.0-80.20.0 Upgrade Phase 3";

  #[test]
  fn picks_station_and_release() {
    let id = scan(&["boot", BANNER], &Config::default());
    assert_eq!(id.station, "tklc1111101");
    assert_eq!(id.release, "48.0.0.0.0-80.20.0");
  }

  #[test]
  fn product_before_zone_does_not_match() {
    let line = "tklc1111101 25-02-26 EAGLE 48.0.0.0.0-80.20.0 EST";
    let id = scan(&[line], &Config::default());
    assert!(id.is_empty());
  }

  #[test]
  fn zone_marker_too_early_does_not_match() {
    let line = "tklc1111101 EST EAGLE 48.0.0.0.0-80.20.0";
    assert!(scan(&[line], &Config::default()).is_empty());
  }

  #[test]
  fn substring_only_markers_are_skipped_and_scan_continues() {
    // "ESTABLISHED" and "EAGLEX" satisfy the substring check only.
    let noise = "link ESTABLISHED on EAGLEX card";
    let id = scan(&[noise, BANNER], &Config::default());
    assert_eq!(id.station, "tklc1111101");
  }

  #[test]
  fn first_qualifying_line_wins() {
    let later = "other 25-02-26 21:00:00 EST EAGLE 47.0.0.0.0-79.1.0";
    let id = scan(&[BANNER, later], &Config::default());
    assert_eq!(id.release, "48.0.0.0.0-80.20.0");
  }

  #[test]
  fn product_marker_as_last_token_gives_empty_release() {
    let line = "stn 25-02-26 EST EAGLE";
    let id = scan(&[line], &Config::default());
    assert_eq!(id.station, "stn");
    assert_eq!(id.release, "");
  }
}
