//! Frequency tables over a finished report, for the overview screen.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{Report, SeverityClass, SeverityRecord};

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency {
  pub key: String,
  pub count: usize,
}

/// Per-class grouping of severity records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOverview {
  pub severity_class: SeverityClass,
  pub total: usize,
  /// Grouped by the verbatim detail line.
  pub by_header: Vec<Frequency>,
  pub by_card: Vec<Frequency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
  pub file_name: String,
  pub eagle_station: String,
  pub eagle_rel: String,
  pub severities: Vec<ClassOverview>,
  pub obit_total: usize,
  pub obits_by_reason: Vec<Frequency>,
}

/// Summarize `report` without modifying it.
pub fn summarize(report: &Report) -> Overview {
  let severities = SeverityClass::ALL
    .iter()
    .map(|&class| {
      let records = report.severities(class);
      ClassOverview {
        severity_class: class,
        total: records.len(),
        by_header: tally(records.iter().map(|r| r.sev_header.clone())),
        by_card: tally(records.iter().map(card_key)),
      }
    })
    .collect();

  Overview {
    file_name: report.file_name.clone(),
    eagle_station: report.identity.station.clone(),
    eagle_rel: report.identity.release.clone(),
    severities,
    obit_total: report.obit_count,
    obits_by_reason: tally(report.obits.iter().map(|o| o.reason.clone())),
  }
}

fn card_key(record: &SeverityRecord) -> String {
  record.card.to_string()
}

/// Count keys, most frequent first; ties ordered by key.
fn tally(keys: impl Iterator<Item = String>) -> Vec<Frequency> {
  let mut counts: HashMap<String, usize> = HashMap::new();
  for key in keys {
    *counts.entry(key).or_insert(0) += 1;
  }
  let mut rows: Vec<Frequency> = counts
    .into_iter()
    .map(|(key, count)| Frequency { key, count })
    .collect();
  rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
  rows
}
