//! The three report views, built together from one fold.

use crate::{
  Annum, DivisionHistory, FoldSummary, Ledger, SchoolDirectory, SeasonRecord,
  annual_history, division_histories, fold_seasons,
};

/// Everything the emitter writes, plus the fold's bookkeeping.
#[derive(Debug, Clone)]
pub struct Reports {
  /// The ledger itself is the trophy-history view.
  pub trophy_cases: Ledger,
  pub annals:       Vec<Annum>,
  pub divisions:    Vec<DivisionHistory>,
  pub summary:      FoldSummary,
}

impl Reports {
  /// Fold `seasons` into a fresh ledger, then project it.
  pub fn build<'a, I>(seasons: I, directory: &SchoolDirectory) -> Self
  where
    I: IntoIterator<Item = &'a SeasonRecord>,
  {
    let mut ledger = Ledger::new();
    let summary = fold_seasons(&mut ledger, directory, seasons);
    Self::from_ledger(ledger, summary)
  }

  /// Project an already-folded ledger.
  pub fn from_ledger(ledger: Ledger, summary: FoldSummary) -> Self {
    let annals = annual_history(&ledger);
    let divisions = division_histories(&ledger);
    Self { trophy_cases: ledger, annals, divisions, summary }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Division, Place, School};

  fn directory() -> SchoolDirectory {
    [
      School::new("A", "Acme"),
      School::new("B", "Bayou"),
      School::new("C", "Cypress"),
    ]
    .into_iter()
    .collect()
  }

  fn seasons() -> Vec<SeasonRecord> {
    [
      r#"{ "Year": 2022,
           "Champion":    { "1a": "A", "4a": "B" },
           "SecondPlace": { "1a": "C", "4a": "Z" },
           "ThirdPlace":  { "1a": ["B", "C"], "4a": ["A"] },
           "FourthPlace": { "dI": "A" } }"#,
      r#"{ "Year": 2023,
           "Champion":    { "1a/2a": "A", "dV": "C" },
           "ThirdPlace":  { "dV": ["A", "B", "Y"] } }"#,
    ]
    .into_iter()
    .map(|json| SeasonRecord::from_json(json).unwrap())
    .collect()
  }

  #[test]
  fn views_are_consistent_projections_of_the_ledger() {
    let reports = Reports::build(&seasons(), &directory());

    // 13 triples, two of which name unknown schools.
    assert_eq!(reports.summary.recorded, 11);
    assert_eq!(reports.summary.dropped.len(), 2);
    assert_eq!(reports.annals.len(), reports.summary.recorded);
    assert_eq!(reports.trophy_cases.event_count(), reports.summary.recorded);

    for participant in &reports.trophy_cases {
      for place in Place::all() {
        let bucket = participant.stockpile(place).len();
        let annals = reports
          .annals
          .iter()
          .filter(|r| r.school_id == participant.id && r.place == place)
          .count();
        let divisions: usize = reports
          .divisions
          .iter()
          .filter_map(|h| h.winner(&participant.id))
          .map(|w| w.count(place))
          .sum();
        assert_eq!(annals, bucket, "{} {place:?}", participant.id);
        assert_eq!(divisions, bucket, "{} {place:?}", participant.id);
      }
    }
  }

  #[test]
  fn unknown_schools_never_become_participants() {
    let reports = Reports::build(&seasons(), &directory());
    assert_eq!(reports.trophy_cases.len(), 3);
    assert!(reports.trophy_cases.get("Z").is_none());
    assert!(reports.trophy_cases.get("Y").is_none());
    assert!(reports.annals.iter().all(|r| r.school_id != "Z" && r.school_id != "Y"));
  }

  #[test]
  fn every_division_present_in_division_view() {
    let reports = Reports::build(&seasons(), &directory());
    assert_eq!(reports.divisions.len(), Division::all().count());
    let empty = reports
      .divisions
      .iter()
      .find(|h| h.division_id == Division::SixA.code())
      .unwrap();
    assert!(empty.division_winners.is_empty());
  }

  #[test]
  fn no_seasons_yields_empty_views() {
    let none: [SeasonRecord; 0] = [];
    let reports = Reports::build(&none, &directory());
    assert!(reports.trophy_cases.is_empty());
    assert!(reports.annals.is_empty());
    assert_eq!(reports.divisions.len(), Division::all().count());
    assert_eq!(reports.summary.seasons, 0);
  }
}
