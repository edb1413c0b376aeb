//! The championship fold — consumes season records into the ledger.
//!
//! Every season is walked place by place and division by division over the
//! fixed division set. Each `(place, division, school)` triple either becomes
//! one placement event on that school's participant, or, when the school is
//! not in the directory, is dropped and reported.

use crate::{Division, Ledger, Place, SchoolDirectory, SeasonRecord};

/// A placement that could not be recorded because its school is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedPlacement {
  pub place:     Place,
  pub year:      u32,
  pub division:  Division,
  pub school_id: String,
}

/// Outcome of folding one or more seasons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldSummary {
  pub seasons:  usize,
  /// Placement events appended to the ledger.
  pub recorded: usize,
  pub dropped:  Vec<DroppedPlacement>,
}

impl FoldSummary {
  pub fn is_clean(&self) -> bool { self.dropped.is_empty() }

  fn merge(&mut self, other: FoldSummary) {
    self.seasons += other.seasons;
    self.recorded += other.recorded;
    self.dropped.extend(other.dropped);
  }
}

/// Fold a single season into `ledger`.
pub fn fold_season(
  ledger: &mut Ledger,
  directory: &SchoolDirectory,
  season: &SeasonRecord,
) -> FoldSummary {
  let mut summary = FoldSummary { seasons: 1, ..FoldSummary::default() };

  for place in Place::all() {
    if !season.has_entries(place) {
      continue;
    }
    for key in season.unrecognized_keys(place) {
      tracing::debug!(
        year = season.year,
        place = place.name(),
        key,
        "ignoring unrecognised division key"
      );
    }

    for division in Division::all() {
      for school_id in season.school_ids(place, division) {
        match ledger.resolve_or_create(school_id, directory) {
          Ok(participant) => {
            participant.append_event(place, season.year, division.code());
            summary.recorded += 1;
          }
          Err(err) => {
            tracing::error!(
              error = %err,
              year = season.year,
              place = place.name(),
              division = division.code(),
              "school not in directory; placement dropped"
            );
            summary.dropped.push(DroppedPlacement {
              place,
              year: season.year,
              division,
              school_id: school_id.clone(),
            });
          }
        }
      }
    }

    tracing::debug!(year = season.year, field = place.season_field(), "place folded");
  }

  summary
}

/// Fold every season, in the order given, into `ledger`.
pub fn fold_seasons<'a, I>(
  ledger: &mut Ledger,
  directory: &SchoolDirectory,
  seasons: I,
) -> FoldSummary
where
  I: IntoIterator<Item = &'a SeasonRecord>,
{
  let mut summary = FoldSummary::default();
  for season in seasons {
    summary.merge(fold_season(ledger, directory, season));
  }
  tracing::info!(
    seasons = summary.seasons,
    recorded = summary.recorded,
    dropped = summary.dropped.len(),
    participants = ledger.len(),
    "championship history folded"
  );
  summary
}
