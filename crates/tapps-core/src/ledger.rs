//! The participant ledger — every school's accumulated trophy case, keyed by
//! school id.
//!
//! The ledger is the single owner of participant state. Participants are
//! created lazily from the school directory the first time a school places,
//! are never removed, and only ever grow by appending placement events.

use std::collections::HashMap;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{Error, Place, Result, SchoolDirectory};

// ─── Placement events ────────────────────────────────────────────────────────

/// A single finish: the season and the division code it was earned in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementEvent {
  #[serde(rename = "ID")]
  pub year:     u32,
  #[serde(rename = "Division")]
  pub division: String,
}

// ─── Trophy case ─────────────────────────────────────────────────────────────

/// Four stockpiles of placement events, one per place, each in insertion
/// order. Duplicate events are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrophyCase {
  first:  Vec<PlacementEvent>,
  second: Vec<PlacementEvent>,
  third:  Vec<PlacementEvent>,
  fourth: Vec<PlacementEvent>,
}

impl TrophyCase {
  pub fn stockpile(&self, place: Place) -> &[PlacementEvent] {
    match place {
      Place::First => &self.first,
      Place::Second => &self.second,
      Place::Third => &self.third,
      Place::Fourth => &self.fourth,
    }
  }

  fn stockpile_mut(&mut self, place: Place) -> &mut Vec<PlacementEvent> {
    match place {
      Place::First => &mut self.first,
      Place::Second => &mut self.second,
      Place::Third => &mut self.third,
      Place::Fourth => &mut self.fourth,
    }
  }

  /// Number of finishes at `place`.
  pub fn total(&self, place: Place) -> usize { self.stockpile(place).len() }

  /// Number of finishes across every place.
  pub fn event_count(&self) -> usize {
    Place::all().map(|p| self.total(p)).sum()
  }
}

/// Serialised shape of one stockpile; `Total` is derived on write.
#[derive(Serialize)]
struct TrophyView<'a> {
  #[serde(rename = "Total")]
  total:     usize,
  #[serde(rename = "Name")]
  name:      &'static str,
  #[serde(rename = "Stockpile")]
  stockpile: &'a [PlacementEvent],
}

const fn finishes_field(place: Place) -> &'static str {
  match place {
    Place::First => "FirstPlaceFinishes",
    Place::Second => "SecondPlaceFinishes",
    Place::Third => "ThirdPlaceFinishes",
    Place::Fourth => "FourthPlaceFinishes",
  }
}

impl Serialize for TrophyCase {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("TrophyCase", 4)?;
    for place in Place::all() {
      let stockpile = self.stockpile(place);
      state.serialize_field(finishes_field(place), &TrophyView {
        total: stockpile.len(),
        name: place.trophy_name(),
        stockpile,
      })?;
    }
    state.end()
  }
}

// ─── Participant ─────────────────────────────────────────────────────────────

/// A school's trophy record across every folded season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
  #[serde(rename = "Id")]
  pub id:          String,
  /// Absent only when the directory entry carried no name.
  #[serde(rename = "Name")]
  pub name:        Option<String>,
  #[serde(rename = "TrophyCase")]
  pub trophy_case: TrophyCase,
}

impl Participant {
  pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
    Self { id: id.into(), name, trophy_case: TrophyCase::default() }
  }

  /// Append a finish to the stockpile for `place`.
  pub fn append_event(
    &mut self,
    place: Place,
    year: u32,
    division: impl Into<String>,
  ) {
    self
      .trophy_case
      .stockpile_mut(place)
      .push(PlacementEvent { year, division: division.into() });
  }

  pub fn stockpile(&self, place: Place) -> &[PlacementEvent] {
    self.trophy_case.stockpile(place)
  }
}

// ─── Ledger ──────────────────────────────────────────────────────────────────

/// All participants, iterated in the order they were first created.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
  participants: Vec<Participant>,
  index:        HashMap<String, usize>,
}

impl Ledger {
  pub fn new() -> Self { Self::default() }

  /// Return the participant for `school_id`, creating it from `directory` on
  /// first sight.
  ///
  /// Fails with [`Error::UnknownSchool`] when the id is not in the directory;
  /// the ledger is left untouched in that case.
  pub fn resolve_or_create(
    &mut self,
    school_id: &str,
    directory: &SchoolDirectory,
  ) -> Result<&mut Participant> {
    if let Some(&i) = self.index.get(school_id) {
      return Ok(&mut self.participants[i]);
    }

    let school = directory
      .get(school_id)
      .ok_or_else(|| Error::UnknownSchool(school_id.to_string()))?;

    tracing::debug!(school_id, "creating participant");
    if school.name.is_none() {
      tracing::warn!(school_id, "school has no display name");
    }

    let i = self.participants.len();
    self
      .participants
      .push(Participant::new(school_id, school.name.clone()));
    self.index.insert(school_id.to_string(), i);
    Ok(&mut self.participants[i])
  }

  pub fn get(&self, school_id: &str) -> Option<&Participant> {
    self.index.get(school_id).map(|&i| &self.participants[i])
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
    self.participants.iter()
  }

  pub fn len(&self) -> usize { self.participants.len() }

  pub fn is_empty(&self) -> bool { self.participants.is_empty() }

  /// Number of placement events held across every participant.
  pub fn event_count(&self) -> usize {
    self.participants.iter().map(|p| p.trophy_case.event_count()).sum()
  }
}

impl<'a> IntoIterator for &'a Ledger {
  type IntoIter = std::slice::Iter<'a, Participant>;
  type Item = &'a Participant;

  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Serialize for Ledger {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(&self.participants)
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::School;

  fn directory() -> SchoolDirectory {
    [School::new("A", "Acme"), School::new("B", "Bayou")]
      .into_iter()
      .collect()
  }

  #[test]
  fn creates_participant_from_directory() {
    let dir = directory();
    let mut ledger = Ledger::new();

    let p = ledger.resolve_or_create("A", &dir).unwrap();
    assert_eq!(p.id, "A");
    assert_eq!(p.name.as_deref(), Some("Acme"));
    assert_eq!(p.trophy_case.event_count(), 0);
    assert_eq!(ledger.len(), 1);
  }

  #[test]
  fn resolve_is_idempotent() {
    let dir = directory();
    let mut ledger = Ledger::new();

    ledger
      .resolve_or_create("A", &dir)
      .unwrap()
      .append_event(Place::First, 2020, "1a");
    let again = ledger.resolve_or_create("A", &dir).unwrap();
    assert_eq!(again.stockpile(Place::First).len(), 1);
    assert_eq!(ledger.len(), 1);
  }

  #[test]
  fn unknown_school_leaves_ledger_untouched() {
    let dir = directory();
    let mut ledger = Ledger::new();

    let err = ledger.resolve_or_create("Z", &dir).unwrap_err();
    assert!(matches!(err, Error::UnknownSchool(ref id) if id == "Z"));
    assert!(ledger.is_empty());
    assert!(ledger.get("Z").is_none());
  }

  #[test]
  fn events_land_in_their_place_bucket_in_order() {
    let mut p = Participant::new("A", Some("Acme".into()));
    p.append_event(Place::Third, 2001, "2a");
    p.append_event(Place::Third, 1999, "3a");
    p.append_event(Place::Second, 2005, "T");

    assert_eq!(p.stockpile(Place::Third), [
      PlacementEvent { year: 2001, division: "2a".into() },
      PlacementEvent { year: 1999, division: "3a".into() },
    ]);
    assert_eq!(p.stockpile(Place::Second).len(), 1);
    assert!(p.stockpile(Place::First).is_empty());
    assert!(p.stockpile(Place::Fourth).is_empty());
  }

  #[test]
  fn duplicate_events_accumulate() {
    let mut p = Participant::new("A", None);
    p.append_event(Place::First, 2010, "1a");
    p.append_event(Place::First, 2010, "1a");
    assert_eq!(p.trophy_case.total(Place::First), 2);
  }

  #[test]
  fn ledger_iterates_in_creation_order() {
    let dir = directory();
    let mut ledger = Ledger::new();
    ledger.resolve_or_create("B", &dir).unwrap();
    ledger.resolve_or_create("A", &dir).unwrap();
    ledger.resolve_or_create("B", &dir).unwrap();

    let ids: Vec<_> = ledger.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["B", "A"]);
  }

  #[test]
  fn serializes_trophy_case_with_derived_totals() {
    let mut p = Participant::new("A", Some("Acme".into()));
    p.append_event(Place::First, 2024, "1a");

    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["Id"], "A");
    assert_eq!(value["Name"], "Acme");
    assert_eq!(
      value["TrophyCase"]["FirstPlaceFinishes"],
      json!({
        "Total": 1,
        "Name": "Champion",
        "Stockpile": [{ "ID": 2024, "Division": "1a" }]
      })
    );
    assert_eq!(value["TrophyCase"]["FourthPlaceFinishes"]["Total"], 0);
    assert_eq!(
      value["TrophyCase"]["FourthPlaceFinishes"]["Name"],
      "Fourth Place"
    );
  }
}
