//! Season records — one year of tournament finishes, as read from a season
//! file.
//!
//! A season lists, per place, a map from division key to the school(s) that
//! finished there. First, second and fourth place name a single school; third
//! place names a list, since co-placements happen there.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Division, Error, Place, Result};

// ─── Payloads ────────────────────────────────────────────────────────────────

/// The value stored against a division key: one school id or several.
pub trait Payload {
  fn school_ids(&self) -> &[String];
}

impl Payload for String {
  fn school_ids(&self) -> &[String] {
    if self.is_empty() {
      &[]
    } else {
      std::slice::from_ref(self)
    }
  }
}

impl Payload for Vec<String> {
  fn school_ids(&self) -> &[String] { self }
}

// ─── Placements ──────────────────────────────────────────────────────────────

/// Division key → payload, exactly as it appears under one place of a season
/// file. Unknown keys are kept so they can be reported; `null` values are
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Placements<P>(BTreeMap<String, Option<P>>);

impl<P: Payload> Placements<P> {
  /// School ids placed in `division`; empty when the division is absent.
  pub fn school_ids(&self, division: Division) -> &[String] {
    match self.0.get(division.season_key()) {
      Some(Some(payload)) => payload.school_ids(),
      _ => &[],
    }
  }

  /// Keys that do not name any known division.
  pub fn unrecognized_keys(&self) -> impl Iterator<Item = &str> {
    self
      .0
      .keys()
      .map(String::as_str)
      .filter(|key| Division::from_season_key(key).is_none())
  }

  pub fn is_empty(&self) -> bool { self.0.values().all(Option::is_none) }
}

impl Placements<Vec<String>> {
  /// Remove blank ids from every list, so they count as absent just as a
  /// blank single id does.
  fn drop_blank_ids(&mut self) {
    for ids in self.0.values_mut().flatten() {
      ids.retain(|id| !id.is_empty());
    }
  }
}

// ─── Season record ───────────────────────────────────────────────────────────

/// The on-disk shape of a season file.
#[derive(Debug, Deserialize)]
struct RawSeason {
  #[serde(rename = "Year")]
  year:         i64,
  #[serde(rename = "Champion", default)]
  champion:     Option<Placements<String>>,
  #[serde(rename = "SecondPlace", default)]
  second_place: Option<Placements<String>>,
  #[serde(rename = "ThirdPlace", default)]
  third_place:  Option<Placements<Vec<String>>>,
  #[serde(rename = "FourthPlace", default)]
  fourth_place: Option<Placements<String>>,
}

/// One decoded season. `year` is always positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonRecord {
  pub year:         u32,
  pub champion:     Placements<String>,
  pub second_place: Placements<String>,
  pub third_place:  Placements<Vec<String>>,
  pub fourth_place: Placements<String>,
}

impl SeasonRecord {
  /// Decode a season from JSON text.
  pub fn from_json(input: &str) -> Result<Self> {
    let raw: RawSeason = serde_json::from_str(input)?;
    raw.try_into()
  }

  /// Decode a season from an already-parsed JSON value.
  pub fn from_value(value: serde_json::Value) -> Result<Self> {
    let raw: RawSeason = serde_json::from_value(value)?;
    raw.try_into()
  }

  /// School ids that finished in `place` within `division`.
  pub fn school_ids(&self, place: Place, division: Division) -> &[String] {
    match place {
      Place::First => self.champion.school_ids(division),
      Place::Second => self.second_place.school_ids(division),
      Place::Third => self.third_place.school_ids(division),
      Place::Fourth => self.fourth_place.school_ids(division),
    }
  }

  /// Whether any division entry is present for `place`.
  pub fn has_entries(&self, place: Place) -> bool {
    match place {
      Place::First => !self.champion.is_empty(),
      Place::Second => !self.second_place.is_empty(),
      Place::Third => !self.third_place.is_empty(),
      Place::Fourth => !self.fourth_place.is_empty(),
    }
  }

  /// Division keys under `place` that no known division claims.
  pub fn unrecognized_keys(&self, place: Place) -> Vec<&str> {
    match place {
      Place::First => self.champion.unrecognized_keys().collect(),
      Place::Second => self.second_place.unrecognized_keys().collect(),
      Place::Third => self.third_place.unrecognized_keys().collect(),
      Place::Fourth => self.fourth_place.unrecognized_keys().collect(),
    }
  }
}

impl TryFrom<RawSeason> for SeasonRecord {
  type Error = Error;

  fn try_from(raw: RawSeason) -> Result<Self> {
    let year = u32::try_from(raw.year)
      .ok()
      .filter(|y| *y > 0)
      .ok_or(Error::InvalidYear(raw.year))?;

    let mut third_place = raw.third_place.unwrap_or_default();
    third_place.drop_blank_ids();

    Ok(Self {
      year,
      champion: raw.champion.unwrap_or_default(),
      second_place: raw.second_place.unwrap_or_default(),
      third_place,
      fourth_place: raw.fourth_place.unwrap_or_default(),
    })
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
