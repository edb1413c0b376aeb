//! Division history — for each known division, every school that placed in
//! it and the seasons it did so, split by place.
//!
//! Counts are never stored. They are the lengths of the year lists, computed
//! whenever they are read or serialised.

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{Division, Ledger, Place};

// ─── Division participant ────────────────────────────────────────────────────

/// A school's finishes within a single division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionParticipant {
  pub school_id:   String,
  pub school_name: Option<String>,
  first:           Vec<String>,
  second:          Vec<String>,
  third:           Vec<String>,
  fourth:          Vec<String>,
}

impl DivisionParticipant {
  pub fn new(school_id: impl Into<String>, school_name: Option<String>) -> Self {
    Self {
      school_id: school_id.into(),
      school_name,
      first: Vec::new(),
      second: Vec::new(),
      third: Vec::new(),
      fourth: Vec::new(),
    }
  }

  /// Seasons (as year strings) in which the school finished at `place`.
  pub fn years(&self, place: Place) -> &[String] {
    match place {
      Place::First => &self.first,
      Place::Second => &self.second,
      Place::Third => &self.third,
      Place::Fourth => &self.fourth,
    }
  }

  pub fn count(&self, place: Place) -> usize { self.years(place).len() }

  fn push_year(&mut self, place: Place, year: u32) {
    let years = match place {
      Place::First => &mut self.first,
      Place::Second => &mut self.second,
      Place::Third => &mut self.third,
      Place::Fourth => &mut self.fourth,
    };
    years.push(year.to_string());
  }
}

const fn years_field(place: Place) -> &'static str {
  match place {
    Place::First => "ChampionshipYears",
    Place::Second => "SecondPlaceYears",
    Place::Third => "ThirdPlaceYears",
    Place::Fourth => "FourthPlaceYears",
  }
}

const fn count_field(place: Place) -> &'static str {
  match place {
    Place::First => "Championships",
    Place::Second => "SecondPlaceFinishes",
    Place::Third => "ThirdPlaceFinishes",
    Place::Fourth => "FourthPlaceFinishes",
  }
}

impl Serialize for DivisionParticipant {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("DivisionParticipant", 10)?;
    state.serialize_field("SchoolId", &self.school_id)?;
    state.serialize_field("SchoolName", &self.school_name)?;
    for place in Place::all() {
      state.serialize_field(years_field(place), self.years(place))?;
      state.serialize_field(count_field(place), &self.count(place))?;
    }
    state.end()
  }
}

// ─── Division history ────────────────────────────────────────────────────────

/// Every school that placed in one division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivisionHistory {
  #[serde(rename = "DivisionId")]
  pub division_id:      String,
  #[serde(rename = "DivisionWinners")]
  pub division_winners: Vec<DivisionParticipant>,
}

impl DivisionHistory {
  pub fn winner(&self, school_id: &str) -> Option<&DivisionParticipant> {
    self.division_winners.iter().find(|w| w.school_id == school_id)
  }
}

/// Project the ledger onto a single division. Schools appear in ledger order;
/// the history is returned even when nobody placed in the division.
pub fn division_history(ledger: &Ledger, division: Division) -> DivisionHistory {
  let code = division.code();
  let mut history = DivisionHistory {
    division_id:      code.to_string(),
    division_winners: Vec::new(),
  };

  for participant in ledger {
    for place in Place::all() {
      for event in participant.stockpile(place) {
        if event.division != code {
          continue;
        }
        let slot = match history
          .division_winners
          .iter()
          .position(|w| w.school_id == participant.id)
        {
          Some(i) => i,
          None => {
            history.division_winners.push(DivisionParticipant::new(
              participant.id.clone(),
              participant.name.clone(),
            ));
            history.division_winners.len() - 1
          }
        };
        history.division_winners[slot].push_year(place, event.year);
      }
    }
  }

  history
}

/// Project the ledger onto every known division, in division order.
pub fn division_histories(ledger: &Ledger) -> Vec<DivisionHistory> {
  Division::all()
    .map(|division| division_history(ledger, division))
    .collect()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
