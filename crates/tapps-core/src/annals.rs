//! Annual history — the ledger flattened to one row per placement event.

use serde::{Serialize, Serializer};

use crate::{Ledger, Place};

/// One placement event, denormalised with its school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annum {
  #[serde(rename = "SchoolId")]
  pub school_id:   String,
  #[serde(rename = "SchoolName")]
  pub school_name: Option<String>,
  #[serde(rename = "Finish")]
  pub place:       Place,
  #[serde(rename = "SeasonYear", serialize_with = "as_string")]
  pub year:        u32,
  #[serde(rename = "Division")]
  pub division:    String,
}

fn as_string<S: Serializer>(year: &u32, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.collect_str(year)
}

/// Project the ledger into annual-history rows: participants in ledger order,
/// then places in rank order, then events in stockpile order. Nothing is
/// filtered or deduplicated.
pub fn annual_history(ledger: &Ledger) -> Vec<Annum> {
  ledger
    .iter()
    .flat_map(|participant| {
      Place::all().flat_map(move |place| {
        participant.stockpile(place).iter().map(move |event| Annum {
          school_id: participant.id.clone(),
          school_name: participant.name.clone(),
          place,
          year: event.year,
          division: event.division.clone(),
        })
      })
    })
    .collect()
}
