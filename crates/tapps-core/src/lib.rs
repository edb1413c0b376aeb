//! Championship history aggregation for TAPPS baseball.
//!
//! Folds per-season tournament finishes into a ledger of participants keyed
//! by school id, then projects that ledger into the annual and division views.
//! Pure and synchronous; reading and writing files lives in `tapps-json`.

pub mod annals;
pub mod division;
pub mod divisions;
pub mod error;
pub mod fold;
pub mod ledger;
pub mod place;
pub mod report;
pub mod school;
pub mod season;

pub use annals::{Annum, annual_history};
pub use division::Division;
pub use divisions::{
  DivisionHistory, DivisionParticipant, division_histories, division_history,
};
pub use error::{Error, Result};
pub use fold::{DroppedPlacement, FoldSummary, fold_season, fold_seasons};
pub use ledger::{Ledger, Participant, PlacementEvent, TrophyCase};
pub use place::Place;
pub use report::Reports;
pub use school::{School, SchoolDirectory};
pub use season::{Payload, Placements, SeasonRecord};
