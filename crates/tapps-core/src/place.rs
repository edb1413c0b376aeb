//! Tournament finish rank.

use std::str::FromStr;

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::Error;

/// A finishing place. Iteration order is `First`, `Second`, `Third`,
/// `Fourth`; it selects buckets and orders output, nothing more.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  EnumIter,
  IntoStaticStr,
)]
pub enum Place {
  First,
  Second,
  Third,
  Fourth,
}

impl Place {
  /// Every place, in bucket order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }

  pub fn name(self) -> &'static str { self.into() }

  /// The field of a season file that lists this place's finishers.
  pub const fn season_field(self) -> &'static str {
    match self {
      Self::First => "Champion",
      Self::Second => "SecondPlace",
      Self::Third => "ThirdPlace",
      Self::Fourth => "FourthPlace",
    }
  }

  /// Display name of the trophy awarded for this place.
  pub const fn trophy_name(self) -> &'static str {
    match self {
      Self::First => "Champion",
      Self::Second => "Second Place",
      Self::Third => "Third Place",
      Self::Fourth => "Fourth Place",
    }
  }
}

impl FromStr for Place {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::all()
      .find(|p| p.name() == s)
      .ok_or_else(|| Error::UnknownPlace(s.to_string()))
  }
}
