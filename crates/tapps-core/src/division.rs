//! Division codes — the classification brackets a placement is awarded in.
//!
//! The set is fixed and iterated in a stable order. Everywhere outside this
//! module a division is just a string code, so a record carrying a key that is
//! not listed here is never rejected, only never matched.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// One of the known division brackets.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
pub enum Division {
  AllTapps,
  OneA,
  OneAndTwoA,
  TwoA,
  ThreeA,
  FourA,
  FiveA,
  SixA,
  DivisionOne,
  DivisionTwo,
  DivisionThree,
  DivisionFour,
  DivisionFive,
}

impl Division {
  /// Every known division, in processing order.
  pub fn all() -> impl Iterator<Item = Self> { Self::iter() }

  /// The key this division is stored under in a season file.
  pub const fn season_key(self) -> &'static str {
    match self {
      Self::AllTapps => "T",
      Self::OneA => "1a",
      Self::OneAndTwoA => "1a/2a",
      Self::TwoA => "2a",
      Self::ThreeA => "3a",
      Self::FourA => "4a",
      Self::FiveA => "5a",
      Self::SixA => "6a",
      Self::DivisionOne => "dI",
      Self::DivisionTwo => "dII",
      Self::DivisionThree => "dIII",
      Self::DivisionFour => "dIV",
      Self::DivisionFive => "dV",
    }
  }

  /// The code recorded on placement events and reported as `DivisionId`.
  pub const fn code(self) -> &'static str {
    match self {
      Self::AllTapps => "T",
      Self::OneA => "1a",
      Self::OneAndTwoA => "1a2a",
      Self::TwoA => "2a",
      Self::ThreeA => "3a",
      Self::FourA => "4a",
      Self::FiveA => "5a",
      Self::SixA => "6a",
      Self::DivisionOne => "DI",
      Self::DivisionTwo => "DII",
      Self::DivisionThree => "DIII",
      Self::DivisionFour => "DIV",
      Self::DivisionFive => "DV",
    }
  }

  /// Look a division up by its season-file key.
  pub fn from_season_key(key: &str) -> Option<Self> {
    Self::all().find(|d| d.season_key() == key)
  }
}

impl fmt::Display for Division {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}
