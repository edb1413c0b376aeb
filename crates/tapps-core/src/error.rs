//! Error types for `tapps-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed record: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("season year must be a positive integer, got {0}")]
  InvalidYear(i64),

  #[error("school {0:?} is not in the school directory")]
  UnknownSchool(String),

  #[error("unknown place: {0:?}")]
  UnknownPlace(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
