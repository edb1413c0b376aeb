//! Error type for `tapps-json`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("input directory not found: {}", .0.display())]
  MissingInputDirectory(PathBuf),

  #[error("schools file not found: {}", .0.display())]
  MissingSchoolsFile(PathBuf),

  #[error("failed to decode {}: {source}", .path.display())]
  Decode {
    path:   PathBuf,
    source: tapps_core::Error,
  },

  #[error("i/o error on {}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

impl Error {
  /// The file or directory the error concerns.
  pub fn path(&self) -> Option<&std::path::Path> {
    match self {
      Self::MissingInputDirectory(path)
      | Self::MissingSchoolsFile(path)
      | Self::Decode { path, .. }
      | Self::Io { path, .. } => Some(path),
      Self::Json(_) => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
