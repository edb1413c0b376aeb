//! Writing the report views.

use std::{fs, path::PathBuf};

use serde::Serialize;
use tapps_core::Reports;

use crate::{Error, Result};

/// Trophy-case view: one entry per participant.
pub const HISTORY_FILE: &str = "TappsBaseballHistory.json";
/// Annual view: one entry per placement event.
pub const ANNALS_FILE: &str = "TappsBaseballAnnals.json";
/// Division view: one entry per known division.
pub const DIVISIONS_FILE: &str = "TappsBaseballDivisions.json";

/// What an [`Emitter::emit`] call managed to write.
#[derive(Debug, Default)]
pub struct EmitOutcome {
  pub written: Vec<PathBuf>,
  pub failed:  Vec<Error>,
}

impl EmitOutcome {
  pub fn is_complete(&self) -> bool { self.failed.is_empty() }
}

/// Serialises reports into an output directory.
#[derive(Debug, Clone)]
pub struct Emitter {
  dir:    PathBuf,
  pretty: bool,
}

impl Emitter {
  pub fn new(dir: impl Into<PathBuf>) -> Self {
    Self { dir: dir.into(), pretty: false }
  }

  /// Indent the JSON output.
  pub fn pretty(mut self, pretty: bool) -> Self {
    self.pretty = pretty;
    self
  }

  /// Write all three views. Each file is attempted regardless of whether the
  /// others succeeded.
  pub fn emit(&self, reports: &Reports) -> EmitOutcome {
    let mut outcome = EmitOutcome::default();

    if let Err(source) = fs::create_dir_all(&self.dir) {
      tracing::error!(dir = %self.dir.display(), error = %source, "cannot create output directory");
    }

    let results = [
      self.write(HISTORY_FILE, &reports.trophy_cases),
      self.write(ANNALS_FILE, &reports.annals),
      self.write(DIVISIONS_FILE, &reports.divisions),
    ];
    for result in results {
      match result {
        Ok(path) => {
          tracing::info!(file = %path.display(), "output file saved");
          outcome.written.push(path);
        }
        Err(err) => {
          tracing::error!(error = %err, "output file not saved");
          outcome.failed.push(err);
        }
      }
    }

    outcome
  }

  /// Serialise `value` to `name` inside the output directory.
  pub fn write<T: Serialize + ?Sized>(
    &self,
    name: &str,
    value: &T,
  ) -> Result<PathBuf> {
    let path = self.dir.join(name);
    let bytes = if self.pretty {
      serde_json::to_vec_pretty(value)?
    } else {
      serde_json::to_vec(value)?
    };
    fs::write(&path, bytes)
      .map_err(|source| Error::Io { path: path.clone(), source })?;
    Ok(path)
  }
}
