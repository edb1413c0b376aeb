//! Reading the input directory.

use std::{
  fs,
  path::{Path, PathBuf},
};

use tapps_core::{SchoolDirectory, SeasonRecord};

use crate::{Error, Result};

/// Exact file name of the school directory within the input directory.
pub const SCHOOLS_FILE: &str = "Schools.json";

// ─── Directory scan ──────────────────────────────────────────────────────────

/// The recognised files of an input directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputListing {
  pub schools: Option<PathBuf>,
  /// Season files, sorted by file name.
  pub seasons: Vec<PathBuf>,
}

/// The year encoded in a season file name (`NNNN.json`), if it is one.
pub fn season_year_from_file_name(name: &str) -> Option<u32> {
  let stem = name.strip_suffix(".json")?;
  if stem.len() == 4 && stem.bytes().all(|b| b.is_ascii_digit()) {
    stem.parse().ok()
  } else {
    None
  }
}

/// List the schools file and season files in `dir`. Anything else is
/// ignored.
pub fn scan(dir: &Path) -> Result<InputListing> {
  if !dir.is_dir() {
    return Err(Error::MissingInputDirectory(dir.to_path_buf()));
  }

  let io_err = |source: std::io::Error| Error::Io { path: dir.to_path_buf(), source };
  let mut listing = InputListing::default();

  for entry in fs::read_dir(dir).map_err(io_err)? {
    let entry = entry.map_err(io_err)?;
    let path = entry.path();
    if !path.is_file() {
      continue;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
      continue;
    };

    if name == SCHOOLS_FILE {
      listing.schools = Some(path);
    } else if season_year_from_file_name(name).is_some() {
      listing.seasons.push(path);
    } else {
      tracing::debug!(file = %path.display(), "ignoring unrecognised input file");
    }
  }

  listing.seasons.sort();
  Ok(listing)
}

// ─── Decoding ────────────────────────────────────────────────────────────────

fn read(path: &Path) -> Result<String> {
  fs::read_to_string(path)
    .map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

/// Read and decode the school directory at `path`.
pub fn load_schools(path: &Path) -> Result<SchoolDirectory> {
  if !path.is_file() {
    return Err(Error::MissingSchoolsFile(path.to_path_buf()));
  }
  SchoolDirectory::from_json(&read(path)?)
    .map_err(|source| Error::Decode { path: path.to_path_buf(), source })
}

/// Read and decode a single season file.
pub fn load_season(path: &Path) -> Result<SeasonRecord> {
  let season = SeasonRecord::from_json(&read(path)?)
    .map_err(|source| Error::Decode { path: path.to_path_buf(), source })?;

  let named = path
    .file_name()
    .and_then(|n| n.to_str())
    .and_then(season_year_from_file_name);
  if let Some(named) = named
    && named != season.year
  {
    tracing::warn!(
      file = %path.display(),
      year = season.year,
      "season year does not match file name; using the recorded year"
    );
  }

  Ok(season)
}

// ─── Full load ───────────────────────────────────────────────────────────────

/// Everything read from the input directory.
#[derive(Debug)]
pub struct Inputs {
  pub schools: SchoolDirectory,
  /// Successfully decoded seasons, in file-name order.
  pub seasons: Vec<SeasonRecord>,
  /// Season files that could not be read or decoded.
  pub skipped: Vec<Error>,
}

/// Load the school directory and every season in `dir`.
///
/// A missing directory, a missing schools file, or an undecodable schools
/// file is fatal. A bad season file is logged, recorded in
/// [`Inputs::skipped`], and the rest still load.
pub fn load_inputs(dir: &Path) -> Result<Inputs> {
  let listing = scan(dir)?;

  let schools_path = listing
    .schools
    .ok_or_else(|| Error::MissingSchoolsFile(dir.join(SCHOOLS_FILE)))?;
  let schools = load_schools(&schools_path)?;
  tracing::info!(schools = schools.len(), "schools loaded");

  let mut seasons = Vec::with_capacity(listing.seasons.len());
  let mut skipped = Vec::new();
  for path in &listing.seasons {
    match load_season(path) {
      Ok(season) => {
        tracing::debug!(file = %path.display(), year = season.year, "season loaded");
        seasons.push(season);
      }
      Err(err) => {
        tracing::warn!(error = %err, "skipping season file");
        skipped.push(err);
      }
    }
  }
  tracing::info!(
    seasons = seasons.len(),
    skipped = skipped.len(),
    "years of competition loaded"
  );

  Ok(Inputs { schools, seasons, skipped })
}
