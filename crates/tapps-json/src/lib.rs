//! JSON-on-disk adapter for the championship history job.
//!
//! Scans an input directory for the schools file and per-season files,
//! decodes them into [`tapps_core`] types, and writes the three report views
//! back out as JSON.

mod input;
mod output;

pub mod error;

pub use error::{Error, Result};
pub use input::{
  InputListing, Inputs, SCHOOLS_FILE, load_inputs, load_schools, load_season,
  scan, season_year_from_file_name,
};
pub use output::{
  ANNALS_FILE, DIVISIONS_FILE, EmitOutcome, Emitter, HISTORY_FILE,
};
