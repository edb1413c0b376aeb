//! One end-to-end run: load inputs, fold and project, write the views.

use std::path::Path;

use anyhow::Context as _;
use tapps_core::Reports;
use tapps_json::Emitter;

use crate::settings::Options;

/// Run the job with `options`, resolving folders under `cwd`.
///
/// Fails on a fatal input error or when any output file could not be
/// written. Dropped placements and skipped season files are only logged.
pub fn run(options: &Options, cwd: &Path) -> anyhow::Result<Reports> {
  let input_dir = options.input_dir(cwd);
  let output_dir = options.output_dir(cwd);
  tracing::debug!(input = %input_dir.display(), output = %output_dir.display(), "options gathered");

  let inputs = tapps_json::load_inputs(&input_dir)
    .with_context(|| format!("cannot load inputs from {}", input_dir.display()))?;

  let reports = Reports::build(&inputs.seasons, &inputs.schools);
  if !reports.summary.is_clean() {
    tracing::warn!(
      dropped = reports.summary.dropped.len(),
      "some placements named unknown schools and were dropped"
    );
  }

  let outcome = Emitter::new(output_dir).pretty(options.pretty).emit(&reports);
  if !outcome.is_complete() {
    anyhow::bail!("{} of 3 output files could not be written", outcome.failed.len());
  }

  tracing::info!(
    participants = reports.trophy_cases.len(),
    events = reports.annals.len(),
    skipped_files = inputs.skipped.len(),
    "championship history written"
  );
  Ok(reports)
}
