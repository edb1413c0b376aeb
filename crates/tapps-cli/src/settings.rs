//! Run configuration: the `Options` section of `appsettings.json`, overlaid
//! with `TAPPS__`-prefixed environment variables and command-line flags.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

// ─── Shape ────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct Settings {
  #[serde(rename = "Options", alias = "options", default)]
  options: Options,
}

/// Folder locations and output formatting.
///
/// Keys are accepted in their `appsettings.json` spelling or lowercased, since
/// environment variables arrive lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
  #[serde(rename = "InputFolder", alias = "inputfolder")]
  pub input_folder:  String,
  #[serde(rename = "OutputFolder", alias = "outputfolder")]
  pub output_folder: String,
  #[serde(rename = "Pretty", alias = "pretty")]
  pub pretty:        bool,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      input_folder:  "Data/Input".into(),
      output_folder: "Data/Output".into(),
      pretty:        false,
    }
  }
}

// ─── Loading ──────────────────────────────────────────────────────────────────

impl Options {
  /// Read options from `file` (optional) and the environment.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(
        config::Environment::with_prefix("TAPPS")
          .prefix_separator("__")
          .separator("__")
          .try_parsing(true),
      )
      .build()
      .with_context(|| format!("failed to read settings from {}", file.display()))?;

    let settings: Settings = settings
      .try_deserialize()
      .context("failed to deserialise Options")?;
    Ok(settings.options)
  }

  /// Apply command-line overrides.
  pub fn with_overrides(
    mut self,
    input: Option<String>,
    output: Option<String>,
    pretty: bool,
  ) -> Self {
    if let Some(input) = input {
      self.input_folder = input;
    }
    if let Some(output) = output {
      self.output_folder = output;
    }
    self.pretty |= pretty;
    self
  }

  pub fn input_dir(&self, cwd: &Path) -> PathBuf {
    resolve(cwd, &self.input_folder)
  }

  pub fn output_dir(&self, cwd: &Path) -> PathBuf {
    resolve(cwd, &self.output_folder)
  }
}

/// Resolve a configured folder under the working directory. A leading
/// separator does not make the folder absolute.
fn resolve(cwd: &Path, folder: &str) -> PathBuf {
  cwd.join(folder.trim_start_matches(['/', '\\']))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
