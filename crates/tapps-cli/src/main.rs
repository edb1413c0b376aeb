//! `tapps-champions` — builds the TAPPS baseball championship history.
//!
//! Reads `Schools.json` and every `NNNN.json` season file from the input
//! folder, folds them into per-school trophy cases, and writes the trophy,
//! annual and division views to the output folder.
//!
//! # Usage
//!
//! ```text
//! tapps-champions
//! tapps-champions --config appsettings.json --input Data/Input --pretty
//! ```

mod job;
mod settings;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use settings::Options;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "TAPPS baseball championship history")]
struct Cli {
  /// Path to the JSON settings file.
  #[arg(short, long, default_value = "appsettings.json")]
  config: PathBuf,

  /// Input folder, relative to the working directory.
  #[arg(short, long)]
  input: Option<String>,

  /// Output folder, relative to the working directory.
  #[arg(short, long)]
  output: Option<String>,

  /// Indent the JSON output.
  #[arg(long)]
  pretty: bool,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let options = Options::load(&cli.config)?
    .with_overrides(cli.input, cli.output, cli.pretty);
  let cwd = std::env::current_dir().context("cannot determine working directory")?;

  job::run(&options, &cwd)?;
  Ok(())
}
