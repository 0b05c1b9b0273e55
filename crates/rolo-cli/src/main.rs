//! `rolo` — a line-oriented personal organizer for contacts, events and todos.
//!
//! # Usage
//!
//! ```
//! rolo
//! rolo --config ~/.config/rolo/rolo.toml
//! rolo --data-file /tmp/scratch.json
//! ```
//!
//! Type `help` at the prompt for the list of commands.

mod config;
mod parser;
mod render;
mod session;

use std::{io, path::PathBuf};

use clap::Parser;
use rolo_store_json::JsonStore;
use tracing_subscriber::EnvFilter;

use crate::{config::CliConfig, session::Session};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal organizer for contacts, events and todos")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "rolo.toml")]
  config: PathBuf,

  /// Data file to use instead of the configured one.
  #[arg(short, long, value_name = "FILE")]
  data_file: Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let cfg = CliConfig::load(&config::expand_tilde(&cli.config))?;

  // Logs go to stderr so they never interleave with REPL output on stdout.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(cfg.level_filter().into())
        .from_env_lossy(),
    )
    .init();

  let data_file = cli
    .data_file
    .map(|p| config::expand_tilde(&p))
    .unwrap_or(cfg.data_file);
  tracing::debug!(data_file = %data_file.display(), autosave = cfg.autosave, "starting");

  let mut session = Session::open(JsonStore::open(&data_file), cfg.autosave)?;
  session.run(io::stdin().lock(), io::stdout().lock())
}
