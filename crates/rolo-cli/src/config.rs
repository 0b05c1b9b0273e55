//! Runtime configuration for the `rolo` binary.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// Settings read from the optional TOML file and `ROLO_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  /// Where the organizer's data is kept.
  pub data_file: PathBuf,
  /// Default log level when `RUST_LOG` is not set.
  pub log_level: String,
  /// Save after every successful mutating command. When off, data is saved
  /// once on `exit`.
  pub autosave:  bool,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      data_file: PathBuf::from("data/rolo.json"),
      log_level: "warn".to_string(),
      autosave:  true,
    }
  }
}

impl CliConfig {
  /// Layers `file` (if it exists) and the environment over the defaults.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("ROLO"))
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    let mut cfg: Self = settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")?;
    cfg.data_file = expand_tilde(&cfg.data_file);
    Ok(cfg)
  }

  /// The configured level, falling back to `WARN` if it does not parse.
  pub fn level_filter(&self) -> LevelFilter {
    self.log_level.parse().unwrap_or_else(|_| {
      eprintln!("unknown log level {:?}, using warn", self.log_level);
      LevelFilter::WARN
    })
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
