//! Error type for `rolo-store-json`.

use std::path::PathBuf;

use rolo_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("i/o error on {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  #[error("unsupported data file version {found} (expected {expected})")]
  Version { found: u32, expected: u32 },

  /// A stored record failed the constructor checks.
  #[error("invalid {kind} #{position}: {source}")]
  InvalidRecord {
    kind:     &'static str,
    position: usize,
    #[source]
    source:   ValidationError,
  },

  /// Two stored records denote the same entity.
  #[error("duplicate {kind} #{position} in data file")]
  Duplicate { kind: &'static str, position: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
