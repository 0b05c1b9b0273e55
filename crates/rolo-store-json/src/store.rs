//! [`JsonStore`] — reads and writes the organizer's data file.

use std::{
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
};

use rolo_core::{OrganizerData, Snapshot};

use crate::{Error, Result, encode::RawDocument};

/// A data file holding one full organizer snapshot.
#[derive(Debug, Clone)]
pub struct JsonStore {
  path: PathBuf,
}

impl JsonStore {
  /// A store at `path`. Nothing is read or created until the first
  /// [`load`](Self::load) or [`save`](Self::save).
  pub fn open(path: impl AsRef<Path>) -> Self {
    Self { path: path.as_ref().to_path_buf() }
  }

  pub fn path(&self) -> &Path { &self.path }

  /// Reads the data file. Returns `None` if it does not exist yet.
  pub fn load(&self) -> Result<Option<OrganizerData>> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::debug!(path = %self.path.display(), "no data file yet");
        return Ok(None);
      }
      Err(source) => return Err(self.io_error(source)),
    };

    let document: RawDocument = serde_json::from_str(&raw)?;
    let data = document.into_data()?;
    tracing::debug!(
      path = %self.path.display(),
      contacts = data.contacts.len(),
      events = data.events.len(),
      todos = data.todos.len(),
      "loaded data file"
    );
    Ok(Some(data))
  }

  /// Writes `snapshot`, replacing the data file.
  ///
  /// The document is first written to a sibling temporary file and then
  /// renamed over the data file, so a failed save leaves the previous file
  /// intact.
  pub fn save(&self, snapshot: Snapshot<'_>) -> Result<()> {
    let json = serde_json::to_string_pretty(&RawDocument::from_snapshot(snapshot))?;

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
    }
    let tmp = self.tmp_path();
    fs::write(&tmp, json).map_err(|source| Error::Io { path: tmp.clone(), source })?;
    fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;

    tracing::debug!(path = %self.path.display(), "saved data file");
    Ok(())
  }

  fn tmp_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map(|n| n.to_os_string())
      .unwrap_or_default();
    name.push(".tmp");
    self.path.with_file_name(name)
  }

  fn io_error(&self, source: std::io::Error) -> Error {
    Error::Io { path: self.path.clone(), source }
  }
}
