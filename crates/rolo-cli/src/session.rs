//! The read-eval-print loop: one organizer, one data file.

use std::io::{BufRead, Write};

use anyhow::Context as _;
use rolo_core::{Organizer, Panel};
use rolo_store_json::JsonStore;

use crate::{
  parser::{self, HELP, Input},
  render,
};

const PROMPT: &str = "rolo> ";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
  Continue(String),
  Exit(String),
}

pub struct Session {
  organizer: Organizer,
  store:     JsonStore,
  autosave:  bool,
  dirty:     bool,
}

impl Session {
  /// Loads the organizer from `store`, starting empty if there is no file.
  pub fn open(store: JsonStore, autosave: bool) -> anyhow::Result<Self> {
    let data = store
      .load()
      .with_context(|| format!("failed to load {}", store.path().display()))?;
    let organizer = match data {
      Some(data) => Organizer::with_data(data),
      None => {
        tracing::info!(path = %store.path().display(), "starting with an empty organizer");
        Organizer::new()
      }
    };
    Ok(Self { organizer, store, autosave, dirty: false })
  }

  #[cfg(test)]
  pub fn organizer(&self) -> &Organizer { &self.organizer }

  /// Parses and runs one line of input.
  pub fn handle(&mut self, line: &str) -> Reply {
    if line.trim().is_empty() {
      return Reply::Continue(String::new());
    }
    let command = match parser::parse(line) {
      Ok(Input::Command(command)) => command,
      Ok(Input::Help) => return Reply::Continue(HELP.to_string()),
      Ok(Input::Exit) => return Reply::Exit(self.finish()),
      Err(e) => return Reply::Continue(e.to_string()),
    };

    let mutating = command.is_mutating();
    let result = match command.execute(&mut self.organizer) {
      Ok(result) => result,
      Err(e) => return Reply::Continue(e.to_string()),
    };

    let mut out = result.feedback;
    if let Some(panel) = result.show {
      out.push('\n');
      out.push_str(&render::panel(&self.organizer, panel));
    }
    if mutating {
      self.dirty = true;
      if self.autosave
        && let Err(e) = self.save()
      {
        out.push_str(&format!("\nWarning: {e:#}"));
      }
    }
    Reply::Continue(out)
  }

  /// Drives the loop until `exit` or end of input.
  pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    output.write_all(render::panel(&self.organizer, Panel::Contacts).as_bytes())?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
      let line = line.context("failed to read input")?;
      match self.handle(&line) {
        Reply::Continue(text) => {
          if !text.is_empty() {
            writeln!(output, "{}", text.trim_end())?;
          }
        }
        Reply::Exit(text) => {
          writeln!(output, "{}", text.trim_end())?;
          return Ok(());
        }
      }
      write!(output, "{PROMPT}")?;
      output.flush()?;
    }

    // End of input without `exit`.
    let text = self.finish();
    writeln!(output)?;
    if !text.is_empty() {
      writeln!(output, "{text}")?;
    }
    Ok(())
  }

  /// Saves any unsaved changes; returns the farewell message.
  fn finish(&mut self) -> String {
    if !self.dirty {
      return "Goodbye!".to_string();
    }
    match self.save() {
      Ok(()) => "Goodbye!".to_string(),
      Err(e) => format!("Warning: {e:#}\nGoodbye!"),
    }
  }

  fn save(&mut self) -> anyhow::Result<()> {
    self
      .store
      .save(self.organizer.snapshot())
      .with_context(|| format!("failed to save {}", self.store.path().display()))
      .inspect_err(|e| tracing::error!("{e:#}"))?;
    self.dirty = false;
    Ok(())
  }
}
