//! Scheduled events.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

use super::{Name, SameIdentity};
use crate::error::ValidationError;

pub const MAX_ALIAS_LEN: usize = 32;

// ─── EventName ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName(String);

impl EventName {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(ValidationError::EventName);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for EventName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── EventAlias ──────────────────────────────────────────────────────────────

/// A short token naming an event for linking, e.g. `Taylor-Swift`.
///
/// Aliases compare case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventAlias(String);

impl EventAlias {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    let valid = !trimmed.is_empty()
      && trimmed.len() <= MAX_ALIAS_LEN
      && trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
      return Err(ValidationError::EventAlias(raw));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for EventAlias {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// An event with a closed time range.
///
/// `start <= end` holds for every constructed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
  name:        EventName,
  start:       NaiveDateTime,
  end:         NaiveDateTime,
  description: String,
  alias:       Option<EventAlias>,
  /// Names of the contacts linked to this event, in link order.
  contacts:    Vec<Name>,
}

impl Event {
  pub fn new(
    name: EventName,
    start: NaiveDateTime,
    end: NaiveDateTime,
    description: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    if start > end {
      return Err(ValidationError::StartAfterEnd { start, end });
    }
    Ok(Self {
      name,
      start,
      end,
      description: description.into(),
      alias: None,
      contacts: Vec::new(),
    })
  }

  pub fn name(&self) -> &EventName { &self.name }

  pub fn start(&self) -> NaiveDateTime { self.start }

  pub fn end(&self) -> NaiveDateTime { self.end }

  pub fn description(&self) -> &str { &self.description }

  pub fn alias(&self) -> Option<&EventAlias> { self.alias.as_ref() }

  pub fn contacts(&self) -> &[Name] { &self.contacts }

  pub fn is_linked_to(&self, name: &Name) -> bool { self.contacts.contains(name) }

  pub fn with_name(&self, name: EventName) -> Self { Self { name, ..self.clone() } }

  /// Returns a copy with a new time range, re-checking `start <= end`.
  pub fn with_times(
    &self,
    start: NaiveDateTime,
    end: NaiveDateTime,
  ) -> Result<Self, ValidationError> {
    if start > end {
      return Err(ValidationError::StartAfterEnd { start, end });
    }
    Ok(Self { start, end, ..self.clone() })
  }

  pub fn with_description(&self, description: impl Into<String>) -> Self {
    Self { description: description.into(), ..self.clone() }
  }

  pub fn with_alias(&self, alias: Option<EventAlias>) -> Self {
    Self { alias, ..self.clone() }
  }

  /// Returns a copy with `name` appended to the linked contacts.
  pub fn with_linked_contact(&self, name: Name) -> Self {
    let mut contacts = self.contacts.clone();
    contacts.push(name);
    Self { contacts, ..self.clone() }
  }

  pub fn with_contacts(&self, contacts: impl IntoIterator<Item = Name>) -> Self {
    Self { contacts: contacts.into_iter().collect(), ..self.clone() }
  }

  /// Returns a copy in which every linked name equal to `from` is replaced by
  /// `to`, or `None` if `from` is not linked. If `to` is already linked the
  /// `from` entries are dropped instead, so no name is linked twice.
  pub(crate) fn relinked(&self, from: &Name, to: &Name) -> Option<Self> {
    if !self.is_linked_to(from) {
      return None;
    }
    let to_linked = self.is_linked_to(to);
    let contacts = self
      .contacts
      .iter()
      .filter_map(|n| {
        if n != from {
          Some(n.clone())
        } else if to_linked {
          None
        } else {
          Some(to.clone())
        }
      })
      .collect();
    Some(Self { contacts, ..self.clone() })
  }
}

impl SameIdentity for Event {
  fn is_same(&self, other: &Self) -> bool {
    self.name == other.name && self.start == other.start && self.end == other.end
  }
}

/// Minute precision unless the seconds are non-zero, e.g. `2025-01-01T18:00`.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
  if ts.second() == 0 && ts.nanosecond() == 0 {
    ts.format("%Y-%m-%dT%H:%M").to_string()
  } else {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
  }
}

impl fmt::Display for Event {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Event{{name='{}', start={}, end={}, description='{}'}}",
      self.name,
      format_timestamp(self.start),
      format_timestamp(self.end),
      self.description
    )
  }
}
