//! Conversion between `rolo-core` entities and the plain records stored in
//! the data file.
//!
//! Timestamps are stored as `YYYY-MM-DDTHH:MM:SS` strings. Every other field
//! is stored as the string the user typed, after validation.

use chrono::NaiveDateTime;
use rolo_core::{
  OrganizerData, Snapshot, ValidationError,
  model::{
    Address, Contact, Email, Event, EventAlias, EventName, Name, Phone, Remark, SameIdentity,
    Tag, Todo, TodoTitle,
  },
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const FORMAT_VERSION: u32 = 1;

const DT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ─── NaiveDateTime ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: NaiveDateTime) -> String { dt.format(DT_FORMAT).to_string() }

pub fn decode_dt(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, DT_FORMAT).map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

fn invalid(kind: &'static str, position: usize) -> impl FnOnce(ValidationError) -> Error {
  move |source| Error::InvalidRecord { kind, position, source }
}

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContact {
  pub name:    String,
  pub phone:   String,
  pub email:   String,
  pub address: String,
  #[serde(default)]
  pub tags:    Vec<String>,
  #[serde(default)]
  pub remark:  String,
}

impl RawContact {
  pub fn from_contact(c: &Contact) -> Self {
    Self {
      name:    c.name().to_string(),
      phone:   c.phone().to_string(),
      email:   c.email().to_string(),
      address: c.address().to_string(),
      tags:    c.tags().map(|t| t.as_str().to_string()).collect(),
      remark:  c.remark().to_string(),
    }
  }

  pub fn into_contact(self, position: usize) -> Result<Contact> {
    let build = || -> Result<Contact, ValidationError> {
      let tags = self
        .tags
        .iter()
        .map(Tag::new)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(
        Contact::new(
          Name::new(&self.name)?,
          Phone::new(&self.phone)?,
          Email::new(&self.email)?,
          Address::new(&self.address)?,
          tags,
        )
        .with_remark(Remark::new(&self.remark)),
      )
    };
    build().map_err(invalid("contact", position))
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
  pub name:        String,
  pub start:       String,
  pub end:         String,
  #[serde(default)]
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub alias:       Option<String>,
  #[serde(default)]
  pub contacts:    Vec<String>,
}

impl RawEvent {
  pub fn from_event(e: &Event) -> Self {
    Self {
      name:        e.name().to_string(),
      start:       encode_dt(e.start()),
      end:         encode_dt(e.end()),
      description: e.description().to_string(),
      alias:       e.alias().map(ToString::to_string),
      contacts:    e.contacts().iter().map(ToString::to_string).collect(),
    }
  }

  pub fn into_event(self, position: usize) -> Result<Event> {
    let start = decode_dt(&self.start)?;
    let end = decode_dt(&self.end)?;
    let build = || -> Result<Event, ValidationError> {
      let alias = self.alias.as_deref().map(EventAlias::new).transpose()?;
      let contacts = self
        .contacts
        .iter()
        .map(Name::new)
        .collect::<Result<Vec<_>, _>>()?;
      Ok(
        Event::new(EventName::new(&self.name)?, start, end, &self.description)?
          .with_alias(alias)
          .with_contacts(contacts),
      )
    };
    build().map_err(invalid("event", position))
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTodo {
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact:     Option<String>,
}

impl RawTodo {
  pub fn from_todo(t: &Todo) -> Self {
    Self {
      title:       t.title().to_string(),
      description: t.description().to_string(),
      contact:     t.contact_name().map(ToString::to_string),
    }
  }

  pub fn into_todo(self, position: usize) -> Result<Todo> {
    let build = || -> Result<Todo, ValidationError> {
      let contact = self.contact.as_deref().map(Name::new).transpose()?;
      Ok(Todo::new(TodoTitle::new(&self.title)?, &self.description, contact))
    };
    build().map_err(invalid("todo", position))
  }
}

// ─── Document ────────────────────────────────────────────────────────────────

/// The top-level JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
  pub version:  u32,
  #[serde(default)]
  pub contacts: Vec<RawContact>,
  #[serde(default)]
  pub events:   Vec<RawEvent>,
  #[serde(default)]
  pub todos:    Vec<RawTodo>,
}

impl RawDocument {
  pub fn from_snapshot(snapshot: Snapshot<'_>) -> Self {
    Self {
      version:  FORMAT_VERSION,
      contacts: snapshot.contacts.iter().map(RawContact::from_contact).collect(),
      events:   snapshot.events.iter().map(RawEvent::from_event).collect(),
      todos:    snapshot.todos.iter().map(RawTodo::from_todo).collect(),
    }
  }

  /// Rebuilds every entity. Positions in errors are 1-based.
  pub fn into_data(self) -> Result<OrganizerData> {
    if self.version != FORMAT_VERSION {
      return Err(Error::Version { found: self.version, expected: FORMAT_VERSION });
    }

    let contacts = decode_all(self.contacts, "contact", RawContact::into_contact)?;
    let events = decode_all(self.events, "event", RawEvent::into_event)?;
    reject_shared_aliases(&events)?;
    let todos = decode_all(self.todos, "todo", RawTodo::into_todo)?;
    Ok(OrganizerData { contacts, events, todos })
  }
}

/// Fails on the first event whose alias an earlier event already carries.
fn reject_shared_aliases(events: &[Event]) -> Result<()> {
  for (i, event) in events.iter().enumerate() {
    if let Some(alias) = event.alias()
      && events[..i].iter().any(|e| e.alias() == Some(alias))
    {
      return Err(Error::Duplicate { kind: "event alias", position: i + 1 });
    }
  }
  Ok(())
}

/// Decodes each record, rejecting any that is the same entity as an earlier
/// one.
fn decode_all<R, T: SameIdentity>(
  raws: Vec<R>,
  kind: &'static str,
  decode: impl Fn(R, usize) -> Result<T>,
) -> Result<Vec<T>> {
  let mut out: Vec<T> = Vec::with_capacity(raws.len());
  for (i, raw) in raws.into_iter().enumerate() {
    let position = i + 1;
    let item = decode(raw, position)?;
    if out.iter().any(|existing| existing.is_same(&item)) {
      return Err(Error::Duplicate { kind, position });
    }
    out.push(item);
  }
  Ok(out)
}
