//! Event commands.

use chrono::NaiveDateTime;

use super::{CommandResult, Panel};
use crate::{
  Error, Result,
  index::Index,
  model::{Event, EventAlias, EventName, SameIdentity},
  organizer::Organizer,
  resolver,
};

pub const MESSAGE_NO_EVENTS: &str = "No events found";

/// Whether an event other than `except` already carries `alias`.
fn alias_taken(organizer: &Organizer, alias: &EventAlias, except: Option<&Event>) -> bool {
  organizer
    .events
    .iter()
    .any(|e| Some(e) != except && e.alias() == Some(alias))
}

fn resolve_event(organizer: &Organizer, index: Index) -> Result<Event> {
  index.get(&organizer.filtered_events()).map(|e| (*e).clone())
}

// ─── add ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEvent {
  pub event: Event,
}

impl AddEvent {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if organizer.events.contains(&self.event) {
      return Err(Error::DuplicateEvent);
    }
    if let Some(alias) = self.event.alias()
      && alias_taken(organizer, alias, None)
    {
      return Err(Error::DuplicateAlias(alias.to_string()));
    }
    let feedback = format!("New event added: {}", self.event);
    organizer.events.add(self.event);
    Ok(CommandResult::showing(feedback, Panel::Events))
  }
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEvent {
  pub index: Index,
}

impl DeleteEvent {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let target = resolve_event(organizer, self.index)?;
    organizer.events.remove(&target)?;
    Ok(CommandResult::showing(
      format!("Deleted event: {target}"),
      Panel::Events,
    ))
  }
}

// ─── edit ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventEdits {
  pub name:        Option<EventName>,
  pub start:       Option<NaiveDateTime>,
  pub end:         Option<NaiveDateTime>,
  pub description: Option<String>,
  /// `Some(None)` removes the alias.
  pub alias:       Option<Option<EventAlias>>,
}

impl EventEdits {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.start.is_none()
      && self.end.is_none()
      && self.description.is_none()
      && self.alias.is_none()
  }

  /// Applies the edits, failing if the resulting range has start after end.
  pub fn apply(&self, event: &Event) -> Result<Event> {
    let mut edited = event.with_times(
      self.start.unwrap_or(event.start()),
      self.end.unwrap_or(event.end()),
    )?;
    if let Some(name) = &self.name {
      edited = edited.with_name(name.clone());
    }
    if let Some(description) = &self.description {
      edited = edited.with_description(description.clone());
    }
    if let Some(alias) = &self.alias {
      edited = edited.with_alias(alias.clone());
    }
    Ok(edited)
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
  pub index: Index,
  pub edits: EventEdits,
}

impl EditEvent {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if self.edits.is_empty() {
      return Err(Error::NoEdits);
    }
    let target = resolve_event(organizer, self.index)?;
    let edited = self.edits.apply(&target)?;

    if organizer
      .events
      .iter()
      .any(|e| *e != target && e.is_same(&edited))
    {
      return Err(Error::DuplicateEvent);
    }
    if let Some(alias) = edited.alias()
      && alias_taken(organizer, alias, Some(&target))
    {
      return Err(Error::DuplicateAlias(alias.to_string()));
    }

    organizer.events.set_item(&target, edited.clone())?;
    Ok(CommandResult::showing(
      format!("Edited event: {edited}"),
      Panel::Events,
    ))
  }
}

// ─── list ────────────────────────────────────────────────────────────────────

/// Clears the event filter and enumerates every event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEvents;

impl ListEvents {
  pub fn execute(self, organizer: &mut Organizer) -> CommandResult {
    organizer.show_all_events();
    let events = organizer.filtered_events();
    let feedback = if events.is_empty() {
      MESSAGE_NO_EVENTS.to_string()
    } else {
      let rendered: Vec<String> = events.iter().map(ToString::to_string).collect();
      format!("Events: [{}]", rendered.join(", "))
    };
    CommandResult::showing(feedback, Panel::Events)
  }
}

// ─── link ────────────────────────────────────────────────────────────────────

/// Links the contact at `contact_index` to the event carrying `alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
  pub contact_index: Index,
  pub alias:         EventAlias,
}

impl LinkEvent {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let name = resolver::resolve_link_target(organizer, self.contact_index)?
      .name()
      .clone();
    let event = resolver::resolve_alias(organizer, &self.alias)?.clone();
    if event.is_linked_to(&name) {
      return Err(Error::AlreadyLinked {
        contact: name.to_string(),
        alias:   self.alias.to_string(),
      });
    }

    organizer
      .events
      .set_item(&event, event.with_linked_contact(name.clone()))?;
    Ok(CommandResult::showing(
      format!("Linked {name} to event {}", self.alias),
      Panel::Events,
    ))
  }
}
