//! Plain-text rendering of the organizer's visible lists.

use std::fmt::Write as _;

use rolo_core::{Organizer, Panel};

/// The visible elements of `panel`, numbered from 1 as the user indexes them.
pub fn panel(organizer: &Organizer, panel: Panel) -> String {
  let mut out = String::new();
  match panel {
    Panel::Contacts => {
      let contacts = organizer.filtered_contacts();
      heading(&mut out, "Contacts", contacts.len());
      for (i, contact) in contacts.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {contact}", i + 1);
      }
    }
    Panel::Events => {
      let events = organizer.filtered_events();
      heading(&mut out, "Events", events.len());
      for (i, event) in events.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {event}", i + 1);
        if let Some(alias) = event.alias() {
          let _ = writeln!(out, "     alias: {alias}");
        }
        if !event.contacts().is_empty() {
          let names: Vec<&str> = event.contacts().iter().map(|n| n.as_str()).collect();
          let _ = writeln!(out, "     with: {}", names.join(", "));
        }
      }
    }
    Panel::Todos => {
      let todos = organizer.filtered_todos();
      heading(&mut out, "Todos", todos.len());
      for (i, todo) in todos.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {todo}", i + 1);
      }
    }
  }
  out
}

fn heading(out: &mut String, title: &str, count: usize) {
  let _ = writeln!(out, "── {title} ({count}) ──");
  if count == 0 {
    let _ = writeln!(out, "     (none)");
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use rolo_core::{
    OrganizerData,
    model::{Event, EventAlias, EventName, Name, Todo, TodoTitle},
  };

  use super::*;

  fn organizer() -> Organizer {
    let at = |h| NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
    let gala = Event::new(EventName::new("Gala").unwrap(), at(18), at(22), "Annual")
      .unwrap()
      .with_alias(Some(EventAlias::new("gala").unwrap()))
      .with_linked_contact(Name::new("Alice Pauline").unwrap());
    Organizer::with_data(OrganizerData {
      contacts: Vec::new(),
      events:   vec![gala],
      todos:    vec![Todo::new(TodoTitle::new("Book venue").unwrap(), "Court A", None)],
    })
  }

  #[test]
  fn events_show_alias_and_linked_contacts() {
    let text = panel(&organizer(), Panel::Events);
    assert_eq!(
      text,
      "── Events (1) ──\n  \
       1. Event{name='Gala', start=2025-01-01T18:00, end=2025-01-01T22:00, description='Annual'}\n     \
       alias: gala\n     \
       with: Alice Pauline\n"
    );
  }

  #[test]
  fn empty_panel_says_none() {
    assert_eq!(panel(&organizer(), Panel::Contacts), "── Contacts (0) ──\n     (none)\n");
  }

  #[test]
  fn todos_are_numbered_from_one() {
    let text = panel(&organizer(), Panel::Todos);
    assert!(text.contains("  1. Book venue; Description: Court A\n"));
  }
}
