//! [`Organizer`] — the store that owns every collection.
//!
//! One `Organizer` is created at startup and passed by reference to each
//! command. It holds the three entity lists and, for each, the filter that
//! decides which elements the user currently sees. Indices typed by the user
//! always refer to the filtered view.

use std::fmt;

use crate::{
  list::UniqueList,
  model::{Contact, Event, Name, Todo},
};

/// A filter over the displayed elements of one entity kind.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

fn show_all<T>() -> Predicate<T> { Box::new(|_| true) }

// ─── Snapshots ───────────────────────────────────────────────────────────────

/// A borrowed view of the full contents, for persistence.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
  pub contacts: &'a [Contact],
  pub events:   &'a [Event],
  pub todos:    &'a [Todo],
}

/// Owned contents used to restore an organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizerData {
  pub contacts: Vec<Contact>,
  pub events:   Vec<Event>,
  pub todos:    Vec<Todo>,
}

// ─── Organizer ───────────────────────────────────────────────────────────────

pub struct Organizer {
  pub(crate) contacts: UniqueList<Contact>,
  pub(crate) events:   UniqueList<Event>,
  pub(crate) todos:    UniqueList<Todo>,
  contact_filter:      Predicate<Contact>,
  event_filter:        Predicate<Event>,
  todo_filter:         Predicate<Todo>,
}

impl Default for Organizer {
  fn default() -> Self {
    Self {
      contacts:       UniqueList::new(),
      events:         UniqueList::new(),
      todos:          UniqueList::new(),
      contact_filter: show_all(),
      event_filter:   show_all(),
      todo_filter:    show_all(),
    }
  }
}

impl fmt::Debug for Organizer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Organizer")
      .field("contacts", &self.contacts)
      .field("events", &self.events)
      .field("todos", &self.todos)
      .finish_non_exhaustive()
  }
}

impl Organizer {
  /// An empty organizer with every filter showing all elements.
  pub fn new() -> Self { Self::default() }

  /// An organizer restored from `data`.
  pub fn with_data(data: OrganizerData) -> Self {
    let mut organizer = Self::new();
    organizer.set_all(data);
    organizer
  }

  // ── Collections ───────────────────────────────────────────────────────

  pub fn contacts(&self) -> &UniqueList<Contact> { &self.contacts }

  pub fn events(&self) -> &UniqueList<Event> { &self.events }

  pub fn todos(&self) -> &UniqueList<Todo> { &self.todos }

  /// The contact whose name has the same identity as `name`, if any.
  pub fn contact_named(&self, name: &Name) -> Option<&Contact> {
    let key = name.identity_key();
    self.contacts.find(|c| c.name().identity_key() == key)
  }

  // ── Filtered views ────────────────────────────────────────────────────

  pub fn filtered_contacts(&self) -> Vec<&Contact> {
    self.contacts.iter().filter(|c| (self.contact_filter)(c)).collect()
  }

  pub fn filtered_events(&self) -> Vec<&Event> {
    self.events.iter().filter(|e| (self.event_filter)(e)).collect()
  }

  pub fn filtered_todos(&self) -> Vec<&Todo> {
    self.todos.iter().filter(|t| (self.todo_filter)(t)).collect()
  }

  pub fn update_contact_filter(&mut self, predicate: impl Fn(&Contact) -> bool + 'static) {
    self.contact_filter = Box::new(predicate);
  }

  pub fn update_event_filter(&mut self, predicate: impl Fn(&Event) -> bool + 'static) {
    self.event_filter = Box::new(predicate);
  }

  pub fn update_todo_filter(&mut self, predicate: impl Fn(&Todo) -> bool + 'static) {
    self.todo_filter = Box::new(predicate);
  }

  pub fn show_all_contacts(&mut self) { self.contact_filter = show_all(); }

  pub fn show_all_events(&mut self) { self.event_filter = show_all(); }

  pub fn show_all_todos(&mut self) { self.todo_filter = show_all(); }

  // ── Persistence boundary ──────────────────────────────────────────────

  pub fn snapshot(&self) -> Snapshot<'_> {
    Snapshot {
      contacts: self.contacts.as_view(),
      events:   self.events.as_view(),
      todos:    self.todos.as_view(),
    }
  }

  /// Replaces all contents and resets every filter. The data is trusted: no
  /// uniqueness check is made.
  pub fn set_all(&mut self, data: OrganizerData) {
    self.contacts.replace_all(data.contacts);
    self.events.replace_all(data.events);
    self.todos.replace_all(data.todos);
    self.show_all_contacts();
    self.show_all_events();
    self.show_all_todos();
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{alice, bob, carl, gala, review_proposal, typical_organizer};

  #[test]
  fn new_organizer_is_empty() {
    let org = Organizer::new();
    assert!(org.contacts().is_empty());
    assert!(org.events().is_empty());
    assert!(org.todos().is_empty());
  }

  #[test]
  fn filter_narrows_view_but_not_list() {
    let mut org = typical_organizer();
    org.update_contact_filter(|c| c.name().contains_word("bob"));
    assert_eq!(org.filtered_contacts(), vec![&bob()]);
    assert_eq!(org.contacts().len(), 3);

    org.show_all_contacts();
    assert_eq!(org.filtered_contacts().len(), 3);
  }

  #[test]
  fn contact_named_uses_identity() {
    let org = typical_organizer();
    let shouted = Name::new("ALICE PAULINE").unwrap();
    assert_eq!(org.contact_named(&shouted), Some(&alice()));
    assert!(org.contact_named(&Name::new("Zed").unwrap()).is_none());
  }

  #[test]
  fn snapshot_round_trips_through_set_all() {
    let org = typical_organizer();
    let snap = org.snapshot();
    let data = OrganizerData {
      contacts: snap.contacts.to_vec(),
      events:   snap.events.to_vec(),
      todos:    snap.todos.to_vec(),
    };
    let restored = Organizer::with_data(data.clone());
    assert_eq!(restored.snapshot().contacts, data.contacts.as_slice());
    assert_eq!(restored.snapshot().events, data.events.as_slice());
    assert_eq!(restored.snapshot().todos, data.todos.as_slice());
  }

  #[test]
  fn set_all_resets_filters() {
    let mut org = typical_organizer();
    org.update_event_filter(|_| false);
    assert!(org.filtered_events().is_empty());

    org.set_all(OrganizerData {
      contacts: vec![alice(), carl()],
      events:   vec![gala()],
      todos:    vec![review_proposal()],
    });
    assert_eq!(org.filtered_events(), vec![&gala()]);
    assert_eq!(org.filtered_contacts().len(), 2);
  }
}
