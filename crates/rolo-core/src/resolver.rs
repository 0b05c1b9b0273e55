//! Cross-reference resolution between contacts and the records that name them.
//!
//! Todos and events refer to contacts by name. A rename therefore has to be
//! walked into every record holding the old name; a removal is not, and leaves
//! the old name in place as a dangling reference.

use crate::{
  Error, Result,
  index::Index,
  model::{Contact, Event, EventAlias},
  organizer::Organizer,
};

/// Rewrites every todo and event linked to `old`'s name so it names `new`
/// instead. Positions are preserved and unrelated records are untouched.
///
/// Does nothing at all when the name did not change. Returns the number of
/// records rewritten.
pub fn on_contact_renamed(organizer: &mut Organizer, old: &Contact, new: &Contact) -> usize {
  let (from, to) = (old.name(), new.name());
  if from == to {
    return 0;
  }

  let todos = organizer.todos.rewrite_each(|todo| {
    (todo.contact_name() == Some(from)).then(|| todo.with_contact_name(Some(to.clone())))
  });
  let events = organizer.events.rewrite_each(|event| event.relinked(from, to));

  if todos + events > 0 {
    tracing::info!(
      from = %from,
      to = %to,
      todos,
      events,
      "relinked records to renamed contact"
    );
  }
  todos + events
}

/// Applies the removal policy for `contact`: linked records keep the stale
/// name verbatim. Returns how many records now hold a dangling reference.
pub fn on_contact_removed(organizer: &Organizer, contact: &Contact) -> usize {
  let name = contact.name();
  let dangling = organizer
    .todos
    .iter()
    .filter(|t| t.contact_name() == Some(name))
    .count()
    + organizer
      .events
      .iter()
      .filter(|e| e.is_linked_to(name))
      .count();
  if dangling > 0 {
    tracing::debug!(contact = %name, dangling, "removed contact is still referenced");
  }
  dangling
}

/// The contact at `index` in the currently filtered contact view.
pub fn resolve_link_target(organizer: &Organizer, index: Index) -> Result<&Contact> {
  index.get(&organizer.filtered_contacts()).copied()
}

/// The event carrying `alias`.
pub fn resolve_alias<'a>(organizer: &'a Organizer, alias: &EventAlias) -> Result<&'a Event> {
  organizer
    .events
    .find(|e| e.alias() == Some(alias))
    .ok_or_else(|| Error::AliasNotFound(alias.to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    model::{Name, Todo, TodoTitle},
    organizer::OrganizerData,
    testing::{alice, benson, bob, gala, typical_organizer},
  };

  fn todo(title: &str, contact: Option<&Contact>) -> Todo {
    Todo::new(
      TodoTitle::new(title).unwrap(),
      "details",
      contact.map(|c| c.name().clone()),
    )
  }

  #[test]
  fn rename_rewrites_linked_todos_only() {
    let from = alice();
    let to = from.with_name(Name::new("Benson Meier").unwrap());
    let linked = todo("Coordinate ushers", Some(&from));
    let unlinked = todo("Book venue", None);
    let other = todo("Call bob", Some(&bob()));

    let mut org = Organizer::with_data(OrganizerData {
      contacts: vec![from.clone()],
      events:   vec![],
      todos:    vec![linked.clone(), unlinked.clone(), other.clone()],
    });

    assert_eq!(on_contact_renamed(&mut org, &from, &to), 1);
    let todos = org.todos().as_view();
    assert_eq!(todos[0].contact_name(), Some(to.name()));
    assert_eq!(todos[0].title(), linked.title());
    assert_eq!(todos[1], unlinked);
    assert_eq!(todos[2], other);
  }

  #[test]
  fn rename_to_same_name_touches_nothing() {
    let contact = alice();
    let stale = Todo::new(
      TodoTitle::new("Old link").unwrap(),
      "",
      Some(Name::new("Someone Gone").unwrap()),
    );
    let linked = todo("Arrange transport", Some(&contact));
    let mut org = Organizer::with_data(OrganizerData {
      contacts: vec![contact.clone()],
      events:   vec![],
      todos:    vec![linked.clone(), stale.clone()],
    });
    let before = org.todos().clone();

    let re_phoned = contact.with_phone(crate::model::Phone::new("123456").unwrap());
    assert_eq!(on_contact_renamed(&mut org, &contact, &re_phoned), 0);
    assert_eq!(org.todos(), &before);
  }

  #[test]
  fn rename_rewrites_event_links() {
    let from = alice();
    let to = benson();
    let event = gala().with_contacts([from.name().clone(), bob().name().clone()]);
    let mut org = Organizer::with_data(OrganizerData {
      contacts: vec![from.clone()],
      events:   vec![event],
      todos:    vec![],
    });

    assert_eq!(on_contact_renamed(&mut org, &from, &to), 1);
    assert_eq!(
      org.events().as_view()[0].contacts(),
      &[to.name().clone(), bob().name().clone()]
    );
  }

  #[test]
  fn removal_leaves_dangling_names() {
    let contact = alice();
    let linked = todo("Send card", Some(&contact));
    let mut org = Organizer::with_data(OrganizerData {
      contacts: vec![contact.clone()],
      events:   vec![gala().with_linked_contact(contact.name().clone())],
      todos:    vec![linked.clone()],
    });

    org.contacts.remove(&contact).unwrap();
    assert_eq!(on_contact_removed(&org, &contact), 2);
    assert_eq!(org.todos().as_view(), &[linked]);
    assert!(org.events().as_view()[0].is_linked_to(contact.name()));
  }

  #[test]
  fn link_target_respects_filter() {
    let mut org = typical_organizer();
    let second = Index::from_one_based(2).unwrap();
    assert_eq!(resolve_link_target(&org, second), Ok(&bob()));

    org.update_contact_filter(|c| c.name().contains_word("bob"));
    assert_eq!(
      resolve_link_target(&org, second),
      Err(Error::IndexOutOfRange { index: 2, len: 1 })
    );
  }

  #[test]
  fn alias_lookup() {
    let org = typical_organizer();
    let alias = EventAlias::new("gala").unwrap();
    assert_eq!(resolve_alias(&org, &alias).map(|e| e.name().as_str()), Ok("Gala"));

    let missing = EventAlias::new("nope").unwrap();
    assert_eq!(
      resolve_alias(&org, &missing),
      Err(Error::AliasNotFound("nope".into()))
    );
  }
}
