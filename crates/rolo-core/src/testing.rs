//! Typical entities shared by the unit tests.

use chrono::NaiveDateTime;

use crate::{
  model::{Address, Contact, Email, Event, EventAlias, EventName, Name, Phone, Tag, Todo, TodoTitle},
  organizer::{Organizer, OrganizerData},
};

/// Parses `YYYY-MM-DDTHH:MM[:SS]`.
pub fn dt(s: &str) -> NaiveDateTime {
  NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
    .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
    .expect("valid test timestamp")
}

fn contact(name: &str, phone: &str, email: &str, address: &str, tags: &[&str]) -> Contact {
  Contact::new(
    Name::new(name).unwrap(),
    Phone::new(phone).unwrap(),
    Email::new(email).unwrap(),
    Address::new(address).unwrap(),
    tags.iter().map(|t| Tag::new(*t).unwrap()),
  )
}

pub fn alice() -> Contact {
  contact(
    "Alice Pauline",
    "94351253",
    "alice@example.com",
    "123, Jurong West Ave 6, #08-111",
    &["friends"],
  )
}

pub fn benson() -> Contact {
  contact(
    "Benson Meier",
    "98765432",
    "johnd@example.com",
    "311, Clementi Ave 2, #02-25",
    &["owesMoney", "friends"],
  )
}

pub fn bob() -> Contact {
  contact("Bob Choo", "22222222", "bob@example.com", "Block 123, Bobby Street 3", &[])
}

pub fn carl() -> Contact {
  contact("Carl Kurz", "95352563", "heinz@example.com", "wall street", &[])
}

/// `Gala` from 2025-01-01T18:00 to 22:00, described `Annual`, alias `gala`.
pub fn gala() -> Event {
  Event::new(
    EventName::new("Gala").unwrap(),
    dt("2025-01-01T18:00"),
    dt("2025-01-01T22:00"),
    "Annual",
  )
  .unwrap()
  .with_alias(Some(EventAlias::new("gala").unwrap()))
}

pub fn concert() -> Event {
  Event::new(
    EventName::new("Eras Tour").unwrap(),
    dt("2025-03-02T19:30"),
    dt("2025-03-02T23:00"),
    "Stadium",
  )
  .unwrap()
  .with_alias(Some(EventAlias::new("Taylor-Swift").unwrap()))
}

pub fn review_proposal() -> Todo {
  Todo::new(
    TodoTitle::new("Review proposal").unwrap(),
    "Review the event proposal draft",
    None,
  )
}

pub fn send_invites() -> Todo {
  Todo::new(
    TodoTitle::new("Send invites").unwrap(),
    "Email all guests",
    None,
  )
}

/// Contacts alice, bob, carl; event gala; todos review_proposal, send_invites.
pub fn typical_organizer() -> Organizer {
  Organizer::with_data(OrganizerData {
    contacts: vec![alice(), bob(), carl()],
    events:   vec![gala()],
    todos:    vec![review_proposal(), send_invites()],
  })
}
