//! Tests for `JsonStore` against files in a temporary directory.

use chrono::NaiveDateTime;
use rolo_core::{
  Organizer, OrganizerData,
  model::{
    Address, Contact, Email, Event, EventAlias, EventName, Name, Phone, Remark, Tag, Todo,
    TodoTitle,
  },
};
use tempfile::TempDir;

use crate::{Error, JsonStore, encode::decode_dt};

fn dt(s: &str) -> NaiveDateTime { decode_dt(s).expect("valid timestamp") }

fn alice() -> Contact {
  Contact::new(
    Name::new("Alice Pauline").unwrap(),
    Phone::new("94351253").unwrap(),
    Email::new("alice@example.com").unwrap(),
    Address::new("123, Jurong West Ave 6").unwrap(),
    [Tag::new("friends").unwrap()],
  )
  .with_remark(Remark::new("likes tea"))
}

fn bob() -> Contact {
  Contact::new(
    Name::new("Bob Choo").unwrap(),
    Phone::new("22222222").unwrap(),
    Email::new("bob@example.com").unwrap(),
    Address::new("Block 123, Bobby Street 3").unwrap(),
    Vec::new(),
  )
}

fn gala() -> Event {
  Event::new(
    EventName::new("Gala").unwrap(),
    dt("2025-01-01T18:00:00"),
    dt("2025-01-01T22:00:00"),
    "Annual",
  )
  .unwrap()
  .with_alias(Some(EventAlias::new("gala").unwrap()))
  .with_linked_contact(alice().name().clone())
}

fn todo() -> Todo {
  Todo::new(
    TodoTitle::new("Book venue").unwrap(),
    "Court A, 3-6pm",
    Some(Name::new("Someone Removed").unwrap()),
  )
}

fn sample() -> OrganizerData {
  OrganizerData {
    contacts: vec![alice(), bob()],
    events:   vec![gala()],
    todos:    vec![todo()],
  }
}

fn store_in(dir: &TempDir) -> JsonStore { JsonStore::open(dir.path().join("rolo.json")) }

// ─── Round trip ──────────────────────────────────────────────────────────────

#[test]
fn missing_file_loads_as_none() {
  let dir = TempDir::new().unwrap();
  assert!(store_in(&dir).load().unwrap().is_none());
}

#[test]
fn save_then_load_preserves_everything() {
  let dir = TempDir::new().unwrap();
  let store = store_in(&dir);
  let organizer = Organizer::with_data(sample());

  store.save(organizer.snapshot()).unwrap();
  let loaded = store.load().unwrap().expect("file was written");
  assert_eq!(loaded, sample());
}

#[test]
fn dangling_todo_link_survives_round_trip() {
  let dir = TempDir::new().unwrap();
  let store = store_in(&dir);
  store.save(Organizer::with_data(sample()).snapshot()).unwrap();

  let loaded = store.load().unwrap().unwrap();
  assert_eq!(
    loaded.todos[0].contact_name().map(Name::as_str),
    Some("Someone Removed")
  );
}

#[test]
fn save_creates_parent_directories_and_leaves_no_temp_file() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("nested").join("data").join("rolo.json");
  let store = JsonStore::open(&path);
  store.save(Organizer::new().snapshot()).unwrap();

  assert!(path.exists());
  let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
    .unwrap()
    .map(|e| e.unwrap().file_name())
    .collect();
  assert_eq!(entries, vec![std::ffi::OsString::from("rolo.json")]);
}

#[test]
fn save_overwrites_previous_contents() {
  let dir = TempDir::new().unwrap();
  let store = store_in(&dir);
  store.save(Organizer::with_data(sample()).snapshot()).unwrap();
  store.save(Organizer::new().snapshot()).unwrap();
  assert_eq!(store.load().unwrap(), Some(OrganizerData::default()));
}

// ─── Rejections ──────────────────────────────────────────────────────────────

fn write(dir: &TempDir, json: &str) -> JsonStore {
  let store = store_in(dir);
  std::fs::write(store.path(), json).unwrap();
  store
}

#[test]
fn malformed_json_is_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(&dir, "{ not json");
  assert!(matches!(store.load(), Err(Error::Json(_))));
}

#[test]
fn wrong_version_is_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(&dir, r#"{ "version": 99 }"#);
  assert!(matches!(
    store.load(),
    Err(Error::Version { found: 99, expected: 1 })
  ));
}

#[test]
fn event_with_start_after_end_is_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(
    &dir,
    r#"{
      "version": 1,
      "events": [
        { "name": "Backwards", "start": "2025-01-02T10:00:00", "end": "2025-01-01T10:00:00" }
      ]
    }"#,
  );
  assert!(matches!(
    store.load(),
    Err(Error::InvalidRecord { kind: "event", position: 1, .. })
  ));
}

#[test]
fn bad_timestamp_is_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(
    &dir,
    r#"{
      "version": 1,
      "events": [ { "name": "Gala", "start": "tomorrow", "end": "2025-01-01T10:00:00" } ]
    }"#,
  );
  assert!(matches!(store.load(), Err(Error::DateParse(_))));
}

#[test]
fn invalid_contact_field_reports_position() {
  let dir = TempDir::new().unwrap();
  let store = write(
    &dir,
    r#"{
      "version": 1,
      "contacts": [
        { "name": "Bob Choo", "phone": "22222222", "email": "bob@example.com", "address": "x" },
        { "name": "Eve", "phone": "12", "email": "eve@example.com", "address": "y" }
      ]
    }"#,
  );
  assert!(matches!(
    store.load(),
    Err(Error::InvalidRecord { kind: "contact", position: 2, .. })
  ));
}

#[test]
fn duplicate_contacts_are_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(
    &dir,
    r#"{
      "version": 1,
      "contacts": [
        { "name": "Bob Choo", "phone": "22222222", "email": "bob@example.com", "address": "x" },
        { "name": "bob  choo", "phone": "333", "email": "b@example.com", "address": "y" }
      ]
    }"#,
  );
  assert!(matches!(
    store.load(),
    Err(Error::Duplicate { kind: "contact", position: 2 })
  ));
}

#[test]
fn events_sharing_an_alias_are_rejected() {
  let dir = TempDir::new().unwrap();
  let store = write(
    &dir,
    r#"{
      "version": 1,
      "events": [
        { "name": "Gala", "start": "2025-01-01T18:00:00", "end": "2025-01-01T22:00:00",
          "alias": "gala" },
        { "name": "Ball", "start": "2025-02-01T18:00:00", "end": "2025-02-01T22:00:00" },
        { "name": "Dance", "start": "2025-03-01T18:00:00", "end": "2025-03-01T22:00:00",
          "alias": "gala" }
      ]
    }"#,
  );
  assert!(matches!(
    store.load(),
    Err(Error::Duplicate { kind: "event alias", position: 3 })
  ));
}
