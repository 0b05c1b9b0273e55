//! Error types for `rolo-core`.

use chrono::NaiveDateTime;
use thiserror::Error;

/// A field or cross-field rule violated while constructing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error(
    "names should only contain letters, digits and spaces, and must not be \
     blank: {0:?}"
  )]
  Name(String),

  #[error("phone numbers should only contain digits and be at least 3 digits long: {0:?}")]
  Phone(String),

  #[error("emails should be of the format local-part@domain: {0:?}")]
  Email(String),

  #[error("addresses can take any value but must not be blank")]
  Address,

  #[error("tag names should be alphanumeric: {0:?}")]
  Tag(String),

  #[error("event names must not be blank")]
  EventName,

  #[error(
    "event aliases should only contain letters, digits, '-' and '_', at most \
     32 characters: {0:?}"
  )]
  EventAlias(String),

  #[error("start time {start} must not be after end time {end}")]
  StartAfterEnd {
    start: NaiveDateTime,
    end:   NaiveDateTime,
  },

  #[error("todo titles must not be blank")]
  TodoTitle,

  #[error("index must be a positive integer: {0}")]
  Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Invalid(#[from] ValidationError),

  #[error("this contact already exists in the organizer")]
  DuplicateContact,

  #[error("this event already exists in the organizer")]
  DuplicateEvent,

  #[error("this todo already exists in the organizer")]
  DuplicateTodo,

  #[error("another event already uses the alias {0:?}")]
  DuplicateAlias(String),

  #[error("the item is not in the collection")]
  NotFound,

  #[error("the index {index} is out of range; {len} item(s) are displayed")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("no event has the alias {0:?}")]
  AliasNotFound(String),

  #[error("no contact named {0:?} exists")]
  LinkTargetMissing(String),

  #[error("{contact} is already linked to event {alias:?}")]
  AlreadyLinked { contact: String, alias: String },

  #[error("at least one field to edit must be provided")]
  NoEdits,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
