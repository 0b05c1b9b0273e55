//! Todo items.
//!
//! A todo may point at a contact, but only by copying the contact's name.
//! Nothing keeps that name in sync except the resolver's rename cascade, and a
//! removed contact leaves the name behind.

use std::fmt;

use super::{Name, SameIdentity};
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoTitle(String);

impl TodoTitle {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(ValidationError::TodoTitle);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for TodoTitle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
  title:       TodoTitle,
  description: String,
  contact:     Option<Name>,
}

impl Todo {
  pub fn new(
    title: TodoTitle,
    description: impl Into<String>,
    contact: Option<Name>,
  ) -> Self {
    Self { title, description: description.into(), contact }
  }

  pub fn title(&self) -> &TodoTitle { &self.title }

  pub fn description(&self) -> &str { &self.description }

  /// Name of the linked contact, if any. The contact may no longer exist.
  pub fn contact_name(&self) -> Option<&Name> { self.contact.as_ref() }

  pub fn with_title(&self, title: TodoTitle) -> Self { Self { title, ..self.clone() } }

  pub fn with_description(&self, description: impl Into<String>) -> Self {
    Self { description: description.into(), ..self.clone() }
  }

  pub fn with_contact_name(&self, contact: Option<Name>) -> Self {
    Self { contact, ..self.clone() }
  }
}

/// Two todos are the same when their titles match, ignoring case.
impl SameIdentity for Todo {
  fn is_same(&self, other: &Self) -> bool {
    self.title.0.to_lowercase() == other.title.0.to_lowercase()
  }
}

impl fmt::Display for Todo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}; Description: {}", self.title, self.description)?;
    if let Some(contact) = &self.contact {
      write!(f, "; Contact: {contact}")?;
    }
    Ok(())
  }
}
