//! Contacts and their validated field types.

use std::{collections::BTreeSet, fmt, sync::LazyLock};

use regex::Regex;

use super::SameIdentity;
use crate::error::ValidationError;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r"^[A-Za-z0-9](?:[A-Za-z0-9+_.-]*[A-Za-z0-9])?@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9]$",
  )
  .expect("valid email regex")
});

const MIN_PHONE_DIGITS: usize = 3;

// ─── Name ────────────────────────────────────────────────────────────────────

/// A contact's full name. Letters, digits and spaces; never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    let valid = trimmed
      .chars()
      .next()
      .is_some_and(char::is_alphanumeric)
      && trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ');
    if !valid {
      return Err(ValidationError::Name(raw));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The identity key: whitespace runs collapsed and case folded, so that
  /// `"alice  pauline"` and `"Alice Pauline"` denote the same contact.
  pub fn identity_key(&self) -> String {
    self
      .0
      .split_whitespace()
      .map(str::to_lowercase)
      .collect::<Vec<_>>()
      .join(" ")
  }

  /// Whether any whitespace-separated word of the name equals `keyword`,
  /// ignoring case.
  pub fn contains_word(&self, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    self
      .0
      .split_whitespace()
      .any(|word| word.to_lowercase() == keyword)
  }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Phone ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.len() < MIN_PHONE_DIGITS || !trimmed.chars().all(|c| c.is_ascii_digit()) {
      return Err(ValidationError::Phone(raw));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Phone {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Email ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if !EMAIL_RE.is_match(trimmed) {
      return Err(ValidationError::Email(raw));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Address ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return Err(ValidationError::Address);
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Address {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Tag ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
  pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
      return Err(ValidationError::Tag(raw));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "[{}]", self.0) }
}

// ─── Remark ──────────────────────────────────────────────────────────────────

/// Free-text note attached to a contact. Empty means "no remark".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remark(String);

impl Remark {
  pub fn new(text: impl Into<String>) -> Self { Self(text.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl fmt::Display for Remark {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A person in the organizer.
///
/// Identity is the normalised name ([`Name::identity_key`]); the remaining
/// fields are descriptive and take part only in structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
  name:    Name,
  phone:   Phone,
  email:   Email,
  address: Address,
  tags:    BTreeSet<Tag>,
  remark:  Remark,
}

impl Contact {
  pub fn new(
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: impl IntoIterator<Item = Tag>,
  ) -> Self {
    Self {
      name,
      phone,
      email,
      address,
      tags: tags.into_iter().collect(),
      remark: Remark::default(),
    }
  }

  pub fn name(&self) -> &Name { &self.name }

  pub fn phone(&self) -> &Phone { &self.phone }

  pub fn email(&self) -> &Email { &self.email }

  pub fn address(&self) -> &Address { &self.address }

  /// Tags in sorted order.
  pub fn tags(&self) -> impl Iterator<Item = &Tag> { self.tags.iter() }

  pub fn remark(&self) -> &Remark { &self.remark }

  pub fn with_name(&self, name: Name) -> Self { Self { name, ..self.clone() } }

  pub fn with_phone(&self, phone: Phone) -> Self { Self { phone, ..self.clone() } }

  pub fn with_email(&self, email: Email) -> Self { Self { email, ..self.clone() } }

  pub fn with_address(&self, address: Address) -> Self {
    Self { address, ..self.clone() }
  }

  pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
    Self { tags: tags.into_iter().collect(), ..self.clone() }
  }

  pub fn with_remark(&self, remark: Remark) -> Self { Self { remark, ..self.clone() } }
}

impl SameIdentity for Contact {
  fn is_same(&self, other: &Self) -> bool {
    self.name.identity_key() == other.name.identity_key()
  }
}

impl fmt::Display for Contact {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
      self.name, self.phone, self.email, self.address
    )?;
    for tag in &self.tags {
      write!(f, "{tag}")?;
    }
    if !self.remark.is_empty() {
      write!(f, "; Remark: {}", self.remark)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::{alice, bob};

  #[test]
  fn name_rejects_blank_and_symbols() {
    assert!(Name::new("").is_err());
    assert!(Name::new("   ").is_err());
    assert!(Name::new("Alice*").is_err());
    assert!(Name::new(" Alice").is_ok());
  }

  #[test]
  fn name_is_trimmed() {
    assert_eq!(Name::new("  Bob Choo ").unwrap().as_str(), "Bob Choo");
  }

  #[test]
  fn phone_requires_three_digits() {
    assert!(Phone::new("12").is_err());
    assert!(Phone::new("91a2").is_err());
    assert!(Phone::new("911").is_ok());
  }

  #[test]
  fn email_format() {
    assert!(Email::new("alice@example.com").is_ok());
    assert!(Email::new("a.b+c@mail.example.org").is_ok());
    assert!(Email::new("alice").is_err());
    assert!(Email::new("@example.com").is_err());
    assert!(Email::new("alice@example.c").is_err());
    assert!(Email::new("-alice@example.com").is_err());
  }

  #[test]
  fn tag_must_be_alphanumeric() {
    assert!(Tag::new("friends").is_ok());
    assert!(Tag::new("best friends").is_err());
    assert!(Tag::new("").is_err());
  }

  #[test]
  fn same_contact_ignores_descriptive_fields() {
    let a = alice();
    let edited = a.with_phone(Phone::new("99999999").unwrap());
    assert!(a.is_same(&edited));
    assert_ne!(a, edited);
  }

  #[test]
  fn same_contact_normalises_name() {
    let a = alice();
    let shouted = a.with_name(Name::new("ALICE   pauline").unwrap());
    assert!(a.is_same(&shouted));
    assert!(!a.is_same(&bob()));
  }

  #[test]
  fn contains_word_matches_whole_words() {
    let name = Name::new("Alice Pauline").unwrap();
    assert!(name.contains_word("alice"));
    assert!(name.contains_word("PAULINE"));
    assert!(!name.contains_word("Ali"));
  }

  #[test]
  fn display_includes_remark_only_when_present() {
    let a = alice();
    assert!(!a.to_string().contains("Remark"));
    let remarked = a.with_remark(Remark::new("likes tea"));
    assert!(remarked.to_string().ends_with("; Remark: likes tea"));
  }
}
