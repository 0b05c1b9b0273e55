//! Contact commands.

use super::{CommandResult, Panel};
use crate::{
  Error, Result,
  index::Index,
  model::{Address, Contact, Email, Name, Phone, Remark, SameIdentity, Tag},
  organizer::Organizer,
  resolver,
};

// ─── add ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContact {
  pub contact: Contact,
}

impl AddContact {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if organizer.contacts.contains(&self.contact) {
      return Err(Error::DuplicateContact);
    }
    let feedback = format!("New contact added: {}", self.contact);
    organizer.contacts.add(self.contact);
    Ok(CommandResult::showing(feedback, Panel::Contacts))
  }
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContact {
  pub index: Index,
}

impl DeleteContact {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let target = resolver::resolve_link_target(organizer, self.index)?.clone();
    organizer.contacts.remove(&target)?;
    let dangling = resolver::on_contact_removed(organizer, &target);
    let mut feedback = format!("Deleted contact: {target}");
    if dangling > 0 {
      feedback.push_str(&format!(
        "\n{dangling} todo(s)/event(s) still reference {}",
        target.name()
      ));
    }
    Ok(CommandResult::showing(feedback, Panel::Contacts))
  }
}

// ─── edit ────────────────────────────────────────────────────────────────────

/// The fields to change on a contact. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactEdits {
  pub name:    Option<Name>,
  pub phone:   Option<Phone>,
  pub email:   Option<Email>,
  pub address: Option<Address>,
  /// Replaces the whole tag set; `Some(vec![])` clears it.
  pub tags:    Option<Vec<Tag>>,
}

impl ContactEdits {
  pub fn is_empty(&self) -> bool {
    self.name.is_none()
      && self.phone.is_none()
      && self.email.is_none()
      && self.address.is_none()
      && self.tags.is_none()
  }

  pub fn apply(&self, contact: &Contact) -> Contact {
    let mut edited = contact.clone();
    if let Some(name) = &self.name {
      edited = edited.with_name(name.clone());
    }
    if let Some(phone) = &self.phone {
      edited = edited.with_phone(phone.clone());
    }
    if let Some(email) = &self.email {
      edited = edited.with_email(email.clone());
    }
    if let Some(address) = &self.address {
      edited = edited.with_address(address.clone());
    }
    if let Some(tags) = &self.tags {
      edited = edited.with_tags(tags.iter().cloned());
    }
    edited
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContact {
  pub index: Index,
  pub edits: ContactEdits,
}

impl EditContact {
  /// Replaces the contact in place, then moves every todo and event linked
  /// to the old name over to the new one.
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if self.edits.is_empty() {
      return Err(Error::NoEdits);
    }
    let target = resolver::resolve_link_target(organizer, self.index)?.clone();
    let edited = self.edits.apply(&target);
    let clashes = organizer
      .contacts
      .iter()
      .any(|c| *c != target && c.is_same(&edited));
    if clashes {
      return Err(Error::DuplicateContact);
    }

    organizer.contacts.set_item(&target, edited.clone())?;
    resolver::on_contact_renamed(organizer, &target, &edited);
    organizer.show_all_contacts();
    Ok(CommandResult::showing(
      format!("Edited contact: {edited}"),
      Panel::Contacts,
    ))
  }
}

// ─── list / find ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListContacts;

impl ListContacts {
  pub fn execute(self, organizer: &mut Organizer) -> CommandResult {
    organizer.show_all_contacts();
    CommandResult::showing("Listed all contacts", Panel::Contacts)
  }
}

/// Shows the contacts whose name contains any of the keywords as a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindContacts {
  pub keywords: Vec<String>,
}

impl FindContacts {
  pub fn execute(self, organizer: &mut Organizer) -> CommandResult {
    let keywords = self.keywords;
    organizer.update_contact_filter(move |c| keywords.iter().any(|k| c.name().contains_word(k)));
    let found = organizer.filtered_contacts().len();
    CommandResult::showing(format!("{found} contacts listed!"), Panel::Contacts)
  }
}

// ─── remark ──────────────────────────────────────────────────────────────────

/// Sets the remark of a contact. An empty remark clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkContact {
  pub index:  Index,
  pub remark: Remark,
}

impl RemarkContact {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let target = resolver::resolve_link_target(organizer, self.index)?.clone();
    let cleared = self.remark.is_empty();
    let edited = target.with_remark(self.remark);
    organizer.contacts.set_item(&target, edited.clone())?;

    let feedback = if cleared {
      format!("Removed remark from contact: {edited}")
    } else {
      format!("Added remark to contact: {edited}")
    };
    Ok(CommandResult::showing(feedback, Panel::Contacts))
  }
}
