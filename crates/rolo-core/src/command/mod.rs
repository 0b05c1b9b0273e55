//! The command layer.
//!
//! A [`Command`] is built from already-validated arguments and consumed by
//! [`Command::execute`]. Every command runs all of its checks before touching
//! the [`Organizer`]: a rejected command leaves it exactly as it was.

pub mod contact;
pub mod event;
pub mod todo;

use std::fmt;

pub use contact::{
  AddContact, ContactEdits, DeleteContact, EditContact, FindContacts, ListContacts,
  RemarkContact,
};
pub use event::{AddEvent, DeleteEvent, EditEvent, EventEdits, LinkEvent, ListEvents};
pub use todo::{AddTodo, DeleteTodo, EditTodo, LinkTodo, ListTodos, TodoEdits};

use crate::{Result, organizer::Organizer};

/// Which list the presentation layer should bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
  Contacts,
  Events,
  Todos,
}

/// The outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  /// Message for the user.
  pub feedback: String,
  /// Panel to refresh, if the command changed what should be displayed.
  pub show:     Option<Panel>,
}

impl CommandResult {
  pub fn new(feedback: impl Into<String>) -> Self {
    Self { feedback: feedback.into(), show: None }
  }

  pub fn showing(feedback: impl Into<String>, panel: Panel) -> Self {
    Self { feedback: feedback.into(), show: Some(panel) }
  }
}

impl fmt::Display for CommandResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.feedback) }
}

// ─── Command ─────────────────────────────────────────────────────────────────

/// Every operation the organizer supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  AddContact(AddContact),
  DeleteContact(DeleteContact),
  EditContact(EditContact),
  ListContacts(ListContacts),
  FindContacts(FindContacts),
  Remark(RemarkContact),

  AddEvent(AddEvent),
  DeleteEvent(DeleteEvent),
  EditEvent(EditEvent),
  ListEvents(ListEvents),
  LinkEvent(LinkEvent),

  AddTodo(AddTodo),
  DeleteTodo(DeleteTodo),
  EditTodo(EditTodo),
  ListTodos(ListTodos),
  LinkTodo(LinkTodo),
}

impl Command {
  /// The command word, as typed by the user.
  pub fn word(&self) -> &'static str {
    match self {
      Self::AddContact(_) => "add",
      Self::DeleteContact(_) => "delete",
      Self::EditContact(_) => "edit",
      Self::ListContacts(_) => "list",
      Self::FindContacts(_) => "find",
      Self::Remark(_) => "remark",
      Self::AddEvent(_) => "add-event",
      Self::DeleteEvent(_) => "delete-event",
      Self::EditEvent(_) => "edit-event",
      Self::ListEvents(_) => "list-events",
      Self::LinkEvent(_) => "link-event",
      Self::AddTodo(_) => "add-todo",
      Self::DeleteTodo(_) => "delete-todo",
      Self::EditTodo(_) => "edit-todo",
      Self::ListTodos(_) => "list-todos",
      Self::LinkTodo(_) => "link-todo",
    }
  }

  /// Whether a successful run changes stored data (as opposed to filters).
  pub fn is_mutating(&self) -> bool {
    !matches!(
      self,
      Self::ListContacts(_) | Self::FindContacts(_) | Self::ListEvents(_) | Self::ListTodos(_)
    )
  }

  /// Runs the command against `organizer`.
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let word = self.word();
    let outcome = match self {
      Self::AddContact(c) => c.execute(organizer),
      Self::DeleteContact(c) => c.execute(organizer),
      Self::EditContact(c) => c.execute(organizer),
      Self::ListContacts(c) => Ok(c.execute(organizer)),
      Self::FindContacts(c) => Ok(c.execute(organizer)),
      Self::Remark(c) => c.execute(organizer),
      Self::AddEvent(c) => c.execute(organizer),
      Self::DeleteEvent(c) => c.execute(organizer),
      Self::EditEvent(c) => c.execute(organizer),
      Self::ListEvents(c) => Ok(c.execute(organizer)),
      Self::LinkEvent(c) => c.execute(organizer),
      Self::AddTodo(c) => c.execute(organizer),
      Self::DeleteTodo(c) => c.execute(organizer),
      Self::EditTodo(c) => c.execute(organizer),
      Self::ListTodos(c) => Ok(c.execute(organizer)),
      Self::LinkTodo(c) => c.execute(organizer),
    };
    match &outcome {
      Ok(result) => tracing::debug!(command = word, feedback = %result.feedback, "applied"),
      Err(e) => tracing::debug!(command = word, error = %e, "rejected"),
    }
    outcome
  }
}

macro_rules! impl_from_variant {
  ($($variant:ident($ty:ty)),* $(,)?) => {
    $(
      impl From<$ty> for Command {
        fn from(c: $ty) -> Self { Self::$variant(c) }
      }
    )*
  };
}

impl_from_variant! {
  AddContact(AddContact),
  DeleteContact(DeleteContact),
  EditContact(EditContact),
  ListContacts(ListContacts),
  FindContacts(FindContacts),
  Remark(RemarkContact),
  AddEvent(AddEvent),
  DeleteEvent(DeleteEvent),
  EditEvent(EditEvent),
  ListEvents(ListEvents),
  LinkEvent(LinkEvent),
  AddTodo(AddTodo),
  DeleteTodo(DeleteTodo),
  EditTodo(EditTodo),
  ListTodos(ListTodos),
  LinkTodo(LinkTodo),
}
