//! Todo commands.

use super::{CommandResult, Panel};
use crate::{
  Error, Result,
  index::Index,
  model::{SameIdentity, Todo, TodoTitle},
  organizer::Organizer,
  resolver,
};

fn resolve_todo(organizer: &Organizer, index: Index) -> Result<Todo> {
  index.get(&organizer.filtered_todos()).map(|t| (*t).clone())
}

// ─── add ─────────────────────────────────────────────────────────────────────

/// Adds a todo. A linked contact must exist; the stored name is the
/// contact's own spelling of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodo {
  pub todo: Todo,
}

impl AddTodo {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if organizer.todos.contains(&self.todo) {
      return Err(Error::DuplicateTodo);
    }
    let canonical = self
      .todo
      .contact_name()
      .map(|name| {
        organizer
          .contact_named(name)
          .map(|c| c.name().clone())
          .ok_or_else(|| Error::LinkTargetMissing(name.to_string()))
      })
      .transpose()?;
    let todo = match canonical {
      Some(name) => self.todo.with_contact_name(Some(name)),
      None => self.todo,
    };

    let feedback = format!("New todo added: {todo}");
    organizer.todos.add(todo);
    Ok(CommandResult::showing(feedback, Panel::Todos))
  }
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodo {
  pub index: Index,
}

impl DeleteTodo {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let target = resolve_todo(organizer, self.index)?;
    organizer.todos.remove(&target)?;
    Ok(CommandResult::showing(format!("Deleted todo: {target}"), Panel::Todos))
  }
}

// ─── edit ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoEdits {
  pub title:       Option<TodoTitle>,
  pub description: Option<String>,
}

impl TodoEdits {
  pub fn is_empty(&self) -> bool { self.title.is_none() && self.description.is_none() }

  pub fn apply(&self, todo: &Todo) -> Todo {
    let mut edited = todo.clone();
    if let Some(title) = &self.title {
      edited = edited.with_title(title.clone());
    }
    if let Some(description) = &self.description {
      edited = edited.with_description(description.clone());
    }
    edited
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTodo {
  pub index: Index,
  pub edits: TodoEdits,
}

impl EditTodo {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    if self.edits.is_empty() {
      return Err(Error::NoEdits);
    }
    let target = resolve_todo(organizer, self.index)?;
    let edited = self.edits.apply(&target);
    if organizer
      .todos
      .iter()
      .any(|t| *t != target && t.is_same(&edited))
    {
      return Err(Error::DuplicateTodo);
    }

    organizer.todos.set_item(&target, edited.clone())?;
    Ok(CommandResult::showing(format!("Edited todo: {edited}"), Panel::Todos))
  }
}

// ─── list ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListTodos;

impl ListTodos {
  pub fn execute(self, organizer: &mut Organizer) -> CommandResult {
    organizer.show_all_todos();
    CommandResult::showing("Listed all todos", Panel::Todos)
  }
}

// ─── link ────────────────────────────────────────────────────────────────────

/// Points the todo at `todo_index` at the contact at `contact_index`,
/// replacing any previous link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTodo {
  pub todo_index:    Index,
  pub contact_index: Index,
}

impl LinkTodo {
  pub fn execute(self, organizer: &mut Organizer) -> Result<CommandResult> {
    let target = resolve_todo(organizer, self.todo_index)?;
    let name = resolver::resolve_link_target(organizer, self.contact_index)?
      .name()
      .clone();

    organizer
      .todos
      .set_item(&target, target.with_contact_name(Some(name.clone())))?;
    Ok(CommandResult::showing(
      format!("Linked todo {} to {name}", target.title()),
      Panel::Todos,
    ))
  }
}
