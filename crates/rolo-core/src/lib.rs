//! Core types and command layer for the Rolo personal organizer.
//!
//! This crate holds everything with an invariant: the entity types, the
//! [`UniqueList`] containers, the [`Organizer`] that owns them, the
//! cross-reference [`resolver`], and the [`command`] layer that is the only
//! way to change stored data. It performs no I/O; parsing, persistence and
//! rendering live in the other crates.

pub mod command;
pub mod error;
pub mod index;
pub mod list;
pub mod model;
pub mod organizer;
pub mod resolver;

#[cfg(test)]
mod testing;

pub use command::{Command, CommandResult, Panel};
pub use error::{Error, Result, ValidationError};
pub use index::Index;
pub use list::UniqueList;
pub use organizer::{Organizer, OrganizerData, Snapshot};
