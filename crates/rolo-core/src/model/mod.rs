//! Entity types — contacts, events and todos.
//!
//! Every entity carries two notions of equality:
//!
//! - **Identity** ([`SameIdentity::is_same`]): the weak "same-X" relation used
//!   to de-duplicate collections and to look entities up.
//! - **Structural equality** ([`PartialEq`]): all fields equal. Used to locate
//!   the exact element a removal or replacement targets.
//!
//! All entities are immutable once constructed. Edits produce new values via
//! the `with_*` methods, which re-run any validation they touch.

pub mod contact;
pub mod event;
pub mod todo;

pub use contact::{Address, Contact, Email, Name, Phone, Remark, Tag};
pub use event::{Event, EventAlias, EventName};
pub use todo::{Todo, TodoTitle};

/// The weak, identity-level equality of an entity.
///
/// Implementations must be reflexive and symmetric. Identity is always implied
/// by structural equality: `a == b` implies `a.is_same(b)`.
pub trait SameIdentity {
  fn is_same(&self, other: &Self) -> bool;
}
