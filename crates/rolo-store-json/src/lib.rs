//! JSON snapshot persistence for the Rolo organizer.
//!
//! The whole organizer is written as one pretty-printed JSON document and
//! read back in full at startup. Every record is rebuilt through the
//! `rolo-core` constructors, so a loaded organizer satisfies the same
//! invariants as one built through commands.

mod encode;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;

#[cfg(test)]
mod tests;
