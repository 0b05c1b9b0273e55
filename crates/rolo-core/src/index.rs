//! One-based positions into a displayed list.

use std::{fmt, num::NonZeroUsize};

use crate::{Error, Result, error::ValidationError};

/// A 1-based index, as shown to and typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
  pub fn from_one_based(n: usize) -> Result<Self, ValidationError> {
    NonZeroUsize::new(n).map(Self).ok_or(ValidationError::Index(n))
  }

  pub fn from_zero_based(n: usize) -> Self {
    Self(NonZeroUsize::MIN.saturating_add(n))
  }

  pub fn one_based(self) -> usize { self.0.get() }

  pub fn zero_based(self) -> usize { self.0.get() - 1 }

  /// The element at this position of `items`, or
  /// [`Error::IndexOutOfRange`].
  pub fn get<T>(self, items: &[T]) -> Result<&T> {
    items.get(self.zero_based()).ok_or(Error::IndexOutOfRange {
      index: self.one_based(),
      len:   items.len(),
    })
  }
}

impl fmt::Display for Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
