//! [`UniqueList`] — the ordered container holding each entity kind.

use crate::{Error, Result, model::SameIdentity};

/// An insertion-ordered list of entities, de-duplicated by identity.
///
/// Membership ([`contains`](Self::contains)) uses [`SameIdentity`], while
/// removal and replacement locate their target by structural equality.
///
/// [`add`](Self::add) appends without checking for duplicates: keeping the
/// list unique is the job of the command that calls it, which must check
/// `contains` first. [`replace_all`](Self::replace_all) likewise trusts its
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
  items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
  fn default() -> Self { Self { items: Vec::new() } }
}

impl<T: SameIdentity + PartialEq> UniqueList<T> {
  pub fn new() -> Self { Self::default() }

  /// Whether any element is the same entity as `item`.
  pub fn contains(&self, item: &T) -> bool {
    self.items.iter().any(|existing| existing.is_same(item))
  }

  /// Appends `item`. Callers are responsible for rejecting duplicates.
  pub fn add(&mut self, item: T) { self.items.push(item); }

  /// Removes the first element structurally equal to `item`.
  pub fn remove(&mut self, item: &T) -> Result<T> {
    let pos = self.position(item).ok_or(Error::NotFound)?;
    Ok(self.items.remove(pos))
  }

  /// Replaces the element structurally equal to `target` with `replacement`,
  /// keeping its position.
  pub fn set_item(&mut self, target: &T, replacement: T) -> Result<()> {
    let pos = self.position(target).ok_or(Error::NotFound)?;
    self.items[pos] = replacement;
    Ok(())
  }

  /// Replaces the whole backing sequence.
  pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
    self.items = items.into_iter().collect();
  }

  /// A read-only view of the elements, in order.
  ///
  /// The view cannot be used to modify the list:
  ///
  /// ```compile_fail
  /// use rolo_core::{
  ///   UniqueList,
  ///   model::{Todo, TodoTitle},
  /// };
  ///
  /// let todo = |t: &str| Todo::new(TodoTitle::new(t).unwrap(), "", None);
  /// let mut list = UniqueList::new();
  /// list.add(todo("a"));
  /// list.as_view()[0] = todo("b");
  /// ```
  pub fn as_view(&self) -> &[T] { &self.items }

  pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

  pub fn len(&self) -> usize { self.items.len() }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  /// The first element matching `predicate`.
  pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
    self.items.iter().find(|item| predicate(item))
  }

  /// Replaces, in place, every element for which `rewrite` returns a new
  /// value. Returns the number of elements replaced.
  pub(crate) fn rewrite_each(&mut self, mut rewrite: impl FnMut(&T) -> Option<T>) -> usize {
    let mut replaced = 0;
    for item in &mut self.items {
      if let Some(new) = rewrite(item) {
        *item = new;
        replaced += 1;
      }
    }
    replaced
  }

  fn position(&self, item: &T) -> Option<usize> {
    self.items.iter().position(|existing| existing == item)
  }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
  type IntoIter = std::slice::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    model::Todo,
    testing::{alice, review_proposal, send_invites},
  };

  fn todos() -> UniqueList<Todo> { UniqueList::new() }

  #[test]
  fn contains_empty_is_false() {
    assert!(!todos().contains(&review_proposal()));
  }

  #[test]
  fn contains_uses_identity() {
    let mut list = todos();
    list.add(review_proposal());
    let edited = review_proposal().with_description("with finance inputs");
    assert!(list.contains(&edited));
  }

  #[test]
  fn add_does_not_reject_duplicates() {
    let mut list = todos();
    list.add(review_proposal());
    list.add(review_proposal());
    assert_eq!(list.as_view(), &[review_proposal(), review_proposal()]);
  }

  #[test]
  fn remove_missing_is_not_found() {
    assert_eq!(todos().remove(&review_proposal()), Err(Error::NotFound));
  }

  #[test]
  fn remove_requires_structural_match() {
    let mut list = todos();
    list.add(review_proposal());
    let edited = review_proposal().with_description("different");
    assert_eq!(list.remove(&edited), Err(Error::NotFound));
    assert_eq!(list.remove(&review_proposal()), Ok(review_proposal()));
    assert!(list.is_empty());
  }

  #[test]
  fn remove_takes_first_match_only() {
    let mut list = todos();
    list.replace_all([review_proposal(), send_invites(), review_proposal()]);
    list.remove(&review_proposal()).unwrap();
    assert_eq!(list.as_view(), &[send_invites(), review_proposal()]);
  }

  #[test]
  fn set_item_missing_is_not_found() {
    assert_eq!(
      todos().set_item(&review_proposal(), send_invites()),
      Err(Error::NotFound)
    );
  }

  #[test]
  fn set_item_keeps_position() {
    let mut list = todos();
    list.replace_all([review_proposal(), send_invites()]);
    let edited = review_proposal().with_description("Re-review");
    list.set_item(&review_proposal(), edited.clone()).unwrap();
    assert_eq!(list.as_view(), &[edited, send_invites()]);
  }

  #[test]
  fn replace_all_round_trips() {
    let mut list = todos();
    list.add(send_invites());
    let items = vec![review_proposal(), review_proposal(), send_invites()];
    list.replace_all(items.clone());
    assert_eq!(list.as_view(), items.as_slice());
  }

  #[test]
  fn find_returns_first_match() {
    let mut list = UniqueList::new();
    list.add(alice());
    assert_eq!(list.find(|c| c.name().as_str() == "Alice Pauline"), Some(&alice()));
    assert!(list.find(|c| c.name().as_str() == "Nobody").is_none());
  }
}
