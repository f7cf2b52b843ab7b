/*!

A `NatSet` is a set of small natural numbers. Sort handles are dense indices into the sort arena, so sets of sorts
(visited sets during closure and finiteness analysis, the set of already implemented sorts, the set of
system-defined sorts) are `NatSet`s.

*/

use std::fmt::{Debug, Formatter};

use bit_set::BitSet;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NatSet(BitSet);

impl NatSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns `true` if the value was not already present.
  #[inline(always)]
  pub fn insert(&mut self, value: usize) -> bool {
    self.0.insert(value)
  }

  /// Returns `true` if the value was present.
  #[inline(always)]
  pub fn remove(&mut self, value: usize) -> bool {
    self.0.remove(value)
  }

  #[inline(always)]
  pub fn contains(&self, value: usize) -> bool {
    self.0.contains(value)
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn union_with(&mut self, other: &NatSet) {
    self.0.union_with(&other.0);
  }

  pub fn is_subset(&self, other: &NatSet) -> bool {
    self.0.is_subset(&other.0)
  }

  pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
    self.0.iter()
  }
}

impl FromIterator<usize> for NatSet {
  fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
    let mut set = NatSet::new();
    for value in iter {
      set.insert(value);
    }
    set
  }
}

impl Debug for NatSet {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_set().entries(self.iter()).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_and_union() {
    let mut a: NatSet = [1, 4, 9].into_iter().collect();
    assert!(!a.insert(4));
    assert!(a.insert(2));

    let b: NatSet = [9, 30].into_iter().collect();
    a.union_with(&b);

    assert_eq!(a.iter().collect::<Vec<_>>(), vec![1, 2, 4, 9, 30]);
    assert!(b.is_subset(&a));
    assert!(a.remove(30));
    assert!(!a.contains(30));
    assert_eq!(a.len(), 4);
  }
}
