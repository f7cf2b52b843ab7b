/*!

A `SortSubstitution` maps sorts to sorts and is applied to a sort *simultaneously*: a sort produced by the
substitution is never substituted again. Application works top-down and then bottom-up.

 1. If the sort itself is a key, its image is the result.
 2. Otherwise its components are substituted, the sort is rebuilt from them, and if the *rebuilt* sort is a key,
    its image is the result.

The second step matters because keys are stored in normal form. After aliases are removed, `List(N)` with
`N = Nat` is the key `List(Nat)`, and an occurrence of `List(N)` has to be recognized as that key once its
component has been rewritten.

Alias nodes never survive application: an alias `n := e` is replaced by the image of the basic sort `n` if that is
a key, and by the substituted target `e` otherwise.

*/

use crate::{
  abstractions::{HashMap, IString},
  core::sort::{SortCollection, SortId, SortKind}
};

#[derive(Clone, Default, Debug)]
pub struct SortSubstitution {
  map: HashMap<SortId, SortId>,
}

impl SortSubstitution {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, from: SortId, to: SortId) {
    self.map.insert(from, to);
  }

  pub fn get(&self, sort: SortId) -> Option<SortId> {
    self.map.get(&sort).copied()
  }

  pub fn contains(&self, sort: SortId) -> bool {
    self.map.contains_key(&sort)
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn iter(&self) -> impl Iterator<Item = (SortId, SortId)> + '_ {
    self.map.iter().map(|(from, to)| (*from, *to))
  }

  pub fn apply(&self, sorts: &SortCollection, sort: SortId) -> SortId {
    if let Some(image) = self.get(sort) {
      return image;
    }

    match sorts.kind(sort) {
      SortKind::Basic(_) => sort,

      SortKind::Alias { name, target } => {
        match sorts.lookup(&SortKind::Basic(IString::clone(&name))).and_then(|basic| self.get(basic)) {
          Some(image) => image,
          None => self.apply(sorts, target)
        }
      }

      kind => {
        let rebuilt = sorts.intern(kind.map_components(|component| self.apply(sorts, component)));
        self.get(rebuilt).unwrap_or(rebuilt)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn substitution_is_simultaneous() {
    let sorts = SortCollection::new();
    let a     = sorts.basic("A");
    let b     = sorts.basic("B");

    // A -> B and B -> A swap rather than collapse.
    let mut substitution = SortSubstitution::new();
    substitution.insert(a, b);
    substitution.insert(b, a);

    let f = sorts.function(vec![a], b);
    let g = substitution.apply(&sorts, f);
    assert_eq!(sorts.name(g), "B -> A");
  }

  #[test]
  fn rebuilt_sorts_are_matched_against_keys() {
    let sorts   = SortCollection::new();
    let nat     = sorts.basic("Nat");
    let n       = sorts.basic("N");
    let numbers = sorts.basic("Numbers");

    let mut substitution = SortSubstitution::new();
    substitution.insert(n, nat);
    substitution.insert(sorts.list(nat), numbers);

    assert_eq!(substitution.apply(&sorts, sorts.list(n)), numbers);
    assert_eq!(substitution.apply(&sorts, sorts.set(sorts.list(n))), sorts.set(numbers));
  }

  #[test]
  fn alias_nodes_are_removed() {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    let alias = sorts.alias("N", nat);

    let substitution = SortSubstitution::new();
    assert_eq!(substitution.apply(&sorts, sorts.list(alias)), sorts.list(nat));
  }
}
