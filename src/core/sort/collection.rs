/*!

The arena that owns every sort of a specification.

Interning is done through a shared reference. Expression construction routinely needs to intern a function sort
in the middle of building a larger expression, and the collection is shared by everything that builds
expressions, so the table lives behind a `RefCell`. No borrow of the table ever escapes a method: accessors hand
out clones of the (small) `SortKind` values.

*/

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::fmt::Write;

use crate::{
  abstractions::{
    HashMap,
    IString,
    join_with
  },
  core::sort::{
    ContainerKind,
    SortId,
    SortKind,
    StructConstructor,
    SortSubstitution
  }
};

/// The name of the placeholder sort a parser uses for a sort it could not resolve.
pub const UNKNOWN_SORT_NAME: &str = "@unknown";

#[derive(Default, Clone)]
struct SortTable {
  kinds: Vec<SortKind>,
  index: HashMap<SortKind, SortId>,
}

#[derive(Default)]
pub struct SortCollection {
  table: RefCell<SortTable>
}

impl Clone for SortCollection {
  fn clone(&self) -> Self {
    SortCollection {
      table: RefCell::new(self.table.borrow().clone())
    }
  }
}

impl SortCollection {
  pub fn new() -> Self {
    Self::default()
  }

  // region Interning

  /// Returns the handle of `kind`, interning it first if it is not yet present.
  pub fn intern(&self, kind: SortKind) -> SortId {
    let mut guard = self.table.borrow_mut();
    let table     = &mut *guard;
    let next_id   = SortId(table.kinds.len() as u32);
    match table.index.entry(kind) {
      Entry::Occupied(entry) => *entry.get(),
      Entry::Vacant(entry) => {
        let kind = entry.key().clone();
        entry.insert(next_id);
        table.kinds.push(kind);
        next_id
      }
    }
  }

  /// Returns the handle of `kind` only if it has already been interned.
  pub fn lookup(&self, kind: &SortKind) -> Option<SortId> {
    self.table.borrow().index.get(kind).copied()
  }

  pub fn basic(&self, name: &str) -> SortId {
    self.intern(SortKind::Basic(IString::from(name)))
  }

  /// Function sorts always have a nonempty domain. Asking for one with an empty domain is a bug in the caller.
  pub fn function(&self, domain: Vec<SortId>, codomain: SortId) -> SortId {
    assert!(!domain.is_empty(), "tried to create a function sort with an empty domain. This is a bug.");
    self.intern(SortKind::Function { domain, codomain })
  }

  pub fn container(&self, kind: ContainerKind, element: SortId) -> SortId {
    self.intern(SortKind::Container { kind, element })
  }

  pub fn list(&self, element: SortId) -> SortId {
    self.container(ContainerKind::List, element)
  }

  pub fn set(&self, element: SortId) -> SortId {
    self.container(ContainerKind::Set, element)
  }

  pub fn bag(&self, element: SortId) -> SortId {
    self.container(ContainerKind::Bag, element)
  }

  pub fn fset(&self, element: SortId) -> SortId {
    self.container(ContainerKind::FSet, element)
  }

  pub fn fbag(&self, element: SortId) -> SortId {
    self.container(ContainerKind::FBag, element)
  }

  pub fn structured(&self, constructors: Vec<StructConstructor>) -> SortId {
    self.intern(SortKind::Structured(constructors))
  }

  pub fn alias(&self, name: &str, target: SortId) -> SortId {
    self.intern(SortKind::Alias { name: IString::from(name), target })
  }

  /// The placeholder sort for an unresolved sort.
  pub fn unknown(&self) -> SortId {
    self.basic(UNKNOWN_SORT_NAME)
  }

  // endregion Interning

  // region Accessors

  pub fn kind(&self, sort: SortId) -> SortKind {
    self.table.borrow().kinds[sort.index()].clone()
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.table.borrow().kinds.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// All handles issued so far, in interning order.
  pub fn ids(&self) -> impl Iterator<Item = SortId> {
    (0..self.len() as u32).map(SortId)
  }

  pub fn basic_name(&self, sort: SortId) -> Option<IString> {
    match &self.table.borrow().kinds[sort.index()] {
      SortKind::Basic(name) => Some(name.clone()),
      _ => None
    }
  }

  pub fn is_basic(&self, sort: SortId) -> bool {
    matches!(self.table.borrow().kinds[sort.index()], SortKind::Basic(_))
  }

  pub fn is_function(&self, sort: SortId) -> bool {
    matches!(self.table.borrow().kinds[sort.index()], SortKind::Function { .. })
  }

  pub fn is_alias(&self, sort: SortId) -> bool {
    matches!(self.table.borrow().kinds[sort.index()], SortKind::Alias { .. })
  }

  pub fn is_unknown(&self, sort: SortId) -> bool {
    self.basic_name(sort).is_some_and(|name| &*name == UNKNOWN_SORT_NAME)
  }

  /// Container and structured sorts are the sorts the synthesizer compiles.
  pub fn is_synthesized_kind(&self, sort: SortId) -> bool {
    matches!(
      self.table.borrow().kinds[sort.index()],
      SortKind::Container { .. } | SortKind::Structured(_)
    )
  }

  pub fn container_of(&self, sort: SortId) -> Option<(ContainerKind, SortId)> {
    match self.table.borrow().kinds[sort.index()] {
      SortKind::Container { kind, element } => Some((kind, element)),
      _ => None
    }
  }

  pub fn element(&self, sort: SortId) -> Option<SortId> {
    self.container_of(sort).map(|(_, element)| element)
  }

  /// The domain of a function sort, or the empty vector for any other sort.
  pub fn domain(&self, sort: SortId) -> Vec<SortId> {
    match &self.table.borrow().kinds[sort.index()] {
      SortKind::Function { domain, .. } => domain.clone(),
      _ => vec![]
    }
  }

  /// The codomain of a function sort. Any other sort is its own codomain, which is what a constant symbol needs.
  pub fn codomain(&self, sort: SortId) -> SortId {
    match &self.table.borrow().kinds[sort.index()] {
      SortKind::Function { codomain, .. } => *codomain,
      _ => sort
    }
  }

  /// The sorts `sort` is directly built from.
  pub fn direct_dependencies(&self, sort: SortId) -> Vec<SortId> {
    self.table.borrow().kinds[sort.index()].components()
  }

  /// Whether `needle` occurs anywhere in the structure of `haystack`, including `haystack` itself.
  pub fn occurs_in(&self, needle: SortId, haystack: SortId) -> bool {
    if needle == haystack {
      return true;
    }
    self.direct_dependencies(haystack)
        .into_iter()
        .any(|component| self.occurs_in(needle, component))
  }

  // endregion Accessors

  // region Structural operations

  /// Replaces every alias node in `sort` by its target.
  pub fn resolve_aliases(&self, sort: SortId) -> SortId {
    match self.kind(sort) {
      SortKind::Basic(_) => sort,
      SortKind::Alias { target, .. } => self.resolve_aliases(target),
      kind => {
        let resolved = kind.map_components(|component| self.resolve_aliases(component));
        self.intern(resolved)
      }
    }
  }

  /// Structural equality after alias resolution.
  pub fn equivalent(&self, first: SortId, second: SortId) -> bool {
    first == second || self.resolve_aliases(first) == self.resolve_aliases(second)
  }

  /// Applies `substitution` to `sort`. See [`SortSubstitution`] for the exact semantics.
  pub fn substitute(&self, sort: SortId, substitution: &SortSubstitution) -> SortId {
    substitution.apply(self, sort)
  }

  /// A basic sort whose name starts with `prefix` and differs from every sort and alias name interned so far.
  pub fn fresh_basic(&self, prefix: &str) -> SortId {
    let is_taken = |candidate: &str| {
      let name = IString::from(candidate);
      self.table
          .borrow()
          .kinds
          .iter()
          .any(|kind| match kind {
            SortKind::Basic(n) | SortKind::Alias { name: n, .. } => *n == name,
            _ => false
          })
    };

    if !is_taken(prefix) {
      return self.basic(prefix);
    }
    for suffix in 1u32.. {
      let candidate = format!("{}{}", prefix, suffix);
      if !is_taken(&candidate) {
        return self.basic(&candidate);
      }
    }
    unreachable!("exhausted the sort name space while creating a fresh sort name. This is a bug.")
  }

  // endregion Structural operations

  /// A human-readable rendering of `sort`, e.g. `List(Nat) # Pos -> Bool`.
  pub fn name(&self, sort: SortId) -> String {
    match self.kind(sort) {

      SortKind::Basic(name) => name.to_string(),

      SortKind::Function { domain, codomain } => {
        let domain = join_with(
          domain.iter(),
          " # ",
          |out, s| {
            if self.is_function(*s) {
              write!(out, "({})", self.name(*s))
            } else {
              write!(out, "{}", self.name(*s))
            }
          }
        );
        format!("{} -> {}", domain, self.name(codomain))
      }

      SortKind::Container { kind, element } => format!("{}({})", kind, self.name(element)),

      SortKind::Structured(constructors) => {
        let rendered = join_with(
          constructors.iter(),
          " | ",
          |out, c| {
            write!(out, "{}", c.name)?;
            if !c.arguments.is_empty() {
              let arguments = join_with(
                c.arguments.iter(),
                ", ",
                |out, a| match &a.name {
                  Some(projection) => write!(out, "{}: {}", projection, self.name(a.sort)),
                  None => write!(out, "{}", self.name(a.sort)),
                }
              );
              write!(out, "({})", arguments)?;
            }
            if let Some(recognizer) = &c.recognizer {
              write!(out, "?{}", recognizer)?;
            }
            Ok(())
          }
        );
        format!("struct {}", rendered)
      }

      SortKind::Alias { name, .. } => name.to_string(),

    } // end match on `SortKind`
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::StructProjection;

  #[test]
  fn interning_is_structural() {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    let list1 = sorts.list(nat);
    let list2 = sorts.list(sorts.basic("Nat"));
    assert_eq!(list1, list2);
    assert_eq!(sorts.element(list1), Some(nat));
    assert_eq!(sorts.element(nat), None);

    let f = sorts.function(vec![nat, list1], sorts.basic("Bool"));
    assert_eq!(sorts.name(f), "Nat # List(Nat) -> Bool");
    assert_eq!(sorts.domain(f), vec![nat, list1]);
    assert_eq!(sorts.name(sorts.codomain(f)), "Bool");
  }

  #[test]
  fn aliases_resolve_structurally() {
    let sorts   = SortCollection::new();
    let nat     = sorts.basic("Nat");
    let numbers = sorts.alias("Numbers", sorts.list(nat));
    let sets    = sorts.set(numbers);

    assert!(sorts.equivalent(sets, sorts.set(sorts.list(nat))));
    assert!(!sorts.equivalent(sets, sorts.bag(sorts.list(nat))));
    assert!(!sorts.is_alias(sorts.resolve_aliases(sets)));
  }

  #[test]
  #[should_panic]
  fn empty_domain_is_rejected() {
    let sorts = SortCollection::new();
    let bool_ = sorts.basic("Bool");
    sorts.function(vec![], bool_);
  }

  #[test]
  fn fresh_names_avoid_existing_names() {
    let sorts = SortCollection::new();
    sorts.basic("@List");
    sorts.alias("@List1", sorts.basic("Nat"));
    let fresh = sorts.fresh_basic("@List");
    assert_eq!(sorts.name(fresh), "@List2");
  }

  #[test]
  fn structured_rendering() {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    let pair  = sorts.structured(vec![
      StructConstructor::new("pair", vec![
        StructProjection::new(Some("fst"), nat),
        StructProjection::new(Some("snd"), nat),
      ], Some("is_pair")),
      StructConstructor::new("none", vec![], None),
    ]);
    assert_eq!(sorts.name(pair), "struct pair(fst: Nat, snd: Nat)?is_pair | none");
  }
}
