/*!

The synthesizer compiles a container or structured sort into constructors, mappings and equations over primitive
sorts. Each generator returns an [`Implementation`] whose material is written in terms of the *structural* sort,
e.g. `List(Nat)`. The closure engine later replaces every structural sort by the basic sort that implements it in
one simultaneous substitution, so generators never need to know that name.

| sort      | constructors                           | depends on                                            |
|:----------|:---------------------------------------|:------------------------------------------------------|
| `List(E)` | `[]`, `\|>`                            | `Nat`                                                 |
| `FSet(E)` | `{}`, `@fset_cons`                     | `Nat`, `Bool`                                         |
| `Set(E)`  | `@set: (E -> Bool) # FSet(E)`          | `FSet(E)`, `E -> Bool`, `Bool`                        |
| `FBag(E)` | `{:}`, `@fbag_cons: E # Pos # FBag(E)` | `Nat`, `Pos`, `FSet(E)`                               |
| `Bag(E)`  | `@bag: (E -> Nat) # FBag(E)`           | `Nat`, `FBag(E)`, `Set(E)`, `FSet(E)`, `E -> Nat`, `E -> Bool` |
| `struct`  | one per alternative                    | the argument sorts, `Bool`                            |

The element sort is always a dependency as well.

`Set(E)` and `Bag(E)` are represented as a function plus a finite correction: `@set(f, s)` contains `e` iff
`f(e) != in(e, s)`, and `@bag(f, b)` contains `e` with multiplicity `f(e)` corrected by the count of `e` in `b`.
This makes comprehensions, complements and finite enumerations all representable.

## Naming

A structural sort is implemented by a fresh basic sort named `@List`, `@Set`, `@FSet`, `@Bag`, `@FBag` or
`@Struct`, with a numeric suffix when the name is taken. If the user named the structural sort with an alias, that
name is used instead. See [`implementing_sort`].

*/

mod bag;
mod fbag;
mod fset;
mod list;
mod set;
mod structured;

use crate::{
  api::error::DataResult,
  builtin::Builder,
  core::{
    implementation::Implementation,
    sort::{ContainerKind, SortId, SortKind},
    specification::DataSpecification
  }
};

/// Prefix of the names of the basic sorts implementing structured sorts.
pub const STRUCT_PREFIX: &str = "@Struct";

/// Generates the material of the container or structured sort `sort`. Fails only for a structured sort that
/// reuses a projection name with a different result sort.
pub fn synthesize(spec: &DataSpecification, sort: SortId) -> DataResult<Implementation> {
  let b = Builder::new(&spec.sorts);

  match spec.sorts.kind(sort) {

    SortKind::Container { kind, element } => {
      let implementation = match kind {
        ContainerKind::List => list::generate(&b, element),
        ContainerKind::FSet => fset::generate(&b, element),
        ContainerKind::Set  => set::generate(&b, element),
        ContainerKind::FBag => fbag::generate(&b, element),
        ContainerKind::Bag  => bag::generate(&b, element),
      };
      Ok(implementation)
    }

    SortKind::Structured(constructors) => structured::generate(&b, sort, &constructors),

    _ => panic!("cannot synthesize {}: it is not a container or structured sort. This is a bug.", spec.sorts.name(sort)),

  } // end match on sort kind
}

/// The basic sort implementing `sort`: the one already recorded for it, e.g. the name of an alias, or a fresh one.
pub fn implementing_sort(spec: &DataSpecification, sort: SortId) -> SortId {
  if let Some(implementing) = spec.implementation_of(sort) {
    return implementing;
  }

  let prefix = match spec.sorts.container_of(sort) {
    Some((kind, _)) => kind.implementation_prefix(),
    None => STRUCT_PREFIX,
  };
  spec.sorts.fresh_basic(prefix)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::{StructConstructor, StructProjection};

  #[test]
  fn fresh_implementing_names() {
    let mut spec = DataSpecification::new();
    let nat      = spec.sorts.basic("Nat");
    let list     = spec.sorts.list(nat);

    let first = implementing_sort(&spec, list);
    assert_eq!(spec.sorts.name(first), "@List");
    spec.record_implementation(list, first);
    assert_eq!(implementing_sort(&spec, list), first);

    let other = implementing_sort(&spec, spec.sorts.list(spec.sorts.basic("Bool")));
    assert_eq!(spec.sorts.name(other), "@List1");

    let pair = spec.sorts.structured(vec![
      StructConstructor::new("pair", vec![StructProjection::new(Some("fst"), nat)], None)
    ]);
    assert_eq!(spec.sorts.name(implementing_sort(&spec, pair)), "@Struct");
  }

  #[test]
  fn element_sort_is_a_dependency() {
    let spec = DataSpecification::new();
    let d    = spec.sorts.basic("D");
    for kind in [ContainerKind::List, ContainerKind::Set, ContainerKind::Bag, ContainerKind::FSet, ContainerKind::FBag] {
      let container      = spec.sorts.container(kind, d);
      let implementation = synthesize(&spec, container).unwrap();
      assert!(implementation.dependencies.contains(&d), "{}", kind);
      assert_eq!(implementation.sort, container);
    }
  }
}
