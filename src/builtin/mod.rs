/*!

The builtin sorts `Bool`, `Pos`, `Nat`, `Int`, `Real`, and the hidden sort `@NatPair` that `Nat` uses for division.

Each builtin sort has a generator that produces its constructors, the mappings defined on it, and their equations
as an [`Implementation`]. Generators are pure functions of the sort arena: they never look at or modify a
specification, and calling one twice on the same arena produces the same material. The closure engine decides
when to call them and merges the result.

## Encodings

| sort       | constructors                                  | value                       |
|:-----------|:----------------------------------------------|:----------------------------|
| `Bool`     | `true`, `false`                               |                             |
| `Pos`      | `@c1`, `@cDub: Bool # Pos -> Pos`             | `@cDub(b, p)` is `2p + b`   |
| `Nat`      | `@c0`, `@cNat: Pos -> Nat`                    |                             |
| `@NatPair` | `@cPair: Nat # Nat -> @NatPair`               |                             |
| `Int`      | `@cInt: Nat -> Int`, `@cNeg: Pos -> Int`      | `@cNeg(p)` is `-p`          |
| `Real`     | `@cReal: Int # Pos -> Real`                   | `@cReal(x, p)` is `x / p`   |

## Dependencies

Builtin sorts depend on each other through the sorts their material mentions. The dependencies are listed
explicitly by [`BuiltinSort::dependencies`]. The relation has a cycle (`Nat` and `@NatPair`), which the closure
engine handles like any other.

## See Also...

 - [`numeral`] converts decimal numerals to constructor terms.
 - [`standard`] generates the functions every sort has.

*/

pub mod builder;
pub mod names;
pub mod numeral;
pub mod standard;

mod bool_;
mod int;
mod nat;
mod pos;
mod real;

use std::fmt::{Display, Formatter};

pub use builder::Builder;

use crate::core::{
  implementation::Implementation,
  sort::{SortCollection, SortId}
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinSort {
  Bool,
  Pos,
  Nat,
  NatPair,
  Int,
  Real,
}

impl BuiltinSort {
  pub const ALL: [BuiltinSort; 6] = [
    BuiltinSort::Bool,
    BuiltinSort::Pos,
    BuiltinSort::Nat,
    BuiltinSort::NatPair,
    BuiltinSort::Int,
    BuiltinSort::Real,
  ];

  pub fn name(self) -> &'static str {
    match self {
      BuiltinSort::Bool    => "Bool",
      BuiltinSort::Pos     => "Pos",
      BuiltinSort::Nat     => "Nat",
      BuiltinSort::NatPair => "@NatPair",
      BuiltinSort::Int     => "Int",
      BuiltinSort::Real    => "Real",
    }
  }

  pub fn from_name(name: &str) -> Option<BuiltinSort> {
    BuiltinSort::ALL.into_iter().find(|builtin| builtin.name() == name)
  }

  /// The builtin sort `sort` is, if any.
  pub fn of(sorts: &SortCollection, sort: SortId) -> Option<BuiltinSort> {
    sorts.basic_name(sort).and_then(|name| BuiltinSort::from_name(&name))
  }

  pub fn sort(self, sorts: &SortCollection) -> SortId {
    sorts.basic(self.name())
  }

  /// Whether numerals of this sort exist.
  pub fn is_numeric(self) -> bool {
    matches!(self, BuiltinSort::Pos | BuiltinSort::Nat | BuiltinSort::Int | BuiltinSort::Real)
  }

  /// The builtin sorts the material of `self` mentions.
  pub fn dependencies(self) -> &'static [BuiltinSort] {
    use BuiltinSort::*;

    match self {
      Bool    => &[],
      Pos     => &[Bool],
      Nat     => &[Bool, Pos, NatPair],
      NatPair => &[Nat],
      Int     => &[Bool, Pos, Nat],
      Real    => &[Bool, Pos, Nat, Int],
    }
  }
}

impl Display for BuiltinSort {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Generates the constructors, mappings and equations of `builtin`. The standard functions are not included.
pub fn generate(builtin: BuiltinSort, sorts: &SortCollection) -> Implementation {
  let builder = Builder::new(sorts);
  let mut implementation = match builtin {
    BuiltinSort::Bool    => bool_::generate(&builder),
    BuiltinSort::Pos     => pos::generate(&builder),
    BuiltinSort::Nat     => nat::generate(&builder),
    BuiltinSort::NatPair => nat::generate_pair(&builder),
    BuiltinSort::Int     => int::generate(&builder),
    BuiltinSort::Real    => real::generate(&builder),
  };

  for dependency in builtin.dependencies() {
    implementation.add_dependency(builder.sort(*dependency));
  }
  implementation
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::symbol::FunctionSymbol;

  #[test]
  fn generation_is_pure() {
    let sorts  = SortCollection::new();
    for builtin in BuiltinSort::ALL {
      let first  = generate(builtin, &sorts);
      let second = generate(builtin, &sorts);
      assert_eq!(first.constructors, second.constructors);
      assert_eq!(first.mappings, second.mappings);
      assert_eq!(first.equations, second.equations);
    }
  }

  #[test]
  fn plus_has_all_integer_overloads() {
    let sorts = SortCollection::new();
    let mut overloads: Vec<FunctionSymbol> = vec![];
    for builtin in [BuiltinSort::Pos, BuiltinSort::Nat, BuiltinSort::Int, BuiltinSort::Real] {
      overloads.extend(generate(builtin, &sorts).mappings.into_iter().filter(|m| m.is_named("+")));
    }
    let rendered: Vec<String> = overloads.iter().map(|m| sorts.name(m.sort)).collect();
    assert_eq!(
      rendered,
      vec![
        "Pos # Pos -> Pos",
        "Pos # Nat -> Pos",
        "Nat # Pos -> Pos",
        "Nat # Nat -> Nat",
        "Int # Int -> Int",
        "Real # Real -> Real",
      ]
    );
  }

  #[test]
  fn constructors_match_encodings() {
    let sorts = SortCollection::new();
    let render = |builtin| -> Vec<String> {
      generate(builtin, &sorts)
          .constructors
          .iter()
          .map(|c| format!("{}: {}", c.name, sorts.name(c.sort)))
          .collect()
    };
    assert_eq!(render(BuiltinSort::Pos), vec!["@c1: Pos", "@cDub: Bool # Pos -> Pos"]);
    assert_eq!(render(BuiltinSort::Int), vec!["@cInt: Nat -> Int", "@cNeg: Pos -> Int"]);
    assert_eq!(render(BuiltinSort::NatPair), vec!["@cPair: Nat # Nat -> @NatPair"]);
  }
}
