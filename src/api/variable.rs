use std::fmt::{Display, Formatter};

use crate::{
  abstractions::IString,
  core::sort::SortId
};

/// A data variable. As with symbols, the sort is part of the identity: `x: Nat` and `x: Pos` are different
/// variables.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Variable {
  pub name: IString,
  pub sort: SortId,
}

impl Variable {
  pub fn new(name: &str, sort: SortId) -> Self {
    Variable {
      name: IString::from(name),
      sort
    }
  }
}

impl Display for Variable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}
