/*!

A function symbol is a name together with a sort. The same name may be declared at several sorts: `+` exists once
per combination of argument sorts, for example. Two symbols denote the same operator only if both their names and
their sorts are equal.

Whether a symbol is a constructor or a mapping, and whether it was declared by the user or synthesized, is
recorded by the specification that declares it as a set of `SymbolAttribute` flags. The symbol itself is just the
name and the sort.

*/

use std::fmt::{Display, Formatter};

use enumflags2::{bitflags, make_bitflags, BitFlags};

use crate::{
  abstractions::IString,
  core::sort::SortId
};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSymbol {
  pub name: IString,
  pub sort: SortId,
}

impl FunctionSymbol {
  pub fn new(name: &str, sort: SortId) -> Self {
    FunctionSymbol {
      name: IString::from(name),
      sort
    }
  }

  #[inline(always)]
  pub fn is_named(&self, name: &str) -> bool {
    &*self.name == name
  }
}

impl Display for FunctionSymbol {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}


#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SymbolAttribute {
  Constructor,
  SystemDefined,

  // What kind of synthesized symbol it is
  Projection,
  Recognizer,
  Lifted,
}

pub type SymbolAttributes = BitFlags<SymbolAttribute, u8>;

impl SymbolAttribute {
  #![allow(non_upper_case_globals)]

  /// Attributes that only make sense on symbols the compiler created.
  pub const Synthesized: SymbolAttributes = make_bitflags!(
    SymbolAttribute::{
      Projection
      | Recognizer
      | Lifted
    }
  );
}

impl Display for SymbolAttribute {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      SymbolAttribute::Constructor   => write!(f, "constructor"),
      SymbolAttribute::SystemDefined => write!(f, "system"),
      SymbolAttribute::Projection    => write!(f, "projection"),
      SymbolAttribute::Recognizer    => write!(f, "recognizer"),
      SymbolAttribute::Lifted        => write!(f, "lifted"),
    }
  }
}
