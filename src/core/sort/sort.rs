/*!

The structural description of a sort and the handle type that refers to one.

See the module level documentation for the [`sort`](crate::core::sort) for how sorts are stored.

*/

use std::fmt::{Display, Formatter};

use crate::abstractions::IString;

/// A handle to a sort interned in a `SortCollection`. Only meaningful together with the collection that issued it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SortId(pub(crate) u32);

impl SortId {
  #[inline(always)]
  pub fn index(self) -> usize {
    self.0 as usize
  }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ContainerKind {
  List,
  Set,
  Bag,
  // Hidden
  FSet,
  FBag,
}

impl ContainerKind {
  pub fn is_hidden(self) -> bool {
    matches!(self, ContainerKind::FSet | ContainerKind::FBag)
  }

  /// The prefix used when naming the basic sort that implements a container of this kind.
  pub fn implementation_prefix(self) -> &'static str {
    match self {
      ContainerKind::List => "@List",
      ContainerKind::Set  => "@Set",
      ContainerKind::Bag  => "@Bag",
      ContainerKind::FSet => "@FSet",
      ContainerKind::FBag => "@FBag",
    }
  }
}

impl Display for ContainerKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ContainerKind::List => write!(f, "List"),
      ContainerKind::Set  => write!(f, "Set"),
      ContainerKind::Bag  => write!(f, "Bag"),
      ContainerKind::FSet => write!(f, "@FSet"),
      ContainerKind::FBag => write!(f, "@FBag"),
    }
  }
}

/// An argument of a structured-sort constructor. Unnamed arguments get no projection.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructProjection {
  pub name: Option<IString>,
  pub sort: SortId,
}

impl StructProjection {
  pub fn new(name: Option<&str>, sort: SortId) -> Self {
    StructProjection {
      name: name.map(IString::from),
      sort
    }
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructConstructor {
  pub name      : IString,
  pub arguments : Vec<StructProjection>,
  /// The name of the recognizer `is_c`, if one was requested.
  pub recognizer: Option<IString>,
}

impl StructConstructor {
  pub fn new(name: &str, arguments: Vec<StructProjection>, recognizer: Option<&str>) -> Self {
    StructConstructor {
      name      : IString::from(name),
      arguments,
      recognizer: recognizer.map(IString::from),
    }
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SortKind {
  Basic(IString),
  Function {
    domain  : Vec<SortId>,
    codomain: SortId,
  },
  Container {
    kind   : ContainerKind,
    element: SortId,
  },
  Structured(Vec<StructConstructor>),
  Alias {
    name  : IString,
    target: SortId,
  },
}

impl SortKind {
  /// The sorts this sort is built from, in order of appearance.
  pub fn components(&self) -> Vec<SortId> {
    match self {
      SortKind::Basic(_) => vec![],
      SortKind::Function { domain, codomain } => {
        let mut result = domain.clone();
        result.push(*codomain);
        result
      }
      SortKind::Container { element, .. } => vec![*element],
      SortKind::Structured(constructors) => {
        constructors.iter()
                    .flat_map(|c| c.arguments.iter().map(|a| a.sort))
                    .collect()
      }
      SortKind::Alias { target, .. } => vec![*target],
    }
  }

  /// Rebuilds `self` with each component sort replaced by `f(component)`.
  pub fn map_components(&self, mut f: impl FnMut(SortId) -> SortId) -> SortKind {
    match self {
      SortKind::Basic(name) => SortKind::Basic(name.clone()),
      SortKind::Function { domain, codomain } => {
        SortKind::Function {
          domain  : domain.iter().map(|s| f(*s)).collect(),
          codomain: f(*codomain),
        }
      }
      SortKind::Container { kind, element } => {
        SortKind::Container { kind: *kind, element: f(*element) }
      }
      SortKind::Structured(constructors) => {
        SortKind::Structured(
          constructors.iter()
                      .map(|c| StructConstructor {
                        name      : c.name.clone(),
                        arguments : c.arguments
                                     .iter()
                                     .map(|a| StructProjection { name: a.name.clone(), sort: f(a.sort) })
                                     .collect(),
                        recognizer: c.recognizer.clone(),
                      })
                      .collect()
        )
      }
      SortKind::Alias { name, target } => SortKind::Alias { name: name.clone(), target: f(*target) },
    } // end match on `SortKind`
  }
}
