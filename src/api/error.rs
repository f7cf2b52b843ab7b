/*!

Errors reported to the user of the library. Offending sorts and expressions are rendered to text when the error is
created, so an error does not borrow from the specification it describes.

Programming errors inside the library are not represented here. They panic with a message ending in "This is a
bug."

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::abstractions::join_string;

pub enum DataError {
  /// An enumeration or comprehension with no elements whose sort cannot be inferred.
  EmptyEnumeration {
    expression: String
  },
  /// A bag enumeration whose arguments do not alternate between elements and counts.
  MalformedEnumeration {
    expression: String
  },
  InvalidComprehension {
    expression: String,
    reason    : String
  },
  InvalidNumeral {
    numeral: String,
    sort   : String
  },
  /// A placeholder sort left behind by a parser.
  UnresolvedSort {
    context: String
  },
  AliasCycle {
    alias: String
  },
  /// A projection name used by several constructors of one structured sort with different result sorts.
  ProjectionMismatch {
    projection: String,
    first     : String,
    second    : String
  },
  Inconsistent(Vec<Inconsistency>),
}

impl Display for DataError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      DataError::EmptyEnumeration { expression } => {
        write!(f, "the sort of the empty enumeration {} cannot be determined.", expression)
      }

      DataError::MalformedEnumeration { expression } => {
        write!(f, "the bag enumeration {} does not alternate between elements and counts.", expression)
      }

      DataError::InvalidComprehension { expression, reason } => {
        write!(f, "the comprehension {} is invalid: {}.", expression, reason)
      }

      DataError::InvalidNumeral { numeral, sort } => {
        write!(f, "\"{}\" is not a numeral of sort {}.", numeral, sort)
      }

      DataError::UnresolvedSort { context } => {
        write!(f, "an unresolved sort occurs in {}.", context)
      }

      DataError::AliasCycle { alias } => {
        write!(f, "the sort alias {} is defined in terms of itself.", alias)
      }

      DataError::ProjectionMismatch { projection, first, second } => {
        write!(
          f,
          "the projection {} is declared with result sort {} and with result sort {}.",
          projection,
          first,
          second
        )
      }

      DataError::Inconsistent(problems) => {
        write!(
          f,
          "the specification is not well formed:\n  {}",
          join_string(problems.iter(), "\n  ")
        )
      }

    } // end match on `DataError`
  }
}

impl Debug for DataError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for DataError {}

/// A single problem found by the well-formedness check.
#[derive(Clone, Eq, PartialEq)]
pub enum Inconsistency {
  UndeclaredSort {
    sort   : String,
    context: String
  },
  UndeclaredSymbol {
    symbol  : String,
    sort    : String,
    equation: String
  },
  /// The head of an equation's left-hand side is not a declared symbol.
  UndeclaredHead {
    equation: String
  },
  UnboundVariable {
    variable: String,
    equation: String
  },
  UndeclaredCodomain {
    constructor: String,
    sort       : String
  },
}

impl Display for Inconsistency {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Inconsistency::UndeclaredSort { sort, context } => {
        write!(f, "sort {} in {} is not declared", sort, context)
      }
      Inconsistency::UndeclaredSymbol { symbol, sort, equation } => {
        write!(f, "symbol {}: {} in equation {} is not declared", symbol, sort, equation)
      }
      Inconsistency::UndeclaredHead { equation } => {
        write!(f, "the head of the left-hand side of equation {} is not declared", equation)
      }
      Inconsistency::UnboundVariable { variable, equation } => {
        write!(f, "variable {} of equation {} does not occur in its left-hand side", variable, equation)
      }
      Inconsistency::UndeclaredCodomain { constructor, sort } => {
        write!(f, "the target sort {} of constructor {} is not declared", sort, constructor)
      }
    }
  }
}

impl Debug for Inconsistency {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

pub type DataResult<T> = Result<T, DataError>;
