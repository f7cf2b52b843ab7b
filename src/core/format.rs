/*!

There are different text representations possible for expressions, equations and specifications that we want
depending on the context. This module provides a unified API for formatting objects across the project.

Symbols and variables do not carry their sorts by name, only by handle, so rendering anything that mentions a sort
needs the `SortCollection` that owns it.

*/

use crate::core::sort::SortCollection;

/// The indentation used by multi-line renderings.
pub const DISPLAY_INDENT: usize = 2;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FormatStyle {
  #[default]
  Default, // Use the default formatting
  Simple,  // Names only
  Debug,   // Annotate symbols and variables with their sorts
}

pub trait Formattable {
  /// Writes a text representation of `self` according to the given `FormatStyle`.
  fn repr(&self, sorts: &SortCollection, style: FormatStyle) -> String;
}
