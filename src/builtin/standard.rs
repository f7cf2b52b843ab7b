/*!

The functions every sort has: equality, inequality, `if`, and the four comparisons. The equations only fix what
holds for any sort. A sort with constructors refines `==`, `<` and `<=` with equations of its own.

*/

use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder},
  core::{
    implementation::Implementation,
    sort::{SortCollection, SortId}
  }
};

/// The standard functions on `sort` and their equations. Depends on `Bool`.
pub fn standard_functions(sorts: &SortCollection, sort: SortId) -> Implementation {
  let b     = Builder::new(sorts);
  let bool_ = b.bool_;
  let mut implementation = Implementation::new(sort);

  for name in [EQUAL, NOT_EQUAL] {
    implementation.add_mapping(b.symbol(name, &[sort, sort], bool_));
  }
  implementation.add_mapping(b.symbol(IF_THEN_ELSE, &[bool_, sort, sort], sort));
  for name in [LESS, LESS_EQUAL, GREATER, GREATER_EQUAL] {
    implementation.add_mapping(b.symbol(name, &[sort, sort], bool_));
  }

  let x  = || b.variable("x", sort);
  let y  = || b.variable("y", sort);
  let vb = || b.variable("b", bool_);

  let equations = [
    (b.equal(x(), x()), b.true_()),
    (b.not_equal(x(), y()), b.not(b.equal(x(), y()))),
    (b.if_(b.true_(), x(), y()), x()),
    (b.if_(b.false_(), x(), y()), y()),
    (b.if_(vb(), x(), x()), x()),
    (b.less(x(), x()), b.false_()),
    (b.less_equal(x(), x()), b.true_()),
    (b.greater_equal(x(), y()), b.less_equal(y(), x())),
    (b.greater(x(), y()), b.less(y(), x())),
  ];
  for (lhs, rhs) in equations {
    implementation.add_equation(DataEquation::new(lhs, rhs));
  }

  implementation.add_dependency(bool_);
  implementation
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_sort_gets_seven_functions() {
    let sorts = SortCollection::new();
    let d     = sorts.basic("D");
    let standard = standard_functions(&sorts, d);

    let rendered: Vec<String> = standard.mappings
                                        .iter()
                                        .map(|m| format!("{}: {}", m.name, sorts.name(m.sort)))
                                        .collect();
    assert_eq!(
      rendered,
      vec![
        "==: D # D -> Bool",
        "!=: D # D -> Bool",
        "if: Bool # D # D -> D",
        "<: D # D -> Bool",
        "<=: D # D -> Bool",
        ">: D # D -> Bool",
        ">=: D # D -> Bool",
      ]
    );
    assert_eq!(standard.equations.len(), 9);
    assert_eq!(standard.dependencies, vec![sorts.basic("Bool")]);
  }

  #[test]
  fn function_sorts_get_them_too() {
    let sorts = SortCollection::new();
    let f     = sorts.function(vec![sorts.basic("D")], sorts.basic("Bool"));
    let standard = standard_functions(&sorts, f);
    assert_eq!(standard.equations[0].to_string(), "==(x, x) = true");
    assert_eq!(standard.mappings[2].sort, sorts.function(vec![sorts.basic("Bool"), f, f], f));
  }
}
