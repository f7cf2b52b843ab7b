/*!

`FSet(E)`, finite sets as strictly ascending lists. `@fset_cons` is only ever applied to an element smaller than
every element of its tail; `@fset_insert` maintains that order, so terms built by inserting are canonical.

*/

use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder},
  core::{implementation::Implementation, sort::SortId}
};

pub(crate) fn generate(b: &Builder, element: SortId) -> Implementation {
  let fset = b.sorts.fset(element);
  let (bool_, nat) = (b.bool_, b.nat);
  let mut implementation = Implementation::new(fset);

  implementation.add_constructor(b.symbol(EMPTY_SET, &[], fset));
  implementation.add_constructor(b.symbol(FSET_CONS, &[element, fset], fset));

  implementation.add_mapping(b.symbol(FSET_INSERT, &[element, fset], fset));
  implementation.add_mapping(b.symbol(FSET_CINSERT, &[element, bool_, fset], fset));
  implementation.add_mapping(b.symbol(ELEMENT_OF, &[element, fset], bool_));
  for name in [MINUS, PLUS, TIMES] {
    implementation.add_mapping(b.symbol(name, &[fset, fset], fset));
  }
  implementation.add_mapping(b.symbol(COUNT, &[fset], nat));

  let vd    = || b.variable("d", element);
  let ve    = || b.variable("e", element);
  let vs    = || b.variable("s", fset);
  let vt    = || b.variable("t", fset);
  let empty = || b.constant(EMPTY_SET, fset);
  let cons  = |d, s| b.call(FSET_CONS, vec![d, s], fset);

  let insert       = |d, s| b.call(FSET_INSERT, vec![d, s], fset);
  let cinsert      = |d, c, s| b.call(FSET_CINSERT, vec![d, c, s], fset);
  let in_          = |d, s| b.call(ELEMENT_OF, vec![d, s], bool_);
  let difference   = |s, t| b.call(MINUS, vec![s, t], fset);
  let union        = |s, t| b.call(PLUS, vec![s, t], fset);
  let intersection = |s, t| b.call(TIMES, vec![s, t], fset);
  let count        = |s| b.call(COUNT, vec![s], nat);

  let ordered = |lhs, rhs| DataEquation::new(lhs, rhs);
  // Equations that only apply when d < e, respectively e < d.
  let d_first = |lhs, rhs| DataEquation::conditional(b.less(vd(), ve()), lhs, rhs);
  let e_first = |lhs, rhs| DataEquation::conditional(b.less(ve(), vd()), lhs, rhs);

  let equations = vec![
    ordered(b.equal(empty(), cons(vd(), vs())), b.false_()),
    ordered(b.equal(cons(vd(), vs()), empty()), b.false_()),
    ordered(b.equal(cons(vd(), vs()), cons(ve(), vt())), b.and(b.equal(vd(), ve()), b.equal(vs(), vt()))),

    // Subset ordering.
    ordered(b.less_equal(empty(), cons(vd(), vs())), b.true_()),
    ordered(b.less_equal(cons(vd(), vs()), empty()), b.false_()),
    ordered(
      b.less_equal(cons(vd(), vs()), cons(ve(), vt())),
      b.if_(
        b.less(vd(), ve()),
        b.false_(),
        b.if_(b.equal(vd(), ve()), b.less_equal(vs(), vt()), b.less_equal(cons(vd(), vs()), vt()))
      )
    ),
    ordered(b.less(empty(), cons(vd(), vs())), b.true_()),
    ordered(b.less(cons(vd(), vs()), empty()), b.false_()),
    ordered(
      b.less(cons(vd(), vs()), cons(ve(), vt())),
      b.if_(
        b.less(vd(), ve()),
        b.false_(),
        b.if_(b.equal(vd(), ve()), b.less(vs(), vt()), b.less_equal(cons(vd(), vs()), vt()))
      )
    ),

    ordered(insert(vd(), empty()), cons(vd(), empty())),
    ordered(insert(vd(), cons(vd(), vs())), cons(vd(), vs())),
    d_first(insert(vd(), cons(ve(), vs())), cons(vd(), cons(ve(), vs()))),
    e_first(insert(vd(), cons(ve(), vs())), cons(ve(), insert(vd(), vs()))),
    ordered(cinsert(vd(), b.false_(), vs()), vs()),
    ordered(cinsert(vd(), b.true_(), vs()), insert(vd(), vs())),

    ordered(in_(vd(), empty()), b.false_()),
    ordered(in_(vd(), cons(ve(), vs())), b.or(b.equal(vd(), ve()), in_(vd(), vs()))),
    ordered(in_(vd(), insert(ve(), vs())), b.or(b.equal(vd(), ve()), in_(vd(), vs()))),

    ordered(difference(vs(), empty()), vs()),
    ordered(difference(empty(), vt()), empty()),
    ordered(difference(cons(vd(), vs()), cons(vd(), vt())), difference(vs(), vt())),
    d_first(difference(cons(vd(), vs()), cons(ve(), vt())), cons(vd(), difference(vs(), cons(ve(), vt())))),
    e_first(difference(cons(vd(), vs()), cons(ve(), vt())), difference(cons(vd(), vs()), vt())),

    ordered(union(vs(), empty()), vs()),
    ordered(union(empty(), vt()), vt()),
    ordered(union(cons(vd(), vs()), cons(vd(), vt())), cons(vd(), union(vs(), vt()))),
    d_first(union(cons(vd(), vs()), cons(ve(), vt())), cons(vd(), union(vs(), cons(ve(), vt())))),
    e_first(union(cons(vd(), vs()), cons(ve(), vt())), cons(ve(), union(cons(vd(), vs()), vt()))),

    ordered(intersection(vs(), empty()), empty()),
    ordered(intersection(empty(), vt()), empty()),
    ordered(intersection(cons(vd(), vs()), cons(vd(), vt())), cons(vd(), intersection(vs(), vt()))),
    d_first(intersection(cons(vd(), vs()), cons(ve(), vt())), intersection(vs(), cons(ve(), vt()))),
    e_first(intersection(cons(vd(), vs()), cons(ve(), vt())), intersection(cons(vd(), vs()), vt())),

    ordered(count(empty()), b.c0()),
    ordered(count(cons(vd(), vs())), b.cnat(b.succ(count(vs())))),
  ];
  for equation in equations {
    implementation.add_equation(equation);
  }

  for dependency in [element, bool_, b.pos, nat] {
    implementation.add_dependency(dependency);
  }
  implementation
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::SortCollection;

  #[test]
  fn insertion_is_guarded_by_order() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let fset  = generate(&b, b.nat);

    let guarded: Vec<String> = fset.equations
                                   .iter()
                                   .filter(|e| e.lhs.head_symbol().is_some_and(is_fset_insert))
                                   .filter_map(|e| e.condition.as_ref().map(|c| c.to_string()))
                                   .collect();
    assert_eq!(guarded, vec!["<(d, e)", "<(e, d)"]);
  }

  #[test]
  fn set_operators_share_names_with_arithmetic() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let fset  = generate(&b, b.bool_);
    let union = fset.mappings.iter().find(|m| is_plus(m)).unwrap();
    assert_eq!(sorts.name(union.sort), "@FSet(Bool) # @FSet(Bool) -> @FSet(Bool)");
  }
}
