use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder},
  core::{implementation::Implementation, sort::SortId}
};

pub(crate) fn generate(b: &Builder, element: SortId) -> Implementation {
  let list = b.sorts.list(element);
  let (bool_, nat) = (b.bool_, b.nat);
  let mut implementation = Implementation::new(list);

  implementation.add_constructor(b.symbol(EMPTY_LIST, &[], list));
  implementation.add_constructor(b.symbol(CONS, &[element, list], list));

  implementation.add_mapping(b.symbol(ELEMENT_OF, &[element, list], bool_));
  implementation.add_mapping(b.symbol(COUNT, &[list], nat));
  implementation.add_mapping(b.symbol(SNOC, &[list, element], list));
  implementation.add_mapping(b.symbol(CONCAT, &[list, list], list));
  implementation.add_mapping(b.symbol(ELEMENT_AT, &[list, nat], element));
  implementation.add_mapping(b.symbol(HEAD, &[list], element));
  implementation.add_mapping(b.symbol(TAIL, &[list], list));
  implementation.add_mapping(b.symbol(RHEAD, &[list], element));
  implementation.add_mapping(b.symbol(RTAIL, &[list], list));

  let vd    = || b.variable("d", element);
  let ve    = || b.variable("e", element);
  let vs    = || b.variable("s", list);
  let vt    = || b.variable("t", list);
  let vp    = || b.variable("p", b.pos);
  let empty = || b.constant(EMPTY_LIST, list);
  let cons  = |d, s| b.call(CONS, vec![d, s], list);

  let in_        = |d, s| b.call(ELEMENT_OF, vec![d, s], bool_);
  let count      = |s| b.call(COUNT, vec![s], nat);
  let snoc       = |s, d| b.call(SNOC, vec![s, d], list);
  let concat     = |s, t| b.call(CONCAT, vec![s, t], list);
  let element_at = |s, n| b.call(ELEMENT_AT, vec![s, n], element);
  let head       = |s| b.call(HEAD, vec![s], element);
  let tail       = |s| b.call(TAIL, vec![s], list);
  let rhead      = |s| b.call(RHEAD, vec![s], element);
  let rtail      = |s| b.call(RTAIL, vec![s], list);

  let equations = [
    (b.equal(empty(), cons(vd(), vs())), b.false_()),
    (b.equal(cons(vd(), vs()), empty()), b.false_()),
    (b.equal(cons(vd(), vs()), cons(ve(), vt())), b.and(b.equal(vd(), ve()), b.equal(vs(), vt()))),
    (b.less(empty(), cons(vd(), vs())), b.true_()),
    (b.less(cons(vd(), vs()), empty()), b.false_()),
    (
      b.less(cons(vd(), vs()), cons(ve(), vt())),
      b.or(b.and(b.equal(vd(), ve()), b.less(vs(), vt())), b.less(vd(), ve()))
    ),
    (b.less_equal(empty(), cons(vd(), vs())), b.true_()),
    (b.less_equal(cons(vd(), vs()), empty()), b.false_()),
    (
      b.less_equal(cons(vd(), vs()), cons(ve(), vt())),
      b.or(b.and(b.equal(vd(), ve()), b.less_equal(vs(), vt())), b.less(vd(), ve()))
    ),

    (in_(vd(), empty()), b.false_()),
    (in_(vd(), cons(ve(), vs())), b.or(b.equal(vd(), ve()), in_(vd(), vs()))),
    (count(empty()), b.c0()),
    (count(cons(vd(), vs())), b.cnat(b.succ(count(vs())))),
    (snoc(empty(), vd()), cons(vd(), empty())),
    (snoc(cons(vd(), vs()), ve()), cons(vd(), snoc(vs(), ve()))),
    (concat(empty(), vs()), vs()),
    (concat(cons(vd(), vs()), vt()), cons(vd(), concat(vs(), vt()))),
    (concat(vs(), empty()), vs()),
    (element_at(cons(vd(), vs()), b.c0()), vd()),
    (element_at(cons(vd(), vs()), b.cnat(vp())), element_at(vs(), b.pred(vp()))),
    (head(cons(vd(), vs())), vd()),
    (tail(cons(vd(), vs())), vs()),
    (rhead(cons(vd(), empty())), vd()),
    (rhead(cons(vd(), cons(ve(), vs()))), rhead(cons(ve(), vs()))),
    (rtail(cons(vd(), empty())), empty()),
    (rtail(cons(vd(), cons(ve(), vs()))), cons(vd(), rtail(cons(ve(), vs())))),
  ];
  for (lhs, rhs) in equations {
    implementation.add_equation(DataEquation::new(lhs, rhs));
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
  fn list_signature() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let list  = generate(&b, b.nat);

    let constructors: Vec<String> = list.constructors
                                        .iter()
                                        .map(|c| format!("{}: {}", c.name, sorts.name(c.sort)))
                                        .collect();
    assert_eq!(constructors, vec!["[]: List(Nat)", "|>: Nat # List(Nat) -> List(Nat)"]);
    assert_eq!(list.mappings.len(), 9);
    assert!(list.dependencies.contains(&b.nat));
  }

  #[test]
  fn element_at_uses_nat() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let list  = generate(&b, b.bool_);
    let at    = list.mappings.iter().find(|m| is_element_at(m)).unwrap();
    assert_eq!(sorts.name(at.sort), "List(Bool) # Nat -> Bool");
  }
}
