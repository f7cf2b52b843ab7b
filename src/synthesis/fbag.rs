/*!

`FBag(E)`, finite bags as strictly ascending lists of elements with positive multiplicities. A count is a `Pos`, so
an element with multiplicity zero is simply absent and every bag has exactly one representation.

*/

use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder},
  core::{implementation::Implementation, sort::SortId}
};

pub(crate) fn generate(b: &Builder, element: SortId) -> Implementation {
  let fbag = b.sorts.fbag(element);
  let fset = b.sorts.fset(element);
  let (bool_, pos, nat) = (b.bool_, b.pos, b.nat);
  let mut implementation = Implementation::new(fbag);

  implementation.add_constructor(b.symbol(EMPTY_BAG, &[], fbag));
  implementation.add_constructor(b.symbol(FBAG_CONS, &[element, pos, fbag], fbag));

  implementation.add_mapping(b.symbol(FBAG_INSERT, &[element, pos, fbag], fbag));
  implementation.add_mapping(b.symbol(FBAG_CINSERT, &[element, nat, fbag], fbag));
  implementation.add_mapping(b.symbol(COUNT_OF, &[element, fbag], nat));
  implementation.add_mapping(b.symbol(ELEMENT_OF, &[element, fbag], bool_));
  for name in [PLUS, TIMES, MINUS] {
    implementation.add_mapping(b.symbol(name, &[fbag, fbag], fbag));
  }
  implementation.add_mapping(b.symbol(COUNT, &[fbag], nat));
  implementation.add_mapping(b.symbol(FSET2FBAG, &[fset], fbag));

  let vd    = || b.variable("d", element);
  let ve    = || b.variable("e", element);
  let vp    = || b.variable("p", pos);
  let vq    = || b.variable("q", pos);
  let vb    = || b.variable("b", fbag);
  let vc    = || b.variable("c", fbag);
  let vs    = || b.variable("s", fset);
  let f     = || b.false_();
  let empty = || b.constant(EMPTY_BAG, fbag);
  let cons  = |d, p, b_| b.call(FBAG_CONS, vec![d, p, b_], fbag);

  let insert       = |d, p, b_| b.call(FBAG_INSERT, vec![d, p, b_], fbag);
  let cinsert      = |d, n, b_| b.call(FBAG_CINSERT, vec![d, n, b_], fbag);
  let count        = |d, b_| b.call(COUNT_OF, vec![d, b_], nat);
  let in_          = |d, b_| b.call(ELEMENT_OF, vec![d, b_], bool_);
  let union        = |x, y| b.call(PLUS, vec![x, y], fbag);
  let intersection = |x, y| b.call(TIMES, vec![x, y], fbag);
  let difference   = |x, y| b.call(MINUS, vec![x, y], fbag);
  let count_all    = |b_| b.call(COUNT, vec![b_], nat);
  let fset2fbag    = |s| b.call(FSET2FBAG, vec![s], fbag);

  let ordered = |lhs, rhs| DataEquation::new(lhs, rhs);
  let d_first = |lhs, rhs| DataEquation::conditional(b.less(vd(), ve()), lhs, rhs);
  let e_first = |lhs, rhs| DataEquation::conditional(b.less(ve(), vd()), lhs, rhs);

  let equations = vec![
    ordered(b.equal(cons(vd(), vp(), vb()), empty()), f()),
    ordered(b.equal(empty(), cons(vd(), vp(), vb())), f()),
    ordered(
      b.equal(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      b.and(b.equal(vp(), vq()), b.and(b.equal(vd(), ve()), b.equal(vb(), vc())))
    ),

    // Sub-bag ordering.
    ordered(b.less_equal(cons(vd(), vp(), vb()), empty()), f()),
    ordered(b.less_equal(empty(), cons(vd(), vp(), vb())), b.true_()),
    ordered(
      b.less_equal(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      b.if_(
        b.less(vd(), ve()),
        f(),
        b.if_(
          b.equal(vd(), ve()),
          b.and(b.less_equal(vp(), vq()), b.less_equal(vb(), vc())),
          b.less_equal(cons(vd(), vp(), vb()), vc())
        )
      )
    ),
    ordered(b.less(cons(vd(), vp(), vb()), empty()), f()),
    ordered(b.less(empty(), cons(vd(), vp(), vb())), b.true_()),
    ordered(
      b.less(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      b.if_(
        b.less(vd(), ve()),
        f(),
        b.if_(
          b.equal(vd(), ve()),
          b.or(
            b.and(b.equal(vp(), vq()), b.less(vb(), vc())),
            b.and(b.less(vp(), vq()), b.less_equal(vb(), vc()))
          ),
          b.less_equal(cons(vd(), vp(), vb()), vc())
        )
      )
    ),

    ordered(insert(vd(), vp(), empty()), cons(vd(), vp(), empty())),
    ordered(insert(vd(), vp(), cons(vd(), vq(), vb())), cons(vd(), b.addc(f(), vp(), vq()), vb())),
    d_first(insert(vd(), vp(), cons(ve(), vq(), vb())), cons(vd(), vp(), cons(ve(), vq(), vb()))),
    e_first(insert(vd(), vp(), cons(ve(), vq(), vb())), cons(ve(), vq(), insert(vd(), vp(), vb()))),
    ordered(cinsert(vd(), b.c0(), vb()), vb()),
    ordered(cinsert(vd(), b.cnat(vp()), vb()), insert(vd(), vp(), vb())),

    ordered(count(vd(), empty()), b.c0()),
    ordered(count(vd(), cons(vd(), vp(), vb())), b.cnat(vp())),
    d_first(count(vd(), cons(ve(), vp(), vb())), b.c0()),
    e_first(count(vd(), cons(ve(), vp(), vb())), count(vd(), vb())),
    ordered(in_(vd(), vb()), b.greater(count(vd(), vb()), b.c0())),

    ordered(fset2fbag(b.constant(EMPTY_SET, fset)), empty()),
    ordered(
      fset2fbag(b.call(FSET_CONS, vec![vd(), vs()], fset)),
      cinsert(vd(), b.cnat(b.c1()), fset2fbag(vs()))
    ),

    ordered(difference(vb(), empty()), vb()),
    ordered(difference(empty(), vc()), empty()),
    ordered(difference(cons(vd(), vp(), vb()), cons(vd(), vp(), vc())), difference(vb(), vc())),
    DataEquation::conditional(
      b.less(vp(), vq()),
      difference(cons(vd(), vp(), vb()), cons(vd(), vq(), vc())),
      difference(vb(), vc())
    ),
    DataEquation::conditional(
      b.less(vq(), vp()),
      difference(cons(vd(), vp(), vb()), cons(vd(), vq(), vc())),
      cons(vd(), b.nat2pos(b.gtesubtb(f(), vp(), vq())), difference(vb(), vc()))
    ),
    d_first(
      difference(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      cons(vd(), vp(), difference(vb(), cons(ve(), vq(), vc())))
    ),
    e_first(
      difference(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      difference(cons(vd(), vp(), vb()), vc())
    ),

    ordered(union(vb(), empty()), vb()),
    ordered(union(empty(), vc()), vc()),
    ordered(
      union(cons(vd(), vp(), vb()), cons(vd(), vq(), vc())),
      cons(vd(), b.addc(f(), vp(), vq()), union(vb(), vc()))
    ),
    d_first(
      union(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      cons(vd(), vp(), union(vb(), cons(ve(), vq(), vc())))
    ),
    e_first(
      union(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      cons(ve(), vq(), union(cons(vd(), vp(), vb()), vc()))
    ),

    ordered(intersection(vb(), empty()), empty()),
    ordered(intersection(empty(), vc()), empty()),
    ordered(
      intersection(cons(vd(), vp(), vb()), cons(vd(), vq(), vc())),
      cons(vd(), b.min(vp(), vq()), intersection(vb(), vc()))
    ),
    d_first(
      intersection(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      intersection(vb(), cons(ve(), vq(), vc()))
    ),
    e_first(
      intersection(cons(vd(), vp(), vb()), cons(ve(), vq(), vc())),
      intersection(cons(vd(), vp(), vb()), vc())
    ),

    ordered(count_all(empty()), b.c0()),
    ordered(count_all(cons(vd(), vp(), empty())), b.cnat(vp())),
    ordered(
      count_all(cons(vd(), vp(), cons(ve(), vq(), vb()))),
      b.cnat(b.addc(f(), vp(), b.nat2pos(count_all(cons(ve(), vq(), vb())))))
    ),
  ];
  for equation in equations {
    implementation.add_equation(equation);
  }

  for dependency in [element, bool_, pos, nat, fset] {
    implementation.add_dependency(dependency);
  }
  implementation
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::SortCollection;

  #[test]
  fn counts_are_positive() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let fbag  = generate(&b, b.nat);
    let cons  = fbag.constructors.iter().find(|c| is_fbag_cons(c)).unwrap();
    assert_eq!(sorts.name(cons.sort), "Nat # Pos # @FBag(Nat) -> @FBag(Nat)");
  }

  #[test]
  fn conditional_insertion_skips_zero() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let fbag  = generate(&b, b.bool_);
    let zero  = fbag.equations
                    .iter()
                    .find(|e| e.lhs.head_symbol().is_some_and(is_fbag_cinsert))
                    .unwrap();
    assert_eq!(zero.to_string(), "@fbag_cinsert(d, @c0, b) = b");
  }
}
