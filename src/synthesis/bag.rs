use crate::{
  api::{
    equation::DataEquation,
    expression::DataExpression,
    variable::Variable
  },
  builtin::{names::*, Builder},
  core::{implementation::Implementation, sort::SortId}
};

pub(crate) fn generate(b: &Builder, element: SortId) -> Implementation {
  let bag   = b.sorts.bag(element);
  let fbag  = b.sorts.fbag(element);
  let set   = b.sorts.set(element);
  let fset  = b.sorts.fset(element);
  let (bool_, nat) = (b.bool_, b.nat);
  // Multiplicity functions and characteristic functions
  let multiplicity = b.sorts.function(vec![element], nat);
  let predicate    = b.sorts.function(vec![element], bool_);
  let mut implementation = Implementation::new(bag);

  implementation.add_constructor(b.symbol(BAG_CONSTRUCTOR, &[multiplicity, fbag], bag));

  let mappings = [
    b.symbol(BAGFBAG, &[fbag], bag),
    b.symbol(BAGCOMP, &[multiplicity], bag),
    b.symbol(COUNT_OF, &[element, bag], nat),
    b.symbol(ELEMENT_OF, &[element, bag], bool_),
    b.symbol(PLUS, &[bag, bag], bag),
    b.symbol(TIMES, &[bag, bag], bag),
    b.symbol(MINUS, &[bag, bag], bag),
    b.symbol(BAG2SET, &[bag], set),
    b.symbol(SET2BAG, &[set], bag),
    b.symbol(ZERO_FUNCTION, &[element], nat),
    b.symbol(ONE_FUNCTION, &[element], nat),
    b.symbol(ADD_FUNCTION, &[multiplicity, multiplicity], multiplicity),
    b.symbol(MIN_FUNCTION, &[multiplicity, multiplicity], multiplicity),
    b.symbol(MONUS_FUNCTION, &[multiplicity, multiplicity], multiplicity),
    b.symbol(NAT2BOOL_FUNCTION, &[multiplicity], predicate),
    b.symbol(BOOL2NAT_FUNCTION, &[predicate], multiplicity),
    b.symbol(FBAG_JOIN, &[multiplicity, multiplicity, fbag, fbag], fbag),
    b.symbol(FBAG_INTER, &[multiplicity, multiplicity, fbag, fbag], fbag),
    b.symbol(FBAG_DIF, &[multiplicity, multiplicity, fbag, fbag], fbag),
    b.symbol(FBAG2FSET, &[multiplicity, fbag], fset),
  ];
  for mapping in mappings {
    implementation.add_mapping(mapping);
  }

  let vb = || b.variable("b", fbag);
  let vc = || b.variable("c", fbag);
  let vd = || b.variable("d", element);
  let ve = || b.variable("e", element);
  let vf = || b.variable("f", multiplicity);
  let vg = || b.variable("g", multiplicity);
  let vh = || b.variable("h", predicate);
  let vp = || b.variable("p", b.pos);
  let vq = || b.variable("q", b.pos);
  let vs = || b.variable("s", fset);
  let vx = || b.variable("x", bag);
  let vy = || b.variable("y", bag);
  let c0 = || b.c0();
  let one = || b.cnat(b.c1());

  let at = |function: DataExpression, argument: DataExpression| b.apply(function, vec![argument]);

  let bag_of       = |f, b_| b.call(BAG_CONSTRUCTOR, vec![f, b_], bag);
  let bagfbag      = |b_| b.call(BAGFBAG, vec![b_], bag);
  let bagcomp      = |f| b.call(BAGCOMP, vec![f], bag);
  let count        = |e, x| b.call(COUNT_OF, vec![e, x], nat);
  let in_          = |e, x| b.call(ELEMENT_OF, vec![e, x], bool_);
  let union        = |x, y| b.call(PLUS, vec![x, y], bag);
  let intersection = |x, y| b.call(TIMES, vec![x, y], bag);
  let difference   = |x, y| b.call(MINUS, vec![x, y], bag);
  let bag2set      = |x| b.call(BAG2SET, vec![x], set);
  let set2bag      = |x| b.call(SET2BAG, vec![x], bag);

  let zero_fn     = || b.constant(ZERO_FUNCTION, multiplicity);
  let one_fn      = || b.constant(ONE_FUNCTION, multiplicity);
  let add_fn      = |f, g| b.call(ADD_FUNCTION, vec![f, g], multiplicity);
  let min_fn      = |f, g| b.call(MIN_FUNCTION, vec![f, g], multiplicity);
  let monus_fn    = |f, g| b.call(MONUS_FUNCTION, vec![f, g], multiplicity);
  let nat2bool_fn = |f| b.call(NAT2BOOL_FUNCTION, vec![f], predicate);
  let bool2nat_fn = |h| b.call(BOOL2NAT_FUNCTION, vec![h], multiplicity);
  let false_fn    = || b.constant(FALSE_FUNCTION, predicate);
  let true_fn     = || b.constant(TRUE_FUNCTION, predicate);

  let set_of       = |h, s| b.call(SET_CONSTRUCTOR, vec![h, s], set);
  let fset_empty   = || b.constant(EMPTY_SET, fset);
  let fset_cinsert = |d, c, s| b.call(FSET_CINSERT, vec![d, c, s], fset);
  let fbag_empty   = || b.constant(EMPTY_BAG, fbag);
  let fbag_cons    = |d, p, b_| b.call(FBAG_CONS, vec![d, p, b_], fbag);
  let fbag_cinsert = |d, n, b_| b.call(FBAG_CINSERT, vec![d, n, b_], fbag);
  let fset2fbag    = |s| b.call(FSET2FBAG, vec![s], fbag);
  let fbag2fset    = |f, b_| b.call(FBAG2FSET, vec![f, b_], fset);

  let bound = Variable::new("d", element);

  let mut equations = vec![
    DataEquation::new(bagfbag(vb()), bag_of(zero_fn(), vb())),
    DataEquation::new(bagcomp(vf()), bag_of(vf(), fbag_empty())),
    DataEquation::new(
      count(ve(), bag_of(vf(), vb())),
      b.swap_zero(at(vf(), ve()), count(ve(), vb()))
    ),
    DataEquation::new(in_(ve(), vx()), b.greater(count(ve(), vx()), c0())),
    DataEquation::new(
      b.equal(bag_of(vf(), vb()), bag_of(vg(), vc())),
      b.if_(
        b.equal(vf(), vg()),
        b.equal(vb(), vc()),
        DataExpression::forall(
          vec![bound.clone()],
          b.equal(count(bound.clone().into(), bag_of(vf(), vb())), count(bound.clone().into(), bag_of(vg(), vc())))
        )
      )
    ),
    DataEquation::new(b.less(vx(), vy()), b.and(b.less_equal(vx(), vy()), b.not_equal(vx(), vy()))),
    DataEquation::new(b.less_equal(vx(), vy()), b.equal(intersection(vx(), vy()), vx())),
    DataEquation::new(
      union(bag_of(vf(), vb()), bag_of(vg(), vc())),
      bag_of(add_fn(vf(), vg()), b.call(FBAG_JOIN, vec![vf(), vg(), vb(), vc()], fbag))
    ),
    DataEquation::new(intersection(vx(), vx()), vx()),
    DataEquation::new(intersection(vx(), intersection(vx(), vy())), intersection(vx(), vy())),
    DataEquation::new(intersection(vx(), intersection(vy(), vx())), intersection(vy(), vx())),
    DataEquation::new(intersection(intersection(vx(), vy()), vx()), intersection(vx(), vy())),
    DataEquation::new(intersection(intersection(vy(), vx()), vx()), intersection(vy(), vx())),
    DataEquation::new(
      intersection(bag_of(vf(), vb()), bag_of(vg(), vc())),
      bag_of(min_fn(vf(), vg()), b.call(FBAG_INTER, vec![vf(), vg(), vb(), vc()], fbag))
    ),
    DataEquation::new(
      difference(bag_of(vf(), vb()), bag_of(vg(), vc())),
      bag_of(monus_fn(vf(), vg()), b.call(FBAG_DIF, vec![vf(), vg(), vb(), vc()], fbag))
    ),
    DataEquation::new(bag2set(bag_of(vf(), vb())), set_of(nat2bool_fn(vf()), fbag2fset(vf(), vb()))),
    DataEquation::new(set2bag(set_of(vh(), vs())), bag_of(bool2nat_fn(vh()), fset2fbag(vs()))),

    DataEquation::new(at(zero_fn(), ve()), c0()),
    DataEquation::new(at(one_fn(), ve()), one()),
    DataEquation::new(b.equal(zero_fn(), one_fn()), b.false_()),
    DataEquation::new(b.equal(one_fn(), zero_fn()), b.false_()),

    DataEquation::new(at(add_fn(vf(), vg()), ve()), b.plus(at(vf(), ve()), at(vg(), ve()))),
    DataEquation::new(add_fn(vf(), zero_fn()), vf()),
    DataEquation::new(add_fn(zero_fn(), vf()), vf()),

    DataEquation::new(at(min_fn(vf(), vg()), ve()), b.min(at(vf(), ve()), at(vg(), ve()))),
    DataEquation::new(min_fn(vf(), vf()), vf()),
    DataEquation::new(min_fn(vf(), zero_fn()), zero_fn()),
    DataEquation::new(min_fn(zero_fn(), vf()), zero_fn()),

    DataEquation::new(at(monus_fn(vf(), vg()), ve()), b.monus(at(vf(), ve()), at(vg(), ve()))),
    DataEquation::new(monus_fn(vf(), vf()), zero_fn()),
    DataEquation::new(monus_fn(vf(), zero_fn()), vf()),
    DataEquation::new(monus_fn(zero_fn(), vf()), zero_fn()),

    DataEquation::new(at(nat2bool_fn(vf()), ve()), b.greater(at(vf(), ve()), c0())),
    DataEquation::new(nat2bool_fn(zero_fn()), false_fn()),
    DataEquation::new(nat2bool_fn(one_fn()), true_fn()),
    DataEquation::new(at(bool2nat_fn(vh()), ve()), b.if_(at(vh(), ve()), one(), c0())),
    DataEquation::new(bool2nat_fn(false_fn()), zero_fn()),
    DataEquation::new(bool2nat_fn(true_fn()), one_fn()),
  ];

  // The three pointwise operations on the finite parts follow one pattern. Each element present on either side
  // is inserted with the count the swap-zero helper computes from both multiplicity functions and both counts.
  for (operation, helper) in [(FBAG_JOIN, SWAP_ZERO_ADD), (FBAG_INTER, SWAP_ZERO_MIN), (FBAG_DIF, SWAP_ZERO_MONUS)] {
    let apply   = |x, y| b.call(operation, vec![vf(), vg(), x, y], fbag);
    let correct = |d: &dyn Fn() -> DataExpression, m, n| {
      b.swap_zero_with(helper, [at(vf(), d()), at(vg(), d()), m, n])
    };

    equations.extend([
      DataEquation::new(apply(fbag_empty(), fbag_empty()), fbag_empty()),
      DataEquation::new(
        apply(fbag_cons(vd(), vp(), vb()), fbag_empty()),
        fbag_cinsert(vd(), correct(&vd, b.cnat(vp()), c0()), apply(vb(), fbag_empty()))
      ),
      DataEquation::new(
        apply(fbag_empty(), fbag_cons(ve(), vq(), vc())),
        fbag_cinsert(ve(), correct(&ve, c0(), b.cnat(vq())), apply(fbag_empty(), vc()))
      ),
      DataEquation::new(
        apply(fbag_cons(vd(), vp(), vb()), fbag_cons(vd(), vq(), vc())),
        fbag_cinsert(vd(), correct(&vd, b.cnat(vp()), b.cnat(vq())), apply(vb(), vc()))
      ),
      DataEquation::conditional(
        b.less(vd(), ve()),
        apply(fbag_cons(vd(), vp(), vb()), fbag_cons(ve(), vq(), vc())),
        fbag_cinsert(vd(), correct(&vd, b.cnat(vp()), c0()), apply(vb(), fbag_cons(ve(), vq(), vc())))
      ),
      DataEquation::conditional(
        b.less(ve(), vd()),
        apply(fbag_cons(vd(), vp(), vb()), fbag_cons(ve(), vq(), vc())),
        fbag_cinsert(ve(), correct(&ve, c0(), b.cnat(vq())), apply(fbag_cons(vd(), vp(), vb()), vc()))
      ),
    ]);
  }

  equations.extend([
    DataEquation::new(fbag2fset(vf(), fbag_empty()), fset_empty()),
    DataEquation::new(
      fbag2fset(vf(), fbag_cons(vd(), vp(), vb())),
      fset_cinsert(
        vd(),
        b.equal(b.equal(at(vf(), vd()), b.cnat(vp())), b.greater(at(vf(), vd()), c0())),
        fbag2fset(vf(), vb())
      )
    ),
  ]);

  for equation in equations {
    implementation.add_equation(equation);
  }

  for dependency in [element, nat, fbag, set, fset, multiplicity, predicate] {
    implementation.add_dependency(dependency);
  }
  implementation
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::SortCollection;

  #[test]
  fn count_is_corrected_by_the_finite_part() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let bag   = generate(&b, b.nat);
    let count = bag.equations
                   .iter()
                   .find(|e| e.lhs.head_symbol().is_some_and(is_count_of))
                   .unwrap();
    assert_eq!(count.to_string(), "count(e, @bag(f, b)) = @swap_zero(f(e), count(e, b))");
  }

  #[test]
  fn pointwise_helpers_are_all_used() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let bag   = generate(&b, b.nat);

    for helper in [SWAP_ZERO_ADD, SWAP_ZERO_MIN, SWAP_ZERO_MONUS] {
      let mut used = false;
      for equation in bag.equations.iter() {
        equation.rhs.for_each_symbol(&mut |symbol| used |= symbol.is_named(helper));
      }
      assert!(used, "{} is never used", helper);
    }
  }

  #[test]
  fn bag_needs_sets_and_finite_bags() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let bag   = generate(&b, b.nat);
    for dependency in [sorts.fbag(b.nat), sorts.set(b.nat), sorts.fset(b.nat)] {
      assert!(bag.dependencies.contains(&dependency));
    }
  }
}
