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
  let set   = b.sorts.set(element);
  let fset  = b.sorts.fset(element);
  let bool_ = b.bool_;
  // Characteristic functions
  let predicate = b.sorts.function(vec![element], bool_);
  let mut implementation = Implementation::new(set);

  implementation.add_constructor(b.symbol(SET_CONSTRUCTOR, &[predicate, fset], set));

  let mappings = [
    b.symbol(SETFSET, &[fset], set),
    b.symbol(SETCOMP, &[predicate], set),
    b.symbol(ELEMENT_OF, &[element, set], bool_),
    b.symbol(NOT, &[set], set),
    b.symbol(PLUS, &[set, set], set),
    b.symbol(TIMES, &[set, set], set),
    b.symbol(MINUS, &[set, set], set),
    b.symbol(FALSE_FUNCTION, &[element], bool_),
    b.symbol(TRUE_FUNCTION, &[element], bool_),
    b.symbol(NOT_FUNCTION, &[predicate], predicate),
    b.symbol(AND_FUNCTION, &[predicate, predicate], predicate),
    b.symbol(OR_FUNCTION, &[predicate, predicate], predicate),
    b.symbol(FSET_UNION, &[predicate, predicate, fset, fset], fset),
    b.symbol(FSET_INTER, &[predicate, predicate, fset, fset], fset),
  ];
  for mapping in mappings {
    implementation.add_mapping(mapping);
  }

  let vd = || b.variable("d", element);
  let ve = || b.variable("e", element);
  let vc = Variable::new("c", element);
  let vs = || b.variable("s", fset);
  let vt = || b.variable("t", fset);
  let vf = || b.variable("f", predicate);
  let vg = || b.variable("g", predicate);
  let vx = || b.variable("x", set);
  let vy = || b.variable("y", set);
  let t  = || b.true_();
  let f  = || b.false_();

  let at = |function: DataExpression, argument: DataExpression| b.apply(function, vec![argument]);

  let set_of       = |f, s| b.call(SET_CONSTRUCTOR, vec![f, s], set);
  let setfset      = |s| b.call(SETFSET, vec![s], set);
  let setcomp      = |f| b.call(SETCOMP, vec![f], set);
  let in_set       = |e, x| b.call(ELEMENT_OF, vec![e, x], bool_);
  let complement   = |x| b.call(NOT, vec![x], set);
  let union        = |x, y| b.call(PLUS, vec![x, y], set);
  let intersection = |x, y| b.call(TIMES, vec![x, y], set);
  let difference   = |x, y| b.call(MINUS, vec![x, y], set);

  let false_fn = || b.constant(FALSE_FUNCTION, predicate);
  let true_fn  = || b.constant(TRUE_FUNCTION, predicate);
  let not_fn   = |f| b.call(NOT_FUNCTION, vec![f], predicate);
  let and_fn   = |f, g| b.call(AND_FUNCTION, vec![f, g], predicate);
  let or_fn    = |f, g| b.call(OR_FUNCTION, vec![f, g], predicate);

  let fset_empty   = || b.constant(EMPTY_SET, fset);
  let fset_cons    = |d, s| b.call(FSET_CONS, vec![d, s], fset);
  let fset_cinsert = |d, c, s| b.call(FSET_CINSERT, vec![d, c, s], fset);
  let in_fset      = |e, s| b.call(ELEMENT_OF, vec![e, s], bool_);
  let fset_union   = |s, t| b.call(FSET_UNION, vec![vf(), vg(), s, t], fset);
  let fset_inter   = |s, t| b.call(FSET_INTER, vec![vf(), vg(), s, t], fset);

  let d_first = |lhs, rhs| DataEquation::conditional(b.less(vd(), ve()), lhs, rhs);
  let e_first = |lhs, rhs| DataEquation::conditional(b.less(ve(), vd()), lhs, rhs);

  let mut equations = vec![
    DataEquation::new(setfset(vs()), set_of(false_fn(), vs())),
    DataEquation::new(setcomp(vf()), set_of(vf(), fset_empty())),
    DataEquation::new(
      in_set(ve(), set_of(vf(), vs())),
      b.not_equal(at(vf(), ve()), in_fset(ve(), vs()))
    ),
    // Two sets are equal iff they agree on every element.
    DataEquation::new(
      b.equal(set_of(vf(), vs()), set_of(vg(), vt())),
      DataExpression::forall(
        vec![vc.clone()],
        b.equal(
          b.equal(at(vf(), vc.clone().into()), at(vg(), vc.clone().into())),
          b.equal(in_fset(vc.clone().into(), vs()), in_fset(vc.clone().into(), vt()))
        )
      )
    ),
    DataEquation::new(b.less(vx(), vy()), b.and(b.less_equal(vx(), vy()), b.not_equal(vx(), vy()))),
    DataEquation::new(b.less_equal(vx(), vy()), b.equal(intersection(vx(), vy()), vx())),
    DataEquation::new(complement(set_of(vf(), vs())), set_of(not_fn(vf()), vs())),
  ];

  // Union and intersection are idempotent, also when nested.
  for operator in [&union as &dyn Fn(DataExpression, DataExpression) -> DataExpression, &intersection] {
    equations.push(DataEquation::new(operator(vx(), vx()), vx()));
    equations.push(DataEquation::new(operator(vx(), operator(vx(), vy())), operator(vx(), vy())));
    equations.push(DataEquation::new(operator(vx(), operator(vy(), vx())), operator(vy(), vx())));
    equations.push(DataEquation::new(operator(operator(vx(), vy()), vx()), operator(vx(), vy())));
    equations.push(DataEquation::new(operator(operator(vy(), vx()), vx()), operator(vy(), vx())));
  }

  equations.extend([
    DataEquation::new(
      union(set_of(vf(), vs()), set_of(vg(), vt())),
      set_of(or_fn(vf(), vg()), fset_union(vs(), vt()))
    ),
    DataEquation::new(
      intersection(set_of(vf(), vs()), set_of(vg(), vt())),
      set_of(and_fn(vf(), vg()), fset_inter(vs(), vt()))
    ),
    DataEquation::new(difference(vx(), vy()), intersection(vx(), complement(vy()))),

    DataEquation::new(at(false_fn(), ve()), f()),
    DataEquation::new(at(true_fn(), ve()), t()),
    DataEquation::new(b.equal(false_fn(), true_fn()), f()),
    DataEquation::new(b.equal(true_fn(), false_fn()), f()),

    DataEquation::new(at(not_fn(vf()), ve()), b.not(at(vf(), ve()))),
    DataEquation::new(not_fn(false_fn()), true_fn()),
    DataEquation::new(not_fn(true_fn()), false_fn()),

    DataEquation::new(at(and_fn(vf(), vg()), ve()), b.and(at(vf(), ve()), at(vg(), ve()))),
    DataEquation::new(and_fn(vf(), vf()), vf()),
    DataEquation::new(and_fn(vf(), false_fn()), false_fn()),
    DataEquation::new(and_fn(false_fn(), vf()), false_fn()),
    DataEquation::new(and_fn(vf(), true_fn()), vf()),
    DataEquation::new(and_fn(true_fn(), vf()), vf()),

    DataEquation::new(or_fn(vf(), vf()), vf()),
    DataEquation::new(or_fn(vf(), false_fn()), vf()),
    DataEquation::new(or_fn(false_fn(), vf()), vf()),
    DataEquation::new(or_fn(vf(), true_fn()), true_fn()),
    DataEquation::new(or_fn(true_fn(), vf()), true_fn()),
    DataEquation::new(at(or_fn(vf(), vg()), ve()), b.or(at(vf(), ve()), at(vg(), ve()))),

    // The finite correction of a union: `d` is listed iff its membership differs from what the union of the
    // characteristic functions says.
    DataEquation::new(fset_union(fset_empty(), fset_empty()), fset_empty()),
    DataEquation::new(
      fset_union(fset_cons(vd(), vs()), fset_empty()),
      fset_cinsert(vd(), b.not(at(vg(), vd())), fset_union(vs(), fset_empty()))
    ),
    DataEquation::new(
      fset_union(fset_empty(), fset_cons(ve(), vt())),
      fset_cinsert(ve(), b.not(at(vf(), ve())), fset_union(fset_empty(), vt()))
    ),
    DataEquation::new(
      fset_union(fset_cons(vd(), vs()), fset_cons(vd(), vt())),
      fset_cinsert(vd(), b.equal(at(vf(), vd()), at(vg(), vd())), fset_union(vs(), vt()))
    ),
    d_first(
      fset_union(fset_cons(vd(), vs()), fset_cons(ve(), vt())),
      fset_cinsert(vd(), b.not(at(vg(), vd())), fset_union(vs(), fset_cons(ve(), vt())))
    ),
    e_first(
      fset_union(fset_cons(vd(), vs()), fset_cons(ve(), vt())),
      fset_cinsert(ve(), b.not(at(vf(), ve())), fset_union(fset_cons(vd(), vs()), vt()))
    ),

    DataEquation::new(fset_inter(fset_empty(), fset_empty()), fset_empty()),
    DataEquation::new(
      fset_inter(fset_cons(vd(), vs()), fset_empty()),
      fset_cinsert(vd(), at(vg(), vd()), fset_inter(vs(), fset_empty()))
    ),
    DataEquation::new(
      fset_inter(fset_empty(), fset_cons(ve(), vt())),
      fset_cinsert(ve(), at(vf(), ve()), fset_inter(fset_empty(), vt()))
    ),
    DataEquation::new(
      fset_inter(fset_cons(vd(), vs()), fset_cons(vd(), vt())),
      fset_cinsert(vd(), b.equal(at(vf(), vd()), at(vg(), vd())), fset_inter(vs(), vt()))
    ),
    d_first(
      fset_inter(fset_cons(vd(), vs()), fset_cons(ve(), vt())),
      fset_cinsert(vd(), at(vg(), vd()), fset_inter(vs(), fset_cons(ve(), vt())))
    ),
    e_first(
      fset_inter(fset_cons(vd(), vs()), fset_cons(ve(), vt())),
      fset_cinsert(ve(), at(vf(), ve()), fset_inter(fset_cons(vd(), vs()), vt()))
    ),
  ]);

  for equation in equations {
    implementation.add_equation(equation);
  }

  for dependency in [element, fset, predicate, bool_] {
    implementation.add_dependency(dependency);
  }
  implementation
}
