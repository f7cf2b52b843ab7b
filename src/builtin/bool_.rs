use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder},
  core::implementation::Implementation
};

pub(crate) fn generate(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.bool_);
  let bool_ = b.bool_;

  implementation.add_constructor(b.symbol(BOOL_TRUE, &[], bool_));
  implementation.add_constructor(b.symbol(BOOL_FALSE, &[], bool_));

  implementation.add_mapping(b.symbol(NOT, &[bool_], bool_));
  for name in [AND, OR, IMPLIES] {
    implementation.add_mapping(b.symbol(name, &[bool_, bool_], bool_));
  }

  let x = || b.variable("b", bool_);
  let t = || b.true_();
  let f = || b.false_();

  let equations = [
    (b.not(t()), f()),
    (b.not(f()), t()),
    (b.not(b.not(x())), x()),

    (b.and(x(), t()), x()),
    (b.and(x(), f()), f()),
    (b.and(t(), x()), x()),
    (b.and(f(), x()), f()),

    (b.or(x(), t()), t()),
    (b.or(x(), f()), x()),
    (b.or(t(), x()), t()),
    (b.or(f(), x()), x()),

    (b.implies(x(), t()), t()),
    (b.implies(x(), f()), b.not(x())),
    (b.implies(t(), x()), x()),
    (b.implies(f(), x()), t()),

    (b.equal(t(), x()), x()),
    (b.equal(f(), x()), b.not(x())),
    (b.equal(x(), t()), x()),
    (b.equal(x(), f()), b.not(x())),

    // false < true
    (b.less(f(), x()), x()),
    (b.less(t(), x()), f()),
    (b.less(x(), f()), f()),
    (b.less(x(), t()), b.not(x())),

    (b.less_equal(f(), x()), t()),
    (b.less_equal(t(), x()), x()),
    (b.less_equal(x(), f()), b.not(x())),
    (b.less_equal(x(), t()), t()),
  ];

  for (lhs, rhs) in equations {
    implementation.add_equation(DataEquation::new(lhs, rhs));
  }

  implementation
}
