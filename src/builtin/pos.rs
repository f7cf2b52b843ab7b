use crate::{
  api::equation::DataEquation,
  builtin::{names::*, Builder, BuiltinSort::Pos},
  core::implementation::Implementation
};

pub(crate) fn generate(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.pos);
  let (bool_, pos) = (b.bool_, b.pos);

  implementation.add_constructor(b.symbol(C1, &[], pos));
  implementation.add_constructor(b.symbol(CDUB, &[bool_, pos], pos));

  implementation.add_mapping(b.overloaded_symbol(MAXIMUM, &[Pos, Pos]));
  implementation.add_mapping(b.overloaded_symbol(MINIMUM, &[Pos, Pos]));
  implementation.add_mapping(b.overloaded_symbol(SUCC, &[Pos]));
  implementation.add_mapping(b.symbol(POSPRED, &[pos], pos));
  implementation.add_mapping(b.overloaded_symbol(PLUS, &[Pos, Pos]));
  implementation.add_mapping(b.symbol(ADDC, &[bool_, pos, pos], pos));
  implementation.add_mapping(b.overloaded_symbol(TIMES, &[Pos, Pos]));
  implementation.add_mapping(b.symbol(POWERLOG2, &[pos], pos));

  let vb = || b.variable("b", bool_);
  let vc = || b.variable("c", bool_);
  let vp = || b.variable("p", pos);
  let vq = || b.variable("q", pos);
  let t  = || b.true_();
  let f  = || b.false_();
  let c1 = || b.c1();

  let equations = [
    (b.equal(c1(), b.cdub(vb(), vp())), f()),
    (b.equal(b.cdub(vb(), vp()), c1()), f()),
    (b.equal(b.cdub(vb(), vp()), b.cdub(vb(), vq())), b.equal(vp(), vq())),
    (b.equal(b.cdub(f(), vp()), b.cdub(t(), vq())), f()),
    (b.equal(b.cdub(t(), vp()), b.cdub(f(), vq())), f()),
    (b.equal(b.succ(vp()), c1()), f()),
    (b.equal(c1(), b.succ(vq())), f()),
    (b.equal(b.succ(vp()), b.cdub(vc(), vq())), b.equal(vp(), b.pospred(b.cdub(vc(), vq())))),
    (b.equal(b.cdub(vb(), vp()), b.succ(vq())), b.equal(b.pospred(b.cdub(vb(), vp())), vq())),

    (b.less(vp(), c1()), f()),
    (b.less(c1(), b.cdub(vb(), vp())), t()),
    (
      b.less(b.cdub(vb(), vp()), b.cdub(vc(), vq())),
      b.if_(b.implies(vc(), vb()), b.less(vp(), vq()), b.less_equal(vp(), vq()))
    ),
    (b.less(b.succ(vp()), b.cdub(vc(), vq())), b.less(vp(), b.pospred(b.cdub(vc(), vq())))),
    (b.less(b.cdub(vb(), vp()), b.succ(vq())), b.less_equal(b.cdub(vb(), vp()), vq())),
    (b.less(c1(), b.succ(vq())), t()),

    (b.less_equal(c1(), vp()), t()),
    (b.less_equal(b.cdub(vb(), vp()), c1()), f()),
    (
      b.less_equal(b.cdub(vb(), vp()), b.cdub(vc(), vq())),
      b.if_(b.implies(vb(), vc()), b.less_equal(vp(), vq()), b.less(vp(), vq()))
    ),
    (b.less_equal(b.succ(vp()), b.cdub(vc(), vq())), b.less(vp(), b.cdub(vc(), vq()))),
    (b.less_equal(b.cdub(vb(), vp()), b.succ(vq())), b.less_equal(b.pospred(b.cdub(vb(), vp())), vq())),
    (b.less_equal(b.succ(vp()), c1()), f()),

    (b.max(vp(), vq()), b.if_(b.less_equal(vp(), vq()), vq(), vp())),
    (b.min(vp(), vq()), b.if_(b.less_equal(vp(), vq()), vp(), vq())),

    (b.succ(c1()), b.cdub(f(), c1())),
    (b.succ(b.cdub(f(), vp())), b.cdub(t(), vp())),
    (b.succ(b.cdub(t(), vp())), b.cdub(f(), b.succ(vp()))),

    (b.pospred(c1()), c1()),
    (b.pospred(b.cdub(f(), c1())), c1()),
    (b.pospred(b.cdub(f(), b.cdub(vb(), vp()))), b.cdub(t(), b.pospred(b.cdub(vb(), vp())))),
    (b.pospred(b.cdub(t(), vp())), b.cdub(f(), vp())),

    (b.plus(vp(), vq()), b.addc(f(), vp(), vq())),
    (b.addc(f(), c1(), vp()), b.succ(vp())),
    (b.addc(t(), c1(), vp()), b.succ(b.succ(vp()))),
    (b.addc(f(), vp(), c1()), b.succ(vp())),
    (b.addc(t(), vp(), c1()), b.succ(b.succ(vp()))),
    (b.addc(vb(), b.cdub(vc(), vp()), b.cdub(vc(), vq())), b.cdub(vb(), b.addc(vc(), vp(), vq()))),
    (b.addc(vb(), b.cdub(f(), vp()), b.cdub(t(), vq())), b.cdub(b.not(vb()), b.addc(vb(), vp(), vq()))),
    (b.addc(vb(), b.cdub(t(), vp()), b.cdub(f(), vq())), b.cdub(b.not(vb()), b.addc(vb(), vp(), vq()))),

    (b.times(c1(), vp()), vp()),
    (b.times(vp(), c1()), vp()),
    (b.times(b.cdub(f(), vp()), vq()), b.cdub(f(), b.times(vp(), vq()))),
    (b.times(vp(), b.cdub(f(), vq())), b.cdub(f(), b.times(vp(), vq()))),
    (
      b.times(b.cdub(t(), vp()), b.cdub(t(), vq())),
      b.cdub(t(), b.addc(f(), vp(), b.addc(f(), vq(), b.cdub(f(), b.times(vp(), vq())))))
    ),

    (b.powerlog2(c1()), c1()),
    (b.powerlog2(b.cdub(vb(), c1())), c1()),
    (b.powerlog2(b.cdub(vb(), b.cdub(vc(), vp()))), b.cdub(f(), b.powerlog2(vp()))),
  ];

  for (lhs, rhs) in equations {
    implementation.add_equation(DataEquation::new(lhs, rhs));
  }

  implementation
}
