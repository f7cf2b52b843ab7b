use crate::{
  api::equation::DataEquation,
  builtin::{
    names::*,
    Builder,
    BuiltinSort::{Int, Nat, Pos}
  },
  core::implementation::Implementation
};

pub(crate) fn generate(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.int);
  let (pos, nat, int) = (b.pos, b.nat, b.int);

  implementation.add_constructor(b.symbol(CINT, &[nat], int));
  implementation.add_constructor(b.symbol(CNEG, &[pos], int));

  let mappings = [
    b.symbol(NAT2INT, &[nat], int),
    b.symbol(INT2NAT, &[int], nat),
    b.symbol(POS2INT, &[pos], int),
    b.symbol(INT2POS, &[int], pos),
    b.overloaded_symbol(MAXIMUM, &[Pos, Int]),
    b.overloaded_symbol(MAXIMUM, &[Int, Pos]),
    b.overloaded_symbol(MAXIMUM, &[Nat, Int]),
    b.overloaded_symbol(MAXIMUM, &[Int, Nat]),
    b.overloaded_symbol(MAXIMUM, &[Int, Int]),
    b.overloaded_symbol(MINIMUM, &[Int, Int]),
    b.overloaded_symbol(ABS, &[Int]),
    b.overloaded_symbol(MINUS, &[Pos]),
    b.overloaded_symbol(MINUS, &[Nat]),
    b.overloaded_symbol(MINUS, &[Int]),
    b.overloaded_symbol(SUCC, &[Int]),
    b.overloaded_symbol(PRED, &[Nat]),
    b.overloaded_symbol(PRED, &[Int]),
    b.overloaded_symbol(PLUS, &[Int, Int]),
    b.overloaded_symbol(MINUS, &[Pos, Pos]),
    b.overloaded_symbol(MINUS, &[Nat, Nat]),
    b.overloaded_symbol(MINUS, &[Int, Int]),
    b.overloaded_symbol(TIMES, &[Int, Int]),
    b.overloaded_symbol(DIV, &[Int, Pos]),
    b.overloaded_symbol(MODULO, &[Int, Pos]),
    b.overloaded_symbol(EXP, &[Int, Nat]),
  ];
  for mapping in mappings {
    implementation.add_mapping(mapping);
  }

  let vn = || b.variable("n", nat);
  let vm = || b.variable("m", nat);
  let vp = || b.variable("p", pos);
  let vq = || b.variable("q", pos);
  let vx = || b.variable("x", int);
  let vy = || b.variable("y", int);
  let t  = || b.true_();
  let f  = || b.false_();
  let c0 = || b.c0();
  let c1 = || b.c1();
  let cnat = |p| b.cnat(p);
  let cint = |n| b.cint(n);
  let cneg = |p| b.cneg(p);

  let equations = vec![
    DataEquation::new(b.equal(cint(vm()), cint(vn())), b.equal(vm(), vn())),
    DataEquation::new(b.equal(cint(vn()), cneg(vp())), f()),
    DataEquation::new(b.equal(cneg(vp()), cint(vn())), f()),
    DataEquation::new(b.equal(cneg(vp()), cneg(vq())), b.equal(vp(), vq())),
    DataEquation::new(b.less(cint(vm()), cint(vn())), b.less(vm(), vn())),
    DataEquation::new(b.less(cint(vn()), cneg(vp())), f()),
    DataEquation::new(b.less(cneg(vp()), cint(vn())), t()),
    DataEquation::new(b.less(cneg(vp()), cneg(vq())), b.less(vq(), vp())),
    DataEquation::new(b.less_equal(cint(vm()), cint(vn())), b.less_equal(vm(), vn())),
    DataEquation::new(b.less_equal(cint(vn()), cneg(vp())), f()),
    DataEquation::new(b.less_equal(cneg(vp()), cint(vn())), t()),
    DataEquation::new(b.less_equal(cneg(vp()), cneg(vq())), b.less_equal(vq(), vp())),

    DataEquation::new(b.nat2int(vn()), cint(vn())),
    DataEquation::new(b.int2nat(cint(vn())), vn()),
    DataEquation::new(b.pos2int(vp()), cint(cnat(vp()))),
    DataEquation::new(b.int2pos(cint(vn())), b.nat2pos(vn())),

    DataEquation::new(b.max(vp(), cint(vn())), b.max(vp(), vn())),
    DataEquation::new(b.max(vp(), cneg(vq())), vp()),
    DataEquation::new(b.max(cint(vn()), vp()), b.max(vn(), vp())),
    DataEquation::new(b.max(cneg(vq()), vp()), vp()),
    DataEquation::new(b.max(vm(), cint(vn())), b.if_(b.less_equal(vm(), vn()), vn(), vm())),
    DataEquation::new(b.max(vn(), cneg(vp())), vn()),
    DataEquation::new(b.max(cint(vm()), vn()), b.if_(b.less_equal(vm(), vn()), vn(), vm())),
    DataEquation::new(b.max(cneg(vp()), vn()), vn()),
    DataEquation::new(b.max(vx(), vy()), b.if_(b.less_equal(vx(), vy()), vy(), vx())),
    DataEquation::new(b.min(vx(), vy()), b.if_(b.less_equal(vx(), vy()), vx(), vy())),

    DataEquation::new(b.abs(cint(vn())), vn()),
    DataEquation::new(b.abs(cneg(vp())), cnat(vp())),

    DataEquation::new(b.negate(vp()), cneg(vp())),
    DataEquation::new(b.negate(c0()), cint(c0())),
    DataEquation::new(b.negate(cnat(vp())), cneg(vp())),
    DataEquation::new(b.negate(cint(vn())), b.negate(vn())),
    DataEquation::new(b.negate(cneg(vp())), cint(cnat(vp()))),

    DataEquation::new(b.succ(cint(vn())), cint(cnat(b.succ(vn())))),
    DataEquation::new(b.succ(cneg(vp())), b.negate(b.pred(vp()))),
    DataEquation::new(b.pred(c0()), cneg(c1())),
    DataEquation::new(b.pred(cnat(vp())), cint(b.pred(vp()))),
    DataEquation::new(b.pred(cint(vn())), b.pred(vn())),
    DataEquation::new(b.pred(cneg(vp())), cneg(b.succ(vp()))),

    DataEquation::new(b.plus(cint(vm()), cint(vn())), cint(b.plus(vm(), vn()))),
    DataEquation::new(b.plus(cint(vn()), cneg(vp())), b.minus(vn(), cnat(vp()))),
    DataEquation::new(b.plus(cneg(vp()), cint(vn())), b.minus(vn(), cnat(vp()))),
    DataEquation::new(b.plus(cneg(vp()), cneg(vq())), cneg(b.addc(f(), vp(), vq()))),

    DataEquation::conditional(
      b.less_equal(vq(), vp()),
      b.minus(vp(), vq()),
      cint(b.gtesubtb(f(), vp(), vq()))
    ),
    DataEquation::conditional(
      b.less(vp(), vq()),
      b.minus(vp(), vq()),
      b.negate(b.gtesubtb(f(), vq(), vp()))
    ),
    DataEquation::conditional(b.less_equal(vn(), vm()), b.minus(vm(), vn()), cint(b.monus(vm(), vn()))),
    DataEquation::conditional(b.less(vm(), vn()), b.minus(vm(), vn()), b.negate(b.monus(vn(), vm()))),
    DataEquation::new(b.minus(vx(), vy()), b.plus(vx(), b.negate(vy()))),

    DataEquation::new(b.times(cint(vm()), cint(vn())), cint(b.times(vm(), vn()))),
    DataEquation::new(b.times(cint(vn()), cneg(vp())), b.negate(b.times(cnat(vp()), vn()))),
    DataEquation::new(b.times(cneg(vp()), cint(vn())), b.negate(b.times(cnat(vp()), vn()))),
    DataEquation::new(b.times(cneg(vp()), cneg(vq())), cint(cnat(b.times(vp(), vq())))),

    DataEquation::new(b.div(cint(vn()), vp()), cint(b.div(vn(), vp()))),
    DataEquation::new(b.div(cneg(vp()), vq()), cneg(b.succ(b.div(b.pred(vp()), vq())))),
    DataEquation::new(b.modulo(cint(vn()), vp()), b.modulo(vn(), vp())),
    DataEquation::new(
      b.modulo(cneg(vp()), vq()),
      b.int2nat(b.minus(vq(), b.succ(b.modulo(b.pred(vp()), vq()))))
    ),

    DataEquation::new(b.exp(cint(vm()), vn()), cint(b.exp(vm(), vn()))),
    DataEquation::conditional(b.even(vn()), b.exp(cneg(vp()), vn()), cint(cnat(b.exp(vp(), vn())))),
    DataEquation::conditional(b.not(b.even(vn())), b.exp(cneg(vp()), vn()), cneg(b.exp(vp(), vn()))),
  ];

  for equation in equations {
    implementation.add_equation(equation);
  }

  implementation
}
