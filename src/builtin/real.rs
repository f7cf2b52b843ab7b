use crate::{
  api::equation::DataEquation,
  builtin::{
    names::*,
    Builder,
    BuiltinSort::{Int, Nat, Pos, Real}
  },
  core::implementation::Implementation
};

pub(crate) fn generate(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.real);
  let (pos, nat, int, real) = (b.pos, b.nat, b.int, b.real);

  implementation.add_constructor(b.symbol(CREAL, &[int, pos], real));

  let mappings = [
    b.symbol(POS2REAL, &[pos], real),
    b.symbol(NAT2REAL, &[nat], real),
    b.symbol(INT2REAL, &[int], real),
    b.symbol(REAL2POS, &[real], pos),
    b.symbol(REAL2NAT, &[real], nat),
    b.symbol(REAL2INT, &[real], int),
    b.overloaded_symbol(MINIMUM, &[Real, Real]),
    b.overloaded_symbol(MAXIMUM, &[Real, Real]),
    b.overloaded_symbol(ABS, &[Real]),
    b.overloaded_symbol(MINUS, &[Real]),
    b.overloaded_symbol(SUCC, &[Real]),
    b.overloaded_symbol(PRED, &[Real]),
    b.overloaded_symbol(PLUS, &[Real, Real]),
    b.overloaded_symbol(MINUS, &[Real, Real]),
    b.overloaded_symbol(TIMES, &[Real, Real]),
    b.overloaded_symbol(DIVIDES, &[Pos, Pos]),
    b.overloaded_symbol(DIVIDES, &[Nat, Nat]),
    b.overloaded_symbol(DIVIDES, &[Int, Int]),
    b.overloaded_symbol(DIVIDES, &[Real, Real]),
    b.overloaded_symbol(EXP, &[Real, Int]),
    b.symbol(FLOOR, &[real], int),
    b.symbol(CEIL, &[real], int),
    b.symbol(ROUND, &[real], int),
    b.symbol(REDFRAC, &[int, int], real),
    b.symbol(REDFRACWHR, &[pos, int, nat], real),
    b.symbol(REDFRACHLP, &[real, int], real),
  ];
  for mapping in mappings {
    implementation.add_mapping(mapping);
  }

  let vm = || b.variable("m", nat);
  let vn = || b.variable("n", nat);
  let vp = || b.variable("p", pos);
  let vq = || b.variable("q", pos);
  let vx = || b.variable("x", int);
  let vy = || b.variable("y", int);
  let vr = || b.variable("r", real);
  let vs = || b.variable("s", real);
  let f  = || b.false_();
  let c0 = || b.c0();
  let c1 = || b.c1();
  let cnat  = |p| b.cnat(p);
  let cint  = |n| b.cint(n);
  let creal = |x, p| b.creal(x, p);
  // A positive number as an integer.
  let int_of = |p| b.cint(b.cnat(p));

  // Cross multiplication of x/p and y/q.
  let cross = || (b.times(vx(), int_of(vq())), b.times(vy(), int_of(vp())));

  let equations = vec![
    DataEquation::new(b.equal(creal(vx(), vp()), creal(vy(), vq())), { let (l, r) = cross(); b.equal(l, r) }),
    DataEquation::new(b.less(creal(vx(), vp()), creal(vy(), vq())), { let (l, r) = cross(); b.less(l, r) }),
    DataEquation::new(
      b.less_equal(creal(vx(), vp()), creal(vy(), vq())),
      { let (l, r) = cross(); b.less_equal(l, r) }
    ),

    DataEquation::new(b.int2real(vx()), creal(vx(), c1())),
    DataEquation::new(b.nat2real(vn()), creal(cint(vn()), c1())),
    DataEquation::new(b.pos2real(vp()), creal(int_of(vp()), c1())),
    DataEquation::new(b.real2int(creal(vx(), c1())), vx()),
    DataEquation::new(b.real2nat(creal(vx(), c1())), b.int2nat(vx())),
    DataEquation::new(b.real2pos(creal(vx(), c1())), b.int2pos(vx())),

    DataEquation::new(b.min(vr(), vs()), b.if_(b.less(vr(), vs()), vr(), vs())),
    DataEquation::new(b.max(vr(), vs()), b.if_(b.less(vr(), vs()), vs(), vr())),
    DataEquation::new(
      b.abs(vr()),
      b.if_(b.less(vr(), creal(cint(c0()), c1())), b.negate(vr()), vr())
    ),
    DataEquation::new(b.negate(creal(vx(), vp())), creal(b.negate(vx()), vp())),
    DataEquation::new(b.succ(creal(vx(), vp())), creal(b.plus(vx(), int_of(vp())), vp())),
    DataEquation::new(b.pred(creal(vx(), vp())), creal(b.minus(vx(), int_of(vp())), vp())),

    DataEquation::new(
      b.plus(creal(vx(), vp()), creal(vy(), vq())),
      { let (l, r) = cross(); b.redfrac(b.plus(l, r), int_of(b.times(vp(), vq()))) }
    ),
    DataEquation::new(
      b.minus(creal(vx(), vp()), creal(vy(), vq())),
      { let (l, r) = cross(); b.redfrac(b.minus(l, r), int_of(b.times(vp(), vq()))) }
    ),
    DataEquation::new(
      b.times(creal(vx(), vp()), creal(vy(), vq())),
      b.redfrac(b.times(vx(), vy()), int_of(b.times(vp(), vq())))
    ),
    DataEquation::conditional(
      b.not_equal(vy(), cint(c0())),
      b.divides(creal(vx(), vp()), creal(vy(), vq())),
      { let (l, r) = cross(); b.redfrac(l, r) }
    ),
    DataEquation::new(b.divides(vp(), vq()), b.redfrac(int_of(vp()), int_of(vq()))),
    DataEquation::conditional(
      b.not_equal(vn(), c0()),
      b.divides(vm(), vn()),
      b.redfrac(cint(vm()), cint(vn()))
    ),
    DataEquation::conditional(b.not_equal(vy(), cint(c0())), b.divides(vx(), vy()), b.redfrac(vx(), vy())),

    DataEquation::new(
      b.exp(creal(vx(), vp()), cint(vn())),
      b.redfrac(b.exp(vx(), vn()), int_of(b.exp(vp(), vn())))
    ),
    DataEquation::conditional(
      b.not_equal(vx(), cint(c0())),
      b.exp(creal(vx(), vp()), b.cneg(vq())),
      b.redfrac(int_of(b.exp(vp(), cnat(vq()))), b.exp(vx(), cnat(vq())))
    ),

    DataEquation::new(b.floor(creal(vx(), vp())), b.div(vx(), vp())),
    DataEquation::new(b.ceil(vr()), b.negate(b.floor(b.negate(vr())))),
    // round(r) = floor(r + 1/2)
    DataEquation::new(
      b.round(vr()),
      b.floor(b.plus(vr(), creal(int_of(c1()), b.cdub(f(), c1()))))
    ),

    DataEquation::new(b.redfrac(vx(), b.cneg(vp())), b.redfrac(b.negate(vx()), int_of(vp()))),
    DataEquation::new(
      b.redfrac(vx(), int_of(vp())),
      b.redfracwhr(vp(), b.div(vx(), vp()), b.modulo(vx(), vp()))
    ),
    DataEquation::new(b.redfracwhr(vp(), vx(), c0()), creal(vx(), c1())),
    DataEquation::new(
      b.redfracwhr(vp(), vx(), cnat(vq())),
      b.redfrachlp(b.redfrac(int_of(vp()), int_of(vq())), vx())
    ),
    DataEquation::new(
      b.redfrachlp(creal(vx(), vp()), vy()),
      creal(b.plus(int_of(vp()), b.times(vy(), vx())), b.int2pos(vx()))
    ),
  ];

  for equation in equations {
    implementation.add_equation(equation);
  }

  implementation
}
