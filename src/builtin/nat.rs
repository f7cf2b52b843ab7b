use crate::{
  api::equation::DataEquation,
  builtin::{
    names::*,
    Builder,
    BuiltinSort::{Nat, Pos}
  },
  core::implementation::Implementation
};

pub(crate) fn generate(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.nat);
  let (bool_, pos, nat, nat_pair) = (b.bool_, b.pos, b.nat, b.nat_pair);

  implementation.add_constructor(b.symbol(C0, &[], nat));
  implementation.add_constructor(b.symbol(CNAT, &[pos], nat));

  let mappings = [
    b.symbol(POS2NAT, &[pos], nat),
    b.symbol(NAT2POS, &[nat], pos),
    b.overloaded_symbol(MAXIMUM, &[Pos, Nat]),
    b.overloaded_symbol(MAXIMUM, &[Nat, Pos]),
    b.overloaded_symbol(MAXIMUM, &[Nat, Nat]),
    b.overloaded_symbol(MINIMUM, &[Nat, Nat]),
    b.overloaded_symbol(SUCC, &[Nat]),
    b.overloaded_symbol(PRED, &[Pos]),
    b.symbol(DUB, &[bool_, nat], nat),
    b.symbol(DUBSUCC, &[nat], pos),
    b.overloaded_symbol(PLUS, &[Pos, Nat]),
    b.overloaded_symbol(PLUS, &[Nat, Pos]),
    b.overloaded_symbol(PLUS, &[Nat, Nat]),
    b.symbol(GTESUBTB, &[bool_, pos, pos], nat),
    b.overloaded_symbol(TIMES, &[Nat, Nat]),
    b.overloaded_symbol(EXP, &[Pos, Nat]),
    b.overloaded_symbol(EXP, &[Nat, Nat]),
    b.symbol(EVEN, &[nat], bool_),
    b.overloaded_symbol(DIV, &[Nat, Pos]),
    b.overloaded_symbol(MODULO, &[Nat, Pos]),
    b.symbol(MONUS, &[nat, nat], nat),
    b.symbol(SWAP_ZERO, &[nat, nat], nat),
    b.symbol(SWAP_ZERO_ADD, &[nat, nat, nat, nat], nat),
    b.symbol(SWAP_ZERO_MIN, &[nat, nat, nat, nat], nat),
    b.symbol(SWAP_ZERO_MONUS, &[nat, nat, nat, nat], nat),
    b.symbol(DIVMOD, &[pos, pos], nat_pair),
    b.symbol(GDIVMOD, &[nat_pair, bool_, pos], nat_pair),
    b.symbol(GGDIVMOD, &[nat, nat, pos], nat_pair),
  ];
  for mapping in mappings {
    implementation.add_mapping(mapping);
  }

  let vb = || b.variable("b", bool_);
  let vc = || b.variable("c", bool_);
  let vp = || b.variable("p", pos);
  let vq = || b.variable("q", pos);
  let vn = || b.variable("n", nat);
  let vm = || b.variable("m", nat);
  let t  = || b.true_();
  let f  = || b.false_();
  let c0 = || b.c0();
  let c1 = || b.c1();
  let cnat = |p| b.cnat(p);

  let mut equations = vec![
    DataEquation::new(b.equal(c0(), cnat(vp())), f()),
    DataEquation::new(b.equal(cnat(vp()), c0()), f()),
    DataEquation::new(b.equal(cnat(vp()), cnat(vq())), b.equal(vp(), vq())),
    DataEquation::new(b.less(vn(), c0()), f()),
    DataEquation::new(b.less(c0(), cnat(vp())), t()),
    DataEquation::new(b.less(cnat(vp()), cnat(vq())), b.less(vp(), vq())),
    DataEquation::new(b.less_equal(c0(), vn()), t()),
    DataEquation::new(b.less_equal(cnat(vp()), c0()), f()),
    DataEquation::new(b.less_equal(cnat(vp()), cnat(vq())), b.less_equal(vp(), vq())),

    DataEquation::new(b.pos2nat(vp()), cnat(vp())),
    DataEquation::new(b.nat2pos(cnat(vp())), vp()),

    DataEquation::new(b.max(vp(), c0()), vp()),
    DataEquation::new(b.max(vp(), cnat(vq())), b.if_(b.less_equal(vp(), vq()), vq(), vp())),
    DataEquation::new(b.max(c0(), vp()), vp()),
    DataEquation::new(b.max(cnat(vp()), vq()), b.if_(b.less_equal(vp(), vq()), vq(), vp())),
    DataEquation::new(b.max(vm(), vn()), b.if_(b.less_equal(vm(), vn()), vn(), vm())),
    DataEquation::new(b.min(vm(), vn()), b.if_(b.less_equal(vm(), vn()), vm(), vn())),

    DataEquation::new(b.succ(c0()), c1()),
    DataEquation::new(b.succ(cnat(vp())), b.succ(vp())),
    DataEquation::new(b.pred(c1()), c0()),
    DataEquation::new(
      b.pred(b.cdub(vb(), vp())),
      cnat(b.if_(vb(), b.cdub(f(), vp()), b.dubsucc(b.pred(vp()))))
    ),
    DataEquation::new(b.dubsucc(c0()), c1()),
    DataEquation::new(b.dubsucc(cnat(vp())), b.cdub(t(), vp())),
    DataEquation::new(b.dub(f(), c0()), c0()),
    DataEquation::new(b.dub(t(), c0()), cnat(c1())),
    DataEquation::new(b.dub(vb(), cnat(vp())), cnat(b.cdub(vb(), vp()))),

    DataEquation::new(b.plus(vp(), c0()), vp()),
    DataEquation::new(b.plus(vp(), cnat(vq())), b.addc(f(), vp(), vq())),
    DataEquation::new(b.plus(c0(), vp()), vp()),
    DataEquation::new(b.plus(cnat(vp()), vq()), b.addc(f(), vp(), vq())),
    DataEquation::new(b.plus(c0(), vn()), vn()),
    DataEquation::new(b.plus(vn(), c0()), vn()),
    DataEquation::new(b.plus(cnat(vp()), cnat(vq())), cnat(b.addc(f(), vp(), vq()))),

    DataEquation::new(b.gtesubtb(f(), vp(), c1()), b.pred(vp())),
    DataEquation::new(b.gtesubtb(t(), vp(), c1()), b.pred(b.nat2pos(b.pred(vp())))),
    DataEquation::new(
      b.gtesubtb(vb(), b.cdub(vc(), vp()), b.cdub(vc(), vq())),
      b.dub(vb(), b.gtesubtb(vb(), vp(), vq()))
    ),
    DataEquation::new(
      b.gtesubtb(vb(), b.cdub(f(), vp()), b.cdub(t(), vq())),
      b.dub(b.not(vb()), b.gtesubtb(t(), vp(), vq()))
    ),
    DataEquation::new(
      b.gtesubtb(vb(), b.cdub(t(), vp()), b.cdub(f(), vq())),
      b.dub(b.not(vb()), b.gtesubtb(f(), vp(), vq()))
    ),

    DataEquation::new(b.times(c0(), vn()), c0()),
    DataEquation::new(b.times(vn(), c0()), c0()),
    DataEquation::new(b.times(cnat(vp()), cnat(vq())), cnat(b.times(vp(), vq()))),

    DataEquation::new(b.exp(vp(), c0()), c1()),
    DataEquation::new(b.exp(vp(), cnat(c1())), vp()),
    DataEquation::new(
      b.exp(vp(), cnat(b.cdub(f(), vq()))),
      b.exp(b.times(vp(), vp()), cnat(vq()))
    ),
    DataEquation::new(
      b.exp(vp(), cnat(b.cdub(t(), vq()))),
      b.times(vp(), b.exp(b.times(vp(), vp()), cnat(vq())))
    ),
    DataEquation::new(b.exp(vn(), c0()), cnat(c1())),
    DataEquation::new(b.exp(c0(), cnat(vp())), c0()),
    DataEquation::new(b.exp(cnat(vp()), vn()), cnat(b.exp(vp(), vn()))),

    DataEquation::new(b.even(c0()), t()),
    DataEquation::new(b.even(cnat(c1())), f()),
    DataEquation::new(b.even(cnat(b.cdub(vb(), vp()))), b.not(vb())),

    DataEquation::new(b.div(c0(), vp()), c0()),
    DataEquation::new(b.div(cnat(vp()), vq()), b.first(b.divmod(vp(), vq()))),
    DataEquation::new(b.modulo(c0(), vp()), c0()),
    DataEquation::new(b.modulo(cnat(vp()), vq()), b.last(b.divmod(vp(), vq()))),

    DataEquation::new(b.monus(c0(), vn()), c0()),
    DataEquation::new(b.monus(vn(), c0()), vn()),
    DataEquation::new(b.monus(cnat(vp()), cnat(vq())), b.gtesubtb(f(), vp(), vq())),

    DataEquation::new(b.swap_zero(vm(), c0()), vm()),
    DataEquation::new(b.swap_zero(c0(), vn()), vn()),
    DataEquation::new(b.swap_zero(cnat(vp()), cnat(vp())), c0()),
    DataEquation::conditional(b.not_equal(vp(), vq()), b.swap_zero(cnat(vp()), cnat(vq())), cnat(vq())),
  ];

  let add   = |m, n, p, q| b.swap_zero_with(SWAP_ZERO_ADD, [m, n, p, q]);
  let min   = |m, n, p, q| b.swap_zero_with(SWAP_ZERO_MIN, [m, n, p, q]);
  let monus = |m, n, p, q| b.swap_zero_with(SWAP_ZERO_MONUS, [m, n, p, q]);
  let swap  = |m, n| b.swap_zero(m, n);

  equations.extend([
    DataEquation::new(add(c0(), c0(), vm(), vn()), b.plus(vm(), vn())),
    DataEquation::new(add(cnat(vp()), c0(), vm(), c0()), vm()),
    DataEquation::new(
      add(cnat(vp()), c0(), vm(), cnat(vq())),
      swap(cnat(vp()), b.plus(swap(cnat(vp()), vm()), cnat(vq())))
    ),
    DataEquation::new(add(c0(), cnat(vp()), c0(), vn()), vn()),
    DataEquation::new(
      add(c0(), cnat(vp()), cnat(vq()), vn()),
      swap(cnat(vp()), b.plus(cnat(vq()), swap(cnat(vp()), vn())))
    ),
    DataEquation::new(
      add(cnat(vp()), cnat(vq()), vm(), vn()),
      swap(b.plus(cnat(vp()), cnat(vq())), b.plus(swap(cnat(vp()), vm()), swap(cnat(vq()), vn())))
    ),

    DataEquation::new(min(c0(), c0(), vm(), vn()), b.min(vm(), vn())),
    DataEquation::new(min(cnat(vp()), c0(), vm(), c0()), c0()),
    DataEquation::new(min(cnat(vp()), c0(), vm(), cnat(vq())), b.min(swap(cnat(vp()), vm()), cnat(vq()))),
    DataEquation::new(min(c0(), cnat(vp()), c0(), vn()), c0()),
    DataEquation::new(min(c0(), cnat(vp()), cnat(vq()), vn()), b.min(cnat(vq()), swap(cnat(vp()), vn()))),
    DataEquation::new(
      min(cnat(vp()), cnat(vq()), vm(), vn()),
      swap(b.min(cnat(vp()), cnat(vq())), b.min(swap(cnat(vp()), vm()), swap(cnat(vq()), vn())))
    ),

    DataEquation::new(monus(c0(), c0(), vm(), vn()), b.monus(vm(), vn())),
    DataEquation::new(monus(cnat(vp()), c0(), vm(), c0()), vm()),
    DataEquation::new(
      monus(cnat(vp()), c0(), vm(), cnat(vq())),
      swap(cnat(vp()), b.monus(swap(cnat(vp()), vm()), cnat(vq())))
    ),
    DataEquation::new(monus(c0(), cnat(vp()), c0(), vn()), c0()),
    DataEquation::new(
      monus(c0(), cnat(vp()), cnat(vq()), vn()),
      b.monus(cnat(vq()), swap(cnat(vp()), vn()))
    ),
    DataEquation::new(
      monus(cnat(vp()), cnat(vq()), vm(), vn()),
      swap(b.monus(cnat(vp()), cnat(vq())), b.monus(swap(cnat(vp()), vm()), swap(cnat(vq()), vn())))
    ),
  ]);

  equations.extend([
    DataEquation::new(b.divmod(c1(), c1()), b.cpair(cnat(c1()), c0())),
    DataEquation::new(b.divmod(c1(), b.cdub(vb(), vp())), b.cpair(c0(), cnat(c1()))),
    DataEquation::new(b.divmod(b.cdub(vb(), vp()), vq()), b.gdivmod(b.divmod(vp(), vq()), vb(), vq())),
    DataEquation::new(
      b.gdivmod(b.cpair(vm(), vn()), vb(), vp()),
      b.ggdivmod(b.dub(vb(), vn()), vm(), vp())
    ),
    DataEquation::new(b.ggdivmod(c0(), vn(), vp()), b.cpair(b.dub(f(), vn()), c0())),
    DataEquation::conditional(
      b.less(vp(), vq()),
      b.ggdivmod(cnat(vp()), vn(), vq()),
      b.cpair(b.dub(f(), vn()), cnat(vp()))
    ),
    DataEquation::conditional(
      b.less_equal(vq(), vp()),
      b.ggdivmod(cnat(vp()), vn(), vq()),
      b.cpair(b.dub(t(), vn()), b.gtesubtb(f(), vp(), vq()))
    ),
  ]);

  for equation in equations {
    implementation.add_equation(equation);
  }

  implementation
}

/// The hidden sort `@NatPair` holding the quotient and remainder of a division.
pub(crate) fn generate_pair(b: &Builder) -> Implementation {
  let mut implementation = Implementation::new(b.nat_pair);
  let (nat, nat_pair) = (b.nat, b.nat_pair);

  implementation.add_constructor(b.symbol(CPAIR, &[nat, nat], nat_pair));
  implementation.add_mapping(b.symbol(FIRST, &[nat_pair], nat));
  implementation.add_mapping(b.symbol(LAST, &[nat_pair], nat));

  let vm = || b.variable("m", nat);
  let vn = || b.variable("n", nat);
  let vu = || b.variable("u", nat);
  let vv = || b.variable("v", nat);
  let left  = || b.cpair(vm(), vn());
  let right = || b.cpair(vu(), vv());

  let equations = [
    (b.equal(left(), right()), b.and(b.equal(vm(), vu()), b.equal(vn(), vv()))),
    (b.less(left(), right()), b.or(b.less(vm(), vu()), b.and(b.equal(vm(), vu()), b.less(vn(), vv())))),
    (
      b.less_equal(left(), right()),
      b.or(b.less(vm(), vu()), b.and(b.equal(vm(), vu()), b.less_equal(vn(), vv())))
    ),
    (b.first(left()), vm()),
    (b.last(left()), vn()),
  ];

  for (lhs, rhs) in equations {
    implementation.add_equation(DataEquation::new(lhs, rhs));
  }

  implementation
}
