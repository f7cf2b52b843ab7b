/*!

A `Builder` constructs well-sorted expressions over the builtin sorts. Every operator is derived from the sorts of
its arguments, so an overloaded operator like `+` is written once and the right overload is picked from the
argument sorts:

```ignore
let b = Builder::new(&sorts);
let p = b.variable("p", b.pos);
let n = b.variable("n", b.nat);
// `+: Pos # Nat -> Pos`
let sum = b.plus(p, n);
```

Asking for an overload that does not exist, e.g. `+` on `Bool`, is a bug in the caller and panics.

The builder only holds a shared reference to the sort arena, so it can be used while expressions are being
assembled anywhere else.

*/

use crate::{
  api::{
    expression::DataExpression,
    symbol::FunctionSymbol,
    variable::Variable
  },
  builtin::{
    names::*,
    BuiltinSort
  },
  core::sort::{SortCollection, SortId}
};

pub struct Builder<'s> {
  pub sorts   : &'s SortCollection,
  pub bool_   : SortId,
  pub pos     : SortId,
  pub nat     : SortId,
  pub nat_pair: SortId,
  pub int     : SortId,
  pub real    : SortId,
}

impl<'s> Builder<'s> {
  pub fn new(sorts: &'s SortCollection) -> Self {
    Builder {
      sorts,
      bool_   : BuiltinSort::Bool.sort(sorts),
      pos     : BuiltinSort::Pos.sort(sorts),
      nat     : BuiltinSort::Nat.sort(sorts),
      nat_pair: BuiltinSort::NatPair.sort(sorts),
      int     : BuiltinSort::Int.sort(sorts),
      real    : BuiltinSort::Real.sort(sorts),
    }
  }

  pub fn sort(&self, builtin: BuiltinSort) -> SortId {
    match builtin {
      BuiltinSort::Bool    => self.bool_,
      BuiltinSort::Pos     => self.pos,
      BuiltinSort::Nat     => self.nat,
      BuiltinSort::NatPair => self.nat_pair,
      BuiltinSort::Int     => self.int,
      BuiltinSort::Real    => self.real,
    }
  }

  pub fn builtin(&self, sort: SortId) -> Option<BuiltinSort> {
    BuiltinSort::ALL.into_iter().find(|builtin| self.sort(*builtin) == sort)
  }

  // region Symbols and leaves

  /// The sort `domain -> codomain`, or just `codomain` for an empty domain.
  pub fn function(&self, domain: &[SortId], codomain: SortId) -> SortId {
    if domain.is_empty() {
      codomain
    } else {
      self.sorts.function(domain.to_vec(), codomain)
    }
  }

  pub fn symbol(&self, name: &str, domain: &[SortId], codomain: SortId) -> FunctionSymbol {
    FunctionSymbol::new(name, self.function(domain, codomain))
  }

  pub fn variable(&self, name: &str, sort: SortId) -> DataExpression {
    Variable::new(name, sort).into()
  }

  pub fn constant(&self, name: &str, sort: SortId) -> DataExpression {
    FunctionSymbol::new(name, sort).into()
  }

  /// Applies `head` to `arguments`, checking sorts.
  pub fn apply(&self, head: DataExpression, arguments: Vec<DataExpression>) -> DataExpression {
    DataExpression::apply(self.sorts, head, arguments)
  }

  /// Applies the operator `name` whose domain is the sorts of `arguments` and whose codomain is `codomain`.
  pub fn call(&self, name: &str, arguments: Vec<DataExpression>, codomain: SortId) -> DataExpression {
    let domain: Vec<SortId> = arguments.iter().map(|a| a.sort(self.sorts)).collect();
    let symbol = self.symbol(name, &domain, codomain);
    self.apply(symbol.into(), arguments)
  }

  /// Applies an overloaded numeric operator, looking up its codomain in the overload table.
  pub fn overloaded(&self, name: &str, arguments: Vec<DataExpression>) -> DataExpression {
    let domain: Vec<BuiltinSort> = arguments
        .iter()
        .map(|argument| {
          let sort = argument.sort(self.sorts);
          match self.builtin(sort) {
            Some(builtin) => builtin,
            None => panic!("{} is not defined on sort {}. This is a bug.", name, self.sorts.name(sort))
          }
        })
        .collect();
    let codomain = self.overloaded_symbol_codomain(name, &domain);
    self.call(name, arguments, self.sort(codomain))
  }

  /// The symbol for the overload of `name` on `domain`.
  pub fn overloaded_symbol(&self, name: &str, domain: &[BuiltinSort]) -> FunctionSymbol {
    let codomain = self.overloaded_symbol_codomain(name, domain);
    let domain: Vec<SortId> = domain.iter().map(|b| self.sort(*b)).collect();
    self.symbol(name, &domain, self.sort(codomain))
  }

  fn overloaded_symbol_codomain(&self, name: &str, domain: &[BuiltinSort]) -> BuiltinSort {
    match overload_codomain(name, domain) {
      Some(codomain) => codomain,
      None => {
        let domain: Vec<&str> = domain.iter().map(|b| b.name()).collect();
        panic!("there is no overload of {} on {}. This is a bug.", name, domain.join(" # "))
      }
    }
  }

  // endregion Symbols and leaves

  // region Bool

  pub fn true_(&self) -> DataExpression {
    self.constant(BOOL_TRUE, self.bool_)
  }

  pub fn false_(&self) -> DataExpression {
    self.constant(BOOL_FALSE, self.bool_)
  }

  pub fn bool_value(&self, value: bool) -> DataExpression {
    if value { self.true_() } else { self.false_() }
  }

  pub fn not(&self, b: DataExpression) -> DataExpression {
    self.call(NOT, vec![b], self.bool_)
  }

  pub fn and(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(AND, vec![a, b], self.bool_)
  }

  pub fn or(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(OR, vec![a, b], self.bool_)
  }

  pub fn implies(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(IMPLIES, vec![a, b], self.bool_)
  }

  // endregion Bool

  // region Defined on every sort

  pub fn equal(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(EQUAL, vec![a, b], self.bool_)
  }

  pub fn not_equal(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(NOT_EQUAL, vec![a, b], self.bool_)
  }

  pub fn less(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(LESS, vec![a, b], self.bool_)
  }

  pub fn less_equal(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(LESS_EQUAL, vec![a, b], self.bool_)
  }

  pub fn greater(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(GREATER, vec![a, b], self.bool_)
  }

  pub fn greater_equal(&self, a: DataExpression, b: DataExpression) -> DataExpression {
    self.call(GREATER_EQUAL, vec![a, b], self.bool_)
  }

  pub fn if_(&self, condition: DataExpression, then: DataExpression, otherwise: DataExpression) -> DataExpression {
    let sort = then.sort(self.sorts);
    self.call(IF_THEN_ELSE, vec![condition, then, otherwise], sort)
  }

  // endregion Defined on every sort

  // region Constructors

  pub fn c1(&self) -> DataExpression {
    self.constant(C1, self.pos)
  }

  pub fn cdub(&self, b: DataExpression, p: DataExpression) -> DataExpression {
    self.call(CDUB, vec![b, p], self.pos)
  }

  pub fn c0(&self) -> DataExpression {
    self.constant(C0, self.nat)
  }

  pub fn cnat(&self, p: DataExpression) -> DataExpression {
    self.call(CNAT, vec![p], self.nat)
  }

  pub fn cpair(&self, m: DataExpression, n: DataExpression) -> DataExpression {
    self.call(CPAIR, vec![m, n], self.nat_pair)
  }

  pub fn cint(&self, n: DataExpression) -> DataExpression {
    self.call(CINT, vec![n], self.int)
  }

  pub fn cneg(&self, p: DataExpression) -> DataExpression {
    self.call(CNEG, vec![p], self.int)
  }

  pub fn creal(&self, x: DataExpression, p: DataExpression) -> DataExpression {
    self.call(CREAL, vec![x, p], self.real)
  }

  // endregion Constructors

  // region Overloaded numeric operators

  pub fn succ(&self, x: DataExpression) -> DataExpression {
    self.overloaded(SUCC, vec![x])
  }

  pub fn pred(&self, x: DataExpression) -> DataExpression {
    self.overloaded(PRED, vec![x])
  }

  pub fn max(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(MAXIMUM, vec![x, y])
  }

  pub fn min(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(MINIMUM, vec![x, y])
  }

  pub fn plus(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(PLUS, vec![x, y])
  }

  pub fn times(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(TIMES, vec![x, y])
  }

  pub fn minus(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(MINUS, vec![x, y])
  }

  pub fn negate(&self, x: DataExpression) -> DataExpression {
    self.overloaded(MINUS, vec![x])
  }

  pub fn abs(&self, x: DataExpression) -> DataExpression {
    self.overloaded(ABS, vec![x])
  }

  pub fn div(&self, x: DataExpression, p: DataExpression) -> DataExpression {
    self.overloaded(DIV, vec![x, p])
  }

  pub fn modulo(&self, x: DataExpression, p: DataExpression) -> DataExpression {
    self.overloaded(MODULO, vec![x, p])
  }

  pub fn exp(&self, x: DataExpression, n: DataExpression) -> DataExpression {
    self.overloaded(EXP, vec![x, n])
  }

  pub fn divides(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.overloaded(DIVIDES, vec![x, y])
  }

  // endregion Overloaded numeric operators

  // region Auxiliary operators

  pub fn pospred(&self, p: DataExpression) -> DataExpression {
    self.call(POSPRED, vec![p], self.pos)
  }

  pub fn addc(&self, b: DataExpression, p: DataExpression, q: DataExpression) -> DataExpression {
    self.call(ADDC, vec![b, p, q], self.pos)
  }

  pub fn powerlog2(&self, p: DataExpression) -> DataExpression {
    self.call(POWERLOG2, vec![p], self.pos)
  }

  pub fn pos2nat(&self, p: DataExpression) -> DataExpression {
    self.call(POS2NAT, vec![p], self.nat)
  }

  pub fn nat2pos(&self, n: DataExpression) -> DataExpression {
    self.call(NAT2POS, vec![n], self.pos)
  }

  pub fn dub(&self, b: DataExpression, n: DataExpression) -> DataExpression {
    self.call(DUB, vec![b, n], self.nat)
  }

  pub fn dubsucc(&self, n: DataExpression) -> DataExpression {
    self.call(DUBSUCC, vec![n], self.pos)
  }

  pub fn gtesubtb(&self, b: DataExpression, p: DataExpression, q: DataExpression) -> DataExpression {
    self.call(GTESUBTB, vec![b, p, q], self.nat)
  }

  pub fn even(&self, n: DataExpression) -> DataExpression {
    self.call(EVEN, vec![n], self.bool_)
  }

  pub fn monus(&self, m: DataExpression, n: DataExpression) -> DataExpression {
    self.call(MONUS, vec![m, n], self.nat)
  }

  pub fn swap_zero(&self, m: DataExpression, n: DataExpression) -> DataExpression {
    self.call(SWAP_ZERO, vec![m, n], self.nat)
  }

  /// One of the four-argument swap-zero helpers `@swap_zero_add`, `@swap_zero_min`, `@swap_zero_monus`.
  pub fn swap_zero_with(&self, name: &str, arguments: [DataExpression; 4]) -> DataExpression {
    self.call(name, arguments.into(), self.nat)
  }

  pub fn first(&self, pair: DataExpression) -> DataExpression {
    self.call(FIRST, vec![pair], self.nat)
  }

  pub fn last(&self, pair: DataExpression) -> DataExpression {
    self.call(LAST, vec![pair], self.nat)
  }

  pub fn divmod(&self, p: DataExpression, q: DataExpression) -> DataExpression {
    self.call(DIVMOD, vec![p, q], self.nat_pair)
  }

  pub fn gdivmod(&self, pair: DataExpression, b: DataExpression, p: DataExpression) -> DataExpression {
    self.call(GDIVMOD, vec![pair, b, p], self.nat_pair)
  }

  pub fn ggdivmod(&self, n: DataExpression, m: DataExpression, p: DataExpression) -> DataExpression {
    self.call(GGDIVMOD, vec![n, m, p], self.nat_pair)
  }

  pub fn nat2int(&self, n: DataExpression) -> DataExpression {
    self.call(NAT2INT, vec![n], self.int)
  }

  pub fn int2nat(&self, x: DataExpression) -> DataExpression {
    self.call(INT2NAT, vec![x], self.nat)
  }

  pub fn pos2int(&self, p: DataExpression) -> DataExpression {
    self.call(POS2INT, vec![p], self.int)
  }

  pub fn int2pos(&self, x: DataExpression) -> DataExpression {
    self.call(INT2POS, vec![x], self.pos)
  }

  pub fn pos2real(&self, p: DataExpression) -> DataExpression {
    self.call(POS2REAL, vec![p], self.real)
  }

  pub fn nat2real(&self, n: DataExpression) -> DataExpression {
    self.call(NAT2REAL, vec![n], self.real)
  }

  pub fn int2real(&self, x: DataExpression) -> DataExpression {
    self.call(INT2REAL, vec![x], self.real)
  }

  pub fn real2pos(&self, r: DataExpression) -> DataExpression {
    self.call(REAL2POS, vec![r], self.pos)
  }

  pub fn real2nat(&self, r: DataExpression) -> DataExpression {
    self.call(REAL2NAT, vec![r], self.nat)
  }

  pub fn real2int(&self, r: DataExpression) -> DataExpression {
    self.call(REAL2INT, vec![r], self.int)
  }

  pub fn floor(&self, r: DataExpression) -> DataExpression {
    self.call(FLOOR, vec![r], self.int)
  }

  pub fn ceil(&self, r: DataExpression) -> DataExpression {
    self.call(CEIL, vec![r], self.int)
  }

  pub fn round(&self, r: DataExpression) -> DataExpression {
    self.call(ROUND, vec![r], self.int)
  }

  pub fn redfrac(&self, x: DataExpression, y: DataExpression) -> DataExpression {
    self.call(REDFRAC, vec![x, y], self.real)
  }

  pub fn redfracwhr(&self, p: DataExpression, x: DataExpression, n: DataExpression) -> DataExpression {
    self.call(REDFRACWHR, vec![p, x, n], self.real)
  }

  pub fn redfrachlp(&self, r: DataExpression, x: DataExpression) -> DataExpression {
    self.call(REDFRACHLP, vec![r, x], self.real)
  }

  // endregion Auxiliary operators
}

/// The codomain of the overload of the numeric operator `name` on `domain`, if there is one.
pub fn overload_codomain(name: &str, domain: &[BuiltinSort]) -> Option<BuiltinSort> {
  use BuiltinSort::*;

  let codomain = match (name, domain) {
    (SUCC, [Pos])  => Pos,
    (SUCC, [Nat])  => Pos,
    (SUCC, [Int])  => Int,
    (SUCC, [Real]) => Real,

    (PRED, [Pos])  => Nat,
    (PRED, [Nat])  => Int,
    (PRED, [Int])  => Int,
    (PRED, [Real]) => Real,

    (MAXIMUM, [Pos, Pos])   => Pos,
    (MAXIMUM, [Pos, Nat])   => Pos,
    (MAXIMUM, [Nat, Pos])   => Pos,
    (MAXIMUM, [Nat, Nat])   => Nat,
    (MAXIMUM, [Pos, Int])   => Pos,
    (MAXIMUM, [Int, Pos])   => Pos,
    (MAXIMUM, [Nat, Int])   => Nat,
    (MAXIMUM, [Int, Nat])   => Nat,
    (MAXIMUM, [Int, Int])   => Int,
    (MAXIMUM, [Real, Real]) => Real,

    (MINIMUM, [x, y]) if x == y && *x != Bool && *x != NatPair => *x,

    (PLUS, [Pos, Pos])   => Pos,
    (PLUS, [Pos, Nat])   => Pos,
    (PLUS, [Nat, Pos])   => Pos,
    (PLUS, [Nat, Nat])   => Nat,
    (PLUS, [Int, Int])   => Int,
    (PLUS, [Real, Real]) => Real,

    (TIMES, [x, y]) if x == y && *x != Bool && *x != NatPair => *x,

    (MINUS, [Pos]) | (MINUS, [Nat]) | (MINUS, [Int]) => Int,
    (MINUS, [Real]) => Real,
    (MINUS, [Pos, Pos]) | (MINUS, [Nat, Nat]) | (MINUS, [Int, Int]) => Int,
    (MINUS, [Real, Real]) => Real,

    (ABS, [Int])  => Nat,
    (ABS, [Real]) => Real,

    (DIV, [Nat, Pos]) => Nat,
    (DIV, [Int, Pos]) => Int,

    (MODULO, [Nat, Pos]) | (MODULO, [Int, Pos]) => Nat,

    (EXP, [Pos, Nat])  => Pos,
    (EXP, [Nat, Nat])  => Nat,
    (EXP, [Int, Nat])  => Int,
    (EXP, [Real, Int]) => Real,

    (DIVIDES, [x, y]) if x == y && *x != Bool && *x != NatPair => Real,

    _ => return None,
  };

  Some(codomain)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn overloads_follow_argument_sorts() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let p     = b.variable("p", b.pos);
    let n     = b.variable("n", b.nat);

    assert_eq!(b.plus(p.clone(), n.clone()).sort(&sorts), b.pos);
    assert_eq!(b.plus(n.clone(), n.clone()).sort(&sorts), b.nat);
    assert_eq!(b.minus(p.clone(), p.clone()).sort(&sorts), b.int);
    assert_eq!(b.negate(n.clone()).sort(&sorts), b.int);
    assert_eq!(b.pred(p.clone()).sort(&sorts), b.nat);
    assert_eq!(b.succ(n).sort(&sorts), b.pos);
    assert_eq!(b.divides(p.clone(), p).sort(&sorts), b.real);
  }

  #[test]
  #[should_panic]
  fn missing_overload_panics() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    b.plus(b.true_(), b.false_());
  }

  #[test]
  fn builtin_sorts_are_recognized() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    assert_eq!(b.builtin(b.nat_pair), Some(BuiltinSort::NatPair));
    assert_eq!(b.builtin(sorts.basic("D")), None);
  }
}
