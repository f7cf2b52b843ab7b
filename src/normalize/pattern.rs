/*!

Numeric pattern matching lets the left-hand side of an equation use conversion functions as if they were
constructors. A rewriter only matches constructor terms, so below the head of every left-hand side these
applications are replaced by the constructor terms they are equal to:

| pattern              | replacement                    |
|:---------------------|:-------------------------------|
| `Pos2Nat(p)`         | `@cNat(p)`                     |
| `Pos2Int(p)`         | `@cInt(@cNat(p))`              |
| `Nat2Int(n)`         | `@cInt(n)`                     |
| `-p` with `p: Pos`   | `@cNeg(p)`                     |
| `Pos2Real(p)`        | `@cReal(@cInt(@cNat(p)), @c1)` |
| `Nat2Real(n)`        | `@cReal(@cInt(n), @c1)`        |
| `Int2Real(x)`        | `@cReal(x, @c1)`               |

Only one level is unfolded per occurrence. `Pos2Int(Nat2Pos(n))` becomes `@cInt(@cNat(Nat2Pos(n)))`, not
something in terms of `n`.

*/

use crate::{
  api::{equation::DataEquation, expression::DataExpression},
  builtin::{names::*, Builder},
  core::specification::DataSpecification,
  info
};

/// Rewrites the left-hand sides of all equations of `spec`. See the module documentation.
pub fn match_numeric_patterns(spec: &mut DataSpecification) {
  let equations     = spec.take_equations();
  let mut changed   = 0usize;
  let mut rewritten = Vec::with_capacity(equations.len());
  {
    let b = Builder::new(&spec.sorts);
    for (equation, attributes) in equations {
      let lhs = match &equation.lhs {
        DataExpression::Application { head, arguments } => {
          let arguments = arguments.iter().map(|argument| unfold(&b, argument)).collect();
          DataExpression::application((**head).clone(), arguments)
        }
        lhs => lhs.clone(),
      };

      if lhs == equation.lhs {
        rewritten.push((equation, attributes));
      } else {
        changed += 1;
        let equation = DataEquation::with_condition(equation.condition, lhs, equation.rhs);
        rewritten.push((equation, attributes));
      }
    }
  }

  for (equation, attributes) in rewritten {
    spec.add_equation_with(equation, attributes);
  }
  info!(3, "numeric pattern matching rewrote {} left-hand sides", changed);
}

/// Replaces conversion applications anywhere in `expression`.
fn unfold(b: &Builder, expression: &DataExpression) -> DataExpression {
  let DataExpression::Application { head, arguments } = expression else {
    return expression.clone();
  };
  let arguments: Vec<DataExpression> = arguments.iter().map(|argument| unfold(b, argument)).collect();

  if let (Some(symbol), [argument]) = (head.as_symbol(), arguments.as_slice()) {
    let sort     = argument.sort(b.sorts);
    let argument = argument.clone();
    if sort == b.pos && is_pos2nat(symbol) {
      return b.cnat(argument);
    } else if sort == b.pos && is_pos2int(symbol) {
      return b.cint(b.cnat(argument));
    } else if sort == b.pos && is_pos2real(symbol) {
      return b.creal(b.cint(b.cnat(argument)), b.c1());
    } else if sort == b.nat && is_nat2int(symbol) {
      return b.cint(argument);
    } else if sort == b.nat && is_nat2real(symbol) {
      return b.creal(b.cint(argument), b.c1());
    } else if sort == b.pos && is_minus(symbol) {
      return b.cneg(argument);
    } else if sort == b.int && is_int2real(symbol) {
      return b.creal(argument, b.c1());
    }
  }

  DataExpression::application((**head).clone(), arguments)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{symbol::FunctionSymbol, variable::Variable};

  #[test]
  fn conversions_below_the_head_become_constructors() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let p        = b.variable("p", b.pos);
    let x        = b.variable("x", b.int);
    let f        = FunctionSymbol::new("f", spec.sorts.function(vec![b.int, b.real], b.bool_));
    let lhs      = b.apply(f.into(), vec![b.pos2int(p.clone()), b.int2real(x)]);
    let equation = DataEquation::new(lhs, b.true_());
    spec.add_equation(equation);

    match_numeric_patterns(&mut spec);
    assert_eq!(spec.equations()[0].to_string(), "f(@cInt(@cNat(p)), @cReal(x, @c1)) = true");
  }

  #[test]
  fn conversions_to_real() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let n        = b.variable("n", b.nat);
    let p        = b.variable("p", b.pos);
    let f        = FunctionSymbol::new("f", spec.sorts.function(vec![b.real, b.real], b.bool_));
    let lhs      = b.apply(f.into(), vec![b.nat2real(n), b.pos2real(p)]);
    spec.add_equation(DataEquation::new(lhs, b.true_()));

    match_numeric_patterns(&mut spec);
    assert_eq!(
      spec.equations()[0].to_string(),
      "f(@cReal(@cInt(n), @c1), @cReal(@cInt(@cNat(p)), @c1)) = true"
    );
  }

  #[test]
  fn the_head_and_the_right_hand_side_are_untouched() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let p        = Variable::new("p", b.pos);
    let lhs      = b.pos2nat(p.clone().into());
    let rhs      = b.pos2nat(p.into());
    spec.add_equation(DataEquation::new(lhs, rhs));

    match_numeric_patterns(&mut spec);
    assert_eq!(spec.equations()[0].to_string(), "Pos2Nat(p) = Pos2Nat(p)");
  }

  #[test]
  fn negation_of_a_positive_number() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let p        = b.variable("p", b.pos);
    let equation = DataEquation::new(b.abs(b.negate(p.clone())), b.pos2nat(p));
    spec.add_equation(equation);

    match_numeric_patterns(&mut spec);
    assert_eq!(spec.equations()[0].to_string(), "abs(@cNeg(p)) = Pos2Nat(p)");
  }
}
