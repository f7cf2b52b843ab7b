/*!

A data equation `var v1, ..., vn; c -> lhs = rhs`. The condition is optional. The left-hand side is always a
symbol or an application; anything else is rejected on construction because a rewriter could not use it.

Whether an equation is system-defined or the defining equation of a lifted lambda is recorded by the specification
as a set of `EquationAttribute` flags, in the same way as for symbols.

*/

use std::fmt::{Display, Formatter};

use enumflags2::{bitflags, BitFlags};

use crate::{
  abstractions::join_string,
  api::{
    expression::DataExpression,
    variable::Variable
  },
  core::{
    format::{FormatStyle, Formattable},
    sort::{SortCollection, SortSubstitution}
  }
};

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EquationAttribute {
  SystemDefined,
  Lifted,
}

pub type EquationAttributes = BitFlags<EquationAttribute, u8>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DataEquation {
  pub variables: Vec<Variable>,
  pub condition: Option<DataExpression>,
  pub lhs      : DataExpression,
  pub rhs      : DataExpression,
}

impl DataEquation {
  /// An unconditional equation. The variables are the free variables of both sides.
  pub fn new(lhs: DataExpression, rhs: DataExpression) -> Self {
    Self::with_condition(None, lhs, rhs)
  }

  pub fn conditional(condition: DataExpression, lhs: DataExpression, rhs: DataExpression) -> Self {
    Self::with_condition(Some(condition), lhs, rhs)
  }

  pub fn with_condition(condition: Option<DataExpression>, lhs: DataExpression, rhs: DataExpression) -> Self {
    assert!(
      matches!(lhs, DataExpression::Symbol(_) | DataExpression::Application { .. }),
      "equation left-hand side {} is neither a symbol nor an application. This is a bug.",
      lhs
    );

    let mut variables = lhs.free_variables();
    let mut extend    = |expression: &DataExpression| {
      for variable in expression.free_variables() {
        if !variables.contains(&variable) {
          variables.push(variable);
        }
      }
    };
    if let Some(condition) = &condition {
      extend(condition);
    }
    extend(&rhs);

    DataEquation {
      variables,
      condition,
      lhs,
      rhs
    }
  }

  /// Rebuilds the equation from parts that have been rewritten.
  pub fn map_parts(&self, mut f: impl FnMut(&DataExpression) -> DataExpression) -> DataEquation {
    let condition = self.condition.as_ref().map(&mut f);
    let lhs       = f(&self.lhs);
    let rhs       = f(&self.rhs);
    Self::with_condition(condition, lhs, rhs)
  }

  pub fn replace_sorts(&self, sorts: &SortCollection, substitution: &SortSubstitution) -> DataEquation {
    DataEquation {
      variables: self.variables
                     .iter()
                     .map(|v| Variable { name: v.name.clone(), sort: substitution.apply(sorts, v.sort) })
                     .collect(),
      condition: self.condition.as_ref().map(|c| c.replace_sorts(sorts, substitution)),
      lhs      : self.lhs.replace_sorts(sorts, substitution),
      rhs      : self.rhs.replace_sorts(sorts, substitution),
    }
  }

  /// Calls `f` on every part of the equation: condition, left-hand side, right-hand side.
  pub fn for_each_part(&self, mut f: impl FnMut(&DataExpression)) {
    if let Some(condition) = &self.condition {
      f(condition);
    }
    f(&self.lhs);
    f(&self.rhs);
  }
}

impl Display for DataEquation {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.condition {
      Some(condition) => write!(f, "{} -> {} = {}", condition, self.lhs, self.rhs),
      None => write!(f, "{} = {}", self.lhs, self.rhs),
    }
  }
}

impl Formattable for DataEquation {
  fn repr(&self, sorts: &SortCollection, style: FormatStyle) -> String {
    match style {
      FormatStyle::Simple => self.to_string(),

      FormatStyle::Default | FormatStyle::Debug => {
        let mut out = String::new();
        if !self.variables.is_empty() {
          let variables = join_string(
            self.variables.iter().map(|v| format!("{}: {}", v.name, sorts.name(v.sort))),
            ", "
          );
          out.push_str(&format!("var {}; ", variables));
        }
        let body_style = if style == FormatStyle::Debug { FormatStyle::Debug } else { FormatStyle::Simple };
        if let Some(condition) = &self.condition {
          out.push_str(&format!("{} -> ", condition.repr(sorts, body_style)));
        }
        out.push_str(&format!("{} = {}", self.lhs.repr(sorts, body_style), self.rhs.repr(sorts, body_style)));
        out
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::symbol::FunctionSymbol;

  #[test]
  fn variables_are_collected_from_all_parts() {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    let bool_ = sorts.basic("Bool");
    let lt    = FunctionSymbol::new("<", sorts.function(vec![nat, nat], bool_));
    let f     = FunctionSymbol::new("f", sorts.function(vec![nat], nat));
    let x     = Variable::new("x", nat);
    let y     = Variable::new("y", nat);

    let condition = DataExpression::apply(&sorts, lt.into(), vec![x.clone().into(), y.clone().into()]);
    let lhs       = DataExpression::apply(&sorts, f.into(), vec![x.clone().into()]);
    let equation  = DataEquation::conditional(condition, lhs, y.clone().into());

    assert_eq!(equation.variables, vec![x, y]);
    assert_eq!(equation.to_string(), "<(x, y) -> f(x) = y");
    assert_eq!(equation.repr(&sorts, FormatStyle::Default), "var x: Nat, y: Nat; <(x, y) -> f(x) = y");
  }

  #[test]
  #[should_panic]
  fn variable_lhs_is_rejected() {
    let sorts = SortCollection::new();
    let x     = Variable::new("x", sorts.basic("Nat"));
    DataEquation::new(x.clone().into(), x.into());
  }
}
