/*!

Checks that a specification refers only to what it declares. A closed specification always passes. The check
collects every problem instead of stopping at the first one.

*/

use crate::{
  api::{
    equation::DataEquation,
    error::{DataError, DataResult, Inconsistency},
    symbol::FunctionSymbol
  },
  core::{
    sort::{SortId, SortKind},
    specification::DataSpecification
  },
  info
};

/// Checks that
///
///  - every basic sort occurring in a constructor, mapping, or variable is declared, bound variables included,
///  - every constructor constructs a declared sort,
///  - every symbol of an equation is a declared constructor or mapping, the head of the left-hand side included,
///  - every variable of the condition and the right-hand side of an equation occurs in its left-hand side.
pub fn check_well_formed(spec: &DataSpecification) -> DataResult<()> {
  let mut checker = Checker { spec, problems: vec![] };

  for constructor in spec.all_constructors() {
    let context = format!("constructor {}", constructor.name);
    for sort in spec.sorts.domain(constructor.sort) {
      checker.check_sort(sort, &context);
    }
    let codomain = spec.sorts.codomain(constructor.sort);
    if !spec.is_declared(codomain) {
      checker.problems.push(Inconsistency::UndeclaredCodomain {
        constructor: constructor.name.to_string(),
        sort       : spec.sorts.name(codomain),
      });
    }
  }

  for mapping in spec.mappings() {
    checker.check_sort(mapping.sort, &format!("mapping {}", mapping.name));
  }

  for equation in spec.equations() {
    checker.check_equation(equation);
  }

  let problems = checker.problems;
  if problems.is_empty() {
    info!(3, "the specification is well formed");
    Ok(())
  } else {
    info!(2, "the specification has {} problems", problems.len());
    Err(DataError::Inconsistent(problems))
  }
}

struct Checker<'a> {
  spec    : &'a DataSpecification,
  problems: Vec<Inconsistency>,
}

impl<'a> Checker<'a> {
  /// Reports every undeclared basic sort inside `sort`.
  fn check_sort(&mut self, sort: SortId, context: &str) {
    let spec = self.spec;
    match spec.sorts.kind(sort) {
      SortKind::Basic(_) => {
        if !spec.is_declared(sort) {
          self.problems.push(Inconsistency::UndeclaredSort {
            sort   : spec.sorts.name(sort),
            context: context.to_string(),
          });
        }
      }

      kind => {
        for component in kind.components() {
          self.check_sort(component, context);
        }
      }
    }
  }

  fn check_equation(&mut self, equation: &DataEquation) {
    let spec     = self.spec;
    let rendered = equation.to_string();
    let context  = format!("equation {}", rendered);

    // Variables bound by quantifiers and where-clauses count as well.
    let mut variable_sorts: Vec<SortId> = equation.variables.iter().map(|variable| variable.sort).collect();
    equation.for_each_part(|part| {
      part.for_each_variable(&mut |variable| {
        if !variable_sorts.contains(&variable.sort) {
          variable_sorts.push(variable.sort);
        }
      });
    });
    for sort in variable_sorts {
      self.check_sort(sort, &context);
    }

    let lhs_head = equation.lhs.head_symbol();
    if !lhs_head.is_some_and(|head| self.is_declared(head)) {
      self.problems.push(Inconsistency::UndeclaredHead { equation: rendered.clone() });
    }

    let mut undeclared: Vec<FunctionSymbol> = vec![];
    equation.for_each_part(|part| {
      part.for_each_symbol(&mut |symbol| {
        if !spec.is_constructor(symbol) && !spec.is_mapping(symbol) && !undeclared.contains(symbol) {
          undeclared.push(symbol.clone());
        }
      });
    });
    // An undeclared head has been reported already.
    for symbol in undeclared {
      if Some(&symbol) == lhs_head {
        continue;
      }
      self.problems.push(Inconsistency::UndeclaredSymbol {
        symbol  : symbol.name.to_string(),
        sort    : spec.sorts.name(symbol.sort),
        equation: rendered.clone(),
      });
    }

    let bound = equation.lhs.free_variables();
    let mut used = equation.rhs.free_variables();
    if let Some(condition) = &equation.condition {
      for variable in condition.free_variables() {
        if !used.contains(&variable) {
          used.push(variable);
        }
      }
    }
    for variable in used {
      if !bound.contains(&variable) {
        self.problems.push(Inconsistency::UnboundVariable {
          variable: variable.name.to_string(),
          equation: rendered.clone(),
        });
      }
    }
  }

  fn is_declared(&self, symbol: &FunctionSymbol) -> bool {
    self.spec.is_constructor(symbol) || self.spec.is_mapping(symbol)
  }
}
