/*!

The normalizer removes the convenience notation of a surface specification, leaving only applications of
symbols, variables, and the quantifiers `forall` and `exists`. It rewrites every equation bottom-up, and at each
node applies the first of these rules that matches:

 1. A numeral symbol of sort `Pos`, `Nat`, `Int` or `Real` becomes its constructor term.
 2. An enumeration `@ListEnum(e1, ..., en)` becomes `|>(e1, ... |>(en, []))`. A set enumeration becomes
    `@setfset(@fset_insert(e1, ... {}))`, and a bag enumeration `@BagEnum(e1, n1, ...)` becomes
    `@bagfbag(@fbag_cinsert(e1, n1, ... {:}))`.
 3. A set comprehension `{ x: E | b }` becomes `@set(lambda x. b, {})`, and a bag comprehension with a `Nat`
    body becomes `@bag(lambda x. n, {:})`.
 4. `body whr x1 = e1, ..., xn = en end` becomes `(lambda x1. ... (lambda xn. body)(en) ...)(e1)`, so each binding
    sees the ones before it.
 5. Every lambda is lifted to a fresh mapping `@lambda_k: F1 # ... # Fn -> (B1 # ... # Bm -> S)`, where the `Fi`
    are the sorts of the free variables of the lambda and the `Bi` those of its bound variables. A lambda without
    free variables gets the sort `B1 # ... # Bm -> S`. The defining equation is
    `@lambda_k(f1, ..., fn)(b1, ..., bm) = body`. Identical lambdas share one mapping.

Before any expression is touched, sort aliases are removed from the whole specification (see [`remove_aliases`]),
and placeholder sorts left behind by a parser are rejected.

An empty enumeration cannot be compiled. The equation containing it is dropped with a warning, and the problem is
returned as a diagnostic instead of an error.

*/

mod alias;
mod pattern;

pub use alias::remove_aliases;
pub use pattern::match_numeric_patterns;

use crate::{
  abstractions::{HashMap, HashSet, IString},
  api::{
    equation::{DataEquation, EquationAttribute, EquationAttributes},
    error::{DataError, DataResult},
    expression::{Binder, DataExpression},
    symbol::{FunctionSymbol, SymbolAttribute},
    variable::Variable
  },
  builtin::{names::*, numeral::numeral, Builder, BuiltinSort},
  core::{
    sort::{ContainerKind, SortId},
    specification::{DataSpecification, SpecificationStatus}
  },
  debug,
  info,
  warning
};

/// Removes aliases and surface notation from `spec`. Returns the diagnostics of equations that were dropped.
pub fn normalize(spec: &mut DataSpecification) -> DataResult<Vec<DataError>> {
  check_resolved(spec)?;
  remove_aliases(spec)?;

  let mut diagnostics = vec![];
  let mut normalized  = Vec::with_capacity(spec.equations().len());
  let (lifted_mappings, lifted_equations) = {
    let mut normalizer = Normalizer::new(spec);
    for equation in spec.equations() {
      let attributes = spec.equation_attributes(equation);
      match normalizer.equation(equation) {
        Ok(equation) => normalized.push((equation, attributes)),
        Err(error @ DataError::EmptyEnumeration { .. }) => {
          warning!(1, "dropping equation {}: {}", equation, error);
          diagnostics.push(error);
        }
        Err(error) => return Err(error),
      }
    }
    (normalizer.lifted_mappings, normalizer.lifted_equations)
  };

  spec.take_equations();
  for (equation, attributes) in normalized {
    spec.add_equation_with(equation, attributes);
  }

  info!(2, "lifted {} lambda expressions", lifted_mappings.len());
  for mapping in lifted_mappings {
    spec.add_system_defined_mapping_with(mapping, SymbolAttribute::Lifted.into());
  }
  let lifted: EquationAttributes = EquationAttribute::SystemDefined | EquationAttribute::Lifted;
  for equation in lifted_equations {
    spec.add_equation_with(equation, lifted);
  }

  spec.set_status(SpecificationStatus::Normalized);
  Ok(diagnostics)
}

/// Fails if the placeholder sort for unresolved sorts occurs anywhere in `spec`.
fn check_resolved(spec: &DataSpecification) -> DataResult<()> {
  // Without the placeholder in the arena nothing can refer to it.
  let Some(unknown) = spec.sorts.ids().find(|sort| spec.sorts.is_unknown(*sort)) else {
    return Ok(());
  };
  let unresolved = |sort: SortId| spec.sorts.occurs_in(unknown, spec.sorts.resolve_aliases(sort));
  let error      = |context: String| Err(DataError::UnresolvedSort { context });

  for sort in spec.declared_sorts() {
    if unresolved(*sort) {
      return error(format!("sort {}", spec.sorts.name(*sort)));
    }
  }
  for (name, target) in spec.aliases() {
    if unresolved(*target) {
      return error(format!("alias {}", name));
    }
  }
  for symbol in spec.all_constructors().iter().chain(spec.mappings().iter()) {
    if unresolved(symbol.sort) {
      return error(format!("{}: {}", symbol, spec.sorts.name(symbol.sort)));
    }
  }
  for equation in spec.equations() {
    let mut found = false;
    equation.for_each_part(|part| part.for_each_sort(&mut |sort| found |= unresolved(sort)));
    if found || equation.variables.iter().any(|v| unresolved(v.sort)) {
      return error(format!("equation {}", equation));
    }
  }
  Ok(())
}

struct Normalizer<'s> {
  spec: &'s DataSpecification,
  b   : Builder<'s>,

  // Lambda -> the expression that replaces it
  lifted          : HashMap<DataExpression, DataExpression>,
  lifted_mappings : Vec<FunctionSymbol>,
  lifted_equations: Vec<DataEquation>,
  taken_names     : HashSet<IString>,
  next_lambda     : usize,
}

impl<'s> Normalizer<'s> {
  fn new(spec: &'s DataSpecification) -> Self {
    let taken_names = spec.all_constructors()
                          .iter()
                          .chain(spec.mappings().iter())
                          .map(|symbol| symbol.name.clone())
                          .collect();
    Normalizer {
      spec,
      b               : Builder::new(&spec.sorts),
      lifted          : HashMap::new(),
      lifted_mappings : vec![],
      lifted_equations: vec![],
      taken_names,
      next_lambda     : 0,
    }
  }

  fn equation(&mut self, equation: &DataEquation) -> DataResult<DataEquation> {
    let condition = match &equation.condition {
      Some(condition) => Some(self.expression(condition)?),
      None => None,
    };
    let lhs = self.expression(&equation.lhs)?;
    let rhs = self.expression(&equation.rhs)?;
    Ok(DataEquation::with_condition(condition, lhs, rhs))
  }

  fn expression(&mut self, expression: &DataExpression) -> DataResult<DataExpression> {
    match expression {

      DataExpression::Variable(_) => Ok(expression.clone()),

      DataExpression::Symbol(symbol) => self.symbol(symbol),

      DataExpression::Application { head, arguments } => {
        let arguments = arguments.iter()
                                 .map(|argument| self.expression(argument))
                                 .collect::<DataResult<Vec<_>>>()?;
        if let Some(symbol) = head.as_symbol() {
          if is_list_enum(symbol) || is_set_enum(symbol) || is_bag_enum(symbol) {
            return self.enumeration(symbol, arguments);
          }
        }
        let head = self.expression(head)?;
        Ok(DataExpression::application(head, arguments))
      }

      DataExpression::Abstraction { binder, bound, body } => {
        let body = self.expression(body)?;
        match binder {
          Binder::Lambda => Ok(self.lift(DataExpression::lambda(bound.clone(), body))),
          Binder::Forall | Binder::Exists => Ok(DataExpression::abstraction(*binder, bound.clone(), body)),
          Binder::SetComprehension | Binder::BagComprehension => self.comprehension(*binder, bound, body),
        }
      }

      DataExpression::Where { body, bindings } => {
        let mut result = self.expression(body)?;
        let values     = bindings.iter()
                                 .map(|(_, value)| self.expression(value))
                                 .collect::<DataResult<Vec<_>>>()?;
        for ((variable, _), value) in bindings.iter().zip(values).rev() {
          let function = self.lift(DataExpression::lambda(vec![variable.clone()], result));
          result = DataExpression::application(function, vec![value]);
        }
        Ok(result)
      }

    } // end match on expression
  }

  fn symbol(&mut self, symbol: &FunctionSymbol) -> DataResult<DataExpression> {
    if is_list_enum(symbol) || is_set_enum(symbol) || is_bag_enum(symbol) {
      return Err(DataError::EmptyEnumeration { expression: symbol.to_string() });
    }

    let numeric = BuiltinSort::of(&self.spec.sorts, symbol.sort).is_some_and(|builtin| builtin.is_numeric());
    if numeric && is_numeral(&symbol.name) {
      return numeral(&self.spec.sorts, &symbol.name, symbol.sort);
    }
    Ok(symbol.clone().into())
  }

  /// The container sort behind `sort`, looking through the name of an aliased container.
  fn structure_of(&self, sort: SortId) -> (ContainerKind, SortId, SortId) {
    let structural = self.spec.origin_of(sort).unwrap_or(sort);
    match self.spec.sorts.container_of(structural) {
      Some((kind, element)) => (kind, element, structural),
      None => panic!("enumeration of sort {} is not a container. This is a bug.", self.spec.sorts.name(sort)),
    }
  }

  fn enumeration(&mut self, marker: &FunctionSymbol, elements: Vec<DataExpression>) -> DataResult<DataExpression> {
    let b = &self.b;
    let (_, element, container) = self.structure_of(b.sorts.codomain(marker.sort));

    if is_list_enum(marker) {
      let empty = b.constant(EMPTY_LIST, container);
      let list  = elements.into_iter()
                          .rev()
                          .fold(empty, |tail, head| b.call(CONS, vec![head, tail], container));
      return Ok(list);
    }

    if is_set_enum(marker) {
      let fset   = b.sorts.fset(element);
      let finite = elements.into_iter()
                           .rev()
                           .fold(b.constant(EMPTY_SET, fset), |set, e| b.call(FSET_INSERT, vec![e, set], fset));
      return Ok(b.call(SETFSET, vec![finite], container));
    }

    // A bag enumeration alternates elements and their counts.
    let malformed = || DataError::MalformedEnumeration {
      expression: DataExpression::application(marker.clone().into(), elements.clone()).to_string()
    };
    if elements.len() % 2 != 0 {
      return Err(malformed());
    }
    let fbag     = b.sorts.fbag(element);
    let mut bag  = b.constant(EMPTY_BAG, fbag);
    for pair in elements.chunks(2).rev() {
      let count = &pair[1];
      let count = match count.sort(b.sorts) {
        sort if sort == b.nat => count.clone(),
        sort if sort == b.pos => b.pos2nat(count.clone()),
        _ => return Err(malformed()),
      };
      bag = b.call(FBAG_CINSERT, vec![pair[0].clone(), count, bag], fbag);
    }
    Ok(b.call(BAGFBAG, vec![bag], container))
  }

  fn comprehension(&mut self, binder: Binder, bound: &[Variable], body: DataExpression) -> DataResult<DataExpression> {
    let (expected, constructor) = match binder {
      Binder::SetComprehension => (self.b.bool_, SET_CONSTRUCTOR),
      _ => (self.b.nat, BAG_CONSTRUCTOR),
    };
    let invalid = |reason: &str| DataError::InvalidComprehension {
      expression: DataExpression::abstraction(binder, bound.to_vec(), body.clone()).to_string(),
      reason    : reason.to_string(),
    };

    if bound.len() != 1 {
      return Err(invalid("a comprehension binds exactly one variable"));
    }
    if body.sort(&self.spec.sorts) != expected {
      let reason = format!("the body must have sort {}", self.spec.sorts.name(expected));
      return Err(invalid(&reason));
    }

    let element  = bound[0].sort;
    let function = self.lift(DataExpression::lambda(bound.to_vec(), body));
    let b        = &self.b;
    let result = match binder {
      Binder::SetComprehension => {
        let empty = b.constant(EMPTY_SET, b.sorts.fset(element));
        b.call(constructor, vec![function, empty], b.sorts.set(element))
      }
      _ => {
        let empty = b.constant(EMPTY_BAG, b.sorts.fbag(element));
        b.call(constructor, vec![function, empty], b.sorts.bag(element))
      }
    };
    Ok(result)
  }

  /// Replaces `lambda` by an application of a fresh mapping to its free variables.
  fn lift(&mut self, lambda: DataExpression) -> DataExpression {
    if let Some(replacement) = self.lifted.get(&lambda) {
      return replacement.clone();
    }

    let DataExpression::Abstraction { bound, body, .. } = &lambda else {
      panic!("lifted {}, which is not a lambda. This is a bug.", lambda)
    };
    let spec   = self.spec;
    let sorts  = &spec.sorts;
    let free   = lambda.free_variables();
    let sort   = lambda.sort(sorts);
    let symbol = if free.is_empty() {
      FunctionSymbol::new(&self.fresh_lambda_name(), sort)
    } else {
      let domain = free.iter().map(|v| v.sort).collect();
      FunctionSymbol::new(&self.fresh_lambda_name(), sorts.function(domain, sort))
    };

    let replacement = DataExpression::application(
      symbol.clone().into(),
      free.iter().cloned().map(DataExpression::from).collect()
    );
    let lhs = DataExpression::application(
      replacement.clone(),
      bound.iter().cloned().map(DataExpression::from).collect()
    );
    let equation = DataEquation::new(lhs, (**body).clone());
    debug!(4, "lifted {} to {}", lambda, equation);

    self.lifted_mappings.push(symbol);
    self.lifted_equations.push(equation);
    self.lifted.insert(lambda, replacement.clone());
    replacement
  }

  fn fresh_lambda_name(&mut self) -> String {
    loop {
      let name = format!("{}{}", LAMBDA_PREFIX, self.next_lambda);
      self.next_lambda += 1;
      if self.taken_names.insert(IString::from(name.as_str())) {
        return name;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn lhs_rhs(spec: &DataSpecification) -> Vec<String> {
    spec.equations().iter().map(|e| e.to_string()).collect()
  }

  #[test]
  fn numerals_become_constructor_terms() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let d        = spec.sorts.basic("D");
    let f        = FunctionSymbol::new("f", spec.sorts.function(vec![b.pos], d));
    let c        = b.constant("c", d);
    let three    = b.constant("3", b.pos);
    let equation = DataEquation::new(b.apply(f.clone().into(), vec![three]), c);
    spec.add_mapping(f);
    spec.add_equation(equation);

    let diagnostics = normalize(&mut spec).unwrap();
    assert!(diagnostics.is_empty());
    assert_eq!(lhs_rhs(&spec), vec!["f(@cDub(true, @c1)) = c"]);
    assert_eq!(spec.status(), SpecificationStatus::Normalized);
  }

  #[test]
  fn invalid_numeral_is_an_error() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let zero     = b.constant("0", b.pos);
    let equation = DataEquation::new(b.constant("c", b.pos), zero);
    spec.add_equation(equation);
    assert!(matches!(normalize(&mut spec), Err(DataError::InvalidNumeral { .. })));
  }

  #[test]
  fn empty_enumeration_drops_its_equation() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let list     = spec.sorts.list(b.nat);
    let empty    = b.constant(LIST_ENUM, list);
    let kept     = DataEquation::new(b.constant("k", b.nat), b.constant("0", b.nat));
    let dropped  = DataEquation::new(b.constant("l", list), empty);
    spec.add_equations([kept, dropped]);

    let diagnostics = normalize(&mut spec).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(diagnostics[0], DataError::EmptyEnumeration { .. }));
    assert_eq!(lhs_rhs(&spec), vec!["k = @c0"]);
  }

  #[test]
  fn set_and_bag_enumerations() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let set      = spec.sorts.set(b.bool_);
    let bag      = spec.sorts.bag(b.bool_);
    let set_enum = FunctionSymbol::new(SET_ENUM, spec.sorts.function(vec![b.bool_, b.bool_], set));
    let bag_enum = FunctionSymbol::new(BAG_ENUM, spec.sorts.function(vec![b.bool_, b.pos], bag));
    let one      = b.constant("1", b.pos);
    let equations = [
      DataEquation::new(b.constant("s", set), b.apply(set_enum.into(), vec![b.true_(), b.false_()])),
      DataEquation::new(b.constant("b", bag), b.apply(bag_enum.into(), vec![b.true_(), one])),
    ];
    spec.add_equations(equations);

    normalize(&mut spec).unwrap();
    assert_eq!(
      lhs_rhs(&spec),
      vec![
        "s = @setfset(@fset_insert(true, @fset_insert(false, {})))",
        "b = @bagfbag(@fbag_cinsert(true, Pos2Nat(@c1), {:}))",
      ]
    );
  }

  #[test]
  fn odd_bag_enumeration_is_malformed() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let bag      = spec.sorts.bag(b.bool_);
    let bag_enum = FunctionSymbol::new(BAG_ENUM, spec.sorts.function(vec![b.bool_], bag));
    let equation = DataEquation::new(b.constant("b", bag), b.apply(bag_enum.into(), vec![b.true_()]));
    spec.add_equation(equation);
    assert!(matches!(normalize(&mut spec), Err(DataError::MalformedEnumeration { .. })));
  }

  #[test]
  fn lambdas_are_lifted_over_their_free_variables() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let x        = Variable::new("x", b.nat);
    let y        = Variable::new("y", b.nat);
    let f_sort   = spec.sorts.function(vec![b.nat], b.nat);
    let f        = FunctionSymbol::new("f", spec.sorts.function(vec![b.nat], f_sort));
    let lambda   = DataExpression::lambda(vec![x.clone()], b.plus(x.into(), y.clone().into()));
    let equation = DataEquation::new(b.apply(f.clone().into(), vec![y.into()]), lambda);
    spec.add_mapping(f);
    spec.add_equation(equation);

    normalize(&mut spec).unwrap();
    let lifted = spec.mappings().iter().find(|m| m.name.starts_with(LAMBDA_PREFIX)).unwrap().clone();
    assert_eq!(spec.sorts.name(lifted.sort), "Nat -> Nat -> Nat");
    assert!(spec.symbol_attributes(&lifted).contains(SymbolAttribute::Lifted));
    assert!(spec.is_synthesized_symbol(&lifted));
    assert!(spec.is_system_defined_symbol(&lifted));

    let rendered = lhs_rhs(&spec);
    assert!(rendered.contains(&"f(y) = @lambda_0(y)".to_string()));
    assert!(rendered.contains(&"@lambda_0(y)(x) = +(x, y)".to_string()));
  }

  #[test]
  fn identical_closed_lambdas_share_a_mapping() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let x        = Variable::new("x", b.bool_);
    let pred     = spec.sorts.function(vec![b.bool_], b.bool_);
    let lambda   = || DataExpression::lambda(vec![x.clone()], b.not(x.clone().into()));
    let equations = [
      DataEquation::new(b.constant("p", pred), lambda()),
      DataEquation::new(b.constant("q", pred), lambda()),
    ];
    spec.add_equations(equations);

    normalize(&mut spec).unwrap();
    let lifted: Vec<_> = spec.mappings().iter().filter(|m| m.name.starts_with(LAMBDA_PREFIX)).collect();
    assert_eq!(lifted.len(), 1);
    assert_eq!(spec.sorts.name(lifted[0].sort), "Bool -> Bool");
    assert!(lhs_rhs(&spec).contains(&"q = @lambda_0".to_string()));
  }

  #[test]
  fn where_clauses_bind_sequentially() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let x        = Variable::new("x", b.nat);
    let y        = Variable::new("y", b.pos);
    let body     = DataExpression::where_clause(
      b.plus(y.clone().into(), x.clone().into()),
      vec![(x.clone(), b.constant("0", b.nat)), (y, b.succ(x.into()))]
    );
    let equation = DataEquation::new(b.constant("c", b.pos), body);
    spec.add_equation(equation);

    normalize(&mut spec).unwrap();
    let rendered = lhs_rhs(&spec);
    // The lambda binding y sees x, so it is lifted over x.
    assert!(rendered.contains(&"@lambda_0(x)(y) = +(y, x)".to_string()));
    assert!(rendered.contains(&"@lambda_1(x) = @lambda_0(x)(succ(x))".to_string()));
    assert!(rendered.contains(&"c = @lambda_1(@c0)".to_string()));
  }

  #[test]
  fn comprehensions_need_one_variable_and_the_right_body() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let x        = Variable::new("x", b.nat);
    let set      = spec.sorts.set(b.nat);
    let good     = DataExpression::abstraction(
      Binder::SetComprehension,
      vec![x.clone()],
      b.less(x.clone().into(), b.constant("3", b.nat))
    );
    let equation = DataEquation::new(b.constant("s", set), good);
    spec.add_equation(equation);
    normalize(&mut spec).unwrap();
    assert!(lhs_rhs(&spec).contains(&"s = @set(@lambda_0, {})".to_string()));

    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let x        = Variable::new("x", b.nat);
    let bag      = spec.sorts.bag(b.nat);
    let bad      = DataExpression::abstraction(Binder::BagComprehension, vec![x.clone()], b.true_());
    let equation = DataEquation::new(b.constant("b", bag), bad);
    spec.add_equation(equation);
    assert!(matches!(normalize(&mut spec), Err(DataError::InvalidComprehension { .. })));
  }

  #[test]
  fn unresolved_sorts_are_rejected() {
    let mut spec = DataSpecification::new();
    let unknown  = spec.sorts.unknown();
    spec.add_mapping(FunctionSymbol::new("f", unknown));
    assert!(matches!(normalize(&mut spec), Err(DataError::UnresolvedSort { .. })));
  }
}
