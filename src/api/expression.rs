/*!

Data expressions. A `DataExpression` is a tagged union that every pass matches exhaustively, so adding a new
expression form is a compile error everywhere it has to be handled.

Surface notation is represented with the same type. Numerals are constant symbols whose name is a decimal numeral,
enumerations are applications of reserved marker symbols, and comprehensions and lambdas are abstractions. The
[`normalize`](crate::normalize) module removes all of it.

## Sorts of Expressions

 - a variable or symbol has its declared sort;
 - an application has the codomain of the sort of its head;
 - a lambda over `x1: S1, ..., xn: Sn` with body of sort `T` has sort `S1 # ... # Sn -> T`;
 - quantifiers have sort `Bool`;
 - a set (bag) comprehension over `x: S` has sort `Set(S)` (`Bag(S)`);
 - a where-clause has the sort of its body.

Applications built with [`DataExpression::apply`] are checked against the sort of the head. A mismatch is a bug in
the caller, not a user error, and panics.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{join_string, HashMap},
  api::{
    symbol::FunctionSymbol,
    variable::Variable
  },
  core::{
    format::{FormatStyle, Formattable},
    sort::{SortCollection, SortId, SortSubstitution}
  }
};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Binder {
  Lambda,
  Forall,
  Exists,
  SetComprehension,
  BagComprehension,
}

impl Display for Binder {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Binder::Lambda           => write!(f, "lambda"),
      Binder::Forall           => write!(f, "forall"),
      Binder::Exists           => write!(f, "exists"),
      Binder::SetComprehension => write!(f, "setcomp"),
      Binder::BagComprehension => write!(f, "bagcomp"),
    }
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DataExpression {
  Variable(Variable),
  Symbol(FunctionSymbol),
  Application {
    head     : Box<DataExpression>,
    arguments: Vec<DataExpression>,
  },
  Abstraction {
    binder: Binder,
    bound : Vec<Variable>,
    body  : Box<DataExpression>,
  },
  Where {
    body    : Box<DataExpression>,
    bindings: Vec<(Variable, DataExpression)>,
  },
}

impl From<Variable> for DataExpression {
  fn from(variable: Variable) -> Self {
    DataExpression::Variable(variable)
  }
}

impl From<FunctionSymbol> for DataExpression {
  fn from(symbol: FunctionSymbol) -> Self {
    DataExpression::Symbol(symbol)
  }
}

impl DataExpression {
  // region Construction

  /// Applies `head` to `arguments`, checking arity and argument sorts. Applying to no arguments returns `head`.
  pub fn apply(sorts: &SortCollection, head: DataExpression, arguments: Vec<DataExpression>) -> DataExpression {
    if arguments.is_empty() {
      return head;
    }

    let head_sort = head.sort(sorts);
    let domain    = sorts.domain(head_sort);
    assert_eq!(
      domain.len(),
      arguments.len(),
      "applied {} of sort {} to {} arguments. This is a bug.",
      head,
      sorts.name(head_sort),
      arguments.len()
    );
    for (argument, expected) in arguments.iter().zip(domain.iter()) {
      let actual = argument.sort(sorts);
      assert!(
        sorts.equivalent(actual, *expected),
        "argument {} of {} has sort {} but {} was expected. This is a bug.",
        argument,
        head,
        sorts.name(actual),
        sorts.name(*expected)
      );
    }

    DataExpression::application(head, arguments)
  }

  /// Builds an application without checking sorts. Used when rebuilding an expression whose parts have been
  /// rewritten to sort-equivalent parts.
  pub(crate) fn application(head: DataExpression, arguments: Vec<DataExpression>) -> DataExpression {
    if arguments.is_empty() {
      head
    } else {
      DataExpression::Application {
        head: Box::new(head),
        arguments
      }
    }
  }

  /// Panics on a lambda without bound variables, which has no function sort.
  pub fn abstraction(binder: Binder, bound: Vec<Variable>, body: DataExpression) -> DataExpression {
    assert!(
      binder != Binder::Lambda || !bound.is_empty(),
      "lambda without bound variables: {}. This is a bug.",
      body
    );
    DataExpression::Abstraction {
      binder,
      bound,
      body: Box::new(body)
    }
  }

  pub fn lambda(bound: Vec<Variable>, body: DataExpression) -> DataExpression {
    Self::abstraction(Binder::Lambda, bound, body)
  }

  pub fn forall(bound: Vec<Variable>, body: DataExpression) -> DataExpression {
    Self::abstraction(Binder::Forall, bound, body)
  }

  pub fn exists(bound: Vec<Variable>, body: DataExpression) -> DataExpression {
    Self::abstraction(Binder::Exists, bound, body)
  }

  pub fn where_clause(body: DataExpression, bindings: Vec<(Variable, DataExpression)>) -> DataExpression {
    DataExpression::Where {
      body: Box::new(body),
      bindings
    }
  }

  // endregion Construction

  // region Accessors

  /// The sort of the expression. See the module documentation.
  pub fn sort(&self, sorts: &SortCollection) -> SortId {
    match self {
      DataExpression::Variable(variable) => variable.sort,
      DataExpression::Symbol(symbol)     => symbol.sort,
      DataExpression::Application { head, .. } => sorts.codomain(head.sort(sorts)),
      DataExpression::Abstraction { binder, bound, body } => {
        match binder {
          Binder::Lambda => {
            let domain = bound.iter().map(|v| v.sort).collect();
            sorts.function(domain, body.sort(sorts))
          }
          Binder::Forall | Binder::Exists => sorts.basic("Bool"),
          Binder::SetComprehension => sorts.set(Self::comprehension_element(bound)),
          Binder::BagComprehension => sorts.bag(Self::comprehension_element(bound)),
        }
      }
      DataExpression::Where { body, .. } => body.sort(sorts),
    }
  }

  fn comprehension_element(bound: &[Variable]) -> SortId {
    match bound.first() {
      Some(variable) => variable.sort,
      None => panic!("comprehension without a bound variable has no sort. This is a bug."),
    }
  }

  /// The symbol at the head of a (possibly curried) application, or the expression itself if it is a symbol.
  pub fn head_symbol(&self) -> Option<&FunctionSymbol> {
    match self {
      DataExpression::Symbol(symbol) => Some(symbol),
      DataExpression::Application { head, .. } => head.head_symbol(),
      _ => None
    }
  }

  pub fn as_symbol(&self) -> Option<&FunctionSymbol> {
    match self {
      DataExpression::Symbol(symbol) => Some(symbol),
      _ => None
    }
  }

  pub fn as_variable(&self) -> Option<&Variable> {
    match self {
      DataExpression::Variable(variable) => Some(variable),
      _ => None
    }
  }

  /// The arguments of an application, or the empty slice.
  pub fn arguments(&self) -> &[DataExpression] {
    match self {
      DataExpression::Application { arguments, .. } => arguments,
      _ => &[]
    }
  }

  /// Whether this is an application of a symbol named `name` to exactly `arity` arguments.
  pub fn is_application_of(&self, name: &str, arity: usize) -> bool {
    match self {
      DataExpression::Application { head, arguments } => {
        arguments.len() == arity && head.as_symbol().is_some_and(|s| s.is_named(name))
      }
      _ => false
    }
  }

  // endregion Accessors

  // region Traversals

  /// The free variables in order of first occurrence.
  pub fn free_variables(&self) -> Vec<Variable> {
    let mut bound  = Vec::new();
    let mut result = Vec::new();
    self.collect_free_variables(&mut bound, &mut result);
    result
  }

  fn collect_free_variables(&self, bound: &mut Vec<Variable>, result: &mut Vec<Variable>) {
    match self {

      DataExpression::Variable(variable) => {
        if !bound.contains(variable) && !result.contains(variable) {
          result.push(variable.clone());
        }
      }

      DataExpression::Symbol(_) => {}

      DataExpression::Application { head, arguments } => {
        head.collect_free_variables(bound, result);
        for argument in arguments {
          argument.collect_free_variables(bound, result);
        }
      }

      DataExpression::Abstraction { bound: variables, body, .. } => {
        let mark = bound.len();
        bound.extend(variables.iter().cloned());
        body.collect_free_variables(bound, result);
        bound.truncate(mark);
      }

      // Each binding sees the variables bound before it.
      DataExpression::Where { body, bindings } => {
        let mark = bound.len();
        for (variable, value) in bindings {
          value.collect_free_variables(bound, result);
          bound.push(variable.clone());
        }
        body.collect_free_variables(bound, result);
        bound.truncate(mark);
      }

    } // end match on `DataExpression`
  }

  /// Calls `f` on every symbol occurrence, heads included.
  pub fn for_each_symbol(&self, f: &mut impl FnMut(&FunctionSymbol)) {
    match self {
      DataExpression::Variable(_) => {}
      DataExpression::Symbol(symbol) => f(symbol),
      DataExpression::Application { head, arguments } => {
        head.for_each_symbol(f);
        arguments.iter().for_each(|a| a.for_each_symbol(f));
      }
      DataExpression::Abstraction { body, .. } => body.for_each_symbol(f),
      DataExpression::Where { body, bindings } => {
        bindings.iter().for_each(|(_, value)| value.for_each_symbol(f));
        body.for_each_symbol(f);
      }
    }
  }

  /// Calls `f` on every variable occurrence, bound variables and binding variables included.
  pub fn for_each_variable(&self, f: &mut impl FnMut(&Variable)) {
    match self {
      DataExpression::Variable(variable) => f(variable),
      DataExpression::Symbol(_) => {}
      DataExpression::Application { head, arguments } => {
        head.for_each_variable(f);
        arguments.iter().for_each(|a| a.for_each_variable(f));
      }
      DataExpression::Abstraction { bound, body, .. } => {
        bound.iter().for_each(|v| f(v));
        body.for_each_variable(f);
      }
      DataExpression::Where { body, bindings } => {
        for (variable, value) in bindings {
          f(variable);
          value.for_each_variable(f);
        }
        body.for_each_variable(f);
      }
    }
  }

  /// Calls `f` on the sort of every symbol and variable occurrence.
  pub fn for_each_sort(&self, f: &mut impl FnMut(SortId)) {
    self.for_each_symbol(&mut |symbol| f(symbol.sort));
    self.for_each_variable(&mut |variable| f(variable.sort));
  }

  /// Rebuilds the expression with every sort `s` of a symbol or variable replaced by `f(s)`.
  pub fn map_sorts(&self, f: &impl Fn(SortId) -> SortId) -> DataExpression {
    let map_variable = |v: &Variable| Variable { name: v.name.clone(), sort: f(v.sort) };

    match self {
      DataExpression::Variable(variable) => DataExpression::Variable(map_variable(variable)),
      DataExpression::Symbol(symbol) => {
        DataExpression::Symbol(FunctionSymbol { name: symbol.name.clone(), sort: f(symbol.sort) })
      }
      DataExpression::Application { head, arguments } => {
        DataExpression::Application {
          head     : Box::new(head.map_sorts(f)),
          arguments: arguments.iter().map(|a| a.map_sorts(f)).collect(),
        }
      }
      DataExpression::Abstraction { binder, bound, body } => {
        DataExpression::Abstraction {
          binder: *binder,
          bound : bound.iter().map(map_variable).collect(),
          body  : Box::new(body.map_sorts(f)),
        }
      }
      DataExpression::Where { body, bindings } => {
        DataExpression::Where {
          body    : Box::new(body.map_sorts(f)),
          bindings: bindings.iter()
                            .map(|(variable, value)| (map_variable(variable), value.map_sorts(f)))
                            .collect(),
        }
      }
    } // end match on `DataExpression`
  }

  /// Applies `substitution` to every sort of a symbol or variable.
  pub fn replace_sorts(&self, sorts: &SortCollection, substitution: &SortSubstitution) -> DataExpression {
    self.map_sorts(&|sort| substitution.apply(sorts, sort))
  }

  /// Replaces free occurrences of variables by the expressions `substitution` maps them to.
  pub fn substitute(&self, substitution: &HashMap<Variable, DataExpression>) -> DataExpression {
    match self {
      DataExpression::Variable(variable) => {
        substitution.get(variable).cloned().unwrap_or_else(|| self.clone())
      }
      DataExpression::Symbol(_) => self.clone(),
      DataExpression::Application { head, arguments } => {
        DataExpression::Application {
          head     : Box::new(head.substitute(substitution)),
          arguments: arguments.iter().map(|a| a.substitute(substitution)).collect(),
        }
      }
      DataExpression::Abstraction { binder, bound, body } => {
        let inner = Self::without(substitution, bound.iter());
        DataExpression::Abstraction {
          binder: *binder,
          bound : bound.clone(),
          body  : Box::new(body.substitute(&inner)),
        }
      }
      DataExpression::Where { body, bindings } => {
        let mut inner        = substitution.clone();
        let mut new_bindings = Vec::with_capacity(bindings.len());
        for (variable, value) in bindings {
          new_bindings.push((variable.clone(), value.substitute(&inner)));
          inner.remove(variable);
        }
        DataExpression::Where {
          body    : Box::new(body.substitute(&inner)),
          bindings: new_bindings,
        }
      }
    }
  }

  fn without<'a>(
    substitution: &HashMap<Variable, DataExpression>,
    shadowed    : impl Iterator<Item = &'a Variable>,
  ) -> HashMap<Variable, DataExpression>
  {
    let mut inner = substitution.clone();
    for variable in shadowed {
      inner.remove(variable);
    }
    inner
  }

  // endregion Traversals
}

impl Display for DataExpression {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      DataExpression::Variable(variable) => write!(f, "{}", variable),

      DataExpression::Symbol(symbol) => write!(f, "{}", symbol),

      DataExpression::Application { head, arguments } => {
        write!(f, "{}({})", head, join_string(arguments.iter(), ", "))
      }

      DataExpression::Abstraction { binder, bound, body } => {
        write!(f, "{} {}. {}", binder, join_string(bound.iter(), ", "), body)
      }

      DataExpression::Where { body, bindings } => {
        let bindings = join_string(bindings.iter().map(|(v, e)| format!("{} = {}", v, e)), ", ");
        write!(f, "{} whr {} end", body, bindings)
      }

    } // end match on `DataExpression`
  }
}

impl Formattable for DataExpression {
  fn repr(&self, sorts: &SortCollection, style: FormatStyle) -> String {
    match style {
      FormatStyle::Simple => self.to_string(),
      FormatStyle::Debug => {
        // Annotate symbols and variables with their sorts.
        match self {
          DataExpression::Variable(variable) => format!("{}: {}", variable.name, sorts.name(variable.sort)),
          DataExpression::Symbol(symbol) => format!("{}: {}", symbol.name, sorts.name(symbol.sort)),
          DataExpression::Application { head, arguments } => {
            format!(
              "({})({})",
              head.repr(sorts, style),
              join_string(arguments.iter().map(|a| a.repr(sorts, style)), ", ")
            )
          }
          DataExpression::Abstraction { binder, bound, body } => {
            format!(
              "{} {}. {}",
              binder,
              join_string(bound.iter().map(|v| format!("{}: {}", v.name, sorts.name(v.sort))), ", "),
              body.repr(sorts, style)
            )
          }
          DataExpression::Where { body, bindings } => {
            format!(
              "{} whr {} end",
              body.repr(sorts, style),
              join_string(bindings.iter().map(|(v, e)| format!("{} = {}", v.name, e.repr(sorts, style))), ", ")
            )
          }
        }
      }
      FormatStyle::Default => self.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn setup() -> (SortCollection, SortId, SortId) {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    let bool_ = sorts.basic("Bool");
    (sorts, nat, bool_)
  }

  #[test]
  fn application_sort_is_codomain() {
    let (sorts, nat, bool_) = setup();
    let even = FunctionSymbol::new("even", sorts.function(vec![nat], bool_));
    let x    = Variable::new("x", nat);
    let term = DataExpression::apply(&sorts, even.into(), vec![x.into()]);
    assert_eq!(term.sort(&sorts), bool_);
    assert_eq!(term.to_string(), "even(x)");
  }

  #[test]
  #[should_panic]
  fn ill_sorted_application_panics() {
    let (sorts, nat, bool_) = setup();
    let even = FunctionSymbol::new("even", sorts.function(vec![nat], bool_));
    let b    = Variable::new("b", bool_);
    DataExpression::apply(&sorts, even.into(), vec![b.into()]);
  }

  #[test]
  #[should_panic]
  fn lambda_without_bound_variables_panics() {
    let (_sorts, nat, _bool) = setup();
    DataExpression::lambda(vec![], Variable::new("x", nat).into());
  }

  #[test]
  fn free_variables_respect_binders() {
    let (sorts, nat, bool_) = setup();
    let lt = FunctionSymbol::new("<", sorts.function(vec![nat, nat], bool_));
    let x  = Variable::new("x", nat);
    let y  = Variable::new("y", nat);
    let body = DataExpression::apply(&sorts, lt.into(), vec![x.clone().into(), y.clone().into()]);
    let lambda = DataExpression::lambda(vec![x.clone()], body.clone());

    assert_eq!(body.free_variables(), vec![x.clone(), y.clone()]);
    assert_eq!(lambda.free_variables(), vec![y.clone()]);
    assert_eq!(sorts.name(lambda.sort(&sorts)), "Nat -> Bool");

    // A where-binding sees the bindings before it but not the ones after it.
    let clause = DataExpression::where_clause(
      body,
      vec![(x.clone(), y.clone().into()), (y.clone(), x.clone().into())]
    );
    assert_eq!(clause.free_variables(), vec![y]);
  }

  #[test]
  fn substitution_skips_shadowed_variables() {
    let (sorts, nat, bool_) = setup();
    let eq = FunctionSymbol::new("==", sorts.function(vec![nat, nat], bool_));
    let x  = Variable::new("x", nat);
    let y  = Variable::new("y", nat);
    let body   = DataExpression::apply(&sorts, eq.into(), vec![x.clone().into(), y.clone().into()]);
    let lambda = DataExpression::lambda(vec![x.clone()], body);

    let mut substitution = HashMap::new();
    substitution.insert(x.clone(), DataExpression::from(y.clone()));
    substitution.insert(y.clone(), DataExpression::from(x.clone()));

    assert_eq!(lambda.substitute(&substitution).to_string(), "lambda x. ==(x, x)");
  }
}
