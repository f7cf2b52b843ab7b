use crate::{
  api::{
    equation::DataEquation,
    error::{DataError, Inconsistency},
    expression::DataExpression,
    symbol::FunctionSymbol
  },
  builtin::{names::*, numeral::decimal_value, Builder},
  closure::{check_well_formed, close, is_certainly_finite},
  core::{
    sort::{SortId, StructConstructor, StructProjection},
    specification::{DataSpecification, SpecificationStatus}
  },
  implement::{implement, ImplementOptions}
};

/// The right-hand side of the equation whose left-hand side renders as `lhs`.
fn rhs_of(spec: &DataSpecification, lhs: &str) -> String {
  spec.equations()
      .iter()
      .find(|equation| equation.lhs.to_string() == lhs)
      .map(|equation| equation.rhs.to_string())
      .unwrap_or_else(|| panic!("no equation for {}", lhs))
}

fn position(spec: &DataSpecification, name: &str) -> usize {
  let sort = spec.sorts.basic(name);
  spec.declared_sorts()
      .iter()
      .position(|declared| *declared == sort)
      .unwrap_or_else(|| panic!("{} is not declared", name))
}

fn constant(spec: &mut DataSpecification, name: &str, sort: SortId) -> DataExpression {
  let symbol = FunctionSymbol::new(name, sort);
  spec.add_mapping(symbol.clone());
  symbol.into()
}

// region End-to-end scenarios

#[test]
fn numeral_three_at_sort_pos() {
  // The encoding does not depend on which numeral the specification mentions first.
  for order in [["3", "5"], ["5", "3"]] {
    let mut spec = DataSpecification::new();
    let pos      = spec.sorts.basic("Pos");
    for value in order {
      let lhs     = constant(&mut spec, &format!("n{}", value), pos);
      let literal = FunctionSymbol::new(value, pos);
      spec.add_equation(DataEquation::new(lhs, literal.into()));
    }

    let report = implement(&mut spec, ImplementOptions::default()).unwrap();
    assert!(report.diagnostics.is_empty());
    assert_eq!(rhs_of(&spec, "n3"), "@cDub(true, @c1)");
    assert_eq!(rhs_of(&spec, "n5"), "@cDub(true, @cDub(false, @c1))");
  }
}

#[test]
fn list_enumeration_of_booleans() {
  let mut spec = DataSpecification::new();
  let b        = Builder::new(&spec.sorts);
  let list     = spec.sorts.list(b.bool_);
  let marker   = FunctionSymbol::new(LIST_ENUM, spec.sorts.function(vec![b.bool_; 3], list));
  let elements = vec![b.true_(), b.false_(), b.true_()];
  let rhs      = DataExpression::application(marker.into(), elements);
  let lhs      = constant(&mut spec, "l", list);
  spec.add_equation(DataEquation::new(lhs, rhs));

  implement(&mut spec, ImplementOptions::default()).unwrap();
  assert_eq!(rhs_of(&spec, "l"), "|>(true, |>(false, |>(true, [])))");

  let l = spec.mappings().iter().find(|m| m.is_named("l")).unwrap();
  assert_eq!(spec.sorts.name(l.sort), "@List");
}

#[test]
fn struct_declaration_yields_constructor_and_projections() {
  let mut spec = DataSpecification::new();
  let nat      = spec.sorts.basic("Nat");
  let pair     = spec.sorts.structured(vec![
    StructConstructor::new(
      "Pair",
      vec![StructProjection::new(Some("fst"), nat), StructProjection::new(Some("snd"), nat)],
      None
    )
  ]);
  spec.add_alias("PairSort", pair);

  implement(&mut spec, ImplementOptions::default()).unwrap();

  let pair_sort = spec.sorts.basic("PairSort");
  assert!(spec.is_declared(pair_sort));
  let constructors = spec.constructors(pair_sort);
  assert_eq!(constructors.len(), 1);
  assert_eq!(spec.sorts.name(constructors[0].sort), "Nat # Nat -> PairSort");

  assert_eq!(rhs_of(&spec, "fst(Pair(x1, x2))"), "x1");
  assert_eq!(rhs_of(&spec, "snd(Pair(x1, x2))"), "x2");

  let fst = spec.mappings().iter().find(|m| m.is_named("fst")).unwrap().clone();
  assert!(spec.is_synthesized_symbol(&fst));
  assert!(!spec.is_synthesized_symbol(&constructors[0]));
}

#[test]
fn set_of_positives_declares_its_dependencies_first() {
  let mut spec = DataSpecification::new();
  let pos      = spec.sorts.basic("Pos");
  let set      = spec.sorts.set(pos);
  constant(&mut spec, "s", set);

  implement(&mut spec, ImplementOptions::default()).unwrap();

  let (bool_, pos, nat) = (position(&spec, "Bool"), position(&spec, "Pos"), position(&spec, "Nat"));
  let (fset, set)       = (position(&spec, "@FSet"), position(&spec, "@Set"));
  assert!(bool_ < pos);
  assert!(pos < nat);
  assert!(nat < fset);
  assert!(fset < set);

  let s = spec.mappings().iter().find(|m| m.is_named("s")).unwrap();
  assert_eq!(spec.sorts.name(s.sort), "@Set");
  assert_eq!(spec.origin_of(s.sort), Some(spec.sorts.set(spec.sorts.basic("Pos"))));
}

#[test]
fn recursive_struct_is_not_finite() {
  let mut spec = DataSpecification::new();
  let rec      = spec.sorts.basic("Rec");
  let node     = spec.sorts.structured(vec![
    StructConstructor::new("Node", vec![StructProjection::new(Some("next"), rec)], None)
  ]);
  spec.add_alias("Rec", node);

  implement(&mut spec, ImplementOptions::default()).unwrap();
  assert!(!is_certainly_finite(&spec, rec));
  assert!(!is_certainly_finite(&spec, node));
}

// endregion End-to-end scenarios

/// Bags of integers, lists of reals, a function sort and a struct all at once.
fn rich_specification() -> DataSpecification {
  let mut spec = DataSpecification::new();
  let b        = Builder::new(&spec.sorts);
  let (int, real, bool_) = (b.int, b.real, b.bool_);
  let d        = spec.sorts.basic("D");
  let bag      = spec.sorts.bag(int);
  let list     = spec.sorts.list(real);
  let function = spec.sorts.function(vec![d], bool_);
  let tree     = spec.sorts.basic("Tree");
  let node     = spec.sorts.structured(vec![
    StructConstructor::new("leaf", vec![StructProjection::new(Some("value"), d)], Some("is_leaf")),
    StructConstructor::new(
      "node",
      vec![StructProjection::new(Some("left"), tree), StructProjection::new(Some("right"), tree)],
      None
    ),
  ]);

  spec.add_sort(d);
  spec.add_constructor(FunctionSymbol::new("d1", d));
  spec.add_constructor(FunctionSymbol::new("d2", d));
  spec.add_alias("Tree", node);
  constant(&mut spec, "numbers", bag);
  constant(&mut spec, "reals", list);
  constant(&mut spec, "predicate", function);
  constant(&mut spec, "tree", tree);
  spec
}

#[test]
fn closure_is_idempotent() {
  let mut spec = rich_specification();
  implement(&mut spec, ImplementOptions::default()).unwrap();
  assert_eq!(spec.status(), SpecificationStatus::Closed);

  let mut again = spec.clone();
  close(&mut again).unwrap();
  assert!(again == spec);
  assert_eq!(again.equations().len(), spec.equations().len());
}

#[test]
fn closed_specification_is_self_contained() {
  let mut spec = rich_specification();
  implement(&mut spec, ImplementOptions::default().check_well_formedness(false)).unwrap();
  assert!(check_well_formed(&spec).is_ok());

  // Every sort of every symbol is declared.
  for symbol in spec.all_constructors().iter().chain(spec.mappings().iter()) {
    for sort in spec.sorts.domain(symbol.sort).into_iter().chain([spec.sorts.codomain(symbol.sort)]) {
      if spec.sorts.is_basic(sort) {
        assert!(spec.is_declared(sort), "{} of {} is not declared", spec.sorts.name(sort), symbol.name);
      }
    }
  }
}

#[test]
fn undeclared_user_sorts_are_reported() {
  let mut spec = DataSpecification::new();
  let e        = spec.sorts.basic("E");
  let bool_    = spec.sorts.basic("Bool");
  let f        = FunctionSymbol::new("f", spec.sorts.function(vec![e], bool_));
  spec.add_mapping(f);

  let result = implement(&mut spec, ImplementOptions::default());
  let problems = match result {
    Err(DataError::Inconsistent(problems)) => problems,
    other => panic!("expected an inconsistency, got {:?}", other),
  };
  assert!(problems.iter().any(|p| matches!(p, Inconsistency::UndeclaredSort { sort, .. } if sort == "E")));
}

#[test]
fn sorts_of_quantified_variables_are_checked() {
  let mut spec = DataSpecification::new();
  let b        = Builder::new(&spec.sorts);
  let e        = spec.sorts.basic("E");
  let ok       = FunctionSymbol::new("ok", b.bool_);
  let bound    = crate::api::variable::Variable::new("e", e);
  let rhs      = DataExpression::forall(vec![bound], b.true_());
  spec.add_mapping(ok.clone());
  spec.add_equation(DataEquation::new(ok.into(), rhs));

  implement(&mut spec, ImplementOptions::default().check_well_formedness(false)).unwrap();
  let problems = match check_well_formed(&spec) {
    Err(DataError::Inconsistent(problems)) => problems,
    other => panic!("expected an inconsistency, got {:?}", other),
  };
  assert_eq!(problems.len(), 1);
  assert!(matches!(&problems[0], Inconsistency::UndeclaredSort { sort, .. } if sort == "E"));
}

#[test]
fn undeclared_symbols_and_unbound_variables_are_reported() {
  let mut spec = DataSpecification::new();
  let b        = Builder::new(&spec.sorts);
  let x        = b.variable("x", b.nat);
  let y        = b.variable("y", b.nat);
  let g        = FunctionSymbol::new("g", spec.sorts.function(vec![b.nat], b.nat));
  let h        = FunctionSymbol::new("h", spec.sorts.function(vec![b.nat], b.nat));
  let lhs      = b.apply(g.clone().into(), vec![x]);
  let rhs      = b.apply(h.into(), vec![y]);
  spec.add_mapping(g);
  spec.add_equation(DataEquation::new(lhs, rhs));

  let result = implement(&mut spec, ImplementOptions::default());
  let problems = match result {
    Err(DataError::Inconsistent(problems)) => problems,
    other => panic!("expected an inconsistency, got {:?}", other),
  };
  assert!(problems.iter().any(|p| matches!(p, Inconsistency::UndeclaredSymbol { symbol, .. } if symbol == "h")));
  assert!(problems.iter().any(|p| matches!(p, Inconsistency::UnboundVariable { variable, .. } if variable == "y")));
  assert!(!problems.iter().any(|p| matches!(p, Inconsistency::UndeclaredHead { .. })));
}

#[test]
fn no_alias_remains_reachable() {
  let mut spec = DataSpecification::new();
  let nat      = spec.sorts.basic("Nat");
  let number   = spec.add_alias("Number", nat);
  let numbers  = spec.add_alias("Numbers", spec.sorts.list(number));
  constant(&mut spec, "ns", numbers);
  let first_sort = spec.sorts.function(vec![numbers], number);
  constant(&mut spec, "first", first_sort);

  implement(&mut spec, ImplementOptions::default()).unwrap();

  let sorts = &spec.sorts;
  let contains_alias = |sort: SortId| sorts.ids().any(|s| sorts.is_alias(s) && sorts.occurs_in(s, sort));
  for symbol in spec.all_constructors().iter().chain(spec.mappings().iter()) {
    assert!(!contains_alias(symbol.sort), "{} has sort {}", symbol.name, sorts.name(symbol.sort));
  }
  for equation in spec.equations() {
    equation.for_each_part(|part| part.for_each_sort(&mut |sort| assert!(!contains_alias(sort))));
  }
  for sort in spec.declared_sorts() {
    assert!(!contains_alias(*sort));
  }

  let ns = spec.mappings().iter().find(|m| m.is_named("ns")).unwrap();
  assert_eq!(sorts.name(ns.sort), "Numbers");
}

// region Finiteness

/// `S` with two constants, `S0` with only `g: S0 -> S0`.
fn finiteness_specification() -> (DataSpecification, SortId, SortId) {
  let mut spec = DataSpecification::new();
  let s        = spec.sorts.basic("S");
  let s0       = spec.sorts.basic("S0");
  spec.add_sort(s);
  spec.add_sort(s0);
  spec.add_constructor(FunctionSymbol::new("c", s));
  spec.add_constructor(FunctionSymbol::new("d", s));
  spec.add_constructor(FunctionSymbol::new("g", spec.sorts.function(vec![s0], s0)));
  (spec, s, s0)
}

fn assert_finiteness(spec: &DataSpecification, s: SortId, s0: SortId) {
  let sorts = &spec.sorts;
  assert!(is_certainly_finite(spec, s));
  assert!(!is_certainly_finite(spec, s0));
  assert!(is_certainly_finite(spec, sorts.basic("Bool")));
  assert!(!is_certainly_finite(spec, sorts.basic("Nat")));
  assert!(!is_certainly_finite(spec, sorts.list(s)));
  assert!(!is_certainly_finite(spec, sorts.bag(s)));
  assert!(!is_certainly_finite(spec, sorts.fset(s)));
  assert!(is_certainly_finite(spec, sorts.set(s)));
  assert!(!is_certainly_finite(spec, sorts.set(s0)));
  assert!(is_certainly_finite(spec, sorts.function(vec![s], s)));
  assert!(!is_certainly_finite(spec, sorts.function(vec![s], s0)));
  assert!(!is_certainly_finite(spec, sorts.function(vec![s0], s)));
}

#[test]
fn finiteness_before_and_after_closure() {
  let (mut spec, s, s0) = finiteness_specification();
  assert_finiteness(&spec, s, s0);

  let set = spec.sorts.set(s);
  constant(&mut spec, "all", set);
  implement(&mut spec, ImplementOptions::default()).unwrap();
  assert_finiteness(&spec, s, s0);

  // The implementing sort is judged like the set it implements.
  let implementing = spec.implementation_of(set).unwrap();
  assert!(is_certainly_finite(&spec, implementing));
}

#[test]
fn mutual_recursion_is_not_finite() {
  let mut spec = DataSpecification::new();
  let s1       = spec.sorts.basic("S1");
  let s2       = spec.sorts.basic("S2");
  spec.add_constructor(FunctionSymbol::new("e", s1));
  spec.add_constructor(FunctionSymbol::new("c1", spec.sorts.function(vec![s2], s1)));
  spec.add_constructor(FunctionSymbol::new("c2", spec.sorts.function(vec![s1], s2)));

  assert!(!is_certainly_finite(&spec, s1));
  assert!(!is_certainly_finite(&spec, s2));
}

// endregion Finiteness

// region Finite encodings

/// The elements of an insertion chain `@fset_insert(e1, @fset_insert(e2, ... {}))`.
fn decode_fset(expression: &DataExpression) -> Vec<String> {
  let mut elements = vec![];
  let mut current  = expression;
  while current.is_application_of(FSET_INSERT, 2) {
    elements.push(current.arguments()[0].to_string());
    current = &current.arguments()[1];
  }
  assert!(current.as_symbol().is_some_and(|s| s.is_named(EMPTY_SET)));
  elements
}

/// The element and multiplicity pairs of `@fbag_cinsert(e1, n1, ... {:})`.
fn decode_fbag(expression: &DataExpression) -> Vec<(String, String)> {
  let mut elements = vec![];
  let mut current  = expression;
  while current.is_application_of(FBAG_CINSERT, 3) {
    let arguments = current.arguments();
    let count     = decimal_value(&arguments[1]).unwrap();
    elements.push((arguments[0].to_string(), count));
    current = &arguments[2];
  }
  assert!(current.as_symbol().is_some_and(|s| s.is_named(EMPTY_BAG)));
  elements
}

#[test]
fn finite_set_and_bag_round_trip() {
  let mut spec = DataSpecification::new();
  let b        = Builder::new(&spec.sorts);
  let e        = spec.sorts.basic("E");
  let names    = ["a", "b", "c"];
  let elements: Vec<DataExpression> = names.iter().map(|n| FunctionSymbol::new(n, e).into()).collect();

  let set      = spec.sorts.set(e);
  let bag      = spec.sorts.bag(e);
  let set_enum = FunctionSymbol::new(SET_ENUM, spec.sorts.function(vec![e; 3], set));
  let bag_enum = FunctionSymbol::new(BAG_ENUM, spec.sorts.function(vec![e, b.nat, e, b.nat], bag));
  let set_rhs  = DataExpression::application(set_enum.into(), elements.clone());
  let bag_rhs  = DataExpression::application(
    bag_enum.into(),
    vec![
      elements[0].clone(), FunctionSymbol::new("2", b.nat).into(),
      elements[2].clone(), FunctionSymbol::new("1", b.nat).into(),
    ]
  );

  spec.add_sort(e);
  for name in names {
    spec.add_constructor(FunctionSymbol::new(name, e));
  }
  let set_lhs = constant(&mut spec, "s", set);
  let bag_lhs = constant(&mut spec, "m", bag);
  spec.add_equation(DataEquation::new(set_lhs, set_rhs));
  spec.add_equation(DataEquation::new(bag_lhs, bag_rhs));

  implement(&mut spec, ImplementOptions::default()).unwrap();

  let rhs = |lhs: &str| spec.equations().iter().find(|eq| eq.lhs.to_string() == lhs).unwrap().rhs.clone();
  let set_rhs = rhs("s");
  assert!(set_rhs.is_application_of(SETFSET, 1));
  assert_eq!(decode_fset(&set_rhs.arguments()[0]), names);

  let bag_rhs = rhs("m");
  assert!(bag_rhs.is_application_of(BAGFBAG, 1));
  assert_eq!(
    decode_fbag(&bag_rhs.arguments()[0]),
    vec![("a".to_string(), "2".to_string()), ("c".to_string(), "1".to_string())]
  );
}

// endregion Finite encodings
