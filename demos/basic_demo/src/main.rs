use dataspec::{
  api::{DataEquation, FunctionSymbol},
  builtin::Builder,
  closure::is_certainly_finite,
  core::{
    sort::{StructConstructor, StructProjection},
    DataSpecification
  },
  implement,
  log::set_global_logging_threshold,
  ImplementOptions
};

fn main() {
  set_global_logging_threshold(2);

  // sort Tree = struct leaf(value: Nat)?is_leaf | node(left: Tree, right: Tree);
  let mut spec = DataSpecification::new();
  let tree     = spec.sorts.basic("Tree");
  let nat      = spec.sorts.basic("Nat");
  let pos      = spec.sorts.basic("Pos");
  let structure = spec.sorts.structured(vec![
    StructConstructor::new("leaf", vec![StructProjection::new(Some("value"), nat)], Some("is_leaf")),
    StructConstructor::new(
      "node",
      vec![StructProjection::new(Some("left"), tree), StructProjection::new(Some("right"), tree)],
      None
    ),
  ]);
  spec.add_alias("Tree", structure);

  // map size: Tree -> Pos;
  // eqn size(leaf(n)) = 1;
  //     size(node(l, r)) = size(l) + size(r);
  let b    = Builder::new(&spec.sorts);
  let size = b.symbol("size", &[tree], pos);
  let leaf = b.symbol("leaf", &[nat], tree);
  let node = b.symbol("node", &[tree, tree], tree);
  let (n, l, r) = (b.variable("n", nat), b.variable("l", tree), b.variable("r", tree));
  let size_of   = |t| b.apply(size.clone().into(), vec![t]);
  let equations = vec![
    DataEquation::new(size_of(b.apply(leaf.into(), vec![n])), b.constant("1", pos)),
    DataEquation::new(
      size_of(b.apply(node.into(), vec![l.clone(), r.clone()])),
      b.plus(size_of(l), size_of(r))
    ),
  ];
  spec.add_mapping(size.clone());
  spec.add_equations(equations);

  let report = match implement(&mut spec, ImplementOptions::default()) {
    Ok(report) => report,
    Err(error) => {
      eprintln!("{}", error);
      std::process::exit(1);
    }
  };

  println!(
    "The closed specification has {} sorts, {} constructors, {} mappings and {} equations.",
    spec.declared_sorts().len(),
    spec.all_constructors().len(),
    spec.mappings().len(),
    spec.equations().len()
  );
  for diagnostic in report.diagnostics {
    println!("dropped: {}", diagnostic);
  }

  println!("Equations not generated by the library:");
  for equation in spec.equations().iter().filter(|e| !spec.is_system_defined_equation(e)) {
    println!("  {}", equation);
  }
  println!("Constructors of Tree:");
  for constructor in spec.constructors(tree) {
    println!("  {}: {}", constructor.name, spec.sorts.name(constructor.sort));
  }
  println!("Tree is certainly finite: {}", is_certainly_finite(&spec, tree));
}
