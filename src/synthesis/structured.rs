/*!

Structured sorts `struct c1(p1: S1, ...)?is_c1 | c2 | ...`. Every alternative becomes a constructor, every named
argument a projection, and every requested recognizer a mapping to `Bool`. Equality and the orderings compare
constructors by declaration order first and arguments lexicographically second.

A projection that only some alternatives have is still a total mapping: on the other alternatives it maps to the
constant `@undefined_<projection>`.

*/

use crate::{
  abstractions::{HashMap, IString},
  api::{
    equation::DataEquation,
    error::{DataError, DataResult},
    expression::DataExpression,
    symbol::{FunctionSymbol, SymbolAttribute}
  },
  builtin::{names::UNDEFINED_PREFIX, Builder},
  core::{
    implementation::Implementation,
    sort::{SortId, StructConstructor}
  }
};

pub(crate) fn generate(b: &Builder, sort: SortId, alternatives: &[StructConstructor]) -> DataResult<Implementation> {
  let mut implementation = Implementation::new(sort);

  let constructors: Vec<FunctionSymbol> = alternatives
      .iter()
      .map(|alternative| {
        let domain: Vec<SortId> = alternative.arguments.iter().map(|a| a.sort).collect();
        b.symbol(&alternative.name, &domain, sort)
      })
      .collect();
  for constructor in constructors.iter() {
    implementation.add_constructor(constructor.clone());
  }

  // Applies the i-th constructor to variables `prefix1, prefix2, ...`.
  let instance = |index: usize, prefix: &str| -> (DataExpression, Vec<DataExpression>) {
    let arguments: Vec<DataExpression> = alternatives[index]
        .arguments
        .iter()
        .enumerate()
        .map(|(position, argument)| b.variable(&format!("{}{}", prefix, position + 1), argument.sort))
        .collect();
    (b.apply(constructors[index].clone().into(), arguments.clone()), arguments)
  };

  // region Projections

  // Projection name -> result sort, in order of first occurrence.
  let mut projections: Vec<(IString, SortId)> = vec![];
  let mut result_sorts: HashMap<IString, SortId> = HashMap::new();
  for argument in alternatives.iter().flat_map(|alternative| alternative.arguments.iter()) {
    let Some(name) = &argument.name else { continue };
    match result_sorts.get(name) {
      Some(existing) if *existing != argument.sort => {
        return Err(DataError::ProjectionMismatch {
          projection: name.to_string(),
          first     : b.sorts.name(*existing),
          second    : b.sorts.name(argument.sort),
        });
      }
      Some(_) => {}
      None => {
        result_sorts.insert(name.clone(), argument.sort);
        projections.push((name.clone(), argument.sort));
      }
    }
  }

  for (name, result) in projections.iter() {
    let projection = b.symbol(name, &[sort], *result);
    implementation.add_mapping_with(projection.clone(), SymbolAttribute::Projection);
    let undefined = FunctionSymbol::new(&format!("{}{}", UNDEFINED_PREFIX, name), *result);
    let mut undefined_used = false;

    for (index, alternative) in alternatives.iter().enumerate() {
      let (term, arguments) = instance(index, "x");
      let lhs      = b.apply(projection.clone().into(), vec![term]);
      let position = alternative.arguments.iter().position(|a| a.name.as_ref() == Some(name));
      let rhs = match position {
        Some(position) => arguments[position].clone(),
        None => {
          undefined_used = true;
          undefined.clone().into()
        }
      };
      implementation.add_equation(DataEquation::new(lhs, rhs));
    }

    if undefined_used {
      implementation.add_mapping(undefined);
    }
  }

  // endregion Projections

  // region Recognizers

  for (index, alternative) in alternatives.iter().enumerate() {
    let Some(name) = &alternative.recognizer else { continue };
    let recognizer = b.symbol(name, &[sort], b.bool_);
    implementation.add_mapping_with(recognizer.clone(), SymbolAttribute::Recognizer);
    for other in 0..alternatives.len() {
      let (term, _) = instance(other, "x");
      let lhs = b.apply(recognizer.clone().into(), vec![term]);
      implementation.add_equation(DataEquation::new(lhs, b.bool_value(other == index)));
    }
  }

  // endregion Recognizers

  // region Comparisons

  for i in 0..alternatives.len() {
    for j in 0..alternatives.len() {
      let (left, xs)  = instance(i, "x");
      let (right, ys) = instance(j, "y");

      let (equal, less, less_equal) = if i == j {
        (
          conjunction(b, &xs, &ys),
          lexicographic(b, &xs, &ys, true),
          lexicographic(b, &xs, &ys, false),
        )
      } else {
        (b.false_(), b.bool_value(i < j), b.bool_value(i < j))
      };

      implementation.add_equation(DataEquation::new(b.equal(left.clone(), right.clone()), equal));
      implementation.add_equation(DataEquation::new(b.less(left.clone(), right.clone()), less));
      implementation.add_equation(DataEquation::new(b.less_equal(left, right), less_equal));
    }
  }

  // endregion Comparisons

  for argument in alternatives.iter().flat_map(|alternative| alternative.arguments.iter()) {
    implementation.add_dependency(argument.sort);
  }
  implementation.add_dependency(b.bool_);
  Ok(implementation)
}

/// `x1 == y1 && ... && xn == yn`, or `true` for no arguments.
fn conjunction(b: &Builder, xs: &[DataExpression], ys: &[DataExpression]) -> DataExpression {
  xs.iter()
    .zip(ys.iter())
    .map(|(x, y)| b.equal(x.clone(), y.clone()))
    .reduce(|accumulated, next| b.and(accumulated, next))
    .unwrap_or_else(|| b.true_())
}

/// Lexicographic `<` (strict) or `<=` on argument lists of equal length.
fn lexicographic(b: &Builder, xs: &[DataExpression], ys: &[DataExpression], strict: bool) -> DataExpression {
  match (xs, ys) {
    ([], _) | (_, []) => b.bool_value(!strict),
    ([x], [y]) => {
      if strict {
        b.less(x.clone(), y.clone())
      } else {
        b.less_equal(x.clone(), y.clone())
      }
    }
    ([x, xs @ ..], [y, ys @ ..]) => {
      b.or(
        b.less(x.clone(), y.clone()),
        b.and(b.equal(x.clone(), y.clone()), lexicographic(b, xs, ys, strict))
      )
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::{SortCollection, StructProjection};

  fn render(equations: &[DataEquation]) -> Vec<String> {
    equations.iter().map(|e| e.to_string()).collect()
  }

  #[test]
  fn projections_and_recognizers() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let d     = sorts.basic("D");
    let alternatives = vec![
      StructConstructor::new("c1", vec![StructProjection::new(Some("f"), d)], Some("is_c1")),
      StructConstructor::new("c2", vec![], None),
    ];
    let sort = sorts.structured(alternatives.clone());
    let implementation = generate(&b, sort, &alternatives).unwrap();

    let rendered = render(&implementation.equations);
    assert!(rendered.contains(&"f(c1(x1)) = x1".to_string()));
    assert!(rendered.contains(&"f(c2) = @undefined_f".to_string()));
    assert!(rendered.contains(&"is_c1(c1(x1)) = true".to_string()));
    assert!(rendered.contains(&"is_c1(c2) = false".to_string()));
    assert!(rendered.contains(&"<(c2, c1(y1)) = false".to_string()));
    assert!(rendered.contains(&"<(c1(x1), c1(y1)) = <(x1, y1)".to_string()));
    assert!(rendered.contains(&"==(c2, c2) = true".to_string()));

    let f = implementation.mappings.iter().find(|m| m.is_named("f")).unwrap();
    assert!(implementation.attributes[f].contains(SymbolAttribute::Projection));
    assert!(implementation.mappings.iter().any(|m| m.is_named("@undefined_f")));
  }

  #[test]
  fn shared_projection_is_declared_once() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let nat   = sorts.basic("Nat");
    let alternatives = vec![
      StructConstructor::new("a", vec![StructProjection::new(Some("n"), nat)], None),
      StructConstructor::new("b", vec![StructProjection::new(None, nat), StructProjection::new(Some("n"), nat)], None),
    ];
    let sort = sorts.structured(alternatives.clone());
    let implementation = generate(&b, sort, &alternatives).unwrap();

    assert_eq!(implementation.mappings.iter().filter(|m| m.is_named("n")).count(), 1);
    let rendered = render(&implementation.equations);
    assert!(rendered.contains(&"n(b(x1, x2)) = x2".to_string()));
    assert!(!implementation.mappings.iter().any(|m| m.is_named("@undefined_n")));
  }

  #[test]
  fn mismatched_projection_is_an_error() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let alternatives = vec![
      StructConstructor::new("a", vec![StructProjection::new(Some("v"), sorts.basic("Nat"))], None),
      StructConstructor::new("b", vec![StructProjection::new(Some("v"), sorts.basic("Bool"))], None),
    ];
    let sort = sorts.structured(alternatives.clone());
    assert!(matches!(generate(&b, sort, &alternatives), Err(DataError::ProjectionMismatch { .. })));
  }

  #[test]
  fn lexicographic_order_on_two_arguments() {
    let sorts = SortCollection::new();
    let b     = Builder::new(&sorts);
    let nat   = sorts.basic("Nat");
    let alternatives = vec![
      StructConstructor::new("pair", vec![StructProjection::new(None, nat), StructProjection::new(None, nat)], None),
    ];
    let sort = sorts.structured(alternatives.clone());
    let implementation = generate(&b, sort, &alternatives).unwrap();
    let rendered = render(&implementation.equations);
    assert!(rendered.contains(&"<=(pair(x1, x2), pair(y1, y2)) = ||(<(x1, y1), &&(==(x1, y1), <=(x2, y2)))".to_string()));
  }
}
