/*!

Sort aliases `n = e` are removed in one pass over the whole specification, before any expression is normalized.

If `e` is a container or structured sort, the alias *names* it: `n` becomes the sort that implements `e`, and the
closure engine replaces `e` by `n` once `e` has been synthesized. This is what lets a structured sort refer to
itself through its own name, as in `Tree = struct leaf | node(left: Tree, right: Tree)`.

Otherwise the alias is an abbreviation, and every occurrence of the basic sort `n` is replaced by `e`. Chains of
abbreviations are followed to their end first, so `A = B, B = Nat` replaces both `A` and `B` by `Nat`. A chain that
returns to where it started, such as `A = B, B = A` or `A = A -> Bool`, is an error.

*/

use crate::{
  abstractions::{HashMap, IString},
  api::error::{DataError, DataResult},
  core::{
    sort::{SortCollection, SortId, SortKind, SortSubstitution},
    specification::DataSpecification
  },
  debug,
  info
};

/// Removes all aliases from `spec`. See the module documentation.
pub fn remove_aliases(spec: &mut DataSpecification) -> DataResult<()> {
  if spec.aliases().is_empty() {
    return Ok(());
  }

  let aliases: Vec<(IString, SortId)> = spec.aliases().to_vec();
  let mut naming        = vec![];
  let mut abbreviations = HashMap::new();
  for (name, target) in aliases.iter() {
    let structural = spec.sorts.resolve_aliases(*target);
    if spec.sorts.is_synthesized_kind(structural) {
      naming.push((name.clone(), *target));
    } else {
      abbreviations.insert(name.clone(), *target);
    }
  }

  let mut resolver = Resolver {
    sorts        : &spec.sorts,
    abbreviations: &abbreviations,
    resolved     : HashMap::new(),
    in_progress  : vec![],
  };

  let mut substitution = SortSubstitution::new();
  for name in abbreviations.keys() {
    let image = resolver.resolve_name(name)?;
    substitution.insert(spec.sorts.basic(name), image);
  }

  // A structure may be named more than once. The first name wins and the others abbreviate it.
  let mut named: Vec<(SortId, SortId)> = vec![];
  for (name, target) in naming {
    let structure = resolver.resolve(target)?;
    let basic     = spec.sorts.basic(&name);
    match named.iter().find(|(s, _)| *s == structure) {
      Some((_, first)) => {
        substitution.insert(basic, *first);
      }
      None => {
        named.push((structure, basic));
      }
    }
  }
  for (structure, basic) in named {
    debug!(4, "{} names {}", spec.sorts.name(basic), spec.sorts.name(structure));
    spec.record_implementation(structure, basic);
  }

  info!(2, "removing {} sort aliases", aliases.len());
  spec.replace_sorts(&substitution);
  Ok(())
}

/// Expands abbreviations inside sorts, detecting cycles.
struct Resolver<'a> {
  sorts        : &'a SortCollection,
  abbreviations: &'a HashMap<IString, SortId>,
  resolved     : HashMap<IString, SortId>,
  in_progress  : Vec<IString>,
}

impl<'a> Resolver<'a> {
  fn resolve_name(&mut self, name: &IString) -> DataResult<SortId> {
    if let Some(image) = self.resolved.get(name) {
      return Ok(*image);
    }
    if self.in_progress.contains(name) {
      return Err(DataError::AliasCycle { alias: name.to_string() });
    }

    self.in_progress.push(name.clone());
    let target = self.abbreviations[name];
    let image  = self.resolve(target)?;
    self.in_progress.pop();

    self.resolved.insert(name.clone(), image);
    Ok(image)
  }

  /// `sort` with every abbreviation expanded and every alias node removed.
  fn resolve(&mut self, sort: SortId) -> DataResult<SortId> {
    match self.sorts.kind(sort) {
      SortKind::Basic(name) | SortKind::Alias { name, .. } if self.abbreviations.contains_key(&name) => {
        self.resolve_name(&name)
      }

      SortKind::Basic(_) => Ok(sort),

      // Occurrences of an alias node become the structure, like everywhere else in the specification.
      SortKind::Alias { target, .. } => self.resolve(target),

      kind => {
        let mut failure = None;
        let rebuilt = kind.map_components(|component| {
          match self.resolve(component) {
            Ok(image) => image,
            Err(error) => {
              failure.get_or_insert(error);
              component
            }
          }
        });
        match failure {
          Some(error) => Err(error),
          None => Ok(self.sorts.intern(rebuilt)),
        }
      }
    } // end match on sort kind
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    api::symbol::FunctionSymbol,
    core::sort::{StructConstructor, StructProjection}
  };

  #[test]
  fn abbreviation_chains_collapse() {
    let mut spec = DataSpecification::new();
    let nat      = spec.sorts.basic("Nat");
    let b        = spec.sorts.basic("B");
    let a        = spec.add_alias("A", b);
    spec.add_alias("B", nat);
    spec.add_mapping(FunctionSymbol::new("f", spec.sorts.function(vec![a], b)));

    remove_aliases(&mut spec).unwrap();
    let f = &spec.mappings()[0];
    assert_eq!(spec.sorts.name(f.sort), "Nat -> Nat");
  }

  #[test]
  fn cycles_are_errors() {
    let mut spec = DataSpecification::new();
    let a        = spec.sorts.basic("A");
    let b        = spec.sorts.basic("B");
    spec.add_alias("A", b);
    spec.add_alias("B", a);
    assert!(matches!(remove_aliases(&mut spec), Err(DataError::AliasCycle { .. })));

    let mut spec = DataSpecification::new();
    let a        = spec.sorts.basic("A");
    let bool_    = spec.sorts.basic("Bool");
    spec.add_alias("A", spec.sorts.function(vec![a], bool_));
    assert!(matches!(remove_aliases(&mut spec), Err(DataError::AliasCycle { .. })));
  }

  #[test]
  fn aliases_name_structures() {
    let mut spec = DataSpecification::new();
    let nat      = spec.sorts.basic("Nat");
    let n        = spec.sorts.basic("N");
    let list     = spec.sorts.list(n);
    spec.add_alias("N", nat);
    spec.add_alias("Numbers", list);

    remove_aliases(&mut spec).unwrap();
    let numbers = spec.sorts.basic("Numbers");
    assert_eq!(spec.implementation_of(spec.sorts.list(nat)), Some(numbers));
    assert_eq!(spec.origin_of(numbers), Some(spec.sorts.list(nat)));
  }

  #[test]
  fn recursive_structures_keep_their_name() {
    let mut spec = DataSpecification::new();
    let rec      = spec.sorts.basic("Rec");
    let node     = spec.sorts.structured(vec![
      StructConstructor::new("node", vec![StructProjection::new(Some("next"), rec)], None)
    ]);
    spec.add_alias("Rec", node);

    remove_aliases(&mut spec).unwrap();
    assert_eq!(spec.implementation_of(node), Some(rec));
  }
}
