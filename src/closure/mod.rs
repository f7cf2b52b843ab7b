/*!

The closure engine makes a normalized specification self-contained. Every sort the specification mentions, and
every sort the material generated for those sorts mentions in turn, is *implemented*:

| sort                        | implementation                                                        |
|:----------------------------|:----------------------------------------------------------------------|
| builtin (`Bool`, `Nat`, …)  | declared, with the material of [`builtin::generate`]                  |
| container or structured     | synthesized, and named by a declared basic sort                       |
| any other basic sort        | nothing beyond the standard functions                                 |
| function sort               | nothing beyond the standard functions                                 |

Every implemented sort also gets the [standard functions](crate::builtin::standard). Everything the closure adds
is system-defined.

A sort is implemented after the sorts it depends on, so declarations come out in dependency order. Because
implementing a sort can mention new sorts, the walk is repeated until a round implements nothing. Finally every
container and structured sort is replaced by the basic sort that implements it, in one simultaneous substitution.

Closing a closed specification changes nothing.

## See Also...

 - [`is_certainly_finite`] decides finiteness conservatively on a specification, closed or not.
 - [`check_well_formed`] checks that a closed specification refers only to what it declares.

*/

mod finiteness;
mod well_formed;
#[cfg(test)]
mod tests;

pub use finiteness::is_certainly_finite;
pub use well_formed::check_well_formed;

use crate::{
  abstractions::NatSet,
  api::error::DataResult,
  builtin::{self, standard::standard_functions, BuiltinSort},
  core::{
    implementation::Implementation,
    sort::{SortId, SortKind},
    specification::{DataSpecification, SpecificationStatus}
  },
  debug,
  info,
  synthesis::{implementing_sort, synthesize}
};

/// Implements every sort reachable from `spec` and replaces structural sorts by their implementing sorts.
pub fn close(spec: &mut DataSpecification) -> DataResult<()> {
  let mut implemented: Vec<SortId> = vec![];
  let mut rounds = 0;

  loop {
    rounds += 1;
    let roots = root_sorts(spec);
    let mut round = Round {
      spec        : &mut *spec,
      visited     : NatSet::new(),
      implemented : vec![],
    };
    for root in roots {
      round.visit(root)?;
    }

    let added = round.implemented;
    debug!(3, "closure round {} implemented {} sorts", rounds, added.len());
    if added.is_empty() {
      break;
    }
    implemented.extend(added);
  }

  if !spec.implementations().is_empty() {
    let substitution = spec.implementations().clone();
    spec.replace_sorts(&substitution);
    // Sorts built from structural sorts are implemented under their new names too.
    for sort in implemented.iter() {
      let image = substitution.apply(&spec.sorts, *sort);
      spec.mark_implemented(image);
    }
  }

  info!(2, "closure implemented {} sorts in {} rounds", implemented.len(), rounds);
  spec.set_status(SpecificationStatus::Closed);
  Ok(())
}

/// The sorts `spec` mentions directly. For a symbol these are its argument and result sorts, not its own sort.
fn root_sorts(spec: &DataSpecification) -> Vec<SortId> {
  let sorts     = &spec.sorts;
  let mut roots = spec.declared_sorts().to_vec();
  roots.extend(spec.aliases().iter().map(|(_, target)| *target));

  let add_symbol_sort = |roots: &mut Vec<SortId>, sort: SortId| {
    roots.extend(sorts.domain(sort));
    roots.push(sorts.codomain(sort));
  };

  for symbol in spec.all_constructors().iter().chain(spec.mappings().iter()) {
    add_symbol_sort(&mut roots, symbol.sort);
  }
  for equation in spec.equations() {
    roots.extend(equation.variables.iter().map(|v| v.sort));
    equation.for_each_part(|part| {
      part.for_each_symbol(&mut |symbol| add_symbol_sort(&mut roots, symbol.sort));
      part.for_each_variable(&mut |variable| roots.push(variable.sort));
    });
  }
  roots
}

/// One depth-first walk over the sorts reachable from the roots.
struct Round<'a> {
  spec       : &'a mut DataSpecification,
  visited    : NatSet,
  implemented: Vec<SortId>,
}

impl<'a> Round<'a> {
  fn visit(&mut self, sort: SortId) -> DataResult<()> {
    if !self.visited.insert(sort.index()) || self.spec.is_implemented(sort) {
      return Ok(());
    }

    let sorts = &self.spec.sorts;
    let kind  = sorts.kind(sort);
    let mut successors = sorts.direct_dependencies(sort);
    let mut synthesized: Option<Implementation> = None;

    match &kind {
      SortKind::Basic(name) => {
        if let Some(builtin) = BuiltinSort::from_name(name) {
          successors.extend(builtin.dependencies().iter().map(|b| b.sort(sorts)));
        } else if let Some(origin) = self.spec.origin_of(sort) {
          successors.push(origin);
        }
      }

      SortKind::Container { .. } | SortKind::Structured(_) => {
        let implementation = synthesize(self.spec, sort)?;
        successors.extend(implementation.dependencies.iter().copied());
        synthesized = Some(implementation);
      }

      SortKind::Function { .. } | SortKind::Alias { .. } => {}
    } // end match on sort kind

    for successor in successors {
      self.visit(successor)?;
    }

    self.implement(sort, kind, synthesized);
    Ok(())
  }

  fn implement(&mut self, sort: SortId, kind: SortKind, synthesized: Option<Implementation>) {
    let spec = &mut *self.spec;
    if !spec.mark_implemented(sort) {
      return;
    }
    self.implemented.push(sort);
    debug!(3, "implementing {}", spec.sorts.name(sort));

    match kind {
      SortKind::Basic(name) => {
        if let Some(builtin) = BuiltinSort::from_name(&name) {
          spec.add_system_defined_sort(sort);
          builtin::generate(builtin, &spec.sorts).merge_into(spec);
        } else if spec.origin_of(sort).is_some() {
          // The origin carries the material, including the standard functions.
          return;
        }
      }

      SortKind::Container { .. } | SortKind::Structured(_) => {
        let implementing = implementing_sort(spec, sort);
        spec.record_implementation(sort, implementing);
        spec.add_system_defined_sort(implementing);
        spec.mark_implemented(implementing);
        if let Some(implementation) = synthesized {
          implementation.merge_into(spec);
        }
      }

      SortKind::Function { .. } => {}

      SortKind::Alias { .. } => return,
    } // end match on sort kind

    standard_functions(&spec.sorts, sort).merge_into(spec);
  }
}
