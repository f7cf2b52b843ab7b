/*!

A conservative finiteness check. `true` means the sort certainly has finitely many values. `false` means it may
not, which includes every sort whose finiteness depends on itself.

*/

use crate::{
  builtin::BuiltinSort,
  core::{
    sort::{ContainerKind, SortId, SortKind},
    specification::DataSpecification
  }
};

/// Whether `sort` certainly has finitely many values in `spec`.
///
///  - `Bool` is finite. The other builtin sorts are not.
///  - A user sort is finite if it has a constructor and every argument sort of every constructor is finite.
///  - `Set(E)` is finite exactly when `E` is. Lists, bags and their finite variants are not finite.
///  - A function sort is finite if its domain and codomain sorts are.
///  - A structured sort is finite if every argument sort is.
///
/// Implementing sorts are judged by the sort they implement, so the answer is the same before and after closure.
pub fn is_certainly_finite(spec: &DataSpecification, sort: SortId) -> bool {
  let mut finiteness = Finiteness { spec, path: vec![] };
  finiteness.check(sort)
}

struct Finiteness<'a> {
  spec: &'a DataSpecification,
  /// Sorts whose finiteness is being decided. Reaching one of them again means a cycle.
  path: Vec<SortId>,
}

impl<'a> Finiteness<'a> {
  fn check(&mut self, sort: SortId) -> bool {
    let spec  = self.spec;
    let sorts = &spec.sorts;
    let sort  = sorts.resolve_aliases(sort);
    let sort  = spec.origin_of(sort).unwrap_or(sort);
    if self.path.contains(&sort) {
      return false;
    }

    self.path.push(sort);
    let finite = match sorts.kind(sort) {
      SortKind::Basic(name) => {
        if let Some(builtin) = BuiltinSort::from_name(&name) {
          builtin == BuiltinSort::Bool
        } else if let Some((_, target)) = spec.aliases().iter().find(|(alias, _)| *alias == name) {
          self.check(*target)
        } else {
          let constructors = spec.constructors(sort);
          !constructors.is_empty()
              && constructors.iter().all(|c| sorts.domain(c.sort).into_iter().all(|d| self.check(d)))
        }
      }

      SortKind::Container { kind: ContainerKind::Set, element } => self.check(element),

      SortKind::Container { .. } => false,

      SortKind::Function { domain, codomain } => {
        domain.into_iter().all(|d| self.check(d)) && self.check(codomain)
      }

      SortKind::Structured(alternatives) => {
        alternatives
          .iter()
          .flat_map(|alternative| alternative.arguments.iter())
          .all(|argument| self.check(argument.sort))
      }

      SortKind::Alias { target, .. } => self.check(target),
    }; // end match on sort kind
    self.path.pop();

    finite
  }
}
