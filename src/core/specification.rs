/*!

A `DataSpecification` owns everything defined in a data specification: the sort arena, the declared sorts, sort
aliases, constructors, mappings and equations.

## Lifecycle and Ownership

A specification starts out as a *surface* specification built by a parser through the `add_*` methods. It may use
convenience notation. The [`implement`](crate::implement::implement) pipeline moves it through the
`SpecificationStatus` values:

 1. `Surface`: as built by the parser.
 2. `Normalized`: aliases substituted, surface notation removed, lambdas lifted.
 3. `Closed`: every sort reachable from the specification is implemented and structural sorts are replaced by
    their implementing basic sorts.

Items are only ever added, and adding an item that is already present does nothing. The one exception is
`purge_system_defined`, which removes what the closure added so that it can be recomputed.

Each item carries flags. Material added by the library is *system-defined*. When two items are merged because a
sort substitution made them equal, the result is system-defined only if both were.

All tables are owned exclusively by the specification. Sort handles are only meaningful together with
`self.sorts`.

*/

use std::fmt::{Display, Formatter};

use crate::{
  abstractions::{HashMap, HashSet, IString, NatSet},
  api::{
    equation::{DataEquation, EquationAttribute, EquationAttributes},
    symbol::{FunctionSymbol, SymbolAttribute, SymbolAttributes}
  },
  core::{
    format::{FormatStyle, Formattable, DISPLAY_INDENT},
    sort::{SortCollection, SortId, SortSubstitution}
  }
};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Default, Debug)]
pub enum SpecificationStatus {
  #[default]
  Surface,
  Normalized,
  Closed,
}

#[derive(Clone, Default)]
pub struct DataSpecification {
  pub sorts : SortCollection,
  status    : SpecificationStatus,

  declared_sorts: Vec<SortId>,
  declared      : NatSet,
  system_sorts  : NatSet,
  aliases       : Vec<(IString, SortId)>,

  constructors       : Vec<FunctionSymbol>,
  constructor_index  : HashSet<FunctionSymbol>,
  mappings           : Vec<FunctionSymbol>,
  mapping_index      : HashSet<FunctionSymbol>,
  symbol_attributes  : HashMap<FunctionSymbol, SymbolAttributes>,

  equations          : Vec<DataEquation>,
  equation_index     : HashSet<DataEquation>,
  equation_attributes: HashMap<DataEquation, EquationAttributes>,

  // Structural sort -> implementing basic sort
  implementations: SortSubstitution,
  // Implementing basic sort -> structural sort
  origins        : HashMap<SortId, SortId>,
  implemented    : NatSet,
}

impl DataSpecification {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline(always)]
  pub fn status(&self) -> SpecificationStatus {
    self.status
  }

  #[inline(always)]
  pub(crate) fn set_status(&mut self, status: SpecificationStatus) {
    self.status = status;
  }

  // region Adding items

  pub fn add_sort(&mut self, sort: SortId) {
    self.add_sort_with(sort, false);
  }

  pub fn add_system_defined_sort(&mut self, sort: SortId) {
    self.add_sort_with(sort, true);
  }

  fn add_sort_with(&mut self, sort: SortId, system_defined: bool) {
    if self.declared.insert(sort.index()) {
      self.declared_sorts.push(sort);
      if system_defined {
        self.system_sorts.insert(sort.index());
      }
    } else if !system_defined {
      self.system_sorts.remove(sort.index());
    }
  }

  /// Declares `name` as an alias for `target` and returns the alias sort. The sort can be referred to either by the
  /// returned handle or by the basic sort `name`.
  pub fn add_alias(&mut self, name: &str, target: SortId) -> SortId {
    let name = IString::from(name);
    if !self.aliases.iter().any(|(n, t)| *n == name && *t == target) {
      self.aliases.push((name.clone(), target));
    }
    self.sorts.alias(&name, target)
  }

  pub fn add_constructor(&mut self, symbol: FunctionSymbol) {
    self.add_constructor_with(symbol, SymbolAttributes::empty());
  }

  pub fn add_constructors(&mut self, symbols: impl IntoIterator<Item = FunctionSymbol>) {
    symbols.into_iter().for_each(|symbol| self.add_constructor(symbol));
  }

  pub fn add_system_defined_constructor(&mut self, symbol: FunctionSymbol) {
    self.add_constructor_with(symbol, SymbolAttribute::SystemDefined.into());
  }

  fn add_constructor_with(&mut self, symbol: FunctionSymbol, attributes: SymbolAttributes) {
    let attributes = attributes | SymbolAttribute::Constructor;
    if self.constructor_index.insert(symbol.clone()) {
      self.constructors.push(symbol.clone());
    }
    self.merge_symbol_attributes(symbol, attributes);
  }

  pub fn add_mapping(&mut self, symbol: FunctionSymbol) {
    self.add_mapping_with(symbol, SymbolAttributes::empty());
  }

  pub fn add_mappings(&mut self, symbols: impl IntoIterator<Item = FunctionSymbol>) {
    symbols.into_iter().for_each(|symbol| self.add_mapping(symbol));
  }

  pub fn add_system_defined_mapping(&mut self, symbol: FunctionSymbol) {
    self.add_system_defined_mapping_with(symbol, SymbolAttributes::empty());
  }

  /// Adds a system-defined mapping with additional attributes, e.g. `Projection`.
  pub fn add_system_defined_mapping_with(&mut self, symbol: FunctionSymbol, attributes: SymbolAttributes) {
    self.add_mapping_with(symbol, attributes | SymbolAttribute::SystemDefined);
  }

  fn add_mapping_with(&mut self, symbol: FunctionSymbol, attributes: SymbolAttributes) {
    if self.mapping_index.insert(symbol.clone()) {
      self.mappings.push(symbol.clone());
    }
    self.merge_symbol_attributes(symbol, attributes);
  }

  fn merge_symbol_attributes(&mut self, symbol: FunctionSymbol, attributes: SymbolAttributes) {
    match self.symbol_attributes.get_mut(&symbol) {
      Some(existing) => {
        let system_defined = existing.contains(SymbolAttribute::SystemDefined)
            && attributes.contains(SymbolAttribute::SystemDefined);
        *existing |= attributes;
        if !system_defined {
          existing.remove(SymbolAttribute::SystemDefined);
        }
      }
      None => {
        self.symbol_attributes.insert(symbol, attributes);
      }
    }
  }

  pub fn add_equation(&mut self, equation: DataEquation) {
    self.add_equation_with(equation, EquationAttributes::empty());
  }

  pub fn add_equations(&mut self, equations: impl IntoIterator<Item = DataEquation>) {
    equations.into_iter().for_each(|equation| self.add_equation(equation));
  }

  pub fn add_system_defined_equation(&mut self, equation: DataEquation) {
    self.add_equation_with(equation, EquationAttribute::SystemDefined.into());
  }

  pub(crate) fn add_equation_with(&mut self, equation: DataEquation, attributes: EquationAttributes) {
    if self.equation_index.insert(equation.clone()) {
      self.equations.push(equation.clone());
      self.equation_attributes.insert(equation, attributes);
    } else if let Some(existing) = self.equation_attributes.get_mut(&equation) {
      let system_defined = existing.contains(EquationAttribute::SystemDefined)
          && attributes.contains(EquationAttribute::SystemDefined);
      *existing |= attributes;
      if !system_defined {
        existing.remove(EquationAttribute::SystemDefined);
      }
    }
  }

  /// Removes all equations and returns them with their attributes, in order.
  pub(crate) fn take_equations(&mut self) -> Vec<(DataEquation, EquationAttributes)> {
    self.equation_index.clear();
    let mut attributes = std::mem::take(&mut self.equation_attributes);
    std::mem::take(&mut self.equations)
        .into_iter()
        .map(|equation| {
          let flags = attributes.remove(&equation).unwrap_or_default();
          (equation, flags)
        })
        .collect()
  }

  // endregion Adding items

  // region Queries

  /// The declared sorts in order of declaration.
  pub fn declared_sorts(&self) -> &[SortId] {
    &self.declared_sorts
  }

  pub fn aliases(&self) -> &[(IString, SortId)] {
    &self.aliases
  }

  /// The constructors whose target sort is `sort`, in order of declaration.
  pub fn constructors(&self, sort: SortId) -> Vec<FunctionSymbol> {
    self.constructors
        .iter()
        .filter(|c| self.sorts.codomain(c.sort) == sort)
        .cloned()
        .collect()
  }

  pub fn all_constructors(&self) -> &[FunctionSymbol] {
    &self.constructors
  }

  pub fn mappings(&self) -> &[FunctionSymbol] {
    &self.mappings
  }

  pub fn equations(&self) -> &[DataEquation] {
    &self.equations
  }

  pub fn is_declared(&self, sort: SortId) -> bool {
    self.declared.contains(sort.index())
  }

  pub fn is_constructor(&self, symbol: &FunctionSymbol) -> bool {
    self.constructor_index.contains(symbol)
  }

  pub fn is_mapping(&self, symbol: &FunctionSymbol) -> bool {
    self.mapping_index.contains(symbol)
  }

  pub fn is_system_defined_sort(&self, sort: SortId) -> bool {
    self.system_sorts.contains(sort.index())
  }

  pub fn is_system_defined_symbol(&self, symbol: &FunctionSymbol) -> bool {
    self.symbol_attributes(symbol).contains(SymbolAttribute::SystemDefined)
  }

  /// Whether `symbol` is a projection, a recognizer, or a lifted lambda.
  pub fn is_synthesized_symbol(&self, symbol: &FunctionSymbol) -> bool {
    self.symbol_attributes(symbol).intersects(SymbolAttribute::Synthesized)
  }

  pub fn is_system_defined_equation(&self, equation: &DataEquation) -> bool {
    self.equation_attributes(equation).contains(EquationAttribute::SystemDefined)
  }

  pub fn symbol_attributes(&self, symbol: &FunctionSymbol) -> SymbolAttributes {
    self.symbol_attributes.get(symbol).copied().unwrap_or_default()
  }

  pub fn equation_attributes(&self, equation: &DataEquation) -> EquationAttributes {
    self.equation_attributes.get(equation).copied().unwrap_or_default()
  }

  /// The basic sort implementing the container or structured sort `sort`.
  pub fn implementation_of(&self, sort: SortId) -> Option<SortId> {
    self.implementations.get(sort)
  }

  /// The container or structured sort the basic sort `sort` implements.
  pub fn origin_of(&self, sort: SortId) -> Option<SortId> {
    self.origins.get(&sort).copied()
  }

  // endregion Queries

  // region Closure bookkeeping

  pub(crate) fn implementations(&self) -> &SortSubstitution {
    &self.implementations
  }

  pub(crate) fn record_implementation(&mut self, origin: SortId, implementing: SortId) {
    self.implementations.insert(origin, implementing);
    self.origins.insert(implementing, origin);
  }

  pub(crate) fn mark_implemented(&mut self, sort: SortId) -> bool {
    self.implemented.insert(sort.index())
  }

  pub fn is_implemented(&self, sort: SortId) -> bool {
    self.implemented.contains(sort.index())
  }

  // endregion Closure bookkeeping

  /// Applies `substitution` to every sort occurring in the specification. Items that become equal are merged.
  pub(crate) fn replace_sorts(&mut self, substitution: &SortSubstitution) {
    let declared_sorts = std::mem::take(&mut self.declared_sorts);
    let system_sorts   = std::mem::take(&mut self.system_sorts);
    self.declared      = NatSet::new();
    for sort in declared_sorts {
      let system_defined = system_sorts.contains(sort.index());
      let image          = substitution.apply(&self.sorts, sort);
      self.add_sort_with(image, system_defined);
    }

    self.aliases = self.aliases
                       .iter()
                       .map(|(name, target)| (name.clone(), substitution.apply(&self.sorts, *target)))
                       .collect();

    let replace_symbol = |symbol: &FunctionSymbol, sorts: &SortCollection| {
      FunctionSymbol { name: symbol.name.clone(), sort: substitution.apply(sorts, symbol.sort) }
    };

    let constructors      = std::mem::take(&mut self.constructors);
    let mappings          = std::mem::take(&mut self.mappings);
    let symbol_attributes = std::mem::take(&mut self.symbol_attributes);
    self.constructor_index.clear();
    self.mapping_index.clear();
    for constructor in constructors {
      let attributes = symbol_attributes.get(&constructor).copied().unwrap_or_default();
      let image      = replace_symbol(&constructor, &self.sorts);
      self.add_constructor_with(image, attributes);
    }
    for mapping in mappings {
      let attributes = symbol_attributes.get(&mapping).copied().unwrap_or_default();
      let image      = replace_symbol(&mapping, &self.sorts);
      self.add_mapping_with(image, attributes);
    }

    for (equation, attributes) in self.take_equations() {
      let image = equation.replace_sorts(&self.sorts, substitution);
      self.add_equation_with(image, attributes);
    }
  }

  /// Removes everything the closure added. Lifted lambdas stay, since they are only created by normalization.
  /// Afterward the specification can be closed again.
  pub fn purge_system_defined(&mut self) {
    let system_sorts = std::mem::take(&mut self.system_sorts);
    self.declared_sorts.retain(|sort| !system_sorts.contains(sort.index()));
    self.declared = self.declared_sorts.iter().map(|sort| sort.index()).collect();

    let purged = |attributes: SymbolAttributes| {
      attributes.contains(SymbolAttribute::SystemDefined) && !attributes.contains(SymbolAttribute::Lifted)
    };
    let attributes = &self.symbol_attributes;
    self.constructors.retain(|c| !purged(attributes.get(c).copied().unwrap_or_default()));
    self.mappings.retain(|m| !purged(attributes.get(m).copied().unwrap_or_default()));
    self.constructor_index = self.constructors.iter().cloned().collect();
    self.mapping_index     = self.mappings.iter().cloned().collect();
    let constructor_index  = &self.constructor_index;
    let mapping_index      = &self.mapping_index;
    self.symbol_attributes.retain(|symbol, _| constructor_index.contains(symbol) || mapping_index.contains(symbol));

    for (equation, attributes) in self.take_equations() {
      let purged = attributes.contains(EquationAttribute::SystemDefined)
          && !attributes.contains(EquationAttribute::Lifted);
      if !purged {
        self.add_equation_with(equation, attributes);
      }
    }

    self.implemented = NatSet::new();
    if self.status > SpecificationStatus::Normalized {
      self.status = SpecificationStatus::Normalized;
    }
  }
}

/// Two specifications are equal when they declare the same items, regardless of order. Sort handles are compared
/// directly, so this is only meaningful for specifications whose arenas share a history, e.g. a specification and
/// a clone of it.
impl PartialEq for DataSpecification {
  fn eq(&self, other: &Self) -> bool {
    self.declared == other.declared
        && self.constructor_index == other.constructor_index
        && self.mapping_index == other.mapping_index
        && self.equation_index == other.equation_index
  }
}

impl Display for DataSpecification {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let indent = " ".repeat(DISPLAY_INDENT);

    if !self.declared_sorts.is_empty() || !self.aliases.is_empty() {
      writeln!(f, "sort")?;
      for sort in self.declared_sorts.iter() {
        writeln!(f, "{}{};", indent, self.sorts.name(*sort))?;
      }
      for (name, target) in self.aliases.iter() {
        writeln!(f, "{}{} = {};", indent, name, self.sorts.name(*target))?;
      }
    }

    let write_symbols = |f: &mut Formatter<'_>, keyword: &str, symbols: &[FunctionSymbol]| -> std::fmt::Result {
      if symbols.is_empty() {
        return Ok(());
      }
      writeln!(f, "{}", keyword)?;
      for symbol in symbols {
        writeln!(f, "{}{}: {};", indent, symbol.name, self.sorts.name(symbol.sort))?;
      }
      Ok(())
    };
    write_symbols(f, "cons", &self.constructors)?;
    write_symbols(f, "map", &self.mappings)?;

    if !self.equations.is_empty() {
      writeln!(f, "eqn")?;
      for equation in self.equations.iter() {
        writeln!(f, "{}{};", indent, equation.repr(&self.sorts, FormatStyle::Default))?;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::{expression::DataExpression, variable::Variable};

  #[test]
  fn adding_is_idempotent() {
    let mut spec = DataSpecification::new();
    let d        = spec.sorts.basic("D");
    let d1       = FunctionSymbol::new("d1", d);

    spec.add_sort(d);
    spec.add_sort(d);
    spec.add_constructor(d1.clone());
    spec.add_system_defined_constructor(d1.clone());

    assert_eq!(spec.declared_sorts(), &[d]);
    assert_eq!(spec.all_constructors(), &[d1.clone()]);
    assert_eq!(spec.constructors(d), vec![d1.clone()]);
    // The user declared it first, so it stays user-defined.
    assert!(!spec.is_system_defined_symbol(&d1));
    assert!(spec.is_constructor(&d1));
  }

  #[test]
  fn replacing_sorts_merges_items() {
    let mut spec = DataSpecification::new();
    let a        = spec.sorts.basic("A");
    let b        = spec.sorts.basic("B");
    spec.add_sort(a);
    spec.add_system_defined_sort(b);
    spec.add_mapping(FunctionSymbol::new("f", a));
    spec.add_system_defined_mapping(FunctionSymbol::new("f", b));

    let mut substitution = SortSubstitution::new();
    substitution.insert(a, b);
    spec.replace_sorts(&substitution);

    assert_eq!(spec.declared_sorts(), &[b]);
    assert!(!spec.is_system_defined_sort(b));
    let f = FunctionSymbol::new("f", b);
    assert_eq!(spec.mappings(), &[f.clone()]);
    assert!(!spec.is_system_defined_symbol(&f));
  }

  #[test]
  fn purge_keeps_user_material() {
    let mut spec = DataSpecification::new();
    let d        = spec.sorts.basic("D");
    let bool_    = spec.sorts.basic("Bool");
    let t        = FunctionSymbol::new("true", bool_);
    let c        = FunctionSymbol::new("c", d);
    spec.add_sort(d);
    spec.add_constructor(c.clone());
    spec.add_system_defined_sort(bool_);
    spec.add_system_defined_constructor(t.clone());
    let x = Variable::new("x", d);
    let f = FunctionSymbol::new("f", spec.sorts.function(vec![d], d));
    let lhs = DataExpression::apply(&spec.sorts, f.into(), vec![x.clone().into()]);
    spec.add_system_defined_equation(DataEquation::new(lhs, x.into()));

    spec.purge_system_defined();
    assert_eq!(spec.declared_sorts(), &[d]);
    assert_eq!(spec.all_constructors(), &[c]);
    assert!(spec.equations().is_empty());
    assert!(!spec.is_constructor(&t));
  }

  #[test]
  fn display_lists_sections() {
    let mut spec = DataSpecification::new();
    let d        = spec.sorts.basic("D");
    spec.add_sort(d);
    spec.add_constructor(FunctionSymbol::new("c", d));
    assert_eq!(spec.to_string(), "sort\n  D;\ncons\n  c: D;\n");
  }
}
