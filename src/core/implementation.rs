/*!

An `Implementation` is the material generated for one sort: its constructors, the mappings defined on it, their
equations, and the sorts the material mentions. Both the builtin library and the synthesizer produce one, and the
closure engine merges it into the specification as system-defined material.

*/

use crate::{
  abstractions::HashMap,
  api::{
    equation::DataEquation,
    symbol::{FunctionSymbol, SymbolAttribute, SymbolAttributes}
  },
  core::{
    sort::SortId,
    specification::DataSpecification
  }
};

#[derive(Clone, Debug)]
pub struct Implementation {
  /// The sort the constructors construct. For a container or structured sort this is the implementing basic sort.
  pub sort        : SortId,
  pub constructors: Vec<FunctionSymbol>,
  pub mappings    : Vec<FunctionSymbol>,
  pub equations   : Vec<DataEquation>,
  pub dependencies: Vec<SortId>,

  /// Attributes beyond `Constructor` and `SystemDefined`, e.g. for projections and recognizers.
  pub attributes  : HashMap<FunctionSymbol, SymbolAttributes>,
}

impl Implementation {
  pub fn new(sort: SortId) -> Self {
    Implementation {
      sort,
      constructors: vec![],
      mappings    : vec![],
      equations   : vec![],
      dependencies: vec![],
      attributes  : HashMap::new(),
    }
  }

  pub fn add_constructor(&mut self, symbol: FunctionSymbol) {
    if !self.constructors.contains(&symbol) {
      self.constructors.push(symbol);
    }
  }

  pub fn add_mapping(&mut self, symbol: FunctionSymbol) {
    if !self.mappings.contains(&symbol) {
      self.mappings.push(symbol);
    }
  }

  pub fn add_mapping_with(&mut self, symbol: FunctionSymbol, attribute: SymbolAttribute) {
    *self.attributes.entry(symbol.clone()).or_default() |= attribute;
    self.add_mapping(symbol);
  }

  pub fn add_equation(&mut self, equation: DataEquation) {
    self.equations.push(equation);
  }

  pub fn add_dependency(&mut self, sort: SortId) {
    if !self.dependencies.contains(&sort) {
      self.dependencies.push(sort);
    }
  }

  /// Adds everything to `specification` as system-defined material. Material already present is left alone.
  pub fn merge_into(self, specification: &mut DataSpecification) {
    for constructor in self.constructors {
      specification.add_system_defined_constructor(constructor);
    }
    for mapping in self.mappings {
      let extra = self.attributes.get(&mapping).copied().unwrap_or_default();
      specification.add_system_defined_mapping_with(mapping, extra);
    }
    for equation in self.equations {
      #[cfg(feature = "trace_equations")]
      crate::trace!(5, "merging {}", equation);
      specification.add_system_defined_equation(equation);
    }
  }
}
