/*!

The whole pipeline in one call. A parser hands over a surface specification and gets back a closed, canonical one:

 1. [`normalize`] removes aliases and surface notation,
 2. [`match_numeric_patterns`] turns conversions on left-hand sides into constructor terms,
 3. [`close`] implements every sort the specification needs,
 4. [`check_well_formed`] checks that the result refers only to what it declares.

Steps 2 and 4 can be switched off with [`ImplementOptions`].

*/

use crate::{
  api::error::{DataError, DataResult},
  closure::{check_well_formed, close},
  core::specification::DataSpecification,
  info,
  log::set_global_logging_threshold,
  normalize::{match_numeric_patterns, normalize}
};

/// Options for [`implement`]. Built with chained setters:
///
/// ```
/// use dataspec::implement::ImplementOptions;
///
/// let options = ImplementOptions::default().numeric_pattern_matching(false).logging_threshold(4);
/// assert!(options.check_well_formedness);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ImplementOptions {
  pub check_well_formedness   : bool,
  pub numeric_pattern_matching: bool,
  /// Replaces the global logging threshold when set.
  pub logging_threshold       : Option<u8>,
}

impl Default for ImplementOptions {
  fn default() -> Self {
    ImplementOptions {
      check_well_formedness   : true,
      numeric_pattern_matching: true,
      logging_threshold       : None,
    }
  }
}

impl ImplementOptions {
  pub fn check_well_formedness(mut self, check: bool) -> Self {
    self.check_well_formedness = check;
    self
  }

  pub fn numeric_pattern_matching(mut self, enabled: bool) -> Self {
    self.numeric_pattern_matching = enabled;
    self
  }

  pub fn logging_threshold(mut self, threshold: u8) -> Self {
    self.logging_threshold = Some(threshold);
    self
  }
}

/// What [`implement`] has to say about a specification it accepted.
#[derive(Default, Debug)]
pub struct Report {
  /// Equations that were dropped instead of failing the whole specification, e.g. for an empty enumeration.
  pub diagnostics: Vec<DataError>,
}

/// Turns `spec` into a closed, canonical specification. On error `spec` is left partially transformed.
pub fn implement(spec: &mut DataSpecification, options: ImplementOptions) -> DataResult<Report> {
  if let Some(threshold) = options.logging_threshold {
    set_global_logging_threshold(threshold);
  }

  let diagnostics = normalize(spec)?;
  if options.numeric_pattern_matching {
    match_numeric_patterns(spec);
  }
  close(spec)?;
  if options.check_well_formedness {
    check_well_formed(spec)?;
  }

  info!(
    2,
    "implemented a specification with {} sorts, {} constructors, {} mappings and {} equations",
    spec.declared_sorts().len(),
    spec.all_constructors().len(),
    spec.mappings().len(),
    spec.equations().len()
  );
  Ok(Report { diagnostics })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    api::{equation::DataEquation, symbol::FunctionSymbol},
    builtin::{names::LIST_ENUM, Builder}
  };

  #[test]
  fn empty_enumerations_end_up_in_the_report() {
    let mut spec = DataSpecification::new();
    let b        = Builder::new(&spec.sorts);
    let list     = spec.sorts.list(b.nat);
    let empty    = b.constant(LIST_ENUM, list);
    let l        = FunctionSymbol::new("l", list);
    spec.add_mapping(l.clone());
    spec.add_equation(DataEquation::new(l.into(), empty));

    let report = implement(&mut spec, ImplementOptions::default()).unwrap();
    assert_eq!(report.diagnostics.len(), 1);
    assert!(spec.equations().iter().all(|equation| equation.lhs.to_string() != "l"));
  }

  #[test]
  fn pattern_matching_can_be_switched_off() {
    let build = || {
      let mut spec = DataSpecification::new();
      let b        = Builder::new(&spec.sorts);
      let p        = b.variable("p", b.pos);
      let f        = FunctionSymbol::new("f", spec.sorts.function(vec![b.nat], b.nat));
      let lhs      = b.apply(f.clone().into(), vec![b.pos2nat(p.clone())]);
      let equation = DataEquation::new(lhs, b.pos2nat(p));
      spec.add_mapping(f);
      spec.add_equation(equation);
      spec
    };
    let lhs_of_f = |spec: &DataSpecification| {
      spec.equations().iter().map(|e| e.lhs.to_string()).find(|lhs| lhs.starts_with("f(")).unwrap()
    };

    let mut spec = build();
    implement(&mut spec, ImplementOptions::default()).unwrap();
    assert_eq!(lhs_of_f(&spec), "f(@cNat(p))");

    let mut spec = build();
    implement(&mut spec, ImplementOptions::default().numeric_pattern_matching(false)).unwrap();
    assert_eq!(lhs_of_f(&spec), "f(Pos2Nat(p))");
  }
}
