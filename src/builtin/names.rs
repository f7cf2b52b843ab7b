/*!

The names of every operator the library generates. Each entry `name => "text"` defines a constant `NAME` holding
the operator's name and a predicate `is_name(&FunctionSymbol)`.

Several operators share a name and are told apart by their sort: `+` is addition on numbers and union on sets, `-`
is both negation and subtraction, and so on.

*/

use paste::paste;

use crate::api::symbol::FunctionSymbol;

macro_rules! operator_names {
  ($($name:ident => $text:literal),* $(,)?) => {
    paste! {
      $(
        pub const [<$name:upper>]: &str = $text;

        #[inline(always)]
        pub fn [<is_ $name>](symbol: &FunctionSymbol) -> bool {
          symbol.is_named($text)
        }
      )*
    }
  };
}

// Bool
operator_names!(
  bool_true  => "true",
  bool_false => "false",
  not        => "!",
  and        => "&&",
  or         => "||",
  implies    => "=>",
);

// Defined on every sort
operator_names!(
  equal         => "==",
  not_equal     => "!=",
  if_then_else  => "if",
  less          => "<",
  less_equal    => "<=",
  greater       => ">",
  greater_equal => ">=",
);

// Pos
operator_names!(
  c1        => "@c1",
  cdub      => "@cDub",
  maximum   => "max",
  minimum   => "min",
  succ      => "succ",
  pospred   => "@pospred",
  plus      => "+",
  addc      => "@addc",
  times     => "*",
  powerlog2 => "@powerlog2",
);

// Nat and @NatPair
operator_names!(
  c0              => "@c0",
  cnat            => "@cNat",
  pos2nat         => "Pos2Nat",
  nat2pos         => "Nat2Pos",
  pred            => "pred",
  dub             => "@dub",
  dubsucc         => "@dubsucc",
  gtesubtb        => "@gtesubtb",
  even            => "@even",
  div             => "div",
  modulo          => "mod",
  exp             => "exp",
  monus           => "@monus",
  swap_zero       => "@swap_zero",
  swap_zero_add   => "@swap_zero_add",
  swap_zero_min   => "@swap_zero_min",
  swap_zero_monus => "@swap_zero_monus",
  cpair           => "@cPair",
  first           => "@first",
  last            => "@last",
  divmod          => "@divmod",
  gdivmod         => "@gdivmod",
  ggdivmod        => "@ggdivmod",
);

// Int
operator_names!(
  cint    => "@cInt",
  cneg    => "@cNeg",
  nat2int => "Nat2Int",
  int2nat => "Int2Nat",
  pos2int => "Pos2Int",
  int2pos => "Int2Pos",
  abs     => "abs",
  minus   => "-",
);

// Real
operator_names!(
  creal      => "@cReal",
  pos2real   => "Pos2Real",
  nat2real   => "Nat2Real",
  int2real   => "Int2Real",
  real2pos   => "Real2Pos",
  real2nat   => "Real2Nat",
  real2int   => "Real2Int",
  divides    => "/",
  floor      => "floor",
  ceil       => "ceil",
  round      => "round",
  redfrac    => "@redfrac",
  redfracwhr => "@redfracwhr",
  redfrachlp => "@redfrachlp",
);

// List
operator_names!(
  empty_list => "[]",
  cons       => "|>",
  snoc       => "<|",
  concat     => "++",
  element_at => ".",
  head       => "head",
  tail       => "tail",
  rhead      => "rhead",
  rtail      => "rtail",
  element_of => "in",
  count      => "#",
);

// FSet and Set
operator_names!(
  empty_set       => "{}",
  fset_cons       => "@fset_cons",
  fset_insert     => "@fset_insert",
  fset_cinsert    => "@fset_cinsert",
  set_constructor => "@set",
  setfset         => "@setfset",
  setcomp         => "@setcomp",
  false_function  => "@false_",
  true_function   => "@true_",
  not_function    => "@not_",
  and_function    => "@and_",
  or_function     => "@or_",
  fset_union      => "@fset_union",
  fset_inter      => "@fset_inter",
);

// FBag and Bag
operator_names!(
  empty_bag         => "{:}",
  fbag_cons         => "@fbag_cons",
  fbag_insert       => "@fbag_insert",
  fbag_cinsert      => "@fbag_cinsert",
  count_of          => "count",
  fset2fbag         => "@fset2fbag",
  bag_constructor   => "@bag",
  bagfbag           => "@bagfbag",
  bagcomp           => "@bagcomp",
  bag2set           => "Bag2Set",
  set2bag           => "Set2Bag",
  zero_function     => "@zero_",
  one_function      => "@one_",
  add_function      => "@add_",
  min_function      => "@min_",
  monus_function    => "@monus_",
  nat2bool_function => "@Nat2Bool_",
  bool2nat_function => "@Bool2Nat_",
  fbag_join         => "@fbag_join",
  fbag_inter        => "@fbag_inter",
  fbag_dif          => "@fbag_dif",
  fbag2fset         => "@fbag2fset",
);

// Surface notation left behind by a parser
operator_names!(
  list_enum => "@ListEnum",
  set_enum  => "@SetEnum",
  bag_enum  => "@BagEnum",
);

/// Prefix of the names of lifted lambda mappings.
pub const LAMBDA_PREFIX: &str = "@lambda_";

/// Prefix of the constants a projection maps to on a constructor that does not have it.
pub const UNDEFINED_PREFIX: &str = "@undefined_";

/// Whether `name` is a decimal numeral, optionally negative.
pub fn is_numeral(name: &str) -> bool {
  let digits = name.strip_prefix('-').unwrap_or(name);
  !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::core::sort::SortCollection;

  #[test]
  fn generated_names_and_predicates() {
    let sorts = SortCollection::new();
    let nat   = sorts.basic("Nat");
    assert_eq!(CNAT, "@cNat");
    assert_eq!(SWAP_ZERO_MONUS, "@swap_zero_monus");
    assert!(is_c0(&FunctionSymbol::new("@c0", nat)));
    assert!(!is_c0(&FunctionSymbol::new("@c1", nat)));
  }

  #[test]
  fn numerals() {
    assert!(is_numeral("0"));
    assert!(is_numeral("-12"));
    assert!(!is_numeral("-"));
    assert!(!is_numeral("1a"));
    assert!(!is_numeral(""));
  }
}
