/*!

Decimal numerals and their constructor terms. A numeral of arbitrary length is converted to binary by repeated
halving of its decimal digit string, so no fixed-width integer type limits the values that can be written.

| sort   | numeral  | term                                   |
|:-------|:---------|:---------------------------------------|
| `Pos`  | `1`      | `@c1`                                  |
| `Pos`  | `6`      | `@cDub(false, @cDub(true, @c1))`       |
| `Nat`  | `0`      | `@c0`                                  |
| `Nat`  | `6`      | `@cNat(...)`                           |
| `Int`  | `-6`     | `@cNeg(...)`                           |
| `Real` | `-6`     | `@cReal(@cNeg(...), @c1)`              |

*/

use crate::{
  api::{
    error::{DataError, DataResult},
    expression::DataExpression
  },
  builtin::{names::*, Builder, BuiltinSort},
  core::sort::{SortCollection, SortId}
};

/// The constructor term for the decimal numeral `value` at `sort`.
pub fn numeral(sorts: &SortCollection, value: &str, sort: SortId) -> DataResult<DataExpression> {
  let invalid = || DataError::InvalidNumeral {
    numeral: value.to_string(),
    sort   : sorts.name(sort),
  };

  let builtin = match BuiltinSort::of(sorts, sort) {
    Some(builtin) if builtin.is_numeric() => builtin,
    _ => return Err(invalid()),
  };
  if !is_numeral(value) {
    return Err(invalid());
  }

  let (negative, digits) = match value.strip_prefix('-') {
    Some(digits) => (true, digits),
    None => (false, value),
  };
  let bits    = binary_digits(digits);
  let is_zero = bits.is_empty();
  let b       = Builder::new(sorts);

  match builtin {

    BuiltinSort::Pos => {
      if negative || is_zero {
        return Err(invalid());
      }
      Ok(positive(&b, &bits))
    }

    BuiltinSort::Nat => {
      if negative && !is_zero {
        return Err(invalid());
      }
      Ok(natural(&b, &bits))
    }

    BuiltinSort::Int => Ok(integer(&b, negative, &bits)),

    BuiltinSort::Real => Ok(b.creal(integer(&b, negative, &bits), b.c1())),

    _ => Err(invalid()),

  } // end match on numeric sort
}

/// The decimal value of a numeral constructor term, or `None` if `expression` is not one. The inverse of
/// [`numeral`]; a real is only recognized with denominator `@c1`.
pub fn decimal_value(expression: &DataExpression) -> Option<String> {
  let (negative, magnitude) = integer_bits(expression)?;
  let digits = decimal_digits(&magnitude);
  if negative {
    Some(format!("-{}", digits))
  } else {
    Some(digits)
  }
}

// region Encoding

/// The binary digits of a decimal digit string, most significant first. Zero has no digits.
fn binary_digits(decimal: &str) -> Vec<bool> {
  let mut digits: Vec<u8> = decimal.bytes().map(|b| b - b'0').skip_while(|d| *d == 0).collect();
  let mut bits = Vec::new();

  while !digits.is_empty() {
    // Halve the digit string in place, keeping the remainder.
    let mut remainder = 0u8;
    for digit in digits.iter_mut() {
      let current = remainder * 10 + *digit;
      *digit      = current / 2;
      remainder   = current % 2;
    }
    bits.push(remainder == 1);
    let leading_zeros = digits.iter().take_while(|d| **d == 0).count();
    digits.drain(..leading_zeros);
  }

  bits.reverse();
  bits
}

/// The leading bit is always set and becomes `@c1`. Every further bit doubles the accumulated value.
fn positive(b: &Builder, bits: &[bool]) -> DataExpression {
  bits.iter()
      .skip(1)
      .fold(b.c1(), |accumulated, bit| b.cdub(b.bool_value(*bit), accumulated))
}

fn natural(b: &Builder, bits: &[bool]) -> DataExpression {
  if bits.is_empty() {
    b.c0()
  } else {
    b.cnat(positive(b, bits))
  }
}

fn integer(b: &Builder, negative: bool, bits: &[bool]) -> DataExpression {
  if negative && !bits.is_empty() {
    b.cneg(positive(b, bits))
  } else {
    b.cint(natural(b, bits))
  }
}

// endregion Encoding

// region Decoding

/// Sign and binary digits, least significant first, of an integral constructor term.
fn integer_bits(expression: &DataExpression) -> Option<(bool, Vec<bool>)> {
  if let Some(symbol) = expression.as_symbol() {
    return if is_c1(symbol) {
      Some((false, vec![true]))
    } else if is_c0(symbol) {
      Some((false, vec![]))
    } else {
      None
    };
  }

  let head      = expression.head_symbol()?;
  let arguments = expression.arguments();
  match arguments {
    [bit, rest] if is_cdub(head) => {
      let (_, mut bits) = integer_bits(rest)?;
      let bit = bit.as_symbol()?;
      if !is_bool_true(bit) && !is_bool_false(bit) {
        return None;
      }
      bits.insert(0, is_bool_true(bit));
      Some((false, bits))
    }
    [p] if is_cnat(head) || is_cint(head) => integer_bits(p),
    [p] if is_cneg(head) => integer_bits(p).map(|(_, bits)| (true, bits)),
    [x, denominator] if is_creal(head) => {
      if denominator.as_symbol().is_some_and(is_c1) {
        integer_bits(x)
      } else {
        None
      }
    }
    _ => None,
  }
}

/// Decimal rendering of binary digits, least significant first.
fn decimal_digits(bits: &[bool]) -> String {
  // Least significant decimal digit first.
  let mut digits: Vec<u8> = vec![0];
  for bit in bits.iter().rev() {
    let mut carry = *bit as u8;
    for digit in digits.iter_mut() {
      let current = *digit * 2 + carry;
      *digit      = current % 10;
      carry       = current / 10;
    }
    if carry > 0 {
      digits.push(carry);
    }
  }
  digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
}

// endregion Decoding

#[cfg(test)]
mod tests {
  use rand::{rngs::StdRng, RngCore, SeedableRng};

  use super::*;

  fn render(sorts: &SortCollection, value: &str, builtin: BuiltinSort) -> String {
    numeral(sorts, value, builtin.sort(sorts)).unwrap().to_string()
  }

  #[test]
  fn small_numerals() {
    let sorts = SortCollection::new();
    assert_eq!(render(&sorts, "1", BuiltinSort::Pos), "@c1");
    assert_eq!(render(&sorts, "2", BuiltinSort::Pos), "@cDub(false, @c1)");
    assert_eq!(render(&sorts, "3", BuiltinSort::Pos), "@cDub(true, @c1)");
    assert_eq!(render(&sorts, "6", BuiltinSort::Pos), "@cDub(false, @cDub(true, @c1))");
    assert_eq!(render(&sorts, "0", BuiltinSort::Nat), "@c0");
    assert_eq!(render(&sorts, "3", BuiltinSort::Nat), "@cNat(@cDub(true, @c1))");
    assert_eq!(render(&sorts, "0", BuiltinSort::Int), "@cInt(@c0)");
    assert_eq!(render(&sorts, "-2", BuiltinSort::Int), "@cNeg(@cDub(false, @c1))");
    assert_eq!(render(&sorts, "-1", BuiltinSort::Real), "@cReal(@cNeg(@c1), @c1)");
  }

  #[test]
  fn numerals_have_their_sort() {
    let sorts = SortCollection::new();
    for builtin in [BuiltinSort::Pos, BuiltinSort::Nat, BuiltinSort::Int, BuiltinSort::Real] {
      let term = numeral(&sorts, "12", builtin.sort(&sorts)).unwrap();
      assert_eq!(term.sort(&sorts), builtin.sort(&sorts));
    }
  }

  #[test]
  fn invalid_numerals() {
    let sorts = SortCollection::new();
    let pos   = BuiltinSort::Pos.sort(&sorts);
    let nat   = BuiltinSort::Nat.sort(&sorts);
    let bool_ = BuiltinSort::Bool.sort(&sorts);

    assert!(matches!(numeral(&sorts, "0", pos), Err(DataError::InvalidNumeral { .. })));
    assert!(matches!(numeral(&sorts, "-3", nat), Err(DataError::InvalidNumeral { .. })));
    assert!(matches!(numeral(&sorts, "1x", nat), Err(DataError::InvalidNumeral { .. })));
    assert!(matches!(numeral(&sorts, "1", bool_), Err(DataError::InvalidNumeral { .. })));
    // Negative zero is still zero.
    assert_eq!(numeral(&sorts, "-0", nat).unwrap().to_string(), "@c0");
  }

  #[test]
  fn leading_zeros_are_ignored() {
    let sorts = SortCollection::new();
    assert_eq!(render(&sorts, "0003", BuiltinSort::Pos), render(&sorts, "3", BuiltinSort::Pos));
    assert_eq!(render(&sorts, "000", BuiltinSort::Nat), "@c0");
  }

  #[test]
  fn numerals_longer_than_machine_words() {
    let sorts = SortCollection::new();
    let value = "340282366920938463463374607431768211457"; // 2^128 + 1
    let term  = numeral(&sorts, value, BuiltinSort::Nat.sort(&sorts)).unwrap();
    assert_eq!(decimal_value(&term).unwrap(), value);
  }

  #[test]
  fn random_numerals_decode_to_themselves() {
    let sorts   = SortCollection::new();
    let int     = BuiltinSort::Int.sort(&sorts);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
      let magnitude = rng.next_u64() >> (rng.next_u64() % 64);
      let value = if rng.next_u64() % 2 == 0 || magnitude == 0 {
        magnitude.to_string()
      } else {
        format!("-{}", magnitude)
      };

      let first  = numeral(&sorts, &value, int).unwrap();
      let second = numeral(&sorts, &value, int).unwrap();
      assert_eq!(first, second);
      assert_eq!(decimal_value(&first).unwrap(), value);
    }
  }
}
