use std::fmt::{Display, Write};

/// Join the `Display` representations of `iter` with `sep`, like `[&str]::join` but without collecting an
/// intermediate `Vec<String>`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_with(iter, sep, |out, item| write!(out, "{}", item))
}

/// Join items of `iter` with `sep`, rendering each item with `render`. Useful when an item needs context to be
/// displayed, as sorts and expressions do.
pub fn join_with<T>(
  iter  : impl Iterator<Item = T>,
  sep   : &str,
  mut render: impl FnMut(&mut String, T) -> std::fmt::Result,
) -> String
{
  let mut out = String::new();
  for (idx, item) in iter.enumerate() {
    if idx > 0 {
      out.push_str(sep);
    }
    // Writing into a `String` cannot fail.
    let _ = render(&mut out, item);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn join_string_test() {
    let list = [1, 3, 5, 7, 9];
    assert_eq!(join_string(list.iter(), ", "), "1, 3, 5, 7, 9");
    assert_eq!(join_string(std::iter::empty::<u8>(), ", "), "");
  }

  #[test]
  fn join_with_test() {
    let names = ["Pos", "Nat"];
    let joined = join_with(names.iter(), " # ", |out, n| write!(out, "<{}>", n));
    assert_eq!(joined, "<Pos> # <Nat>");
  }
}
