/*!

Types/type aliases that abstract over the implementing backing type.

Names of sorts, symbols and variables are interned strings. Sets of sort handles are sets of small natural numbers,
so they are backed by a bit set. Both choices are made here so that the rest of the crate never names the backing
crate directly.

*/

mod nat_set;
mod string_join;

// Logging
pub mod log;

// A set of natural numbers
pub use nat_set::NatSet;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Hash containers used throughout the crate.
pub use std::collections::{HashMap, HashSet};

// Join sequences with a separator
pub use string_join::{join_string, join_with};
