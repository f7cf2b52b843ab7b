/*!

Lowers algebraic data specifications with surface sugar into closed, canonical rewrite systems.

A specification declares sorts, constructors, mappings and equations. Its surface form may use numerals, list, set
and bag enumerations, comprehensions, lambdas, where-clauses, sort aliases, containers and structured sorts. The
[`implement`](implement::implement) pipeline removes all of that:

| module        | does                                                                                  |
|:--------------|:--------------------------------------------------------------------------------------|
| [`normalize`] | removes aliases and surface notation, lifts lambdas to mappings                        |
| [`builtin`]   | generates `Bool`, `Pos`, `Nat`, `Int`, `Real` and the standard functions of a sort     |
| [`synthesis`] | compiles `List`, `Set`, `Bag` and `struct` sorts into constructors and equations       |
| [`closure`]   | adds everything the specification transitively needs, and checks the result            |

The result only uses basic and function sorts, and every symbol it mentions is declared in it.

*/

pub mod abstractions;
pub mod api;
pub mod builtin;
pub mod closure;
pub mod core;
pub mod implement;
pub mod normalize;
pub mod synthesis;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};

pub use implement::{implement, ImplementOptions, Report};
