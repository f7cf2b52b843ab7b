/*!

The public API of the library: the objects a parser builds a specification from and a rewriter reads a closed
specification back out of.

*/

pub mod equation;
pub mod error;
pub mod expression;
pub mod symbol;
pub mod variable;

pub use equation::{DataEquation, EquationAttribute, EquationAttributes};
pub use error::{DataError, DataResult, Inconsistency};
pub use expression::{Binder, DataExpression};
pub use symbol::{FunctionSymbol, SymbolAttribute, SymbolAttributes};
pub use variable::Variable;
