/*!

The core data structures: the sort arena, the specification that owns everything, and the `Implementation` bundle
the library generates for a sort.

| item                   | owner                          | refers to others by         |
|:-----------------------|:-------------------------------|:----------------------------|
| sort                   | `SortCollection` (an arena)    | `SortId` handle             |
| symbol, variable       | value, cloned freely           | name and `SortId`           |
| expression, equation   | value, cloned freely           | contains symbols, variables |
| declared items         | `DataSpecification`            |                             |

*/

pub mod format;
pub mod implementation;
pub mod sort;
pub mod specification;

pub use implementation::Implementation;
pub use specification::{DataSpecification, SpecificationStatus};
