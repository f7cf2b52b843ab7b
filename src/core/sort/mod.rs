/*!

A sort is a type of the data language. Sorts are structural values: a basic sort is just a name, while function,
container, structured and alias sorts are built from other sorts. Sorts are represented in code by the
[`SortKind`](crate::core::sort::SortKind) enum and referred to everywhere else by a [`SortId`], a small copyable
handle into a [`SortCollection`](crate::core::sort::SortCollection).

## Lifecycle and Ownership

Every `SortKind` lives in exactly one `SortCollection`, which is owned by the `DataSpecification` the sort belongs
to. The collection hash-conses its contents: interning a `SortKind` that is already present returns the existing
handle. Two consequences follow.

 1. Handle equality is structural equality. Comparing two sorts never walks their structure, except when alias
    nodes have to be resolved first (see [`SortCollection::equivalent`]).
 2. The arena is acyclic. A sort can only mention sorts that were interned before it, so recursion over the
    structure of a sort always terminates. A self-referential structured sort such as
    `Rec = struct node(next: Rec)` mentions itself through the *basic* sort `Rec`, never through its own handle.

Nothing is ever removed from a collection. Handles stay valid for the lifetime of the specification.

## Hidden Sorts

`FSet(E)` and `FBag(E)` are container kinds that never appear in user input. They are the finite "correction"
parts of the `Set(E)` and `Bag(E)` encodings and are created by the synthesizer.

## Substitution

Alias removal and the final replacement of structural container/struct sorts by their implementing sort names are
both simultaneous substitutions over sorts. See [`SortSubstitution`].

## See Also...

 - The [`synthesis`](crate::synthesis) module compiles container and structured sorts into constructors, mappings
   and equations.
 - The [`builtin`](crate::builtin) module does the same for the builtin sorts `Bool`, `Pos`, `Nat`, `Int`, `Real`.

*/

pub mod collection;
pub mod sort;
pub mod substitution;

pub use collection::SortCollection;
pub use sort::{
  ContainerKind,
  SortId,
  SortKind,
  StructConstructor,
  StructProjection
};
pub use substitution::SortSubstitution;
