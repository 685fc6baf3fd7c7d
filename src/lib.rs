/*! `dee` is a minimal in-memory relational algebra engine.

A [`Relation`] is an immutable pair of a *header* (a set of typed
[`Attribute`]s with pairwise distinct names) and a *body* (a set of
name-keyed [`Tuple`]s). Relations are derived from one another through the
closed set of algebraic operators: projection, selection, renaming,
Cartesian product and the join family, plus candidate-key and superkey
discovery. Every operator is a pure function returning a freshly
constructed relation; nothing in the crate mutates shared state.

The two zero-order relations [`Relation::dee`] (the identity element of
product) and [`Relation::doe`] (its null element) are process-wide
constants.

[`Relation`]: ./struct.Relation.html
[`Attribute`]: ./struct.Attribute.html
[`Tuple`]: ./struct.Tuple.html
[`Relation::dee`]: ./struct.Relation.html#method.dee
[`Relation::doe`]: ./struct.Relation.html#method.doe
*/

mod attribute;
mod errors;
mod macros;
mod predicate;
mod relation;
mod tools;
mod tuple;

pub use attribute::{Attribute, Domain, Value};
pub use errors::Error;
pub use predicate::{Evaluate, Predicate};
pub use relation::{CandidateKeys, Relation};
pub use tools::{to_values_notation, values};
pub use tuple::{Tuple, Tuples};
