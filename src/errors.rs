//! The errors returned by the engine.

use crate::{attribute::Domain, tuple::Tuple, Value};
use thiserror::Error;

/// Is the type of errors returned by the engine. Every variant is raised
/// eagerly, at the point of construction or operator invocation: a relation
/// either satisfies all of its invariants or never comes into existence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Is returned when a tuple's key count does not match the arity of the
    /// header it is placed under.
    #[error("tuple {tuple} of length {found} does not fit header {header:?} of length {expected}")]
    InvalidTuple {
        tuple: Tuple,
        found: usize,
        header: Vec<String>,
        expected: usize,
    },

    /// Is returned when a tuple's value for some attribute is not a member
    /// of that attribute's domain.
    #[error("value {value} is outside the domain {domain} of attribute '{attribute}'")]
    ValueOutsideDomain {
        attribute: String,
        value: Value,
        domain: Domain,
    },

    /// Is returned when a tuple is constructed from a pair sequence that
    /// contains the same key twice.
    #[error("found duplicate key '{key}'")]
    DuplicateKey { key: String },

    /// Is returned when a header would contain two attributes with the same
    /// name, for example after a non-injective rename.
    #[error("found duplicate attribute name '{name}' in header")]
    DuplicateAttribute { name: String },

    /// Is returned when two tuples are merged and both define the same key
    /// with different values; `left` holds the receiver's value and
    /// `right` the argument's.
    #[error("conflicting values {left} and {right} for key '{key}'")]
    ValueConflict {
        key: String,
        left: Value,
        right: Value,
    },

    /// Is returned by an evaluable selection capability that cannot reduce
    /// itself to a boolean over a given tuple.
    #[error("unsupported predicate: {reason}")]
    UnsupportedPredicate { reason: String },

    /// Is returned when an operator names an attribute that is not part of
    /// the relation's header.
    #[error("no attribute named '{name}'")]
    UnknownAttribute { name: String },
}
