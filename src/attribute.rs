/*! Implements [`Attribute`], the typed column descriptor, together with the
[`Domain`] of values an attribute admits and the [`Value`]s themselves.

[`Attribute`]: ./struct.Attribute.html
[`Domain`]: ./enum.Domain.html
[`Value`]: ./enum.Value.html
*/

use std::fmt;

/// Is a domain of attribute values. Membership is a strict predicate: a
/// value either is of the domain's kind or it is not; there is no coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    Boolean,
    Integer,
    Text,
}

impl Domain {
    /// Returns true if `value` is a member of the receiver.
    pub fn contains(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Domain::Boolean, Value::Boolean(_))
                | (Domain::Integer, Value::Integer(_))
                | (Domain::Text, Value::Text(_))
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Domain::Boolean => write!(f, "boolean"),
            Domain::Integer => write!(f, "integer"),
            Domain::Text => write!(f, "text"),
        }
    }
}

/// Is a single attribute value stored in a tuple.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Text(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// Is an immutable (domain, name) pair identifying one column of a
/// relation. Attributes are values: equality and hashing are structural
/// and "mutation" always produces a new instance.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Attribute {
    name: String,
    domain: Domain,
}

impl Attribute {
    /// Creates a new attribute over `domain` with the given `name`.
    pub fn new(domain: Domain, name: &str) -> Self {
        Self {
            name: name.to_string(),
            domain,
        }
    }

    /// Returns the name of the receiver.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the domain of the receiver.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns true if `value` lies in the domain of the receiver.
    pub fn in_domain(&self, value: &Value) -> bool {
        self.domain.contains(value)
    }

    /// Returns a new attribute named `to` over the same domain, or a clone
    /// of the receiver if the name is unchanged.
    pub fn rename(&self, to: &str) -> Attribute {
        if to == self.name {
            self.clone()
        } else {
            Attribute::new(self.domain, to)
        }
    }
}

impl From<(Domain, &str)> for Attribute {
    fn from((domain, name): (Domain, &str)) -> Self {
        Attribute::new(domain, name)
    }
}

impl From<(Domain, String)> for Attribute {
    fn from((domain, name): (Domain, String)) -> Self {
        Attribute { name, domain }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Attribute({}, {:?})", self.domain, self.name)
    }
}
