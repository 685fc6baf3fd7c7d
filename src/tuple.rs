/*! Implements [`Tuple`], the immutable name-keyed row of a relation, and
[`Tuples`], the canonical set container for relation bodies.

[`Tuple`]: ./struct.Tuple.html
[`Tuples`]: ./struct.Tuples.html
*/

use crate::{errors::Error, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// Is an immutable set of (name, value) pairs with pairwise distinct
/// names; semantically a finite mapping from attribute name to value.
///
/// The fields are kept sorted by name, so equality and hashing are
/// independent of the order in which a tuple was built.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple {
    fields: Vec<(String, Value)>,
}

impl Tuple {
    /// Creates a tuple from an arbitrary sequence of (name, value) pairs.
    /// Fails with [`Error::DuplicateKey`] if the sequence repeats a name.
    ///
    /// [`Error::DuplicateKey`]: ./enum.Error.html#variant.DuplicateKey
    pub fn new<I>(fields: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut fields: Vec<(String, Value)> = fields.into_iter().collect();
        fields.sort();
        // a repeated name is rejected even when its values agree
        for pair in fields.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(Error::DuplicateKey {
                    key: pair[0].0.clone(),
                });
            }
        }
        Ok(Self { fields })
    }

    /// Returns the canonical empty tuple, the identity element of
    /// [`union`].
    ///
    /// [`union`]: ./struct.Tuple.html#method.union
    pub fn empty() -> &'static Tuple {
        static EMPTY: OnceLock<Tuple> = OnceLock::new();
        EMPTY.get_or_init(|| Tuple { fields: Vec::new() })
    }

    /// Returns the value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .binary_search_by(|(key, _)| key.as_str().cmp(name))
            .ok()
            .map(|index| &self.fields[index].1)
    }

    /// Returns the number of fields in the receiver.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the receiver has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the names of the receiver's fields in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Returns the (name, value) pairs of the receiver in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the sub-tuple of the receiver restricted to `names`. Names
    /// that are not present are ignored; the empty name set yields the
    /// empty tuple.
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Tuple {
        if names.is_empty() {
            return Tuple::empty().clone();
        }
        let fields = self
            .fields
            .iter()
            .filter(|(key, _)| names.iter().any(|name| name.as_ref() == key.as_str()))
            .cloned()
            .collect();
        Tuple { fields }
    }

    /// Applies `mapping.get(name, name)` to every key of the receiver and
    /// returns the resulting tuple. Fails with [`Error::DuplicateKey`] if
    /// the mapping merges two names into one.
    ///
    /// [`Error::DuplicateKey`]: ./enum.Error.html#variant.DuplicateKey
    pub fn rename<S: AsRef<str>>(&self, mapping: &[(S, S)]) -> Result<Tuple, Error> {
        Tuple::new(self.fields.iter().map(|(key, value)| {
            let to = mapping
                .iter()
                .find(|(from, _)| from.as_ref() == key.as_str())
                .map(|(_, to)| to.as_ref())
                .unwrap_or_else(|| key.as_str());
            (to.to_string(), value.clone())
        }))
    }

    /// Merges the receiver with `other`. Either operand being the empty
    /// tuple returns the other unchanged. A key defined by both operands
    /// with equal values collapses to one field; with differing values the
    /// merge fails with [`Error::ValueConflict`].
    ///
    /// [`Error::ValueConflict`]: ./enum.Error.html#variant.ValueConflict
    pub fn union(&self, other: &Tuple) -> Result<Tuple, Error> {
        if self.is_empty() {
            return Ok(other.clone());
        } else if other.is_empty() {
            return Ok(self.clone());
        }

        for (key, value) in self.iter() {
            if let Some(found) = other.get(key) {
                if found != value {
                    return Err(Error::ValueConflict {
                        key: key.to_string(),
                        left: value.clone(),
                        right: found.clone(),
                    });
                }
            }
        }

        let mut fields: Vec<(String, Value)> = self
            .fields
            .iter()
            .chain(other.fields.iter())
            .cloned()
            .collect();
        fields.sort();
        fields.dedup();
        Ok(Tuple { fields })
    }

    /// Returns true if every key of `other` is present in the receiver
    /// with an equal value.
    pub fn matching_superset_of(&self, other: &Tuple) -> bool {
        other.iter().all(|(key, value)| self.get(key) == Some(value))
    }
}

impl From<BTreeMap<String, Value>> for Tuple {
    fn from(map: BTreeMap<String, Value>) -> Self {
        // a map is already sorted with distinct keys
        Tuple {
            fields: map.into_iter().collect(),
        }
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (name, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}

/// Is a wrapper around a vector of tuples forming a relation's body. As an
/// invariant, the content of `Tuples` is sorted and deduplicated, so
/// equality is set equality.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tuples {
    items: Vec<Tuple>,
}

impl<I: IntoIterator<Item = Tuple>> From<I> for Tuples {
    fn from(iterator: I) -> Self {
        let mut items: Vec<Tuple> = iterator.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Tuples { items }
    }
}

impl Tuples {
    /// Returns an immutable reference to the tuples of the receiver.
    pub fn items(&self) -> &[Tuple] {
        &self.items
    }

    /// Consumes the receiver and returns the underlying (sorted) vector of
    /// tuples.
    #[inline(always)]
    pub fn into_tuples(self) -> Vec<Tuple> {
        self.items
    }
}

impl Deref for Tuples {
    type Target = Vec<Tuple>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
