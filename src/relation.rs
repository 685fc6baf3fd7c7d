/*! Implements [`Relation`], the immutable pair of a typed header and a
set-based body, together with its algebraic operators (one per submodule).

[`Relation`]: ./struct.Relation.html
*/

mod join;
mod keys;
mod product;
mod project;
mod rename;
mod select;

pub use keys::CandidateKeys;

use crate::{
    attribute::Attribute,
    errors::Error,
    tuple::{Tuple, Tuples},
};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

/// Is a finite relation: a header of typed attributes with pairwise
/// distinct names and a body of tuples keyed exactly by those names.
/// Both components are validated eagerly at construction and immutable
/// afterwards; every operator returns a new relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
    attributes: BTreeSet<Attribute>,
    tuples: Tuples,
}

impl Relation {
    /// Creates a relation from attribute specs (ready-made [`Attribute`]s
    /// or (domain, name) pairs) and tuple specs (ready-made [`Tuple`]s or
    /// raw mappings), validating arity and domain membership for every
    /// tuple against the header.
    ///
    /// [`Attribute`]: ./struct.Attribute.html
    /// [`Tuple`]: ./struct.Tuple.html
    pub fn new<A, AI, T, TI>(attributes: AI, tuples: TI) -> Result<Self, Error>
    where
        A: Into<Attribute>,
        AI: IntoIterator<Item = A>,
        T: Into<Tuple>,
        TI: IntoIterator<Item = T>,
    {
        let attributes: BTreeSet<Attribute> =
            attributes.into_iter().map(Into::into).collect();
        distinct_names(&attributes)?;

        let tuples: Vec<Tuple> = tuples.into_iter().map(Into::into).collect();
        let relation = Relation {
            attributes,
            tuples: tuples.into(),
        };
        relation.validate()?;
        Ok(relation)
    }

    fn validate(&self) -> Result<(), Error> {
        let expected = self.order();
        for tuple in self.tuples.iter() {
            if tuple.len() != expected {
                return Err(Error::InvalidTuple {
                    tuple: tuple.clone(),
                    found: tuple.len(),
                    header: self.attribute_names(),
                    expected,
                });
            }
            for (name, value) in tuple.iter() {
                let attribute =
                    self.attribute(name).ok_or_else(|| Error::UnknownAttribute {
                        name: name.to_string(),
                    })?;
                if !attribute.in_domain(value) {
                    return Err(Error::ValueOutsideDomain {
                        attribute: name.to_string(),
                        value: value.clone(),
                        domain: attribute.domain(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Creates a relation from already-validated parts. Operators use this
    /// to avoid re-validating bodies they constructed from valid inputs.
    pub(crate) fn from_parts(attributes: BTreeSet<Attribute>, tuples: Tuples) -> Self {
        Relation { attributes, tuples }
    }

    /// Returns the header of the receiver.
    pub fn attributes(&self) -> &BTreeSet<Attribute> {
        &self.attributes
    }

    /// Returns the header attribute named `name`, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Returns the names of the header attributes in canonical order.
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Returns the body of the receiver.
    pub fn tuples(&self) -> &Tuples {
        &self.tuples
    }

    /// Returns the number of tuples in the body.
    #[inline]
    pub fn cardinality(&self) -> usize {
        self.tuples.len()
    }

    /// Returns the number of attributes in the header.
    #[inline]
    pub fn order(&self) -> usize {
        self.attributes.len()
    }

    /// Returns the zero-order relation of cardinality one: the relation
    /// asserting truth and the identity element of [`product`].
    ///
    /// [`product`]: ./struct.Relation.html#method.product
    pub fn dee() -> &'static Relation {
        static DEE: OnceLock<Relation> = OnceLock::new();
        DEE.get_or_init(|| Relation {
            attributes: BTreeSet::new(),
            tuples: vec![Tuple::empty().clone()].into(),
        })
    }

    /// Returns the zero-order relation of cardinality zero: the relation
    /// asserting falsehood and the null element of [`product`].
    ///
    /// [`product`]: ./struct.Relation.html#method.product
    pub fn doe() -> &'static Relation {
        static DOE: OnceLock<Relation> = OnceLock::new();
        DOE.get_or_init(|| Relation {
            attributes: BTreeSet::new(),
            tuples: Tuples::default(),
        })
    }

    /// Returns the union of the receiver's and `other`'s headers, failing
    /// if two distinct attributes would share a name.
    pub(crate) fn union_header(&self, other: &Relation) -> Result<BTreeSet<Attribute>, Error> {
        let attributes: BTreeSet<Attribute> = self
            .attributes
            .union(&other.attributes)
            .cloned()
            .collect();
        distinct_names(&attributes)?;
        Ok(attributes)
    }
}

/// Checks that no two attributes of a header share a name. The set is
/// ordered name-major, so duplicates are adjacent.
pub(crate) fn distinct_names(attributes: &BTreeSet<Attribute>) -> Result<(), Error> {
    let names: Vec<&str> = attributes.iter().map(Attribute::name).collect();
    for pair in names.windows(2) {
        if pair[0] == pair[1] {
            return Err(Error::DuplicateAttribute {
                name: pair[0].to_string(),
            });
        }
    }
    Ok(())
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // the two zero-order relations are special cases
        if self.order() == 0 {
            return write!(f, "{}", if self.cardinality() == 1 { "Dee" } else { "Doe" });
        }
        write!(f, "Relation({{")?;
        for (index, attribute) in self.attributes.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", attribute)?;
        }
        write!(f, "}}, {{")?;
        for (index, tuple) in self.tuples.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", tuple)?;
        }
        write!(f, "}})")
    }
}
