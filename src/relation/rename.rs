use crate::{
    errors::Error,
    relation::{distinct_names, Relation},
    tuple::{Tuple, Tuples},
};
use std::collections::BTreeSet;

impl Relation {
    /// Returns the receiver with `mapping.get(name, name)` applied to every
    /// header attribute and every tuple key. Names absent from the mapping
    /// pass through unchanged. The mapping must be injective over the
    /// header; merging two attribute names fails rather than silently
    /// collapsing columns.
    pub fn rename<S: AsRef<str>>(&self, mapping: &[(S, S)]) -> Result<Relation, Error> {
        let attributes: BTreeSet<_> = self
            .attributes()
            .iter()
            .map(|attribute| {
                let to = mapping
                    .iter()
                    .find(|(from, _)| from.as_ref() == attribute.name())
                    .map(|(_, to)| to.as_ref())
                    .unwrap_or_else(|| attribute.name());
                attribute.rename(to)
            })
            .collect();
        distinct_names(&attributes)?;
        if attributes.len() != self.order() {
            // two attributes over one domain collapsed into the set
            return Err(Error::DuplicateAttribute {
                name: duplicate_target(self, mapping),
            });
        }

        let tuples: Vec<Tuple> = self
            .tuples()
            .iter()
            .map(|tuple| tuple.rename(mapping))
            .collect::<Result<_, _>>()?;
        Ok(Relation::from_parts(attributes, Tuples::from(tuples)))
    }

    /// Short operator alias for [`rename`].
    ///
    /// [`rename`]: ./struct.Relation.html#method.rename
    #[inline]
    pub fn rho<S: AsRef<str>>(&self, mapping: &[(S, S)]) -> Result<Relation, Error> {
        self.rename(mapping)
    }
}

/// Finds the name that a non-injective mapping sent two attributes to.
fn duplicate_target<S: AsRef<str>>(relation: &Relation, mapping: &[(S, S)]) -> String {
    let mut seen = BTreeSet::new();
    for name in relation.attribute_names() {
        let to = mapping
            .iter()
            .find(|(from, _)| from.as_ref() == name)
            .map(|(_, to)| to.as_ref().to_string())
            .unwrap_or(name);
        if !seen.insert(to.clone()) {
            return to;
        }
    }
    String::new()
}
