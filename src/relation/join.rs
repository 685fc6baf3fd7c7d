use crate::{errors::Error, predicate::Predicate, relation::Relation};

impl Relation {
    /// Returns true if the receiver and `other` share no attribute and
    /// their headers are not literally equal.
    pub fn attributes_disjoint(&self, other: &Relation) -> bool {
        self.attributes() != other.attributes()
            && self
                .attributes()
                .iter()
                .all(|attribute| !other.attributes().contains(attribute))
    }

    /// Joins the receiver and `other` naturally: the subset of the product
    /// where every attribute shared by name agrees in value. Relations
    /// with disjoint headers degenerate to the product.
    pub fn join(&self, other: &Relation) -> Result<Relation, Error> {
        if self.attributes_disjoint(other) {
            return self.product(other);
        }

        let attributes = self.union_header(other)?;
        let common: Vec<&str> = self
            .attributes()
            .intersection(other.attributes())
            .map(|attribute| attribute.name())
            .collect();

        let mut body = Vec::new();
        for left in self.tuples().iter() {
            for right in other.tuples().iter() {
                if left.matching_superset_of(&right.project(&common)) {
                    body.push(left.union(right)?);
                }
            }
        }
        Ok(Relation::from_parts(attributes, body.into()))
    }

    /// Performs an equi-join between the receiver and `other` on pairs of
    /// column names, the first component naming a column of the receiver
    /// and the second a column of `other`. The result is the subset of the
    /// product where every named pair agrees in value. The empty pair list
    /// degenerates to the product.
    ///
    /// Equi-joins cover the case natural and inner joins cannot: matching
    /// columns of which some share a name and some do not.
    pub fn equi_join<S: AsRef<str>>(
        &self,
        other: &Relation,
        on: &[(S, S)],
    ) -> Result<Relation, Error> {
        if on.is_empty() {
            return self.product(other);
        }

        let mut self_names = Vec::with_capacity(on.len());
        let mut other_names = Vec::with_capacity(on.len());
        for (left, right) in on {
            if self.attribute(left.as_ref()).is_none() {
                return Err(Error::UnknownAttribute {
                    name: left.as_ref().to_string(),
                });
            }
            if other.attribute(right.as_ref()).is_none() {
                return Err(Error::UnknownAttribute {
                    name: right.as_ref().to_string(),
                });
            }
            self_names.push(left.as_ref());
            other_names.push(right.as_ref());
        }

        let attributes = self.union_header(other)?;
        let mut body = Vec::new();
        for left in self.tuples().iter() {
            let transformed = left.project(&self_names).rename(on)?;
            for right in other.tuples().iter() {
                if transformed == right.project(&other_names) {
                    body.push(left.union(right)?);
                }
            }
        }
        Ok(Relation::from_parts(attributes, body.into()))
    }

    /// Performs an inner join: the product of the receiver and `other`
    /// constrained by an ON condition, which is just a selection
    /// predicate over the product.
    ///
    /// Because the join is a selection on a product, attributes sharing a
    /// name between the operands cannot be addressed distinctly; rename
    /// before joining, or use [`equi_join`] or [`join`] instead.
    ///
    /// [`equi_join`]: ./struct.Relation.html#method.equi_join
    /// [`join`]: ./struct.Relation.html#method.join
    pub fn inner_join<P: Into<Predicate>>(
        &self,
        other: &Relation,
        on: P,
    ) -> Result<Relation, Error> {
        self.product(other)?.select(on)
    }
}
