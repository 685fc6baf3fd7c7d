use crate::{errors::Error, relation::Relation, tuple::Tuples};

impl Relation {
    /// Returns the Cartesian product of the receiver and `other`: the
    /// union of both headers over the pairwise union of both bodies.
    ///
    /// Two algebraic laws short-circuit the general case: the identity law
    /// (`other` is [`dee`], return the receiver unchanged) and the null law
    /// (`other` has an empty body, return an empty body under the union of
    /// both headers).
    ///
    /// Identically-defined attributes shared by both operands merge; their
    /// values must agree tuple by tuple or the product fails with
    /// [`Error::ValueConflict`]. Two different attributes sharing one name
    /// fail with [`Error::DuplicateAttribute`]; rename before multiplying.
    ///
    /// [`dee`]: ./struct.Relation.html#method.dee
    /// [`Error::ValueConflict`]: ./enum.Error.html#variant.ValueConflict
    /// [`Error::DuplicateAttribute`]: ./enum.Error.html#variant.DuplicateAttribute
    pub fn product(&self, other: &Relation) -> Result<Relation, Error> {
        // the identity law
        if other == Relation::dee() {
            return Ok(self.clone());
        }

        let attributes = self.union_header(other)?;

        // the null law: the header is still the union of both headers
        if other.cardinality() == 0 {
            return Ok(Relation::from_parts(attributes, Tuples::default()));
        }

        let mut body = Vec::with_capacity(self.cardinality() * other.cardinality());
        for left in self.tuples().iter() {
            for right in other.tuples().iter() {
                body.push(left.union(right)?);
            }
        }
        Ok(Relation::from_parts(attributes, body.into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{values, Domain, Error, Relation, Tuple};

    fn left() -> Relation {
        Relation::new(
            vec![(Domain::Integer, "a")],
            values(&["a"], vec![vec![1.into()], vec![2.into()]]).unwrap(),
        )
        .unwrap()
    }

    fn right() -> Relation {
        Relation::new(
            vec![(Domain::Text, "b")],
            values(&["b"], vec![vec!["x".into()], vec!["y".into()], vec!["z".into()]]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_identity_law() {
        let relation = left();
        assert_eq!(relation, relation.product(Relation::dee()).unwrap());
    }

    #[test]
    fn test_null_law_keeps_union_header() {
        let relation = left();
        let empty = Relation::new(vec![(Domain::Text, "b")], Vec::<Tuple>::new()).unwrap();
        let product = relation.product(&empty).unwrap();
        assert_eq!(0, product.cardinality());
        // the header is the union of both operands' headers, not just the
        // left one
        assert_eq!(
            vec!["a".to_string(), "b".to_string()],
            product.attribute_names()
        );
    }

    #[test]
    fn test_product() {
        let product = left().product(&right()).unwrap();
        assert_eq!(2, product.order());
        assert_eq!(6, product.cardinality());
        assert!(product
            .tuples()
            .iter()
            .all(|t| t.get("a").is_some() && t.get("b").is_some()));
    }

    #[test]
    fn test_product_merges_agreeing_shared_attribute() {
        let single = Relation::new(
            vec![(Domain::Integer, "a")],
            values(&["a"], vec![vec![1.into()]]).unwrap(),
        )
        .unwrap();
        assert_eq!(single, single.product(&single).unwrap());
    }

    #[test]
    fn test_product_value_conflict() {
        let one = Relation::new(
            vec![(Domain::Integer, "a")],
            values(&["a"], vec![vec![1.into()]]).unwrap(),
        )
        .unwrap();
        let two = Relation::new(
            vec![(Domain::Integer, "a")],
            values(&["a"], vec![vec![2.into()]]).unwrap(),
        )
        .unwrap();
        assert!(matches!(
            one.product(&two),
            Err(Error::ValueConflict { .. })
        ));
    }

    #[test]
    fn test_product_name_collision() {
        let text_a = Relation::new(
            vec![(Domain::Text, "a")],
            values(&["a"], vec![vec!["x".into()]]).unwrap(),
        )
        .unwrap();
        assert_eq!(
            Err(Error::DuplicateAttribute {
                name: "a".to_string()
            }),
            left().product(&text_a)
        );
    }
}
