use crate::{attribute::Attribute, errors::Error, relation::Relation, tuple::Tuples};
use std::collections::BTreeSet;

impl Relation {
    /// Returns the projection of the receiver onto `names`: the header
    /// restricted to the named attributes and every tuple restricted to
    /// match. Duplicate projected tuples collapse by set semantics, so the
    /// cardinality can drop. Projecting onto the empty name set yields
    /// [`dee`] when the body is nonempty and [`doe`] otherwise.
    ///
    /// [`dee`]: ./struct.Relation.html#method.dee
    /// [`doe`]: ./struct.Relation.html#method.doe
    pub fn project<S: AsRef<str>>(&self, names: &[S]) -> Result<Relation, Error> {
        if names.is_empty() {
            return Ok(if self.cardinality() == 0 {
                Relation::doe().clone()
            } else {
                Relation::dee().clone()
            });
        }

        let mut attributes = BTreeSet::new();
        for name in names {
            let attribute =
                self.attribute(name.as_ref())
                    .ok_or_else(|| Error::UnknownAttribute {
                        name: name.as_ref().to_string(),
                    })?;
            attributes.insert(attribute.clone());
        }

        let tuples: Tuples = self
            .tuples()
            .iter()
            .map(|tuple| tuple.project(names))
            .collect::<Vec<_>>()
            .into();
        Ok(Relation::from_parts(attributes, tuples))
    }

    /// Short operator alias for [`project`].
    ///
    /// [`project`]: ./struct.Relation.html#method.project
    #[inline]
    pub fn pi<S: AsRef<str>>(&self, names: &[S]) -> Result<Relation, Error> {
        self.project(names)
    }
}

#[cfg(test)]
mod tests {
    use crate::{values, Domain, Error, Relation, Value};

    fn example() -> Relation {
        Relation::new(
            vec![
                (Domain::Integer, "a"),
                (Domain::Integer, "b"),
                (Domain::Integer, "c"),
            ],
            values(
                &["a", "b", "c"],
                vec![
                    vec![1.into(), 10.into(), 100.into()],
                    vec![2.into(), 20.into(), 100.into()],
                ],
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_project_identity() {
        let relation = example();
        assert_eq!(relation, relation.project(&relation.attribute_names()).unwrap());
    }

    #[test]
    fn test_project_empty_names() {
        let relation = example();
        let none: &[&str] = &[];
        assert_eq!(*Relation::dee(), relation.project(none).unwrap());

        let empty = Relation::new(
            vec![(Domain::Integer, "a")],
            Vec::<crate::Tuple>::new(),
        )
        .unwrap();
        assert_eq!(*Relation::doe(), empty.project(none).unwrap());
    }

    #[test]
    fn test_project_collapses_duplicates() {
        let relation = example();
        let projected = relation.project(&["c"]).unwrap();
        assert_eq!(1, projected.order());
        // both tuples agree on c, so the body collapses
        assert_eq!(1, projected.cardinality());
        assert_eq!(Some(&Value::from(100)), projected.tuples()[0].get("c"));
    }

    #[test]
    fn test_project_unknown_name() {
        assert_eq!(
            Err(Error::UnknownAttribute {
                name: "z".to_string()
            }),
            example().project(&["z"])
        );
    }

    #[test]
    fn test_pi_alias() {
        let relation = example();
        assert_eq!(relation.project(&["a"]).unwrap(), relation.pi(&["a"]).unwrap());
    }
}
