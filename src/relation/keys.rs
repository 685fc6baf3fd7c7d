/*! Implements candidate-key and superkey discovery over a [`Relation`].

A candidate key is an attribute subset whose projection never collapses
distinct tuples; a superkey is any superset of a candidate key. Discovery
is exhaustive search over attribute subsets, acceptable because relations
are expected to be small.

[`Relation`]: ../struct.Relation.html
*/

use crate::relation::Relation;
use either::Either;

impl Relation {
    /// Lazily enumerates the candidate keys of the receiver as vectors of
    /// attribute names. The full attribute-name vector is always yielded
    /// first; after that, every combination of size 1 through order − 1
    /// whose projection preserves the receiver's cardinality is yielded in
    /// combinatorial order.
    pub fn candidate_keys(&self) -> CandidateKeys<'_> {
        CandidateKeys {
            relation: self,
            names: self.attribute_names(),
            size: 0,
            combinations: Combinations::new(0, 1),
        }
    }

    /// Enumerates the superkeys of the receiver: every nonempty subset of
    /// the attribute names containing some candidate key. This is a
    /// derived view over [`candidate_keys`], not an independent search.
    ///
    /// [`candidate_keys`]: ./struct.Relation.html#method.candidate_keys
    pub fn superkeys(&self) -> impl Iterator<Item = Vec<String>> {
        let names = self.attribute_names();
        let keys: Vec<Vec<String>> = self.candidate_keys().collect();
        let order = names.len();
        if order == 0 {
            return Either::Left(std::iter::empty());
        }
        Either::Right(
            (1..=order)
                .flat_map(move |size| Combinations::new(order, size))
                .map(move |indices| {
                    indices
                        .iter()
                        .map(|&index| names[index].clone())
                        .collect::<Vec<_>>()
                })
                .filter(move |subset| {
                    keys.iter()
                        .any(|key| key.iter().all(|name| subset.contains(name)))
                }),
        )
    }

    /// Returns true if `names` contains some candidate key of the
    /// receiver.
    pub fn is_superkey<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.candidate_keys().any(|key| {
            key.iter()
                .all(|name| names.iter().any(|n| n.as_ref() == name.as_str()))
        })
    }

    /// Returns true if projecting onto `names` preserves the cardinality
    /// of the receiver, i.e. no two distinct tuples agree on `names`.
    fn is_key(&self, names: &[String]) -> bool {
        self.project(names)
            .map(|projection| projection.cardinality() == self.cardinality())
            .unwrap_or(false)
    }
}

/// Lazily yields the candidate keys of a relation; see
/// [`Relation::candidate_keys`].
///
/// [`Relation::candidate_keys`]: ./struct.Relation.html#method.candidate_keys
pub struct CandidateKeys<'a> {
    relation: &'a Relation,
    names: Vec<String>,
    /// Current subset size; 0 means the full attribute set is still
    /// pending.
    size: usize,
    combinations: Combinations,
}

impl<'a> Iterator for CandidateKeys<'a> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Vec<String>> {
        if self.size == 0 {
            // the full collection of attributes is always a candidate key
            self.size = 1;
            self.combinations = Combinations::new(self.names.len(), 1);
            return Some(self.names.clone());
        }

        while self.size < self.names.len() {
            if let Some(indices) = self.combinations.next() {
                let key: Vec<String> = indices
                    .iter()
                    .map(|&index| self.names[index].clone())
                    .collect();
                if self.relation.is_key(&key) {
                    return Some(key);
                }
            } else {
                self.size += 1;
                self.combinations = Combinations::new(self.names.len(), self.size);
            }
        }
        None
    }
}

/// Yields the index vectors of all size-`size` combinations of `0..n` in
/// lexicographic order.
struct Combinations {
    n: usize,
    size: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(n: usize, size: usize) -> Self {
        Self {
            n,
            size,
            indices: (0..size).collect(),
            done: size > n || size == 0,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let result = self.indices.clone();

        // advance to the lexicographic successor
        let mut position = self.size;
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            if self.indices[position] != position + self.n - self.size {
                self.indices[position] += 1;
                for follower in position + 1..self.size {
                    self.indices[follower] = self.indices[follower - 1] + 1;
                }
                break;
            }
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::Combinations;
    use crate::{values, Domain, Relation};

    fn abc(rows: Vec<Vec<crate::Value>>) -> Relation {
        Relation::new(
            vec![
                (Domain::Integer, "a"),
                (Domain::Integer, "b"),
                (Domain::Integer, "c"),
            ],
            values(&["a", "b", "c"], rows).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_combinations() {
        let pairs: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ],
            pairs
        );
        assert_eq!(0, Combinations::new(2, 3).count());
        assert_eq!(1, Combinations::new(3, 3).count());
    }

    #[test]
    fn test_full_tuple_always_first() {
        let relation = abc(vec![
            vec![1.into(), 10.into(), 100.into()],
            vec![2.into(), 20.into(), 200.into()],
        ]);
        let first = relation.candidate_keys().next().unwrap();
        assert_eq!(relation.attribute_names(), first);
    }

    #[test]
    fn test_every_column_distinguishes() {
        let relation = abc(vec![
            vec![1.into(), 10.into(), 100.into()],
            vec![2.into(), 20.into(), 200.into()],
        ]);
        let keys: Vec<Vec<String>> = relation.candidate_keys().collect();
        assert!(keys.contains(&vec!["a".to_string(), "b".to_string(), "c".to_string()]));
        assert!(keys.contains(&vec!["a".to_string()]));
        assert!(keys.contains(&vec!["b".to_string()]));
        assert!(keys.contains(&vec!["c".to_string()]));
    }

    #[test]
    fn test_collapsing_columns_are_no_keys() {
        let relation = abc(vec![
            vec![1.into(), 1337.into(), 1337.into()],
            vec![2.into(), 1337.into(), 1337.into()],
        ]);
        let keys: Vec<Vec<String>> = relation.candidate_keys().collect();
        assert!(keys.contains(&vec!["a".to_string()]));
        assert!(!keys.contains(&vec!["b".to_string()]));
        assert!(!keys.contains(&vec!["c".to_string()]));
    }

    #[test]
    fn test_key_projection_preserves_cardinality() {
        let relation = abc(vec![
            vec![1.into(), 1337.into(), 1337.into()],
            vec![2.into(), 1337.into(), 1337.into()],
        ]);
        for key in relation.candidate_keys() {
            assert_eq!(
                relation.cardinality(),
                relation.project(&key).unwrap().cardinality()
            );
        }
    }

    #[test]
    fn test_superkeys() {
        let relation = abc(vec![
            vec![1.into(), 1337.into(), 1337.into()],
            vec![2.into(), 1337.into(), 1337.into()],
        ]);
        let superkeys: Vec<Vec<String>> = relation.superkeys().collect();
        // every set containing "a" is a superkey
        assert!(superkeys.contains(&vec!["a".to_string()]));
        assert!(superkeys.contains(&vec!["a".to_string(), "b".to_string()]));
        assert!(superkeys.contains(&vec!["a".to_string(), "c".to_string()]));
        assert!(superkeys.contains(&vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string()
        ]));
        assert_eq!(4, superkeys.len());

        assert!(relation.is_superkey(&["a", "c"]));
        assert!(!relation.is_superkey(&["b", "c"]));
    }

    #[test]
    fn test_zero_order_keys() {
        let keys: Vec<Vec<String>> = Relation::dee().candidate_keys().collect();
        assert_eq!(vec![Vec::<String>::new()], keys);
        assert_eq!(0, Relation::dee().superkeys().count());
    }
}
