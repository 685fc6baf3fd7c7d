/*! Convenience helpers around the engine: the positional `values(...)`
adapter and the textual values notation used when printing results. The
notation is purely presentational and is never parsed back into the
engine. */

use crate::{errors::Error, tuple::Tuple, Value};

/// Builds tuples by zipping each positional `row` against the ordered
/// attribute `names`. Fails if a name repeats.
pub fn values<S, V, R>(names: &[S], rows: R) -> Result<Vec<Tuple>, Error>
where
    S: AsRef<str>,
    V: IntoIterator<Item = Value>,
    R: IntoIterator<Item = V>,
{
    rows.into_iter()
        .map(|row| {
            Tuple::new(
                names
                    .iter()
                    .map(|name| name.as_ref().to_string())
                    .zip(row),
            )
        })
        .collect()
}

/// Renders `tuples` in the textual notation
/// `values((names...), ((row values...)...))`, with attribute names taken
/// from the first tuple encountered. Returns `None` for an empty sequence.
pub fn to_values_notation<'a, I>(tuples: I) -> Option<String>
where
    I: IntoIterator<Item = &'a Tuple>,
{
    let mut tuples = tuples.into_iter();
    let first = tuples.next()?;

    let names: Vec<String> = first.names().map(|name| format!("{:?}", name)).collect();
    let mut rows = vec![row_notation(first)];
    for tuple in tuples {
        rows.push(row_notation(tuple));
    }
    Some(format!("values({}, {})", notate(&names), notate(&rows)))
}

fn row_notation(tuple: &Tuple) -> String {
    let row: Vec<String> = tuple.iter().map(|(_, value)| value.to_string()).collect();
    notate(&row)
}

/// Joins rendered items as a tuple literal, keeping the trailing comma of
/// one-element tuples.
fn notate(items: &[String]) -> String {
    if items.len() == 1 {
        format!("({},)", items[0])
    } else {
        format!("({})", items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_values() {
        let tuples = values(
            &["id", "name"],
            vec![vec![1.into(), "a".into()], vec![2.into(), "b".into()]],
        )
        .unwrap();
        assert_eq!(2, tuples.len());
        assert_eq!(Some(&Value::from(1)), tuples[0].get("id"));
        assert_eq!(Some(&Value::from("b")), tuples[1].get("name"));
    }

    #[test]
    fn test_values_duplicate_name() {
        let result = values(&["id", "id"], vec![vec![1.into(), 2.into()]]);
        assert_eq!(
            Err(Error::DuplicateKey {
                key: "id".to_string()
            }),
            result
        );
        // equal values under the repeated name are rejected all the same
        let result = values(&["id", "id"], vec![vec![1.into(), 1.into()]]);
        assert_eq!(
            Err(Error::DuplicateKey {
                key: "id".to_string()
            }),
            result
        );
    }

    #[test]
    fn test_to_values_notation() {
        let tuples = values(
            &["id", "name"],
            vec![vec![1.into(), "a".into()], vec![2.into(), "b".into()]],
        )
        .unwrap();
        assert_eq!(
            Some("values((\"id\", \"name\"), ((1, \"a\"), (2, \"b\")))".to_string()),
            to_values_notation(&tuples)
        );
    }

    #[test]
    fn test_to_values_notation_singletons() {
        let tuples = values(&["id"], vec![vec![Value::from(1)]]).unwrap();
        assert_eq!(
            Some("values((\"id\",), ((1,),))".to_string()),
            to_values_notation(&tuples)
        );
    }

    #[test]
    fn test_to_values_notation_empty() {
        assert_eq!(None, to_values_notation(Vec::new()));
    }
}
