/// Builds a [`Tuple`](./struct.Tuple.html) from `name => value` pairs,
/// converting each value through `Value::from`.
#[macro_export]
macro_rules! tuple {
    () => {
        ::std::result::Result::<$crate::Tuple, $crate::Error>::Ok($crate::Tuple::empty().clone())
    };
    ($($key:literal => $value:expr),+ $(,)?) => {
        $crate::Tuple::new(vec![$(($key.to_string(), $crate::Value::from($value)),)+])
    };
}

/// Builds a positional row of [`Value`](./enum.Value.html)s for the
/// [`values`](./fn.values.html) adapter.
#[macro_export]
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value),)*]
    };
}

/// Builds a [`Relation`](./struct.Relation.html) from a bracketed list of
/// (domain, name) attribute specs and a bracketed list of tuples.
#[macro_export]
macro_rules! relation {
    ([$(($domain:expr, $name:literal)),* $(,)?], [$($tuple:expr),* $(,)?]) => {{
        let tuples: ::std::vec::Vec<$crate::Tuple> = vec![$($tuple,)*];
        $crate::Relation::new(vec![$($crate::Attribute::new($domain, $name),)*], tuples)
    }};
}
