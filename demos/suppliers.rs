//! The classic suppliers-and-shipments catalogue, worked through the
//! algebraic operators.

use dee::{row, to_values_notation, values, Domain, Error, Predicate, Relation, Value};

fn main() -> Result<(), Error> {
    let suppliers = Relation::new(
        vec![
            (Domain::Integer, "sno"),
            (Domain::Text, "sname"),
            (Domain::Text, "city"),
        ],
        values(
            &["sno", "sname", "city"],
            vec![
                row![1, "Smith", "London"],
                row![2, "Jones", "Paris"],
                row![3, "Blake", "Paris"],
                row![4, "Clark", "London"],
            ],
        )?,
    )?;

    let shipments = Relation::new(
        vec![
            (Domain::Integer, "sno"),
            (Domain::Text, "pname"),
            (Domain::Integer, "qty"),
        ],
        values(
            &["sno", "pname", "qty"],
            vec![
                row![1, "nut", 300],
                row![1, "bolt", 200],
                row![2, "nut", 100],
                row![3, "screw", 500],
            ],
        )?,
    )?;

    // who ships what: natural join on the shared supplier number
    let catalogue = suppliers.join(&shipments)?;
    assert_eq!(5, catalogue.order());
    assert_eq!(4, catalogue.cardinality());

    // Parisian shipments, pared down to supplier and part names
    let parisian = catalogue
        .select(Predicate::from_fn(|t| {
            t.get("city") == Some(&Value::from("Paris"))
        }))?
        .project(&["sname", "pname"])?;
    println!(
        "{}",
        to_values_notation(parisian.tuples().iter()).unwrap_or_default()
    );
    assert_eq!(2, parisian.cardinality());

    // renaming makes the same join expressible as an equi-join
    let renamed = shipments.rename(&[("sno", "supplier")])?;
    let equi = suppliers.equi_join(&renamed, &[("sno", "supplier")])?;
    assert_eq!(catalogue.cardinality(), equi.cardinality());

    // supplier numbers alone identify suppliers
    for key in suppliers.candidate_keys() {
        println!("candidate key: {:?}", key);
    }
    assert!(suppliers.is_superkey(&["sno", "city"]));

    // the zero-order constants fall out of projecting onto nothing
    let none: &[&str] = &[];
    assert_eq!(*Relation::dee(), suppliers.project(none)?);
    assert_eq!(
        *Relation::doe(),
        suppliers.select(false)?.project(none)?
    );

    Ok(())
}
