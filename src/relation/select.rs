use crate::{errors::Error, predicate::Predicate, relation::Relation, tuple::Tuples};

impl Relation {
    /// Returns the selection of the receiver under `predicate`. The
    /// identity predicate (`true`, `None`) returns a clone of the receiver;
    /// the contradiction (`false`) keeps the header and empties the body;
    /// an evaluable capability keeps exactly the tuples it accepts, with
    /// evaluation errors propagating to the caller.
    pub fn select<P: Into<Predicate>>(&self, predicate: P) -> Result<Relation, Error> {
        match predicate.into() {
            Predicate::Identity => Ok(self.clone()),
            Predicate::Contradiction => Ok(Relation::from_parts(
                self.attributes().clone(),
                Tuples::default(),
            )),
            Predicate::Evaluable(function) => {
                let mut guard = function.borrow_mut();
                let function = &mut *guard;
                let mut kept = Vec::new();
                for tuple in self.tuples().iter() {
                    if function(tuple)? {
                        kept.push(tuple.clone());
                    }
                }
                Ok(Relation::from_parts(self.attributes().clone(), kept.into()))
            }
        }
    }

    /// Short operator alias for [`select`].
    ///
    /// [`select`]: ./struct.Relation.html#method.select
    #[inline]
    pub fn sigma<P: Into<Predicate>>(&self, predicate: P) -> Result<Relation, Error> {
        self.select(predicate)
    }
}
