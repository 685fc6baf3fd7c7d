/*! Implements [`Predicate`], the selection criterion accepted by
[`Relation::select`].

[`Predicate`]: ./enum.Predicate.html
[`Relation::select`]: ./struct.Relation.html#method.select
*/

use crate::{errors::Error, tuple::Tuple};
use std::{cell::RefCell, fmt, rc::Rc};

/// Is the capability contract for selection collaborators: anything that
/// can decide, for a given tuple, whether the tuple satisfies it. A
/// symbolic-expression evaluator substituting the tuple's (name, value)
/// pairs is one accepted form; the engine only relies on this contract.
pub trait Evaluate {
    /// Returns true if `tuple` satisfies the receiver. An implementation
    /// that cannot reduce itself to a boolean over `tuple` fails with
    /// [`Error::UnsupportedPredicate`].
    ///
    /// [`Error::UnsupportedPredicate`]: ./enum.Error.html#variant.UnsupportedPredicate
    fn evaluate(&self, tuple: &Tuple) -> Result<bool, Error>;
}

/// Is a selection criterion, dispatched explicitly once rather than by
/// runtime type inspection. `true` and `None` convert to `Identity`,
/// `false` to `Contradiction`; functions and [`Evaluate`] capabilities
/// wrap into `Evaluable`.
///
/// [`Evaluate`]: ./trait.Evaluate.html
#[derive(Clone)]
pub enum Predicate {
    /// Selects every tuple: the empty set of restrictions.
    Identity,
    /// Selects no tuple.
    Contradiction,
    /// Keeps exactly the tuples for which the wrapped capability returns
    /// true.
    Evaluable(Rc<RefCell<dyn FnMut(&Tuple) -> Result<bool, Error>>>),
}

impl Predicate {
    /// Wraps a fallible evaluation function.
    pub fn evaluable<F>(function: F) -> Self
    where
        F: FnMut(&Tuple) -> Result<bool, Error> + 'static,
    {
        Self::Evaluable(Rc::new(RefCell::new(function)))
    }

    /// Wraps a plain boolean function over tuples.
    pub fn from_fn<F>(mut function: F) -> Self
    where
        F: FnMut(&Tuple) -> bool + 'static,
    {
        Self::evaluable(move |tuple| Ok(function(tuple)))
    }

    /// Wraps an external [`Evaluate`] capability.
    ///
    /// [`Evaluate`]: ./trait.Evaluate.html
    pub fn capability<E>(expression: E) -> Self
    where
        E: Evaluate + 'static,
    {
        Self::evaluable(move |tuple| expression.evaluate(tuple))
    }
}

impl From<bool> for Predicate {
    fn from(value: bool) -> Self {
        if value {
            Self::Identity
        } else {
            Self::Contradiction
        }
    }
}

impl<P: Into<Predicate>> From<Option<P>> for Predicate {
    fn from(value: Option<P>) -> Self {
        match value {
            None => Self::Identity,
            Some(predicate) => predicate.into(),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Predicate::Identity => write!(f, "Identity"),
            Predicate::Contradiction => write!(f, "Contradiction"),
            Predicate::Evaluable(_) => write!(f, "Evaluable(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert!(matches!(Predicate::from(true), Predicate::Identity));
        assert!(matches!(Predicate::from(false), Predicate::Contradiction));
    }

    #[test]
    fn test_from_option() {
        assert!(matches!(
            Predicate::from(None::<Predicate>),
            Predicate::Identity
        ));
        assert!(matches!(
            Predicate::from(Some(false)),
            Predicate::Contradiction
        ));
    }

    #[test]
    fn test_from_fn() {
        let predicate = Predicate::from_fn(|tuple| tuple.is_empty());
        if let Predicate::Evaluable(function) = predicate {
            let mut guard = function.borrow_mut();
            assert_eq!(Ok(true), (&mut *guard)(Tuple::empty()));
        } else {
            panic!("expected an evaluable predicate");
        }
    }

    #[test]
    fn test_capability() {
        struct Never;
        impl Evaluate for Never {
            fn evaluate(&self, _: &Tuple) -> Result<bool, Error> {
                Err(Error::UnsupportedPredicate {
                    reason: "does not reduce to a boolean".to_string(),
                })
            }
        }

        if let Predicate::Evaluable(function) = Predicate::capability(Never) {
            let mut guard = function.borrow_mut();
            assert!((&mut *guard)(Tuple::empty()).is_err());
        } else {
            panic!("expected an evaluable predicate");
        }
    }
}
