use std::collections::HashMap;

use crate::{
    complex::Complex,
    engine::{
        SyntaxResult,
        known::{BinaryFn, UnaryFn},
    },
    error::{EvaluationError, SyntaxError},
};

/// Variable values supplied at evaluation time, keyed by symbol.
pub type Bindings = HashMap<String, Complex>;

/// Result of evaluating a parse tree.
pub type EvalResult<T> = Result<T, EvaluationError>;

/// A known function together with the terminal it was written as.
#[derive(Debug, Clone)]
pub enum Function {
    /// A one-argument function.
    Unary {
        /// Terminal of the function, such as `sin` or `-`.
        name: String,
        /// The implementation.
        func: UnaryFn,
    },
    /// A two-argument function.
    Binary {
        /// Terminal of the function, such as `pow` or `+`.
        name: String,
        /// The implementation.
        func: BinaryFn,
    },
}

impl Function {
    /// Number of arguments the function takes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Unary { .. } => 1,
            Self::Binary { .. } => 2,
        }
    }

    /// Terminal the function was written as.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Unary { name, .. } | Self::Binary { name, .. } => name,
        }
    }
}

/// A function applied to exactly as many arguments as its arity.
///
/// The fields are private, so the arity checked by [`Phrase::function`]
/// cannot change after construction.
#[derive(Debug, Clone)]
pub struct Application {
    function: Function,
    children: Vec<Phrase>,
}

impl Application {
    /// The applied function.
    #[must_use]
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// The arguments, left to right.
    #[must_use]
    pub fn children(&self) -> &[Phrase] {
        &self.children
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone)]
pub enum Phrase {
    /// A literal or a known constant.
    Number(Complex),
    /// A free variable, with the value assigned through
    /// [`Phrase::set_variable`], if any.
    Variable {
        /// Name of the variable.
        symbol: String,
        /// Stored value.
        value:  Option<Complex>,
    },
    /// A function application, built through [`Phrase::function`].
    Function(Application),
}

impl Phrase {
    /// Builds a function application.
    ///
    /// # Errors
    /// `ImproperArgumentCount` when the number of children differs from the
    /// function's arity.
    ///
    /// # Example
    /// ```
    /// use complexpr::{
    ///     Complex,
    ///     engine::{known, phrase::{Function, Phrase}},
    /// };
    ///
    /// let negate = Function::Unary { name: "-".to_string(),
    ///                                func: known::unary_function("-").unwrap() };
    /// let phrase = Phrase::function(negate.clone(), vec![Phrase::Number(Complex::from(2))]).unwrap();
    /// assert_eq!(phrase.value().unwrap(), Complex::new(-2.0, -0.0));
    ///
    /// assert!(Phrase::function(negate, vec![]).is_err());
    /// ```
    pub fn function(function: Function, children: Vec<Self>) -> SyntaxResult<Self> {
        if children.len() != function.arity() {
            return Err(SyntaxError::ImproperArgumentCount);
        }

        Ok(Self::Function(Application { function, children }))
    }

    /// Evaluates the tree.
    ///
    /// A variable takes its value from `bindings` when present there, and from
    /// the value stored by [`Phrase::set_variable`] otherwise.
    ///
    /// # Errors
    /// `UndefinedVariable` when a variable that is reached has neither.
    pub fn evaluate(&self, bindings: &Bindings) -> EvalResult<Complex> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Variable { symbol, value } => {
                bindings.get(symbol)
                        .copied()
                        .or(*value)
                        .ok_or_else(|| EvaluationError::UndefinedVariable { name: symbol.clone() })
            },
            Self::Function(application) => match (application.function(), application.children()) {
                (Function::Unary { func, .. }, [u]) => Ok(func(u.evaluate(bindings)?)),
                (Function::Binary { func, .. }, [u, v]) => {
                    Ok(func(u.evaluate(bindings)?, v.evaluate(bindings)?))
                },
                _ => unreachable!("arity is checked by Phrase::function"),
            },
        }
    }

    /// Evaluates the tree using stored variable values only.
    pub fn value(&self) -> EvalResult<Complex> {
        self.evaluate(&Bindings::new())
    }

    /// Whether any variable in the tree lacks a stored value.
    #[must_use]
    pub fn has_unset_variables(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable { value, .. } => value.is_none(),
            Self::Function(application) => {
                application.children().iter().any(Self::has_unset_variables)
            },
        }
    }

    /// Whether the variable `name` occurs anywhere in the tree.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Variable { symbol, .. } => symbol == name,
            Self::Function(application) => {
                application.children().iter().any(|c| c.has_variable(name))
            },
        }
    }

    /// Stores `new_value` in every occurrence of the variable `name`.
    ///
    /// Does nothing when the variable does not occur.
    pub fn set_variable(&mut self, name: &str, new_value: Complex) {
        match self {
            Self::Number(_) => {},
            Self::Variable { symbol, value } => {
                if symbol == name {
                    *value = Some(new_value);
                }
            },
            Self::Function(Application { children, .. }) => {
                for child in children {
                    child.set_variable(name, new_value);
                }
            },
        }
    }
}
