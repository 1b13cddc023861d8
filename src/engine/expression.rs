use std::str::FromStr;

use crate::{
    complex::Complex,
    engine::{
        SyntaxResult, builder,
        lexer::{tokenize, tokenize_utf16},
        phrase::{Bindings, EvalResult, Phrase},
        resolver, shunting_yard,
        token::Token,
    },
    error::SyntaxError,
};

/// A parsed mathematical expression over the complex numbers.
///
/// The parse tree is built once, at construction. It can then be evaluated any
/// number of times, with variables rebound in between.
///
/// # Example
/// ```
/// use complexpr::{Bindings, Complex, Expression};
///
/// let mut expression = Expression::new("2 - 3x").unwrap();
/// assert!(expression.has_variable("x"));
/// assert!(expression.has_unset_variables());
///
/// expression.set_variable("x", Complex::new(0.0, 2.0));
/// assert_eq!(expression.value().unwrap(), Complex::new(2.0, -6.0));
///
/// let bindings = Bindings::from([("x".to_string(), Complex::from(1))]);
/// assert_eq!(expression.evaluate(&bindings).unwrap(), Complex::from(-1));
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    phrase: Phrase,
}

impl Expression {
    /// Parses an expression string.
    ///
    /// # Errors
    /// Any [`SyntaxError`] raised while tokenizing, resolving, reordering or
    /// building the tree.
    pub fn new(source: &str) -> SyntaxResult<Self> {
        Self::from_tokens(tokenize(source)?)
    }

    /// Parses an expression given as UTF-16 code units.
    ///
    /// # Errors
    /// As [`Expression::new`], plus the unpaired surrogate errors.
    pub fn from_utf16(units: &[u16]) -> SyntaxResult<Self> {
        Self::from_tokens(tokenize_utf16(units)?)
    }

    fn from_tokens(tokens: Vec<Token>) -> SyntaxResult<Self> {
        let infix = resolver::resolve(tokens)?;
        let postfix = shunting_yard::to_postfix(&infix)?;
        let phrase = builder::build(&postfix)?;

        Ok(Self { phrase })
    }

    /// Evaluates the expression.
    ///
    /// Values in `bindings` take priority over values stored with
    /// [`Expression::set_variable`].
    ///
    /// # Errors
    /// `UndefinedVariable` when a variable has no value from either source.
    pub fn evaluate(&self, bindings: &Bindings) -> EvalResult<Complex> {
        self.phrase.evaluate(bindings)
    }

    /// Evaluates the expression with stored variable values only.
    ///
    /// # Errors
    /// `UndefinedVariable` when a variable has no stored value.
    pub fn value(&self) -> EvalResult<Complex> {
        self.phrase.value()
    }

    /// Stores a value for every occurrence of the variable `name`.
    pub fn set_variable(&mut self, name: &str, value: impl Into<Complex>) {
        self.phrase.set_variable(name, value.into());
    }

    /// Whether the variable `name` occurs in the expression.
    #[must_use]
    pub fn has_variable(&self, name: &str) -> bool {
        self.phrase.has_variable(name)
    }

    /// Whether some variable in the expression has no stored value.
    #[must_use]
    pub fn has_unset_variables(&self) -> bool {
        self.phrase.has_unset_variables()
    }

    /// The root of the parse tree.
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }
}

impl FromStr for Expression {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
