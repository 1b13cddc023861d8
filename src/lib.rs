//! # complexpr
//!
//! complexpr parses human-written mathematical expressions and evaluates them
//! over the complex numbers. Expressions may use ASCII or Unicode operator
//! glyphs, implicit multiplication, circumfix brackets such as `⌊x⌋`, unary and
//! binary functions, and free variables.
//!
//! ```
//! use complexpr::{Complex, Expression};
//!
//! let expression: Expression = "real 3 + 5i".parse().unwrap();
//! assert_eq!(expression.value().unwrap(), Complex::new(3.0, 5.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The numeric domain of the evaluator.
///
/// This module declares the `Complex` type and the library of pure functions
/// over it.
///
/// # Responsibilities
/// - Defines complex arithmetic with plain IEEE-754 semantics.
/// - Provides transcendental, trigonometric and rounding functions along their
///   principal branches.
/// - Converts number-like inputs into `Complex` values.
pub mod complex;
/// The expression engine.
///
/// This module turns an expression string into an evaluable parse tree and
/// evaluates that tree.
///
/// # Responsibilities
/// - Tokenizes the source, including multi-codepoint symbols.
/// - Resolves implicit multiplication and prefix signs.
/// - Reorders tokens with the Shunting-Yard algorithm.
/// - Builds and evaluates the parse tree, with variable binding.
pub mod engine;
/// Provides the error types for parsing, evaluation and conversion.
///
/// Every error carries a human-readable message through its `Display`
/// implementation.
pub mod error;

pub use complex::Complex;
pub use engine::{expression::Expression, phrase::Bindings};

/// Parses and evaluates an expression in one step.
///
/// # Errors
/// Returns an error if the expression cannot be parsed, or if it refers to a
/// variable that `bindings` does not define.
///
/// # Examples
/// ```
/// use complexpr::{Bindings, Complex, evaluate};
///
/// let result = evaluate("(5 + 3) * 2", &Bindings::new()).unwrap();
/// assert_eq!(result, Complex::from(16));
///
/// // `x` is not bound.
/// assert!(evaluate("2x", &Bindings::new()).is_err());
/// ```
pub fn evaluate(source: &str, bindings: &Bindings) -> Result<Complex, Box<dyn std::error::Error>> {
    let expression = Expression::new(source)?;

    Ok(expression.evaluate(bindings)?)
}
