/// Syntax errors.
///
/// Defines every way an expression string can fail to become an expression:
/// malformed circumfix operators, misplaced commas, missing operands, wrong
/// function arity, empty (sub)expressions and unpaired UTF-16 surrogates.
pub mod syntax_error;
/// Evaluation errors.
///
/// Raised lazily while walking a parse tree, when a variable is reached that
/// has no value.
pub mod evaluation_error;
/// Conversion errors for number-like inputs.
///
/// Raised when a dynamic value (a slice or a string) cannot be read as a
/// real scalar or a real/imaginary pair.
pub mod type_conversion_error;

pub use evaluation_error::EvaluationError;
pub use syntax_error::SyntaxError;
pub use type_conversion_error::TypeConversionError;
