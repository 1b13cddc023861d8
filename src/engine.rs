/// Token types shared by every stage of the pipeline.
pub mod token;
/// Turns a source string into a sequence of tokens.
///
/// The lexer is built with `logos` and classifies runs of text into numbers,
/// words, operator glyphs, circumfix brackets and single-codepoint symbols.
/// Words and symbols are then looked up in the known tables.
pub mod lexer;
/// Static tables of known constants, unary functions, binary functions and
/// circumfix bracket pairs.
pub mod known;
/// Resolves elements that are hidden or ambiguous after tokenization.
///
/// Removes whitespace, turns prefix `-` into negation, drops prefix `+` and
/// inserts the invisible multiplication implied by juxtaposition.
pub mod resolver;
/// Converts an infix token stream to postfix order with the Shunting-Yard
/// algorithm.
pub mod shunting_yard;
/// The parse tree: numbers, variables and function applications.
pub mod phrase;
/// Builds a parse tree from postfix tokens.
pub mod builder;
/// The public `Expression` type tying the pipeline together.
pub mod expression;

use crate::error::SyntaxError;

/// Result of any stage that turns text into a parse tree.
pub type SyntaxResult<T> = Result<T, SyntaxError>;
