use crate::{
    engine::{
        SyntaxResult,
        token::{Token, TokenKind},
    },
    error::SyntaxError,
};

/// Resolves hidden and ambiguous elements of a raw token stream.
///
/// - Whitespace is dropped.
/// - A `+` or `-` at the start of the stream, or after an opening bracket, a
///   comma or another operator, is a prefix sign: `-` becomes the unary
///   function `-` and `+` is dropped.
/// - An invisible multiplication is inserted after a closing bracket, number
///   or symbol when the next raw token starts a new operand.
///
/// Look-ahead always inspects the raw stream, so in `2 3` the space hides the
/// juxtaposition and no multiplication is inserted.
///
/// # Errors
/// `MisplacedComma` when a comma is first, directly follows an opening
/// bracket or is directly followed by a closing bracket.
///
/// # Example
/// ```
/// use complexpr::engine::{lexer::tokenize, resolver::resolve, token::TokenKind};
///
/// let resolved = resolve(tokenize("-2x").unwrap()).unwrap();
/// let kinds = resolved.iter().map(|t| t.kind).collect::<Vec<_>>();
/// assert_eq!(kinds,
///            [TokenKind::UnaryFunction,
///             TokenKind::Number,
///             TokenKind::ImplicitTimes,
///             TokenKind::Symbol]);
/// ```
pub fn resolve(tokens: Vec<Token>) -> SyntaxResult<Vec<Token>> {
    let mut resolved: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        let next_kind = iter.peek().map(|t| t.kind);

        match token.kind {
            TokenKind::Space => {},
            TokenKind::CloseParen | TokenKind::Number | TokenKind::Symbol => {
                resolved.push(token);

                if next_kind.is_some_and(TokenKind::implies_multiplication) {
                    resolved.push(Token::new(TokenKind::ImplicitTimes, "*"));
                }
            },
            TokenKind::Comma => {
                let previous_kind = resolved.last().map(|t| t.kind);
                if previous_kind.is_none_or(|k| k == TokenKind::OpenParen)
                   || next_kind == Some(TokenKind::CloseParen)
                {
                    return Err(SyntaxError::MisplacedComma);
                }

                resolved.push(token);
            },
            TokenKind::Plus | TokenKind::Minus => {
                let previous_kind = resolved.last().map(|t| t.kind);
                if previous_kind.is_none_or(TokenKind::forces_unary) {
                    if token.kind == TokenKind::Minus {
                        resolved.push(Token { kind: TokenKind::UnaryFunction,
                                              ..token });
                    }
                } else {
                    resolved.push(token);
                }
            },
            TokenKind::OpenParen
            | TokenKind::Times
            | TokenKind::ImplicitTimes
            | TokenKind::Divide
            | TokenKind::UnaryFunction
            | TokenKind::BinaryFunction => resolved.push(token),
        }
    }

    Ok(resolved)
}
