use crate::{
    engine::{
        SyntaxResult, known,
        token::{Token, TokenKind},
    },
    error::SyntaxError,
};

/// Whether the `left` token binds no tighter than `right`.
///
/// While this holds for an incoming operator (`left`) against the top of the
/// operator stack (`right`), the top is popped.
///
/// - Invisible multiplication binds tightest of all operators.
/// - Functions and values bind tighter than visible operators.
/// - `*` and `/` bind tighter than `+` and `-`.
/// - Operators of equal precedence associate to the left.
fn lower_or_equal(left: TokenKind, right: TokenKind) -> bool {
    right == TokenKind::ImplicitTimes
    || (!left.is_operator() && !right.is_operator())
    || (left.is_operator() && left != TokenKind::ImplicitTimes && !right.is_operator())
    || matches!(right, TokenKind::Times | TokenKind::Divide)
    || matches!(left, TokenKind::Plus | TokenKind::Minus)
}

/// Converts a resolved infix token stream to postfix order.
///
/// Values go straight to the output. Operators are emitted as binary function
/// tokens with the same terminal. A function stays on the operator stack until
/// its parenthesized argument list closes, or until an operator of lower
/// precedence arrives.
///
/// # Errors
/// - `MisplacedComma`: a comma outside any bracket.
/// - `TooManyCloseParentheses`: a `)` with no opener.
/// - `TooManyOpenParentheses`: a `(` that is never closed.
/// - `MismatchedCircumfix`: brackets that do not pair up.
/// - `MissingRightHandOperand`: an operator at the very end.
/// - `BinaryFunctionWithoutParentheses`: a binary function not followed by
///   `(`.
/// - `EmptyExpression`: nothing to output.
/// - `UnexpectedExpression`: a token the resolver would have removed, such as
///   whitespace.
///
/// # Example
/// ```
/// use complexpr::engine::{lexer::tokenize, resolver::resolve, shunting_yard::to_postfix};
///
/// let infix = resolve(tokenize("5 + 3 * 2").unwrap()).unwrap();
/// let postfix = to_postfix(&infix).unwrap();
/// let terminals = postfix.iter().map(|t| t.terminal.as_str()).collect::<Vec<_>>();
/// assert_eq!(terminals, ["5", "3", "2", "*", "+"]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> SyntaxResult<Vec<Token>> {
    let mut ops: Vec<Token> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1);

        match token.kind {
            kind if kind.is_value() => output.push(token.clone()),
            TokenKind::OpenParen | TokenKind::UnaryFunction => ops.push(token.clone()),
            kind if kind.is_scope_ending() => close_scope(token, &mut ops, &mut output)?,
            kind if kind.is_operator() => {
                if next.is_none() {
                    return Err(SyntaxError::MissingRightHandOperand);
                }

                while let Some(top) = ops.last()
                      && lower_or_equal(kind, top.kind)
                      && (top.kind.is_operator() || top.kind.is_function())
                {
                    if let Some(top) = ops.pop() {
                        output.push(top.into_binary_function());
                    }
                }

                ops.push(token.clone());
            },
            TokenKind::BinaryFunction => {
                if next.is_none_or(|t| t.kind != TokenKind::OpenParen) {
                    return Err(SyntaxError::BinaryFunctionWithoutParentheses);
                }

                ops.push(token.clone());
            },
            _ => return Err(SyntaxError::UnexpectedExpression),
        }
    }

    while let Some(top) = ops.pop() {
        if top.kind == TokenKind::OpenParen {
            return Err(if top.terminal == "(" {
                           SyntaxError::TooManyOpenParentheses
                       } else {
                           SyntaxError::MismatchedCircumfix
                       });
        }

        output.push(top.into_binary_function());
    }

    if output.is_empty() {
        return Err(SyntaxError::EmptyExpression);
    }

    Ok(output)
}

/// Handles a `)` or `,` by popping everything back to the innermost opener.
///
/// For a closing bracket the opener is checked against it and discarded, and a
/// function waiting on the bracket is emitted.
fn close_scope(token: &Token, ops: &mut Vec<Token>, output: &mut Vec<Token>) -> SyntaxResult<()> {
    while let Some(top) = ops.pop_if(|top| top.kind != TokenKind::OpenParen) {
        output.push(top.into_binary_function());
    }

    let Some(open) = ops.last() else {
        return Err(match token.kind {
                       TokenKind::Comma => SyntaxError::MisplacedComma,
                       _ if token.terminal == ")" => SyntaxError::TooManyCloseParentheses,
                       _ => SyntaxError::MismatchedCircumfix,
                   });
    };

    if token.kind == TokenKind::CloseParen {
        if !known::brackets_match(&open.terminal, &token.terminal) {
            return Err(SyntaxError::MismatchedCircumfix);
        }

        ops.pop();

        if let Some(function) = ops.pop_if(|top| top.kind.is_function()) {
            output.push(function);
        }
    }

    Ok(())
}
