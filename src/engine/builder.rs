use crate::{
    engine::{
        SyntaxResult, known,
        phrase::{Function, Phrase},
        token::{Token, TokenKind},
    },
    error::SyntaxError,
};

/// Reads the value of a number token: a known constant or a decimal literal.
fn number(terminal: &str) -> SyntaxResult<Phrase> {
    let value = known::constant(terminal).or_else(|| terminal.parse::<f64>().ok().map(Into::into))
                                         .ok_or(SyntaxError::UnexpectedExpression)?;

    Ok(Phrase::Number(value))
}

/// Looks up the function named by a function token.
fn lookup_function(token: &Token) -> Option<Function> {
    let name = token.terminal.clone();

    match token.kind {
        TokenKind::UnaryFunction => {
            known::unary_function(&token.terminal).map(|func| Function::Unary { name, func })
        },
        TokenKind::BinaryFunction => {
            known::binary_function(&token.terminal).map(|func| Function::Binary { name, func })
        },
        _ => None,
    }
}

/// Builds a parse tree from postfix tokens.
///
/// # Errors
/// - `TooFewArguments`: a function with fewer operands than it needs.
/// - `EmptyExpression`: no operand left at the end.
/// - `UnexpectedExpression`: more than one operand left at the end, or a
///   token that cannot appear in postfix output.
///
/// # Example
/// ```
/// use complexpr::{
///     Complex,
///     engine::{builder::build, lexer::tokenize, resolver::resolve, shunting_yard::to_postfix},
/// };
///
/// let postfix = to_postfix(&resolve(tokenize("pow(2, 3)").unwrap()).unwrap()).unwrap();
/// let phrase = build(&postfix).unwrap();
/// assert!((phrase.value().unwrap().real - 8.0).abs() < 1e-12);
/// ```
pub fn build(tokens: &[Token]) -> SyntaxResult<Phrase> {
    let mut stack: Vec<Phrase> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => stack.push(number(&token.terminal)?),
            TokenKind::Symbol => stack.push(Phrase::Variable { symbol: token.terminal.clone(),
                                                               value:  None, }),
            TokenKind::UnaryFunction | TokenKind::BinaryFunction => {
                let function = lookup_function(token).ok_or(SyntaxError::UnexpectedExpression)?;
                let arity = function.arity();

                if stack.len() < arity {
                    return Err(SyntaxError::TooFewArguments { function: token.terminal.clone() });
                }

                let children = stack.split_off(stack.len() - arity);
                stack.push(Phrase::function(function, children)?);
            },
            _ => return Err(SyntaxError::UnexpectedExpression),
        }
    }

    match stack.len() {
        0 => Err(SyntaxError::EmptyExpression),
        1 => stack.pop().ok_or(SyntaxError::EmptyExpression),
        _ => Err(SyntaxError::UnexpectedExpression),
    }
}
