#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning a string into an
/// expression.
pub enum SyntaxError {
    /// The expression, or a parenthesized subexpression, has no content.
    EmptyExpression,
    /// More than one operand was left over once the expression was built.
    UnexpectedExpression,
    /// A comma appeared outside of a function argument list.
    MisplacedComma,
    /// An opening `(` was never closed.
    TooManyOpenParentheses,
    /// A closing `)` had no opening partner.
    TooManyCloseParentheses,
    /// A circumfix operator was closed by the wrong glyph, or never matched.
    MismatchedCircumfix,
    /// An infix operator was the last token of the expression.
    MissingRightHandOperand,
    /// A binary function was not immediately followed by `(`.
    BinaryFunctionWithoutParentheses,
    /// A function did not find enough operands.
    TooFewArguments {
        /// The terminal of the function.
        function: String,
    },
    /// A function phrase was given a child count different from its arity.
    ImproperArgumentCount,
    /// A UTF-16 low surrogate was found on its own.
    LowSurrogateWithoutHigh,
    /// A UTF-16 high surrogate was not followed by a low surrogate.
    HighSurrogateWithoutLow,
    /// The lexer could not classify a character.
    UnexpectedCharacter {
        /// The offending input.
        character: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Empty expression"),
            Self::UnexpectedExpression => write!(f, "Unexpected expression"),
            Self::MisplacedComma => write!(f, "Misplaced comma"),
            Self::TooManyOpenParentheses => write!(f, "Too many open parentheses"),
            Self::TooManyCloseParentheses => write!(f, "Too many close parentheses"),
            Self::MismatchedCircumfix => write!(f, "Mismatched circumfix operator"),
            Self::MissingRightHandOperand => write!(f, "Missing right hand operand"),
            Self::BinaryFunctionWithoutParentheses => {
                write!(f, "Binary functions must use parentheses")
            },
            Self::TooFewArguments { function } => {
                write!(f, "Too few arguments for function {function}")
            },
            Self::ImproperArgumentCount => write!(f, "Improper number of arguments"),
            Self::LowSurrogateWithoutHigh => write!(f,
                                                    "Encountered low surrogate without a corresponding high surrogate"),
            Self::HighSurrogateWithoutLow => write!(f,
                                                    "Encountered high surrogate without a corresponding low surrogate"),
            Self::UnexpectedCharacter { character } => {
                write!(f, "Unexpected character '{character}'")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
