/// The closed set of token kinds produced and consumed by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single whitespace character.
    Space,
    /// A free variable.
    Symbol,
    /// A numeric literal or a known constant.
    Number,
    /// `(` or the opening glyph of another circumfix pair.
    OpenParen,
    /// `)` or the closing glyph of another circumfix pair.
    CloseParen,
    /// Argument separator.
    Comma,
    /// Infix `+`.
    Plus,
    /// Infix `-`.
    Minus,
    /// Explicit infix multiplication.
    Times,
    /// Multiplication implied by juxtaposition.
    ImplicitTimes,
    /// Infix division.
    Divide,
    /// A one-argument function, including prefix negation.
    UnaryFunction,
    /// A two-argument function, including operators after conversion.
    BinaryFunction,
}

impl TokenKind {
    /// Whether this kind is an infix operator.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Times | Self::ImplicitTimes | Self::Divide)
    }

    /// Whether this kind is a unary or binary function.
    #[must_use]
    pub const fn is_function(self) -> bool {
        matches!(self, Self::UnaryFunction | Self::BinaryFunction)
    }

    /// Whether this kind is a value (a number or a free variable).
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Symbol | Self::Number)
    }

    /// Whether this kind closes the current scope.
    #[must_use]
    pub const fn is_scope_ending(self) -> bool {
        matches!(self, Self::CloseParen | Self::Comma)
    }

    /// Whether a `+` or `-` following this kind must be a prefix sign.
    #[must_use]
    pub const fn forces_unary(self) -> bool {
        matches!(self,
                 Self::OpenParen
                 | Self::Comma
                 | Self::Plus
                 | Self::Minus
                 | Self::Times
                 | Self::Divide)
    }

    /// Whether this kind, placed right after a value, implies a multiplication.
    #[must_use]
    pub const fn implies_multiplication(self) -> bool {
        matches!(self,
                 Self::OpenParen
                 | Self::Number
                 | Self::Symbol
                 | Self::UnaryFunction
                 | Self::BinaryFunction)
    }
}

/// A token: its kind plus the terminal text it stands for.
///
/// Operators keep their canonical terminal (`+`, `-`, `*`, `/`) whatever
/// glyph they were written with. Brackets keep the glyph they were written
/// with so that pairs can be checked later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of the token.
    pub kind:     TokenKind,
    /// The text the token was extracted from.
    pub terminal: String,
}

impl Token {
    /// Constructs a token.
    ///
    /// # Example
    /// ```
    /// use complexpr::engine::token::{Token, TokenKind};
    /// let token = Token::new(TokenKind::Number, "2");
    /// assert_eq!(token.terminal, "2");
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, terminal: impl Into<String>) -> Self {
        Self { kind,
               terminal: terminal.into() }
    }

    /// Returns the same operator as a binary function token.
    #[must_use]
    pub fn into_binary_function(self) -> Self {
        if self.kind.is_operator() {
            Self { kind: TokenKind::BinaryFunction,
                   ..self }
        } else {
            self
        }
    }
}
