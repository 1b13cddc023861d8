use logos::Logos;

use crate::{
    engine::{
        SyntaxResult, known,
        token::{Token, TokenKind},
    },
    error::SyntaxError,
};

/// A lexical unit of the source string.
///
/// Every codepoint is covered by exactly one pattern, so no two patterns can
/// match the same input.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// An embedded NUL. Everything from here on is ignored.
    #[token("\0")]
    Nul,
    /// One whitespace character, the byte order mark U+FEFF included.
    #[regex(r"\s")]
    #[token("\u{FEFF}")]
    Space,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `⌊`, `⌈` or `[`, each implying a unary function.
    #[token("\u{230A}")]
    #[token("\u{2308}")]
    #[token("[")]
    OpenImplied,
    /// `)`, `⌋`, `⌉` or `]`.
    #[token(")")]
    #[token("\u{230B}")]
    #[token("\u{2309}")]
    #[token("]")]
    Close,
    /// `,` or invisible separator U+2063.
    #[token(",")]
    #[token("\u{2063}")]
    Comma,
    /// `+` or invisible plus U+2064.
    #[token("+")]
    #[token("\u{2064}")]
    Plus,
    /// `-` or minus sign U+2212.
    #[token("-")]
    #[token("\u{2212}")]
    Minus,
    /// `*`, dot operator U+22C5 or multiplication sign U+00D7.
    #[token("*")]
    #[token("\u{22C5}")]
    #[token("\u{00D7}")]
    Times,
    /// Invisible times U+2062.
    #[token("\u{2062}")]
    ImplicitTimes,
    /// `/`, division sign U+00F7, fraction slash U+2044 or division slash
    /// U+2215.
    #[token("/")]
    #[token("\u{00F7}")]
    #[token("\u{2044}")]
    #[token("\u{2215}")]
    Divide,
    /// Numeric literals such as `13` or `13.03`.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// ASCII letters, plus the digits directly following them, as in `log10`.
    #[regex(r"[A-Za-z]+[0-9]*")]
    Word,
    /// Any other single codepoint.
    #[regex(
        r"[^\s\x{FEFF}\x00(\[\x{230A}\x{2308})\]\x{230B}\x{2309},\x{2063}+\x{2064}\-\x{2212}*\x{22C5}\x{00D7}\x{2062}/\x{00F7}\x{2044}\x{2215}A-Za-z0-9]"
    )]
    Glyph,
}

/// Classifies a word or glyph by looking it up in the known tables.
///
/// # Returns
/// A `Number` token for known constants, a function token for known
/// functions, and a `Symbol` token otherwise.
fn classify(terminal: &str) -> Token {
    let kind = if known::constant(terminal).is_some() {
        TokenKind::Number
    } else if known::unary_function(terminal).is_some() {
        TokenKind::UnaryFunction
    } else if known::binary_function(terminal).is_some() {
        TokenKind::BinaryFunction
    } else {
        TokenKind::Symbol
    };

    Token::new(kind, terminal)
}

/// Tokenizes an expression string.
///
/// Tokenization stops silently at the first NUL character.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The tokens in source order, whitespace included.
///
/// # Example
/// ```
/// use complexpr::engine::{lexer::tokenize, token::TokenKind};
///
/// let kinds = tokenize("2x + log10(y)").unwrap()
///                                     .into_iter()
///                                     .map(|t| t.kind)
///                                     .collect::<Vec<_>>();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Symbol,
///             TokenKind::Space,
///             TokenKind::Plus,
///             TokenKind::Space,
///             TokenKind::UnaryFunction,
///             TokenKind::OpenParen,
///             TokenKind::Symbol,
///             TokenKind::CloseParen]);
/// ```
pub fn tokenize(source: &str) -> SyntaxResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let terminal = lexer.slice();
        let Ok(lexeme) = lexeme else {
            return Err(SyntaxError::UnexpectedCharacter { character: terminal.to_string() });
        };

        match lexeme {
            Lexeme::Nul => break,
            Lexeme::Space => tokens.push(Token::new(TokenKind::Space, " ")),
            Lexeme::OpenParen => tokens.push(Token::new(TokenKind::OpenParen, terminal)),
            Lexeme::OpenImplied => {
                if let Some(function) = known::circumfix(terminal).and_then(|c| c.function) {
                    tokens.push(Token::new(TokenKind::UnaryFunction, function));
                }
                tokens.push(Token::new(TokenKind::OpenParen, terminal));
            },
            Lexeme::Close => tokens.push(Token::new(TokenKind::CloseParen, terminal)),
            Lexeme::Comma => tokens.push(Token::new(TokenKind::Comma, ",")),
            Lexeme::Plus => tokens.push(Token::new(TokenKind::Plus, "+")),
            Lexeme::Minus => tokens.push(Token::new(TokenKind::Minus, "-")),
            Lexeme::Times => tokens.push(Token::new(TokenKind::Times, "*")),
            Lexeme::ImplicitTimes => tokens.push(Token::new(TokenKind::ImplicitTimes, "*")),
            Lexeme::Divide => tokens.push(Token::new(TokenKind::Divide, "/")),
            Lexeme::Number => tokens.push(Token::new(TokenKind::Number, terminal)),
            Lexeme::Word | Lexeme::Glyph => tokens.push(classify(terminal)),
        }
    }

    Ok(tokens)
}

/// Tokenizes an expression given as UTF-16 code units.
///
/// The input is cut at the first `0` unit. A surrogate pair counts as one
/// codepoint.
///
/// # Errors
/// - `LowSurrogateWithoutHigh` for a low surrogate with no high surrogate
///   before it.
/// - `HighSurrogateWithoutLow` for a high surrogate not followed by a low one.
///
/// # Example
/// ```
/// use complexpr::{engine::lexer::tokenize_utf16, error::SyntaxError};
///
/// let rocket = "🚀".encode_utf16().collect::<Vec<_>>();
/// assert_eq!(tokenize_utf16(&rocket).unwrap()[0].terminal, "🚀");
///
/// assert_eq!(tokenize_utf16(&[0xDC00]), Err(SyntaxError::LowSurrogateWithoutHigh));
/// assert_eq!(tokenize_utf16(&[0xD800, 0x0032]), Err(SyntaxError::HighSurrogateWithoutLow));
/// ```
pub fn tokenize_utf16(units: &[u16]) -> SyntaxResult<Vec<Token>> {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());

    let source = char::decode_utf16(units[..end].iter().copied())
        .map(|decoded| {
            decoded.map_err(|e| {
                       if (0xDC00..=0xDFFF).contains(&e.unpaired_surrogate()) {
                           SyntaxError::LowSurrogateWithoutHigh
                       } else {
                           SyntaxError::HighSurrogateWithoutLow
                       }
                   })
        })
        .collect::<SyntaxResult<String>>()?;

    tokenize(&source)
}
