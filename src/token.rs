use std::fmt;

/// Source location of a token's first character (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One of the six reserved words (`if`, `then`, ...).
    Keyword,
    /// Letter-only word shorter than ten characters.
    Identifier,
    /// Run of decimal digits.
    Constant,
    /// `=`, `>=`, `==`, `+`, `/`, `%` or `++`.
    Operator,
    /// `"` or `;`.
    Delimiter,
    /// Illegal lexeme, or the end-of-input sentinel when the text is empty.
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Constant => "constant",
            Self::Operator => "operator",
            Self::Delimiter => "delimiter",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Classifies an illegal lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Letter run immediately followed by a digit run (`x1`).
    IllegalIdentifier,
    /// Letter-only word of ten or more characters.
    IdentifierTooLong,
    /// Digit run immediately followed by letters (`123a`).
    IllegalConstant,
    /// Lone `>`, lone `<`, or `<=`.
    IllegalOperator,
    /// Character that cannot start any token.
    IllegalCharacter,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalIdentifier => write!(f, "illegal identifier"),
            Self::IdentifierTooLong => write!(f, "identifier too long"),
            Self::IllegalConstant => write!(f, "illegal constant"),
            Self::IllegalOperator => write!(f, "illegal operator"),
            Self::IllegalCharacter => write!(f, "illegal character"),
        }
    }
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    /// Why an `Error` token was rejected. `None` for every other kind and
    /// for the end-of-input sentinel.
    pub error: Option<LexErrorKind>,
}

impl Token {
    pub(crate) const fn new(kind: TokenKind, text: String, span: Span) -> Self {
        Self {
            kind,
            text,
            span,
            error: None,
        }
    }

    pub(crate) const fn illegal(reason: LexErrorKind, text: String, span: Span) -> Self {
        Self {
            kind: TokenKind::Error,
            text,
            span,
            error: Some(reason),
        }
    }

    /// The end-of-input sentinel: an `Error` token with empty text.
    #[must_use]
    pub const fn end(span: Span) -> Self {
        Self::new(TokenKind::Error, String::new(), span)
    }

    /// Whether this token marks the end of input.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self.kind, TokenKind::Error) && self.text.is_empty()
    }
}
