use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::symbols::{self, SymbolTables};
use crate::token::{LexErrorKind, Span, Token, TokenKind};

/// Longest letter-only word accepted as an identifier or keyword.
const MAX_WORD_LEN: usize = 9;

/// Two-character merges tried after an operator character is consumed.
/// A merge classified as `Error` is consumed but rejected.
const MERGES: [(u8, u8, TokenKind); 4] = [
    (b'=', b'=', TokenKind::Operator),
    (b'>', b'=', TokenKind::Operator),
    (b'+', b'+', TokenKind::Operator),
    (b'<', b'=', TokenKind::Error),
];

/// Tokenize a whole source string, returning every token before the end
/// sentinel along with the symbol tables built along the way.
#[must_use]
pub fn tokenize(input: &str) -> (Vec<Token>, SymbolTables) {
    let mut lexer = Lexer::new(input);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.into_tables())
}

/// Single-pass scanner over one source string.
///
/// Call [`Lexer::next_token`] until it returns the end sentinel, or use the
/// lexer as an iterator, which stops there on its own.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    tables: SymbolTables,
    finished: bool,
}

const fn is_space(b: u8) -> bool {
    // C-locale isspace, which includes vertical tab and form feed
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
            tables: SymbolTables::new(),
            finished: false,
        }
    }

    /// Identifier and constant tables built so far.
    #[must_use]
    pub const fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    #[must_use]
    pub fn into_tables(self) -> SymbolTables {
        self.tables
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Index of `token` in its category's table, `None` for errors.
    #[must_use]
    pub fn index_of(&self, token: &Token) -> Option<u32> {
        self.tables.index_of(token.kind, &token.text)
    }

    /// Scan one token.
    ///
    /// Returns the end sentinel (see [`Token::is_end`]) once the input is
    /// exhausted, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let span = self.span();
        let Some(ch) = self.peek() else {
            return Token::end(span);
        };

        let token = match ch {
            b'a'..=b'z' | b'A'..=b'Z' => self.read_word(span),
            b'0'..=b'9' => self.read_number(span),
            b'=' | b'+' | b'/' | b'>' | b'<' | b'%' => self.read_operator(ch, span),
            b'"' | b';' => {
                self.advance();
                Token::new(TokenKind::Delimiter, char::from(ch).to_string(), span)
            }
            _ => self.read_illegal(span),
        };

        trace!(
            kind = %token.kind,
            text = %token.text,
            line = span.line,
            column = span.column,
            "token"
        );
        token
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            if ch == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.pos].to_string()
    }

    fn read_word(&mut self, span: Span) -> Token {
        let start = self.pos;
        self.eat_while(|b| b.is_ascii_alphabetic());

        // letters then digits, e.g. `if1`
        if self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.eat_while(|b| b.is_ascii_digit());
            return Token::illegal(LexErrorKind::IllegalIdentifier, self.text_from(start), span);
        }

        let text = self.text_from(start);
        if text.len() > MAX_WORD_LEN {
            return Token::illegal(LexErrorKind::IdentifierTooLong, text, span);
        }
        if symbols::keyword_index(&text).is_some() {
            return Token::new(TokenKind::Keyword, text, span);
        }

        let (index, inserted) = self.tables.identifiers.insert(&text);
        if inserted {
            debug!(%text, index, "registered identifier");
        }
        Token::new(TokenKind::Identifier, text, span)
    }

    fn read_number(&mut self, span: Span) -> Token {
        let start = self.pos;
        self.eat_while(|b| b.is_ascii_digit());

        // digits then letters, e.g. `123a`
        if self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            self.eat_while(|b| b.is_ascii_alphanumeric());
            return Token::illegal(LexErrorKind::IllegalConstant, self.text_from(start), span);
        }

        let text = self.text_from(start);
        let (index, inserted) = self.tables.constants.insert(&text);
        if inserted {
            debug!(%text, index, "registered constant");
        }
        Token::new(TokenKind::Constant, text, span)
    }

    fn read_operator(&mut self, first: u8, span: Span) -> Token {
        let start = self.pos;
        self.advance();

        let next = self.peek();
        let merged = MERGES
            .iter()
            .find(|&&(a, b, _)| a == first && next == Some(b))
            .map(|&(_, _, kind)| kind);

        if let Some(kind) = merged {
            self.advance();
            let text = self.text_from(start);
            return match kind {
                TokenKind::Error => Token::illegal(LexErrorKind::IllegalOperator, text, span),
                _ => Token::new(kind, text, span),
            };
        }

        let text = self.text_from(start);
        if matches!(first, b'>' | b'<') {
            Token::illegal(LexErrorKind::IllegalOperator, text, span)
        } else {
            Token::new(TokenKind::Operator, text, span)
        }
    }

    fn read_illegal(&mut self, span: Span) -> Token {
        let start = self.pos;
        // consume a whole scalar so non-ASCII input is never split
        let width = self.input[start..].chars().next().map_or(1, char::len_utf8);
        self.pos += width;
        self.col += 1;
        Token::illegal(LexErrorKind::IllegalCharacter, self.text_from(start), span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_end() {
            self.finished = true;
            return None;
        }
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
