#![allow(dead_code)]

use minilex::{Lexer, TokenKind};

/// Scan `input` to the end and return `(kind, text, index)` per token.
pub fn scan(input: &str) -> Vec<(TokenKind, String, Option<u32>)> {
    let mut lexer = Lexer::new(input);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is_end() {
            break;
        }
        let index = lexer.index_of(&token);
        out.push((token.kind, token.text, index));
    }
    out
}

/// Owned `(kind, text, index)` triple for concise expectations.
pub fn tok(kind: TokenKind, text: &str, index: Option<u32>) -> (TokenKind, String, Option<u32>) {
    (kind, text.to_string(), index)
}
