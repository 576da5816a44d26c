//! Text rendering of the token stream and the symbol-table dump.

use std::fmt::Write as _;

use crate::symbols::{SymbolTable, SymbolTables};
use crate::token::Token;

/// Heading printed above the identifier entries.
pub const IDENTIFIER_HEADING: &str = "=== Identifier Table ===";

/// Heading printed above the constant entries.
pub const CONSTANT_HEADING: &str = "=== Constant Table ===";

/// Render one token record: `<text>\t(<text> , <index>)`.
///
/// A missing index is written as `err`.
#[must_use]
pub fn format_token(token: &Token, index: Option<u32>) -> String {
    let index = index.map_or_else(|| "err".to_string(), |i| i.to_string());
    format!("{text}\t({text} , {index})\n", text = token.text)
}

/// Render the identifier and constant tables under labelled sections,
/// entries in ascending index order.
#[must_use]
pub fn format_tables(tables: &SymbolTables) -> String {
    let mut out = String::from("\n");
    format_section(&mut out, IDENTIFIER_HEADING, &tables.identifiers);
    out.push('\n');
    format_section(&mut out, CONSTANT_HEADING, &tables.constants);
    out
}

fn format_section(out: &mut String, heading: &str, table: &SymbolTable) {
    out.push_str(heading);
    out.push('\n');
    for (text, _) in table.iter() {
        let _ = writeln!(out, "{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Span, TokenKind};

    fn token(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            text: text.to_string(),
            span: Span { line: 1, column: 1 },
            error: None,
        }
    }

    #[test]
    fn token_record_with_index() {
        let line = format_token(&token(TokenKind::Operator, ">="), Some(22));
        assert_eq!(line, ">=\t(>= , 22)\n");
    }

    #[test]
    fn token_record_without_index() {
        let line = format_token(&token(TokenKind::Error, "x1"), None);
        assert_eq!(line, "x1\t(x1 , err)\n");
    }

    #[test]
    fn empty_tables() {
        let out = format_tables(&SymbolTables::new());
        assert_eq!(out, "\n=== Identifier Table ===\n\n=== Constant Table ===\n");
    }

    #[test]
    fn tables_listed_by_index() {
        let mut tables = SymbolTables::new();
        tables.identifiers.insert("b");
        tables.identifiers.insert("a");
        tables.constants.insert("7");
        let out = format_tables(&tables);
        assert_eq!(
            out,
            "\n=== Identifier Table ===\nb\na\n\n=== Constant Table ===\n7\n"
        );
    }
}
