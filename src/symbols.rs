//! Symbol tables mapping token text to stable integer indices.
//!
//! Keywords, operators, and delimiters live in fixed tables compiled into
//! the binary. Identifiers and constants are numbered on first sight by a
//! [`SymbolTable`] owned by the lexer.

use indexmap::IndexMap;

use crate::token::TokenKind;

/// Reserved words and their fixed indices.
pub const KEYWORDS: [(&str, u32); 6] = [
    ("if", 11),
    ("then", 12),
    ("else", 13),
    ("int", 14),
    ("char", 15),
    ("for", 16),
];

/// Valid operators and their fixed indices.
pub const OPERATORS: [(&str, u32); 7] = [
    ("=", 21),
    (">=", 22),
    ("==", 23),
    ("+", 24),
    ("/", 25),
    ("%", 26),
    ("++", 27),
];

/// Delimiters and their fixed indices.
pub const DELIMITERS: [(&str, u32); 2] = [("\"", 31), (";", 32)];

/// First index handed out to an identifier.
pub const IDENTIFIER_BASE: u32 = 41;

/// First index handed out to a constant.
pub const CONSTANT_BASE: u32 = 51;

fn lookup(table: &[(&str, u32)], text: &str) -> Option<u32> {
    table
        .iter()
        .find(|(entry, _)| *entry == text)
        .map(|&(_, index)| index)
}

/// Index of a reserved word, if `text` is one.
#[must_use]
pub fn keyword_index(text: &str) -> Option<u32> {
    lookup(&KEYWORDS, text)
}

/// Index of a valid operator, if `text` is one.
#[must_use]
pub fn operator_index(text: &str) -> Option<u32> {
    lookup(&OPERATORS, text)
}

/// Index of a delimiter, if `text` is one.
#[must_use]
pub fn delimiter_index(text: &str) -> Option<u32> {
    lookup(&DELIMITERS, text)
}

/// A growing table that numbers each distinct text on first insertion.
///
/// Entries are never removed or renumbered. Iteration follows insertion
/// order, which is also ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexMap<String, u32>,
    base: u32,
    next: u32,
}

impl SymbolTable {
    #[must_use]
    pub fn new(base: u32) -> Self {
        Self {
            entries: IndexMap::new(),
            base,
            next: base,
        }
    }

    /// Insert `text` if absent and return its index together with whether
    /// this call created the entry.
    pub fn insert(&mut self, text: &str) -> (u32, bool) {
        if let Some(&index) = self.entries.get(text) {
            return (index, false);
        }
        let index = self.next;
        self.next += 1;
        self.entries.insert(text.to_string(), index);
        (index, true)
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<u32> {
        self.entries.get(text).copied()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(text, &index)| (text.as_str(), index))
    }
}

/// The dynamic tables owned by one lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTables {
    pub identifiers: SymbolTable,
    pub constants: SymbolTable,
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self {
            identifiers: SymbolTable::new(IDENTIFIER_BASE),
            constants: SymbolTable::new(CONSTANT_BASE),
        }
    }
}

impl SymbolTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index assigned to `text` in the table for `kind`.
    ///
    /// Returns `None` for `Error` tokens and for text that was never
    /// classified as `kind`.
    #[must_use]
    pub fn index_of(&self, kind: TokenKind, text: &str) -> Option<u32> {
        match kind {
            TokenKind::Keyword => keyword_index(text),
            TokenKind::Operator => operator_index(text),
            TokenKind::Delimiter => delimiter_index(text),
            TokenKind::Identifier => self.identifiers.get(text),
            TokenKind::Constant => self.constants.get(text),
            TokenKind::Error => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tables() {
        assert_eq!(keyword_index("if"), Some(11));
        assert_eq!(keyword_index("for"), Some(16));
        assert_eq!(keyword_index("while"), None);
        assert_eq!(operator_index(">="), Some(22));
        assert_eq!(operator_index("<="), None);
        assert_eq!(delimiter_index(";"), Some(32));
    }

    #[test]
    fn insert_if_absent() {
        let mut table = SymbolTable::new(IDENTIFIER_BASE);
        assert_eq!(table.insert("foo"), (41, true));
        assert_eq!(table.insert("bar"), (42, true));
        assert_eq!(table.insert("foo"), (41, false));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn iteration_in_index_order() {
        let mut table = SymbolTable::new(CONSTANT_BASE);
        table.insert("9");
        table.insert("1");
        table.insert("9");
        table.insert("5");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("9", 51), ("1", 52), ("5", 53)]);
    }

    #[test]
    fn error_kind_never_indexed() {
        let mut tables = SymbolTables::new();
        tables.identifiers.insert("x");
        assert_eq!(tables.index_of(TokenKind::Error, "x"), None);
        assert_eq!(tables.index_of(TokenKind::Identifier, "x"), Some(41));
        assert_eq!(tables.index_of(TokenKind::Constant, "x"), None);
    }
}
