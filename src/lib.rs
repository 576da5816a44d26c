//! Lexical analyzer for a small C-like teaching language.
//!
//! Splits source text into keywords, identifiers, constants, operators,
//! delimiters, and error tokens, numbering every distinct identifier and
//! constant in a symbol table as it is first seen.
//!
//! # Quick start
//!
//! ```
//! use minilex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("if x = 1;");
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Keyword);
//! assert_eq!(lexer.index_of(&token), Some(11));
//!
//! let x = lexer.next_token();
//! assert_eq!(x.kind, TokenKind::Identifier);
//! assert_eq!(lexer.index_of(&x), Some(41));
//! ```
//!
//! Lexical errors never stop the scan. They come back as `Error` tokens;
//! the end of input is an `Error` token with empty text.
//!
//! ```
//! use minilex::{LexErrorKind, tokenize};
//!
//! let (tokens, tables) = tokenize("x1 y 123a");
//! assert_eq!(tokens[0].error, Some(LexErrorKind::IllegalIdentifier));
//! assert_eq!(tokens[2].error, Some(LexErrorKind::IllegalConstant));
//! assert_eq!(tables.identifiers.get("y"), Some(41));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::io;
use std::path::PathBuf;

pub mod driver;
pub mod lexer;
pub mod report;
pub mod symbols;
pub mod token;

pub use driver::{Options, Summary};
pub use lexer::{Lexer, tokenize};
pub use report::{format_tables, format_token};
pub use symbols::{SymbolTable, SymbolTables};
pub use token::{LexErrorKind, Span, Token, TokenKind};

/// Errors from reading the source or writing the listing.
///
/// Scanning itself cannot fail; these only come from the file layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing to the output file failed.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
