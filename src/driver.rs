//! File-level glue around the lexer: reading and case-folding the source,
//! opening the output, and writing the annotated token stream.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::Error;
use crate::lexer::Lexer;
use crate::report::{format_tables, format_token};
use crate::token::TokenKind;

/// Settings for one run over an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Lower-case ASCII letters before scanning.
    pub fold_case: bool,
    /// Truncate the output file instead of appending to it.
    pub truncate: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            fold_case: true,
            truncate: false,
        }
    }
}

/// Counts gathered while writing one token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub tokens: usize,
    pub errors: usize,
    pub identifiers: usize,
    pub constants: usize,
}

/// Lower-case every ASCII letter, leaving all other characters alone.
#[must_use]
pub fn fold_case(source: &str) -> String {
    source.to_ascii_lowercase()
}

/// Read a source file, replacing invalid UTF-8 and optionally folding case.
pub fn read_source(path: &Path, options: &Options) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(if options.fold_case {
        fold_case(&text)
    } else {
        text
    })
}

/// Open the output file for appending, or truncating when requested.
/// The file is created if missing.
pub fn open_output(path: &Path, options: &Options) -> Result<File, Error> {
    let mut open = OpenOptions::new();
    open.create(true);
    if options.truncate {
        open.write(true).truncate(true);
    } else {
        open.append(true);
    }
    open.open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan `source` and write one record per token followed by the table dump.
pub fn write_listing<W: Write>(source: &str, out: &mut W) -> io::Result<Summary> {
    let mut lexer = Lexer::new(source);
    let mut summary = Summary::default();

    loop {
        let token = lexer.next_token();
        if token.is_end() {
            break;
        }
        summary.tokens += 1;
        if token.kind == TokenKind::Error {
            summary.errors += 1;
        }
        let index = lexer.index_of(&token);
        out.write_all(format_token(&token, index).as_bytes())?;
    }

    let tables = lexer.tables();
    summary.identifiers = tables.identifiers.len();
    summary.constants = tables.constants.len();
    out.write_all(format_tables(tables).as_bytes())?;
    Ok(summary)
}

/// Lex `input` and write the listing to `output`.
///
/// The source is read before the output is opened, so an unreadable input
/// leaves the output untouched.
pub fn run(input: &Path, output: &Path, options: &Options) -> Result<Summary, Error> {
    let source = read_source(input, options)?;
    let file = open_output(output, options)?;
    debug!(path = %output.display(), truncate = options.truncate, "opened output");

    let write_err = |source: io::Error| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut writer = BufWriter::new(file);
    let summary = write_listing(&source, &mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    debug!(
        tokens = summary.tokens,
        errors = summary.errors,
        identifiers = summary.identifiers,
        constants = summary.constants,
        "listing written"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_ascii_only() {
        assert_eq!(fold_case("IF X = 1; É"), "if x = 1; É");
    }

    #[test]
    fn listing_for_statement() {
        let mut out = Vec::new();
        let summary = write_listing("if x = 1;", &mut out).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "if\t(if , 11)\n\
             x\t(x , 41)\n\
             =\t(= , 21)\n\
             1\t(1 , 51)\n\
             ;\t(; , 32)\n\
             \n=== Identifier Table ===\nx\n\n=== Constant Table ===\n1\n"
        );
        assert_eq!(
            summary,
            Summary {
                tokens: 5,
                errors: 0,
                identifiers: 1,
                constants: 1,
            }
        );
    }

    #[test]
    fn listing_counts_errors() {
        let mut out = Vec::new();
        let summary = write_listing("x1 <= 3b", &mut out).expect("write");
        assert_eq!(summary.tokens, 3);
        assert_eq!(summary.errors, 3);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("x1\t(x1 , err)\n<=\t(<= , err)\n3b\t(3b , err)\n"));
    }
}
