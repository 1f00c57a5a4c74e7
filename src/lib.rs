//! xlnumfmt - scanner and section parser for Excel number format codes
//!
//! A format code such as `#,##0.00;[RED](#,##0.00);0.00;"sales "@` is
//! scanned into typed tokens and split on `;` into up to four sections,
//! which are then assigned to the positive, negative, zero and text roles.
//! Rendering values with a parsed format is left to the caller.
//!
//! ```
//! use std::sync::Arc;
//! use xlnumfmt::TokenKind;
//!
//! let fmt = xlnumfmt::parse("#,##0.00;[RED](#,##0.00)").unwrap();
//! assert!(Arc::ptr_eq(fmt.positive(), fmt.zero()));
//! assert_eq!(fmt.negative().parts()[0].kind(), TokenKind::Color);
//! assert!(fmt.text().is_none());
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod parser;

mod builtin_formats;
mod cache;

pub use ast::{FormatSection, Part, XLNumFmt};
pub use builtin_formats::{format_code_from_id, is_builtin_format_id};
pub use error::FormatError;
pub use options::{ScanOptions, SymbolSet};
pub use parser::scanner::Scanner;
pub use parser::tokens::{Token, TokenKind};
pub use parser::{parse, parse_reader, parse_with_options, Parser};

/// Parse a format code, reusing an earlier result for the same code.
pub fn parse_cached(format_code: &str) -> Result<XLNumFmt, FormatError> {
    cache::get_or_parse(format_code)
}
