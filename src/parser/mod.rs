//! Parser for Excel number format codes.
//!
//! The parser pulls tokens from a [`Scanner`](scanner::Scanner), collects
//! them into `;`-separated sections and assigns those sections to the
//! positive, negative, zero and text roles of an [`XLNumFmt`].

pub mod scanner;
pub mod tokens;

use std::io::Read;
use std::str::Chars;

use crate::ast::{FormatSection, Part, XLNumFmt};
use crate::error::FormatError;
use crate::options::ScanOptions;
use scanner::Scanner;
use tokens::{Token, TokenKind};

/// Parse a format code string into an XLNumFmt.
pub fn parse(format_code: &str) -> Result<XLNumFmt, FormatError> {
    Parser::new(format_code).parse()
}

/// Parse a format code string with custom scanning options.
pub fn parse_with_options(format_code: &str, options: ScanOptions) -> Result<XLNumFmt, FormatError> {
    Parser::with_options(format_code, options).parse()
}

/// Read a whole format code from `reader` and parse it.
///
/// Invalid UTF-8 is replaced with U+FFFD, which scans as a `Bad` token;
/// only a failing read is an error.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<XLNumFmt, FormatError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse(&String::from_utf8_lossy(&bytes))
}

/// Parser for format code token streams.
pub struct Parser<I: Iterator<Item = char>> {
    scanner: Scanner<I>,
    /// A token pushed back by `unscan`, returned by the next `scan`.
    pushback: Option<Token>,
}

impl<'a> Parser<Chars<'a>> {
    /// Create a new parser for the given format code.
    pub fn new(format_code: &'a str) -> Self {
        Self::from_scanner(Scanner::new(format_code))
    }

    pub fn with_options(format_code: &'a str, options: ScanOptions) -> Self {
        Self::from_scanner(Scanner::with_options(format_code, options))
    }
}

impl<I: Iterator<Item = char>> Parser<I> {
    pub fn from_scanner(scanner: Scanner<I>) -> Self {
        Self {
            scanner,
            pushback: None,
        }
    }

    /// Returns the pushed-back token if there is one, otherwise the next
    /// token from the scanner.
    fn scan(&mut self) -> Token {
        match self.pushback.take() {
            Some(token) => token,
            None => self.scanner.scan(),
        }
    }

    /// Pushes a token back so the next `scan` returns it again.
    fn unscan(&mut self, token: Token) {
        debug_assert!(self.pushback.is_none(), "only one token may be pushed back");
        self.pushback = Some(token);
    }

    /// Parse the whole token stream into an XLNumFmt.
    pub fn parse(mut self) -> Result<XLNumFmt, FormatError> {
        let mut sections = Vec::new();

        loop {
            sections.push(self.parse_section());

            // The section ended on `;` or end of input.
            if self.scan().kind != TokenKind::Semicolon {
                break;
            }
        }

        XLNumFmt::from_sections(sections)
    }

    /// Parse parts up to the next `;` or end of input. The delimiter is
    /// pushed back for the caller.
    fn parse_section(&mut self) -> FormatSection {
        let mut builder = SectionBuilder::new();

        loop {
            let token = self.scan();
            match token.kind {
                TokenKind::Semicolon | TokenKind::Eof => {
                    self.unscan(token);
                    break;
                }
                _ => {
                    tracing::trace!(kind = %token.kind, literal = %token.literal, "adding part");
                    builder.add_part(Part::new(token.kind, token.literal));
                }
            }
        }

        let section = builder.build();
        tracing::debug!(parts = section.len(), "sealed format section");
        section
    }
}

/// Helper struct for building sections.
struct SectionBuilder {
    parts: Vec<Part>,
}

impl SectionBuilder {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    fn build(self) -> FormatSection {
        FormatSection::new(self.parts)
    }
}
