//! Scanner for tokenizing format code strings.
//!
//! The scanner classifies characters into tokens one at a time. A few
//! classes consume more than one character:
//! - `_x` becomes a `Skip` token carrying `x`
//! - runs of whitespace become a single `Whitespace` token
//! - `e`/`E` followed by any of `eE+-0` becomes a single `Scientific` token
//! - `[...]` becomes a `Color` token and `"..."` a `String` token, with the
//!   delimiters dropped
//!
//! Scanning never fails. Characters outside every class become `Bad` tokens,
//! and a bracket or quote left open at end of input yields whatever text was
//! collected before the input ran out.

use std::iter::Peekable;
use std::str::Chars;

use crate::options::ScanOptions;
use crate::parser::tokens::{Token, TokenKind};

pub(crate) fn is_whitespace(ch: char) -> bool {
    ch == ' ' || ch == '\t' || ch == '\n'
}

pub(crate) fn is_scientific_start(ch: char) -> bool {
    ch == 'e' || ch == 'E'
}

pub(crate) fn is_scientific_modifier(ch: char) -> bool {
    ch == '+' || ch == '-' || is_digit(ch)
}

/// Only `0` is a digit in format codes.
pub(crate) fn is_digit(ch: char) -> bool {
    ch == '0'
}

pub(crate) fn is_skip(ch: char) -> bool {
    ch == '_'
}

pub(crate) fn is_color_start(ch: char) -> bool {
    ch == '['
}

pub(crate) fn is_color_end(ch: char) -> bool {
    ch == ']'
}

pub(crate) fn is_string_delimiter(ch: char) -> bool {
    ch == '"'
}

/// A scanner over a stream of characters.
pub struct Scanner<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    /// Byte offset of the next unread character.
    position: usize,
    options: ScanOptions,
}

impl<'a> Scanner<Chars<'a>> {
    /// Creates a new scanner for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self::from_chars(input.chars())
    }

    /// Creates a new scanner for the given input string with custom options.
    pub fn with_options(input: &'a str, options: ScanOptions) -> Self {
        Self::from_chars_with_options(input.chars(), options)
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    /// Creates a new scanner reading from any character stream.
    pub fn from_chars(chars: I) -> Self {
        Self::from_chars_with_options(chars, ScanOptions::default())
    }

    pub fn from_chars_with_options(chars: I, options: ScanOptions) -> Self {
        Self {
            chars: chars.peekable(),
            position: 0,
            options,
        }
    }

    /// Returns the next token from the input.
    ///
    /// Once the input is exhausted every call returns an `Eof` token with an
    /// empty literal.
    pub fn scan(&mut self) -> Token {
        let start = self.position;
        let (kind, literal) = match self.read() {
            None => (TokenKind::Eof, String::new()),
            Some(ch) => self.classify(ch),
        };
        Token {
            kind,
            literal,
            start,
            end: self.position,
        }
    }

    /// Classifies a token starting with `ch`, which has already been read.
    fn classify(&mut self, ch: char) -> (TokenKind, String) {
        // Multi-character classes, in priority order.
        if is_skip(ch) {
            return self.scan_skip();
        }
        if is_whitespace(ch) {
            return self.scan_whitespace(ch);
        }
        if is_scientific_start(ch) {
            return self.scan_scientific(ch);
        }
        if is_color_start(ch) {
            return self.scan_color();
        }
        if is_string_delimiter(ch) {
            return self.scan_string();
        }

        let kind = match ch {
            ';' => TokenKind::Semicolon,
            '0' => TokenKind::Zero,
            '#' => TokenKind::Hash,
            '?' => TokenKind::QuestionMark,
            '.' => TokenKind::Period,
            '%' => TokenKind::Percentage,
            ',' => TokenKind::Comma,
            '@' => TokenKind::Placeholder,
            _ if self.options.symbols.contains(ch) => TokenKind::Symbol,
            _ => TokenKind::Bad,
        };
        (kind, ch.to_string())
    }

    /// Reads the next character, advancing the position.
    fn read(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Reads the next character only if it satisfies the predicate.
    fn read_if(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        let ch = self.chars.next_if(|&c| predicate(c))?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the character following a `_`, which has already been read.
    fn scan_skip(&mut self) -> (TokenKind, String) {
        match self.read() {
            Some(ch) => (TokenKind::Skip, ch.to_string()),
            None => (TokenKind::Eof, String::new()),
        }
    }

    /// Consumes all whitespace contiguous with `first`.
    fn scan_whitespace(&mut self, first: char) -> (TokenKind, String) {
        let mut run = String::from(first);
        while let Some(ch) = self.read_if(is_whitespace) {
            run.push(ch);
        }
        (TokenKind::Whitespace, run)
    }

    /// Consumes the exponent modifiers following `first` (`e` or `E`).
    fn scan_scientific(&mut self, first: char) -> (TokenKind, String) {
        let mut run = String::from(first);
        while let Some(ch) = self.read_if(|c| is_scientific_start(c) || is_scientific_modifier(c)) {
            run.push(ch);
        }
        (TokenKind::Scientific, run)
    }

    /// Consumes the body of a bracketed tag; the `[` has already been read.
    fn scan_color(&mut self) -> (TokenKind, String) {
        let (tag, closed) = self.scan_terminated(is_color_end);
        if !closed {
            tracing::debug!(tag = %tag, "unterminated bracket tag at end of input");
        }
        (TokenKind::Color, tag)
    }

    /// Consumes the body of a quoted string; the opening `"` has already
    /// been read.
    fn scan_string(&mut self) -> (TokenKind, String) {
        let (text, closed) = self.scan_terminated(is_string_delimiter);
        if !closed {
            tracing::debug!(text = %text, "unterminated quoted string at end of input");
        }
        (TokenKind::String, text)
    }

    /// Reads characters up to the first one matching `terminator`, which is
    /// consumed and dropped. Returns the collected text and whether the
    /// terminator was found before end of input.
    fn scan_terminated(&mut self, terminator: impl Fn(char) -> bool) -> (String, bool) {
        let mut text = String::new();
        while let Some(ch) = self.read() {
            if terminator(ch) {
                return (text, true);
            }
            text.push(ch);
        }
        (text, false)
    }

    /// Returns all remaining tokens, including the final `Eof`.
    /// This consumes the scanner.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}
