//! Token types for the format code scanner.

use std::fmt;

/// The kind of a token in a format code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Implied tokens
    Eof,
    Bad,
    Whitespace,

    // Literals
    String, // "..."

    // Control characters
    Semicolon, // ;

    // Format symbols
    Zero,         // 0
    Hash,         // #
    QuestionMark, // ?
    Period,       // .
    Percentage,   // %
    Comma,        // ,
    Scientific,   // E+00, e-0, ...
    Skip,         // _x
    Symbol,       // $ - + ( ) space
    Color,        // [...]
    Placeholder,  // @
}

impl TokenKind {
    /// Returns the upper-case name of this kind, e.g. `QUESTION_MARK`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Bad => "BAD",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::String => "STRING",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Zero => "ZERO",
            TokenKind::Hash => "HASH",
            TokenKind::QuestionMark => "QUESTION_MARK",
            TokenKind::Period => "PERIOD",
            TokenKind::Percentage => "PERCENTAGE",
            TokenKind::Comma => "COMMA",
            TokenKind::Scientific => "SCIENTIFIC",
            TokenKind::Skip => "SKIP",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Color => "COLOR",
            TokenKind::Placeholder => "PLACEHOLDER",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its literal text and its byte span in the source.
///
/// The literal is the matched text with any delimiters removed: the
/// brackets of a `Color`, the quotes of a `String` and the underscore of a
/// `Skip` are not part of it, so `end - start` may exceed `literal.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Returns true if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
