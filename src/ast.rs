//! Structural types for parsed format codes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::FormatError;
use crate::parser::tokens::TokenKind;

/// A single token stored in a format section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Part {
    kind: TokenKind,
    literal: String,
}

impl Part {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text, without the brackets, quotes or underscore that
    /// delimited it in the source.
    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl fmt::Display for Part {
    /// Writes the part back in format code syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Color => write!(f, "[{}]", self.literal),
            TokenKind::String => write!(f, "\"{}\"", self.literal),
            TokenKind::Skip => write!(f, "_{}", self.literal),
            _ => f.write_str(&self.literal),
        }
    }
}

/// A single section of a format code.
///
/// A section is the text between two `;` separators, kept as the ordered
/// list of parts it scanned to. Sections are immutable once parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FormatSection {
    parts: Vec<Part>,
}

impl FormatSection {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// The parts of this section, in source order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    /// Returns the text of the first bracketed tag, e.g. `RED` for `[RED]0`.
    pub fn color(&self) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.kind == TokenKind::Color)
            .map(Part::literal)
    }

    /// Returns true if this section contains a `@` text placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.parts.iter().any(|p| p.kind == TokenKind::Placeholder)
    }

    /// Returns true if any character in this section was unrecognised.
    pub fn has_bad_tokens(&self) -> bool {
        self.parts.iter().any(|p| p.kind == TokenKind::Bad)
    }
}

impl<'a> IntoIterator for &'a FormatSection {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl fmt::Display for FormatSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// A parsed number format code.
///
/// Codes are written with 1, 2 or 4 sections:
/// - 1 section: used for positive, negative and zero values
/// - 2 sections: positive and zero, then negative
/// - 4 sections: positive, negative, zero, text
///
/// When a section fills more than one role the roles share one
/// `Arc<FormatSection>`; use [`Arc::ptr_eq`] to tell shared from distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XLNumFmt {
    positive: Arc<FormatSection>,
    negative: Arc<FormatSection>,
    zero: Arc<FormatSection>,
    text: Option<Arc<FormatSection>>,
    section_count: usize,
}

impl XLNumFmt {
    /// Assigns sections to roles according to how many there are.
    ///
    /// Returns `FormatError::SectionCount` unless there are exactly 1, 2 or
    /// 4 sections.
    pub fn from_sections(sections: Vec<FormatSection>) -> Result<Self, FormatError> {
        let section_count = sections.len();
        let mut sections = sections.into_iter().map(Arc::new);

        let fmt = match (
            sections.next(),
            sections.next(),
            sections.next(),
            sections.next(),
            sections.next(),
        ) {
            (Some(all), None, None, None, None) => XLNumFmt {
                positive: Arc::clone(&all),
                negative: Arc::clone(&all),
                zero: all,
                text: None,
                section_count,
            },
            (Some(positive), Some(negative), None, None, None) => XLNumFmt {
                zero: Arc::clone(&positive),
                positive,
                negative,
                text: None,
                section_count,
            },
            (Some(positive), Some(negative), Some(zero), Some(text), None) => XLNumFmt {
                positive,
                negative,
                zero,
                text: Some(text),
                section_count,
            },
            _ => {
                return Err(FormatError::SectionCount {
                    found: section_count,
                })
            }
        };

        tracing::debug!(section_count, "resolved format sections");
        Ok(fmt)
    }

    /// The section used for positive values.
    pub fn positive(&self) -> &Arc<FormatSection> {
        &self.positive
    }

    /// The section used for negative values.
    pub fn negative(&self) -> &Arc<FormatSection> {
        &self.negative
    }

    /// The section used for zero.
    pub fn zero(&self) -> &Arc<FormatSection> {
        &self.zero
    }

    /// The section used for text values; only present in 4-section codes.
    pub fn text(&self) -> Option<&Arc<FormatSection>> {
        self.text.as_ref()
    }

    /// The number of sections the code was written with (1, 2 or 4).
    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Parse a format code string into an XLNumFmt.
    pub fn parse(format_code: &str) -> Result<XLNumFmt, FormatError> {
        crate::parser::parse(format_code)
    }

    /// Parse the code for one of Excel's built-in format ids.
    pub fn from_builtin_id(id: u32) -> Result<XLNumFmt, FormatError> {
        let code =
            crate::builtin_formats::format_code_from_id(id).ok_or(FormatError::UnknownBuiltinId(id))?;
        crate::cache::get_or_parse(code)
    }
}

impl FromStr for XLNumFmt {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        XLNumFmt::parse(s)
    }
}

impl fmt::Display for XLNumFmt {
    /// Writes the sections as originally grouped, separated by `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.positive)?;
        if self.section_count == 1 {
            return Ok(());
        }
        write!(f, ";{}", self.negative)?;
        if let Some(text) = &self.text {
            write!(f, ";{};{}", self.zero, text)?;
        }
        Ok(())
    }
}
