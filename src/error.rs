//! Error types for parsing format codes.

use thiserror::Error;

/// Errors that can occur when parsing a format code.
///
/// Scanning never fails: unrecognised characters become `Bad` tokens and
/// unterminated tags or strings keep their partial text. The only structural
/// failure is a section count other than 1, 2 or 4.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("must have 1, 2 or 4 sections, found {found}")]
    SectionCount { found: usize },

    #[error("unknown built-in format id {0}")]
    UnknownBuiltinId(u32),

    #[error("failed to read format code: {0}")]
    Io(#[from] std::io::Error),
}
