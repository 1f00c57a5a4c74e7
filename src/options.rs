//! Scanning options and configuration.

/// The set of characters the scanner classifies as `Symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolSet {
    /// `$ - + ( )` and space
    #[default]
    Standard,
    /// The standard set plus the other characters Excel displays without
    /// quoting: `/ : ! ^ & ' ~ { } < > =`
    Extended,
}

impl SymbolSet {
    /// Returns true if `ch` belongs to this set.
    pub fn contains(&self, ch: char) -> bool {
        match self {
            SymbolSet::Standard => is_standard_symbol(ch),
            SymbolSet::Extended => {
                is_standard_symbol(ch)
                    || matches!(
                        ch,
                        '/' | ':' | '!' | '^' | '&' | '\'' | '~' | '{' | '}' | '<' | '>' | '='
                    )
            }
        }
    }
}

fn is_standard_symbol(ch: char) -> bool {
    matches!(ch, '$' | '-' | '+' | '(' | ')' | ' ')
}

/// Options for scanning and parsing format codes.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Characters that scan as `Symbol` rather than `Bad`.
    pub symbols: SymbolSet,
}

impl ScanOptions {
    /// Options using the extended symbol set.
    pub fn extended() -> Self {
        Self {
            symbols: SymbolSet::Extended,
        }
    }
}
