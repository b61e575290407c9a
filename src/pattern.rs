use crate::error::PatternError;

/// The wildcard character. Only valid as the last character of a pattern.
pub const WILDCARD: char = '*';

/// A validated pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// Exact match: "Ask" matches only "Ask"
    Literal(&'a str),
    /// Trailing wildcard: "Ask*" matches "AskBot", "Ask Jeeves", etc.
    Wildcard { prefix: &'a str },
}

impl<'a> Pattern<'a> {
    /// Classify a raw pattern string.
    ///
    /// `index` is the pattern's position in its input sequence and is only
    /// used for error reporting.
    pub fn classify(raw: &'a str, index: usize) -> Result<Self, PatternError> {
        match raw.matches(WILDCARD).count() {
            0 => Ok(Pattern::Literal(raw)),
            1 => raw
                .strip_suffix(WILDCARD)
                .map(|prefix| Pattern::Wildcard { prefix })
                .ok_or(PatternError::MisplacedWildcard { index }),
            _ => Err(PatternError::MultipleWildcards { index }),
        }
    }

    /// Full pattern length in bytes, wildcard included.
    pub fn len(&self) -> usize {
        match self {
            Pattern::Literal(s) => s.len(),
            Pattern::Wildcard { prefix } => prefix.len() + WILDCARD.len_utf8(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
