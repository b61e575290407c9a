mod prefix;

pub use prefix::Matcher;

use crate::pattern::WILDCARD;

/// A successful match, borrowing the matched pattern from the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match<'m> {
    /// The input equals this literal pattern
    Literal(&'m str),
    /// The input starts with `prefix`; the matched pattern is `prefix*`
    Wildcard { prefix: &'m str },
}

impl<'m> Match<'m> {
    pub fn is_literal(&self) -> bool {
        matches!(self, Match::Literal(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Match::Wildcard { .. })
    }

    /// The literal text, or the prefix without its wildcard.
    pub fn prefix(&self) -> &'m str {
        match self {
            Match::Literal(s) => s,
            Match::Wildcard { prefix } => prefix,
        }
    }

    /// Pattern text as configured, e.g. `"Ask"` or `"Ask*"`.
    pub fn to_pattern(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Match<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Match::Literal(s) => f.write_str(s),
            Match::Wildcard { prefix } => write!(f, "{}{}", prefix, WILDCARD),
        }
    }
}
