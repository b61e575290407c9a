//! Literal and trailing-wildcard pattern matcher.
//!
//! Literals live in a HashSet for O(1) exact lookup. Wildcard prefixes are
//! grouped by full pattern length, so a query probes one HashSet per distinct
//! length instead of scanning every wildcard pattern.
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::Match;
use crate::error::{PatternError, Result};
use crate::loader::{load_patterns_from_file, parse_patterns, DEFAULT_PATTERNS};
use crate::options::{MatcherOptions, ProbeOrder};
use crate::pattern::{Pattern, WILDCARD};

/// Wildcard prefixes sharing one full pattern length.
#[derive(Debug, Clone)]
struct WildcardGroup {
    /// Full pattern length in bytes, wildcard included
    len: usize,
    prefixes: HashSet<String>,
}

/// Immutable pattern matcher. Cheap to share across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    literals: HashSet<String>,
    /// Sorted by `len` in probe order
    groups: Vec<WildcardGroup>,
    options: MatcherOptions,
}

impl Matcher {
    /// Build a matcher with default options.
    ///
    /// Fails on the first pattern (in input order) that has more than one
    /// wildcard or a wildcard before its last character.
    pub fn new<I, S>(patterns: I) -> std::result::Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_options(patterns, MatcherOptions::default())
    }

    /// Build a matcher with explicit options.
    pub fn with_options<I, S>(
        patterns: I,
        options: MatcherOptions,
    ) -> std::result::Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut literals = HashSet::new();
        let mut by_len: HashMap<usize, HashSet<String>> = HashMap::new();
        let mut empty = 0usize;

        for (index, raw) in patterns.into_iter().enumerate() {
            match Pattern::classify(raw.as_ref(), index)? {
                // The empty literal can never match: queries reject empty input.
                Pattern::Literal("") => empty += 1,
                Pattern::Literal(literal) => {
                    if !literals.contains(literal) {
                        literals.insert(literal.to_string());
                    }
                }
                Pattern::Wildcard { prefix } => {
                    let prefixes = by_len.entry(prefix.len() + WILDCARD.len_utf8()).or_default();
                    if !prefixes.contains(prefix) {
                        prefixes.insert(prefix.to_string());
                    }
                }
            }
        }

        let mut groups: Vec<WildcardGroup> = by_len
            .into_iter()
            .map(|(len, prefixes)| WildcardGroup { len, prefixes })
            .collect();
        match options.probe_order {
            ProbeOrder::LongestFirst => groups.sort_unstable_by(|a, b| b.len.cmp(&a.len)),
            ProbeOrder::ShortestFirst => groups.sort_unstable_by_key(|g| g.len),
        }

        if empty > 0 {
            tracing::debug!(count = empty, "ignoring empty literal patterns");
        }
        tracing::debug!(
            literals = literals.len(),
            wildcards = groups.iter().map(|g| g.prefixes.len()).sum::<usize>(),
            groups = groups.len(),
            "built pattern matcher"
        );

        Ok(Self {
            literals,
            groups,
            options,
        })
    }

    /// Build a matcher from newline-separated pattern text.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(parse_patterns(text))?)
    }

    /// Build a matcher from a pattern file, one pattern per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let patterns = load_patterns_from_file(path)?;
        Ok(Self::new(patterns)?)
    }

    /// Build a matcher from [`DEFAULT_PATTERNS`].
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PATTERNS).expect("DEFAULT_PATTERNS: hardcoded pattern is invalid")
    }

    /// Find the pattern matching `input`.
    ///
    /// An exact literal wins over any wildcard. Otherwise wildcard groups are
    /// probed in the configured order and the first hit is returned. A
    /// wildcard pattern of full length `L` (wildcard included) only matches
    /// inputs at least `L` bytes long, so `"Ask*"` does not match `"Ask"`.
    /// The empty input never matches.
    pub fn find(&self, input: &str) -> Option<Match<'_>> {
        if input.is_empty() {
            return None;
        }

        if let Some(literal) = self.literals.get(input) {
            return Some(Match::Literal(literal));
        }

        let max = input.len();
        let candidates = match self.options.probe_order {
            ProbeOrder::LongestFirst => {
                &self.groups[self.groups.partition_point(|g| g.len > max)..]
            }
            ProbeOrder::ShortestFirst => {
                &self.groups[..self.groups.partition_point(|g| g.len <= max)]
            }
        };

        candidates.iter().find_map(|group| {
            // Not a char boundary means no stored prefix can be equal.
            let head = input.get(..group.len - WILDCARD.len_utf8())?;
            group
                .prefixes
                .get(head)
                .map(|prefix| Match::Wildcard { prefix })
        })
    }

    /// Matched pattern text (`"Ask"`, `"Ask*"`), or `None`.
    pub fn find_pattern(&self, input: &str) -> Option<String> {
        self.find(input).map(|m| m.to_pattern())
    }

    /// Check if any pattern matches `input`.
    pub fn is_match(&self, input: &str) -> bool {
        self.find(input).is_some()
    }

    /// Number of distinct indexed patterns.
    pub fn len(&self) -> usize {
        self.literal_count() + self.wildcard_count()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.groups.is_empty()
    }

    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    pub fn wildcard_count(&self) -> usize {
        self.groups.iter().map(|g| g.prefixes.len()).sum()
    }

    /// Distinct wildcard pattern lengths, in probe order.
    pub fn group_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().map(|g| g.len)
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }
}
