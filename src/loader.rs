use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::error::{MatchError, Result};

/// Built-in patterns for well-known crawler user agents.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "Ask",
    "Ask*",
    "Mozilla/1.0 (compatible; Ask Jeeves/Teoma*",
    "Mozilla/2.0 (compatible; Ask Jeeves/Teoma*",
    "Mozilla/2.0 (compatible; Ask Jeeves)",
    "Baiduspider-image*",
    "Baiduspider-ads*",
    "Baiduspider-cpro*",
    "Baiduspider-favo*",
];

/// Split pattern text into patterns, one per line.
///
/// Each line is trimmed. Blank lines become empty patterns, which the matcher
/// accepts but never matches, so pattern indices stay equal to line indices.
pub fn parse_patterns(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim().to_string()).collect()
}

/// Read patterns from a buffered reader, one per line.
pub fn read_patterns(reader: impl BufRead) -> Result<Vec<String>> {
    let mut patterns = Vec::new();
    for line in reader.lines() {
        patterns.push(line?.trim().to_string());
    }
    Ok(patterns)
}

/// Read patterns from a file, one per line.
pub fn load_patterns_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MatchError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let patterns = parse_patterns(&text);
    tracing::debug!(
        path = %path.display(),
        count = patterns.len(),
        "loaded match patterns"
    );
    Ok(patterns)
}
