//! simplematch - Fast literal and trailing-wildcard matching for Rust
//!
//! Classifies strings (typically user agents) against a curated pattern list:
//! - Literal patterns match only the identical string (O(1) lookup)
//! - Wildcard patterns (`prefix*`) match any string starting with `prefix`
//! - Wildcard lookup costs one hash probe per distinct pattern length,
//!   independent of how many wildcard patterns are configured
//!
//! # Example
//!
//! ```rust
//! use simplematch_r::Matcher;
//!
//! let matcher = Matcher::new([
//!     "Ask",
//!     "Ask*",
//!     "Mozilla/2.0 (compatible; Ask Jeeves)",
//!     "Baiduspider-ads*",
//! ])
//! .unwrap();
//!
//! assert_eq!(matcher.find_pattern("Ask").as_deref(), Some("Ask"));
//! assert_eq!(matcher.find_pattern("AskBot").as_deref(), Some("Ask*"));
//! assert_eq!(
//!     matcher.find_pattern("Baiduspider-adserver").as_deref(),
//!     Some("Baiduspider-ads*")
//! );
//! assert!(matcher.find("askbot").is_none());
//! ```
//!
//! # Pattern Syntax
//!
//! | Type | Example | Matches |
//! |------|---------|---------|
//! | Literal | `Ask` | `Ask` only |
//! | Wildcard | `Ask*` | `AskBot`, `Ask Jeeves`, not `Ask` |
//! | Universal | `*` | any non-empty string |
//!
//! A wildcard may appear at most once and only as the last character.
//! A wildcard pattern only matches inputs at least as long as the pattern
//! itself, wildcard included. The empty string never matches.

pub mod error;
pub mod loader;
pub mod matcher;
pub mod options;
pub mod pattern;

// Re-export commonly used items
pub use error::{MatchError, PatternError, PatternErrorKind, Result};
pub use loader::{load_patterns_from_file, parse_patterns, read_patterns, DEFAULT_PATTERNS};
pub use matcher::{Match, Matcher};
pub use options::{MatcherOptions, ProbeOrder};
pub use pattern::{Pattern, WILDCARD};
