//! Matcher construction options.

/// Order in which wildcard length groups are probed at query time.
///
/// Only matters when an input satisfies wildcard patterns of different
/// lengths; the first group that hits decides the reported pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeOrder {
    /// Longest prefix first: the most specific wildcard wins
    #[default]
    LongestFirst,
    /// Shortest prefix first: the most general wildcard wins
    ShortestFirst,
}

/// Matcher builder options.
#[derive(Debug, Clone, Default)]
pub struct MatcherOptions {
    /// Wildcard group probe order
    pub probe_order: ProbeOrder,
}

impl MatcherOptions {
    /// Create new matcher options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set probe order.
    pub fn with_probe_order(mut self, order: ProbeOrder) -> Self {
        self.probe_order = order;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_longest_first() {
        assert_eq!(MatcherOptions::new().probe_order, ProbeOrder::LongestFirst);
    }

    #[test]
    fn test_with_probe_order() {
        let opts = MatcherOptions::new().with_probe_order(ProbeOrder::ShortestFirst);
        assert_eq!(opts.probe_order, ProbeOrder::ShortestFirst);
    }
}
