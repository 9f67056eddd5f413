//! Severity module - coarse priority of a contradiction

use std::fmt;

/// Priority tag attached to a contradiction
///
/// - High: the keyword is business critical (money or dates)
/// - Medium: every other keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Disagreement on a critical keyword
    High,

    /// Disagreement on any other keyword
    Medium,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Severity::High.as_str(), "high");
        assert_eq!(Severity::Medium.as_str(), "medium");
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Severity::High.to_string(), "high");
    }
}
