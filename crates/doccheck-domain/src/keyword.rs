//! Keyword module - the fixed analysis vocabulary

/// Business keywords searched for in every document, in scan order
///
/// The order matters: extraction walks the vocabulary front to back, and the
/// contradiction report lists keywords in the order they were first seen.
pub const ANALYSIS_KEYWORDS: &[&str] = &[
    "budget",
    "deadline",
    "project name",
    "team size",
    "duration",
    "cost",
    "completion date",
    "start date",
    "end date",
    "total amount",
    "price",
    "quantity",
    "number",
    "amount",
    "percentage",
    "percent",
    "target",
    "goal",
    "objective",
    "requirement",
    "specification",
    "version",
];

/// Keywords whose disagreements are reported with high severity
pub const CRITICAL_KEYWORDS: &[&str] = &["budget", "deadline", "cost", "price"];

/// Check whether a term belongs to the analysis vocabulary
///
/// # Examples
///
/// ```
/// use doccheck_domain::keyword::is_known_keyword;
///
/// assert!(is_known_keyword("team size"));
/// assert!(!is_known_keyword("colour"));
/// ```
pub fn is_known_keyword(term: &str) -> bool {
    ANALYSIS_KEYWORDS.contains(&term)
}
