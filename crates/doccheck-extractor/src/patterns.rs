//! Keyword pattern templates
//!
//! Every keyword is searched with the same five phrasings, tried in order.
//! The value is everything after the phrasing up to the next newline,
//! comma, period, or semicolon.

use regex::{Regex, RegexBuilder};

/// Capture group for a value
const VALUE_CAPTURE: &str = r"([^\n,.;]+)";

/// One of the phrasings a keyword value can appear in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternTemplate {
    /// `budget: $100`, `budget = $100`, `budget $100`
    Separator,
    /// `budget is $100`
    Is,
    /// `budget of $100`
    Of,
    /// `the budget is $100`
    TheIs,
    /// `a budget of $100`
    AOf,
}

impl PatternTemplate {
    /// All templates, in the order they are tried
    pub const ALL: [PatternTemplate; 5] = [
        PatternTemplate::Separator,
        PatternTemplate::Is,
        PatternTemplate::Of,
        PatternTemplate::TheIs,
        PatternTemplate::AOf,
    ];

    /// Short name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTemplate::Separator => "separator",
            PatternTemplate::Is => "is",
            PatternTemplate::Of => "of",
            PatternTemplate::TheIs => "the-is",
            PatternTemplate::AOf => "a-of",
        }
    }

    /// Render the regular expression for a keyword expression
    ///
    /// `keyword` must already be regex-escaped.
    pub fn render(&self, keyword: &str) -> String {
        match self {
            PatternTemplate::Separator => format!(r"{keyword}[:\s=]+{VALUE_CAPTURE}"),
            PatternTemplate::Is => format!(r"{keyword}\s+is\s+{VALUE_CAPTURE}"),
            PatternTemplate::Of => format!(r"{keyword}\s+of\s+{VALUE_CAPTURE}"),
            PatternTemplate::TheIs => format!(r"the\s+{keyword}\s+is\s+{VALUE_CAPTURE}"),
            PatternTemplate::AOf => format!(r"a\s+{keyword}\s+of\s+{VALUE_CAPTURE}"),
        }
    }
}

/// Compiled patterns for a single keyword
#[derive(Debug, Clone)]
pub(crate) struct KeywordPatterns {
    pub keyword: String,
    pub regexes: Vec<(PatternTemplate, Regex)>,
}

impl KeywordPatterns {
    /// Compile all templates for a keyword
    pub fn compile(keyword: &str, word_boundaries: bool) -> Result<Self, regex::Error> {
        let escaped = regex::escape(keyword);
        let expr = if word_boundaries {
            format!(r"\b{escaped}\b")
        } else {
            escaped
        };

        let regexes = PatternTemplate::ALL
            .iter()
            .map(|template| {
                RegexBuilder::new(&template.render(&expr))
                    .case_insensitive(true)
                    .build()
                    .map(|regex| (*template, regex))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            keyword: keyword.to_string(),
            regexes,
        })
    }
}
