use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use crate::config::constants::RISK_KEYWORDS;
use crate::enums::highlight_markup::HighlightMarkup;
use crate::errors::{SafeworkError, SafeworkResult};

static DEFAULT_HIGHLIGHTER: Lazy<TextHighlighter> = Lazy::new(|| {
    let keywords: Vec<String> = RISK_KEYWORDS.iter().map(ToString::to_string).collect();
    TextHighlighter::from_keywords(&keywords).unwrap_or_else(|_| TextHighlighter { pattern: None })
});

/// Wraps risk keywords found in extracted document text.
///
/// Matching is case-insensitive, leftmost-first, and prefers the longest
/// keyword starting at a position. The matched text is reinserted as-is, so
/// its original casing survives.
#[derive(Debug, Clone)]
pub struct TextHighlighter {
    pattern: Option<Regex>,
}

impl TextHighlighter {
    /// Highlighter for the built-in risk vocabulary.
    pub fn builtin() -> &'static Self {
        &DEFAULT_HIGHLIGHTER
    }

    pub fn from_keywords(keywords: &[String]) -> SafeworkResult<Self> {
        let mut terms: Vec<&str> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect();

        if terms.is_empty() {
            return Ok(Self { pattern: None });
        }

        // Longest first so alternation prefers "non-compliance" over a prefix of it.
        terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.to_lowercase().cmp(&b.to_lowercase())));
        terms.dedup_by(|a, b| a.eq_ignore_ascii_case(b));

        let alternation = terms
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!("(?:{alternation})"))
            .case_insensitive(true)
            .build()
            .map_err(|e| SafeworkError::config_error(
                &format!("invalid highlight keyword pattern: {e}"),
                Some("display.highlight_keywords"),
                None,
            ))?;

        Ok(Self { pattern: Some(pattern) })
    }

    /// Highlights line by line; line breaks are preserved exactly.
    pub fn highlight(&self, text: &str, markup: HighlightMarkup) -> String {
        text.split('\n')
            .map(|line| self.highlight_line(line, markup))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn highlight_line(&self, line: &str, markup: HighlightMarkup) -> String {
        let Some(pattern) = &self.pattern else {
            return markup.plain(line);
        };

        let mut output = String::with_capacity(line.len());
        let mut last = 0;

        for found in pattern.find_iter(line) {
            output.push_str(&markup.plain(&line[last..found.start()]));
            output.push_str(&markup.wrap(found.as_str()));
            last = found.end();
        }

        output.push_str(&markup.plain(&line[last..]));
        output
    }

    /// Every matched keyword occurrence, in order of appearance.
    pub fn find_terms<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern
            .as_ref()
            .map(|pattern| pattern.find_iter(text).map(|m| m.as_str()).collect())
            .unwrap_or_default()
    }
}
