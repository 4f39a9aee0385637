//! Path pattern matching.
//!
//! # Responsibilities
//! - Compile a route's pattern source once, at construction
//! - Test request paths against the compiled pattern
//! - Support substring (unanchored) and whole-path (anchored) matching
//!
//! # Design Decisions
//! - Unanchored is the default: a pattern matching anywhere in the path counts
//! - Anchored wraps the source as `^(?:source)$` so alternations stay whole
//! - The anchored form is only compiled for tables sealed in anchored mode;
//!   a source the regex engine accepts is always a valid unanchored pattern
//! - The original source text is kept verbatim; route ordering compares it

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a pattern is tested against the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The pattern may match any substring of the path.
    /// `/about` matches `/about-us` and `/x/about/y`.
    #[default]
    Unanchored,
    /// The pattern must match the entire path.
    Anchored,
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    mode: MatchMode,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` as an unanchored pattern.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;

        Ok(Self {
            source,
            mode: MatchMode::Unanchored,
            regex,
        })
    }

    /// The same source compiled for `mode`.
    ///
    /// Anchoring can fail for sources that are valid on their own, e.g. a
    /// verbose-mode pattern whose trailing `#` comment swallows the `)$`.
    pub fn with_mode(&self, mode: MatchMode) -> Result<Self, regex::Error> {
        if mode == self.mode {
            return Ok(self.clone());
        }

        let regex = match mode {
            MatchMode::Unanchored => Regex::new(&self.source)?,
            MatchMode::Anchored => Regex::new(&format!("^(?:{})$", self.source))?,
        };

        Ok(Self {
            source: self.source.clone(),
            mode,
            regex,
        })
    }

    /// The pattern text as it was registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true if `path` matches under this pattern's mode.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchored(source: &str) -> Pattern {
        Pattern::new(source)
            .unwrap()
            .with_mode(MatchMode::Anchored)
            .unwrap()
    }

    #[test]
    fn test_unanchored_matches_substring() {
        let pattern = Pattern::new("/about").unwrap();

        assert_eq!(pattern.mode(), MatchMode::Unanchored);
        assert!(pattern.matches("/about"));
        assert!(pattern.matches("/about-us"));
        assert!(pattern.matches("/x/about/y"));
        assert!(!pattern.matches("/items/"));
    }

    #[test]
    fn test_anchored_requires_whole_path() {
        let pattern = anchored("/about");

        assert_eq!(pattern.mode(), MatchMode::Anchored);
        assert!(pattern.matches("/about"));
        assert!(!pattern.matches("/about-us"));
        assert!(!pattern.matches("/x/about/y"));
    }

    #[test]
    fn test_anchored_alternation_is_grouped() {
        let pattern = anchored("/a|/b");

        assert!(pattern.matches("/b"));
        assert!(!pattern.matches("/a/extra"));
    }

    #[test]
    fn test_capture_pattern() {
        assert!(anchored("/items/([a-z-0-9]*)/").matches("/items/guitar/"));
        assert!(!anchored("/items/([a-z-0-9]*)/").matches("/items/Guitar/"));
        assert!(Pattern::new("/items/([a-z-0-9]*)/")
            .unwrap()
            .matches("/shop/items/jet-2/"));
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        assert!(Pattern::new("/items/(").is_err());
        assert!(Pattern::new("[z-a]").is_err());
    }

    #[test]
    fn test_verbose_comment_pattern_is_valid_unanchored() {
        let pattern = Pattern::new("(?x)/about # about page").unwrap();

        assert!(pattern.matches("/about"));
        assert!(pattern.with_mode(MatchMode::Anchored).is_err());
    }

    #[test]
    fn test_source_kept_verbatim() {
        let pattern = anchored(r"/items/(\d+)/");
        assert_eq!(pattern.as_str(), r"/items/(\d+)/");
    }
}
