//! Positional path parameters.

use std::collections::HashMap;

/// Non-empty path segments in the order they appear in the request path.
///
/// `/items/bike/` parses to `["items", "bike"]`. Segment `0` is the first
/// non-empty segment; empty segments (leading, trailing or repeated `/`) do
/// not take an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    segments: Vec<String>,
}

impl Params {
    /// Split `path` on `/`, dropping empty segments.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();

        Self { segments }
    }

    /// Segment at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Segment by stringified index (`"0"`, `"1"`, ...).
    pub fn get_key(&self, key: &str) -> Option<&str> {
        key.parse::<usize>().ok().and_then(|index| self.get(index))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// String-keyed view: `{"0": "items", "1": "bike"}`.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.segments
            .iter()
            .enumerate()
            .map(|(index, segment)| (index.to_string(), segment.clone()))
            .collect()
    }
}
