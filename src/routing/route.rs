//! Route definitions.
//!
//! A `Route` pairs a compiled pattern with a handler. It is assembled by
//! `RouteBuilder` and cannot exist half-configured: a bad pattern or a
//! missing part is reported by `build()`, before registration.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::routing::handler::Handler;
use crate::routing::matcher::{MatchMode, Pattern};

/// Error raised while constructing a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The source is valid but cannot be wrapped as `^(?:source)$` for
    /// whole-path matching.
    #[error("route pattern `{pattern}` cannot be anchored to the whole path: {source}")]
    AnchoredPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("route has no pattern")]
    MissingPattern,

    #[error("route `{0}` has no handler")]
    MissingHandler(String),
}

/// A registered pattern/handler pair.
#[derive(Clone)]
pub struct Route {
    pattern: Pattern,
    handler: Arc<dyn Handler>,
    priority: i32,
}

impl Route {
    /// Build a route from a pattern source and a handler.
    pub fn new(pattern: &str, handler: impl Handler) -> Result<Self, RouteError> {
        Self::builder().pattern(pattern).handler(handler).build()
    }

    pub fn builder() -> RouteBuilder {
        RouteBuilder::default()
    }

    /// The pattern source as registered.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Declared priority (higher = checked first under priority ordering).
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Mode the pattern is compiled for.
    pub fn match_mode(&self) -> MatchMode {
        self.pattern.mode()
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }

    /// Recompile the pattern for `mode`, keeping handler and priority.
    pub(crate) fn with_mode(self, mode: MatchMode) -> Result<Self, RouteError> {
        let pattern = self
            .pattern
            .with_mode(mode)
            .map_err(|source| RouteError::AnchoredPattern {
                pattern: self.pattern.as_str().to_string(),
                source,
            })?;

        Ok(Self { pattern, ..self })
    }

    pub(crate) fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .field("mode", &self.pattern.mode())
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Collects the parts of a route before a single `build()`.
#[derive(Default)]
pub struct RouteBuilder {
    pattern: Option<String>,
    handler: Option<Arc<dyn Handler>>,
    priority: i32,
}

impl RouteBuilder {
    pub fn pattern(mut self, source: impl Into<String>) -> Self {
        self.pattern = Some(source.into());
        self
    }

    pub fn handler(mut self, handler: impl Handler) -> Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Compile the pattern and produce an immutable route.
    pub fn build(self) -> Result<Route, RouteError> {
        let source = self.pattern.ok_or(RouteError::MissingPattern)?;
        let handler = self
            .handler
            .ok_or_else(|| RouteError::MissingHandler(source.clone()))?;

        let pattern = Pattern::new(source.as_str()).map_err(|source_err| RouteError::InvalidPattern {
            pattern: source.clone(),
            source: source_err,
        })?;

        Ok(Route {
            pattern,
            handler,
            priority: self.priority,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::handler::HandlerResult;
    use crate::routing::params::Params;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;

    async fn ok(_req: Request<Body>, _params: Params) -> HandlerResult {
        Ok(StatusCode::OK.into_response())
    }

    #[test]
    fn test_build_route() {
        let route = Route::builder()
            .pattern("/items/([a-z-0-9]*)/")
            .handler(ok)
            .priority(5)
            .build()
            .unwrap();

        assert_eq!(route.pattern(), "/items/([a-z-0-9]*)/");
        assert_eq!(route.priority(), 5);
        assert_eq!(route.match_mode(), MatchMode::Unanchored);
        assert!(route.matches("/items/bike/"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = Route::new("/items/(", ok).unwrap_err();

        match &err {
            RouteError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "/items/("),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("/items/("));
    }

    #[test]
    fn test_verbose_pattern_accepted() {
        let route = Route::new("(?x)/about # about page", ok).unwrap();
        assert!(route.matches("/about"));
    }

    #[test]
    fn test_verbose_pattern_cannot_be_anchored() {
        let route = Route::new("(?x)/about # about page", ok).unwrap();
        let err = route.with_mode(MatchMode::Anchored).unwrap_err();

        match err {
            RouteError::AnchoredPattern { pattern, .. } => {
                assert_eq!(pattern, "(?x)/about # about page")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_with_mode_anchors() {
        let route = Route::new("/about", ok)
            .unwrap()
            .with_mode(MatchMode::Anchored)
            .unwrap();

        assert_eq!(route.match_mode(), MatchMode::Anchored);
        assert!(route.matches("/about"));
        assert!(!route.matches("/about-us"));
    }

    #[test]
    fn test_missing_pattern_rejected() {
        let err = Route::builder().handler(ok).build().unwrap_err();
        assert!(matches!(err, RouteError::MissingPattern));
    }

    #[test]
    fn test_missing_handler_rejected() {
        let err = Route::builder().pattern("/about").build().unwrap_err();
        assert!(matches!(err, RouteError::MissingHandler(ref p) if p == "/about"));
    }

    #[test]
    fn test_default_priority_is_zero() {
        let route = Route::new("/about", ok).unwrap();
        assert_eq!(route.priority(), 0);
    }
}
