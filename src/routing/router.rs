//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Order the route table once, when it is sealed
//! - Look up the first matching route for a request path
//! - Invoke the handler and surface its failures as 500 responses
//! - Answer 404 when nothing matches
//!
//! # Design Decisions
//! - Immutable after `build()` (shared via Arc, thread-safe without locks)
//! - O(n) scan in table order; first match wins
//! - Default order: descending comparison of pattern source text, so
//!   `/items/...` is tried before `/about` and `/css/` before `/`
//! - Handler failures are contained per request

use std::cmp::Reverse;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tower::Service;

use crate::http::request::decode_path;
use crate::http::response::plain_text;
use crate::http::X_REQUEST_ID;
use crate::observability::metrics;
use crate::routing::matcher::MatchMode;
use crate::routing::params::Params;
use crate::routing::route::{Route, RouteError};

/// Body sent when no route matches.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Body sent for handler failures when error detail is hidden.
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

/// Label used in metrics when no route matched.
const NO_ROUTE: &str = "none";

/// Order in which the route table is tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrder {
    /// Descending byte-wise order of the pattern source text.
    #[default]
    DescendingSource,
    /// Descending declared priority; ties keep registration order.
    Priority,
}

/// Dispatch policy for a router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    pub match_mode: MatchMode,
    pub order: RouteOrder,
    /// Send the handler's error message as the 500 body.
    pub expose_error_detail: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            order: RouteOrder::default(),
            expose_error_detail: true,
        }
    }
}

/// Sort routes in place. Stable, so equal keys keep registration order.
pub fn sort_routes(routes: &mut [Route], order: RouteOrder) {
    match order {
        RouteOrder::DescendingSource => routes.sort_by(|a, b| b.pattern().cmp(a.pattern())),
        RouteOrder::Priority => routes.sort_by_key(|r| Reverse(r.priority())),
    }
}

/// Accumulates routes until the table is sealed.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
    options: RouterOptions,
}

impl RouterBuilder {
    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a route to the table.
    pub fn add_route(&mut self, route: Route) -> &mut Self {
        tracing::debug!(pattern = %route.pattern(), priority = route.priority(), "Route registered");
        self.routes.push(route);
        self
    }

    /// Chaining form of [`add_route`](Self::add_route).
    pub fn route(mut self, route: Route) -> Self {
        self.add_route(route);
        self
    }

    /// Compile every pattern for the match mode, sort the table once and
    /// freeze it.
    pub fn build(self) -> Result<Router, RouteError> {
        let RouterBuilder { routes, options } = self;
        let mut routes = routes
            .into_iter()
            .map(|route| route.with_mode(options.match_mode))
            .collect::<Result<Vec<_>, _>>()?;
        sort_routes(&mut routes, options.order);

        tracing::info!(
            routes = routes.len(),
            order = ?options.order,
            match_mode = ?options.match_mode,
            "Route table sealed"
        );

        Ok(Router {
            inner: Arc::new(Inner { routes, options }),
        })
    }
}

struct Inner {
    routes: Vec<Route>,
    options: RouterOptions,
}

/// A sealed route table. Cloning shares the same table.
#[derive(Clone)]
pub struct Router {
    inner: Arc<Inner>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// Routes in the order they are tried.
    pub fn routes(&self) -> &[Route] {
        &self.inner.routes
    }

    pub fn len(&self) -> usize {
        self.inner.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.routes.is_empty()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.inner.options
    }

    /// First route whose pattern matches the decoded `path`.
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.inner.routes.iter().find(|route| {
            tracing::debug!(path = %path, pattern = %route.pattern(), "Checking route");
            route.matches(path)
        })
    }

    /// Match the request, invoke the handler and produce the response.
    pub async fn dispatch(&self, req: Request<Body>) -> Response {
        let start_time = Instant::now();
        let raw_path = req.uri().path().to_owned();
        let path = decode_path(&raw_path).into_owned();
        let request_id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let Some(route) = self.find(&path) else {
            tracing::debug!(request_id = %request_id, path = %raw_path, "No route matched");
            metrics::record_dispatch(NO_ROUTE, StatusCode::NOT_FOUND, start_time);
            return plain_text(StatusCode::NOT_FOUND, NOT_FOUND_BODY);
        };

        tracing::debug!(
            request_id = %request_id,
            path = %raw_path,
            pattern = %route.pattern(),
            "Found route"
        );

        let params = Params::parse(&path);
        let response = match route.handler().call(req, params).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    request_id = %request_id,
                    path = %raw_path,
                    pattern = %route.pattern(),
                    error = %e,
                    "Handler failed"
                );
                if self.inner.options.expose_error_detail {
                    plain_text(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
                } else {
                    plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
                }
            }
        };

        metrics::record_dispatch(route.pattern(), response.status(), start_time);
        response
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.inner.routes)
            .field("options", &self.inner.options)
            .finish()
    }
}

impl Service<Request<Body>> for Router {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let router = self.clone();
        Box::pin(async move { Ok(router.dispatch(req).await) })
    }
}
