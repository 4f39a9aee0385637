//! Regular-expression HTTP request router.
//!
//! Routes pair a regex pattern with a handler. The sealed [`Router`] tries
//! them in a fixed order, splits the matched path into positional
//! [`Params`] and hands both to the handler. It is a `tower::Service`, so
//! any hyper/axum server can mount it.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::CanalConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Handler, HandlerResult, Params, Route, RouteError, Router, RouterOptions};
