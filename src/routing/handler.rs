//! Handler contract.
//!
//! A handler receives the request and its positional parameters and either
//! produces the complete response or fails with an error whose `Display`
//! text is reported to the router.

use std::future::Future;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::BoxError;

use crate::routing::params::Params;

/// Outcome of a handler invocation.
pub type HandlerResult = Result<Response, BoxError>;

/// Application code invoked for a matched route.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request<Body>, params: Params) -> BoxFuture<'static, HandlerResult>;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request<Body>, Params) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    fn call(&self, req: Request<Body>, params: Params) -> BoxFuture<'static, HandlerResult> {
        Box::pin(self(req, params))
    }
}
