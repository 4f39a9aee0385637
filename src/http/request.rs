//! Request identification and path extraction.
//!
//! # Responsibilities
//! - Assign a UUID v4 request ID to requests that arrive without one
//! - Echo the ID back on the response
//! - Percent-decode the request path for routing
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept as is
//! - Routing sees the decoded path; logs keep the path as received

use std::borrow::Cow;

use axum::http::{HeaderName, HeaderValue, Request};
use percent_encoding::percent_decode_str;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Percent-decode a URI path. Invalid UTF-8 is replaced, not rejected.
pub fn decode_path(path: &str) -> Cow<'_, str> {
    percent_decode_str(path).decode_utf8_lossy()
}

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

/// Layer that sets `x-request-id` on incoming requests.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Layer that copies `x-request-id` onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_decode_space() {
        assert_eq!(decode_path("/items/red%20bike/"), "/items/red bike/");
    }

    #[test]
    fn test_decode_multibyte_utf8() {
        assert_eq!(decode_path("/items/caf%C3%A9/"), "/items/café/");
    }

    #[test]
    fn test_plain_path_borrowed() {
        assert!(matches!(decode_path("/about"), Cow::Borrowed("/about")));
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        assert_eq!(decode_path("/x/%FF/"), "/x/\u{FFFD}/");
    }

    #[test]
    fn test_generates_uuid() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let id = MakeRequestUuid.make_request_id(&req).unwrap();

        let text = id.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }
}
