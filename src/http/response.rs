//! Response helpers.
//!
//! # Responsibilities
//! - Build the router's own plain-text responses (404, 500)
//!
//! # Design Decisions
//! - Bodies end with a newline and carry `nosniff`, matching the
//!   error pages of common HTTP servers

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// A `text/plain` response with `body` followed by a newline.
pub fn plain_text(status: StatusCode, body: &str) -> Response {
    let mut response = (status, format!("{}\n", body)).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_response() {
        let response = plain_text(StatusCode::NOT_FOUND, "404 page not found");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"404 page not found\n");
    }
}
