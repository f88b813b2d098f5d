//! CSP violation reporting endpoint.
//!
//! Browsers POST a JSON document here whenever the served policy blocks a
//! resource. The payload is logged verbatim and never parsed: the demo
//! only needs the report to show up in the server log next to the policy
//! that provoked it, and the report schema is the browser's business.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// `POST /report` — logs browser CSP violation reports.
///
/// The body is read without a size cap; fine for a local demo tool.
pub async fn receive_report(request: Request) -> Response {
    match axum::body::to_bytes(request.into_body(), usize::MAX).await {
        Ok(body) => {
            warn!(report = %String::from_utf8_lossy(&body), "CSP violation reported");
            StatusCode::OK.into_response()
        }
        Err(e) => {
            warn!(error = %e, "Unable to read report body");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
