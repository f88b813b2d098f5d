//! The demo page handler.

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::error;

use crate::csp::{SourceLists, build_csp_header};
use crate::page::{RenderContext, render_page};
use crate::state::AppState;

/// Query parameters round-tripped through the settings form.
#[derive(Debug, Deserialize)]
pub struct DemoParams {
    /// Checkbox value; the browser sends `on` when ticked and omits the
    /// parameter entirely when not.
    #[serde(rename = "send-csp")]
    send_csp: Option<String>,
    #[serde(rename = "default-src")]
    default_src: Option<String>,
    #[serde(rename = "script-src")]
    script_src: Option<String>,
    #[serde(rename = "style-src")]
    style_src: Option<String>,
    #[serde(rename = "img-src")]
    img_src: Option<String>,
}

/// `GET /` — renders the demo page, with the composed
/// `Content-Security-Policy` header attached when requested.
pub async fn demo_page(
    State(state): State<AppState>,
    Query(params): Query<DemoParams>,
) -> Response {
    let send_csp = params.send_csp.as_deref() == Some("on");
    let sources = SourceLists {
        default_src: params.default_src.unwrap_or_default(),
        script_src: params.script_src.unwrap_or_default(),
        style_src: params.style_src.unwrap_or_default(),
        img_src: params.img_src.unwrap_or_default(),
    };

    let csp_header = if send_csp {
        build_csp_header(&sources)
    } else {
        String::new()
    };

    let ctx = RenderContext {
        send_csp,
        sources,
        csp_header,
    };

    let html = match render_page(&ctx, &state.origins) {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "Failed to render demo page");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };

    let mut response = Html(html).into_response();
    if !ctx.csp_header.is_empty() {
        // Directive values go into the header verbatim, so they may not
        // form a legal header value; drop the header rather than the page.
        if let Ok(value) = HeaderValue::from_str(&ctx.csp_header) {
            response
                .headers_mut()
                .insert(header::CONTENT_SECURITY_POLICY, value);
        }
    }
    response
}
