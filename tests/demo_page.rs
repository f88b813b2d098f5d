//! Tests for the demo page, the composed CSP header, and static assets.

mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(uri: &str) -> Response<Body> {
    helpers::test_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn plain_request_renders_neutral_page() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("content-security-policy").is_none());

    let body = body_string(response).await;
    assert!(body.contains("<input name=\"send-csp\" type=\"checkbox\"/>"));
    assert!(body.contains("<input type=\"text\" name=\"default-src\" value=\"\">"));
    assert!(body.contains("<input type=\"text\" name=\"script-src\" value=\"\">"));
    assert!(body.contains("<input type=\"text\" name=\"style-src\" value=\"\">"));
    assert!(body.contains("<input type=\"text\" name=\"img-src\" value=\"\">"));
    assert!(!body.contains("You got a content security policy"));
}

#[tokio::test]
async fn send_csp_with_default_src_sets_exact_header() {
    let response = get("/?send-csp=on&default-src='self'").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-security-policy").unwrap(),
        "report-uri /report; default-src 'self';"
    );
}

#[tokio::test]
async fn send_csp_alone_sends_bare_report_uri_policy() {
    let response = get("/?send-csp=on").await;

    assert_eq!(
        response.headers().get("content-security-policy").unwrap(),
        "report-uri /report;"
    );

    let body = body_string(response).await;
    assert!(body.contains("<input name=\"send-csp\" type=\"checkbox\" checked/>"));
    assert!(body.contains("You got a content security policy: report-uri /report;"));
}

#[tokio::test]
async fn checkbox_requires_exact_on_value() {
    let response = get("/?send-csp=off&default-src='self'").await;

    assert!(response.headers().get("content-security-policy").is_none());

    let body = body_string(response).await;
    assert!(body.contains("<input name=\"send-csp\" type=\"checkbox\"/>"));
    // The directive value still round-trips into the form.
    assert!(body.contains("<input type=\"text\" name=\"default-src\" value=\"'self'\">"));
}

#[tokio::test]
async fn reflected_directive_values_cannot_break_out_of_markup() {
    let response = get("/?default-src=%22%3E%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("value=\"\"><script>alert(1)</script>"));
    assert!(body.contains("&quot;"));
}

#[tokio::test]
async fn assets_are_served_with_prefix_stripped() {
    let response = get("/assets/pathonly.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/css"));

    let body = body_string(response).await;
    assert!(body.contains(".demo-path-only"));
}

#[tokio::test]
async fn missing_asset_is_a_404() {
    let response = get("/assets/no-such-file.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn every_response_carries_the_clacks_overhead() {
    for uri in ["/", "/assets/pathonly.css", "/assets/no-such-file.css", "/no-such-route"] {
        let response = get(uri).await;
        assert_eq!(
            response.headers().get("x-clacks-overhead").unwrap(),
            "GNU Terry Pratchett",
            "missing clacks overhead on {uri}"
        );
    }

    let response = helpers::test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-clacks-overhead").unwrap(),
        "GNU Terry Pratchett"
    );
}
