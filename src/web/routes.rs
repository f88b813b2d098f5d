//! Router construction.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::web::middleware::clacks::ClacksOverheadLayer;
use crate::web::middleware::request_id::RequestIdLayer;
use crate::web::{demo, report};

/// Creates the web server router.
///
/// `GET /` renders the demo page, `POST /report` collects violation
/// reports (any other method on it is answered with 405 + `Allow: POST`),
/// and `/assets/*` serves files from `assets_dir` with the prefix
/// stripped. Static asset lookups never touch the handlers; 404s for
/// missing files come straight from the file service.
pub fn create_router(app_state: AppState, assets_dir: &Path) -> Router {
    let router = Router::new()
        .route("/", get(demo::demo_page))
        .route("/report", post(report::receive_report))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(app_state);

    router.layer((
        // Outermost: per-request span + severity-proportional response logging.
        RequestIdLayer,
        // `x-clacks-overhead` on every response, whatever the route or status.
        ClacksOverheadLayer,
    ))
}
