//! Shared fixtures for integration tests.

use axum::Router;
use cspdemo::state::{AppState, DemoOrigins};
use cspdemo::web::create_router;
use std::path::Path;

/// Router wired the same way `App::run` wires it, with the default port
/// and the repository's own `assets/` directory.
pub fn test_router() -> Router {
    let state = AppState::new(DemoOrigins::from_port(3000));
    create_router(state, Path::new("assets"))
}
