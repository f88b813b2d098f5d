//! Shared application state.

use std::sync::Arc;

/// Absolute origins the demo page pulls assets from.
///
/// `localhost` and `sub.localhost` resolve to this server out of the box;
/// `unlocalhost` and `sub.unlocalhost` need an /etc/hosts entry pointing
/// back at 127.0.0.1 for the foreign-domain sections to load at all.
#[derive(Debug, Clone)]
pub struct DemoOrigins {
    pub same_domain: String,
    pub subdomain: String,
    pub foreign_domain: String,
    pub foreign_subdomain: String,
}

impl DemoOrigins {
    pub fn from_port(port: u16) -> Self {
        Self {
            same_domain: format!("http://localhost:{port}"),
            subdomain: format!("http://sub.localhost:{port}"),
            foreign_domain: format!("http://unlocalhost:{port}"),
            foreign_subdomain: format!("http://sub.unlocalhost:{port}"),
        }
    }
}

/// Shared state for the web server. Cheap to clone; handlers only ever
/// read from it.
#[derive(Clone)]
pub struct AppState {
    pub origins: Arc<DemoOrigins>,
}

impl AppState {
    pub fn new(origins: DemoOrigins) -> Self {
        Self {
            origins: Arc::new(origins),
        }
    }
}
