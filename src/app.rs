use crate::config::Config;
use crate::state::{AppState, DemoOrigins};
use crate::web::create_router;
use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Main application struct tying configuration to the web server.
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance from loaded configuration.
    pub fn new(config: Config) -> Self {
        let app_state = AppState::new(DemoOrigins::from_port(config.port));
        App { config, app_state }
    }

    /// Bind the listener and serve requests until the process is killed.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        let router = create_router(self.app_state, &self.config.assets_dir);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!(
            port = self.config.port,
            assets_dir = %self.config.assets_dir.display(),
            "web server listening"
        );

        axum::serve(listener, router)
            .await
            .context("web server exited with an error")
    }
}
