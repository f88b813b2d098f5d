//! Process configuration, loaded from the environment.

use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::path::PathBuf;

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    /// TCP port the server listens on. The demo page derives its
    /// same-domain/subdomain/foreign-domain asset URLs from this port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base level for this crate's log filter (overridable via `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory served under `/assets`.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::raw()).extract()
    }
}
