use clap::Parser;
use cspdemo::app::App;
use cspdemo::cli::Args;
use cspdemo::config::Config;
use cspdemo::logging::setup_logging;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Load config and setup logging before anything else so startup logs
    // are never silently dropped.
    let config = Config::load().expect("Failed to load config");
    setup_logging(&config, args.tracing);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        "starting cspdemo"
    );

    match App::new(config).run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "server terminated");
            ExitCode::FAILURE
        }
    }
}
