//! endpoint-hitter - parallel endpoint dispatcher
//!
//! One-shot batch mode dispatches the configured uuid file and exits;
//! `serve` mode starts the HTTP surface and dispatches per upload.

use clap::Parser;
use endpoint_hitter::config::{Config, Mode};
use endpoint_hitter::core::{Dispatcher, read_identifiers};
use endpoint_hitter::server::{AppState, HttpServer};
use endpoint_hitter::utils::error::Result;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    info!("[Startup] Endpoint Hitter is starting");

    let config = Config::parse();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    config.validate()?;
    info!(
        "System code: {}, App Name: {}",
        config.app_system_code, config.app_name
    );

    let dispatcher = Dispatcher::new(config.dispatcher_config())?;

    match config.mode {
        Some(Mode::Serve { port }) => {
            HttpServer::new(port, AppState::new(dispatcher)).start().await
        }
        None => {
            let file = File::open(&config.uuid_file_path)?;
            let uuids = read_identifiers(BufReader::new(file))?;
            dispatcher.dispatch(&uuids).await;
            Ok(())
        }
    }
}
