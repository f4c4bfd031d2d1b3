use std::sync::Arc;

use tracing::info;

use notedrive::{Config, GraphClient, NoteRepository, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = notedrive::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        notedrive::logging::init_console_only(&config.logging.level);
    }

    info!("notedrive - notes API over a cloud drive");

    let drive = match GraphClient::new(&config.graph) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to create drive client: {}", e);
            std::process::exit(1);
        }
    };
    let repo = NoteRepository::new(drive, config.graph.notes_folder.clone());

    let server = WebServer::new(&config.server, repo);
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {}", e);
        std::process::exit(1);
    }
}
