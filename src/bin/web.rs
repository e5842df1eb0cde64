//! Web UI entry point for vapor.
//!
//! Run with: cargo run --bin vapor-web
//!
//! Then open http://127.0.0.1:5000 in your browser.

use clap::Parser;
use std::net::SocketAddr;
use vapor::{web::run_server, Config};

#[derive(Parser)]
#[command(name = "vapor-web")]
#[command(about = "Vapor web UI - boiling and condensation served to the browser")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Address to bind the server to (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load or create default config
    let (config, source) = load_config(&args.config);

    // Initialize logger (RUST_LOG wins over the configured level)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.log_level.as_str()),
    )
    .init();
    log::info!("Using configuration: {}", source);

    // Parse bind address
    let bind_str = args.bind.as_deref().unwrap_or(&config.server.bind);
    let bind: SocketAddr = bind_str
        .parse()
        .map_err(|e| format!("Invalid bind address '{}': {}", bind_str, e))?;

    // Run the server
    run_server(config, bind).await
}

/// Load configuration from file or use default, returning where it came from
fn load_config(config_path: &str) -> (Config, String) {
    // Try specified path first, then common locations
    let paths = [config_path, "vapor.yaml", "../config.yaml"];
    for path in paths {
        if let Ok(config) = Config::from_file(path) {
            return (config, path.to_string());
        }
    }

    (Config::default(), "defaults".to_string())
}
