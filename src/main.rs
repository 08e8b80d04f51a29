//! Transfer API server.
//!
//! Boot order: config, logging, PostgreSQL pool, HTTP gateway.

use anyhow::Context;

use transfer_api::config::AppConfig;
use transfer_api::db::Database;
use transfer_api::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&config);

    tracing::info!(
        "Starting Transfer API in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    // Config port, allow --port override
    if let Some(port) = get_port_override() {
        config.server.port = port;
    }

    let db = Database::connect(&config.postgres_url, config.max_connections)
        .await
        .context("failed to connect to PostgreSQL")?;

    gateway::serve(&config, db).await;

    Ok(())
}
