use clap::Parser;
use todo_core::MongoStore;
use todo_server::{AppState, Config};
use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before reading RUST_LOG or any setting.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(err) => debug!(%err, "no environment file loaded"),
    }

    let config = Config::parse();

    info!(host = %config.mongo.host, port = config.mongo.port, "dialing mongo");
    let store = MongoStore::connect(&config.mongo.connection_string()).await?;

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!(addr = %listener.local_addr()?, "listening");

    todo_server::run_until_shutdown(listener, AppState::new(store, config.api_key)).await?;
    Ok(())
}
