use kage::{fatal, info, server, ServerConfig};

#[tokio::main]
async fn main() {
    let config = ServerConfig::load();
    let log = config.logger("Main Process");

    info!(log, "Attempting to start server on Port {}...", config.port);

    if let Err(err) = server::run(&config, &log).await {
        fatal!(log, "Failed to start server on port {}: {}", config.port, err);
    }
}
