mod config;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing `.env` is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "product builder listening");
    axum::serve(listener, app).await?;
    Ok(())
}
