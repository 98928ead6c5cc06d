mod config;
mod routes;

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal in production.
        if !e.not_found() {
            eprintln!("could not load .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = match config::HostConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid poll configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        period = %config.poll.period_id,
        aliases = config.poll.aliases.len(),
        timeout_ms = config.poll.fetch_timeout_ms,
        "poll configured"
    );

    let port = config.port;
    let app = match routes::app(config.poll) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            return ExitCode::FAILURE;
        }
    };

    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%port, "pollboard listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
