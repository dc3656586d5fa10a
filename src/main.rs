use ccr_gateway::prelude::*;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    setup_logger();

    let config = Config::from_env()?;
    let client = Arc::new(CcrClient::new(&config));

    // Fail fast on bad credentials instead of on the first lookup.
    client.start().await?;

    let state = AppState {
        client,
        access_token: config.access_token.clone(),
    };
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
