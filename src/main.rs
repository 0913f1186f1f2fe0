use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use saudi95_backend::config::Config;
use saudi95_backend::llm::GeminiClient;
use saudi95_backend::routes::create_router;
use saudi95_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "saudi95_backend=debug,tower_http=debug".to_string()),
        )
        .init();

    // Missing credential is fatal; the process must not serve without it.
    let config = Config::from_env()?;
    info!(
        "Loaded configuration: model={}, allowed_origins={:?}",
        config.model, config.allowed_origins
    );

    let llm = Arc::new(GeminiClient::new(&config));
    let port = config.port;
    let app_state = AppState::new(config, llm);

    let app = create_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
