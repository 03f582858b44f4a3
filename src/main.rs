use tracing_subscriber::EnvFilter;

use repo_rank::api;
use repo_rank::config::Config;
use repo_rank::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Search backend: {}", config.github.base_url);
    tracing::info!(
        "Scoring: weights '{}', tau {} days",
        config.scoring.weights,
        config.scoring.tau_days
    );

    // Weight/decay problems abort here, before anything is served
    let state = AppState::new(config.clone())?;

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
