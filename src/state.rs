use std::sync::Arc;

use crate::config::Config;
use crate::github::client::{GitHubClient, SearchBackend};
use crate::scoring::engine::ScoreEngine;

/// Shared application state. Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<ScoreEngine>,
    pub backend: Arc<dyn SearchBackend>,
}

impl AppState {
    /// Validate the scoring configuration and build the search client.
    /// Fails fast on a malformed weight specification or decay constant.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let engine = config.score_engine()?;
        let backend = GitHubClient::new(&config.github)?;
        Ok(Self::with_backend(config, engine, Arc::new(backend)))
    }

    pub fn with_backend(
        config: Config,
        engine: ScoreEngine,
        backend: Arc<dyn SearchBackend>,
    ) -> Self {
        Self {
            config,
            engine: Arc::new(engine),
            backend,
        }
    }
}
