use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::engine::ScoreEngine;
use crate::scoring::weights::WeightSet;

/// Startup configuration problems. Any of these aborts before the server binds.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("weight '{name}' has a non-numeric value '{value}'")]
    InvalidWeight { name: String, value: String },

    #[error("weight '{name}' must be a finite, non-negative number (got {value})")]
    WeightOutOfRange { name: String, value: f64 },

    #[error("decay time-constant must be a finite number of days > 0 (got {0})")]
    InvalidTau(f64),

    #[error("{var} is not a valid number: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Search backend settings
    pub github: GitHubConfig,
    /// Score engine settings
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the search API, without trailing slash
    pub base_url: String,
    /// Optional bearer token sent with every search request
    pub token: Option<String>,
    /// Per-request timeout in seconds (capped at 60)
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight specification, e.g. "stars:0.5,forks:0.3,recency:0.2"
    pub weights: String,
    /// Decay time-constant in days
    pub tau_days: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            github: GitHubConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            timeout_secs: 10,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: "stars:0.5,forks:0.3,recency:0.2".to_string(),
            tau_days: 60.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source (the process
    /// environment in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("REPO_RANK_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(url) = lookup("GITHUB_BASE_URL") {
            config.github.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(token) = lookup("GITHUB_TOKEN") {
            let token = token.trim();
            if !token.is_empty() {
                config.github.token = Some(token.to_string());
            }
        }
        if let Some(val) = lookup("GITHUB_TIMEOUT_SECS") {
            let secs: u64 = val.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "GITHUB_TIMEOUT_SECS",
                value: val.clone(),
            })?;
            config.github.timeout_secs = secs.clamp(1, 60);
        }
        if let Some(weights) = lookup("SCORE_WEIGHTS") {
            config.scoring.weights = weights;
        }
        if let Some(val) = lookup("SCORE_TAU_DAYS") {
            config.scoring.tau_days =
                val.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    var: "SCORE_TAU_DAYS",
                    value: val.clone(),
                })?;
        }

        Ok(config)
    }

    /// Parse the weight specification and decay constant into a ready engine.
    pub fn score_engine(&self) -> Result<ScoreEngine, ConfigError> {
        let weights = WeightSet::parse(&self.scoring.weights)?;
        ScoreEngine::new(weights, self.scoring.tau_days)
    }
}
