use chrono::{DateTime, Utc};

use crate::config::ConfigError;
use crate::models::RawRepoRecord;
use crate::scoring::weights::WeightSet;

/// Composite popularity score:
///
/// ```text
/// score = w_stars · ln(1 + stars) + w_forks · ln(1 + forks) + w_recency · e^(-age_days / tau)
/// ```
///
/// The log transform gives stars and forks diminishing returns. `age_days`
/// is the whole number of days since the last push, never negative. A
/// missing or unparsable push timestamp contributes 0 recency instead of
/// failing the batch. Weights are used as configured, without
/// normalisation.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    weights: WeightSet,
    tau_days: f64,
}

impl ScoreEngine {
    pub fn new(weights: WeightSet, tau_days: f64) -> Result<Self, ConfigError> {
        if !tau_days.is_finite() || tau_days <= 0.0 {
            return Err(ConfigError::InvalidTau(tau_days));
        }
        Ok(Self { weights, tau_days })
    }

    pub fn weights(&self) -> &WeightSet {
        &self.weights
    }

    pub fn tau_days(&self) -> f64 {
        self.tau_days
    }

    /// Score a record against the current time.
    pub fn score(&self, repo: &RawRepoRecord) -> f64 {
        self.score_at(repo, Utc::now())
    }

    pub fn score_at(&self, repo: &RawRepoRecord, now: DateTime<Utc>) -> f64 {
        let stars = (repo.stargazers_count as f64).ln_1p();
        let forks = (repo.forks_count as f64).ln_1p();
        let recency = self.recency_at(repo.pushed_at.as_deref(), now);

        self.weights.stars * stars + self.weights.forks * forks + self.weights.recency * recency
    }

    /// Recency factor in `[0, 1]` for a push timestamp; 0 when absent or unparsable.
    pub fn recency_at(&self, pushed_at: Option<&str>, now: DateTime<Utc>) -> f64 {
        match pushed_at.and_then(parse_instant) {
            Some(pushed) => self.decay((now - pushed).num_days()),
            None => 0.0,
        }
    }

    /// `e^(-age / tau)`; ages below zero (pushes "in the future") count as 0.
    pub fn decay(&self, age_days: i64) -> f64 {
        (-(age_days.max(0) as f64) / self.tau_days).exp()
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::debug!("Ignoring unparsable pushed_at '{raw}': {e}");
            None
        }
    }
}
