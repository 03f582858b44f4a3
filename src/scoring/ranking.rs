use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::github::client::SearchBackend;
use crate::github::query::SearchFilters;
use crate::github::search::{clamp_limit, search_repos};
use crate::models::{RawRepoRecord, ScoredRepo};
use crate::scoring::engine::ScoreEngine;

/// Score every record, sort by score descending (ties by full name
/// ascending), keep the first `limit`.
pub fn rank(engine: &ScoreEngine, records: Vec<RawRepoRecord>, limit: usize) -> Vec<ScoredRepo> {
    rank_at(engine, records, limit, Utc::now())
}

/// Same as [`rank`] with every record aged against one fixed instant.
pub fn rank_at(
    engine: &ScoreEngine,
    records: Vec<RawRepoRecord>,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<ScoredRepo> {
    let mut scored: Vec<ScoredRepo> = records
        .into_iter()
        .map(|record| {
            let score = engine.score_at(&record, now);
            ScoredRepo::new(record, score)
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.full_name.cmp(&b.full_name))
    });
    scored.truncate(limit);
    scored
}

/// Full pipeline behind `GET /api/repos/popular`: search with candidate
/// fallback, then score and rank what came back.
pub async fn fetch_and_score(
    backend: &dyn SearchBackend,
    engine: &ScoreEngine,
    filters: &SearchFilters,
    limit: i64,
) -> Vec<ScoredRepo> {
    let limit = clamp_limit(limit);
    let raw = search_repos(backend, filters, limit).await;
    let ranked = rank(engine, raw, limit);
    tracing::info!("Ranked {} repos (limit {limit})", ranked.len());
    ranked
}
