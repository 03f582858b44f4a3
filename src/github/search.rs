use crate::github::client::SearchBackend;
use crate::github::query::{encode_query, SearchFilters};
use crate::models::RawRepoRecord;

/// Largest page the search API serves.
pub const MAX_PER_PAGE: usize = 100;

/// Clamp a caller-supplied limit into `[1, MAX_PER_PAGE]`.
pub fn clamp_limit(limit: i64) -> usize {
    limit.clamp(1, MAX_PER_PAGE as i64) as usize
}

/// Try each candidate query in order and return the trimmed items of the
/// first one that yields any results.
///
/// A failed call or an empty page moves on to the next candidate. Once a
/// candidate returns items no further candidates are tried. All candidates
/// exhausted is an empty result, not an error.
pub async fn search_repos(
    backend: &dyn SearchBackend,
    filters: &SearchFilters,
    limit: usize,
) -> Vec<RawRepoRecord> {
    let per_page = limit.clamp(1, MAX_PER_PAGE);

    for raw_query in filters.candidates() {
        let query = encode_query(&raw_query);
        tracing::info!("Searching repositories: q={query} (raw '{raw_query}'), per_page={per_page}");

        let items = match backend.search_page(&query, per_page).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Search failed for '{raw_query}': {e:#}");
                continue;
            }
        };

        if items.is_empty() {
            tracing::info!("Received 0 items for '{raw_query}', trying next candidate");
            continue;
        }

        let trimmed: Vec<RawRepoRecord> = items
            .iter()
            .filter_map(RawRepoRecord::from_item)
            .take(per_page)
            .collect();
        tracing::info!("Returning {} repos for '{raw_query}'", trimmed.len());
        return trimmed;
    }

    tracing::info!("All candidate queries exhausted without results");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned responses in order and records every call.
    struct ScriptedBackend {
        responses: Mutex<VecDeque<Result<Vec<Value>>>>,
        calls: Mutex<Vec<(String, usize)>>,
    }

    impl ScriptedBackend {
        fn new(responses: Vec<Result<Vec<Value>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(String, usize)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchBackend for ScriptedBackend {
        async fn search_page(&self, encoded_query: &str, per_page: usize) -> Result<Vec<Value>> {
            self.calls
                .lock()
                .unwrap()
                .push((encoded_query.to_string(), per_page));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn item(name: &str, stars: u64) -> Value {
        json!({
            "id": 1,
            "full_name": name,
            "html_url": format!("https://gh/{name}"),
            "language": "Java",
            "stargazers_count": stars,
            "forks_count": 1,
            "pushed_at": "2025-01-01T00:00:00Z",
            "archived": false,
            "owner": {"login": "o"}
        })
    }

    fn java_since_2024() -> SearchFilters {
        SearchFilters::new(Some("2024-01-01".to_string()), Some("Java".to_string()), None)
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(-4), 1);
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(5), 5);
        assert_eq!(clamp_limit(100), 100);
        assert_eq!(clamp_limit(5000), 100);
    }

    #[tokio::test]
    async fn test_first_non_empty_candidate_wins() {
        let backend = ScriptedBackend::new(vec![Ok(vec![item("o/r1", 10), item("o/r2", 5)])]);

        let repos = search_repos(&backend, &java_since_2024(), 5).await;
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].full_name, "o/r1");
        assert_eq!(repos[0].html_url, "https://gh/o/r1");
        assert!(!repos[0].archived);

        let calls = backend.calls();
        assert_eq!(calls.len(), 1, "later candidates must not be tried");
        assert_eq!(calls[0], ("pushed:%3E=2024-01-01+language:Java".to_string(), 5));
    }

    #[tokio::test]
    async fn test_empty_result_falls_back_to_next_candidate() {
        let backend = ScriptedBackend::new(vec![Ok(vec![]), Ok(vec![item("o/fallback", 3)])]);

        let repos = search_repos(&backend, &java_since_2024(), 5).await;
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "o/fallback");

        let queries: Vec<String> = backend.calls().into_iter().map(|(q, _)| q).collect();
        assert_eq!(
            queries,
            vec![
                "pushed:%3E=2024-01-01+language:Java".to_string(),
                "language:Java".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_backend_error_falls_back_to_next_candidate() {
        let backend = ScriptedBackend::new(vec![
            Err(anyhow::anyhow!("503 Service Unavailable")),
            Ok(vec![item("o/ok", 3)]),
        ]);

        let repos = search_repos(&backend, &java_since_2024(), 5).await;
        assert_eq!(repos.len(), 1);
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_all_candidates_exhausted_returns_empty() {
        let backend = ScriptedBackend::new(vec![
            Err(anyhow::anyhow!("connection refused")),
            Ok(vec![]),
        ]);

        let repos = search_repos(&backend, &java_since_2024(), 5).await;
        assert!(repos.is_empty());
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_no_filters_uses_default_candidate() {
        let backend = ScriptedBackend::new(vec![Ok(vec![item("o/java", 1)])]);

        let repos = search_repos(&backend, &SearchFilters::default(), 3).await;
        assert_eq!(repos.len(), 1);
        assert_eq!(backend.calls(), vec![("language:Java".to_string(), 3)]);
    }

    #[tokio::test]
    async fn test_stops_at_limit() {
        let items = (0..10).map(|i| item(&format!("o/r{i}"), 10 - i)).collect();
        let backend = ScriptedBackend::new(vec![Ok(items)]);

        let repos = search_repos(&backend, &java_since_2024(), 3).await;
        assert_eq!(repos.len(), 3);
        assert_eq!(repos[2].full_name, "o/r2");
    }

    #[tokio::test]
    async fn test_page_size_is_clamped() {
        let backend = ScriptedBackend::new(vec![Ok(vec![item("o/r", 1)])]);

        search_repos(&backend, &java_since_2024(), 1000).await;
        search_repos(&backend, &java_since_2024(), 0).await;

        let sizes: Vec<usize> = backend.calls().into_iter().map(|(_, n)| n).collect();
        // second search: first candidate gets the default empty page, then falls back
        assert_eq!(sizes, vec![100, 1, 1]);
    }

    #[tokio::test]
    async fn test_non_object_items_are_skipped() {
        let backend = ScriptedBackend::new(vec![Ok(vec![
            json!("garbage"),
            item("o/real", 4),
            json!(42),
        ])]);

        let repos = search_repos(&backend, &java_since_2024(), 5).await;
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "o/real");
    }
}
