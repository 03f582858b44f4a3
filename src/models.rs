use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A search hit reduced to the fields the scoring pipeline needs.
///
/// Built once per item at the backend boundary; each field has its own
/// defaulting rule so one odd value never drops the whole record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRepoRecord {
    pub id: Option<u64>,
    pub full_name: String,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    /// ISO-8601 instant of the last push, as sent by the backend
    pub pushed_at: Option<String>,
    pub archived: bool,
}

impl RawRepoRecord {
    /// Decode one entry of the backend's `items` array.
    /// Returns `None` when the entry is not a JSON object.
    pub fn from_item(item: &Value) -> Option<Self> {
        let obj = item.as_object()?;
        Some(Self {
            id: obj.get("id").and_then(Value::as_u64),
            full_name: string_field(obj.get("full_name")).unwrap_or_default(),
            html_url: string_field(obj.get("html_url")).unwrap_or_default(),
            language: string_field(obj.get("language")),
            stargazers_count: count_field(obj.get("stargazers_count")),
            forks_count: count_field(obj.get("forks_count")),
            pushed_at: string_field(obj.get("pushed_at")),
            archived: obj.get("archived").and_then(Value::as_bool).unwrap_or(false),
        })
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Counts are non-negative integers. Numeric strings are accepted,
/// fractions truncate, anything else is 0.
fn count_field(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// A ranked repository as returned by `GET /api/repos/popular`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRepo {
    pub full_name: String,
    pub url: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub pushed_at: Option<String>,
    pub score: f64,
}

impl ScoredRepo {
    pub fn new(record: RawRepoRecord, score: f64) -> Self {
        Self {
            full_name: record.full_name,
            url: record.html_url,
            language: record.language,
            stars: record.stargazers_count,
            forks: record.forks_count,
            pushed_at: record.pushed_at,
            score,
        }
    }
}

/// Query parameters of `GET /api/repos/popular`
#[derive(Debug, Clone, Deserialize)]
pub struct PopularQuery {
    pub created_from: Option<String>,
    pub language: Option<String>,
    /// Optional free text prepended to every candidate query
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    5
}

/// Active scoring configuration (token redacted)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfigResponse {
    pub weights: WeightsResponse,
    pub tau_days: f64,
    pub base_url: String,
    pub has_token: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeightsResponse {
    pub stars: f64,
    pub forks: f64,
    pub recency: f64,
}
