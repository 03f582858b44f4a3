//! Candidate search queries, most selective first.
//!
//! ```text
//!   date + language   →  "<free> pushed:>=<date> language:<lang>"
//!   language          →  "<free> language:<lang>"
//!   neither           →  "language:Java"
//! ```

/// Used when neither a date nor a language narrows the search.
pub const DEFAULT_CANDIDATE: &str = "language:Java";

/// Search filters supplied by the caller. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// ISO date (YYYY-MM-DD), matched against the last push
    pub created_from: Option<String>,
    pub language: Option<String>,
    pub free_text: Option<String>,
}

impl SearchFilters {
    pub fn new(
        created_from: Option<String>,
        language: Option<String>,
        free_text: Option<String>,
    ) -> Self {
        Self {
            created_from,
            language,
            free_text,
        }
    }

    pub fn candidates(&self) -> Vec<String> {
        build_candidates(
            self.created_from.as_deref(),
            self.language.as_deref(),
            self.free_text.as_deref(),
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Ordered, de-duplicated candidate queries (unencoded). Never empty.
pub fn build_candidates(
    created_from: Option<&str>,
    language: Option<&str>,
    free_text: Option<&str>,
) -> Vec<String> {
    let date = non_blank(created_from).map(|d| format!("pushed:>={d}"));
    let lang = non_blank(language).map(|l| format!("language:{l}"));
    let free = non_blank(free_text);

    let mut candidates: Vec<String> = Vec::new();
    if let (Some(date), Some(lang)) = (&date, &lang) {
        candidates.push(join_terms(&[free, Some(date.as_str()), Some(lang.as_str())]));
    }
    if let Some(lang) = &lang {
        let query = join_terms(&[free, Some(lang.as_str())]);
        if !candidates.contains(&query) {
            candidates.push(query);
        }
    }

    if candidates.is_empty() {
        candidates.push(DEFAULT_CANDIDATE.to_string());
    }
    candidates
}

fn join_terms(terms: &[Option<&str>]) -> String {
    terms.iter().flatten().copied().collect::<Vec<_>>().join(" ")
}

/// Encoding for the `q` parameter: runs of whitespace become a single `+`
/// and every term is percent-encoded, except `:` and `=` which stay literal
/// so qualifiers read naturally and `>=` turns into `%3E=`. `&`, `#`, `%`,
/// `+` and `?` coming from user input are always escaped, so a filter value
/// can never add or cut off parameters of the search URL.
pub fn encode_query(raw: &str) -> String {
    raw.split_whitespace()
        .map(|term| {
            urlencoding::encode(term)
                .replace("%3A", ":")
                .replace("%3D", "=")
        })
        .collect::<Vec<_>>()
        .join("+")
}
