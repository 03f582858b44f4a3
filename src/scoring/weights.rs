//! Weight specification parsing.
//!
//! A weight specification is a comma-separated list of `name:value` pairs, e.g.
//! `"stars:0.5, forks:0.3, recency:0.2"`. Names are trimmed and lower-cased.
//! Entries that are not exactly one `name:value` pair are dropped; a value
//! that does not parse as a finite number is an error.

use std::collections::BTreeMap;

use crate::config::ConfigError;

pub const DEFAULT_STARS_WEIGHT: f64 = 0.5;
pub const DEFAULT_FORKS_WEIGHT: f64 = 0.3;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.2;

/// Parse a weight specification into a name → value map.
///
/// Duplicate names keep the last value. Unknown names are kept; the score
/// engine only reads `stars`, `forks` and `recency`.
pub fn parse_weights(spec: &str) -> Result<BTreeMap<String, f64>, ConfigError> {
    let mut weights = BTreeMap::new();

    for entry in spec.split(',') {
        let parts: Vec<&str> = entry.split(':').collect();
        let [name, value] = parts.as_slice() else {
            continue;
        };

        let name = name.trim().to_lowercase();
        let value = value.trim();
        let parsed: f64 = value.parse().map_err(|_| ConfigError::InvalidWeight {
            name: name.clone(),
            value: value.to_string(),
        })?;
        if !parsed.is_finite() {
            return Err(ConfigError::InvalidWeight {
                name,
                value: value.to_string(),
            });
        }

        weights.insert(name, parsed);
    }

    Ok(weights)
}

/// Coefficients for the three score components.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSet {
    pub stars: f64,
    pub forks: f64,
    pub recency: f64,
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            stars: DEFAULT_STARS_WEIGHT,
            forks: DEFAULT_FORKS_WEIGHT,
            recency: DEFAULT_RECENCY_WEIGHT,
        }
    }
}

impl WeightSet {
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        Self::from_map(&parse_weights(spec)?)
    }

    /// Pick the known weights out of a parsed map, defaulting absent ones.
    pub fn from_map(weights: &BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        let pick = |name: &str, default: f64| -> Result<f64, ConfigError> {
            let value = weights.get(name).copied().unwrap_or(default);
            if value < 0.0 {
                return Err(ConfigError::WeightOutOfRange {
                    name: name.to_string(),
                    value,
                });
            }
            Ok(value)
        };

        Ok(Self {
            stars: pick("stars", DEFAULT_STARS_WEIGHT)?,
            forks: pick("forks", DEFAULT_FORKS_WEIGHT)?,
            recency: pick("recency", DEFAULT_RECENCY_WEIGHT)?,
        })
    }
}
