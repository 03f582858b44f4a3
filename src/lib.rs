//! # repo-rank
//!
//! A small web service that asks a code-hosting search API for public
//! repositories and ranks them by a composite popularity score.
//!
//! ## Pipeline
//!
//! ```text
//!        GET /api/repos/popular?created_from&language&q&limit
//!                              │
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │  Candidate queries    │
//!                  │  date+lang → lang     │
//!                  │  → language:Java      │
//!                  └───────────┬───────────┘
//!                              │ tried in order
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │  Search backend       │
//!                  │  first non-empty page │
//!                  │  wins; errors skip    │
//!                  └───────────┬───────────┘
//!                              │ trimmed records
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │  Score engine         │
//!                  │  w·ln(1+stars)        │
//!                  │  + w·ln(1+forks)      │
//!                  │  + w·e^(-age/tau)     │
//!                  └───────────┬───────────┘
//!                              │
//!                              ▼
//!                  ┌───────────────────────┐
//!                  │  Sort desc, ties by   │
//!                  │  name, keep `limit`   │
//!                  └───────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration and startup validation errors
//! - [`models`] - Trimmed backend records, scored results, request/response types
//! - [`scoring::weights`] - Weight specification parsing (`stars:0.5,forks:0.3,...`)
//! - [`scoring::engine`] - Log-scaled, exponentially decayed popularity score
//! - [`scoring::ranking`] - Score/sort/truncate pipeline
//! - [`github::query`] - Candidate query builder and minimal `q` encoding
//! - [`github::client`] - `SearchBackend` trait and the reqwest search client
//! - [`github::search`] - Candidate fallback loop over the backend
//! - [`api`] - Axum router and handlers
//! - [`state`] - Shared read-only application state

pub mod api;
pub mod config;
pub mod github;
pub mod models;
pub mod scoring;
pub mod state;
