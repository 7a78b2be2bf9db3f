//! HTTP client for the Rick and Morty REST API.
//!
//! Thin typed wrappers over the API's paginated collection endpoints,
//! single-resource endpoints, and related-resource URL following, plus a
//! stale-response guard for views that re-fetch as their subject changes.

pub mod api;
pub mod token;

pub use api::{ApiClient, ApiError, CharacterQuery, PageInfo, Paged};
pub use token::{RequestToken, RequestTokens};
