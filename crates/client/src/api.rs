//! REST API client for the catalog endpoints.
//!
//! Wraps the remote HTTP API (paginated collections, search, single
//! resources by id, related resources by URL) using [`reqwest`]. Responses
//! deserialize straight into the `rickdex-core` entity types; the client
//! adds nothing and strips nothing.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use rickdex_core::entity::{Character, EntityId, Episode, Location};

/// HTTP client for one API base URL.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

/// Pagination metadata returned alongside every collection page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    /// Total number of entities across all pages.
    pub count: u32,
    /// Total number of pages.
    pub pages: u32,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub prev: Option<String>,
}

/// One page of a collection endpoint: `{ info, results }`.
#[derive(Debug, Deserialize)]
pub struct Paged<T> {
    pub info: PageInfo,
    pub results: Vec<T>,
}

/// Optional query parameters for the character search endpoint. These are
/// layered onto the same paginated collection shape as a plain page fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterQuery {
    pub name: Option<String>,
    pub status: Option<String>,
    pub species: Option<String>,
    /// Sent as `type` on the wire.
    pub kind: Option<String>,
    pub gender: Option<String>,
}

impl CharacterQuery {
    /// True when no parameter is set, i.e. a plain collection fetch.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.status.is_none()
            && self.species.is_none()
            && self.kind.is_none()
            && self.gender.is_none()
    }

    /// The non-empty query pairs, in wire-format names.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key, value: &Option<String>| {
            if let Some(value) = value {
                pairs.push((key, value.clone()));
            }
        };
        push("name", &self.name);
        push("status", &self.status);
        push("species", &self.species);
        push("type", &self.kind);
        push("gender", &self.gender);
        pairs
    }
}

/// Errors from the REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code. The API answers a missing
    /// resource or an out-of-range page with a 404 and a small JSON body.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `https://rickandmortyapi.com/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (to share a connection pool or apply a custom timeout).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    // ---- collection endpoints ----

    /// Fetch one page of the character collection.
    ///
    /// Sends `GET /character?page=N`.
    pub async fn characters(&self, page: u32) -> Result<Paged<Character>, ApiError> {
        self.get_paged("character", Vec::new(), page).await
    }

    /// Search the character collection.
    ///
    /// Sends `GET /character` with the query's `name`/`status`/`species`/
    /// `type`/`gender` parameters plus `page`, returning the same paginated
    /// shape as [`characters`](Self::characters).
    pub async fn search_characters(
        &self,
        query: &CharacterQuery,
        page: u32,
    ) -> Result<Paged<Character>, ApiError> {
        self.get_paged("character", query.query_pairs(), page).await
    }

    /// Fetch one page of the location collection (`GET /location?page=N`).
    pub async fn locations(&self, page: u32) -> Result<Paged<Location>, ApiError> {
        self.get_paged("location", Vec::new(), page).await
    }

    /// Fetch one page of the episode collection (`GET /episode?page=N`).
    pub async fn episodes(&self, page: u32) -> Result<Paged<Episode>, ApiError> {
        self.get_paged("episode", Vec::new(), page).await
    }

    // ---- single-resource endpoints ----

    /// Fetch one character by id (`GET /character/{id}`).
    pub async fn character(&self, id: EntityId) -> Result<Character, ApiError> {
        self.get_json(&format!("{}/character/{id}", self.base_url))
            .await
    }

    /// Fetch one location by id (`GET /location/{id}`).
    pub async fn location(&self, id: EntityId) -> Result<Location, ApiError> {
        self.get_json(&format!("{}/location/{id}", self.base_url))
            .await
    }

    /// Fetch one episode by id (`GET /episode/{id}`).
    pub async fn episode(&self, id: EntityId) -> Result<Episode, ApiError> {
        self.get_json(&format!("{}/episode/{id}", self.base_url))
            .await
    }

    // ---- related-resource following ----

    /// Fetch one character by the absolute URL embedded in another
    /// entity's payload.
    pub async fn character_by_url(&self, url: &str) -> Result<Character, ApiError> {
        self.get_json(url).await
    }

    /// Fetch every character behind `urls`, in parallel.
    ///
    /// Results come back in input order. The first failure fails the
    /// aggregate; there is no partial result.
    pub async fn characters_by_urls(&self, urls: &[String]) -> Result<Vec<Character>, ApiError> {
        futures::future::try_join_all(urls.iter().map(|url| self.get_json::<Character>(url))).await
    }

    /// Fetch every episode behind `urls`, in parallel, in input order.
    pub async fn episodes_by_urls(&self, urls: &[String]) -> Result<Vec<Episode>, ApiError> {
        futures::future::try_join_all(urls.iter().map(|url| self.get_json::<Episode>(url))).await
    }

    // ---- private helpers ----

    /// Fetch one page of `collection` with the given search parameters.
    async fn get_paged<T: DeserializeOwned>(
        &self,
        collection: &str,
        mut pairs: Vec<(&'static str, String)>,
        page: u32,
    ) -> Result<Paged<T>, ApiError> {
        pairs.push(("page", page.to_string()));

        let response = self
            .client
            .get(format!("{}/{collection}", self.base_url))
            .query(&pairs)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Issue a plain GET and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
