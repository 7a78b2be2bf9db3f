//! Typed records for the three catalog entity kinds.
//!
//! The remote API returns fixed, documented JSON shapes; these structs are
//! read-only projections of those payloads. Relational fields (`origin`,
//! `location`, `episode`, `residents`, `characters`) are URLs pointing at
//! other single-resource endpoints, kept as strings and resolved on demand.

use serde::{Deserialize, Serialize};

/// All entity identifiers are small positive integers assigned by the API.
pub type EntityId = u32;

/// All `created` timestamps are UTC (RFC 3339 in the wire format).
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A named reference to another resource (a character's `origin` or
/// `location`). The `url` is empty for the API's "unknown" placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    pub url: String,
}

/// One character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    /// `Alive`, `Dead`, or `unknown`.
    pub status: String,
    pub species: String,
    /// Sub-species / variant. Frequently the empty string.
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: ResourceRef,
    pub location: ResourceRef,
    pub image: String,
    /// URLs of the episodes this character appears in.
    pub episode: Vec<String>,
    pub url: String,
    pub created: Timestamp,
}

/// One location record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub dimension: String,
    /// URLs of the characters last seen at this location.
    pub residents: Vec<String>,
    pub url: String,
    pub created: Timestamp,
}

/// One episode record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: EntityId,
    pub name: String,
    pub air_date: String,
    /// Episode code, e.g. `S01E04`.
    #[serde(rename = "episode")]
    pub code: String,
    /// URLs of the characters appearing in this episode.
    pub characters: Vec<String>,
    pub url: String,
    pub created: Timestamp,
}

/// Extract the trailing numeric id segment from a related-resource URL.
///
/// Returns `None` for empty URLs (the API's "unknown" origin) and for
/// anything whose last path segment is not a number.
///
/// # Examples
///
/// ```
/// use rickdex_core::entity::resource_id;
/// assert_eq!(resource_id("https://rickandmortyapi.com/api/episode/28"), Some(28));
/// assert_eq!(resource_id(""), None);
/// ```
pub fn resource_id(url: &str) -> Option<EntityId> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}
