//! URL-path routing for the catalog's six views.

use std::fmt;

use crate::entity::EntityId;

/// One of the catalog's navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` — the character list (with search and filters).
    Characters,
    /// `/locations` — the location list.
    Locations,
    /// `/location/:id` — one location and its residents.
    Location(EntityId),
    /// `/episodes` — the episode list.
    Episodes,
    /// `/episode/:id` — one episode and its characters.
    Episode(EntityId),
    /// `/character/:id` — one character and its episodes.
    Character(EntityId),
}

/// Failures turning a path string into a [`Route`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    Unknown(String),

    #[error("invalid id in route: {0}")]
    InvalidId(String),
}

impl Route {
    /// Parse a path like `/character/12` into a route.
    ///
    /// A single trailing slash is tolerated; anything else that does not
    /// match the routing surface is an error.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = if path == "/" {
            path
        } else {
            path.strip_suffix('/').unwrap_or(path)
        };

        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            ["", ""] => Ok(Self::Characters),
            ["", "locations"] => Ok(Self::Locations),
            ["", "episodes"] => Ok(Self::Episodes),
            ["", "location", id] => Ok(Self::Location(parse_id(path, id)?)),
            ["", "episode", id] => Ok(Self::Episode(parse_id(path, id)?)),
            ["", "character", id] => Ok(Self::Character(parse_id(path, id)?)),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }
}

fn parse_id(path: &str, segment: &str) -> Result<EntityId, RouteError> {
    segment
        .parse()
        .map_err(|_| RouteError::InvalidId(path.to_string()))
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Characters => write!(f, "/"),
            Self::Locations => write!(f, "/locations"),
            Self::Location(id) => write!(f, "/location/{id}"),
            Self::Episodes => write!(f, "/episodes"),
            Self::Episode(id) => write!(f, "/episode/{id}"),
            Self::Character(id) => write!(f, "/character/{id}"),
        }
    }
}
