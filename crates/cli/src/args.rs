//! Command-line arguments.
//!
//! The positional argument is a route path (`/`, `/locations`,
//! `/character/1`, ...). Flags layer search and filter selections onto the
//! list views; which flags apply depends on the route, mirroring each
//! view's own controls.

use clap::Parser;

use rickdex_client::CharacterQuery;
use rickdex_core::filter::{EpisodeFilter, FilterField, FilterState, LocationFilter};

#[derive(Debug, Parser)]
#[command(
    name = "rickdex",
    version,
    about = "Browse the Rick and Morty catalog from the terminal"
)]
pub struct Args {
    /// Route path to open: /, /locations, /location/:id, /episodes,
    /// /episode/:id, or /character/:id
    #[arg(default_value = "/")]
    pub path: String,

    /// Page of the collection to fetch (1-indexed)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Character list: server-side name search.
    /// Location list: substring match on the location name.
    #[arg(long)]
    pub name: Option<String>,

    /// Keep only characters with this status (repeatable; values OR together)
    #[arg(long = "status", value_name = "VALUE")]
    pub status: Vec<String>,

    /// Keep only characters with this gender (repeatable)
    #[arg(long = "gender", value_name = "VALUE")]
    pub gender: Vec<String>,

    /// Keep only characters of this species (repeatable)
    #[arg(long = "species", value_name = "VALUE")]
    pub species: Vec<String>,

    /// Character list: keep only this sub-type (repeatable).
    /// Location list: substring match on the location type.
    #[arg(long = "type", value_name = "VALUE")]
    pub kind: Vec<String>,

    /// Keep only characters last seen at this location (repeatable)
    #[arg(long = "location", value_name = "NAME")]
    pub location: Vec<String>,

    /// Keep only characters appearing in ALL of these episodes (repeatable)
    #[arg(long = "episode", value_name = "ID")]
    pub episode: Vec<String>,

    /// Location list: substring match on the dimension
    #[arg(long)]
    pub dimension: Option<String>,

    /// Episode list: substring match on the episode code, e.g. S01
    #[arg(long)]
    pub code: Option<String>,

    /// Disable styled output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Server-side search parameters for the character collection. Only
    /// `--name` is sent to the server; the remaining flags filter
    /// client-side so their value sets can hold more than one entry.
    pub fn character_query(&self) -> CharacterQuery {
        CharacterQuery {
            name: self.name.clone(),
            ..Default::default()
        }
    }

    /// Client-side filter selections for the character list.
    pub fn filter_state(&self) -> FilterState {
        let mut filters = FilterState::new();
        let mut extend = |field, values: &[String]| {
            for value in values {
                filters.insert(field, value.clone());
            }
        };
        extend(FilterField::Status, &self.status);
        extend(FilterField::Gender, &self.gender);
        extend(FilterField::Species, &self.species);
        extend(FilterField::Kind, &self.kind);
        extend(FilterField::Location, &self.location);
        extend(FilterField::Episode, &self.episode);
        filters
    }

    /// Substring patterns for the location list. `--type` is repeatable for
    /// the character list; here only the first value is meaningful.
    pub fn location_filter(&self) -> LocationFilter {
        LocationFilter {
            name: self.name.clone().unwrap_or_default(),
            kind: self.kind.first().cloned().unwrap_or_default(),
            dimension: self.dimension.clone().unwrap_or_default(),
        }
    }

    /// Substring patterns for the episode list.
    pub fn episode_filter(&self) -> EpisodeFilter {
        EpisodeFilter {
            name: self.name.clone().unwrap_or_default(),
            code: self.code.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_the_character_list() {
        let args = Args::parse_from(["rickdex"]);
        assert_eq!(args.path, "/");
        assert_eq!(args.page, 1);
        assert!(args.character_query().is_empty());
        assert!(args.filter_state().is_empty());
        assert!(args.location_filter().is_empty());
        assert!(args.episode_filter().is_empty());
    }

    #[test]
    fn repeated_filter_flags_accumulate() {
        let args = Args::parse_from([
            "rickdex", "/", "--status", "Alive", "--status", "Dead", "--species", "Human",
        ]);
        let filters = args.filter_state();
        assert_eq!(filters.status.len(), 2);
        assert!(filters.species.contains("Human"));
    }

    #[test]
    fn name_feeds_both_search_and_location_filter() {
        let args = Args::parse_from(["rickdex", "/locations", "--name", "Earth"]);
        assert_eq!(args.character_query().name.as_deref(), Some("Earth"));
        assert_eq!(args.location_filter().name, "Earth");
    }
}
