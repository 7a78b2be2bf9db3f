//! Client-side filtering over a fetched page of entities.
//!
//! Filtering is a pure derivation: views hold the unfiltered page and call
//! [`FilterState::apply`] / [`unique_values`] on read, so the filtered list
//! and the per-field value sets can never drift out of sync with their
//! source.

use std::collections::BTreeSet;

use crate::entity::{resource_id, Character, Episode, Location};

/// The fixed set of character filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Gender,
    Species,
    /// The wire format calls this `type`.
    Kind,
    /// Matched against the character's last-known location name.
    Location,
    /// Episode ids; a character must appear in ALL selected episodes.
    Episode,
}

/// Per-field selection sets constraining which characters are displayed.
///
/// An empty set imposes no constraint on its field. Constraints combine
/// with logical AND across fields and logical OR within a field's set,
/// except `episode`, which requires the character's episode list to cover
/// every selected id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub status: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub species: BTreeSet<String>,
    pub kind: BTreeSet<String>,
    pub location: BTreeSet<String>,
    pub episode: BTreeSet<String>,
}

impl FilterState {
    /// A filter with every field unconstrained.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
            && self.gender.is_empty()
            && self.species.is_empty()
            && self.kind.is_empty()
            && self.location.is_empty()
            && self.episode.is_empty()
    }

    /// Add a value to a field's selection set.
    pub fn insert(&mut self, field: FilterField, value: impl Into<String>) {
        self.set_mut(field).insert(value.into());
    }

    /// Remove a value from a field's selection set.
    pub fn remove(&mut self, field: FilterField, value: &str) {
        self.set_mut(field).remove(value);
    }

    /// Reset every field to unconstrained.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set_mut(&mut self, field: FilterField) -> &mut BTreeSet<String> {
        match field {
            FilterField::Status => &mut self.status,
            FilterField::Gender => &mut self.gender,
            FilterField::Species => &mut self.species,
            FilterField::Kind => &mut self.kind,
            FilterField::Location => &mut self.location,
            FilterField::Episode => &mut self.episode,
        }
    }

    /// The filter predicate: does `character` satisfy every constrained
    /// field?
    ///
    /// Absent attributes (empty strings, empty episode lists) simply fail
    /// to match a constrained field; they never raise.
    pub fn matches(&self, character: &Character) -> bool {
        let member = |set: &BTreeSet<String>, value: &str| set.is_empty() || set.contains(value);

        member(&self.status, &character.status)
            && member(&self.gender, &character.gender)
            && member(&self.species, &character.species)
            && member(&self.kind, &character.kind)
            && member(&self.location, &character.location.name)
            && self.episode.iter().all(|selected| {
                character
                    .episode
                    .iter()
                    .any(|url| matches_episode_id(url, selected))
            })
    }

    /// Stable subset filter: preserves input order and fabricates nothing.
    /// With every field unconstrained this is the identity.
    pub fn apply<'a>(&self, characters: &'a [Character]) -> Vec<&'a Character> {
        characters.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Compare one of a character's episode URLs against a selected episode id.
fn matches_episode_id(url: &str, selected: &str) -> bool {
    resource_id(url).is_some_and(|id| id.to_string() == selected)
}

/// Distinct attribute values present in a character slice, one ordered set
/// per filter field. Empty-string attributes are skipped; episode URLs are
/// reduced to their id segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueValues {
    pub status: BTreeSet<String>,
    pub gender: BTreeSet<String>,
    pub species: BTreeSet<String>,
    pub kind: BTreeSet<String>,
    pub location: BTreeSet<String>,
    pub episode: BTreeSet<String>,
}

/// Derive the distinct filterable values from a character slice.
pub fn unique_values(characters: &[Character]) -> UniqueValues {
    let mut values = UniqueValues::default();
    for character in characters {
        let mut add = |set: &mut BTreeSet<String>, value: &str| {
            if !value.is_empty() {
                set.insert(value.to_string());
            }
        };
        add(&mut values.status, &character.status);
        add(&mut values.gender, &character.gender);
        add(&mut values.species, &character.species);
        add(&mut values.kind, &character.kind);
        add(&mut values.location, &character.location.name);
        for url in &character.episode {
            if let Some(id) = resource_id(url) {
                values.episode.insert(id.to_string());
            }
        }
    }
    values
}

/// Substring filter for the locations list: case-insensitive containment
/// on name, type, and dimension. Empty patterns impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub name: String,
    pub kind: String,
    pub dimension: String,
}

impl LocationFilter {
    /// True when no pattern constrains the result.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.kind.is_empty() && self.dimension.is_empty()
    }

    /// Does `location` satisfy every non-empty pattern?
    pub fn matches(&self, location: &Location) -> bool {
        let contains = |haystack: &str, needle: &str| {
            needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        contains(&location.name, &self.name)
            && contains(&location.kind, &self.kind)
            && contains(&location.dimension, &self.dimension)
    }

    /// Stable subset filter over a location slice.
    pub fn apply<'a>(&self, locations: &'a [Location]) -> Vec<&'a Location> {
        locations.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Substring filter for the episodes list: case-insensitive containment on
/// name and episode code. Empty patterns impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeFilter {
    pub name: String,
    pub code: String,
}

impl EpisodeFilter {
    /// True when no pattern constrains the result.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.code.is_empty()
    }

    /// Does `episode` satisfy every non-empty pattern?
    pub fn matches(&self, episode: &Episode) -> bool {
        let contains = |haystack: &str, needle: &str| {
            needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        contains(&episode.name, &self.name) && contains(&episode.code, &self.code)
    }

    /// Stable subset filter over an episode slice.
    pub fn apply<'a>(&self, episodes: &'a [Episode]) -> Vec<&'a Episode> {
        episodes.iter().filter(|e| self.matches(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ResourceRef;

    fn character(id: u32, name: &str, status: &str, species: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            status: status.to_string(),
            species: species.to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
            origin: ResourceRef {
                name: "Earth (C-137)".to_string(),
                url: "https://rickandmortyapi.com/api/location/1".to_string(),
            },
            location: ResourceRef {
                name: "Citadel of Ricks".to_string(),
                url: "https://rickandmortyapi.com/api/location/3".to_string(),
            },
            image: String::new(),
            episode: vec![
                "https://rickandmortyapi.com/api/episode/1".to_string(),
                "https://rickandmortyapi.com/api/episode/2".to_string(),
            ],
            url: format!("https://rickandmortyapi.com/api/character/{id}"),
            created: "2017-11-04T18:48:46.250Z".parse().unwrap(),
        }
    }

    fn location(name: &str, kind: &str, dimension: &str) -> Location {
        Location {
            id: 1,
            name: name.to_string(),
            kind: kind.to_string(),
            dimension: dimension.to_string(),
            residents: vec![],
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
            created: "2017-11-10T12:42:04.162Z".parse().unwrap(),
        }
    }

    // -- FilterState ---------------------------------------------------------

    #[test]
    fn empty_filter_is_identity() {
        let characters = vec![
            character(1, "Rick Sanchez", "Alive", "Human"),
            character(2, "Morty Smith", "Alive", "Human"),
        ];
        let filter = FilterState::new();
        let result = filter.apply(&characters);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, 1);
        assert_eq!(result[1].id, 2);
    }

    #[test]
    fn status_filter_keeps_only_matching() {
        let characters = vec![
            character(1, "Rick Sanchez", "Alive", "Human"),
            character(2, "Albert Einstein", "Dead", "Human"),
        ];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Status, "Alive");

        let result = filter.apply(&characters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, "Alive");
        assert_eq!(result[0].species, "Human");
    }

    #[test]
    fn values_within_a_field_combine_with_or() {
        let characters = vec![
            character(1, "Rick Sanchez", "Alive", "Human"),
            character(2, "Albert Einstein", "Dead", "Human"),
            character(3, "Abadango Cluster Princess", "unknown", "Alien"),
        ];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Status, "Alive");
        filter.insert(FilterField::Status, "Dead");

        let result = filter.apply(&characters);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn fields_combine_with_and() {
        let characters = vec![
            character(1, "Rick Sanchez", "Alive", "Human"),
            character(2, "Abadango Cluster Princess", "Alive", "Alien"),
        ];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Status, "Alive");
        filter.insert(FilterField::Species, "Human");

        let result = filter.apply(&characters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn filter_preserves_input_order() {
        let characters = vec![
            character(5, "Jerry Smith", "Alive", "Human"),
            character(3, "Summer Smith", "Alive", "Human"),
            character(8, "Adjudicator Rick", "Dead", "Human"),
            character(1, "Rick Sanchez", "Alive", "Human"),
        ];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Status, "Alive");

        let ids: Vec<u32> = filter.apply(&characters).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 3, 1]);
    }

    #[test]
    fn episode_filter_requires_all_selected_ids() {
        let mut in_both = character(1, "Rick Sanchez", "Alive", "Human");
        in_both.episode = vec![
            "https://rickandmortyapi.com/api/episode/1".to_string(),
            "https://rickandmortyapi.com/api/episode/2".to_string(),
        ];
        let mut in_one = character(2, "Morty Smith", "Alive", "Human");
        in_one.episode = vec!["https://rickandmortyapi.com/api/episode/1".to_string()];

        let mut filter = FilterState::new();
        filter.insert(FilterField::Episode, "1");
        filter.insert(FilterField::Episode, "2");

        let characters = vec![in_both, in_one];
        let result = filter.apply(&characters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn location_field_matches_location_name() {
        let characters = vec![character(1, "Rick Sanchez", "Alive", "Human")];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Location, "Citadel of Ricks");
        assert_eq!(filter.apply(&characters).len(), 1);

        filter.clear();
        filter.insert(FilterField::Location, "Earth (Replacement Dimension)");
        assert_eq!(filter.apply(&characters).len(), 0);
    }

    #[test]
    fn absent_attribute_is_non_matching() {
        // kind is the empty string; a constrained kind field excludes it.
        let characters = vec![character(1, "Rick Sanchez", "Alive", "Human")];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Kind, "Clone");
        assert!(filter.apply(&characters).is_empty());
    }

    #[test]
    fn remove_and_clear_relax_constraints() {
        let characters = vec![character(2, "Albert Einstein", "Dead", "Human")];
        let mut filter = FilterState::new();
        filter.insert(FilterField::Status, "Alive");
        assert!(filter.apply(&characters).is_empty());

        filter.remove(FilterField::Status, "Alive");
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&characters).len(), 1);
    }

    // -- unique_values -------------------------------------------------------

    #[test]
    fn unique_values_are_derived_and_deduplicated() {
        let characters = vec![
            character(1, "Rick Sanchez", "Alive", "Human"),
            character(2, "Morty Smith", "Alive", "Human"),
            character(3, "Abadango Cluster Princess", "unknown", "Alien"),
        ];
        let values = unique_values(&characters);
        assert_eq!(
            values.status.iter().collect::<Vec<_>>(),
            vec!["Alive", "unknown"]
        );
        assert_eq!(
            values.species.iter().collect::<Vec<_>>(),
            vec!["Alien", "Human"]
        );
        // Every fixture shares the same two episodes.
        assert_eq!(values.episode.iter().collect::<Vec<_>>(), vec!["1", "2"]);
    }

    #[test]
    fn unique_values_skip_empty_attributes() {
        // kind is empty in the fixture; it must not appear as a value.
        let characters = vec![character(1, "Rick Sanchez", "Alive", "Human")];
        assert!(unique_values(&characters).kind.is_empty());
    }

    // -- LocationFilter ------------------------------------------------------

    #[test]
    fn location_filter_is_case_insensitive_substring() {
        let locations = vec![
            location("Citadel of Ricks", "Space station", "unknown"),
            location("Earth (C-137)", "Planet", "Dimension C-137"),
        ];
        let filter = LocationFilter {
            name: "citadel".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&locations);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Citadel of Ricks");
    }

    #[test]
    fn location_filter_ands_across_fields() {
        let locations = vec![
            location("Earth (C-137)", "Planet", "Dimension C-137"),
            location("Earth (Replacement Dimension)", "Planet", "Replacement Dimension"),
        ];
        let filter = LocationFilter {
            name: "earth".to_string(),
            dimension: "replacement".to_string(),
            ..Default::default()
        };
        let result = filter.apply(&locations);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Earth (Replacement Dimension)");
    }

    #[test]
    fn empty_location_filter_is_identity() {
        let locations = vec![location("Citadel of Ricks", "Space station", "unknown")];
        let filter = LocationFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&locations).len(), 1);
    }

    // -- EpisodeFilter -------------------------------------------------------

    fn episode(id: u32, name: &str, code: &str) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            air_date: "December 2, 2013".to_string(),
            code: code.to_string(),
            characters: vec![],
            url: format!("https://rickandmortyapi.com/api/episode/{id}"),
            created: "2017-11-10T12:56:33.798Z".parse().unwrap(),
        }
    }

    #[test]
    fn episode_filter_matches_name_and_code_substrings() {
        let episodes = vec![
            episode(1, "Pilot", "S01E01"),
            episode(2, "Lawnmower Dog", "S01E02"),
            episode(12, "A Rickle in Time", "S02E01"),
        ];

        let by_name = EpisodeFilter {
            name: "lawnmower".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&episodes).len(), 1);

        let by_code = EpisodeFilter {
            code: "s01".to_string(),
            ..Default::default()
        };
        assert_eq!(by_code.apply(&episodes).len(), 2);
    }

    #[test]
    fn empty_episode_filter_is_identity() {
        let episodes = vec![episode(1, "Pilot", "S01E01")];
        let filter = EpisodeFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&episodes).len(), 1);
    }
}
