//! Pure renderers: (data, theme) in, text out.
//!
//! One canonical renderer per responsibility; all styling comes from the
//! [`Theme`], so there are no per-style variants of these functions.

use std::fmt::Write;

use rickdex_core::entity::{Character, Episode, Location};
use rickdex_core::filter::{FilterState, UniqueValues};
use rickdex_core::page::PageState;

use crate::theme::Theme;

/// The loading indicator. Also what a view shows after a failed fetch: the
/// failure is logged, not rendered.
pub fn loading(theme: &Theme) -> String {
    format!("{}\n", theme.loading.apply_to("Loading..."))
}

/// The pagination row: one control per page number `1..=total`, the
/// current page bracketed.
pub fn pagination(page: &PageState, theme: &Theme) -> String {
    if page.is_empty() {
        return format!("{}\n", theme.dim.apply_to("Pages: (none)"));
    }

    let mut row = String::from("Pages:");
    for number in page.pages() {
        if number == page.current {
            write!(row, " {}", theme.active_page.apply_to(format!("[{number}]"))).unwrap();
        } else {
            write!(row, " {}", theme.page.apply_to(number)).unwrap();
        }
    }
    row.push('\n');
    row
}

/// One character card for the list view.
pub fn character_card(character: &Character, theme: &Theme) -> String {
    format!(
        "{}\n  {} {}   {} {}   {} {}\n  {} {}\n",
        theme.title.apply_to(&character.name),
        theme.label.apply_to("Status:"),
        character.status,
        theme.label.apply_to("Species:"),
        character.species,
        theme.label.apply_to("Gender:"),
        character.gender,
        theme.label.apply_to("Last seen:"),
        character.location.name,
    )
}

/// One location card for the list view.
pub fn location_card(location: &Location, theme: &Theme) -> String {
    format!(
        "{}\n  {} {}   {} {}\n",
        theme.title.apply_to(&location.name),
        theme.label.apply_to("Type:"),
        or_na(&location.kind),
        theme.label.apply_to("Dimension:"),
        or_na(&location.dimension),
    )
}

/// One episode card for the list view.
pub fn episode_card(episode: &Episode, theme: &Theme) -> String {
    format!(
        "{}\n  {} {}   {} {}\n",
        theme.title.apply_to(&episode.name),
        theme.label.apply_to("Code:"),
        episode.code,
        theme.label.apply_to("Air date:"),
        episode.air_date,
    )
}

/// The character list view: filtered cards, active filters, the value sets
/// available for filtering, and the pagination row.
pub fn character_list(
    characters: &[&Character],
    values: &UniqueValues,
    filters: &FilterState,
    page: &PageState,
    theme: &Theme,
) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to("Characters")).unwrap();
    out.push('\n');

    for character in characters {
        out.push_str(&character_card(character, theme));
    }
    if characters.is_empty() {
        writeln!(out, "{}", theme.dim.apply_to("No characters match the active filters.")).unwrap();
    }
    out.push('\n');

    if !filters.is_empty() {
        writeln!(out, "{}", theme.heading.apply_to("Active filters")).unwrap();
        for (label, set) in [
            ("status", &filters.status),
            ("gender", &filters.gender),
            ("species", &filters.species),
            ("type", &filters.kind),
            ("location", &filters.location),
            ("episode", &filters.episode),
        ] {
            if !set.is_empty() {
                let joined: Vec<&str> = set.iter().map(String::as_str).collect();
                writeln!(out, "  {} {}", theme.label.apply_to(format!("{label}:")), joined.join(", "))
                    .unwrap();
            }
        }
        out.push('\n');
    }

    writeln!(out, "{}", theme.heading.apply_to("Filterable values on this page")).unwrap();
    for (label, set) in [
        ("status", &values.status),
        ("gender", &values.gender),
        ("species", &values.species),
        ("type", &values.kind),
        ("location", &values.location),
        ("episode", &values.episode),
    ] {
        if !set.is_empty() {
            let joined: Vec<&str> = set.iter().map(String::as_str).collect();
            writeln!(out, "  {} {}", theme.dim.apply_to(format!("{label}:")), joined.join(", "))
                .unwrap();
        }
    }
    out.push('\n');

    out.push_str(&pagination(page, theme));
    out
}

/// The location list view.
pub fn location_list(locations: &[&Location], page: &PageState, theme: &Theme) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to("Locations")).unwrap();
    out.push('\n');

    for location in locations {
        out.push_str(&location_card(location, theme));
    }
    if locations.is_empty() {
        writeln!(out, "{}", theme.dim.apply_to("No locations match the active filters.")).unwrap();
    }
    out.push('\n');

    out.push_str(&pagination(page, theme));
    out
}

/// The episode list view.
pub fn episode_list(episodes: &[&Episode], page: &PageState, theme: &Theme) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to("Episodes")).unwrap();
    out.push('\n');

    for episode in episodes {
        out.push_str(&episode_card(episode, theme));
    }
    if episodes.is_empty() {
        writeln!(out, "{}", theme.dim.apply_to("No episodes match the active filters.")).unwrap();
    }
    out.push('\n');

    out.push_str(&pagination(page, theme));
    out
}

/// The character detail view: attributes plus the episodes fetched by
/// following the character's episode URLs.
pub fn character_detail(character: &Character, episodes: &[Episode], theme: &Theme) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to(&character.name)).unwrap();
    for (label, value) in [
        ("Status:", character.status.as_str()),
        ("Species:", character.species.as_str()),
        ("Type:", or_na(&character.kind)),
        ("Gender:", character.gender.as_str()),
        ("Origin:", character.origin.name.as_str()),
        ("Location:", character.location.name.as_str()),
    ] {
        writeln!(out, "{} {}", theme.label.apply_to(label), value).unwrap();
    }
    writeln!(
        out,
        "{} {}",
        theme.label.apply_to("Created:"),
        character.created.format("%Y-%m-%d")
    )
    .unwrap();

    out.push('\n');
    writeln!(
        out,
        "{} {}",
        theme.heading.apply_to("Episodes"),
        theme.dim.apply_to(format!("({})", episodes.len()))
    )
    .unwrap();
    for episode in episodes {
        writeln!(out, "  {}  {}", episode.code, episode.name).unwrap();
    }
    out
}

/// The location detail view: attributes plus the resident characters.
pub fn location_detail(location: &Location, residents: &[Character], theme: &Theme) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to(&location.name)).unwrap();
    for (label, value) in [
        ("Type:", or_na(&location.kind)),
        ("Dimension:", or_na(&location.dimension)),
    ] {
        writeln!(out, "{} {}", theme.label.apply_to(label), value).unwrap();
    }
    writeln!(
        out,
        "{} {}",
        theme.label.apply_to("Created:"),
        location.created.format("%Y-%m-%d")
    )
    .unwrap();

    out.push('\n');
    writeln!(
        out,
        "{} {}",
        theme.heading.apply_to("Residents"),
        theme.dim.apply_to(format!("({})", residents.len()))
    )
    .unwrap();
    for resident in residents {
        writeln!(out, "  {}  {}", resident.name, theme.dim.apply_to(&resident.status)).unwrap();
    }
    out
}

/// The episode detail view: attributes plus the appearing characters.
pub fn episode_detail(episode: &Episode, characters: &[Character], theme: &Theme) -> String {
    let mut out = String::new();
    writeln!(out, "{}", theme.heading.apply_to(&episode.name)).unwrap();
    for (label, value) in [
        ("Air date:", episode.air_date.as_str()),
        ("Code:", episode.code.as_str()),
    ] {
        writeln!(out, "{} {}", theme.label.apply_to(label), value).unwrap();
    }

    out.push('\n');
    writeln!(
        out,
        "{} {}",
        theme.heading.apply_to("Characters"),
        theme.dim.apply_to(format!("({})", characters.len()))
    )
    .unwrap();
    for character in characters {
        writeln!(out, "  {}", character.name).unwrap();
    }
    out
}

/// The API uses the empty string for absent attributes; show `N/A` instead.
fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
