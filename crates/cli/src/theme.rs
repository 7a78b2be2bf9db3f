//! Terminal styling as a swappable value.
//!
//! Every renderer takes a `&Theme`, so restyling the output means swapping
//! one value rather than maintaining parallel render implementations.

use console::Style;

/// Styles for each output role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// View and section headings.
    pub heading: Style,
    /// Entity names on cards.
    pub title: Style,
    /// Field labels (`Status:`, `Species:`, ...).
    pub label: Style,
    /// De-emphasized text (counts, hints).
    pub dim: Style,
    /// The active page number in the pagination row.
    pub active_page: Style,
    /// Inactive page numbers.
    pub page: Style,
    /// The loading indicator.
    pub loading: Style,
}

impl Theme {
    /// The default colored theme.
    pub fn colored() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            title: Style::new().bold(),
            label: Style::new().green(),
            dim: Style::new().dim(),
            active_page: Style::new().yellow().bold(),
            page: Style::new(),
            loading: Style::new().magenta(),
        }
    }

    /// An unstyled theme for piped output, `--no-color`, and tests.
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            title: Style::new(),
            label: Style::new(),
            dim: Style::new(),
            active_page: Style::new(),
            page: Style::new(),
            loading: Style::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
