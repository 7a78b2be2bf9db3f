//! Views: fetched state plus the orchestration that fills it.
//!
//! Every view follows the same lifecycle: it starts `Loading`, a `load`
//! call fetches its resources, and a successful result replaces the state
//! wholesale. A failed fetch is logged and leaves the view `Loading`; there
//! is no user-visible error state, retry, or partial render. Responses are
//! token-guarded so a stale fetch can never overwrite fresher state.

pub mod detail;
pub mod list;

pub use detail::{CharacterDetailView, EpisodeDetailView, LocationDetailView};
pub use list::{CharacterListView, EpisodeListView, LocationListView};

/// Render state of a view.
#[derive(Debug)]
pub enum ViewState<T> {
    /// Nothing to show yet (also the terminal state after a failed fetch).
    Loading,
    /// A complete, renderable snapshot.
    Loaded(T),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded snapshot, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loading => None,
            Self::Loaded(data) => Some(data),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Loading
    }
}
