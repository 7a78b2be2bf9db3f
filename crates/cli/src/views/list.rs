//! List views: one page of a collection plus client-side filtering.

use rickdex_client::{ApiClient, CharacterQuery, Paged, RequestTokens};
use rickdex_core::entity::{Character, Episode, Location};
use rickdex_core::filter::{unique_values, EpisodeFilter, FilterState, LocationFilter};
use rickdex_core::page::PageState;

use crate::render;
use crate::theme::Theme;
use crate::views::ViewState;

/// Build the page state for a freshly fetched page.
fn page_state<T>(fetched: &Paged<T>, requested: u32) -> PageState {
    let mut page = PageState::new(fetched.info.pages);
    page.set_page(requested);
    page
}

/// Loaded snapshot of the character list.
#[derive(Debug)]
pub struct CharacterList {
    pub characters: Vec<Character>,
    pub page: PageState,
}

/// The character list view: search happens server-side, the six-field
/// filter client-side. The filtered list and the filterable value sets are
/// derived from the unfiltered page on every render.
pub struct CharacterListView {
    client: ApiClient,
    tokens: RequestTokens,
    query: CharacterQuery,
    pub filters: FilterState,
    state: ViewState<CharacterList>,
}

impl CharacterListView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            query: CharacterQuery::default(),
            filters: FilterState::new(),
            state: ViewState::Loading,
        }
    }

    /// Set the server-side search parameters. Callers should load page 1
    /// after changing the query, matching the search box resetting the
    /// page.
    pub fn set_query(&mut self, query: CharacterQuery) {
        self.query = query;
    }

    /// Fetch `page` of the collection (or of the search results when a
    /// query is set) and replace the view state with the outcome.
    pub async fn load(&mut self, page: u32) {
        let token = self.tokens.issue();
        let fetched = if self.query.is_empty() {
            self.client.characters(page).await
        } else {
            self.client.search_characters(&self.query, page).await
        };

        match fetched {
            Ok(fetched) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(CharacterList {
                    page: page_state(&fetched, page),
                    characters: fetched.results,
                });
            }
            Ok(_) => tracing::debug!(page, "discarding stale character page"),
            Err(error) => tracing::error!(%error, page, "failed to fetch characters"),
        }
    }

    /// Move to `target` and re-fetch. Out-of-range targets (and pages on a
    /// view that never loaded) are a no-op.
    pub async fn change_page(&mut self, target: u32) {
        let in_range = match self.state.loaded() {
            Some(data) => {
                let mut page = data.page;
                page.set_page(target)
            }
            None => false,
        };
        if in_range {
            self.load(target).await;
        }
    }

    pub fn state(&self) -> &ViewState<CharacterList> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                let filtered = self.filters.apply(&data.characters);
                let values = unique_values(&data.characters);
                render::character_list(&filtered, &values, &self.filters, &data.page, theme)
            }
        }
    }
}

/// Loaded snapshot of the location list.
#[derive(Debug)]
pub struct LocationList {
    pub locations: Vec<Location>,
    pub page: PageState,
}

/// The location list view with its substring filter.
pub struct LocationListView {
    client: ApiClient,
    tokens: RequestTokens,
    pub filter: LocationFilter,
    state: ViewState<LocationList>,
}

impl LocationListView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            filter: LocationFilter::default(),
            state: ViewState::Loading,
        }
    }

    pub async fn load(&mut self, page: u32) {
        let token = self.tokens.issue();
        match self.client.locations(page).await {
            Ok(fetched) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(LocationList {
                    page: page_state(&fetched, page),
                    locations: fetched.results,
                });
            }
            Ok(_) => tracing::debug!(page, "discarding stale location page"),
            Err(error) => tracing::error!(%error, page, "failed to fetch locations"),
        }
    }

    pub fn state(&self) -> &ViewState<LocationList> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                let filtered = self.filter.apply(&data.locations);
                render::location_list(&filtered, &data.page, theme)
            }
        }
    }
}

/// Loaded snapshot of the episode list.
#[derive(Debug)]
pub struct EpisodeList {
    pub episodes: Vec<Episode>,
    pub page: PageState,
}

/// The episode list view with its substring filter.
pub struct EpisodeListView {
    client: ApiClient,
    tokens: RequestTokens,
    pub filter: EpisodeFilter,
    state: ViewState<EpisodeList>,
}

impl EpisodeListView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            filter: EpisodeFilter::default(),
            state: ViewState::Loading,
        }
    }

    pub async fn load(&mut self, page: u32) {
        let token = self.tokens.issue();
        match self.client.episodes(page).await {
            Ok(fetched) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(EpisodeList {
                    page: page_state(&fetched, page),
                    episodes: fetched.results,
                });
            }
            Ok(_) => tracing::debug!(page, "discarding stale episode page"),
            Err(error) => tracing::error!(%error, page, "failed to fetch episodes"),
        }
    }

    pub fn state(&self) -> &ViewState<EpisodeList> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                let filtered = self.filter.apply(&data.episodes);
                render::episode_list(&filtered, &data.page, theme)
            }
        }
    }
}
