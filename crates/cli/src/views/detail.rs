//! Detail views: one primary resource plus its related entities.
//!
//! The primary fetch resolves first; the related-resource URLs embedded in
//! its payload are then fetched in parallel, and the view only leaves
//! `Loading` once every related fetch has resolved. A failure anywhere in
//! the chain keeps the whole view loading, so there is never a partially
//! populated related section.

use rickdex_client::{ApiClient, ApiError, RequestTokens};
use rickdex_core::entity::{Character, EntityId, Episode, Location};

use crate::render;
use crate::theme::Theme;
use crate::views::ViewState;

/// Loaded snapshot of the character detail view.
#[derive(Debug)]
pub struct CharacterDetail {
    pub character: Character,
    /// The episodes the character appears in, in payload order.
    pub episodes: Vec<Episode>,
}

/// Character by id, then its episodes by URL.
pub struct CharacterDetailView {
    client: ApiClient,
    tokens: RequestTokens,
    state: ViewState<CharacterDetail>,
}

impl CharacterDetailView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            state: ViewState::Loading,
        }
    }

    pub async fn load(&mut self, id: EntityId) {
        let token = self.tokens.issue();
        match self.fetch(id).await {
            Ok(detail) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(detail);
            }
            Ok(_) => tracing::debug!(id, "discarding stale character detail"),
            Err(error) => tracing::error!(%error, id, "failed to fetch character detail"),
        }
    }

    async fn fetch(&self, id: EntityId) -> Result<CharacterDetail, ApiError> {
        let character = self.client.character(id).await?;
        let episodes = self.client.episodes_by_urls(&character.episode).await?;
        Ok(CharacterDetail { character, episodes })
    }

    pub fn state(&self) -> &ViewState<CharacterDetail> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                render::character_detail(&data.character, &data.episodes, theme)
            }
        }
    }
}

/// Loaded snapshot of the location detail view.
#[derive(Debug)]
pub struct LocationDetail {
    pub location: Location,
    /// The characters resident at the location, in payload order.
    pub residents: Vec<Character>,
}

/// Location by id, then its residents by URL.
pub struct LocationDetailView {
    client: ApiClient,
    tokens: RequestTokens,
    state: ViewState<LocationDetail>,
}

impl LocationDetailView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            state: ViewState::Loading,
        }
    }

    pub async fn load(&mut self, id: EntityId) {
        let token = self.tokens.issue();
        match self.fetch(id).await {
            Ok(detail) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(detail);
            }
            Ok(_) => tracing::debug!(id, "discarding stale location detail"),
            Err(error) => tracing::error!(%error, id, "failed to fetch location detail"),
        }
    }

    async fn fetch(&self, id: EntityId) -> Result<LocationDetail, ApiError> {
        let location = self.client.location(id).await?;
        let residents = self.client.characters_by_urls(&location.residents).await?;
        Ok(LocationDetail { location, residents })
    }

    pub fn state(&self) -> &ViewState<LocationDetail> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                render::location_detail(&data.location, &data.residents, theme)
            }
        }
    }
}

/// Loaded snapshot of the episode detail view.
#[derive(Debug)]
pub struct EpisodeDetail {
    pub episode: Episode,
    /// The characters appearing in the episode, in payload order.
    pub characters: Vec<Character>,
}

/// Episode by id, then its characters by URL.
pub struct EpisodeDetailView {
    client: ApiClient,
    tokens: RequestTokens,
    state: ViewState<EpisodeDetail>,
}

impl EpisodeDetailView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            tokens: RequestTokens::new(),
            state: ViewState::Loading,
        }
    }

    pub async fn load(&mut self, id: EntityId) {
        let token = self.tokens.issue();
        match self.fetch(id).await {
            Ok(detail) if self.tokens.is_current(token) => {
                self.state = ViewState::Loaded(detail);
            }
            Ok(_) => tracing::debug!(id, "discarding stale episode detail"),
            Err(error) => tracing::error!(%error, id, "failed to fetch episode detail"),
        }
    }

    async fn fetch(&self, id: EntityId) -> Result<EpisodeDetail, ApiError> {
        let episode = self.client.episode(id).await?;
        let characters = self.client.characters_by_urls(&episode.characters).await?;
        Ok(EpisodeDetail { episode, characters })
    }

    pub fn state(&self) -> &ViewState<EpisodeDetail> {
        &self.state
    }

    pub fn render(&self, theme: &Theme) -> String {
        match &self.state {
            ViewState::Loading => render::loading(theme),
            ViewState::Loaded(data) => {
                render::episode_detail(&data.episode, &data.characters, theme)
            }
        }
    }
}
