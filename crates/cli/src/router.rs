//! Route dispatch: each path maps to exactly one view.

use rickdex_client::{ApiClient, CharacterQuery};
use rickdex_core::filter::{EpisodeFilter, FilterState, LocationFilter};
use rickdex_core::route::Route;

use crate::theme::Theme;
use crate::views::{
    CharacterDetailView, CharacterListView, EpisodeDetailView, EpisodeListView,
    LocationDetailView, LocationListView,
};

/// Per-invocation view parameters collected from the command line.
#[derive(Debug, Default)]
pub struct ViewOptions {
    pub page: u32,
    pub query: CharacterQuery,
    pub filters: FilterState,
    pub location_filter: LocationFilter,
    pub episode_filter: EpisodeFilter,
}

/// Run the view a route maps to and return its rendered output.
pub async fn dispatch(
    client: ApiClient,
    route: Route,
    options: ViewOptions,
    theme: &Theme,
) -> String {
    match route {
        Route::Characters => {
            let mut view = CharacterListView::new(client);
            view.set_query(options.query);
            view.filters = options.filters;
            view.load(options.page).await;
            view.render(theme)
        }
        Route::Locations => {
            let mut view = LocationListView::new(client);
            view.filter = options.location_filter;
            view.load(options.page).await;
            view.render(theme)
        }
        Route::Episodes => {
            let mut view = EpisodeListView::new(client);
            view.filter = options.episode_filter;
            view.load(options.page).await;
            view.render(theme)
        }
        Route::Character(id) => {
            let mut view = CharacterDetailView::new(client);
            view.load(id).await;
            view.render(theme)
        }
        Route::Location(id) => {
            let mut view = LocationDetailView::new(client);
            view.load(id).await;
            view.render(theme)
        }
        Route::Episode(id) => {
            let mut view = EpisodeDetailView::new(client);
            view.load(id).await;
            view.render(theme)
        }
    }
}
