use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rickdex_cli::args::Args;
use rickdex_cli::config::Config;
use rickdex_cli::router::{self, ViewOptions};
use rickdex_cli::theme::Theme;
use rickdex_client::ApiClient;
use rickdex_core::route::Route;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rickdex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    tracing::debug!(api_url = %config.api_url, "loaded configuration");

    let route = match Route::parse(&args.path) {
        Ok(route) => route,
        Err(error) => {
            eprintln!("rickdex: {error}");
            std::process::exit(2);
        }
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .expect("failed to build HTTP client");
    let client = ApiClient::with_client(http, config.api_url.clone());

    let theme = if args.no_color || !console::colors_enabled() {
        Theme::plain()
    } else {
        Theme::default()
    };

    let options = ViewOptions {
        page: args.page,
        query: args.character_query(),
        filters: args.filter_state(),
        location_filter: args.location_filter(),
        episode_filter: args.episode_filter(),
    };

    let output = router::dispatch(client, route, options, &theme).await;
    print!("{output}");
}
