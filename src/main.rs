use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use evenemang_server::clock::{Clock, SystemClock};
use evenemang_server::config::Config;
use evenemang_server::i18n::Translations;
use evenemang_server::repository::memory::InMemoryStore;
use evenemang_server::routes::create_routes;
use evenemang_server::state::AppState;

fn init_tracing(production: bool) -> Result<(), Box<dyn Error>> {
    let log_level = if production { "info" } else { "debug" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(env_filter)
        .try_init()?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.production)?;

    let translations = Translations::load()?;
    tracing::info!(default_locale = %config.default_locale, "Translations loaded");

    let clock = Arc::new(SystemClock);
    let store = Arc::new(InMemoryStore::seeded(clock.today()));
    let state = AppState::new(store, translations, clock, config.default_locale);

    let app = create_routes(state, &config);

    tracing::info!("Server running at http://{}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
