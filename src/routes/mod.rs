use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::{account, events, feed, health_check, organizers, translations};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/facets", get(events::event_facets))
        .route("/events/sponsored", get(events::sponsored_events))
        .route("/events/popular", get(events::popular_events))
        .route("/events/map", get(events::event_map))
        .route(
            "/events/:id",
            get(events::get_event).put(events::update_event),
        )
        .route("/feed", get(feed::feed))
        .route("/posts/:id/like", post(feed::like_post))
        .route(
            "/organizers/:id/follow",
            get(organizers::follow_status)
                .post(organizers::follow_organizer)
                .delete(organizers::unfollow_organizer),
        )
        .route("/auth/signin", post(account::sign_in))
        .route("/auth/signup", post(account::sign_up))
        .route("/me", get(account::me).put(account::update_profile))
        .route("/me/events", get(events::my_events))
        .route("/me/genres", put(account::set_preferred_genres))
        .route("/me/upgrade", post(account::upgrade_plan))
        .route("/plans", get(account::plans))
        .route("/translations/:locale", get(translations::translation_table));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api)
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
