use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use tracing::debug;

use super::events::criteria_from;
use crate::extractor::CurrentUser;
use crate::models::{EventPreview, FeedEntry, FilterParams};
use crate::search::{resolve_event, EventSearchFilter};
use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::response::{success, Listing};

pub async fn feed(
    user: CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<Response> {
    let criteria = criteria_from(query)?;
    let catalog = state.events().events();
    let posts = state.feed().posts()?;

    let filter = EventSearchFilter::new(&criteria, state.clock().today());
    let entries: Vec<FeedEntry> = filter
        .apply_posts(posts, &catalog)
        .into_iter()
        .map(|post| {
            let event = resolve_event(&catalog, &post).map(EventPreview::from);
            FeedEntry { post, event }
        })
        .collect();

    debug!(user_id = %user.id(), visible = entries.len(), "Feed filtered");
    Ok(success(Listing::from(entries), "Feed retrieved"))
}

pub async fn like_post(
    _user: CurrentUser,
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> AppResult<Response> {
    let post = state.feed().like_post(&post_id)?;
    Ok(success(post, "Post liked"))
}
