use axum::extract::{Path, State};
use axum::response::Response;
use serde::Serialize;

use crate::extractor::CurrentUser;
use crate::models::{Event, UserSummary};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::response::success;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FollowStatus {
    organizer: UserSummary,
    following: bool,
    following_count: u32,
}

fn find_organizer(state: &AppState, organizer_id: &str) -> AppResult<UserSummary> {
    let from_catalog = state
        .events()
        .events()
        .iter()
        .map(|e: &Event| &e.organizer)
        .find(|o| o.id == organizer_id)
        .cloned();

    if let Some(organizer) = from_catalog {
        return Ok(organizer);
    }

    match state.users().find_user(organizer_id)? {
        Some(user) if user.is_organizer => Ok(user.summary()),
        _ => Err(AppError::NotFound(format!(
            "Organizer with id '{}' was not found",
            organizer_id
        ))),
    }
}

pub async fn follow_organizer(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(organizer_id): Path<String>,
) -> AppResult<Response> {
    let organizer = find_organizer(&state, &organizer_id)?;
    let updated = state.users().follow(user.id(), &organizer.id)?;

    let status = FollowStatus {
        organizer,
        following: true,
        following_count: updated.following,
    };
    Ok(success(status, "Organizer followed"))
}

pub async fn unfollow_organizer(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(organizer_id): Path<String>,
) -> AppResult<Response> {
    let organizer = find_organizer(&state, &organizer_id)?;
    let updated = state.users().unfollow(user.id(), &organizer.id)?;

    let status = FollowStatus {
        organizer,
        following: false,
        following_count: updated.following,
    };
    Ok(success(status, "Organizer unfollowed"))
}

pub async fn follow_status(
    user: CurrentUser,
    State(state): State<AppState>,
    Path(organizer_id): Path<String>,
) -> AppResult<Response> {
    let organizer = find_organizer(&state, &organizer_id)?;
    let following = state.users().is_following(user.id(), &organizer.id)?;

    let status = FollowStatus {
        organizer,
        following,
        following_count: user.0.following,
    };
    Ok(success(status, "Follow status retrieved"))
}
