use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use super::field_errors;
use crate::extractor::{CurrentUser, RequestLocale};
use crate::models::{Plan, PlanTier};
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::response::{created, success};
use crate::validation::{ProfileForm, SignUpForm, DEFAULT_CURRENCY};

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenresRequest {
    pub preferred_genres: Vec<String>,
}

/// Mock sign-in: any password is accepted for a known email.
pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = body?;

    let user = state
        .users()
        .find_user_by_email(request.email.trim())?
        .ok_or_else(|| AppError::AuthError("Invalid credentials".into()))?;

    info!(user_id = %user.id, "User signed in");
    Ok(success(user, "Signed in"))
}

pub async fn sign_up(
    RequestLocale(locale): RequestLocale,
    State(state): State<AppState>,
    body: Result<Json<SignUpForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = body?;
    let new_user = form
        .validate()
        .map_err(|errors| field_errors(&state, locale, &errors))?;

    let user = state.users().register(new_user)?;
    Ok(created(user, "Account created"))
}

pub async fn me(user: CurrentUser) -> Response {
    success(user.0, "Profile retrieved")
}

pub async fn update_profile(
    user: CurrentUser,
    RequestLocale(locale): RequestLocale,
    State(state): State<AppState>,
    body: Result<Json<ProfileForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = body?;
    let update = form
        .validate()
        .map_err(|errors| field_errors(&state, locale, &errors))?;

    let updated = state.users().update_profile(user.id(), update)?;
    Ok(success(updated, "Profile updated"))
}

pub async fn set_preferred_genres(
    user: CurrentUser,
    State(state): State<AppState>,
    body: Result<Json<GenresRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = body?;
    let updated = state
        .users()
        .set_preferred_genres(user.id(), request.preferred_genres)?;

    Ok(success(updated, "Genre preferences saved"))
}

/// Mock checkout: flips the caller to the paid tier.
pub async fn upgrade_plan(user: CurrentUser, State(state): State<AppState>) -> AppResult<Response> {
    if user.0.has_paid_plan {
        return Ok(success(user.0, "Already on the pro plan"));
    }

    let updated = state.users().upgrade_plan(user.id())?;
    Ok(success(updated, "Upgraded to pro"))
}

/// Plans with their localized names. `isCurrent` is only set when the
/// caller identifies themselves.
pub async fn plans(
    user: Option<CurrentUser>,
    RequestLocale(locale): RequestLocale,
    State(state): State<AppState>,
) -> Response {
    let current = user.map(|u| PlanTier::for_paid_flag(u.0.has_paid_plan));

    let plans: Vec<Plan> = [PlanTier::Free, PlanTier::Pro]
        .into_iter()
        .map(|tier| Plan {
            tier,
            name: state.translations().t(locale, tier.name_key()),
            monthly_price: tier.monthly_price(),
            currency: DEFAULT_CURRENCY,
            can_manage_events: tier == PlanTier::Pro,
            is_current: current == Some(tier),
        })
        .collect();

    success(plans, "Plans retrieved")
}
