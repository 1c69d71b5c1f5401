use axum::response::Response;
use serde::Serialize;

use crate::i18n::{Locale, TranslationKey};
use crate::models::User;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::response::success;
use crate::validation::{localize, FieldError};

pub mod account;
pub mod events;
pub mod feed;
pub mod organizers;
pub mod translations;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "evenemang-api",
    };

    success(payload, "Health check successful")
}

pub(crate) fn field_errors(
    state: &AppState,
    locale: Locale,
    errors: &[FieldError],
) -> AppError {
    AppError::FieldErrors(localize(errors, state.translations(), locale))
}

pub(crate) fn require_organizer(user: &User) -> AppResult<()> {
    if user.is_organizer {
        Ok(())
    } else {
        Err(AppError::Forbidden("Only organizers can manage events".into()))
    }
}

/// Event management sits behind the paid tier.
pub(crate) fn require_paid_plan(state: &AppState, locale: Locale, user: &User) -> AppResult<()> {
    if user.has_paid_plan {
        Ok(())
    } else {
        let message = state.translations().t(locale, TranslationKey::NoPaidPlan);
        Err(AppError::PaymentRequired(message.to_string()))
    }
}
