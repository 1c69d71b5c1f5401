use axum::extract::{Path, State};
use axum::response::Response;

use crate::i18n::Locale;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::response::success;

/// Full key/string table for one locale, for clients that render offline.
pub async fn translation_table(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> AppResult<Response> {
    let locale: Locale = locale
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Unsupported locale '{}'", locale)))?;

    Ok(success(state.translations().entries(locale), "Translations retrieved"))
}
