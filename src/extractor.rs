use std::str::FromStr;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use serde::Deserialize;

use crate::i18n::Locale;
use crate::models::User;
use crate::state::AppState;
use crate::utils::error::AppError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The signed-in mock user, named by the `x-user-id` header.
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn id(&self) -> &str {
        &self.0.id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::AuthError("Sign in required".into()))?;

        state
            .users()
            .find_user(user_id)?
            .map(CurrentUser)
            .ok_or_else(|| AppError::AuthError(format!("Unknown user '{user_id}'")))
    }
}

#[derive(Deserialize)]
struct LangParam {
    lang: Option<String>,
}

/// Display locale: `?lang=` first, then `Accept-Language`, then the
/// configured default. Unknown values fall through to the next source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

#[async_trait]
impl FromRequestParts<AppState> for RequestLocale {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let from_query = Query::<LangParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(param)| param.lang)
            .and_then(|lang| Locale::from_str(&lang).ok());

        let from_header = || {
            parts
                .headers
                .get(ACCEPT_LANGUAGE)
                .and_then(|value| value.to_str().ok())
                .and_then(primary_language)
        };

        Ok(RequestLocale(
            from_query
                .or_else(from_header)
                .unwrap_or(state.default_locale()),
        ))
    }
}

fn primary_language(header: &str) -> Option<Locale> {
    header
        .split(',')
        .filter_map(|tag| tag.split(';').next())
        .filter_map(|tag| tag.trim().split('-').next())
        .find_map(|lang| Locale::from_str(&lang.to_ascii_lowercase()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_language_picks_first_supported_tag() {
        assert_eq!(primary_language("sv-SE,sv;q=0.9,en;q=0.8"), Some(Locale::Sv));
        assert_eq!(primary_language("de-DE, en-GB;q=0.7"), Some(Locale::En));
        assert_eq!(primary_language("fr, de"), None);
    }
}
