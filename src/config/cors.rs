use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::extractor::USER_ID_HEADER;

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// CORS for the browser client. Falls back to any origin without
/// credentials when none of `origins` parse.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::ORIGIN,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .expose_headers([header::CONTENT_LENGTH, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS));

    let parsed = parse_origins(origins);
    if parsed.is_empty() {
        tracing::warn!("CORS: No valid origins configured, allowing any origin without credentials");
        layer.allow_origin(AllowOrigin::any())
    } else {
        tracing::info!("CORS: Configured with {} allowed origin(s)", parsed.len());
        layer
            .allow_origin(AllowOrigin::list(parsed))
            .allow_credentials(true)
    }
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => {
                tracing::debug!("CORS: Allowing origin: {}", origin);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}
