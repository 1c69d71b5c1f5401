use std::collections::HashSet;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info};
use uuid::Uuid;

use super::{field_errors, require_organizer, require_paid_plan};
use crate::extractor::{CurrentUser, RequestLocale};
use crate::i18n::TranslationKey;
use crate::models::{Category, Event, FilterCriteria, FilterParams, MapMarker};
use crate::search::EventSearchFilter;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};
use crate::utils::response::{created, success, Listing};
use crate::validation::EventForm;

const POPULAR_COUNT: usize = 6;

pub(crate) fn criteria_from(
    query: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<FilterCriteria> {
    let Query(params) = query?;
    Ok(FilterCriteria::try_from(params)?)
}

fn event_not_found(event_id: &str) -> AppError {
    AppError::NotFound(format!("Event with id '{}' was not found", event_id))
}

pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<Response> {
    let criteria = criteria_from(query)?;
    let catalog = state.events().events();

    let filter = EventSearchFilter::new(&criteria, state.clock().today());
    let visible = filter.apply(catalog.iter());
    debug!(?criteria, visible = visible.len(), "Events filtered");

    Ok(success(Listing::from(visible), "Events retrieved"))
}

pub async fn event_map(
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<Response> {
    let criteria = criteria_from(query)?;
    let catalog = state.events().events();

    let markers: Vec<MapMarker> = EventSearchFilter::new(&criteria, state.clock().today())
        .apply(catalog.iter())
        .into_iter()
        .map(MapMarker::from)
        .collect();

    Ok(success(Listing::from(markers), "Map markers retrieved"))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> AppResult<Response> {
    let event = state
        .events()
        .find_event(&event_id)
        .ok_or_else(|| event_not_found(&event_id))?;

    Ok(success(event, "Event retrieved"))
}

pub async fn sponsored_events(State(state): State<AppState>) -> Response {
    let catalog = state.events().events();
    let sponsored: Vec<&Event> = catalog.iter().filter(|e| e.is_sponsored).collect();

    success(Listing::from(sponsored), "Sponsored events retrieved")
}

pub async fn popular_events(State(state): State<AppState>) -> Response {
    let catalog = state.events().events();
    let popular: Vec<&Event> = catalog.iter().take(POPULAR_COUNT).collect();

    success(Listing::from(popular), "Popular events retrieved")
}

#[derive(Serialize)]
struct Facet {
    value: String,
    label: String,
}

#[derive(Serialize)]
struct Facets {
    categories: Vec<Facet>,
    genres: Vec<Facet>,
    locations: Vec<String>,
}

/// Filter options for the search box, derived from the catalog in
/// first-seen order.
pub async fn event_facets(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Response {
    let catalog = state.events().events();
    let translations = state.translations();

    let categories = Category::iter()
        .map(|category| Facet {
            value: category.to_string(),
            label: translations.t(locale, category.label_key()).to_string(),
        })
        .collect();

    let mut seen = HashSet::new();
    let genres = catalog
        .iter()
        .filter(|e| seen.insert(e.genre.as_str()))
        .map(|e| Facet {
            value: e.genre.clone(),
            label: TranslationKey::for_genre(&e.genre)
                .map(|key| translations.t(locale, key).to_string())
                .unwrap_or_else(|| e.genre.clone()),
        })
        .collect();

    let mut seen = HashSet::new();
    let locations = catalog
        .iter()
        .map(Event::city)
        .filter(|city| seen.insert(*city))
        .map(String::from)
        .collect();

    success(
        Facets {
            categories,
            genres,
            locations,
        },
        "Facets retrieved",
    )
}

/// Organizer dashboard: the caller's own events under the dashboard filters.
pub async fn my_events(
    user: CurrentUser,
    State(state): State<AppState>,
    query: Result<Query<FilterParams>, QueryRejection>,
) -> AppResult<Response> {
    require_organizer(&user.0)?;
    let criteria = criteria_from(query)?;
    let catalog = state.events().events();

    let own = catalog.iter().filter(|e| e.organizer.id == user.id());
    let visible = EventSearchFilter::new(&criteria, state.clock().today()).apply(own);

    Ok(success(Listing::from(visible), "Organizer events retrieved"))
}

pub async fn create_event(
    user: CurrentUser,
    RequestLocale(locale): RequestLocale,
    State(state): State<AppState>,
    body: Result<Json<EventForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = body?;
    require_organizer(&user.0)?;

    let draft = form
        .validate()
        .map_err(|errors| field_errors(&state, locale, &errors))?;
    require_paid_plan(&state, locale, &user.0)?;

    let event = draft.into_event(Uuid::new_v4().to_string(), user.0.summary());
    info!(event_id = %event.id, organizer_id = %user.id(), "Event created");

    Ok(created(event, "Event created"))
}

/// Returns the edited event; the shared catalog itself stays read-only.
pub async fn update_event(
    user: CurrentUser,
    RequestLocale(locale): RequestLocale,
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<EventForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = body?;
    require_organizer(&user.0)?;
    require_paid_plan(&state, locale, &user.0)?;

    let existing = state
        .events()
        .find_event(&event_id)
        .ok_or_else(|| event_not_found(&event_id))?;
    if existing.organizer.id != user.id() {
        return Err(AppError::Forbidden(format!(
            "Event '{}' belongs to another organizer",
            event_id
        )));
    }

    let draft = form
        .validate()
        .map_err(|errors| field_errors(&state, locale, &errors))?;
    let event = draft.apply_to(existing);
    info!(event_id = %event.id, organizer_id = %user.id(), "Event edited");

    Ok(success(event, "Event updated"))
}
