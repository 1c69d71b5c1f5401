use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::i18n::TranslationKey;
use crate::models::user::UserSummary;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Theater,
    Ballet,
    Opera,
    Arts,
    Music,
    Comedy,
}

impl Category {
    pub fn label_key(self) -> TranslationKey {
        match self {
            Category::Theater => TranslationKey::Theater,
            Category::Ballet => TranslationKey::Ballet,
            Category::Opera => TranslationKey::Opera,
            Category::Arts => TranslationKey::Arts,
            Category::Music => TranslationKey::Music,
            Category::Comedy => TranslationKey::Comedy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Central Stockholm, used when a created event carries no position.
    pub const STOCKHOLM: Coordinates = Coordinates {
        lat: 59.3293,
        lng: 18.0686,
    };

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: Category,
    pub genre: String,
    pub price: Decimal,
    pub currency: String,
    pub image_url: String,
    pub organizer: UserSummary,
    pub attendees: u32,
    pub is_sponsored: bool,
    pub coordinates: Coordinates,
}

impl Event {
    /// Last comma-separated segment of the location, e.g. "Stockholm" for
    /// "Dramaten, Stockholm".
    pub fn city(&self) -> &str {
        self.location
            .rsplit(',')
            .next()
            .unwrap_or(&self.location)
            .trim()
    }

    pub fn satisfies_invariants(&self) -> bool {
        !self.price.is_sign_negative() && self.coordinates.is_valid()
    }
}

/// Marker projection of an event for the map view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub is_sponsored: bool,
    pub coordinates: Coordinates,
}

impl From<&Event> for MapMarker {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            category: event.category,
            is_sponsored: event.is_sponsored,
            coordinates: event.coordinates,
        }
    }
}
