//! Form records and their validation.
//!
//! Each form has one `validate` that reports every failing field at once,
//! in field order, as a list of [`FieldError`]s.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, TranslationKey, Translations};
use crate::models::{Category, Coordinates, Event, NewUser, ProfileUpdate, UserSummary};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_CURRENCY: &str = "SEK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub key: TranslationKey,
}

impl FieldError {
    fn new(field: &'static str, key: TranslationKey) -> Self {
        Self { field, key }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedFieldError {
    pub field: &'static str,
    pub key: TranslationKey,
    pub message: &'static str,
}

pub fn localize(
    errors: &[FieldError],
    translations: &Translations,
    locale: Locale,
) -> Vec<LocalizedFieldError> {
    errors
        .iter()
        .map(|e| LocalizedFieldError {
            field: e.field,
            key: e.key,
            message: translations.t(locale, e.key),
        })
        .collect()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Event create/edit form, values as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub price: String,
    pub image_url: String,
}

/// A validated [`EventForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub category: Category,
    pub location: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price: Decimal,
    pub image_url: String,
}

impl EventForm {
    pub fn validate(&self) -> Result<EventDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        if is_blank(&self.title) {
            errors.push(FieldError::new("title", TranslationKey::TitleRequired));
        }
        if is_blank(&self.description) {
            errors.push(FieldError::new(
                "description",
                TranslationKey::DescriptionRequired,
            ));
        }
        if self.genre.is_empty() {
            errors.push(FieldError::new("genre", TranslationKey::GenreRequired));
        }

        let category = if self.category.is_empty() {
            errors.push(FieldError::new("category", TranslationKey::CategoryRequired));
            None
        } else {
            let parsed = Category::from_str(&self.category).ok();
            if parsed.is_none() {
                errors.push(FieldError::new("category", TranslationKey::InvalidCategory));
            }
            parsed
        };

        if is_blank(&self.location) {
            errors.push(FieldError::new("location", TranslationKey::LocationRequired));
        }

        let date = if self.date.is_empty() {
            errors.push(FieldError::new("date", TranslationKey::DateRequired));
            None
        } else {
            let parsed = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok();
            if parsed.is_none() {
                errors.push(FieldError::new("date", TranslationKey::InvalidDate));
            }
            parsed
        };

        let time = if self.time.is_empty() {
            errors.push(FieldError::new("time", TranslationKey::TimeRequired));
            None
        } else {
            let parsed = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok();
            if parsed.is_none() {
                errors.push(FieldError::new("time", TranslationKey::InvalidTime));
            }
            parsed
        };

        let price = if self.price.is_empty() {
            errors.push(FieldError::new("price", TranslationKey::PriceRequired));
            None
        } else {
            let parsed = Decimal::from_str(self.price.trim())
                .ok()
                .filter(|p| !p.is_sign_negative());
            if parsed.is_none() {
                errors.push(FieldError::new("price", TranslationKey::InvalidPrice));
            }
            parsed
        };

        match (category, date, time, price) {
            (Some(category), Some(date), Some(time), Some(price)) if errors.is_empty() => {
                Ok(EventDraft {
                    title: self.title.trim().to_string(),
                    description: self.description.trim().to_string(),
                    genre: self.genre.clone(),
                    category,
                    location: self.location.trim().to_string(),
                    date,
                    time,
                    price,
                    image_url: self.image_url.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl EventDraft {
    /// Builds a fresh catalog entry owned by `organizer`.
    pub fn into_event(self, id: String, organizer: UserSummary) -> Event {
        let (date, category) = (self.date, self.category);
        self.apply_to(Event {
            id,
            title: String::new(),
            description: String::new(),
            date,
            time: String::new(),
            location: String::new(),
            category,
            genre: String::new(),
            price: Decimal::ZERO,
            currency: DEFAULT_CURRENCY.to_string(),
            image_url: String::new(),
            organizer,
            attendees: 0,
            is_sponsored: false,
            coordinates: Coordinates::STOCKHOLM,
        })
    }

    /// Overwrites the form-editable fields of `event`, keeping its id,
    /// organizer, attendance and position.
    pub fn apply_to(self, mut event: Event) -> Event {
        event.title = self.title;
        event.description = self.description;
        event.genre = self.genre;
        event.category = self.category;
        event.location = self.location;
        event.date = self.date;
        event.time = self.time.format(TIME_FORMAT).to_string();
        event.price = self.price;
        if !self.image_url.is_empty() {
            event.image_url = self.image_url;
        }
        event
    }
}

impl From<&Event> for EventForm {
    fn from(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            genre: event.genre.clone(),
            category: event.category.to_string(),
            location: event.location.clone(),
            date: event.date.format(DATE_FORMAT).to_string(),
            time: event.time.clone(),
            price: event.price.to_string(),
            image_url: event.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, Vec<FieldError>> {
        if is_blank(&self.name) {
            return Err(vec![FieldError::new("name", TranslationKey::NameRequired)]);
        }

        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            bio: self.bio.trim().to_string(),
            avatar: self.avatar.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_organizer: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<NewUser, Vec<FieldError>> {
        let mut errors = Vec::new();

        if is_blank(&self.name) {
            errors.push(FieldError::new("name", TranslationKey::NameRequired));
        }
        if is_blank(&self.email) {
            errors.push(FieldError::new("email", TranslationKey::EmailRequired));
        } else if !self.email.contains('@') {
            errors.push(FieldError::new("email", TranslationKey::InvalidEmail));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", TranslationKey::PasswordRequired));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            is_organizer: self.is_organizer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> EventForm {
        EventForm {
            title: " Hamlet ".into(),
            description: "Shakespeare at Dramaten".into(),
            genre: "drama".into(),
            category: "theater".into(),
            location: "Dramaten, Stockholm".into(),
            date: "2024-12-15".into(),
            time: "19:00".into(),
            price: "350".into(),
            image_url: String::new(),
        }
    }

    fn keys(errors: &[FieldError]) -> Vec<TranslationKey> {
        errors.iter().map(|e| e.key).collect()
    }

    #[test]
    fn test_empty_event_form_reports_every_required_field_in_order() {
        let errors = EventForm::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["title", "description", "genre", "category", "location", "date", "time", "price"]
        );
        assert_eq!(errors[0].key, TranslationKey::TitleRequired);
        assert_eq!(errors[7].key, TranslationKey::PriceRequired);
    }

    #[test]
    fn test_whitespace_only_text_fields_are_missing() {
        let form = EventForm {
            title: "   ".into(),
            location: "\t".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            keys(&errors),
            vec![TranslationKey::TitleRequired, TranslationKey::LocationRequired]
        );
    }

    #[test]
    fn test_valid_event_form_yields_draft() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.title, "Hamlet");
        assert_eq!(draft.category, Category::Theater);
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
        assert_eq!(draft.price, Decimal::new(350, 0));
    }

    #[test]
    fn test_malformed_values_are_reported() {
        let form = EventForm {
            category: "circus".into(),
            date: "15/12/2024".into(),
            time: "7pm".into(),
            price: "-10".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            keys(&errors),
            vec![
                TranslationKey::InvalidCategory,
                TranslationKey::InvalidDate,
                TranslationKey::InvalidTime,
                TranslationKey::InvalidPrice,
            ]
        );
    }

    #[test]
    fn test_free_events_are_allowed() {
        let form = EventForm {
            price: "0".into(),
            ..valid_form()
        };
        assert!(form.validate().unwrap().price.is_zero());
    }

    #[test]
    fn test_draft_becomes_event_with_defaults() {
        let organizer = UserSummary {
            id: "1".into(),
            name: "John Doe".into(),
            avatar: String::new(),
        };
        let event = valid_form()
            .validate()
            .unwrap()
            .into_event("new-1".into(), organizer.clone());

        assert_eq!(event.id, "new-1");
        assert_eq!(event.time, "19:00");
        assert_eq!(event.currency, DEFAULT_CURRENCY);
        assert_eq!(event.organizer, organizer);
        assert_eq!(event.attendees, 0);
        assert!(event.satisfies_invariants());
    }

    #[test]
    fn test_form_round_trips_through_existing_event() {
        let organizer = UserSummary {
            id: "1".into(),
            name: "John Doe".into(),
            avatar: String::new(),
        };
        let event = valid_form()
            .validate()
            .unwrap()
            .into_event("e".into(), organizer);

        let form = EventForm::from(&event);
        assert_eq!(form.date, "2024-12-15");
        assert_eq!(form.category, "theater");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_profile_form_requires_name() {
        let errors = ProfileForm::default().validate().unwrap_err();
        assert_eq!(keys(&errors), vec![TranslationKey::NameRequired]);

        let update = ProfileForm {
            name: "Anna".into(),
            bio: " Opera lover ".into(),
            avatar: String::new(),
        }
        .validate()
        .unwrap();
        assert_eq!(update.bio, "Opera lover");
    }

    #[test]
    fn test_sign_up_form_checks_email() {
        let form = SignUpForm {
            name: "Anna".into(),
            email: "anna.example.com".into(),
            password: "secret".into(),
            is_organizer: false,
        };
        assert_eq!(
            keys(&form.validate().unwrap_err()),
            vec![TranslationKey::InvalidEmail]
        );

        let user = SignUpForm {
            email: "Anna@Example.com".into(),
            ..form
        }
        .validate()
        .unwrap();
        assert_eq!(user.email, "anna@example.com");
    }

    #[test]
    fn test_localized_errors_carry_messages() {
        let translations = Translations::load().unwrap();
        let errors = vec![FieldError::new("title", TranslationKey::TitleRequired)];
        let localized = localize(&errors, &translations, Locale::Sv);
        assert_eq!(localized[0].message, "Titel krävs");
        assert_eq!(localized[0].field, "title");
    }
}
