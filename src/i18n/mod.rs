//! Typed display strings.
//!
//! Every [`TranslationKey`] must have an entry for every [`Locale`]; the
//! tables are checked once in [`Translations::load`] so lookups afterwards
//! cannot miss.

mod tables;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Sv,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TranslationKey {
    // Navigation
    Home,
    About,
    Events,
    Profile,
    SignIn,
    SignUp,
    SignOut,
    Feed,
    Pricing,
    Dashboard,

    // Landing
    HeroTitle,
    HeroSubtitle,
    SearchPlaceholder,
    SponsoredEvents,
    PopularEvents,
    Categories,

    // Categories
    AllCategories,
    Theater,
    Ballet,
    Opera,
    Arts,
    Music,
    Comedy,

    // Genres
    Drama,
    Klassisk,
    Fotografi,
    Skulptur,
    Samtidskonst,
    Jazz,
    Standup,
    Musikal,

    // Filters
    Filters,
    SearchResults,
    NoEventsFound,
    AllLocations,
    Genre,
    AllGenres,
    AllDates,
    Today,
    ThisWeek,
    ThisMonth,

    // Event details
    EventDetails,
    Date,
    Time,
    Location,
    Price,
    Free,
    Organizer,
    Attendees,
    SaveEvent,
    ShareEvent,
    Follow,
    Unfollow,

    // Profile and dashboard
    EditProfile,
    Followers,
    Following,
    CreateEvent,
    EditEvent,
    NoPaidPlan,
    UpgradeToPro,
    Pro,

    // Feed
    Like,
    Comment,

    // Form errors
    TitleRequired,
    DescriptionRequired,
    GenreRequired,
    CategoryRequired,
    LocationRequired,
    DateRequired,
    TimeRequired,
    PriceRequired,
    InvalidCategory,
    InvalidDate,
    InvalidTime,
    InvalidPrice,
    NameRequired,
    EmailRequired,
    InvalidEmail,
    PasswordRequired,
}

impl TranslationKey {
    /// Label key for one of the catalog's genre tags.
    pub fn for_genre(genre: &str) -> Option<Self> {
        match genre {
            "drama" => Some(Self::Drama),
            "klassisk" => Some(Self::Klassisk),
            "fotografi" => Some(Self::Fotografi),
            "skulptur" => Some(Self::Skulptur),
            "samtidskonst" => Some(Self::Samtidskonst),
            "jazz" => Some(Self::Jazz),
            "standup" => Some(Self::Standup),
            "musikal" => Some(Self::Musikal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("no '{locale}' translation for key '{key}'")]
    MissingTranslation { locale: Locale, key: TranslationKey },

    #[error("key '{key}' translated twice for locale '{locale}'")]
    DuplicateTranslation { locale: Locale, key: TranslationKey },

    #[error("no table provided for locale '{0}'")]
    MissingLocale(Locale),
}

type Table = [&'static str; TranslationKey::COUNT];

#[derive(Debug, Clone)]
pub struct Translations {
    en: Table,
    sv: Table,
}

impl Translations {
    pub fn load() -> Result<Self, I18nError> {
        Self::from_tables(&[(Locale::En, tables::EN), (Locale::Sv, tables::SV)])
    }

    pub fn from_tables(
        tables: &[(Locale, &[(TranslationKey, &'static str)])],
    ) -> Result<Self, I18nError> {
        let table_for = |locale: Locale| {
            tables
                .iter()
                .find(|(l, _)| *l == locale)
                .map(|(_, entries)| *entries)
                .ok_or(I18nError::MissingLocale(locale))
                .and_then(|entries| build_table(locale, entries))
        };

        let translations = Self {
            en: table_for(Locale::En)?,
            sv: table_for(Locale::Sv)?,
        };

        tracing::debug!(
            keys = TranslationKey::COUNT,
            locales = Locale::COUNT,
            "Translations loaded"
        );

        Ok(translations)
    }

    pub fn t(&self, locale: Locale, key: TranslationKey) -> &'static str {
        self.table(locale)[key as usize]
    }

    /// Whole table for a locale, keyed by the camelCase key name.
    pub fn entries(&self, locale: Locale) -> BTreeMap<&'static str, &'static str> {
        TranslationKey::iter()
            .map(|key| (key.as_str(), self.t(locale, key)))
            .collect()
    }

    fn table(&self, locale: Locale) -> &Table {
        match locale {
            Locale::En => &self.en,
            Locale::Sv => &self.sv,
        }
    }
}

fn build_table(
    locale: Locale,
    entries: &[(TranslationKey, &'static str)],
) -> Result<Table, I18nError> {
    let mut slots: [Option<&'static str>; TranslationKey::COUNT] = [None; TranslationKey::COUNT];

    for &(key, text) in entries {
        let slot = &mut slots[key as usize];
        if slot.is_some() {
            return Err(I18nError::DuplicateTranslation { locale, key });
        }
        *slot = Some(text);
    }

    if let Some(key) = TranslationKey::iter().find(|key| slots[*key as usize].is_none()) {
        return Err(I18nError::MissingTranslation { locale, key });
    }

    Ok(std::array::from_fn(|i| slots[i].unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::str::FromStr;

    #[test]
    fn test_builtin_tables_are_complete() {
        let translations = Translations::load().unwrap();
        for locale in Locale::iter() {
            for key in TranslationKey::iter() {
                assert!(
                    !translations.t(locale, key).is_empty(),
                    "{locale}/{key} is empty"
                );
            }
        }
    }

    #[test]
    fn test_lookup_per_locale() {
        let translations = Translations::load().unwrap();
        assert_eq!(translations.t(Locale::En, TranslationKey::Theater), "Theater");
        assert_eq!(translations.t(Locale::Sv, TranslationKey::Theater), "Teater");
        assert_eq!(
            translations.t(Locale::Sv, Category::Music.label_key()),
            "Musik"
        );
    }

    #[test]
    fn test_missing_key_is_reported() {
        let partial: &[(TranslationKey, &'static str)] = &[(TranslationKey::Home, "Home")];
        let err = Translations::from_tables(&[(Locale::En, partial), (Locale::Sv, tables::SV)])
            .unwrap_err();
        assert_eq!(
            err,
            I18nError::MissingTranslation {
                locale: Locale::En,
                key: TranslationKey::About,
            }
        );
    }

    #[test]
    fn test_duplicate_key_is_reported() {
        let mut entries = tables::SV.to_vec();
        entries.push((TranslationKey::Free, "Gratis"));
        let err = Translations::from_tables(&[(Locale::En, tables::EN), (Locale::Sv, entries.as_slice())])
            .unwrap_err();
        assert_eq!(
            err,
            I18nError::DuplicateTranslation {
                locale: Locale::Sv,
                key: TranslationKey::Free,
            }
        );
    }

    #[test]
    fn test_missing_locale_is_reported() {
        let err = Translations::from_tables(&[(Locale::En, tables::EN)]).unwrap_err();
        assert_eq!(err, I18nError::MissingLocale(Locale::Sv));
    }

    #[test]
    fn test_key_names_are_camel_case() {
        assert_eq!(TranslationKey::SearchPlaceholder.as_str(), "searchPlaceholder");
        assert_eq!(
            TranslationKey::from_str("titleRequired").ok(),
            Some(TranslationKey::TitleRequired)
        );
        assert_eq!(Locale::from_str("sv").ok(), Some(Locale::Sv));
        assert!(Locale::from_str("de").is_err());
    }

    #[test]
    fn test_entries_cover_every_key() {
        let translations = Translations::load().unwrap();
        let entries = translations.entries(Locale::En);
        assert_eq!(entries.len(), TranslationKey::COUNT);
        assert_eq!(entries.get("jazz"), Some(&"Jazz"));
    }

    #[test]
    fn test_genre_keys() {
        assert_eq!(
            TranslationKey::for_genre("standup"),
            Some(TranslationKey::Standup)
        );
        assert_eq!(TranslationKey::for_genre("polka"), None);
    }
}
