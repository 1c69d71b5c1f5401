use std::sync::Arc;

use crate::clock::Clock;
use crate::i18n::{Locale, Translations};
use crate::repository::{EventCatalog, FeedStore, UserDirectory};

/// Everything a handler may touch, injected once at startup.
#[derive(Clone)]
pub struct AppState {
    events: Arc<dyn EventCatalog>,
    feed: Arc<dyn FeedStore>,
    users: Arc<dyn UserDirectory>,
    translations: Arc<Translations>,
    clock: Arc<dyn Clock>,
    default_locale: Locale,
}

impl AppState {
    pub fn new<S>(
        store: Arc<S>,
        translations: Translations,
        clock: Arc<dyn Clock>,
        default_locale: Locale,
    ) -> Self
    where
        S: EventCatalog + FeedStore + UserDirectory + 'static,
    {
        Self {
            events: store.clone(),
            feed: store.clone(),
            users: store,
            translations: Arc::new(translations),
            clock,
            default_locale,
        }
    }

    pub fn events(&self) -> &dyn EventCatalog {
        self.events.as_ref()
    }

    pub fn feed(&self) -> &dyn FeedStore {
        self.feed.as_ref()
    }

    pub fn users(&self) -> &dyn UserDirectory {
        self.users.as_ref()
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }
}
