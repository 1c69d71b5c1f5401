//! Storage seams. Handlers only see these traits; the in-memory store is
//! injected at startup.

pub mod memory;
pub mod seed;

use std::sync::Arc;

use thiserror::Error;

use crate::models::{Event, NewUser, Post, ProfileUpdate, User};

pub use memory::InMemoryStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Read-only event catalog, in display order.
pub trait EventCatalog: Send + Sync {
    fn events(&self) -> Arc<[Event]>;
    fn find_event(&self, event_id: &str) -> Option<Event>;
}

pub trait FeedStore: Send + Sync {
    fn posts(&self) -> Result<Vec<Post>, RepositoryError>;
    fn like_post(&self, post_id: &str) -> Result<Post, RepositoryError>;
}

pub trait UserDirectory: Send + Sync {
    fn find_user(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    fn register(&self, new_user: NewUser) -> Result<User, RepositoryError>;
    fn update_profile(&self, user_id: &str, update: ProfileUpdate)
        -> Result<User, RepositoryError>;
    fn set_preferred_genres(
        &self,
        user_id: &str,
        genres: Vec<String>,
    ) -> Result<User, RepositoryError>;
    fn upgrade_plan(&self, user_id: &str) -> Result<User, RepositoryError>;
    fn follow(&self, user_id: &str, organizer_id: &str) -> Result<User, RepositoryError>;
    fn unfollow(&self, user_id: &str, organizer_id: &str) -> Result<User, RepositoryError>;
    fn is_following(&self, user_id: &str, organizer_id: &str) -> Result<bool, RepositoryError>;
}
