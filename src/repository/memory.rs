use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use super::{seed, EventCatalog, FeedStore, RepositoryError, UserDirectory};
use crate::models::{Event, NewUser, Post, ProfileUpdate, User};

const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop";

/// Process-lifetime store. The event catalog is immutable; likes, follows
/// and profile edits live here until restart.
pub struct InMemoryStore {
    events: Arc<[Event]>,
    posts: RwLock<Vec<Post>>,
    users: RwLock<Vec<User>>,
    follows: RwLock<HashSet<(String, String)>>,
}

impl InMemoryStore {
    pub fn new(events: Vec<Event>, posts: Vec<Post>, users: Vec<User>) -> Self {
        Self {
            events: events.into(),
            posts: RwLock::new(posts),
            users: RwLock::new(users),
            follows: RwLock::new(HashSet::new()),
        }
    }

    /// Mock catalog with event dates laid out relative to `anchor`.
    pub fn seeded(anchor: NaiveDate) -> Self {
        let store = Self::new(seed::events(anchor), seed::posts(anchor), seed::users());
        info!(
            events = store.events.len(),
            anchor = %anchor,
            "Seeded in-memory catalog"
        );
        store
    }

    fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, RepositoryError> {
        self.users.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, RepositoryError> {
        self.users.write().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn update_user(
        &self,
        user_id: &str,
        apply: impl FnOnce(&mut User),
    ) -> Result<User, RepositoryError> {
        let mut users = self.write_users()?;
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{user_id}'")))?;
        apply(user);
        Ok(user.clone())
    }

    fn adjust_follow_counts(
        &self,
        user_id: &str,
        organizer_id: &str,
        delta: i64,
    ) -> Result<User, RepositoryError> {
        let step = |count: u32| -> u32 {
            let next = i64::from(count) + delta;
            u32::try_from(next.max(0)).unwrap_or(u32::MAX)
        };

        let mut users = self.write_users()?;
        if let Some(organizer) = users.iter_mut().find(|u| u.id == organizer_id) {
            organizer.followers = step(organizer.followers);
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("user '{user_id}'")))?;
        user.following = step(user.following);
        Ok(user.clone())
    }
}

impl EventCatalog for InMemoryStore {
    fn events(&self) -> Arc<[Event]> {
        Arc::clone(&self.events)
    }

    fn find_event(&self, event_id: &str) -> Option<Event> {
        self.events.iter().find(|e| e.id == event_id).cloned()
    }
}

impl FeedStore for InMemoryStore {
    fn posts(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = self.posts.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(posts.clone())
    }

    fn like_post(&self, post_id: &str) -> Result<Post, RepositoryError> {
        let mut posts = self.posts.write().map_err(|_| RepositoryError::LockPoisoned)?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("post '{post_id}'")))?;

        post.likes = post.likes.saturating_add(1);
        debug!(post_id = %post_id, likes = post.likes, "Post liked");
        Ok(post.clone())
    }
}

impl UserDirectory for InMemoryStore {
    fn find_user(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.read_users()?.iter().find(|u| u.id == user_id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .read_users()?
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    fn register(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.write_users()?;
        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&new_user.email))
        {
            return Err(RepositoryError::Conflict(format!(
                "email '{}' is already registered",
                new_user.email
            )));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            avatar: DEFAULT_AVATAR.to_string(),
            bio: String::new(),
            is_organizer: new_user.is_organizer,
            has_paid_plan: false,
            followers: 0,
            following: 0,
            preferred_genres: Vec::new(),
        };
        users.push(user.clone());

        info!(user_id = %user.id, is_organizer = user.is_organizer, "User registered");
        Ok(user)
    }

    fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<User, RepositoryError> {
        self.update_user(user_id, |user| {
            user.name = update.name;
            user.bio = update.bio;
            if !update.avatar.is_empty() {
                user.avatar = update.avatar;
            }
        })
    }

    fn set_preferred_genres(
        &self,
        user_id: &str,
        genres: Vec<String>,
    ) -> Result<User, RepositoryError> {
        let mut seen = HashSet::new();
        let genres: Vec<String> = genres
            .into_iter()
            .filter(|g| !g.is_empty() && seen.insert(g.clone()))
            .collect();

        self.update_user(user_id, |user| user.preferred_genres = genres)
    }

    fn upgrade_plan(&self, user_id: &str) -> Result<User, RepositoryError> {
        let user = self.update_user(user_id, |user| user.has_paid_plan = true)?;
        info!(user_id = %user_id, "Plan upgraded to pro");
        Ok(user)
    }

    fn follow(&self, user_id: &str, organizer_id: &str) -> Result<User, RepositoryError> {
        if user_id == organizer_id {
            return Err(RepositoryError::Conflict("cannot follow yourself".into()));
        }

        let inserted = self
            .follows
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .insert((user_id.to_string(), organizer_id.to_string()));

        if !inserted {
            return self
                .find_user(user_id)?
                .ok_or_else(|| RepositoryError::NotFound(format!("user '{user_id}'")));
        }

        debug!(user_id = %user_id, organizer_id = %organizer_id, "Follow added");
        self.adjust_follow_counts(user_id, organizer_id, 1)
    }

    fn unfollow(&self, user_id: &str, organizer_id: &str) -> Result<User, RepositoryError> {
        let removed = self
            .follows
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?
            .remove(&(user_id.to_string(), organizer_id.to_string()));

        if !removed {
            return self
                .find_user(user_id)?
                .ok_or_else(|| RepositoryError::NotFound(format!("user '{user_id}'")));
        }

        debug!(user_id = %user_id, organizer_id = %organizer_id, "Follow removed");
        self.adjust_follow_counts(user_id, organizer_id, -1)
    }

    fn is_following(&self, user_id: &str, organizer_id: &str) -> Result<bool, RepositoryError> {
        let follows = self.follows.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(follows.contains(&(user_id.to_string(), organizer_id.to_string())))
    }
}
