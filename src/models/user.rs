use serde::{Deserialize, Serialize};

/// Compact reference to a person, embedded in events (organizer) and posts
/// (author).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub is_organizer: bool,
    pub has_paid_plan: bool,
    pub followers: u32,
    pub following: u32,
    pub preferred_genres: Vec<String>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub is_organizer: bool,
}

#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: String,
    pub bio: String,
    pub avatar: String,
}
