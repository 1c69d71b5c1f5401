pub mod event;
pub mod filter;
pub mod plan;
pub mod post;
pub mod user;

pub use event::{Category, Coordinates, Event, MapMarker};
pub use filter::{DateBucket, FilterCriteria, FilterParams};
pub use plan::{Plan, PlanTier};
pub use post::{EventPreview, FeedEntry, Post};
pub use user::{NewUser, ProfileUpdate, User, UserSummary};
