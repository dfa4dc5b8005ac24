//! User entity.

use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity representing a stored user record.
///
/// The identifier is assigned at creation and never changes; uniqueness is
/// enforced by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's first name.
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    /// User's last name.
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,

    /// Unique username.
    #[validate(length(min = 1, max = 64))]
    pub username: String,

    /// Object path of the profile image, `{user_id}/{filename}`.
    pub profile_image_location: Option<String>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh ID and timestamps.
    #[must_use]
    pub fn new(first_name: String, last_name: String, username: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            first_name,
            last_name,
            username,
            profile_image_location: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the user's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Applies the allow-listed mutable fields from an update payload.
    ///
    /// Only `first_name` and `last_name` may change after creation. The
    /// identifier, username, creation timestamp, and attached posts are
    /// never overwritten; `updated_at` is refreshed here.
    pub fn apply_update(&mut self, first_name: String, last_name: String) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.updated_at = Utc::now();
    }

    /// Sets the profile image location.
    pub fn set_image_location(&mut self, location: impl Into<String>) {
        self.profile_image_location = Some(location.into());
        self.updated_at = Utc::now();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}
