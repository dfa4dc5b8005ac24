//! User-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use userhub_core::{Post, PostId, User, UserId};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 64, message = "Username must be 1-64 characters"))]
    pub username: String,
}

/// Request to update an existing user.
///
/// Carries only the allow-listed mutable fields plus the target ID; the
/// username and timestamps cannot be changed through this payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    pub id: UserId,

    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,
}

/// Post response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            body: post.body,
            created_at: post.created_at,
        }
    }
}

/// User response DTO.
///
/// Doubles as the sentinel result: absence and caught failures are reported
/// through `message`/`error` on an otherwise empty DTO, not through the
/// error channel. Callers must check for the sentinel explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostDto>>,

    /// Sentinel message for absence and confirmations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Error detail for failures caught at the service boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UserDto {
    /// Creates a sentinel DTO carrying only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates the "no user exists" sentinel for an ID.
    #[must_use]
    pub fn not_found(id: UserId) -> Self {
        Self::with_message(format!("No user exists for id {}", id))
    }

    /// Creates a sentinel DTO for a failure caught at the service boundary.
    #[must_use]
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Returns whether this DTO is a sentinel rather than a user record.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.id.is_none()
    }

    /// Attaches a post collection.
    #[must_use]
    pub fn with_posts(mut self, posts: Vec<PostDto>) -> Self {
        self.posts = Some(posts);
        self
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            first_name: Some(user.first_name),
            last_name: Some(user.last_name),
            username: Some(user.username),
            profile_image_location: user.profile_image_location,
            created_at: Some(user.created_at),
            updated_at: Some(user.updated_at),
            posts: None,
            message: None,
            error: None,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        user.clone().into()
    }
}
