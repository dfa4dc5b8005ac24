//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use async_trait::async_trait;
use userhub_core::{HubResult, Interface, UserId};

/// A profile image fetched from the blob store, ready to stream back.
#[derive(Debug, Clone)]
pub struct ProfileImage {
    /// Original file name (last segment of the stored location).
    pub filename: String,
    /// Content type reported by the blob store.
    pub content_type: String,
    /// Object size in bytes.
    pub size: u64,
    /// Image bytes.
    pub data: Vec<u8>,
}

/// Derives a username from a name pair: first initial + lowercase last name.
#[must_use]
pub fn derive_username(first_name: &str, last_name: &str) -> String {
    let initial = first_name
        .chars()
        .next()
        .map(|c| c.to_lowercase().to_string())
        .unwrap_or_default();
    format!("{}{}", initial, last_name.to_lowercase())
}

/// User service trait.
///
/// Lookups that find nothing return sentinel DTOs (or `None` for update),
/// never a raised error; only I/O failures travel the error channel.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Gets all users.
    async fn get_all_users(&self) -> HubResult<Vec<UserDto>>;

    /// Gets a user by ID, or a sentinel DTO when absent.
    async fn get_user(&self, id: UserId) -> HubResult<UserDto>;

    /// Gets a user with its nested post collection, or a sentinel DTO.
    async fn get_user_with_posts(&self, id: UserId) -> HubResult<UserDto>;

    /// Creates a new user.
    async fn add_user(&self, request: CreateUserRequest) -> HubResult<UserDto>;

    /// Creates a new user and uploads its profile image.
    ///
    /// The user record is durably saved before the upload; a blob-store
    /// failure is converted into a sentinel DTO carrying the error.
    async fn add_user_with_image(
        &self,
        request: CreateUserRequest,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> HubResult<UserDto>;

    /// Fetches a user's profile image from the blob store.
    async fn get_profile_image(&self, id: UserId) -> HubResult<ProfileImage>;

    /// Updates a user's allow-listed mutable fields. Returns `None` when the
    /// ID is unknown.
    async fn update_user(&self, request: UpdateUserRequest) -> HubResult<Option<UserDto>>;

    /// Deletes a user; the outcome is reported as a sentinel message.
    async fn delete_user(&self, id: UserId) -> HubResult<UserDto>;

    /// Picks a uniformly random existing user.
    async fn get_random_user(&self) -> HubResult<Option<UserDto>>;

    /// Generates and persists a synthetic user from the name corpus.
    async fn add_random_user(&self) -> HubResult<UserDto>;

    /// Loads the embedded name corpus into the shared cache if absent.
    async fn warm_start(&self) -> HubResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_username() {
        assert_eq!(derive_username("Ann", "Lee"), "alee");
        assert_eq!(derive_username("Grace", "Hopper"), "ghopper");
    }

    #[test]
    fn test_derive_username_preserves_unicode_lowercasing() {
        assert_eq!(derive_username("Édouard", "Lucas"), "élucas");
    }

    #[test]
    fn test_derive_username_empty_first_name() {
        assert_eq!(derive_username("", "Lee"), "lee");
    }
}
