//! `UserDao` trait — low-level user data access abstraction.
//!
//! This is the DAO interface for the durable store. Implementations connect
//! directly to a single data source; [`CachedUserRepository`] layers the
//! cache-aside logic on top of one `UserDao`.
//!
//! [`CachedUserRepository`]: crate::CachedUserRepository

use async_trait::async_trait;
use userhub_core::{HubResult, Interface, Post, User, UserId};

/// Low-level user data access object.
///
/// Every method maps to a single store operation; the store remains the
/// authority for all of them.
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Fetches all users (full scan).
    async fn find_all(&self) -> HubResult<Vec<User>>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> HubResult<Option<User>>;

    /// Checks whether a user with the given ID exists.
    async fn exists_by_id(&self, id: UserId) -> HubResult<bool>;

    /// Counts all users.
    async fn count(&self) -> HubResult<u64>;

    /// Persists a new user.
    async fn insert(&self, user: &User) -> HubResult<User>;

    /// Updates an existing user.
    async fn update(&self, user: &User) -> HubResult<User>;

    /// Deletes a user by ID. Returns `true` if a row was deleted.
    async fn delete_by_id(&self, id: UserId) -> HubResult<bool>;

    /// Returns the identifiers of all users (secondary projection).
    async fn all_ids(&self) -> HubResult<Vec<UserId>>;

    /// Targeted single-field update of the profile image location.
    /// Returns the affected-row count.
    async fn update_image_location(&self, location: &str, id: UserId) -> HubResult<u64>;

    /// Fetches the posts attached to a user.
    async fn find_posts_by_user(&self, id: UserId) -> HubResult<Vec<Post>>;
}
