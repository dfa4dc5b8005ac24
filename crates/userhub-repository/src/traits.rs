//! Domain-facing repository interface.

use async_trait::async_trait;
use userhub_core::{HubResult, Interface, Post, User, UserId};

/// Single point of truth for reading and writing user data.
///
/// Implementations keep the durable store and the distributed cache from
/// observably diverging: writes hit the store first (durability precedes
/// cache visibility), cache mutations follow, and cache failures after a
/// durable write are absorbed rather than surfaced.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Fetches all users straight from the store (the cache is a point and
    /// random access optimization, not a scan accelerator).
    async fn find_all(&self) -> HubResult<Vec<User>>;

    /// Finds a user by ID. Absence is `None`, not an error.
    async fn find_by_id(&self, id: UserId) -> HubResult<Option<User>>;

    /// Checks whether a user exists, via the store's index.
    async fn exists(&self, id: UserId) -> HubResult<bool>;

    /// Counts all users, via the store.
    async fn count(&self) -> HubResult<u64>;

    /// Persists a new user (write-through: store, then ID roster).
    async fn save(&self, user: &User) -> HubResult<User>;

    /// Updates an existing user. The roster already tracks the ID, so the
    /// cache is left untouched.
    async fn update(&self, user: &User) -> HubResult<User>;

    /// Deletes a user (store, then roster). Returns `true` if a record was
    /// deleted.
    async fn delete(&self, id: UserId) -> HubResult<bool>;

    /// Picks a uniformly random user via the ID roster, or `None` when
    /// there are none.
    async fn pick_random(&self) -> HubResult<Option<User>>;

    /// Targeted single-field update of the profile image location, pushed
    /// straight to the store. Returns the affected-row count.
    async fn update_image_location(&self, location: &str, id: UserId) -> HubResult<u64>;

    /// Fetches the posts attached to a user.
    async fn find_posts(&self, id: UserId) -> HubResult<Vec<Post>>;

    /// Populates the ID roster from the store if it is empty. Idempotent;
    /// safe to run from concurrently starting instances.
    async fn warm_start(&self) -> HubResult<()>;
}
