//! Shared-list cache interface.

use async_trait::async_trait;
use shaku::Interface;
use userhub_core::HubResult;

/// A cluster-shared ordered-sequence handle, addressed by list name.
///
/// This is the cache contract the repository facade builds on: the user ID
/// roster and the name corpus are both lists obtained by name, visible to
/// every service instance, surviving instance restarts but not a full
/// cluster restart. Entries have no TTL.
#[async_trait]
pub trait SharedListInterface: Interface + Send + Sync {
    /// Check if caching is enabled.
    ///
    /// When disabled, mutators are no-ops and readers return empty views.
    fn is_enabled(&self) -> bool;

    /// Appends a value to the list.
    async fn push(&self, list: &str, value: &str) -> HubResult<()>;

    /// Removes the first occurrence of `value` from the list.
    ///
    /// Returns `true` if an element was removed.
    async fn remove(&self, list: &str, value: &str) -> HubResult<bool>;

    /// Positional read. Returns `None` when the index is out of range.
    async fn get(&self, list: &str, index: u64) -> HubResult<Option<String>>;

    /// Returns the list length (0 for a missing list).
    async fn len(&self, list: &str) -> HubResult<u64>;

    /// Returns whether the list is empty or missing.
    async fn is_empty(&self, list: &str) -> HubResult<bool> {
        Ok(self.len(list).await? == 0)
    }

    /// Atomically populates the list with `values` only if it does not
    /// exist yet.
    ///
    /// Returns `true` if this caller created the list. This is the
    /// warm-start primitive: concurrent process startups cannot
    /// double-populate through it.
    async fn fill_if_absent(&self, list: &str, values: &[String]) -> HubResult<bool>;
}
