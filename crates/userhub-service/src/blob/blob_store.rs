//! Blob store interface.

use async_trait::async_trait;
use shaku::Interface;
use userhub_core::HubResult;

/// Metadata for a stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobStat {
    /// Object size in bytes.
    pub size: u64,
    /// Object content type.
    pub content_type: String,
}

/// Opaque object storage, keyed by a path string.
///
/// Profile images live under `{user_id}/{filename}` in a single configured
/// bucket.
#[async_trait]
pub trait BlobStoreInterface: Interface + Send + Sync {
    /// Check if the blob store is enabled.
    fn is_enabled(&self) -> bool;

    /// Uploads an object.
    async fn put(&self, path: &str, content_type: &str, data: Vec<u8>) -> HubResult<()>;

    /// Downloads an object.
    async fn get(&self, path: &str) -> HubResult<Vec<u8>>;

    /// Fetches object metadata without the body.
    async fn stat(&self, path: &str) -> HubResult<BlobStat>;
}
