//! S3-compatible blob store implementation.
//!
//! Works against any S3-compatible endpoint; deployments use MinIO with
//! path-style addressing and static credentials.

use super::{BlobStat, BlobStoreInterface};
use async_trait::async_trait;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use shaku::Component;
use tracing::debug;
use userhub_config::BlobStoreConfig;
use userhub_core::{HubError, HubResult};

const SERVICE_NAME: &str = "blob-store";

/// S3-backed blob store service.
#[derive(Component)]
#[shaku(interface = BlobStoreInterface)]
pub struct S3BlobStore {
    /// S3 client.
    client: Option<Client>,
    /// Bucket holding the objects.
    bucket: String,
}

impl S3BlobStore {
    /// Creates a blob store client from configuration.
    #[must_use]
    pub fn from_config(config: &BlobStoreConfig) -> Self {
        Self {
            client: Self::build_client(config),
            bucket: config.bucket.clone(),
        }
    }

    /// Builds the S3 client for the configured endpoint, `None` when the
    /// blob store is disabled.
    #[must_use]
    pub fn build_client(config: &BlobStoreConfig) -> Option<Client> {
        if !config.enabled {
            return None;
        }

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "userhub-config",
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Some(Client::from_conf(s3_config))
    }

    /// Creates a no-op blob store (for when object storage is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            client: None,
            bucket: String::new(),
        }
    }

    fn client(&self) -> HubResult<&Client> {
        self.client
            .as_ref()
            .ok_or_else(|| HubError::external(SERVICE_NAME, "Blob store is disabled"))
    }
}

#[async_trait]
impl BlobStoreInterface for S3BlobStore {
    fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    async fn put(&self, path: &str, content_type: &str, data: Vec<u8>) -> HubResult<()> {
        let size = data.len();
        self.client()?
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| HubError::external(SERVICE_NAME, format!("put '{}': {}", path, e)))?;

        debug!("Uploaded blob '{}' ({} bytes)", path, size);
        Ok(())
    }

    async fn get(&self, path: &str) -> HubResult<Vec<u8>> {
        let output = self
            .client()?
            .get_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| HubError::external(SERVICE_NAME, format!("get '{}': {}", path, e)))?;

        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| HubError::external(SERVICE_NAME, format!("read '{}': {}", path, e)))?
            .into_bytes();

        debug!("Downloaded blob '{}' ({} bytes)", path, bytes.len());
        Ok(bytes.to_vec())
    }

    async fn stat(&self, path: &str) -> HubResult<BlobStat> {
        let output = self
            .client()?
            .head_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| HubError::external(SERVICE_NAME, format!("stat '{}': {}", path, e)))?;

        Ok(BlobStat {
            size: output.content_length().unwrap_or(0).max(0) as u64,
            content_type: output
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string(),
        })
    }
}

impl std::fmt::Debug for S3BlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3BlobStore")
            .field("enabled", &self.is_enabled())
            .field("bucket", &self.bucket)
            .finish()
    }
}
