//! Blob store access for profile images.

pub mod blob_store;
pub mod s3_blob_store;

pub use blob_store::{BlobStat, BlobStoreInterface};
pub use s3_blob_store::{S3BlobStore, S3BlobStoreParameters};
