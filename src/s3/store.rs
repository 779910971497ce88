use tokio::fs::File;
use tracing::info;

use super::error::Result;

/// Destination for uploaded objects
///
/// Implementations receive an already-opened local file and must either
/// store all of its bytes under `key` or return [`super::Error::Upload`].
#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Human readable location, e.g. `s3://bucket`
    fn location(&self) -> String;

    async fn put_object(&self, key: &str, body: File, content_length: u64) -> Result<()>;
}

/// Store that only logs what would be uploaded
#[derive(Debug, Clone, Default)]
pub struct DryRunStore {
    bucket: String,
}

impl DryRunStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
        }
    }
}

impl ObjectStore for DryRunStore {
    fn location(&self) -> String {
        format!("s3://{} (dry run)", self.bucket)
    }

    async fn put_object(&self, key: &str, _body: File, content_length: u64) -> Result<()> {
        info!(
            "DRY RUN: would upload {} bytes to s3://{}/{}",
            content_length, self.bucket, key
        );
        Ok(())
    }
}
