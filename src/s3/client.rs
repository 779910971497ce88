use aws_config::BehaviorVersion;
use aws_sdk_s3::{Client, error::DisplayErrorContext, primitives::ByteStream};
use tokio::fs::File;
use tracing::debug;

use super::error::{Error, Result};
use super::store::ObjectStore;
use crate::config::Config;

/// S3 backend bound to a single bucket
#[derive(Debug, Clone)]
pub struct S3Client {
    client: Client,
    pub config: Config,
}

impl S3Client {
    pub async fn new(config: Config) -> Self {
        let mut aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        if let Some(profile) = &config.profile {
            aws_config = aws_config.profile_name(profile);
        }

        let sdk_config = aws_config.load().await;
        let client = Client::new(&sdk_config);

        Self { client, config }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }
}

impl ObjectStore for S3Client {
    fn location(&self) -> String {
        format!("s3://{} ({})", self.bucket(), self.config.region)
    }

    async fn put_object(&self, key: &str, body: File, content_length: u64) -> Result<()> {
        let body = ByteStream::read_from()
            .file(body)
            .build()
            .await
            .map_err(|e| Error::upload(key, e))?;

        self.client
            .put_object()
            .bucket(self.bucket())
            .key(key)
            .body(body)
            .content_length(content_length as i64)
            .send()
            .await
            .map_err(|e| Error::upload(key, DisplayErrorContext(e).to_string()))?;

        debug!("Stored s3://{}/{}", self.bucket(), key);
        Ok(())
    }
}
