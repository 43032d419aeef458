//! `MediaStorage` over an S3-compatible bucket.

use super::MediaStorage;
use crate::config::StorageSettings;
use crate::error::AppError;
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

#[derive(Clone, Debug)]
pub struct S3MediaStorage {
    inner: aws_sdk_s3::Client,
    bucket: String,
    public_base: String,
}

impl S3MediaStorage {
    pub fn new(inner: aws_sdk_s3::Client, bucket: &str, public_base: &str) -> Self {
        S3MediaStorage {
            inner,
            bucket: bucket.to_string(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    /// Build a path-style client for the storage service's S3 endpoint.
    pub async fn connect(settings: &StorageSettings) -> Self {
        let credentials = aws_sdk_s3::config::Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "modia-settings",
        );
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(settings.region.clone()))
            .endpoint_url(settings.endpoint.clone())
            .credentials_provider(credentials)
            .load()
            .await;
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();
        S3MediaStorage::new(
            aws_sdk_s3::Client::from_conf(s3_config),
            &settings.bucket,
            &settings.public_url,
        )
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl MediaStorage for S3MediaStorage {
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), AppError> {
        self.inner
            .put_object()
            .bucket(self.bucket.clone())
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| AppError::Storage(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_base, self.bucket, urlencoding::encode(key))
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, keys: &[String]) -> Result<(), AppError> {
        for key in keys {
            self.inner
                .delete_object()
                .bucket(self.bucket.clone())
                .key(key)
                .send()
                .await
                .map_err(|e| AppError::Storage(DisplayErrorContext(&e).to_string()))?;
        }
        Ok(())
    }
}
