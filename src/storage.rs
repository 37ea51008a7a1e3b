use std::path::Path;

use async_trait::async_trait;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use crate::config::Config;
use crate::error::{Error, Result};

static DEFAULT_REGION: &str = "us-east-1";

/// The single storage capability the uploader needs.
#[async_trait]
pub trait ObjectPutter {
    async fn put_file(&self, path: &Path, object_name: &str, content_type: &str) -> Result<()>;
}

/// S3-compatible backend over `rust-s3`, always using TLS and path-style
/// addressing.
pub struct S3Putter {
    bucket: Box<Bucket>,
}

impl S3Putter {
    pub fn new(config: &Config) -> Result<S3Putter> {
        let init_err = |message: String| Error::ClientInit {
            endpoint: config.end_point.clone(),
            message,
        };
        let credentials = Credentials::new(
            Some(config.access_user.as_str()),
            Some(config.access_password.as_str()),
            None,
            None,
            None,
        )
        .map_err(|e| init_err(e.to_string()))?;
        let region = Region::Custom {
            region: DEFAULT_REGION.to_string(),
            endpoint: format!("https://{}", config.end_point),
        };
        let bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| init_err(e.to_string()))?
            .with_path_style();
        Ok(S3Putter { bucket })
    }
}

#[async_trait]
impl ObjectPutter for S3Putter {
    async fn put_file(&self, path: &Path, object_name: &str, content_type: &str) -> Result<()> {
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|source| Error::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        let response = self
            .bucket
            .put_object_stream_with_content_type(&mut file, object_name, content_type)
            .await
            .map_err(|e| Error::Upload {
                object: object_name.to_string(),
                message: e.to_string(),
            })?;
        match response.status_code() {
            200..=299 => Ok(()),
            code => Err(Error::Upload {
                object: object_name.to_string(),
                message: format!("server answered with status {}", code),
            }),
        }
    }
}
