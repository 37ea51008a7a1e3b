pub mod app;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod logging;
pub mod naming;
pub mod storage;
pub mod uploader;

pub use config::Config;
pub use error::{Error, Result};
pub use storage::{ObjectPutter, S3Putter};
pub use uploader::{UploadRequest, Uploader};
