use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fingerprint;
use crate::naming;
use crate::storage::ObjectPutter;

/// Everything derived from one command-line path before it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub source_path: PathBuf,
    pub extension: String,
    pub base_name: String,
    pub fingerprint: String,
    pub object_name: String,
    pub content_type: String,
}

impl UploadRequest {
    pub fn prepare(path: &Path) -> Result<UploadRequest> {
        let split = naming::split_file_name(path);
        let content_type = naming::content_type_for(&split.extension);
        let fingerprint = fingerprint::base58_md5(path)?;
        let object_name = naming::object_name(&split.base_name, &fingerprint, &split.extension);
        Ok(UploadRequest {
            source_path: path.to_path_buf(),
            extension: split.extension,
            base_name: split.base_name,
            fingerprint,
            object_name,
            content_type,
        })
    }
}

pub struct Uploader<P> {
    config: Config,
    putter: P,
}

impl<P: ObjectPutter> Uploader<P> {
    pub fn new(config: Config, putter: P) -> Uploader<P> {
        Self { config, putter }
    }

    /// Uploads every path in order, writing one URL line to `out` per
    /// finished upload. Stops at the first failure; earlier uploads stay.
    pub async fn upload_files<W: Write>(
        &self,
        files: &[PathBuf],
        out: &mut W,
    ) -> Result<Vec<String>> {
        let mut uploaded = Vec::with_capacity(files.len());
        for file in files {
            let url = self.upload(file).await?;
            writeln!(out, "{}", url)
                .and_then(|_| out.flush())
                .map_err(Error::Output)?;
            uploaded.push(url);
        }
        Ok(uploaded)
    }

    async fn upload(&self, file: &Path) -> Result<String> {
        let request = UploadRequest::prepare(file)?;
        tracing::debug!(
            "{} -> {} ({})",
            file.display(),
            request.object_name,
            request.content_type
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("uploading {}", request.object_name));
        spinner.enable_steady_tick(Duration::from_millis(100));
        let result = self
            .putter
            .put_file(&request.source_path, &request.object_name, &request.content_type)
            .await;
        spinner.finish_and_clear();
        result?;

        tracing::info!("uploaded {} as {}", file.display(), request.object_name);
        Ok(naming::public_url(
            &self.config.end_point,
            &self.config.bucket,
            &request.object_name,
        ))
    }
}
