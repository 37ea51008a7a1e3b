use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::storage::{ObjectPutter, S3Putter};
use crate::uploader::Uploader;

/// Loads the config from `config_dir`, builds a putter from it and uploads
/// `files` in order. Nothing is uploaded unless the config loads.
pub async fn run_with<P, F, W>(
    config_dir: &Path,
    files: &[PathBuf],
    make_putter: F,
    out: &mut W,
) -> Result<Vec<String>>
where
    P: ObjectPutter,
    F: FnOnce(&Config) -> Result<P>,
    W: Write,
{
    let config = Config::load_from_dir(config_dir)?;
    let putter = make_putter(&config)?;
    Uploader::new(config, putter).upload_files(files, out).await
}

/// Production entry: config beside the executable, S3 backend.
pub async fn run<W: Write>(files: &[PathBuf], out: &mut W) -> Result<Vec<String>> {
    let dir = Config::default_dir()?;
    run_with(&dir, files, S3Putter::new, out).await
}
