use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Base58 (bitcoin alphabet) encoding of the MD5 digest of the file's bytes.
///
/// The file is copied into the digest through a fixed-size buffer, so memory
/// use does not grow with file size.
pub fn base58_md5(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = md5_of_reader(file).map_err(|source| Error::HashRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bs58::encode(digest.0).into_string())
}

fn md5_of_reader<R: Read>(mut reader: R) -> io::Result<md5::Digest> {
    let mut context = md5::Context::new();
    io::copy(&mut reader, &mut context)?;
    Ok(context.compute())
}
