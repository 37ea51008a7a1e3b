use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot create storage client for {endpoint}: {message}")]
    ClientInit { endpoint: String, message: String },

    #[error("cannot open file {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot hash file {path}: {source}")]
    HashRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to upload {object}: {message}")]
    Upload { object: String, message: String },

    #[error("cannot write url: {0}")]
    Output(#[source] std::io::Error),
}
