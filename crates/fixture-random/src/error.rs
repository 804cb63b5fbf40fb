//! Fixture error types.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while creating file fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// `create` was called without any root directory.
    #[error("must provide at least 1 root directory path")]
    NoRoots,

    /// The hierarchy configuration failed validation.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Creating or writing a file or directory failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Every name drawn for a new entry was already taken in its directory.
    #[error("no free name found in {} after {attempts} attempts", dir.display())]
    NamesExhausted { dir: PathBuf, attempts: usize },

    /// Writing the listing of created paths failed.
    #[error("failed to write listing: {0}")]
    Output(#[source] io::Error),

    /// Reading a configuration file failed.
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration file is not valid YAML for a hierarchy config.
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

impl FixtureError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Hierarchy configuration rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("depth out of range, must be between 1 and 64 (got {0})")]
    DepthOutOfRange(i32),

    #[error("dirs out of range, must be between 0 and 64 (got {0})")]
    DirsOutOfRange(i32),

    #[error("files out of range, must be between 0 and 64 (got {0})")]
    FilesOutOfRange(i32),

    #[error("file size out of range, must be 0 or greater (got {0})")]
    FileSizeOutOfRange(i64),

    #[error("dirs must be at least 1 for depth > 1")]
    DirsRequiredForDepth,

    #[error("minimum name size must be at least {minimum} (got {size})")]
    NameTooShort { minimum: usize, size: usize },

    #[error("maximum name size {max} is less than minimum name size {min}")]
    NameBoundsInverted { min: usize, max: usize },

    #[error("only {names} distinct names fit the name size bounds, but a directory needs {entries}")]
    NameSpaceTooSmall { names: u64, entries: i64 },
}

/// A generated value could not be encoded.
///
/// Generators only ever produce well-formed input for these encoders, so an
/// `EncodeError` means the generator itself is broken. Public generators
/// panic with it rather than hand it back.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("multihash: {0}")]
    Multihash(#[from] cid::multihash::Error),

    #[error("cid: {0}")]
    Cid(#[from] cid::Error),

    #[error("multiaddr '{addr}': {source}")]
    Multiaddr {
        addr: String,
        #[source]
        source: multiaddr::Error,
    },
}

/// Abort on an encoding defect.
pub(crate) fn defect<T>(err: EncodeError) -> T {
    panic!("fixture encoding failed: {err}")
}
