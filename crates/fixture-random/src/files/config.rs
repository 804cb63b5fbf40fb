//! Configuration for random file hierarchies.

use super::builder::HierarchyBuilder;
use super::name::{
    name_capacity, validate_name_size, DEFAULT_NAME_MAX_SIZE, DEFAULT_NAME_MIN_SIZE,
};
use crate::error::{ConfigError, FixtureError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest accepted depth.
pub const MAX_DEPTH: i32 = 64;
/// Largest accepted number of subdirectories or files per directory.
pub const MAX_ENTRIES: i32 = 64;

/// Settings for creating random files and directories.
///
/// Counts are signed so that out-of-range values coming from a command line
/// or config file are reported by [`validate`](Self::validate) instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HierarchyConfig {
    /// Depth of the directory tree, including the root directory.
    pub depth: i32,

    /// Number of subdirectories in each directory above the last level.
    pub dirs: i32,

    /// Number of files in each directory.
    pub files: i32,

    /// Number of random bytes in each file.
    pub file_size: i64,

    /// Minimum length of a random file or directory name.
    pub name_min_size: usize,

    /// Maximum length of a random file or directory name.
    pub name_max_size: usize,

    /// Randomize the number of subdirectories from 1 to `dirs`.
    pub random_dirs: bool,

    /// Randomize the number of files from 1 to `files`.
    pub random_files: bool,

    /// Randomize each file size from 1 to `file_size`.
    pub random_size: bool,

    /// Seed for the random source; 0 seeds from the current time.
    pub seed: u64,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            dirs: 5,
            files: 10,
            file_size: 4096,
            name_min_size: DEFAULT_NAME_MIN_SIZE,
            name_max_size: DEFAULT_NAME_MAX_SIZE,
            random_dirs: false,
            random_files: false,
            random_size: true,
            seed: 0,
        }
    }
}

impl HierarchyConfig {
    /// Start a builder from the default configuration.
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::new()
    }

    /// Parse a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|source| FixtureError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Check every configuration rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange(self.depth));
        }
        if !(0..=MAX_ENTRIES).contains(&self.dirs) {
            return Err(ConfigError::DirsOutOfRange(self.dirs));
        }
        if !(0..=MAX_ENTRIES).contains(&self.files) {
            return Err(ConfigError::FilesOutOfRange(self.files));
        }
        if self.file_size < 0 {
            return Err(ConfigError::FileSizeOutOfRange(self.file_size));
        }
        if self.depth > 1 && self.dirs < 1 {
            return Err(ConfigError::DirsRequiredForDepth);
        }
        validate_name_size(self.name_min_size, self.name_max_size)?;

        let entries = self.entries_per_dir();
        let names = name_capacity(self.name_min_size, self.name_max_size);
        if u64::try_from(entries).map_or(false, |entries| entries > names) {
            return Err(ConfigError::NameSpaceTooSmall { names, entries });
        }
        Ok(())
    }

    /// Most entries any one directory can hold: its files plus, above the
    /// last level, its subdirectories.
    fn entries_per_dir(&self) -> i64 {
        let dirs = if self.depth > 1 { self.dirs } else { 0 };
        i64::from(self.files) + i64::from(dirs)
    }
}
