//! Fluent builder for HierarchyConfig.

use super::config::HierarchyConfig;

/// Fluent builder for HierarchyConfig.
///
/// # Example
/// ```
/// use fixture_random::files::HierarchyConfig;
///
/// let config = HierarchyConfig::builder()
///     .seed(42)            // Reproducible
///     .depth(3)            // Root plus two levels
///     .dirs(4)
///     .files(2)
///     .fixed_size(128)     // Every file is exactly 128 bytes
///     .build();
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    config: HierarchyConfig,
}

impl From<HierarchyConfig> for HierarchyBuilder {
    /// Start from an existing configuration, e.g. one loaded from YAML.
    fn from(config: HierarchyConfig) -> Self {
        Self { config }
    }
}

impl HierarchyBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed for reproducibility; 0 seeds from the clock.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the tree depth, counting the root.
    pub fn depth(mut self, depth: i32) -> Self {
        self.config.depth = depth;
        self
    }

    /// Set the number of subdirectories per directory.
    pub fn dirs(mut self, dirs: i32) -> Self {
        self.config.dirs = dirs;
        self
    }

    /// Set the number of files per directory.
    pub fn files(mut self, files: i32) -> Self {
        self.config.files = files;
        self
    }

    /// Set the file size in bytes.
    pub fn file_size(mut self, file_size: i64) -> Self {
        self.config.file_size = file_size;
        self
    }

    /// Set the file size and turn off size randomization.
    pub fn fixed_size(mut self, file_size: i64) -> Self {
        self.config.file_size = file_size;
        self.config.random_size = false;
        self
    }

    /// Set the bounds for random name lengths.
    pub fn name_size(mut self, min: usize, max: usize) -> Self {
        self.config.name_min_size = min;
        self.config.name_max_size = max;
        self
    }

    /// Set the shortest random name length.
    pub fn name_min_size(mut self, min: usize) -> Self {
        self.config.name_min_size = min;
        self
    }

    /// Set the longest random name length.
    pub fn name_max_size(mut self, max: usize) -> Self {
        self.config.name_max_size = max;
        self
    }

    /// Randomize the number of subdirectories from 1 to `dirs`.
    pub fn random_dirs(mut self, enabled: bool) -> Self {
        self.config.random_dirs = enabled;
        self
    }

    /// Randomize the number of files from 1 to `files`.
    pub fn random_files(mut self, enabled: bool) -> Self {
        self.config.random_files = enabled;
        self
    }

    /// Randomize each file size from 1 to `file_size`.
    pub fn random_size(mut self, enabled: bool) -> Self {
        self.config.random_size = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HierarchyConfig {
        self.config
    }
}
