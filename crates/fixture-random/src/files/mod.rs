//! Random file and directory hierarchies.
//!
//! [`create`] builds one tree under each root path. Every directory gets
//! `files` files; directories above the last level also get `dirs`
//! subdirectories, each filled the same way. With `depth` D, `dirs` F and
//! `files` C (no randomization), each root holds `C * (1 + F + ... + F^(D-1))`
//! files in `F + ... + F^(D-1)` subdirectories.
//!
//! When a listing writer is supplied, every created path is written to it on
//! its own line in creation order, directories with a trailing `/`. Files
//! are listed before the subdirectories of the same directory.

mod builder;
mod config;
mod name;
mod tree;

pub use builder::HierarchyBuilder;
pub use config::{HierarchyConfig, MAX_DEPTH, MAX_ENTRIES};
pub use name::{
    random_name, NameGen, NameSize, DEFAULT_NAME_MAX_SIZE, DEFAULT_NAME_MIN_SIZE,
    MINIMUM_NAME_SIZE,
};

use crate::error::FixtureError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tree::TreeWriter;

/// Create random files and directories under each root path.
///
/// The configuration is validated before anything is written. Creation stops
/// at the first error; anything already created is left in place.
pub fn create<I>(config: &HierarchyConfig, roots: I) -> Result<(), FixtureError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    write_trees(config, roots, None::<io::Sink>)
}

/// Like [`create`], also writing each created path to `out`.
pub fn create_with_output<I, W>(
    config: &HierarchyConfig,
    roots: I,
    out: &mut W,
) -> Result<(), FixtureError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    W: Write + ?Sized,
{
    write_trees(config, roots, Some(out))
}

fn write_trees<I, W>(
    config: &HierarchyConfig,
    roots: I,
    out: Option<W>,
) -> Result<(), FixtureError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
    W: Write,
{
    let roots: Vec<PathBuf> = roots
        .into_iter()
        .map(|root| root.as_ref().to_path_buf())
        .collect();
    if roots.is_empty() {
        return Err(FixtureError::NoRoots);
    }
    config.validate()?;
    let names = NameGen::new(config.name_min_size, config.name_max_size)?;

    let mut writer = TreeWriter::new(config, names, out);
    for root in &roots {
        debug!(root = %root.display(), depth = config.depth, "creating random file tree");
        writer.write_root(root)?;
    }
    Ok(())
}
