//! Recursive construction of a random file tree.

use super::config::HierarchyConfig;
use super::name::NameGen;
use crate::error::FixtureError;
use crate::gen::{Gen, MAX_REJECTIONS_PER_ITEM};
use crate::generators::uniform;
use crate::rng::{self, Rand};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Writes trees for one validated configuration.
///
/// A single random source is threaded through every root and every level in
/// creation order, so a fixed seed reproduces the whole set of trees.
pub(crate) struct TreeWriter<'a, W> {
    config: &'a HierarchyConfig,
    names: NameGen,
    rng: Rand,
    out: Option<W>,
}

impl<'a, W: Write> TreeWriter<'a, W> {
    pub(crate) fn new(config: &'a HierarchyConfig, names: NameGen, out: Option<W>) -> Self {
        let rng = if config.seed == 0 {
            rng::from_time()
        } else {
            rng::seeded(config.seed)
        };
        Self {
            config,
            names,
            rng,
            out,
        }
    }

    /// Ensure `root` exists and fill it.
    pub(crate) fn write_root(&mut self, root: &Path) -> Result<(), FixtureError> {
        fs::create_dir_all(root).map_err(|source| FixtureError::io(root, source))?;
        self.write_tree(root, 1)
    }

    fn write_tree(&mut self, dir: &Path, depth: i32) -> Result<(), FixtureError> {
        let files = self.draw_count(self.config.files, self.config.random_files);
        for _ in 0..files {
            self.write_file(dir)?;
        }

        if depth == self.config.depth {
            return Ok(());
        }

        let dirs = self.draw_count(self.config.dirs, self.config.random_dirs);
        for _ in 0..dirs {
            self.write_subdir(dir, depth + 1)?;
        }
        Ok(())
    }

    fn write_subdir(&mut self, parent: &Path, depth: i32) -> Result<(), FixtureError> {
        let (dir, ()) = self.claim_name(parent, |path| fs::create_dir(path))?;
        self.report(&format!("{}/", dir.display()))?;
        self.write_tree(&dir, depth)
    }

    fn write_file(&mut self, dir: &Path) -> Result<(), FixtureError> {
        let (path, file) = self.claim_name(dir, |path| {
            OpenOptions::new().write(true).create_new(true).open(path)
        })?;

        let size = self.draw_size();
        let mut writer = BufWriter::new(file);
        rng::write_random(&mut self.rng, &mut writer, size)
            .and_then(|()| writer.flush())
            .map_err(|source| FixtureError::io(&path, source))?;

        self.report(&path.display().to_string())
    }

    /// Create a new entry in `dir` under a freshly drawn name, redrawing
    /// while the name is taken.
    fn claim_name<T, F>(&mut self, dir: &Path, mut create: F) -> Result<(PathBuf, T), FixtureError>
    where
        F: FnMut(&Path) -> io::Result<T>,
    {
        for _ in 0..MAX_REJECTIONS_PER_ITEM {
            let path = dir.join(self.names.generate(&mut self.rng));
            match create(&path) {
                Ok(created) => return Ok((path, created)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    trace!(path = %path.display(), "name taken, redrawing");
                }
                Err(source) => return Err(FixtureError::io(&path, source)),
            }
        }
        Err(FixtureError::NamesExhausted {
            dir: dir.to_path_buf(),
            attempts: MAX_REJECTIONS_PER_ITEM,
        })
    }

    fn draw_count(&mut self, configured: i32, randomize: bool) -> i32 {
        if randomize && configured > 1 {
            uniform(1..=configured).generate(&mut self.rng)
        } else {
            configured
        }
    }

    fn draw_size(&mut self) -> u64 {
        let configured = self.config.file_size;
        let size = if self.config.random_size && configured > 1 {
            uniform(1..=configured).generate(&mut self.rng)
        } else {
            configured
        };
        size.max(0) as u64
    }

    fn report(&mut self, line: &str) -> Result<(), FixtureError> {
        trace!(path = line, "created");
        match self.out.as_mut() {
            Some(out) => writeln!(out, "{}", line).map_err(FixtureError::Output),
            None => Ok(()),
        }
    }
}
