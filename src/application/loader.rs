//! Descriptor Loader
//!
//! Turns a resolved path into a `Readme`:
//! 1. Check the descriptor exists under the component root
//! 2. Decode it
//! 3. Assemble the output record
//!
//! The loader never writes. A missing descriptor is reported together with
//! the scratch path where a starter template belongs; putting it there is
//! up to the caller.

use std::path::{Path, PathBuf};

use crate::domain::entities::Readme;
use crate::domain::ports::DescriptorRepository;
use crate::domain::value_objects::{ComponentName, ResolvedPath};
use crate::error::{ReadmeError, ReadmeResult};

/// Default location for starter templates
pub const DEFAULT_SCRATCH_DIR: &str = "/tmp";

/// Where to look for descriptors and where templates go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Directory containing `images/`
    pub root: PathBuf,
    /// Directory that receives starter templates
    pub scratch_dir: PathBuf,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            scratch_dir: PathBuf::from(DEFAULT_SCRATCH_DIR),
        }
    }
}

impl LoadOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize_root(root.into()),
            ..Self::default()
        }
    }

    pub fn with_scratch_dir(mut self, scratch_dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = scratch_dir.into();
        self
    }
}

/// `.` adds nothing to joined paths and only clutters messages
fn normalize_root(root: PathBuf) -> PathBuf {
    if root == Path::new(".") {
        PathBuf::new()
    } else {
        root
    }
}

pub struct ReadmeLoader<DR: DescriptorRepository> {
    repo: DR,
    options: LoadOptions,
}

impl<DR: DescriptorRepository> ReadmeLoader<DR> {
    pub fn new(repo: DR, options: LoadOptions) -> Self {
        Self { repo, options }
    }

    /// Descriptor location on disk
    pub fn locate(&self, path: &ResolvedPath) -> PathBuf {
        self.options.root.join(path.relative_path())
    }

    /// Starter template location; depends only on the filename
    pub fn scratch_path(&self, path: &ResolvedPath) -> PathBuf {
        self.options.scratch_dir.join(&path.filename)
    }

    pub fn load(&self, name: &ComponentName, path: &ResolvedPath) -> ReadmeResult<Readme> {
        let full_path = self.locate(path);

        if !self.repo.exists(&full_path) {
            tracing::debug!(path = %full_path.display(), "descriptor missing");
            return Err(ReadmeError::Missing {
                path: full_path,
                scratch_path: self.scratch_path(path),
            });
        }

        let descriptor = self.repo.load(&full_path)?;
        if descriptor.name != name.as_str() && descriptor.name != name.dashed() {
            tracing::debug!(
                requested = %name,
                declared = %descriptor.name,
                "descriptor name differs from requested name"
            );
        }

        Ok(Readme::assemble(name, descriptor, path))
    }
}
