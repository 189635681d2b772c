//! Read Readme Use Case
//!
//! Orchestrates one request:
//! 1. Resolve the component name to a descriptor path
//! 2. Load the descriptor
//! 3. On a miss, drop a starter template in the scratch directory
//!
//! The template write is advisory. If it fails, the failure is logged and the
//! caller still gets the original `Missing` error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::loader::ReadmeLoader;
use crate::domain::entities::Readme;
use crate::domain::ports::{DescriptorRepository, FileSystem};
use crate::domain::services::{synthesize_template, DEFAULT_REGISTRY};
use crate::domain::value_objects::{ComponentName, ResolvedPath};
use crate::error::{ReadmeError, ReadmeResult};

/// Input record from the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeRequest {
    pub name: String,
}

impl ReadmeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Parse a `{"name": "..."}` request document
    pub fn from_json(content: &str) -> ReadmeResult<Self> {
        serde_json::from_str(content).map_err(|e| ReadmeError::InvalidRequest {
            message: e.to_string(),
        })
    }

    pub fn component_name(&self) -> ComponentName {
        ComponentName::new(self.name.as_str())
    }
}

/// A starter template that was written for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchTemplate {
    pub path: PathBuf,
    pub content: String,
}

pub struct ReadReadmeUseCase<DR, FS>
where
    DR: DescriptorRepository,
    FS: FileSystem,
{
    loader: ReadmeLoader<DR>,
    fs: FS,
    registry: String,
}

impl<DR, FS> ReadReadmeUseCase<DR, FS>
where
    DR: DescriptorRepository,
    FS: FileSystem,
{
    pub fn new(loader: ReadmeLoader<DR>, fs: FS) -> Self {
        Self {
            loader,
            fs,
            registry: DEFAULT_REGISTRY.to_string(),
        }
    }

    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn execute(&self, request: &ReadmeRequest) -> ReadmeResult<Readme> {
        let name = request.component_name();
        let path = ResolvedPath::resolve(&name);
        tracing::debug!(name = %name, path = %path, "resolved descriptor path");

        match self.loader.load(&name, &path) {
            Ok(readme) => {
                tracing::trace!(name = %name, "read readme");
                Ok(readme)
            }
            Err(err) => {
                if let ReadmeError::Missing { scratch_path, .. } = &err {
                    self.emit_template(&name, scratch_path);
                }
                Err(err)
            }
        }
    }

    /// Best-effort write of the starter template. Never fails the request.
    pub fn emit_template(&self, name: &ComponentName, scratch_path: &Path) -> Option<ScratchTemplate> {
        let content = match synthesize_template(name, &self.registry) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(name = %name, error = %err, "failed to render starter template");
                return None;
            }
        };

        if let Err(err) = self.fs.write(scratch_path, &content) {
            tracing::warn!(
                path = %scratch_path.display(),
                error = %err,
                "failed to write starter template"
            );
            return None;
        }

        tracing::info!(path = %scratch_path.display(), "wrote starter template");
        Some(ScratchTemplate {
            path: scratch_path.to_path_buf(),
            content,
        })
    }
}
