//! DescriptorRepository port - abstraction for loading descriptors
//!
//! The application layer asks for a descriptor by path; how it is read and
//! which syntax it is decoded from is an infrastructure concern.

use std::path::Path;

use crate::domain::entities::Descriptor;
use crate::error::ReadmeResult;

/// Abstract repository for descriptor files
pub trait DescriptorRepository {
    /// Whether a descriptor file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read and decode the descriptor at `path`.
    ///
    /// Read and decode failures both surface as `ReadmeError::Malformed`.
    fn load(&self, path: &Path) -> ReadmeResult<Descriptor>;
}
