//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod descriptor_repository;
pub mod file_system;

pub use descriptor_repository::DescriptorRepository;
pub use file_system::{FileSystem, FsError, FsResult};
