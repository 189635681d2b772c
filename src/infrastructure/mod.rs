//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, plus an in-memory mock for tests)
//! - `repositories/` - Repository implementations (HCL descriptors)

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::HclDescriptorRepository;
