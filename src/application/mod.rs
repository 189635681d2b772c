//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReadmeLoader` - Locate, decode and assemble a descriptor
//! - `ReadReadmeUseCase` - Resolve, load, and emit a starter template on a miss

pub mod loader;
pub mod read;

pub use loader::{LoadOptions, ReadmeLoader, DEFAULT_SCRATCH_DIR};
pub use read::{ReadReadmeUseCase, ReadmeRequest, ScratchTemplate};
