//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod component_name;
mod resolved_path;

pub use component_name::{ComponentName, SEGMENT_SEPARATOR};
pub use resolved_path::{
    resolve, ResolvedPath, DESCRIPTOR_EXTENSION, DOCUMENT_EXTENSION, IMAGES_DIR,
};
