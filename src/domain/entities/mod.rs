//! Domain Entities
//!
//! - `Descriptor` - content of a descriptor file on disk
//! - `Readme` - descriptor plus its resolved location, as returned to callers

mod descriptor;
mod readme;

pub use descriptor::Descriptor;
pub use readme::Readme;
