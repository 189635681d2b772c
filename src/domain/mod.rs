//! Domain Layer
//!
//! Component names, resolved paths, descriptors and the starter template.
//!
//! ## Structure
//!
//! - `value_objects/` - `ComponentName`, `ResolvedPath`
//! - `entities/` - `Descriptor`, `Readme`
//! - `services/` - template synthesis
//! - `ports/` - interfaces implemented by the infrastructure layer
//!
//! Nothing in here touches the file system directly; all I/O goes through
//! the traits in `ports`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
