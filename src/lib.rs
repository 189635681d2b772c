//! images-readme - resolve and load per-image README descriptors
//!
//! Maps a component name such as `cert-manager.acmesolver` to
//! `images/cert-manager/README.acmesolver.hcl`, decodes the descriptor, and
//! returns its fields together with the location of the rendered document.
//! When the descriptor is missing, a starter template is written to a scratch
//! directory for an operator to copy into place.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LoadOptions, ReadReadmeUseCase, ReadmeLoader, ReadmeRequest};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Descriptor, Readme};
pub use domain::services::synthesize_template;
pub use domain::value_objects::{resolve, ComponentName, ResolvedPath};
pub use error::{ReadmeError, ReadmeResult};
