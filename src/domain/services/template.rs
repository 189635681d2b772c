//! Starter template synthesis
//!
//! When a descriptor is missing, operators get a pre-filled file to copy into
//! place. Rendering is pure; writing it anywhere is the caller's business.

use crate::domain::entities::Descriptor;
use crate::domain::value_objects::ComponentName;
use crate::error::ReadmeResult;

/// Registry prefix for synthetic image references
pub const DEFAULT_REGISTRY: &str = "cgr.dev/chainguard";

/// `registry/dashed-name`, e.g. `cgr.dev/chainguard/cert-manager-acmesolver`
pub fn synthetic_image(name: &ComponentName, registry: &str) -> String {
    format!("{}/{}", registry.trim_end_matches('/'), name.dashed())
}

/// Descriptor used as the starting point for a new README
pub fn starter_descriptor(name: &ComponentName, registry: &str) -> Descriptor {
    Descriptor::starter(name.dashed(), synthetic_image(name, registry))
}

/// Render the starter template in descriptor syntax.
///
/// Output always decodes back into a [`Descriptor`].
pub fn synthesize_template(name: &ComponentName, registry: &str) -> ReadmeResult<String> {
    let content = hcl::to_string(&starter_descriptor(name, registry))?;
    Ok(content)
}
