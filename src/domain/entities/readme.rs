//! Readme Entity
//!
//! The record handed back to the caller: descriptor fields plus where the
//! rendered document belongs.

use serde::{Deserialize, Serialize};

use super::Descriptor;
use crate::domain::value_objects::{ComponentName, ResolvedPath};

/// Output record for one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readme {
    pub intro: String,
    pub body: String,
    pub description: String,
    pub image: String,
    pub name: String,
    pub image_path: String,
    pub file_name: String,
}

impl Readme {
    /// Combine a decoded descriptor with its resolved location.
    ///
    /// `name` always comes from the request; the descriptor's own `name`
    /// attribute is advisory.
    pub fn assemble(name: &ComponentName, descriptor: Descriptor, path: &ResolvedPath) -> Self {
        Self {
            intro: descriptor.intro,
            body: descriptor.body,
            description: descriptor.description,
            image: descriptor.image,
            name: name.as_str().to_string(),
            image_path: path.directory.clone(),
            file_name: path.document_file_name(),
        }
    }
}
