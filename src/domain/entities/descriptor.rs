//! Descriptor Entity
//!
//! The structured content of a `README*.hcl` file.

use serde::{Deserialize, Serialize};

/// Narrative and metadata fields for one component.
///
/// Every attribute is required and unknown attributes are rejected, so a
/// typo in a descriptor surfaces as a decode error instead of an empty field.
/// Field order is the order attributes are written in starter templates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Descriptor {
    pub name: String,
    pub image: String,
    pub intro: String,
    pub body: String,
    pub description: String,
}

impl Descriptor {
    /// Descriptor with `name` and `image` set and every narrative field empty
    pub fn starter(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Self::default()
        }
    }
}
