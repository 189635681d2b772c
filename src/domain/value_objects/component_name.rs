//! Component Name Value Object
//!
//! A dot-delimited logical identifier such as `cert-manager.acmesolver`.
//! The first segment is the base name (it picks the image directory); when
//! there are two or more segments, the last one is the variant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between name segments
pub const SEGMENT_SEPARATOR: char = '.';

/// Logical component name as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All dot-separated segments. Always yields at least one (possibly empty) segment.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEPARATOR)
    }

    /// Substring before the first dot
    pub fn base_name(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Last segment, present only when the name has two or more segments
    pub fn variant(&self) -> Option<&str> {
        let mut segments = self.segments();
        segments.next();
        segments.last()
    }

    /// Every segment joined with `-`, e.g. `cert-manager-acmesolver`.
    ///
    /// Used for synthetic image references and template names.
    pub fn dashed(&self) -> String {
        self.segments().collect::<Vec<_>>().join("-")
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComponentName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
