//! Resolved Path Value Object
//!
//! Where a component's descriptor lives, relative to the component root.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::ComponentName;

/// Directory that holds one subdirectory per image
pub const IMAGES_DIR: &str = "images";
/// Extension of descriptor files on disk
pub const DESCRIPTOR_EXTENSION: &str = ".hcl";
/// Extension of the generated document
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Directory and filename derived from a [`ComponentName`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    pub directory: String,
    pub filename: String,
}

impl ResolvedPath {
    /// Map a component name to its descriptor location.
    ///
    /// `zot` resolves to `images/zot/README.hcl`, `cert-manager.acmesolver`
    /// to `images/cert-manager/README.acmesolver.hcl`. Only the last segment
    /// counts as the variant.
    pub fn resolve(name: &ComponentName) -> Self {
        let directory = format!("{}/{}", IMAGES_DIR, name.base_name());
        let filename = match name.variant() {
            Some(variant) => format!("README.{}{}", variant, DESCRIPTOR_EXTENSION),
            None => format!("README{}", DESCRIPTOR_EXTENSION),
        };

        Self {
            directory,
            filename,
        }
    }

    /// `directory/filename`, relative to the component root
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.filename)
    }

    /// Filename of the rendered document: `.hcl` becomes `.md`, anything else is kept.
    pub fn document_file_name(&self) -> String {
        match self.filename.strip_suffix(DESCRIPTOR_EXTENSION) {
            Some(stem) => format!("{}{}", stem, DOCUMENT_EXTENSION),
            None => self.filename.clone(),
        }
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.directory, self.filename)
    }
}

/// Convenience wrapper over [`ResolvedPath::resolve`]
pub fn resolve(name: &str) -> ResolvedPath {
    ResolvedPath::resolve(&ComponentName::new(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn resolve_single_segment() {
        let path = resolve("zot");
        assert_eq!(path.directory, "images/zot");
        assert_eq!(path.filename, "README.hcl");
    }

    #[test]
    fn resolve_two_segments() {
        let path = resolve("cert-manager.acmesolver");
        assert_eq!(path.directory, "images/cert-manager");
        assert_eq!(path.filename, "README.acmesolver.hcl");
    }

    #[test]
    fn resolve_three_segments_uses_last_as_variant() {
        let path = resolve("a.b.c");
        assert_eq!(path.directory, "images/a");
        assert_eq!(path.filename, "README.c.hcl");
    }

    #[test]
    fn resolve_empty_name() {
        let path = resolve("");
        assert_eq!(path.directory, "images/");
        assert_eq!(path.filename, "README.hcl");
    }

    #[test]
    fn relative_path_joins_directory_and_filename() {
        let path = resolve("cert-manager.acmesolver");
        assert_eq!(
            path.relative_path(),
            Path::new("images/cert-manager/README.acmesolver.hcl")
        );
        assert_eq!(
            path.to_string(),
            "images/cert-manager/README.acmesolver.hcl"
        );
    }

    #[test]
    fn document_file_name_rewrites_extension() {
        assert_eq!(resolve("zot").document_file_name(), "README.md");
        assert_eq!(
            resolve("cert-manager.acmesolver").document_file_name(),
            "README.acmesolver.md"
        );
    }

    #[test]
    fn document_file_name_keeps_other_extensions() {
        let path = ResolvedPath {
            directory: "images/zot".to_string(),
            filename: "README.txt".to_string(),
        };
        assert_eq!(path.document_file_name(), "README.txt");
    }
}
