//! Property tests for component name resolution.

use proptest::prelude::*;

use images_readme::{resolve, ComponentName};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution never panics on arbitrary input.
    #[test]
    fn property_resolve_never_panics(s in "(?s).{0,128}") {
        let path = resolve(&s);
        let _ = path.document_file_name();
        let _ = path.relative_path();
    }

    /// PROPERTY: A dot-free name maps to `images/<name>/README.hcl`.
    #[test]
    fn property_single_segment(base in segment()) {
        let path = resolve(&base);
        prop_assert_eq!(path.directory, format!("images/{}", base));
        prop_assert_eq!(path.filename, "README.hcl");
    }

    /// PROPERTY: The first segment picks the directory, the last picks the variant.
    #[test]
    fn property_first_and_last_segment(
        segments in proptest::collection::vec(segment(), 2..=5)
    ) {
        let name = segments.join(".");
        let path = resolve(&name);
        prop_assert_eq!(path.directory, format!("images/{}", segments[0]));
        prop_assert_eq!(
            path.filename,
            format!("README.{}.hcl", segments[segments.len() - 1])
        );
    }

    /// PROPERTY: The document name swaps `.hcl` for `.md` and keeps the rest.
    #[test]
    fn property_document_name(
        segments in proptest::collection::vec(segment(), 1..=3)
    ) {
        let path = resolve(&segments.join("."));
        let document = path.document_file_name();
        prop_assert_eq!(
            document.strip_suffix(".md"),
            path.filename.strip_suffix(".hcl")
        );
    }

    /// PROPERTY: Resolution is a pure function of the name.
    #[test]
    fn property_resolution_is_deterministic(s in "[a-z.-]{0,32}") {
        let name = ComponentName::new(s.clone());
        prop_assert_eq!(resolve(&s), images_readme::ResolvedPath::resolve(&name));
    }
}
