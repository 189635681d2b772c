//! Property tests for starter templates.

use proptest::prelude::*;

use images_readme::domain::services::synthetic_image;
use images_readme::{synthesize_template, ComponentName, Descriptor};

fn name() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z0-9][a-z0-9-]{0,12}").unwrap();
    proptest::collection::vec(segment, 1..=3).prop_map(|segments| segments.join("."))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every template decodes back into a descriptor.
    #[test]
    fn property_template_decodes(name in name()) {
        let component = ComponentName::new(name);
        let content = synthesize_template(&component, "cgr.dev/chainguard").unwrap();
        let descriptor: Descriptor = hcl::from_str(&content).unwrap();

        prop_assert_eq!(&descriptor.name, &component.dashed());
        prop_assert_eq!(
            descriptor.image,
            format!("cgr.dev/chainguard/{}", component.dashed())
        );
        prop_assert!(descriptor.intro.is_empty());
        prop_assert!(descriptor.body.is_empty());
        prop_assert!(descriptor.description.is_empty());
    }

    /// PROPERTY: Synthetic names never contain the segment separator.
    #[test]
    fn property_synthetic_image_is_dashed(name in name()) {
        let image = synthetic_image(&ComponentName::new(name), "registry.example");
        let suffix = image.strip_prefix("registry.example/").unwrap();
        prop_assert!(!suffix.contains('.'));
    }
}
