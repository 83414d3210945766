#![no_main]

// Harness: roundtrip_mapping – forward/inverse consistency of the
// feature <-> entitlement table. For any input string, whenever one
// direction resolves, the other direction must return the original value.

use codesign_core::registry;
use codesign_core::types::{Entitlement, Feature};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|id: String| {
    let feature = Feature::new(id.clone());
    if let Some(entitlement) = registry::entitlement_for_feature(&feature) {
        assert_eq!(registry::feature_for_entitlement(&entitlement), Some(feature));
    }

    let entitlement = Entitlement::new(id);
    if let Some(feature) = registry::feature_for_entitlement(&entitlement) {
        assert_eq!(
            registry::entitlement_for_feature(&feature),
            Some(entitlement)
        );
    }
});
