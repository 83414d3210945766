#![no_main]

// Harness: registry_lookup – totality of the three registry operations.
// Strategy: feed arbitrary strings through every lookup and require that
// each one returns (no panic, no error path) for any input whatsoever.

use arbitrary::Arbitrary;
use codesign_core::registry;
use codesign_core::types::{Entitlement, Feature};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug, Clone)]
struct Identifiers {
    feature: String,
    entitlement: String,
}

fuzz_target!(|ids: Identifiers| {
    let feature = Feature::new(ids.feature);
    let entitlement = Entitlement::new(ids.entitlement);

    // None / false are valid outcomes; the only failure mode is a panic.
    let _ = registry::entitlement_for_feature(&feature);
    let _ = registry::feature_for_entitlement(&entitlement);
    let _ = registry::free_developer_can_use_entitlement(&entitlement);

    // Default-deny: an entitlement the forward table never produces must
    // not be allow-listed unless it is one of the three known keys.
    if registry::free_developer_can_use_entitlement(&entitlement) {
        assert!(entitlement.as_str().starts_with("com.apple.developer.kernel."));
    }
});
