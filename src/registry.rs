//!
//! Capability registry for code-signing vocabularies.
//! Declares the known Entitlement, Capability, and Feature identifiers and
//! the pure lookups between them. All data here is immutable, process-wide
//! static state; every function is total and reentrant. Unrecognized
//! identifiers are ordinary input and degrade to `None` / `false`, never to
//! an error.

use crate::types::{Capability, Entitlement, Feature};

/// Known code-signing entitlement keys.
///
/// Each value is the exact key downstream provisioning and entitlements-plist
/// tooling expects, byte for byte. The set is open: entitlements outside this
/// list flow through every lookup unchanged.
pub mod entitlements {
    use super::Entitlement;

    pub const APPLICATION_IDENTIFIER: Entitlement =
        Entitlement::from_static("application-identifier");
    pub const KEYCHAIN_ACCESS_GROUPS: Entitlement =
        Entitlement::from_static("keychain-access-groups");
    pub const APP_GROUPS: Entitlement =
        Entitlement::from_static("com.apple.security.application-groups");
    pub const GET_TASK_ALLOW: Entitlement = Entitlement::from_static("get-task-allow");
    pub const INCREASED_MEMORY_LIMIT: Entitlement =
        Entitlement::from_static("com.apple.developer.kernel.increased-memory-limit");
    pub const INCREASED_DEBUGGING_MEMORY_LIMIT: Entitlement =
        Entitlement::from_static("com.apple.developer.kernel.increased-debugging-memory-limit");
    pub const EXTENDED_VIRTUAL_ADDRESSING: Entitlement =
        Entitlement::from_static("com.apple.developer.kernel.extended-virtual-addressing");
    pub const TEAM_IDENTIFIER: Entitlement =
        Entitlement::from_static("com.apple.developer.team-identifier");
    pub const INTER_APP_AUDIO: Entitlement = Entitlement::from_static("inter-app-audio");
    pub const GAME_CENTER: Entitlement =
        Entitlement::from_static("com.apple.developer.game-center");

    /// Every entitlement this crate knows about. String values are pairwise
    /// distinct within this slice.
    pub static KNOWN: [Entitlement; 10] = [
        APPLICATION_IDENTIFIER,
        KEYCHAIN_ACCESS_GROUPS,
        APP_GROUPS,
        GET_TASK_ALLOW,
        INCREASED_MEMORY_LIMIT,
        INCREASED_DEBUGGING_MEMORY_LIMIT,
        EXTENDED_VIRTUAL_ADDRESSING,
        TEAM_IDENTIFIER,
        INTER_APP_AUDIO,
        GAME_CENTER,
    ];
}

/// Known coarse capability identifiers.
///
/// A parallel vocabulary to `entitlements`; no mapping between the two is
/// declared here even where the names overlap conceptually.
pub mod capabilities {
    use super::Capability;

    pub const INCREASED_MEMORY_LIMIT: Capability =
        Capability::from_static("INCREASED_MEMORY_LIMIT");
    pub const INCREASED_DEBUGGING_MEMORY_LIMIT: Capability =
        Capability::from_static("INCREASED_MEMORY_LIMIT_DEBUGGING");
    pub const EXTENDED_VIRTUAL_ADDRESSING: Capability =
        Capability::from_static("EXTENDED_VIRTUAL_ADDRESSING");

    /// Every capability this crate knows about.
    pub static KNOWN: [Capability; 3] = [
        INCREASED_MEMORY_LIMIT,
        INCREASED_DEBUGGING_MEMORY_LIMIT,
        EXTENDED_VIRTUAL_ADDRESSING,
    ];
}

/// Known product-feature identifiers.
pub mod features {
    use super::Feature;

    pub const GAME_CENTER: Feature = Feature::from_static("gameCenter");
    pub const APP_GROUPS: Feature = Feature::from_static("APG3427HIY");
    pub const INTER_APP_AUDIO: Feature = Feature::from_static("IAD53UNK2F");

    /// Every feature this crate knows about.
    pub static KNOWN: [Feature; 3] = [GAME_CENTER, APP_GROUPS, INTER_APP_AUDIO];
}

// One canonical pair table backs both lookup directions, so the forward and
// inverse functions are inverses over the mapped subset by construction.
// The correspondence is partial: not every feature has an entitlement and
// not every entitlement has a feature.
static FEATURE_ENTITLEMENTS: [(Feature, Entitlement); 3] = [
    (features::GAME_CENTER, entitlements::GAME_CENTER),
    (features::APP_GROUPS, entitlements::APP_GROUPS),
    (features::INTER_APP_AUDIO, entitlements::INTER_APP_AUDIO),
];

// Entitlements a free (non-paid) developer account may use. Membership here
// is the ONLY way the predicate answers `true`: an entitlement that is
// unknown, or known but restricted, is denied. A deny-list would fail open
// for new identifiers; this must fail closed.
static FREE_DEVELOPER_ENTITLEMENTS: [Entitlement; 3] = [
    entitlements::INCREASED_MEMORY_LIMIT,
    entitlements::INCREASED_DEBUGGING_MEMORY_LIMIT,
    entitlements::EXTENDED_VIRTUAL_ADDRESSING,
];

/// Returns the entitlement a feature requires, or `None` when the feature is
/// unmapped or unrecognized. Absence is ordinary output, not an error.
#[inline]
pub fn entitlement_for_feature(feature: &Feature) -> Option<Entitlement> {
    let entitlement = FEATURE_ENTITLEMENTS
        .iter()
        .find(|(known, _)| known == feature)
        .map(|(_, entitlement)| entitlement.clone());
    tracing::trace!(
        feature = %feature,
        entitlement = entitlement.as_ref().map(Entitlement::as_str),
        "feature -> entitlement lookup"
    );
    entitlement
}

/// Inverse of [`entitlement_for_feature`]: the feature an entitlement backs,
/// or `None` when the entitlement is unmapped or unrecognized.
#[inline]
pub fn feature_for_entitlement(entitlement: &Entitlement) -> Option<Feature> {
    let feature = FEATURE_ENTITLEMENTS
        .iter()
        .find(|(_, known)| known == entitlement)
        .map(|(feature, _)| feature.clone());
    tracing::trace!(
        entitlement = %entitlement,
        feature = feature.as_ref().map(Feature::as_str),
        "entitlement -> feature lookup"
    );
    feature
}

/// Whether a free developer account may use `entitlement`.
///
/// Membership test against a fixed allow-list, default-deny: `true` only for
/// the increased-memory-limit, increased-debugging-memory-limit, and
/// extended-virtual-addressing entitlements, `false` for every other value
/// including ones this crate has never seen.
#[inline]
pub fn free_developer_can_use_entitlement(entitlement: &Entitlement) -> bool {
    let allowed = FREE_DEVELOPER_ENTITLEMENTS
        .iter()
        .any(|known| known == entitlement);
    tracing::trace!(entitlement = %entitlement, allowed, "free developer entitlement check");
    allowed
}
