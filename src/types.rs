use std::borrow::Cow;
use std::fmt;

// --- Identifier vocabularies ------------------------------------------------
// Entitlement, Capability, and Feature are three distinct string-keyed
// identifier spaces. Each is an open enumeration: third parties introduce new
// identifiers without this crate recompiling, so these are newtypes over a
// string rather than closed enums. The inner `Cow` lets the known values in
// `registry` be `const` items while foreign values stay owned.

/// A key in an application's code-signing entitlements declaration.
///
/// The string value IS the identity, and is used verbatim as a key in
/// provisioning data, so known values are stable across versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Entitlement(Cow<'static, str>);

/// A coarse capability identifier understood by the developer portal.
///
/// Parallel vocabulary to [`Entitlement`]; some names overlap conceptually
/// but the identifier spaces are distinct and no mapping between them is
/// declared here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Capability(Cow<'static, str>);

/// A product-feature identifier (app service) that requires signing support.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Feature(Cow<'static, str>);

impl Entitlement {
    /// Wraps a static entitlement key. Usable in `const` items.
    pub const fn from_static(key: &'static str) -> Self {
        Entitlement(Cow::Borrowed(key))
    }

    /// Wraps an arbitrary entitlement key, recognized or not.
    pub fn new(key: impl Into<String>) -> Self {
        Entitlement(Cow::Owned(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Capability {
    /// Wraps a static capability identifier. Usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Capability(Cow::Borrowed(id))
    }

    /// Wraps an arbitrary capability identifier, recognized or not.
    pub fn new(id: impl Into<String>) -> Self {
        Capability(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Feature {
    /// Wraps a static feature identifier. Usable in `const` items.
    pub const fn from_static(id: &'static str) -> Self {
        Feature(Cow::Borrowed(id))
    }

    /// Wraps an arbitrary feature identifier, recognized or not.
    pub fn new(id: impl Into<String>) -> Self {
        Feature(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entitlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Entitlement {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Feature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Entitlement {
    fn from(key: &str) -> Self {
        Entitlement::new(key)
    }
}

impl From<String> for Entitlement {
    fn from(key: String) -> Self {
        Entitlement(Cow::Owned(key))
    }
}

impl From<&str> for Capability {
    fn from(id: &str) -> Self {
        Capability::new(id)
    }
}

impl From<String> for Capability {
    fn from(id: String) -> Self {
        Capability(Cow::Owned(id))
    }
}

impl From<&str> for Feature {
    fn from(id: &str) -> Self {
        Feature::new(id)
    }
}

impl From<String> for Feature {
    fn from(id: String) -> Self {
        Feature(Cow::Owned(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_construction_compare_equal() {
        const STATIC: Entitlement = Entitlement::from_static("get-task-allow");
        let owned = Entitlement::new(String::from("get-task-allow"));
        assert_eq!(STATIC, owned);
        assert_eq!(owned.as_str(), "get-task-allow");
    }

    #[test]
    fn unrecognized_values_construct_freely() {
        // Open enumeration: a value this crate has never heard of is still a
        // perfectly valid identifier.
        let feature = Feature::new("com.example.future-feature");
        assert_eq!(feature.to_string(), "com.example.future-feature");
    }

    #[test]
    fn vocabularies_are_distinct_types() {
        // Same spelling, different identifier space; the distinction is a
        // compile-time property, the assertions just pin the string views.
        let entitlement = Entitlement::from_static("inter-app-audio");
        let capability = Capability::from_static("inter-app-audio");
        assert_eq!(entitlement.as_str(), capability.as_str());
    }
}
