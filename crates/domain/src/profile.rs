//! Profile attribute payloads sent with subscription updates.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body key carrying the experience/client identifier.
pub const PROFILE_IDENTITY_KEY: &str = "marketingCloudId";

/// Body key carrying the push platform marker.
pub const PROFILE_PLATFORM_KEY: &str = "pushPlatform";

/// Push platform token written into every profile body.
pub const PROFILE_PLATFORM_VALUE: &str = "apns";

/// Caller-supplied profile attributes, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileAttributes(HashMap<String, String>);

impl ProfileAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one attribute, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates over attribute name/value pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for ProfileAttributes {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for ProfileAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ProfileAttributes;

    #[test]
    fn insert_replaces_previous_value() {
        let mut attributes = ProfileAttributes::new();
        attributes.insert("locale", "en_US");
        attributes.insert("locale", "fr_FR");

        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes.get("locale"), Some("fr_FR"));
    }

    #[test]
    fn collects_from_pairs() {
        let attributes: ProfileAttributes = [("deviceName", "iPhone"), ("locale", "en_US")]
            .into_iter()
            .collect();

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("deviceName"), Some("iPhone"));
        assert!(!attributes.is_empty());
    }
}
