//! Validated request artifacts handed to the transport layer.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use mcamp_core::{AppError, AppResult};
use url::Url;

/// An absolute HTTPS URL with a non-empty host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltUrl(Url);

impl BuiltUrl {
    /// Wraps a parsed URL after checking the scheme and host.
    pub fn new(url: Url) -> AppResult<Self> {
        if url.scheme() != "https" {
            return Err(AppError::Assembly(format!(
                "request URL must use https, got '{}'",
                url.scheme()
            )));
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(AppError::Assembly(
                "request URL must have a non-empty host".to_owned(),
            ));
        }

        Ok(Self(url))
    }

    /// Returns the serialized URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host component.
    #[must_use]
    pub fn host(&self) -> &str {
        self.0.host_str().unwrap_or_default()
    }

    /// Returns the explicit port, if any.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.0.port()
    }

    /// Returns the percent-encoded path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.0.path()
    }

    /// Returns the raw query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.0.query()
    }

    /// Returns the decoded query pairs in serialization order.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }
}

impl Display for BuiltUrl {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// JSON object text whose values are all strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltBody(String);

impl BuiltBody {
    /// Wraps JSON text after checking that it decodes into a string mapping.
    pub fn new(json: impl Into<String>) -> AppResult<Self> {
        let json = json.into();
        serde_json::from_str::<HashMap<String, String>>(json.as_str()).map_err(|error| {
            AppError::Assembly(format!("request body is not a JSON string object: {error}"))
        })?;

        Ok(Self(json))
    }

    /// Returns the JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decodes the body back into its attribute mapping.
    pub fn to_attributes(&self) -> AppResult<HashMap<String, String>> {
        serde_json::from_str(self.0.as_str()).map_err(|error| {
            AppError::Internal(format!("failed to decode request body: {error}"))
        })
    }
}

impl Display for BuiltBody {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}
