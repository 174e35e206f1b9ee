//! Client configuration snapshot consumed by the request builders.

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the campaign client's configuration and identity.
///
/// Every field is optional: a store that has not been configured yet, or has
/// not resolved an identifier yet, reports absence rather than an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    server: Option<String>,
    pkey: Option<String>,
    ecid: Option<String>,
}

impl ClientState {
    /// Creates a client state snapshot.
    #[must_use]
    pub fn new(server: Option<String>, pkey: Option<String>, ecid: Option<String>) -> Self {
        Self { server, pkey, ecid }
    }

    /// Campaign server hostname, optionally with a port.
    #[must_use]
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    /// Program/property key identifying the mobile application.
    #[must_use]
    pub fn pkey(&self) -> Option<&str> {
        self.pkey.as_deref()
    }

    /// Experience/client identifier of the device.
    #[must_use]
    pub fn ecid(&self) -> Option<&str> {
        self.ecid.as_deref()
    }
}
