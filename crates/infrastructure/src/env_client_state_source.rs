//! Client state read from process environment variables.

use std::env;

use mcamp_application::ClientStateSource;
use mcamp_domain::ClientState;

/// Variable holding the campaign server host.
pub const CAMPAIGN_SERVER_ENV: &str = "CAMPAIGN_SERVER";

/// Variable holding the program/property key.
pub const CAMPAIGN_PKEY_ENV: &str = "CAMPAIGN_PKEY";

/// Variable holding the experience/client identifier.
pub const CAMPAIGN_ECID_ENV: &str = "CAMPAIGN_ECID";

/// Client state source that re-reads the environment on every call.
///
/// Unset and blank variables are both reported as absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvClientStateSource;

impl EnvClientStateSource {
    /// Creates a new environment-backed source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ClientStateSource for EnvClientStateSource {
    fn client_state(&self) -> ClientState {
        client_state_from(|name| env::var(name).ok())
    }
}

fn client_state_from(lookup: impl Fn(&str) -> Option<String>) -> ClientState {
    let read = |name: &str| {
        lookup(name)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    };

    ClientState::new(
        read(CAMPAIGN_SERVER_ENV),
        read(CAMPAIGN_PKEY_ENV),
        read(CAMPAIGN_ECID_ENV),
    )
}
