use mcamp_domain::ClientState;

/// Port for reading the campaign client's configuration and identity.
pub trait ClientStateSource: Send + Sync {
    /// Returns the current configuration snapshot.
    fn client_state(&self) -> ClientState;
}

/// Port for diagnostic output from request construction.
///
/// Implementations must not block and must not fail; builders never branch on
/// what the sink does.
pub trait DiagnosticSink: Send + Sync {
    /// Records an error-severity diagnostic under the given tag.
    fn error(&self, tag: &str, message: &str);
}
