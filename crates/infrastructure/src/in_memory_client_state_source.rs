use std::sync::RwLock;

use mcamp_application::ClientStateSource;
use mcamp_domain::ClientState;

/// Client state source holding a replaceable snapshot in memory.
#[derive(Debug, Default)]
pub struct InMemoryClientStateSource {
    state: RwLock<ClientState>,
}

impl InMemoryClientStateSource {
    /// Creates a source serving the given snapshot.
    #[must_use]
    pub fn new(state: ClientState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Replaces the snapshot served to subsequent readers.
    pub fn replace(&self, state: ClientState) {
        match self.state.write() {
            Ok(mut current) => *current = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }
}

impl ClientStateSource for InMemoryClientStateSource {
    fn client_state(&self) -> ClientState {
        match self.state.read() {
            Ok(state) => state.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
