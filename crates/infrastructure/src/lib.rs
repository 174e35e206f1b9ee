//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod env_client_state_source;
mod in_memory_client_state_source;
mod tracing_diagnostic_sink;

pub use env_client_state_source::{
    CAMPAIGN_ECID_ENV, CAMPAIGN_PKEY_ENV, CAMPAIGN_SERVER_ENV, EnvClientStateSource,
};
pub use in_memory_client_state_source::InMemoryClientStateSource;
pub use tracing_diagnostic_sink::TracingDiagnosticSink;
