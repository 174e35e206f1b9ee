//! Builders for campaign request artifacts.
//!
//! Each artifact has a `try_build_*` function that returns the typed failure
//! and a `build_*` function that collapses it to `None` after reporting it to
//! a [`DiagnosticSink`]. Callers outside this crate should only ever need the
//! second form: a missing configuration value and a failed assembly step are
//! indistinguishable to them.

mod profile_body;
mod profile_url;
mod tracking_url;
mod validation;


use mcamp_core::AppResult;
use mcamp_domain::{BuiltBody, BuiltUrl, ClientState, ProfileAttributes};

use crate::DiagnosticSink;

pub use profile_body::try_build_profile_body;
pub use profile_url::try_build_profile_url;
pub use tracking_url::try_build_tracking_url;

/// Tag attached to every diagnostic emitted by request construction.
pub const DIAGNOSTIC_TAG: &str = "CampaignRequestBuilder";

/// Builds the profile subscription URL, or reports why it cannot be built.
pub fn build_profile_url(state: &ClientState, sink: &dyn DiagnosticSink) -> Option<BuiltUrl> {
    report(sink, "profile URL", try_build_profile_url(state))
}

/// Builds the profile JSON body, or reports why it cannot be built.
pub fn build_profile_body(
    state: &ClientState,
    attributes: Option<&ProfileAttributes>,
    sink: &dyn DiagnosticSink,
) -> Option<BuiltBody> {
    report(sink, "profile body", try_build_profile_body(state, attributes))
}

/// Builds the message tracking URL, or reports why it cannot be built.
pub fn build_tracking_url(
    host: &str,
    broadlog_id: &str,
    delivery_id: &str,
    action: &str,
    ecid: &str,
    sink: &dyn DiagnosticSink,
) -> Option<BuiltUrl> {
    report(
        sink,
        "tracking URL",
        try_build_tracking_url(host, broadlog_id, delivery_id, action, ecid),
    )
}

pub(crate) fn report<T>(
    sink: &dyn DiagnosticSink,
    artifact: &str,
    result: AppResult<T>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            sink.error(
                DIAGNOSTIC_TAG,
                format!("unable to build {artifact}: {error}").as_str(),
            );
            None
        }
    }
}
