use std::collections::HashMap;
use std::sync::Arc;

use mcamp_core::{AppResult, required_value};
use mcamp_domain::{BuiltBody, BuiltUrl, ProfileAttributes, TrackingIds};

use crate::request_builders::{
    report, try_build_profile_body, try_build_profile_url, try_build_tracking_url,
};
use crate::{ClientStateSource, DiagnosticSink};


/// A complete profile subscription request: target URL and JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    /// Subscription endpoint for the device profile.
    pub url: BuiltUrl,
    /// Profile attributes to send.
    pub body: BuiltBody,
}

/// Application service building campaign requests from the current client state.
#[derive(Clone)]
pub struct CampaignRequestService {
    state_source: Arc<dyn ClientStateSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl CampaignRequestService {
    /// Creates a new campaign request service.
    #[must_use]
    pub fn new(
        state_source: Arc<dyn ClientStateSource>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            state_source,
            diagnostics,
        }
    }

    /// Builds the profile subscription URL.
    pub fn profile_url(&self) -> Option<BuiltUrl> {
        let state = self.state_source.client_state();
        report(self.diagnostics.as_ref(), "profile URL", try_build_profile_url(&state))
    }

    /// Builds the profile JSON body.
    pub fn profile_body(&self, attributes: Option<&ProfileAttributes>) -> Option<BuiltBody> {
        let state = self.state_source.client_state();
        report(
            self.diagnostics.as_ref(),
            "profile body",
            try_build_profile_body(&state, attributes),
        )
    }

    /// Builds the profile URL and body from a single state snapshot.
    ///
    /// Returns `None` unless both parts can be built.
    pub fn profile_request(&self, attributes: Option<&ProfileAttributes>) -> Option<ProfileRequest> {
        let state = self.state_source.client_state();
        let request = try_build_profile_url(&state).and_then(|url| {
            try_build_profile_body(&state, attributes).map(|body| ProfileRequest { url, body })
        });

        report(self.diagnostics.as_ref(), "profile request", request)
    }

    /// Builds the tracking URL for an interaction with a delivered message,
    /// using the configured server as tracking host.
    pub fn tracking_url(
        &self,
        broadlog_id: &str,
        delivery_id: &str,
        action: &str,
    ) -> Option<BuiltUrl> {
        report(
            self.diagnostics.as_ref(),
            "tracking URL",
            self.resolve_tracking_url(broadlog_id, delivery_id, action),
        )
    }

    /// Builds the tracking URL for a delivered message whose data payload
    /// carries the broadlog and delivery identifiers.
    pub fn tracking_url_for_message(
        &self,
        message_data: &HashMap<String, String>,
        action: &str,
    ) -> Option<BuiltUrl> {
        let url = TrackingIds::from_message_data(message_data).and_then(|ids| {
            self.resolve_tracking_url(ids.broadlog_id(), ids.delivery_id(), action)
        });

        report(self.diagnostics.as_ref(), "tracking URL", url)
    }

    fn resolve_tracking_url(
        &self,
        broadlog_id: &str,
        delivery_id: &str,
        action: &str,
    ) -> AppResult<BuiltUrl> {
        let state = self.state_source.client_state();
        let host = required_value("server", state.server())?;
        let ecid = required_value("ecid", state.ecid())?;

        try_build_tracking_url(host, broadlog_id, delivery_id, action, ecid)
    }
}
