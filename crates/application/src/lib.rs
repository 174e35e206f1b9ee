//! Application services and ports.

#![forbid(unsafe_code)]

mod campaign_request_service;
mod request_builders;
mod request_ports;

pub use campaign_request_service::{CampaignRequestService, ProfileRequest};
pub use request_builders::{
    DIAGNOSTIC_TAG, build_profile_body, build_profile_url, build_tracking_url,
    try_build_profile_body, try_build_profile_url, try_build_tracking_url,
};
pub use request_ports::{ClientStateSource, DiagnosticSink};
