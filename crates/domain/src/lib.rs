//! Domain types and invariants for campaign request artifacts.

#![forbid(unsafe_code)]

mod client_state;
mod profile;
mod request;
mod tracking;

pub use client_state::ClientState;
pub use profile::{
    PROFILE_IDENTITY_KEY, PROFILE_PLATFORM_KEY, PROFILE_PLATFORM_VALUE, ProfileAttributes,
};
pub use request::{BuiltBody, BuiltUrl};
pub use tracking::{MESSAGE_BROADLOG_ID_KEY, MESSAGE_DELIVERY_ID_KEY, TrackingIds};
