//! Message tracking identifiers.

use std::collections::HashMap;

use mcamp_core::{AppResult, required_value};

/// Message data key carrying the broadlog identifier.
pub const MESSAGE_BROADLOG_ID_KEY: &str = "_mId";

/// Message data key carrying the delivery identifier.
pub const MESSAGE_DELIVERY_ID_KEY: &str = "_dId";

/// Identifiers of a delivered message, as needed by the tracking endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingIds {
    broadlog_id: String,
    delivery_id: String,
}

impl TrackingIds {
    /// Extracts tracking identifiers from a delivered message's data payload.
    pub fn from_message_data(data: &HashMap<String, String>) -> AppResult<Self> {
        Ok(Self {
            broadlog_id: required_value(
                MESSAGE_BROADLOG_ID_KEY,
                data.get(MESSAGE_BROADLOG_ID_KEY).map(String::as_str),
            )?
            .to_owned(),
            delivery_id: required_value(
                MESSAGE_DELIVERY_ID_KEY,
                data.get(MESSAGE_DELIVERY_ID_KEY).map(String::as_str),
            )?
            .to_owned(),
        })
    }

    /// Broadlog identifier of the individual message.
    #[must_use]
    pub fn broadlog_id(&self) -> &str {
        self.broadlog_id.as_str()
    }

    /// Delivery identifier of the campaign send.
    #[must_use]
    pub fn delivery_id(&self) -> &str {
        self.delivery_id.as_str()
    }
}
