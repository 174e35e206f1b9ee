use std::collections::BTreeMap;

use mcamp_core::{AppError, AppResult, required_value};
use mcamp_domain::{
    BuiltBody, ClientState, PROFILE_IDENTITY_KEY, PROFILE_PLATFORM_KEY, PROFILE_PLATFORM_VALUE,
    ProfileAttributes,
};

/// Builds the profile JSON body: caller attributes overlaid with the identity
/// and platform keys, which always win.
pub fn try_build_profile_body(
    state: &ClientState,
    attributes: Option<&ProfileAttributes>,
) -> AppResult<BuiltBody> {
    let ecid = required_value("ecid", state.ecid())?;

    let mut payload: BTreeMap<String, String> = attributes
        .map(|attributes| {
            attributes
                .iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect()
        })
        .unwrap_or_default();
    payload.insert(PROFILE_IDENTITY_KEY.to_owned(), ecid.to_owned());
    payload.insert(
        PROFILE_PLATFORM_KEY.to_owned(),
        PROFILE_PLATFORM_VALUE.to_owned(),
    );

    let json = serde_json::to_string(&payload).map_err(|error| {
        AppError::Assembly(format!("failed to serialize profile body: {error}"))
    })?;

    BuiltBody::new(json)
}
