use mcamp_core::{AppError, AppResult, required_value};
use mcamp_domain::{BuiltUrl, ClientState};

use super::validation::{https_base, path_segment};

const PROFILE_PATH_PREFIX: [&str; 3] = ["rest", "head", "mobileAppV5"];
const PROFILE_SUBSCRIPTIONS_SEGMENT: &str = "subscriptions";

/// Builds `https://{server}/rest/head/mobileAppV5/{pkey}/subscriptions/{ecid}`.
pub fn try_build_profile_url(state: &ClientState) -> AppResult<BuiltUrl> {
    let server = required_value("server", state.server())?;
    let pkey = required_value("pkey", state.pkey())?;
    let ecid = required_value("ecid", state.ecid())?;

    let mut url = https_base(server)?;
    {
        let mut segments = url.path_segments_mut().map_err(|_| {
            AppError::Assembly(format!("server '{server}' does not accept a path"))
        })?;
        segments
            .pop_if_empty()
            .extend(PROFILE_PATH_PREFIX)
            .push(path_segment("pkey", pkey)?)
            .push(PROFILE_SUBSCRIPTIONS_SEGMENT)
            .push(path_segment("ecid", ecid)?);
    }

    let segment_count = url.path_segments().map_or(0, Iterator::count);
    if segment_count != PROFILE_PATH_PREFIX.len() + 3 {
        return Err(AppError::Assembly(format!(
            "profile URL path '{}' has {segment_count} segments",
            url.path()
        )));
    }

    BuiltUrl::new(url)
}
