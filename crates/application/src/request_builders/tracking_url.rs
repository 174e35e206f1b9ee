use mcamp_core::{AppError, AppResult, required_value};
use mcamp_domain::BuiltUrl;

use super::validation::{https_base, query_value};

const TRACKING_PATH: &str = "r";

/// Builds `https://{host}/r?id={broadlog_id},{delivery_id},{action}&mcId={ecid}`.
pub fn try_build_tracking_url(
    host: &str,
    broadlog_id: &str,
    delivery_id: &str,
    action: &str,
    ecid: &str,
) -> AppResult<BuiltUrl> {
    let host = required_value("host", Some(host))?;
    let broadlog_id = required_value("broadlog id", Some(broadlog_id))?;
    let delivery_id = required_value("delivery id", Some(delivery_id))?;
    let action = required_value("action", Some(action))?;
    let ecid = required_value("ecid", Some(ecid))?;

    let mut url = https_base(host)?;
    url.set_path(TRACKING_PATH);

    // Commas joining the triple stay literal; only the components are escaped.
    let id = [broadlog_id, delivery_id, action]
        .into_iter()
        .map(query_value)
        .collect::<Vec<_>>()
        .join(",");
    url.set_query(Some(format!("id={id}&mcId={}", query_value(ecid)).as_str()));

    if url.path() != "/r" {
        return Err(AppError::Assembly(format!(
            "tracking URL path resolved to '{}'",
            url.path()
        )));
    }

    BuiltUrl::new(url)
}
