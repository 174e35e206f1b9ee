use mcamp_core::{AppError, AppResult};
use url::Url;
use url::form_urlencoded;

/// Characters the URL parser removes from its input instead of encoding.
const STRIPPED_BY_URL_PARSER: [char; 3] = ['\t', '\n', '\r'];

/// Parses `https://{host}` and checks that the host string contributed nothing
/// but an authority (host plus optional port).
///
/// The host comes back in URL-normalized form: lowercased, IDNA-encoded, and
/// with numeric hosts rewritten as dotted IPv4.
pub(super) fn https_base(host: &str) -> AppResult<Url> {
    if host.trim() != host || host.contains(STRIPPED_BY_URL_PARSER) {
        return Err(AppError::Assembly(format!(
            "host {host:?} must not carry surrounding whitespace or line breaks"
        )));
    }

    let url = Url::parse(format!("https://{host}").as_str())
        .map_err(|error| AppError::Assembly(format!("invalid host '{host}': {error}")))?;

    if !url.username().is_empty() || url.password().is_some() {
        return Err(AppError::Assembly(format!(
            "host '{host}' must not carry credentials"
        )));
    }

    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::Assembly(format!(
            "host '{host}' must not carry a path, query or fragment"
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::Assembly(format!("host '{host}' resolved to an empty host")));
    }

    Ok(url)
}

/// Returns the value to append as one literal path segment.
pub(super) fn path_segment<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    match value {
        "." | ".." => Err(AppError::Assembly(format!(
            "{field} '{value}' cannot be represented as a path segment"
        ))),
        segment if segment.contains(STRIPPED_BY_URL_PARSER) => Err(AppError::Assembly(format!(
            "{field} {segment:?} contains a tab or line break"
        ))),
        segment => Ok(segment),
    }
}

/// Escapes one query value with `application/x-www-form-urlencoded` rules.
pub(super) fn query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use mcamp_core::AppResult;

    use super::{https_base, path_segment, query_value};

    #[test]
    fn bare_host_and_port_are_accepted() -> AppResult<()> {
        let url = https_base("mcamp.example.com:8443")?;
        assert_eq!(url.host_str(), Some("mcamp.example.com"));
        assert_eq!(url.port(), Some(8443));
        Ok(())
    }

    #[test]
    fn host_is_normalized() -> AppResult<()> {
        assert_eq!(
            https_base("MCAMP.Example.COM")?.host_str(),
            Some("mcamp.example.com")
        );
        assert_eq!(https_base("bücher.de")?.host_str(), Some("xn--bcher-kva.de"));
        Ok(())
    }

    #[test]
    fn host_with_path_or_credentials_is_rejected() {
        assert!(https_base("mcamp.example.com/admin").is_err());
        assert!(https_base("mcamp.example.com?x=1").is_err());
        assert!(https_base("user@mcamp.example.com").is_err());
        assert!(https_base(" mcamp.example.com").is_err());
        assert!(https_base("mcamp example.com").is_err());
        assert!(https_base(" ").is_err());
        assert!(https_base("mcamp.exa\tmple.com").is_err());
    }

    #[test]
    fn dot_segments_are_rejected() {
        assert!(path_segment("pkey", "..").is_err());
        assert!(path_segment("pkey", ".").is_err());
        assert!(path_segment("pkey", "...").is_ok());
        assert!(path_segment("pkey", " ").is_ok());
        assert!(path_segment("ecid", "99\n88").is_err());
    }

    #[test]
    fn query_values_escape_separators() {
        assert_eq!(query_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(query_value("1,2"), "1%2C2");
        assert_eq!(query_value("click me"), "click+me");
        assert_eq!(query_value(" "), "+");
    }
}
