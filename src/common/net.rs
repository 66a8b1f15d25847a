use url::Url;

/// Normalizes operator input into a backend base URL. Bare `host[:port]`
/// input gets an `http://` scheme since the probe targets local backends.
pub fn parse_base_url(input: &str) -> Option<Url> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    let url = if trimmed.contains("://") {
        Url::parse(trimmed).ok()?
    } else {
        Url::parse(&format!("http://{trimmed}")).ok()?
    };

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    url.host_str()?;

    Some(url)
}
