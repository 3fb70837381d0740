/// Normalizes a URL for deduplication and scheme enforcement
///
/// # Normalization Steps
///
/// 1. Strip trailing slashes from the end of the URL text
/// 2. If `force_https` is set, rewrite a leading `http:` scheme to `https:`
///
/// The rewrite is anchored to the start of the string: a URL that merely
/// contains `"http:"` later in its text (say, in a query parameter) is left
/// alone. The function is idempotent and does not validate well-formedness;
/// malformed input passes through unchanged aside from the two rewrites.
///
/// # Arguments
///
/// * `url` - The URL string to normalize
/// * `force_https` - Whether to upgrade a plain-http scheme to https
///
/// # Examples
///
/// ```
/// use termspider::url::normalize_url;
///
/// assert_eq!(normalize_url("http://example.com/page/", true),
///            "https://example.com/page");
/// ```
pub fn normalize_url(url: &str, force_https: bool) -> String {
    let trimmed = url.trim_end_matches('/');

    // An https: URL never matches the http: prefix (the fifth byte differs),
    // so the rewrite is naturally idempotent.
    if force_https {
        if let Some(rest) = trimmed.strip_prefix("http:") {
            return format!("https:{}", rest);
        }
    }

    trimmed.to_string()
}
