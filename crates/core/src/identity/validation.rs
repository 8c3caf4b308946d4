/// Validates a post-login return target.
///
/// Returns `Some(url)` only for relative paths on this site, `None` for
/// anything that could redirect elsewhere.
///
/// # Examples
///
/// ```
/// use storybook_core::identity::validate_return_to;
///
/// assert_eq!(validate_return_to("/story?story_id=1"), Some("/story?story_id=1"));
/// assert_eq!(validate_return_to("//evil.com"), None);
/// assert_eq!(validate_return_to("https://evil.com"), None);
/// ```
pub fn validate_return_to(url: &str) -> Option<&str> {
    if !url.starts_with('/') {
        return None;
    }

    // Protocol-relative URLs (//evil.com)
    if url.starts_with("//") {
        return None;
    }

    if url.chars().any(|c| c.is_control()) {
        return None;
    }

    if url.contains("://") {
        return None;
    }

    Some(url)
}
