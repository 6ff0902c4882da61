//! Deterministic storage keys for uploaded files.
//!
//! Keys are relative to the media root and derived from the owning record's id, so a
//! record has to be persisted before its files can be stored.

/// Name used when nothing usable is left of an uploaded filename.
const FALLBACK_FILENAME: &str = "upload";

/// URL prefix the media root is served under.
pub const MEDIA_URL_PREFIX: &str = "/media";

/// Public URL of a stored file.
pub fn media_url(key: &str) -> String {
    format!("{}/{}", MEDIA_URL_PREFIX, key)
}

/// Key of a category icon: `category/{id}/category_icon/{filename}`.
pub fn category_icon_path(category_id: i32, filename: &str) -> String {
    format!(
        "category/{}/category_icon/{}",
        category_id,
        sanitize_filename(filename)
    )
}

/// Key of a channel icon: `channel/{id}/channel_icon/{filename}`.
pub fn channel_icon_path(channel_id: i32, filename: &str) -> String {
    format!(
        "channel/{}/channel_icon/{}",
        channel_id,
        sanitize_filename(filename)
    )
}

/// Key of a channel banner: `channel/{id}/channel_banner/{filename}`.
pub fn channel_banner_path(channel_id: i32, filename: &str) -> String {
    format!(
        "channel/{}/channel_banner/{}",
        channel_id,
        sanitize_filename(filename)
    )
}

/// Reduces a client supplied filename to a single safe path segment.
///
/// Directory components are dropped, whitespace becomes `_` and anything outside
/// `[A-Za-z0-9._-]` is removed. A result made only of dots (or nothing) would be able
/// to address a parent directory and is replaced by `upload`.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = basename
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    if cleaned.chars().all(|c| c == '.') {
        return FALLBACK_FILENAME.to_string();
    }

    cleaned
}
