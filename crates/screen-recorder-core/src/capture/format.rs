use tracing::debug;

/// Encoding formats in preference order: best quality and widest
/// compatibility first, bare container last.
pub const MIME_PREFERENCES: [&str; 4] = [
    "video/webm;codecs=vp9,opus",
    "video/webm;codecs=vp8,opus",
    "video/webm;codecs=h264,opus",
    "video/webm",
];

/// Returns the first entry of `preferences` the host reports as supported.
///
/// Probing stops at the first hit, so entries after the selected one are
/// never queried.
///
/// # Example
///
/// ```
/// use screen_recorder_core::{MIME_PREFERENCES, negotiate_format};
///
/// let selected = negotiate_format(&MIME_PREFERENCES, |mime| mime == "video/webm");
/// assert_eq!(selected, Some("video/webm"));
/// ```
pub fn negotiate_format<'a, S, F>(preferences: &'a [S], mut is_supported: F) -> Option<&'a str>
where
    S: AsRef<str>,
    F: FnMut(&str) -> bool,
{
    preferences
        .iter()
        .map(|mime: &'a S| -> &'a str { mime.as_ref() })
        .find(|mime| {
            let supported = is_supported(*mime);
            debug!(mime_type = *mime, supported, "Probed recording format");
            supported
        })
}
