use regex::Regex;
use std::sync::LazyLock;

/// Index of the capture group holding the 11-character video identifier.
const VIDEO_ID_GROUP: usize = 6;

// Only the start is anchored: anything after the identifier is ignored, so
// extra query parameters (`&t=42s`, `&list=...`) still classify as valid.
static YOUTUBE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(https?://)?(www\.)?(youtube|youtu|youtube-nocookie)\.(com|be)/(watch\?v=|embed/|v/|.+\?v=)?([^&=%\?]{11})",
    )
    .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Returns `true` when `candidate` starts with a supported YouTube video link.
///
/// Accepted hosts are `youtube`, `youtu` and `youtube-nocookie` under `.com` or
/// `.be`, with optional scheme and `www.`. The path may be `watch?v=`, `embed/`,
/// `v/`, anything ending in `?v=`, or nothing, followed by an 11-character
/// identifier that contains none of `&`, `=`, `%`, `?`.
///
/// # Examples
///
/// ```
/// use yt_summarizer::utils::links::is_youtube_url;
///
/// assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
/// assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ"));
/// assert!(!is_youtube_url("check out this site: example.com"));
/// ```
#[must_use]
pub fn is_youtube_url(candidate: &str) -> bool {
    YOUTUBE_URL_RE.is_match(candidate)
}

/// Extracts the video identifier from a link accepted by [`is_youtube_url`].
#[must_use]
pub fn extract_video_id(candidate: &str) -> Option<&str> {
    YOUTUBE_URL_RE
        .captures(candidate)
        .and_then(|caps| caps.get(VIDEO_ID_GROUP))
        .map(|m| m.as_str())
}
