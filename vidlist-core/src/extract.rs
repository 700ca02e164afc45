//! Platform-specific video identifier extraction

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::models::Platform;

// Pre-compiled regex using std::sync::LazyLock.
// The pattern is a compile-time constant; Regex::new cannot fail on it.
static RE_BVID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"video/(BV[A-Za-z0-9]+)").expect("invalid BVID regex"));

/// YouTube URL shapes recognized, in priority order.
const YOUTUBE_MARKERS: [&str; 4] = ["youtu.be/", "/v/", "watch?v=", "embed/"];

/// Extract the platform-specific video identifier from a raw URL.
pub fn extract_video_id(url: &str, platform: Platform) -> Result<String> {
    match platform {
        Platform::Youtube => extract_youtube_id(url),
        Platform::Bilibili => extract_bilibili_id(url),
    }
}

/// Match the URL against the known YouTube shapes and take the trailing
/// segment, stripped of any query/fragment suffix.
fn extract_youtube_id(url: &str) -> Result<String> {
    let clean_url = url.trim();

    let video_id = YOUTUBE_MARKERS
        .iter()
        .find_map(|marker| clean_url.rsplit_once(marker).map(|(_, rest)| rest))
        .map(|rest| rest.split(['&', '?', '#']).next().unwrap_or(""))
        .filter(|id| !id.is_empty());

    match video_id {
        Some(id) => Ok(id.to_string()),
        None => Err(Error::InvalidUrl("Invalid YouTube URL".to_string())),
    }
}

/// Capture the `BV...` code from a bilibili watch URL.
fn extract_bilibili_id(url: &str) -> Result<String> {
    RE_BVID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::InvalidUrl("Invalid Bilibili URL".to_string()))
}
