//! YouTube title resolution via oEmbed-style metadata endpoints

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};

/// End-user-facing message when every metadata endpoint has been tried.
/// Kept verbatim for client compatibility.
const TITLE_UNAVAILABLE_MESSAGE: &str = "无法获取YouTube视频标题，请检查链接是否正确";

/// Try each metadata endpoint in order; the first HTTP 200 response with a
/// non-empty `title` field wins. A failed request, bad status, or missing
/// title moves on to the next endpoint.
pub(super) async fn resolve(
    client: &Client,
    config: &ResolverConfig,
    video_id: &str,
) -> Result<String> {
    #[derive(Deserialize)]
    struct EmbedMetadata {
        title: Option<String>,
    }

    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    let timeout = Duration::from_secs(config.metadata_timeout_seconds);

    for (index, endpoint) in config.youtube_endpoints.iter().enumerate() {
        debug!("Trying metadata endpoint: {endpoint}");

        // noembed defaults to JSON; the oEmbed endpoint needs it requested
        // explicitly.
        let mut query = vec![("url", watch_url.as_str())];
        if index > 0 {
            query.push(("format", "json"));
        }

        let response = client
            .get(endpoint)
            .query(&query)
            .header(header::ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(e) => {
                debug!("Metadata request to {endpoint} failed: {e}");
                continue;
            }
        };

        if response.status() != StatusCode::OK {
            debug!("Metadata endpoint {endpoint} returned {}", response.status());
            continue;
        }

        match response.json::<EmbedMetadata>().await {
            Ok(metadata) => {
                if let Some(title) = metadata.title.filter(|t| !t.is_empty()) {
                    return Ok(title);
                }
                debug!("Metadata endpoint {endpoint} returned no title");
            }
            Err(e) => debug!("Metadata endpoint {endpoint} returned invalid JSON: {e}"),
        }
    }

    Err(Error::TitleUnavailable(TITLE_UNAVAILABLE_MESSAGE.to_string()))
}
