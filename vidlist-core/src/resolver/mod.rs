//! Title resolution over external metadata sources
//!
//! One resolver per platform, dispatched from [`TitleResolver`]. All
//! outbound requests share a single pooled HTTP client.

mod bilibili;
mod youtube;

use std::time::Duration;

use reqwest::Client;

use crate::config::ResolverConfig;
use crate::error::{Error, Result};
use crate::models::Platform;

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

/// Resolves human-readable video titles from external sources
pub struct TitleResolver {
    client: Client,
    config: ResolverConfig,
}

impl TitleResolver {
    /// Create a resolver with a shared pooled HTTP client.
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Resolve the title for an already-extracted video identifier.
    pub async fn resolve(&self, platform: Platform, video_id: &str) -> Result<String> {
        match platform {
            Platform::Youtube => youtube::resolve(&self.client, &self.config, video_id).await,
            Platform::Bilibili => {
                bilibili::resolve(&self.client, &self.config.bilibili_base, video_id).await
            }
        }
    }
}
