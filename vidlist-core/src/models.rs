use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Supported video platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Youtube,
    Bilibili,
}

impl Platform {
    /// Parse a client-supplied platform tag.
    ///
    /// An unrecognized tag is a request-level failure, not a parse panic:
    /// the caller surfaces it as the generic extraction error.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "youtube" => Ok(Self::Youtube),
            "bilibili" => Ok(Self::Bilibili),
            _ => Err(Error::CouldNotExtractTitle),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Bilibili => "bilibili",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title resolution request body
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRequest {
    pub url: String,
    pub platform: String,
}

/// A client-submitted video entry kept in the in-memory list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default, rename = "thumbnailColor")]
    pub thumbnail_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parse() {
        assert_eq!(Platform::parse("youtube").unwrap(), Platform::Youtube);
        assert_eq!(Platform::parse("bilibili").unwrap(), Platform::Bilibili);
        assert!(Platform::parse("vimeo").is_err());
        assert!(Platform::parse("YouTube").is_err());
    }

    #[test]
    fn test_video_record_wire_names() {
        let json = r##"{
            "id": "1",
            "url": "https://youtu.be/abc",
            "title": "A video",
            "platform": "youtube",
            "thumbnailColor": "#336699"
        }"##;
        let record: VideoRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(record.thumbnail_color.as_deref(), Some("#336699"));
        assert!(record.thumbnail.is_none());

        let out = serde_json::to_value(&record).expect("serializes");
        assert_eq!(out["thumbnailColor"], "#336699");
    }
}
