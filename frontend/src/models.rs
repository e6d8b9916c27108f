use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub id: i64,
    pub name: String,
    pub views: u64,
    pub likes: u64,
}

/// Body sent with `PUT` and `PATCH`. `youtube_url` is only a hint for the
/// backend and is left out of the JSON when absent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoPayload {
    pub id: i64,
    pub name: String,
    pub views: u64,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
}

impl VideoPayload {
    pub fn with_youtube_url(mut self, url: &str) -> Self {
        self.youtube_url = Some(url.to_string());
        self
    }
}

impl From<VideoRecord> for VideoPayload {
    fn from(record: VideoRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            views: record.views,
            likes: record.likes,
            youtube_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
