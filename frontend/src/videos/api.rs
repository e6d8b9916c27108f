use crate::models::{ErrorResponse, VideoPayload, VideoRecord};
use crate::videos::error::{Result, VideoError};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// The `/video/{id}` resource family of the backend.
#[async_trait(?Send)]
pub trait VideoApi {
    async fn get_video(&self, id: i64) -> Result<VideoRecord>;

    /// Create-or-replace. A `youtube_url` in the payload asks the backend to
    /// fill name and counters from YouTube.
    async fn put_video(&self, payload: &VideoPayload) -> Result<VideoRecord>;

    async fn patch_video(&self, payload: &VideoPayload) -> Result<VideoRecord>;

    async fn delete_video(&self, id: i64) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpVideoApi {
    backend_url: String,
}

impl HttpVideoApi {
    pub fn new(backend_url: &str) -> Self {
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn video_url(&self, id: i64) -> String {
        format!("{}/video/{}", self.backend_url, id)
    }
}

#[async_trait(?Send)]
impl VideoApi for HttpVideoApi {
    async fn get_video(&self, id: i64) -> Result<VideoRecord> {
        let response = Request::get(&self.video_url(id))
            .send()
            .await
            .map_err(|e| VideoError::Network(e.to_string()))?;

        read_record(response).await
    }

    async fn put_video(&self, payload: &VideoPayload) -> Result<VideoRecord> {
        let response = Request::put(&self.video_url(payload.id))
            .json(payload)
            .map_err(|e| VideoError::Network(format!("Request error: {}", e)))?
            .send()
            .await
            .map_err(|e| VideoError::Network(e.to_string()))?;

        read_record(response).await
    }

    async fn patch_video(&self, payload: &VideoPayload) -> Result<VideoRecord> {
        let response = Request::patch(&self.video_url(payload.id))
            .json(payload)
            .map_err(|e| VideoError::Network(format!("Request error: {}", e)))?
            .send()
            .await
            .map_err(|e| VideoError::Network(e.to_string()))?;

        read_record(response).await
    }

    async fn delete_video(&self, id: i64) -> Result<()> {
        let response = Request::delete(&self.video_url(id))
            .send()
            .await
            .map_err(|e| VideoError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(application_error(response).await)
        }
    }
}

async fn read_record(response: Response) -> Result<VideoRecord> {
    if response.ok() {
        response
            .json::<VideoRecord>()
            .await
            .map_err(|e| VideoError::Decode(e.to_string()))
    } else {
        Err(application_error(response).await)
    }
}

async fn application_error(response: Response) -> VideoError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    VideoError::Application {
        status,
        message: error_message_from_body(&body),
    }
}

/// Pulls `message` out of an error body. Empty, non-JSON and message-less
/// bodies all yield `None`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|error_response| error_response.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_url_joins_backend_and_id() {
        assert_eq!(HttpVideoApi::new("").video_url(1), "/video/1");
        assert_eq!(
            HttpVideoApi::new("http://localhost:5000/").video_url(42),
            "http://localhost:5000/video/42"
        );
    }

    #[test]
    fn error_message_is_optional() {
        assert_eq!(
            error_message_from_body(r#"{"message": "Video not found"}"#).as_deref(),
            Some("Video not found")
        );
        assert_eq!(error_message_from_body(r#"{"error": "boom"}"#), None);
        assert_eq!(error_message_from_body(""), None);
        assert_eq!(error_message_from_body("<html>502</html>"), None);
    }
}
