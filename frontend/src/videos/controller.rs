//! Request side of the video manager.
//!
//! [`VideoController`] turns user intents into backend calls and reports the
//! outcome as [`VideoAction`]s through a Yew callback. Every request ends in
//! exactly one toast. List changes are only dispatched after the backend
//! acknowledged them.

use crate::env_variable_utils::AppConfig;
use crate::models::VideoPayload;
use crate::videos::api::VideoApi;
use crate::videos::error::VideoError;
use crate::videos::state::{ToastKind, VideoAction, VideoForm};
use log::{debug, info, warn};
use yew::Callback;

pub struct VideoController<A> {
    api: A,
    dispatch: Callback<VideoAction>,
    initial_video_id: i64,
    metadata_lookup_id: i64,
}

/// Holds the metadata busy flag up until dropped, whichever way the request
/// ends.
struct MetadataBusy<'a> {
    dispatch: &'a Callback<VideoAction>,
}

impl<'a> MetadataBusy<'a> {
    fn start(dispatch: &'a Callback<VideoAction>) -> Self {
        dispatch.emit(VideoAction::SetFetchingMetadata(true));
        Self { dispatch }
    }
}

impl Drop for MetadataBusy<'_> {
    fn drop(&mut self) {
        self.dispatch.emit(VideoAction::SetFetchingMetadata(false));
    }
}

impl<A: VideoApi> VideoController<A> {
    pub fn new(api: A, dispatch: Callback<VideoAction>, config: &AppConfig) -> Self {
        Self {
            api,
            dispatch,
            initial_video_id: config.initial_video_id,
            metadata_lookup_id: config.metadata_lookup_id,
        }
    }

    pub async fn fetch_initial(&self) {
        match self.api.get_video(self.initial_video_id).await {
            Ok(video) => {
                info!("Loaded video {} ({})", video.id, video.name);
                self.dispatch.emit(VideoAction::Loaded(video));
                self.notify_success("Video loaded");
            }
            Err(e) => {
                warn!(
                    "Initial fetch of video {} failed: {}",
                    self.initial_video_id, e
                );
                self.dispatch.emit(VideoAction::Notify(
                    ToastKind::Error,
                    "Error fetching videos".to_string(),
                ));
            }
        }
    }

    /// Creates the record typed into `form`. The form is cleared up front,
    /// whether or not the request goes through.
    pub async fn create(&self, form: &VideoForm, youtube_url: &str) {
        self.dispatch.emit(VideoAction::ClearForm);

        let mut payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.notify_failure(&e, "Error adding video"),
        };
        let youtube_url = youtube_url.trim();
        if !youtube_url.is_empty() {
            payload = payload.with_youtube_url(youtube_url);
        }

        match self.api.put_video(&payload).await {
            Ok(video) => {
                info!("Created video {}", video.id);
                self.dispatch.emit(VideoAction::Added(video));
                self.notify_success("Video added successfully");
            }
            Err(e) => self.notify_failure(&e, "Error adding video"),
        }
    }

    /// Saves the edit dialog. The dialog only closes on success.
    pub async fn update(&self, form: &VideoForm) {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.notify_failure(&e, "Error updating video"),
        };

        match self.api.patch_video(&payload).await {
            Ok(video) => {
                info!("Updated video {}", video.id);
                self.dispatch.emit(VideoAction::Updated(video));
                self.dispatch.emit(VideoAction::CloseEdit);
                self.notify_success("Video updated successfully");
            }
            Err(e) => self.notify_failure(&e, "Error updating video"),
        }
    }

    pub async fn remove(&self, id: i64) {
        match self.api.delete_video(id).await {
            Ok(()) => {
                info!("Deleted video {}", id);
                self.dispatch.emit(VideoAction::Removed(id));
                self.notify_success("Video deleted successfully");
            }
            Err(e) => self.notify_failure(&e, "Error deleting video"),
        }
    }

    /// Asks the backend to resolve `url` and copies the answer into the
    /// create form. The local list is never touched.
    pub async fn fetch_external_metadata(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            let e = VideoError::Validation("Please enter a YouTube URL".to_string());
            return self.notify_failure(&e, "Error fetching YouTube data");
        }

        let _busy = MetadataBusy::start(&self.dispatch);
        let request = VideoPayload {
            id: self.metadata_lookup_id,
            name: String::new(),
            views: 0,
            likes: 0,
            youtube_url: None,
        }
        .with_youtube_url(url);

        debug!("Fetching YouTube metadata for {}", url);
        match self.api.put_video(&request).await {
            Ok(video) => {
                self.dispatch.emit(VideoAction::MetadataFetched(video));
                self.notify_success("YouTube data fetched successfully");
            }
            Err(e) => self.notify_failure(&e, "Error fetching YouTube data"),
        }
    }

    fn notify_success(&self, message: &str) {
        self.dispatch
            .emit(VideoAction::Notify(ToastKind::Success, message.to_string()));
    }

    fn notify_failure(&self, error: &VideoError, fallback: &str) {
        warn!("{}: {}", fallback, error);
        self.dispatch.emit(VideoAction::Notify(
            ToastKind::Error,
            error.user_message(fallback),
        ));
    }
}
