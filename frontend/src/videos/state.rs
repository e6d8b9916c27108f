//! Page state for the video manager.
//!
//! [`VideoState`] is the single container for the local mirror of the
//! backend (`videos`) and every piece of UI state around it: the create form,
//! the edit dialog, the search text, the metadata busy flag and the toasts.
//! It is only changed through [`VideoAction`]s, so the same transitions run
//! under Yew's `use_reducer` and in plain unit tests.
//!
//! `videos` only changes on actions that carry a server response
//! (`Loaded`, `Added`, `Updated`, `Removed`). Nothing is applied
//! optimistically.

use crate::models::{VideoPayload, VideoRecord};
use crate::videos::error::{Result, VideoError};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Id,
    Name,
    Views,
    Likes,
}

/// Raw text of the four record inputs, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoForm {
    pub id: String,
    pub name: String,
    pub views: String,
    pub likes: String,
}

impl VideoForm {
    pub fn from_record(record: &VideoRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            views: record.views.to_string(),
            likes: record.likes.to_string(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Name => &self.name,
            FormField::Views => &self.views,
            FormField::Likes => &self.likes,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Id => self.id = value,
            FormField::Name => self.name = value,
            FormField::Views => self.views = value,
            FormField::Likes => self.likes = value,
        }
    }

    pub fn to_payload(&self) -> Result<VideoPayload> {
        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| {
                VideoError::Validation("Please enter a numeric video ID".to_string())
            })?;

        Ok(VideoPayload {
            id,
            name: self.name.clone(),
            views: parse_count(&self.views, "Views")?,
            likes: parse_count(&self.likes, "Likes")?,
            youtube_url: None,
        })
    }
}

fn parse_count(raw: &str, label: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        VideoError::Validation(format!("{} must be a non-negative whole number", label))
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDialog {
    pub visible: bool,
    pub form: VideoForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VideoAction {
    /// Initial fetch answered; the list becomes exactly this record.
    Loaded(VideoRecord),
    Added(VideoRecord),
    Updated(VideoRecord),
    Removed(i64),
    OpenEdit(i64),
    CloseEdit,
    FormInput(FormField, String),
    EditFormInput(FormField, String),
    YoutubeUrlInput(String),
    ClearForm,
    /// Copies name and counters into the create form; the list is untouched.
    MetadataFetched(VideoRecord),
    SearchInput(String),
    SetFetchingMetadata(bool),
    Notify(ToastKind, String),
    FadeToast(u32),
    DismissToast(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoState {
    pub videos: Vec<VideoRecord>,
    pub form: VideoForm,
    pub youtube_url: String,
    pub edit: EditDialog,
    pub search: String,
    pub fetching_metadata: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u32,
}

impl VideoState {
    /// Records whose name contains `filter`, ignoring case, in list order.
    pub fn render(&self, filter: &str) -> Vec<&VideoRecord> {
        let needle = filter.to_lowercase();
        self.videos
            .iter()
            .filter(|video| video.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn visible_videos(&self) -> Vec<&VideoRecord> {
        self.render(&self.search)
    }

    pub fn find(&self, id: i64) -> Option<&VideoRecord> {
        self.videos.iter().find(|video| video.id == id)
    }

    pub fn apply(&mut self, action: VideoAction) {
        match action {
            VideoAction::Loaded(record) => {
                self.videos = vec![record];
            }
            VideoAction::Added(record) => {
                // A second create for the same id replaces the first answer.
                match self.videos.iter_mut().find(|video| video.id == record.id) {
                    Some(existing) => *existing = record,
                    None => self.videos.push(record),
                }
            }
            VideoAction::Updated(record) => {
                let existing = self.videos.iter_mut().find(|video| video.id == record.id);
                if let Some(existing) = existing {
                    *existing = record;
                }
            }
            VideoAction::Removed(id) => {
                self.videos.retain(|video| video.id != id);
            }
            VideoAction::OpenEdit(id) => {
                if let Some(form) = self.find(id).map(VideoForm::from_record) {
                    self.edit = EditDialog {
                        visible: true,
                        form,
                    };
                }
            }
            VideoAction::CloseEdit => {
                self.edit = EditDialog::default();
            }
            VideoAction::FormInput(field, value) => self.form.set(field, value),
            VideoAction::EditFormInput(field, value) => self.edit.form.set(field, value),
            VideoAction::YoutubeUrlInput(url) => self.youtube_url = url,
            VideoAction::ClearForm => {
                self.form = VideoForm::default();
                self.youtube_url.clear();
            }
            VideoAction::MetadataFetched(record) => {
                self.form.name = record.name;
                self.form.views = record.views.to_string();
                self.form.likes = record.likes.to_string();
            }
            VideoAction::SearchInput(search) => self.search = search,
            VideoAction::SetFetchingMetadata(busy) => self.fetching_metadata = busy,
            VideoAction::Notify(kind, message) => {
                self.next_toast_id = self.next_toast_id.wrapping_add(1);
                self.toasts.push(Toast {
                    id: self.next_toast_id,
                    message,
                    kind,
                    fading: false,
                });
            }
            VideoAction::FadeToast(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
                    toast.fading = true;
                }
            }
            VideoAction::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
    }
}

impl Reducible for VideoState {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str, views: u64, likes: u64) -> VideoRecord {
        VideoRecord {
            id,
            name: name.to_string(),
            views,
            likes,
        }
    }

    fn state_with(videos: Vec<VideoRecord>) -> VideoState {
        VideoState {
            videos,
            ..VideoState::default()
        }
    }

    #[test]
    fn render_filters_case_insensitively_and_keeps_order() {
        let state = state_with(vec![
            record(1, "Rust Basics", 10, 1),
            record(2, "Cooking", 5, 0),
            record(3, "Advanced RUST", 7, 3),
        ]);

        let ids: Vec<i64> = state.render("rust").iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(state.render("").len(), 3);
        assert!(state.render("xyz").is_empty());
        assert_eq!(state.render("rust"), state.render("rust"));
    }

    #[test]
    fn visible_videos_follow_search_text() {
        let mut state = state_with(vec![record(1, "Demo", 10, 2), record(2, "Other", 0, 0)]);
        state.apply(VideoAction::SearchInput("DEM".to_string()));
        let ids: Vec<i64> = state.visible_videos().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn loaded_replaces_the_list() {
        let mut state = state_with(vec![record(9, "Old", 0, 0)]);
        state.apply(VideoAction::Loaded(record(1, "Demo", 10, 2)));
        assert_eq!(state.videos, vec![record(1, "Demo", 10, 2)]);
    }

    #[test]
    fn added_appends_and_keeps_ids_unique() {
        let mut state = state_with(vec![record(1, "Demo", 10, 2)]);
        state.apply(VideoAction::Added(record(5, "Five", 0, 0)));
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.videos[1], record(5, "Five", 0, 0));

        state.apply(VideoAction::Added(record(5, "Five again", 3, 1)));
        assert_eq!(state.videos.len(), 2);
        assert_eq!(state.find(5), Some(&record(5, "Five again", 3, 1)));
    }

    #[test]
    fn updated_replaces_only_the_matching_record() {
        let mut state = state_with(vec![record(1, "A", 1, 1), record(2, "B", 2, 2)]);
        state.apply(VideoAction::Updated(record(2, "B2", 20, 5)));
        assert_eq!(
            state.videos,
            vec![record(1, "A", 1, 1), record(2, "B2", 20, 5)]
        );

        state.apply(VideoAction::Updated(record(7, "Ghost", 0, 0)));
        assert_eq!(state.videos.len(), 2);
    }

    #[test]
    fn removed_keeps_the_rest_in_order() {
        let mut state = state_with(vec![
            record(1, "A", 1, 1),
            record(2, "B", 2, 2),
            record(3, "C", 3, 3),
        ]);
        state.apply(VideoAction::Removed(2));
        assert_eq!(
            state.videos,
            vec![record(1, "A", 1, 1), record(3, "C", 3, 3)]
        );
    }

    #[test]
    fn open_edit_fills_dialog_from_record() {
        let mut state = state_with(vec![record(4, "Clip", 12, 3)]);
        state.apply(VideoAction::OpenEdit(4));
        assert!(state.edit.visible);
        assert_eq!(state.edit.form.id, "4");
        assert_eq!(state.edit.form.name, "Clip");
        assert_eq!(state.edit.form.views, "12");
        assert_eq!(state.edit.form.likes, "3");
    }

    #[test]
    fn open_edit_for_unknown_id_changes_nothing() {
        let mut state = state_with(vec![record(4, "Clip", 12, 3)]);
        state.apply(VideoAction::OpenEdit(99));
        assert_eq!(state.edit, EditDialog::default());

        state.apply(VideoAction::OpenEdit(4));
        state.apply(VideoAction::EditFormInput(
            FormField::Name,
            "Draft".to_string(),
        ));
        let open = state.edit.clone();
        state.apply(VideoAction::OpenEdit(99));
        assert_eq!(state.edit, open);
    }

    #[test]
    fn close_edit_discards_unsaved_input() {
        let mut state = state_with(vec![record(4, "Clip", 12, 3)]);
        state.apply(VideoAction::OpenEdit(4));
        state.apply(VideoAction::EditFormInput(
            FormField::Views,
            "500".to_string(),
        ));
        state.apply(VideoAction::CloseEdit);
        assert!(!state.edit.visible);
        assert_eq!(state.edit.form, VideoForm::default());
        assert_eq!(state.videos[0].views, 12);
    }

    #[test]
    fn metadata_fills_create_form_only() {
        let mut state = state_with(vec![record(1, "Demo", 10, 2)]);
        state.apply(VideoAction::FormInput(FormField::Id, "8".to_string()));
        let fetched = record(1, "Never Gonna", 1000, 50);
        state.apply(VideoAction::MetadataFetched(fetched));

        assert_eq!(state.form.id, "8");
        assert_eq!(state.form.name, "Never Gonna");
        assert_eq!(state.form.views, "1000");
        assert_eq!(state.form.likes, "50");
        assert_eq!(state.videos, vec![record(1, "Demo", 10, 2)]);
    }

    #[test]
    fn clear_form_resets_fields_and_url() {
        let mut state = VideoState::default();
        state.apply(VideoAction::FormInput(FormField::Name, "x".to_string()));
        let url = "https://youtu.be/abc".to_string();
        state.apply(VideoAction::YoutubeUrlInput(url));
        state.apply(VideoAction::ClearForm);
        assert_eq!(state.form, VideoForm::default());
        assert!(state.youtube_url.is_empty());
    }

    #[test]
    fn toasts_get_fresh_ids_and_fade_before_dismissal() {
        let mut state = VideoState::default();
        state.apply(VideoAction::Notify(ToastKind::Success, "one".to_string()));
        state.apply(VideoAction::Notify(ToastKind::Error, "two".to_string()));
        let first = state.toasts[0].id;
        assert_ne!(first, state.toasts[1].id);

        state.apply(VideoAction::FadeToast(first));
        assert!(state.toasts[0].fading);
        assert!(!state.toasts[1].fading);

        state.apply(VideoAction::DismissToast(first));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "two");
    }

    #[test]
    fn form_parses_into_payload() {
        let form = VideoForm {
            id: " 2 ".to_string(),
            name: "New".to_string(),
            views: "0".to_string(),
            likes: "7".to_string(),
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.id, 2);
        assert_eq!(payload.name, "New");
        assert_eq!(payload.likes, 7);
        assert_eq!(payload.youtube_url, None);
    }

    #[test]
    fn form_rejects_bad_numbers() {
        let mut form = VideoForm {
            id: "abc".to_string(),
            name: "x".to_string(),
            views: "1".to_string(),
            likes: "1".to_string(),
        };
        assert!(matches!(form.to_payload(), Err(VideoError::Validation(_))));

        form.id = "3".to_string();
        form.views = "-4".to_string();
        assert_eq!(
            form.to_payload(),
            Err(VideoError::Validation(
                "Views must be a non-negative whole number".to_string()
            ))
        );
    }
}
