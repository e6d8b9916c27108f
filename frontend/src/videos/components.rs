use crate::models::VideoRecord;
use crate::utils::format_number;
use crate::videos::state::{EditDialog, FormField, Toast, ToastKind, VideoForm};
use crate::videos::youtube::extract_video_id;
use std::future::Future;
use std::time::Duration;
use web_sys::HtmlInputElement;
use yew::platform::time::sleep;
use yew::prelude::*;

pub const TOAST_VISIBLE: Duration = Duration::from_millis(3000);
pub const TOAST_FADE: Duration = Duration::from_millis(300);

const INPUT_CLASS: &str =
    "w-full p-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500";

#[derive(Properties, PartialEq)]
pub struct RecordFieldsProps {
    pub form: VideoForm,
    pub on_input: Callback<(FormField, String)>,
    #[prop_or_default]
    pub id_readonly: bool,
}

/// The id/name/views/likes inputs shared by the create form and the dialog.
#[function_component(RecordFields)]
pub fn record_fields(props: &RecordFieldsProps) -> Html {
    let input = |field: FormField, label: &'static str, input_type: &'static str| {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit((field, value));
        });
        let readonly = props.id_readonly && field == FormField::Id;

        html! {
            <div class="mb-4">
                <label class="block text-gray-700 text-sm font-bold mb-2">{label}</label>
                <input
                    type={input_type}
                    class={INPUT_CLASS}
                    value={props.form.field(field).to_string()}
                    oninput={oninput}
                    readonly={readonly}
                    required=true
                />
            </div>
        }
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-x-4">
            { input(FormField::Id, "Video ID", "number") }
            { input(FormField::Name, "Name", "text") }
            { input(FormField::Views, "Views", "number") }
            { input(FormField::Likes, "Likes", "number") }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoFormPanelProps {
    pub form: VideoForm,
    pub youtube_url: String,
    pub fetching: bool,
    pub on_input: Callback<(FormField, String)>,
    pub on_url_input: Callback<String>,
    pub on_fetch: Callback<()>,
    pub on_submit: Callback<()>,
}

#[function_component(VideoFormPanel)]
pub fn video_form_panel(props: &VideoFormPanelProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_url_input = {
        let on_url_input = props.on_url_input.clone();
        Callback::from(move |e: InputEvent| {
            on_url_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_fetch = {
        let on_fetch = props.on_fetch.clone();
        Callback::from(move |_: MouseEvent| on_fetch.emit(()))
    };

    let url_hint = if props.youtube_url.trim().is_empty() {
        html! {}
    } else {
        match extract_video_id(&props.youtube_url) {
            Some(video_id) => html! {
                <p class="text-xs text-green-700 mt-1">{format!("Recognised video {video_id}")}</p>
            },
            None => html! {
                <p class="text-xs text-gray-500 mt-1">{"Not a recognised YouTube link"}</p>
            },
        }
    };

    html! {
        <form onsubmit={on_submit} class="mb-6 bg-gray-50 p-4 rounded-lg">
            <h2 class="text-lg font-semibold text-gray-800 mb-4">{"Add Video"}</h2>
            <div class="mb-4">
                <label class="block text-gray-700 text-sm font-bold mb-2">{"YouTube URL"}</label>
                <div class="flex gap-2">
                    <input
                        type="url"
                        class={INPUT_CLASS}
                        placeholder="Enter YouTube URL..."
                        value={props.youtube_url.clone()}
                        oninput={on_url_input}
                    />
                    <button
                        type="button"
                        onclick={on_fetch}
                        disabled={props.fetching}
                        class="bg-red-600 text-white px-4 rounded hover:bg-red-700 disabled:opacity-50 whitespace-nowrap"
                    >
                        if props.fetching {
                            <span class="inline-block w-4 h-4 mr-2 align-middle border-2 border-white border-t-transparent rounded-full animate-spin"></span>
                            {"Fetching..."}
                        } else {
                            {"Fetch"}
                        }
                    </button>
                </div>
                { url_hint }
            </div>
            <RecordFields form={props.form.clone()} on_input={props.on_input.clone()} />
            <button
                type="submit"
                class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700"
            >
                {"Add Video"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: String,
    pub on_input: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            on_input.emit(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    html! {
        <input
            type="search"
            class={classes!(INPUT_CLASS, "mb-4")}
            placeholder="Search videos..."
            value={props.value.clone()}
            oninput={on_input}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: VideoRecord,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let id = props.video.id;
    let on_edit = props.on_edit.reform(move |_: MouseEvent| id);
    let on_delete = props.on_delete.reform(move |_: MouseEvent| id);

    html! {
        <div class="bg-gray-100 rounded-lg p-4 flex flex-col gap-3">
            <h3 class="text-lg font-semibold text-gray-800 truncate">{&props.video.name}</h3>
            <div class="flex gap-4 text-sm text-gray-600">
                <span>{"👁️ "}{format_number(props.video.views)}</span>
                <span>{"👍 "}{format_number(props.video.likes)}</span>
            </div>
            <div class="flex gap-2">
                <button onclick={on_edit} class="px-3 py-1 text-sm bg-blue-600 text-white rounded hover:bg-blue-700">
                    {"Edit"}
                </button>
                <button onclick={on_delete} class="px-3 py-1 text-sm bg-red-600 text-white rounded hover:bg-red-700">
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoListProps {
    pub videos: Vec<VideoRecord>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(VideoList)]
pub fn video_list(props: &VideoListProps) -> Html {
    if props.videos.is_empty() {
        return html! {
            <p class="text-center text-gray-500">{"No videos found."}</p>
        };
    }

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            { for props.videos.iter().map(|video| html! {
                <VideoCard
                    key={video.id}
                    video={video.clone()}
                    on_edit={props.on_edit.clone()}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
    pub dialog: EditDialog,
    pub on_input: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(EditModal)]
pub fn edit_modal(props: &EditModalProps) -> Html {
    if !props.dialog.visible {
        return html! {};
    }

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    // Clicks inside the panel must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center p-4 z-40"
            onclick={on_close.clone()}
        >
            <div class="bg-white rounded-lg shadow-lg p-8 w-full max-w-lg" onclick={keep_open}>
                <div class="flex justify-between items-center mb-6">
                    <h2 class="text-2xl font-semibold text-gray-800">{"Edit Video"}</h2>
                    <button onclick={on_close} class="text-gray-500 hover:text-gray-800 text-2xl">
                        {"×"}
                    </button>
                </div>
                <form onsubmit={on_submit}>
                    <RecordFields
                        form={props.dialog.form.clone()}
                        on_input={props.on_input.clone()}
                        id_readonly=true
                    />
                    <button
                        type="submit"
                        class="w-full bg-blue-600 text-white p-3 rounded hover:bg-blue-700"
                    >
                        {"Save Changes"}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Fades toast `id` after [`TOAST_VISIBLE`] and dismisses it [`TOAST_FADE`] later.
pub async fn toast_timeline<S, F>(
    id: u32,
    on_fade: Callback<u32>,
    on_dismiss: Callback<u32>,
    sleep: S,
) where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    sleep(TOAST_VISIBLE).await;
    on_fade.emit(id);
    sleep(TOAST_FADE).await;
    on_dismiss.emit(id);
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub on_fade: Callback<u32>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
pub fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_fade = props.on_fade.clone();
        let on_dismiss = props.on_dismiss.clone();

        use_effect_with(props.toast.id, move |id| {
            yew::platform::spawn_local(toast_timeline(*id, on_fade, on_dismiss, sleep));
            || ()
        });
    }

    let color = match props.toast.kind {
        ToastKind::Success => "bg-green-600",
        ToastKind::Error => "bg-red-600",
    };
    let opacity = if props.toast.fading {
        "opacity-0"
    } else {
        "opacity-100"
    };

    html! {
        <div class={classes!("text-white", "px-4", "py-3", "rounded", "shadow-lg", "transition-opacity", "duration-300", color, opacity)}>
            { &props.toast.message }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_fade: Callback<u32>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="fixed bottom-4 right-4 flex flex-col gap-2 z-50">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_fade={props.on_fade.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::sleep as tokio_sleep;

    #[tokio::test(start_paused = true)]
    async fn toast_fades_at_three_seconds_and_leaves_after_the_fade() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let on_fade = {
            let events = events.clone();
            Callback::from(move |id: u32| events.borrow_mut().push(("fade", id)))
        };
        let on_dismiss = {
            let events = events.clone();
            Callback::from(move |id: u32| events.borrow_mut().push(("dismiss", id)))
        };

        let checks = async {
            tokio_sleep(Duration::from_millis(2999)).await;
            assert!(events.borrow().is_empty());

            tokio_sleep(Duration::from_millis(2)).await;
            assert_eq!(*events.borrow(), vec![("fade", 7)]);

            tokio_sleep(Duration::from_millis(298)).await;
            assert_eq!(*events.borrow(), vec![("fade", 7)]);

            tokio_sleep(Duration::from_millis(2)).await;
            assert_eq!(*events.borrow(), vec![("fade", 7), ("dismiss", 7)]);
        };

        tokio::join!(
            toast_timeline(7, on_fade, on_dismiss, tokio_sleep),
            checks
        );
    }
}
