use crate::env_variable_utils::CONFIG;
use crate::videos::api::HttpVideoApi;
use crate::videos::components::{EditModal, SearchBar, ToastStack, VideoFormPanel, VideoList};
use crate::videos::controller::VideoController;
use crate::videos::state::{FormField, VideoAction, VideoState};
use yew::prelude::*;

pub mod api;
pub mod components;
pub mod controller;
pub mod error;
pub mod state;
pub mod youtube;

#[function_component(VideoManagerPage)]
pub fn video_manager_page() -> Html {
    let state = use_reducer(VideoState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: VideoAction| dispatcher.dispatch(action))
    };

    let controller = {
        let dispatch = dispatch.clone();
        use_memo((), move |_| {
            VideoController::new(HttpVideoApi::new(&CONFIG.backend_url), dispatch, &CONFIG)
        })
    };

    // Load the initial record on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                controller.fetch_initial().await;
            });
            || ()
        });
    }

    let on_create = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let form = state.form.clone();
            let youtube_url = state.youtube_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.create(&form, &youtube_url).await;
            });
        })
    };

    let on_update = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let form = state.edit.form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.update(&form).await;
            });
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: i64| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.remove(id).await;
            });
        })
    };

    let on_fetch_metadata = {
        let controller = controller.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let youtube_url = state.youtube_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.fetch_external_metadata(&youtube_url).await;
            });
        })
    };

    let on_form_input =
        dispatch.reform(|(field, value): (FormField, String)| VideoAction::FormInput(field, value));
    let on_edit_input = dispatch
        .reform(|(field, value): (FormField, String)| VideoAction::EditFormInput(field, value));
    let on_url_input = dispatch.reform(VideoAction::YoutubeUrlInput);
    let on_search = dispatch.reform(VideoAction::SearchInput);
    let on_edit = dispatch.reform(VideoAction::OpenEdit);
    let on_close_edit = dispatch.reform(|_: ()| VideoAction::CloseEdit);
    let on_fade = dispatch.reform(VideoAction::FadeToast);
    let on_dismiss = dispatch.reform(VideoAction::DismissToast);

    let visible: Vec<_> = state.visible_videos().into_iter().cloned().collect();

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-4xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-3xl font-bold text-center text-gray-800 mb-6">
                        {&CONFIG.app_name}
                    </h1>

                    <VideoFormPanel
                        form={state.form.clone()}
                        youtube_url={state.youtube_url.clone()}
                        fetching={state.fetching_metadata}
                        on_input={on_form_input}
                        on_url_input={on_url_input}
                        on_fetch={on_fetch_metadata}
                        on_submit={on_create}
                    />

                    <SearchBar value={state.search.clone()} on_input={on_search} />

                    <VideoList videos={visible} on_edit={on_edit} on_delete={on_delete} />
                </div>
            </div>

            <EditModal
                dialog={state.edit.clone()}
                on_input={on_edit_input}
                on_submit={on_update}
                on_close={on_close_edit}
            />

            <ToastStack toasts={state.toasts.clone()} on_fade={on_fade} on_dismiss={on_dismiss} />
        </div>
    }
}
