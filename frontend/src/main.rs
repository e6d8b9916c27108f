mod env_variable_utils;
mod models;
mod router;
mod utils;
mod videos;

use crate::env_variable_utils::CONFIG;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Installed before CONFIG is read so lookup warnings reach the console.
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Failed to install logger: {e}").into());
    }
    log::set_max_level(CONFIG.log_level());

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.backend_url,
        CONFIG.debug_mode
    );

    yew::Renderer::<App>::new().render();
}
