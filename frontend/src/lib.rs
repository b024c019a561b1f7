use log::info;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::components::server_settings::ServerSettings;
use crate::components::status_panel::StatusPanel;
use crate::config::ApiConfig;

pub mod api;
pub mod components;
pub mod config;

#[function_component(App)]
pub fn app() -> Html {
    // Composition root: the one place the config is constructed. Everything
    // below reaches it through context.
    let config = use_memo((), |_| ApiConfig::from_build_env());

    html! {
        <ContextProvider<ApiConfig> context={(*config).clone()}>
            <main class={classes!("container", "mx-auto", "max-w-xl", "p-4")}>
                <h1 class={classes!("text-xl", "font-bold")}>{"Pulse"}</h1>
                <StatusPanel />
                if config.is_embedded_shell() {
                    <ServerSettings />
                }
            </main>
        </ContextProvider<ApiConfig>>
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();

    Ok(())
}

// Start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        run_app().await.expect("Failed to run app");
    });
    Ok(())
}
