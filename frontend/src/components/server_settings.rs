use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::ApiConfig;

/// Base-URL editor shown when running inside the desktop shell, where the
/// user may point the UI at a remote server instead of the local one. The
/// value is applied verbatim; the store performs no validation.
#[function_component(ServerSettings)]
pub fn server_settings() -> Html {
    let config = use_context::<ApiConfig>()
        .expect("ServerSettings rendered without ApiConfig context");
    let draft = use_state(|| config.base_url());

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let config = config.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("Switching API server to {}", *draft);
            config.set_base_url((*draft).clone());
        })
    };

    html! {
        <form {onsubmit} class={classes!("flex", "gap-2", "items-end", "my-4")}>
            <label class={classes!("flex-1")}>
                <span class={classes!("block", "text-sm", "font-medium")}>{"API server"}</span>
                <input
                    type="text"
                    class={classes!("w-full", "rounded", "border", "px-2", "py-1", "font-mono")}
                    value={(*draft).clone()}
                    {oninput}
                />
            </label>
            <button
                type="submit"
                class={classes!("rounded", "border", "px-3", "py-1")}
            >
                {"Apply"}
            </button>
        </form>
    }
}
