use log::error;
use shared::dto::status::StatusResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::config::ApiConfig;

/// Liveness panel: probes `GET /status` on mount and again whenever the
/// configured base URL changes, rendering the server's version and uptime
/// or the error it failed with.
#[function_component(StatusPanel)]
pub fn status_panel() -> Html {
    let config = use_context::<ApiConfig>().expect("StatusPanel rendered without ApiConfig context");
    let probe = use_state(|| None::<Result<StatusResponse, String>>);
    let base_url = use_state_eq(|| config.base_url());

    // Track the config so a settings change triggers a fresh probe.
    {
        let base_url = base_url.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            let subscription = config.subscribe(move |url| base_url.set(url.to_string()));
            move || drop(subscription)
        });
    }

    {
        let probe = probe.clone();
        let config = config.clone();
        use_effect_with((*base_url).clone(), move |_| {
            probe.set(None);
            let client = ApiClient::new(config);
            spawn_local(async move {
                match client.status().await {
                    Ok(status) => probe.set(Some(Ok(status))),
                    Err(e) => {
                        error!("Status probe failed: {}", e);
                        probe.set(Some(Err(e.to_string())));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*probe {
        None => html! {
            <p class={classes!("text-gray-500")}>{"Checking server..."}</p>
        },
        Some(Err(message)) => html! {
            <p class={classes!("text-red-600")}>
                {format!("Server unreachable: {}", message)}
            </p>
        },
        Some(Ok(status)) => html! {
            <dl class={classes!("grid", "grid-cols-2", "gap-1")}>
                <dt class={classes!("font-medium")}>{"Status"}</dt>
                <dd>{status.status.clone()}</dd>
                <dt class={classes!("font-medium")}>{"Version"}</dt>
                <dd>{status.version.clone()}</dd>
                <dt class={classes!("font-medium")}>{"Uptime"}</dt>
                <dd>{format!("{}s", status.uptime_seconds)}</dd>
            </dl>
        },
    };

    html! {
        <section class={classes!("rounded", "border", "p-4", "my-4")}>
            <h2 class={classes!("font-bold", "mb-2")}>{"Server"}</h2>
            <p class={classes!("text-xs", "text-gray-400", "font-mono")}>{(*base_url).clone()}</p>
            {body}
        </section>
    }
}
