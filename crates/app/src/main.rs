use dioxus::prelude::*;
use services::Services;
use shared_types::AppConfig;

mod components;
mod routes;
mod tasks;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: AppConfig = services::config::app_config().clone();
    let services = use_context_provider(|| Services::from_config(&config));
    use_context_provider(|| config);

    use_hook(move || {
        tracing::info!(
            api = %services.api.base_url(),
            "Ecoleta client started"
        );
    });

    rsx! {
        document::Title { "Ecoleta" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
