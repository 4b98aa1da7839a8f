use dioxus::prelude::*;

use crate::components::AppHeader;
use crate::routes::Route;

/// Fallback page for paths outside the route table.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "Unknown route");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            AppHeader {}
            section { class: "not-found-card",
                span { class: "not-found-code", "404" }
                h1 { "Página não encontrada" }
                p {
                    "Não existe nada em "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Home {}, class: "not-found-link", "Voltar para home" }
            }
        }
    }
}
