use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogIn;
use dioxus_free_icons::Icon;

use crate::components::AppHeader;
use crate::routes::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            AppHeader {}
            main { class: "home-content",
                h1 { "Seu marketplace de coleta de resíduos." }
                p { "Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente." }
                Link { to: Route::CreatePoint {}, class: "home-cta",
                    span { class: "home-cta-icon",
                        Icon::<LdLogIn> { icon: LdLogIn, width: 20, height: 20 }
                    }
                    strong { "Cadastre um ponto de coleta" }
                }
            }
        }
    }
}
