use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;

use crate::routes::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Page header with the Ecoleta logo. `back_link` adds a link home.
#[component]
pub fn AppHeader(#[props(default = false)] back_link: bool) -> Element {
    rsx! {
        header { class: "app-header",
            img { class: "app-logo", src: LOGO, alt: "Ecoleta" }
            if back_link {
                Link { to: Route::Home {}, class: "app-header-back",
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                    "Voltar para home"
                }
            }
        }
    }
}
