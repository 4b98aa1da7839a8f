use dioxus::prelude::*;

/// A form wrapper that always prevents the browser's default submission.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            {children}
        }
    }
}

/// A titled group of fields, with an optional hint next to the title.
#[component]
pub fn Fieldset(
    title: String,
    #[props(default)] hint: String,
    children: Element,
) -> Element {
    rsx! {
        fieldset { class: "fieldset",
            legend {
                h2 { "{title}" }
                if !hint.is_empty() {
                    span { "{hint}" }
                }
            }
            {children}
        }
    }
}

/// Lays out fields side by side.
#[component]
pub fn FieldGroup(children: Element) -> Element {
    rsx! {
        div { class: "field-group", {children} }
    }
}
