use dioxus::prelude::*;

/// A labelled text input with an optional inline error.
///
/// `name` doubles as the element id so the label can target it.
#[component]
pub fn Input(
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", r#for: "{name}", "{label}" }
            }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
