use dioxus::prelude::*;

/// A native select over a list of string options with a "nothing chosen"
/// placeholder.
///
/// The placeholder option carries an empty value. `onchange` receives `None`
/// when it is picked and `Some(option)` otherwise.
#[component]
pub fn FormSelect(
    name: String,
    /// Options in display order; each is both value and label.
    options: Vec<String>,
    /// Currently selected option.
    #[props(default)]
    value: Option<String>,
    /// Label of the placeholder option.
    #[props(default)]
    placeholder: String,
    #[props(default)]
    onchange: Option<EventHandler<Option<String>>>,
    #[props(default)]
    label: String,
    #[props(default)]
    error: Option<String>,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    let selected = value.unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            if !label.is_empty() {
                label { class: "field-label", r#for: "{name}", "{label}" }
            }
            select {
                class: "form-select",
                id: "{name}",
                name: "{name}",
                value: "{selected}",
                disabled: disabled,
                "aria-invalid": error.is_some(),
                onchange: move |evt: FormEvent| {
                    if let Some(handler) = &onchange {
                        handler.call(selection_from_value(&evt.value()));
                    }
                },
                option { value: "", selected: selected.is_empty(), "{placeholder}" }
                for opt in options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == selected,
                        "{opt}"
                    }
                }
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

/// Map a raw `<select>` value to a selection; the empty placeholder is `None`.
pub fn selection_from_value(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_value_is_no_selection() {
        assert_eq!(selection_from_value(""), None);
        assert_eq!(selection_from_value("SP"), Some("SP".to_string()));
    }

    #[test]
    fn zero_is_a_real_value() {
        assert_eq!(selection_from_value("0"), Some("0".to_string()));
    }
}
