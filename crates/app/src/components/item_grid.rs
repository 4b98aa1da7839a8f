use dioxus::prelude::*;
use shared_types::Item;

/// Toggleable grid of collectable item kinds.
///
/// Each tile reports its id through `on_toggle`; the parent owns the
/// selection and passes it back as `selected`.
#[component]
pub fn ItemGrid(
    items: Vec<Item>,
    selected: Vec<i64>,
    on_toggle: EventHandler<i64>,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./item_grid.css") }
        ul { class: "items-grid", "aria-invalid": error.is_some(),
            for item in items {
                li {
                    key: "{item.id}",
                    class: if selected.contains(&item.id) { "item-tile selected" } else { "item-tile" },
                    role: "button",
                    "aria-pressed": selected.contains(&item.id),
                    onclick: {
                        let id = item.id;
                        move |_| on_toggle.call(id)
                    },
                    img { src: "{item.image_url}", alt: "{item.title}" }
                    span { "{item.title}" }
                }
            }
        }
        if let Some(err) = &error {
            span { class: "field-error", "{err}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                title: "Lâmpadas".into(),
                image_url: "http://localhost:3333/uploads/lampadas.svg".into(),
            },
            Item {
                id: 2,
                title: "Pilhas e Baterias".into(),
                image_url: "http://localhost:3333/uploads/baterias.svg".into(),
            },
        ]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_one_tile_per_item_in_order() {
        fn app() -> Element {
            rsx! {
                ItemGrid { items: catalog(), selected: Vec::new(), on_toggle: move |_| {} }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.find("Lâmpadas").unwrap() < html.find("Pilhas e Baterias").unwrap());
        assert!(html.contains("http://localhost:3333/uploads/baterias.svg"));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn selected_tiles_are_marked() {
        fn app() -> Element {
            rsx! {
                ItemGrid { items: catalog(), selected: vec![2i64], on_toggle: move |_| {} }
            }
        }

        let html = render(app);
        assert_eq!(html.matches("item-tile selected").count(), 1);
        let marked = html.find("item-tile selected").unwrap();
        assert!(marked > html.find("Lâmpadas").unwrap());
    }

    #[test]
    fn error_is_shown_below_grid() {
        fn app() -> Element {
            rsx! {
                ItemGrid {
                    items: catalog(),
                    selected: Vec::new(),
                    on_toggle: move |_| {},
                    error: Some("Selecione ao menos um item".to_string()),
                }
            }
        }

        assert!(render(app).contains("Selecione ao menos um item"));
    }
}
