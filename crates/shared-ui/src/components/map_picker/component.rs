use dioxus::prelude::*;
use shared_types::LatLng;

use super::projection::{tile_url, Viewport};

pub const MAP_WIDTH: f64 = 600.0;
pub const MAP_HEIGHT: f64 = 350.0;

const MIN_ZOOM: u8 = 3;
const MAX_ZOOM: u8 = 19;

/// A click-to-pick map over raster tiles.
///
/// Each click reports the coordinate under the cursor through `on_pick`;
/// the parent owns the picked position and passes it back as `marker`.
#[component]
pub fn MapPicker(
    center: LatLng,
    #[props(default = 15)] zoom: u8,
    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders.
    tile_template: String,
    #[props(default)] marker: Option<LatLng>,
    on_pick: EventHandler<LatLng>,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut zoom_level = use_signal(|| zoom.clamp(MIN_ZOOM, MAX_ZOOM));

    let viewport = Viewport::new(center, zoom_level(), MAP_WIDTH, MAP_HEIGHT);
    let tiles = viewport.tiles();
    let marker_point = marker.map(|m| viewport.latlng_to_point(m));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "map-picker",
            div {
                class: "map-viewport",
                style: "width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px;",
                "aria-invalid": error.is_some(),
                onclick: move |evt: MouseEvent| {
                    // Children ignore pointer events, so offsets are relative to the viewport.
                    let point = evt.element_coordinates();
                    if let Some(position) = viewport.point_to_latlng(point.x, point.y) {
                        on_pick.call(position);
                    }
                },
                for tile in tiles {
                    img {
                        key: "{tile.x}-{tile.y}-{tile.left}",
                        class: "map-tile",
                        src: tile_url(&tile_template, viewport.zoom, tile.x, tile.y),
                        style: "left: {tile.left}px; top: {tile.top}px;",
                        draggable: "false",
                        alt: "",
                    }
                }
                if let Some((x, y)) = marker_point {
                    div {
                        class: "map-marker",
                        style: "left: {x}px; top: {y}px;",
                    }
                }
                div {
                    class: "map-zoom",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    button {
                        r#type: "button",
                        disabled: zoom_level() >= MAX_ZOOM,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            zoom_level.set((zoom_level() + 1).min(MAX_ZOOM));
                        },
                        "+"
                    }
                    button {
                        r#type: "button",
                        disabled: zoom_level() <= MIN_ZOOM,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            zoom_level.set(zoom_level().saturating_sub(1).max(MIN_ZOOM));
                        },
                        "−"
                    }
                }
                span { class: "map-attribution", "© OpenStreetMap contributors" }
            }
            if let Some(err) = &error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
