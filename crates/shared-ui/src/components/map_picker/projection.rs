//! Web Mercator math for a slippy map of 256 px raster tiles.

use shared_types::LatLng;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude bound of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Width and height in pixels of the whole world at `zoom`.
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2f64.powi(i32::from(zoom))
}

/// Project a coordinate to world pixels at `zoom`.
pub fn project(latitude: f64, longitude: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

/// Inverse of [`project`]. Longitude wraps around the antimeridian and
/// latitude is clamped to the Mercator bounds.
pub fn unproject(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let longitude = wrap_longitude(x / size * 360.0 - 180.0);
    let y = y.clamp(0.0, size);
    let latitude = (PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees();
    (latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE), longitude)
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        longitude
    } else {
        (longitude + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Fill a `{z}/{x}/{y}` tile URL template.
pub fn tile_url(template: &str, zoom: u8, x: u32, y: u32) -> String {
    template
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

/// One tile to draw, positioned relative to the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub left: f64,
    pub top: f64,
}

/// A fixed-size window onto the map, centered on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
    center_x: f64,
    center_y: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8, width: f64, height: f64) -> Self {
        let (center_x, center_y) = project(center.latitude(), center.longitude(), zoom);
        Self {
            zoom,
            width,
            height,
            center_x,
            center_y,
        }
    }

    /// World pixel at the viewport's top-left corner.
    fn origin(&self) -> (f64, f64) {
        (
            self.center_x - self.width / 2.0,
            self.center_y - self.height / 2.0,
        )
    }

    /// Coordinate under a point given in viewport pixels.
    pub fn point_to_latlng(&self, x: f64, y: f64) -> Option<LatLng> {
        let (ox, oy) = self.origin();
        let (latitude, longitude) = unproject(ox + x, oy + y, self.zoom);
        LatLng::new(latitude, longitude).ok()
    }

    /// Viewport pixel of a coordinate. May fall outside the viewport.
    pub fn latlng_to_point(&self, position: LatLng) -> (f64, f64) {
        let (ox, oy) = self.origin();
        let (x, y) = project(position.latitude(), position.longitude(), self.zoom);
        (x - ox, y - oy)
    }

    /// Tiles covering the viewport. Rows beyond the poles are skipped and
    /// columns wrap around the antimeridian.
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let (ox, oy) = self.origin();
        let count = 1i64 << self.zoom;
        let first_x = (ox / TILE_SIZE).floor() as i64;
        let last_x = ((ox + self.width) / TILE_SIZE).floor() as i64;
        let first_y = (oy / TILE_SIZE).floor() as i64;
        let last_y = ((oy + self.height) / TILE_SIZE).floor() as i64;

        let mut tiles = Vec::new();
        for ty in first_y..=last_y {
            if ty < 0 || ty >= count {
                continue;
            }
            for tx in first_x..=last_x {
                tiles.push(TilePlacement {
                    x: tx.rem_euclid(count) as u32,
                    y: ty as u32,
                    left: tx as f64 * TILE_SIZE - ox,
                    top: ty as f64 * TILE_SIZE - oy,
                });
            }
        }
        tiles
    }
}
