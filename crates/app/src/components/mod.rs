pub mod app_header;
pub mod item_grid;

pub use app_header::AppHeader;
pub use item_grid::ItemGrid;
