pub mod config;
pub mod error;
pub mod form;
pub mod item;
pub mod point;

pub use config::*;
pub use error::*;
pub use form::*;
pub use item::*;
pub use point::*;
