mod component;
pub mod projection;

pub use component::*;
