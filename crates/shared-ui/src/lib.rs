//! Reusable Dioxus components for the Ecoleta web client.

pub mod components;

pub use components::*;
