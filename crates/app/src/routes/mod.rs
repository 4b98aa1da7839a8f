pub mod create_point;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use create_point::CreatePoint;
use home::Home;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/create-point")]
    CreatePoint {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
