mod api;
mod components;
mod dom;
mod forms;
mod geolocation;
mod leaflet;
mod pages;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/place/:query")]
    Place { query: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::explorer::Explorer { initial_query: None::<String> }
    }
}

#[component]
fn Place(query: String) -> Element {
    rsx! {
        pages::explorer::Explorer { initial_query: Some(query) }
    }
}

const CSS: Asset = asset!("/assets/main.css");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
