use api::Collection;
use dioxus::prelude::*;

use ui::ConsoleProvider;
use views::{Admin, Browse, Home, Layout, NotFound, Profile};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/browse/:collection")]
        Browse { collection: Collection },
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: ui::MAIN_CSS }

        ConsoleProvider {
            Router::<Route> {}
        }
    }
}
