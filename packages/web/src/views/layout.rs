use api::Collection;
use dioxus::prelude::*;

use ui::icons::{FaHouse, FaLock, FaSchool};
use ui::{use_console_state, Icon};

use crate::Route;

/// Site chrome shared by every public page and the console.
#[component]
pub fn Layout() -> Element {
    let state = use_console_state();
    let signed_in = state.read().is_logged_in();

    rsx! {
        header {
            class: "site-header",
            nav {
                class: "site-nav",
                Link {
                    class: "brand",
                    to: Route::Home {},
                    Icon { width: 18, height: 18, fill: "currentColor", icon: FaHouse }
                    span { "Home" }
                }
                Link {
                    to: Route::Profile {},
                    Icon { width: 18, height: 18, fill: "currentColor", icon: FaSchool }
                    span { "Profile" }
                }
                for collection in Collection::public() {
                    Link {
                        key: "{collection.id()}",
                        to: Route::Browse { collection },
                        "{collection.label()}"
                    }
                }
                Link {
                    class: if signed_in { "admin-link signed-in" } else { "admin-link" },
                    to: Route::Admin {},
                    Icon { width: 16, height: 16, fill: "currentColor", icon: FaLock }
                    span { "Admin" }
                }
            }
        }
        main {
            class: "site-main",
            Outlet::<Route> {}
        }
    }
}
