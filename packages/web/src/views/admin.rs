use dioxus::prelude::*;

use ui::views::AdminView;

use crate::Route;

/// Admin console. Logging out returns to the landing page.
#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();

    rsx! {
        AdminView {
            on_logged_out: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
