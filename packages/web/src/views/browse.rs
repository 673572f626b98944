use api::Collection;
use dioxus::prelude::*;

use ui::views::{NotFoundView, PublicListView};

use crate::Route;

/// Public list for one collection. Non-public collections are not browsable.
#[component]
pub fn Browse(collection: Collection) -> Element {
    let nav = use_navigator();

    if !collection.is_public() {
        tracing::warn!(collection = %collection, "refusing to browse non-public collection");
        return rsx! {
            NotFoundView {
                path: format!("browse/{}", collection.id()),
                on_home: move |_| {
                    nav.push(Route::Home {});
                },
            }
        };
    }

    rsx! {
        PublicListView { collection }
    }
}
