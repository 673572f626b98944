use api::Collection;
use dioxus::prelude::*;

use crate::provider::use_console;
use crate::views::Section;

/// Read-only list of one public collection.
#[component]
pub fn PublicListView(collection: Collection) -> Element {
    // Track the route param in a signal so the resource re-runs on navigation
    let mut collection_signal = use_signal(|| collection);
    if *collection_signal.peek() != collection {
        collection_signal.set(collection);
    }

    let api = use_console().api().clone();
    let items = use_resource(move || {
        let api = api.clone();
        let collection = collection_signal();
        async move { api.public_list(collection, None).await }
    });

    rsx! {
        div {
            class: "public-list",
            Section {
                title: collection.label().to_string(),
                items: items.read_unchecked().clone(),
            }
        }
    }
}
