use api::Collection;
use dioxus::prelude::*;

use crate::provider::use_console;
use crate::views::Section;

/// How many of the latest news and announcements the landing page shows.
pub const HOME_ITEMS: usize = 6;

/// Landing page. News and announcements load independently.
#[component]
pub fn HomeView() -> Element {
    let api = use_console().api().clone();

    let news_api = api.clone();
    let news = use_resource(move || {
        let api = news_api.clone();
        async move { api.public_list(Collection::NewsArticle, Some(HOME_ITEMS)).await }
    });
    let announcements = use_resource(move || {
        let api = api.clone();
        async move { api.public_list(Collection::Announcement, Some(HOME_ITEMS)).await }
    });

    rsx! {
        div {
            class: "home",
            header {
                class: "hero",
                h1 { "Welcome" }
                p { "News, announcements and everything else happening at school." }
            }
            Section {
                title: Collection::NewsArticle.label().to_string(),
                items: news.read_unchecked().clone(),
                compact: true,
            }
            Section {
                title: Collection::Announcement.label().to_string(),
                items: announcements.read_unchecked().clone(),
                compact: true,
            }
        }
    }
}
