use api::{ApiError, ProfilePage, Record};
use dioxus::prelude::*;

use crate::content::render_rich_content;
use crate::provider::use_console;

/// School profile: the four fixed static pages, each fetched on its own.
#[component]
pub fn ProfileView() -> Element {
    rsx! {
        div {
            class: "profile",
            h1 { "School profile" }
            for page in ProfilePage::ALL {
                ProfileSection { key: "{page.key()}", page }
            }
        }
    }
}

#[component]
fn ProfileSection(page: ProfilePage) -> Element {
    let api = use_console().api().clone();
    let content = use_resource(move || {
        let api = api.clone();
        async move { api.public_page(page.key()).await }
    });

    let body: Option<Result<Record, ApiError>> = content.read_unchecked().clone();

    rsx! {
        section {
            class: "profile-section",
            id: "{page.key()}",
            h2 { "{page.label()}" }
            match body {
                None => rsx! { p { class: "muted", "Loading..." } },
                Some(Err(e)) => rsx! { p { class: "error-text", "Could not load: {e}" } },
                Some(Ok(record)) => {
                    let html = render_rich_content(record.content.as_deref().unwrap_or_default());
                    rsx! {
                        if let Some(src) = record.image_url.clone() {
                            img { class: "profile-image", src, alt: "{page.label()}" }
                        }
                        div { class: "rich-content", dangerous_inner_html: html }
                    }
                }
            }
        }
    }
}
