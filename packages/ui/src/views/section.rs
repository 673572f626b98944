use api::{ApiError, Record};
use dioxus::prelude::*;

use crate::content::{excerpt, render_rich_content};

/// One public item: image, title, date and sanitized body.
#[component]
pub fn ItemCard(record: Record, #[props(default)] compact: bool) -> Element {
    let title = record.display_name().to_string();
    let body = record
        .content
        .as_deref()
        .map(|c| {
            if compact {
                format!("<p>{}</p>", excerpt(c, 160))
            } else {
                render_rich_content(c)
            }
        })
        .unwrap_or_default();

    rsx! {
        article {
            class: if compact { "item-card compact" } else { "item-card" },
            if let Some(src) = record.image_url.clone() {
                img { class: "item-card-image", src, alt: "{title}" }
            }
            div {
                class: "item-card-body",
                h3 { "{title}" }
                if let Some(date) = record.date.clone() {
                    time { class: "item-card-date", "{date}" }
                }
                if !body.is_empty() {
                    div { class: "rich-content", dangerous_inner_html: body }
                }
            }
        }
    }
}

/// A titled block of items with loading and failure states.
#[component]
pub fn Section(
    title: String,
    items: Option<Result<Vec<Record>, ApiError>>,
    #[props(default)] compact: bool,
) -> Element {
    rsx! {
        section {
            class: "public-section",
            h2 { "{title}" }
            match items {
                None => rsx! { p { class: "muted", "Loading..." } },
                Some(Err(e)) => rsx! { p { class: "error-text", "Could not load: {e}" } },
                Some(Ok(list)) if list.is_empty() => rsx! { p { class: "muted", "Nothing published yet." } },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "item-grid",
                        for (index, record) in list.into_iter().enumerate() {
                            ItemCard { key: "{index}", record, compact }
                        }
                    }
                },
            }
        }
    }
}
