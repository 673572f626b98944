use dioxus::prelude::*;

/// Failure message with an optional retry action.
#[component]
pub fn ErrorBanner(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span { class: "error-banner-text", "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-small",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "btn btn-small btn-ghost",
                    title: "Dismiss",
                    onclick: move |_| dismiss.call(()),
                    "×"
                }
            }
        }
    }
}
