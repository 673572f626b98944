use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no question in a modal. Dismissing the overlay counts as "no".
#[component]
pub fn ConfirmDialog(message: String, on_answer: EventHandler<bool>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_answer.call(false),
            div {
                class: "modal-body",
                p { "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn",
                        onclick: move |_| on_answer.call(false),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| on_answer.call(true),
                        "Delete"
                    }
                }
            }
        }
    }
}
