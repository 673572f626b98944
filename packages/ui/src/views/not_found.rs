use dioxus::prelude::*;

#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            button {
                class: "btn btn-primary",
                onclick: move |_| on_home.call(()),
                "Back to home"
            }
        }
    }
}
