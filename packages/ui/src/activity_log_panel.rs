use api::Collection;
use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogLevel};

fn level_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "activity-log-entry error",
        LogLevel::Warning => "activity-log-entry warning",
        LogLevel::Success => "activity-log-entry success",
        LogLevel::Info => "activity-log-entry info",
    }
}

/// Console activity, filterable by collection.
///
/// When the latest thing that happened to `active` was a failure, the panel
/// offers `on_retry` for it.
#[component]
pub fn ActivityLogPanel(active: Option<Collection>, on_retry: EventHandler<()>) -> Element {
    let mut log = use_activity_log();

    if !log.read().visible {
        return rsx! {};
    }

    let (shown, collections, filter, failing) = {
        let log = log.read();
        let failing = active.and_then(|c| log.unresolved_error(c).map(|e| (c, e.message.clone())));
        (log.shown(), log.collections(), log.filter, failing)
    };

    rsx! {
        aside {
            class: "activity-log-panel",
            div {
                class: "activity-log-header",
                span { "Console activity" }
                div {
                    class: "activity-log-header-actions",
                    button {
                        onclick: move |_| {
                            let mut log = log.write();
                            log.entries.clear();
                            log.filter = None;
                        },
                        "Clear"
                    }
                    button {
                        onclick: move |_| log.write().visible = false,
                        "Close"
                    }
                }
            }
            if !collections.is_empty() {
                div {
                    class: "activity-log-filters",
                    button {
                        class: if filter.is_none() { "chip active" } else { "chip" },
                        onclick: move |_| log.write().filter = None,
                        "All"
                    }
                    for (collection, errors) in collections {
                        button {
                            key: "{collection.id()}",
                            class: if filter == Some(collection) { "chip active" } else { "chip" },
                            onclick: move |_| log.write().filter = Some(collection),
                            "{collection.label()}"
                            if errors > 0 {
                                span { class: "chip-count", "{errors}" }
                            }
                        }
                    }
                }
            }
            if let Some((collection, message)) = failing {
                div {
                    class: "activity-log-retry",
                    span { "{collection.label()} failed: {message}" }
                    button {
                        class: "btn btn-small",
                        onclick: move |_| on_retry.call(()),
                        "Retry"
                    }
                }
            }
            div {
                class: "activity-log-entries",
                if shown.is_empty() {
                    p { class: "activity-log-empty", "Nothing yet." }
                }
                for (index, entry) in shown.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: level_class(entry.level),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        if let Some(collection) = entry.collection {
                            span { class: "activity-log-collection", " [{collection.id()}]" }
                        }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button opening the panel; shows the error count when there is one.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let errors = log.read().errors();

    rsx! {
        button {
            class: if errors > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            title: "Console activity",
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            if errors > 0 {
                "Activity ({errors} failed)"
            } else {
                "Activity"
            }
        }
    }
}
