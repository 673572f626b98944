//! The administrator console view.
//!
//! All transitions go through [`ConsoleState`]; this module only wires
//! buttons to them and runs the resulting requests with [`use_console`].

use api::{ApiError, Collection, Field, Record, RecordId};
use dioxus::prelude::*;

use crate::activity_log::{
    log_activity, log_collection_activity, use_activity_log, ActivityLog, LogLevel,
};
use crate::activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
use crate::console::{ConsoleState, SubmitRequest, DELETE_PROMPT};
use crate::content::excerpt;
use crate::platform::{scroll_to_top, AppConsole};
use crate::provider::{use_console, use_console_state};
use crate::views::{ConfirmDialog, ErrorBanner};

/// Load the active collection's list and apply it, unless it went stale.
async fn reload(
    console: AppConsole,
    mut state: Signal<ConsoleState>,
    mut log: Signal<ActivityLog>,
) {
    let Some(request) = state.write().list_request() else {
        return;
    };
    let collection = request.collection;
    let loaded = console.load(request).await;
    let outcome = match &loaded.result {
        Ok(list) => (LogLevel::Success, format!("Loaded {} entries", list.len())),
        Err(e) => (LogLevel::Error, format!("Loading {}: {e}", collection.label())),
    };
    if state.write().apply_list(loaded) {
        log_collection_activity(&mut log, outcome.0, collection, &outcome.1);
    }
}

/// Shared admin console.
///
/// Shows the login form while logged out, the collection workspace
/// otherwise. `on_logged_out` lets the platform navigate back to the
/// landing page.
#[component]
pub fn AdminView(on_logged_out: EventHandler<()>) -> Element {
    let console = use_console();
    let state = use_console_state();
    let log = use_activity_log();

    // Reload whenever the active collection changes or a session starts
    let fetch_key = use_memo(move || state.read().fetch_key());
    use_effect(move || {
        if fetch_key().is_some() {
            spawn(reload(console.clone(), state, log));
        }
    });

    if state.read().is_logged_in() {
        rsx! {
            div {
                class: "console",
                ConsoleHeader { on_logged_out }
                CollectionTabs {}
                ConsoleErrors {}
                div {
                    class: "console-body",
                    EntryForm {}
                    EntryList {}
                }
                DeletePrompt {}
            }
        }
    } else {
        rsx! {
            LoginForm {}
        }
    }
}

#[component]
fn LoginForm() -> Element {
    let console = use_console();
    let mut state = use_console_state();
    let mut log = use_activity_log();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let notice = state.read().notice.clone();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let console = console.clone();
        let address = email();
        spawn(async move {
            submitting.set(true);
            match console.login(&address).await {
                Ok(credential) => {
                    log_activity(
                        &mut log,
                        LogLevel::Success,
                        &format!("Signed in as {}", credential.email),
                    );
                    state.write().logged_in(credential);
                }
                Err(e) => {
                    let message = match &e {
                        ApiError::Remote { status, body } => format!("Login refused ({status}): {body}"),
                        other => format!("Login failed: {other}"),
                    };
                    log_activity(&mut log, LogLevel::Warning, &message);
                    state.write().login_failed();
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "login-card",
            h2 { "Administrator sign-in" }
            form {
                onsubmit: onsubmit,
                input {
                    r#type: "email",
                    placeholder: "Email address",
                    required: true,
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
            if let Some(notice) = notice {
                p { class: "login-notice", "{notice}" }
            }
        }
    }
}

#[component]
fn ConsoleHeader(on_logged_out: EventHandler<()>) -> Element {
    let console = use_console();
    let mut state = use_console_state();
    let mut log = use_activity_log();

    let identity = state.read().identity().unwrap_or_default().to_string();
    let active = state.read().fetch_key();
    let retry_console = console.clone();

    let logout = move |_| {
        let console = console.clone();
        spawn(async move {
            let credential = state.read().logout_request();
            console.logout(credential).await;
            state.write().logged_out();
            log_activity(&mut log, LogLevel::Info, "Signed out");
            on_logged_out.call(());
        });
    };

    rsx! {
        div {
            class: "console-header",
            div {
                h2 { "Content console" }
                span { class: "console-identity", "{identity}" }
            }
            div {
                class: "console-header-actions",
                ActivityLogToggle {}
                button {
                    class: "btn",
                    onclick: logout,
                    "Log out"
                }
            }
        }
        ActivityLogPanel {
            active,
            on_retry: move |_| {
                spawn(reload(retry_console.clone(), state, log));
            },
        }
    }
}

#[component]
fn CollectionTabs() -> Element {
    let mut state = use_console_state();
    let active = state.read().fetch_key();

    rsx! {
        nav {
            class: "collection-tabs",
            for collection in Collection::ALL {
                button {
                    key: "{collection.id()}",
                    class: if Some(collection) == active { "tab active" } else { "tab" },
                    onclick: move |_| {
                        state.write().switch_collection(collection);
                    },
                    "{collection.label()}"
                }
            }
        }
    }
}

#[component]
fn ConsoleErrors() -> Element {
    let console = use_console();
    let mut state = use_console_state();
    let log = use_activity_log();

    let error = state.read().workspace().and_then(|ws| ws.error.clone());
    let Some(message) = error else {
        return rsx! {};
    };

    rsx! {
        ErrorBanner {
            message,
            on_retry: move |_| {
                spawn(reload(console.clone(), state, log));
            },
            on_dismiss: move |_| state.write().dismiss_error(),
        }
    }
}

#[component]
fn EntryForm() -> Element {
    let console = use_console();
    let mut state = use_console_state();
    let mut log = use_activity_log();

    let (draft, saving, collection) = match state.read().workspace() {
        Some(ws) => (ws.draft.clone(), ws.saving, ws.active),
        None => return rsx! {},
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let console = console.clone();
        spawn(async move {
            let Some(request) = state.write().submit_request() else {
                return;
            };
            let verb = match &request {
                SubmitRequest::Create { .. } => "Created",
                SubmitRequest::Update { .. } => "Updated",
            };
            let collection = request.collection();
            let label = collection.label();
            let done = console.submit(request).await;
            match &done.result {
                Ok(()) => log_collection_activity(
                    &mut log,
                    LogLevel::Success,
                    collection,
                    &format!("{verb} entry in {label}"),
                ),
                Err(e) => log_collection_activity(
                    &mut log,
                    LogLevel::Error,
                    collection,
                    &format!("Saving to {label}: {e}"),
                ),
            }
            if state.write().apply_submit(done) {
                reload(console, state, log).await;
            }
        });
    };

    let heading = match &draft.id {
        Some(_) => format!("Edit \"{}\"", draft.display_name()),
        None => format!("New entry in {}", collection.label()),
    };

    rsx! {
        form {
            class: "entry-form",
            onsubmit: onsubmit,
            h3 { "{heading}" }
            if draft.is_empty() {
                p { class: "entry-form-hint", "Add a new entry or pick an item to edit." }
            }
            for field in Field::ALL {
                FieldInput { key: "{field.key()}", field, value: field.get(&draft).unwrap_or_default().to_string() }
            }
            div {
                class: "entry-form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving,
                    if saving { "Saving..." } else if draft.is_draft() { "Create" } else { "Save changes" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| state.write().reset_draft(),
                    "Reset"
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field, value: String) -> Element {
    let mut state = use_console_state();

    if field.is_long_text() {
        rsx! {
            label {
                class: "field",
                span { "{field.placeholder()}" }
                textarea {
                    rows: 8,
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| state.write().set_field(field, evt.value()),
                }
            }
        }
    } else {
        rsx! {
            label {
                class: "field",
                span { "{field.placeholder()}" }
                input {
                    r#type: "text",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| state.write().set_field(field, evt.value()),
                }
            }
        }
    }
}

#[component]
fn EntryList() -> Element {
    let mut state = use_console_state();

    let (list, loading) = match state.read().workspace() {
        Some(ws) => (ws.list.clone(), ws.loading),
        None => return rsx! {},
    };

    rsx! {
        div {
            class: "entry-list",
            if loading {
                p { class: "entry-list-loading", "Loading..." }
            } else if list.is_empty() {
                p { class: "entry-list-empty", "No entries yet." }
            }
            for (index, record) in list.into_iter().enumerate() {
                EntryCard { key: "{index}", record }
            }
        }
    }
}

/// Thumbnail and clamped body text shown on a list card.
fn card_preview(record: &Record) -> (Option<String>, Option<String>) {
    let image = record.image_url.clone().filter(|src| !src.trim().is_empty());
    let preview = record
        .content
        .as_deref()
        .map(|c| excerpt(c, 120))
        .filter(|p| !p.is_empty());
    (image, preview)
}

#[component]
fn EntryCard(record: Record) -> Element {
    let mut state = use_console_state();
    let name = record.display_name().to_string();
    let meta = [Field::Category, Field::Date]
        .iter()
        .filter_map(|f| f.get(&record))
        .collect::<Vec<_>>()
        .join(" · ");
    let id: Option<RecordId> = record.id.clone();
    let (image, preview) = card_preview(&record);

    rsx! {
        div {
            class: "entry-card",
            if let Some(src) = image {
                img { class: "entry-card-image", src, alt: "{name}" }
            }
            div {
                class: "entry-card-text",
                strong { "{name}" }
                if !meta.is_empty() {
                    span { class: "entry-card-meta", "{meta}" }
                }
                if let Some(preview) = preview {
                    p { class: "entry-card-excerpt", dangerous_inner_html: preview }
                }
            }
            div {
                class: "entry-card-actions",
                button {
                    class: "btn btn-small",
                    onclick: move |_| {
                        state.write().begin_edit(record.clone());
                        scroll_to_top();
                    },
                    "Edit"
                }
                if let Some(id) = id {
                    button {
                        class: "btn btn-small btn-danger",
                        onclick: move |_| state.write().request_delete(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn DeletePrompt() -> Element {
    let console = use_console();
    let mut state = use_console_state();
    let mut log = use_activity_log();

    let pending = state
        .read()
        .workspace()
        .is_some_and(|ws| ws.pending_delete.is_some());
    if !pending {
        return rsx! {};
    }

    let answer = move |affirmative: bool| {
        let Some(request) = state.write().confirm_delete(affirmative) else {
            return;
        };
        let console = console.clone();
        spawn(async move {
            let collection = request.collection;
            let label = collection.label();
            let done = console.delete(request).await;
            match &done.result {
                Ok(()) => log_collection_activity(
                    &mut log,
                    LogLevel::Success,
                    collection,
                    &format!("Deleted entry from {label}"),
                ),
                Err(e) => log_collection_activity(
                    &mut log,
                    LogLevel::Error,
                    collection,
                    &format!("Deleting from {label}: {e}"),
                ),
            }
            if state.write().apply_delete(done) {
                reload(console, state, log).await;
            }
        });
    };

    rsx! {
        ConfirmDialog {
            message: DELETE_PROMPT.to_string(),
            on_answer: answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_preview_shows_image_and_short_body() {
        let mut record = Record::default();
        record.image_url = Some("/media/sports-day.jpg".into());
        record.content = Some(format!("<p>Sports day <b>results</b></p>{}", " lorem".repeat(40)));

        let (image, preview) = card_preview(&record);
        assert_eq!(image.as_deref(), Some("/media/sports-day.jpg"));
        let preview = preview.unwrap();
        assert!(preview.starts_with("Sports day results lorem"));
        assert!(preview.ends_with('…'));
        assert!(!preview.contains('<'));
    }

    #[test]
    fn test_card_preview_skips_missing_parts() {
        let mut record = Record::default();
        record.image_url = Some("  ".into());
        record.content = Some("<p></p>".into());
        assert_eq!(card_preview(&record), (None, None));
    }
}
