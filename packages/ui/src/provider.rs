//! Console context and hooks for the UI.

use dioxus::prelude::*;

use crate::activity_log::ActivityLog;
use crate::console::ConsoleState;
use crate::platform::{make_console, AppConsole};

/// The console driver shared by every view.
pub fn use_console() -> AppConsole {
    use_context::<AppConsole>()
}

/// The console state. Updates on login, logout, collection switch and loads.
pub fn use_console_state() -> Signal<ConsoleState> {
    use_context::<Signal<ConsoleState>>()
}

/// Provider component that owns the console, its state and the activity log.
/// Wrap your app with this component.
#[component]
pub fn ConsoleProvider(children: Element) -> Element {
    let console = use_hook(make_console);
    let restored = console.clone();
    let state = use_signal(move || restored.restore());
    let log = use_signal(ActivityLog::default);

    use_context_provider(|| console);
    use_context_provider(|| state);
    use_context_provider(|| log);

    rsx! {
        {children}
    }
}
