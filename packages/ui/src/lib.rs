//! This crate contains the admin console and all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod console;
pub use console::{Console, ConsoleState, Phase, Workspace, DELETE_PROMPT, LOGIN_FAILED};

pub mod content;
pub use content::render_rich_content;

mod platform;
pub use platform::{make_console, AppConsole, PlatformStore};

mod provider;
pub use provider::{use_console, use_console_state, ConsoleProvider};

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod activity_log;
pub use activity_log::{
    log_activity, log_collection_activity, use_activity_log, ActivityLog, LogLevel,
};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};
