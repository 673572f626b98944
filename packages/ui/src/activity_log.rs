use api::Collection;
use dioxus::prelude::*;

/// Entries beyond this are dropped oldest-first.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    /// Collection the entry is about; `None` for session events.
    pub collection: Option<Collection>,
    pub message: String,
}

/// In-app record of console activity (logins, loads, saves, deletes).
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    /// Only show entries for this collection.
    pub filter: Option<Collection>,
}

impl ActivityLog {
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    /// Entries passing the current filter, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| self.filter.is_none() || e.collection == self.filter)
            .cloned()
            .collect()
    }

    /// Collections that have entries, in registry order, with their error count.
    pub fn collections(&self) -> Vec<(Collection, usize)> {
        Collection::ALL
            .into_iter()
            .filter_map(|c| {
                let mut seen = false;
                let mut errors = 0;
                for entry in self.entries.iter().filter(|e| e.collection == Some(c)) {
                    seen = true;
                    if entry.level == LogLevel::Error {
                        errors += 1;
                    }
                }
                seen.then_some((c, errors))
            })
            .collect()
    }

    pub fn errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }

    /// Latest failure for `collection`, if nothing succeeded after it.
    pub fn unresolved_error(&self, collection: Collection) -> Option<&LogEntry> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.collection == Some(collection) && e.level != LogLevel::Info)
            .filter(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Log a session-level event.
pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    push(log, level, None, message);
}

/// Log an event about one collection.
pub fn log_collection_activity(
    log: &mut Signal<ActivityLog>,
    level: LogLevel,
    collection: Collection,
    message: &str,
) {
    push(log, level, Some(collection), message);
}

fn push(log: &mut Signal<ActivityLog>, level: LogLevel, collection: Option<Collection>, message: &str) {
    match level {
        LogLevel::Error => tracing::error!(collection = ?collection, "{}", message),
        LogLevel::Warning => tracing::warn!(collection = ?collection, "{}", message),
        LogLevel::Info | LogLevel::Success => tracing::info!(collection = ?collection, "{}", message),
    }
    log.write().record(LogEntry {
        timestamp: current_time(),
        level,
        collection,
        message: message.to_string(),
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
