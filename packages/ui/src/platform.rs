//! Platform wiring for the console.
//!
//! Picks the [`store::KeyValueStore`] the session lives in:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::LocalStore`]
//! - **Desktop / native**: one file per key under `<data_dir>/sekolah/session/`
//! - **WASM without `web`**: in-memory only

use api::{ApiClient, HttpTransport};
use store::SessionStore;

use crate::console::Console;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// The console as the frontends run it.
pub type AppConsole = Console<HttpTransport, PlatformStore>;

fn platform_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("sekolah")
            .join("session");
        store::FileStore::new(base)
    }
}

/// Build the console from the environment (`BACKEND_URL`, `REQUEST_TIMEOUT_SECS`).
pub fn make_console() -> AppConsole {
    let api = ApiClient::from_env();
    tracing::debug!(base_url = %api.config().base_url, "console configured");
    Console::new(api, SessionStore::new(platform_store()))
}

/// Scroll the page back to the top, where the console form lives.
pub fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
