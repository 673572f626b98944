//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each entry
//! as a small file. It is used by native builds so a session survives app
//! restarts the same way browser localStorage does on the web.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token        # file containing the value for key "token"
//! └── email
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/sekolah/session/` |
//! | Linux | `~/.local/share/sekolah/session/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\sekolah\session\` |

use std::path::{Path, PathBuf};

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Keys are flat names; anything that could escape the base directory is
    /// rejected.
    fn entry_path(&self, key: &str) -> Option<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        valid.then(|| self.base.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)?).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(path) = self.entry_path(key) else {
            return;
        };
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        if let Some(path) = self.entry_path(key) {
            let _ = std::fs::remove_file(path);
        }
    }
}
