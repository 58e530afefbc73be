use std::path::PathBuf;

use crate::consts::{APP_DIR, DISMISSALS_FILE};
use crate::error::Result;

/// Persistent record of notice identifiers the user has already dismissed.
///
/// Backed by a single JSON array on disk. Storage trouble is never surfaced:
/// an unreadable or corrupt file reads as an empty log, and a failed write
/// leaves the in-memory log authoritative for the rest of the session.
pub struct DismissalLog {
    path: PathBuf,
    shown: Vec<String>,
}

impl DismissalLog {
    /// Open the log at `path`, falling back to empty on any read problem.
    pub fn open(path: PathBuf) -> Self {
        let shown = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!("corrupt dismissal log {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, shown }
    }

    /// Open the log at its well-known location.
    pub fn open_default() -> Self {
        let path = Self::default_path().unwrap_or_else(|| PathBuf::from(DISMISSALS_FILE));
        Self::open(path)
    }

    /// The well-known location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(DISMISSALS_FILE))
    }

    /// Identifiers in the order they were first dismissed.
    pub fn shown(&self) -> &[String] {
        &self.shown
    }

    pub fn has_been_shown(&self, id: &str) -> bool {
        self.shown.iter().any(|s| s == id)
    }

    /// Record `id`, once. Re-recording a known id changes nothing.
    pub fn mark_shown(&mut self, id: &str) {
        if self.has_been_shown(id) {
            return;
        }
        self.shown.push(id.to_string());
        if let Err(e) = self.save() {
            tracing::warn!(
                "could not persist dismissal log {}: {e}",
                self.path.display()
            );
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(&self.shown)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
