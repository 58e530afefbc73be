use std::path::{Path, PathBuf};

/// The screenshot as it currently exists in the session directory.
///
/// The agent replaces the file in place; every replacement bumps `revision`,
/// which is how the rest of the app tells "same path, new image" apart from
/// "nothing changed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub revision: u64,
    /// Image shown in the dashboard.
    pub display_path: PathBuf,
    /// Full-resolution variant, when the agent provides one.
    pub full_res_path: Option<PathBuf>,
}

impl SourceImage {
    /// Path the viewer opens: the full-resolution variant when present.
    pub fn viewer_path(&self) -> &Path {
        self.full_res_path.as_deref().unwrap_or(&self.display_path)
    }
}

/// Keeps the click-to-open handler attached to whichever screenshot revision
/// is current.
///
/// `rebind` may be called as often as change notifications arrive; it is
/// idempotent and tolerates an absent source.
#[derive(Debug, Default)]
pub struct SourceBinding {
    bound_revision: Option<u64>,
}

impl SourceBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-resolve the current source and (re)install the handler.
    ///
    /// Returns true when a new binding was installed, false when the source
    /// is absent or the existing binding already covers it.
    pub fn rebind(&mut self, current: Option<&SourceImage>) -> bool {
        match current {
            None => {
                self.bound_revision = None;
                false
            }
            Some(source) => {
                if self.bound_revision == Some(source.revision) {
                    false
                } else {
                    self.bound_revision = Some(source.revision);
                    true
                }
            }
        }
    }

    /// Whether a click on `source` should open the viewer.
    pub fn is_bound_to(&self, source: &SourceImage) -> bool {
        self.bound_revision == Some(source.revision)
    }

    pub fn is_bound(&self) -> bool {
        self.bound_revision.is_some()
    }
}
