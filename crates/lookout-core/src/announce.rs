use std::path::Path;

use serde::Deserialize;

use crate::dismissal::DismissalLog;

/// One entry of the agent's notice feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    /// Plain-text body; a notice without one links to `url` instead.
    #[serde(default)]
    pub body: Option<String>,
    /// External page to open in the system browser.
    #[serde(default)]
    pub url: Option<String>,
    /// Show even when the id is already in the dismissal log.
    #[serde(default)]
    pub force: bool,
}

/// Read the notice feed. A missing or malformed feed is an empty feed.
pub fn load_feed(path: &Path) -> Vec<Notice> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str(&content) {
        Ok(feed) => feed,
        Err(e) => {
            tracing::warn!("malformed notice feed {}: {e}", path.display());
            Vec::new()
        }
    }
}

/// First notice that should be shown given the dismissal log.
pub fn next_unseen<'a>(feed: &'a [Notice], log: &DismissalLog) -> Option<&'a Notice> {
    feed.iter().find(|n| n.force || !log.has_been_shown(&n.id))
}
