use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::binding::SourceImage;
use crate::consts::{
    HEARTBEAT_FILE, HEARTBEAT_STALE_SECS, NOTICES_FILE, SCREENSHOT_FILE, SCREENSHOT_FULL_FILE,
};
use crate::error::Result;

/// Well-known files inside an agent session directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    root: PathBuf,
}

impl SessionPaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn screenshot(&self) -> PathBuf {
        self.root.join(SCREENSHOT_FILE)
    }

    pub fn screenshot_full(&self) -> PathBuf {
        self.root.join(SCREENSHOT_FULL_FILE)
    }

    pub fn heartbeat(&self) -> PathBuf {
        self.root.join(HEARTBEAT_FILE)
    }

    pub fn notices(&self) -> PathBuf {
        self.root.join(NOTICES_FILE)
    }
}

/// A decoded screenshot, ready for texture upload.
pub struct LoadedImage {
    pub width: usize,
    pub height: usize,
    /// RGBA8, row-major.
    pub rgba: Vec<u8>,
}

/// Decode a screenshot from disk.
pub fn load_screenshot(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width: width as usize,
        height: height as usize,
        rgba: img.into_raw(),
    })
}

/// Structural changes observed in the session directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The screenshot was created or replaced.
    ScreenshotChanged(SourceImage),
    /// The screenshot disappeared.
    ScreenshotRemoved,
    /// The heartbeat went stale or missing.
    ConnectionLost,
    /// The heartbeat is fresh again.
    ConnectionRestored,
    /// The notice feed was created or replaced.
    FeedChanged(PathBuf),
}

/// Polls a session directory and reports edge-triggered [`SessionEvent`]s.
///
/// Notifications may batch arbitrarily; consumers must treat every event as
/// "re-resolve the current state", not as a precise delta.
pub struct SessionWatcher {
    paths: SessionPaths,
    screenshot_mtime: Option<SystemTime>,
    feed_mtime: Option<SystemTime>,
    revision: u64,
    /// `None` until the first poll has judged the heartbeat, so a fresh
    /// watcher always reports the state it finds.
    alive: Option<bool>,
}

impl SessionWatcher {
    pub fn new(root: PathBuf) -> Self {
        Self {
            paths: SessionPaths::new(root),
            screenshot_mtime: None,
            feed_mtime: None,
            revision: 0,
            alive: None,
        }
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    /// Poll with the current wall clock.
    pub fn poll(&mut self) -> Vec<SessionEvent> {
        self.poll_at(SystemTime::now())
    }

    /// Poll, judging heartbeat staleness against `now`.
    pub fn poll_at(&mut self, now: SystemTime) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.poll_screenshot(&mut events);
        self.poll_heartbeat(now, &mut events);
        self.poll_feed(&mut events);
        events
    }

    fn poll_screenshot(&mut self, events: &mut Vec<SessionEvent>) {
        let path = self.paths.screenshot();
        match (self.screenshot_mtime, file_mtime(&path)) {
            (previous, Some(current)) if previous != Some(current) => {
                self.screenshot_mtime = Some(current);
                self.revision += 1;
                let full = self.paths.screenshot_full();
                events.push(SessionEvent::ScreenshotChanged(SourceImage {
                    revision: self.revision,
                    display_path: path,
                    full_res_path: full.exists().then_some(full),
                }));
            }
            (Some(_), None) => {
                self.screenshot_mtime = None;
                events.push(SessionEvent::ScreenshotRemoved);
            }
            _ => {}
        }
    }

    fn poll_heartbeat(&mut self, now: SystemTime, events: &mut Vec<SessionEvent>) {
        let alive = match file_mtime(&self.paths.heartbeat()) {
            Some(mtime) => {
                // A clock-skewed future mtime counts as fresh.
                let age = now.duration_since(mtime).unwrap_or(Duration::ZERO);
                age <= Duration::from_secs(HEARTBEAT_STALE_SECS)
            }
            None => false,
        };
        if Some(alive) != self.alive {
            self.alive = Some(alive);
            events.push(if alive {
                SessionEvent::ConnectionRestored
            } else {
                SessionEvent::ConnectionLost
            });
        }
    }

    fn poll_feed(&mut self, events: &mut Vec<SessionEvent>) {
        let path = self.paths.notices();
        let mtime = file_mtime(&path);
        if mtime.is_some() && mtime != self.feed_mtime {
            self.feed_mtime = mtime;
            events.push(SessionEvent::FeedChanged(path));
        }
    }
}

fn file_mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
