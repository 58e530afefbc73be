/// Smallest scale the viewer will clamp to.
pub const MIN_SCALE: f32 = 0.3;

/// Largest scale the viewer will clamp to.
pub const MAX_SCALE: f32 = 6.0;

/// Per-tick multiplier for a zoom-in wheel event. Fixed rather than
/// proportional to wheel magnitude, so increments are predictable across
/// input devices.
pub const ZOOM_IN_FACTOR: f32 = 1.12;

/// Per-tick multiplier for a zoom-out wheel event.
pub const ZOOM_OUT_FACTOR: f32 = 0.88;

/// Seconds between a detected connection loss and the automatic re-watch.
pub const DEFAULT_RELOAD_DELAY_SECS: u64 = 4;

/// Heartbeat age (seconds) past which the agent connection counts as lost.
pub const HEARTBEAT_STALE_SECS: u64 = 10;

/// Session directory poll interval for the worker thread, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Screenshot the agent keeps refreshed for the dashboard.
pub const SCREENSHOT_FILE: &str = "screenshot.png";

/// Optional full-resolution variant, preferred by the viewer when present.
pub const SCREENSHOT_FULL_FILE: &str = "screenshot_full.png";

/// File the agent touches while its session is alive.
pub const HEARTBEAT_FILE: &str = "heartbeat";

/// Notice feed dropped into the session directory by the agent.
pub const NOTICES_FILE: &str = "notices.json";

/// Dismissal log file name under the user config directory.
pub const DISMISSALS_FILE: &str = "dismissed_notices.json";

/// Application directory name under the platform config directory.
pub const APP_DIR: &str = "lookout";

/// Config file name under [`APP_DIR`].
pub const CONFIG_FILE: &str = "lookout.toml";
