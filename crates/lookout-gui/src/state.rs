use std::path::PathBuf;

use lookout_core::announce::Notice;
use lookout_core::binding::{SourceBinding, SourceImage};
use lookout_core::config::ViewerConfig;
use lookout_core::controller::InputController;

/// Agent connection status as last reported by the worker.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Nothing watched yet.
    #[default]
    Idle,
    Live,
    Lost,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub session_root: Option<PathBuf>,
    pub connection: ConnectionState,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// The screenshot slot of the dashboard.
#[derive(Default)]
pub struct DashboardState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    /// Screenshot currently present in the session directory.
    pub source: Option<SourceImage>,
    /// Click-to-open binding for the current source.
    pub binding: SourceBinding,
}

/// The overlay viewer. Created once on first open, reused for every
/// open/close cycle afterwards, and kept until the app exits.
pub struct ViewerSurface {
    pub open: bool,
    pub texture: egui::TextureHandle,
    pub image_size: [usize; 2],
    pub viewing_label: String,
    pub controller: InputController,
}

impl ViewerSurface {
    pub fn new(
        texture: egui::TextureHandle,
        image_size: [usize; 2],
        label: String,
        config: ViewerConfig,
    ) -> Self {
        Self {
            open: true,
            texture,
            image_size,
            viewing_label: label,
            controller: InputController::new(config),
        }
    }

    /// Seed the surface with a fresh image and an identity transform.
    pub fn open_with(&mut self, texture: egui::TextureHandle, image_size: [usize; 2], label: String) {
        self.texture = texture;
        self.image_size = image_size;
        self.viewing_label = label;
        self.controller.reset();
        self.open = true;
    }

    /// Hide the overlay. The transform is discarded, not persisted.
    pub fn close(&mut self) {
        self.controller.reset();
        self.open = false;
    }
}

/// Notice modal state. At most one notice is on screen at a time; the rest of
/// the feed waits until the active one is dismissed.
#[derive(Default)]
pub struct NoticeState {
    pub feed: Vec<Notice>,
    pub active: Option<Notice>,
}
