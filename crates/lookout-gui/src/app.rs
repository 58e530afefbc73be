use std::sync::mpsc;
use std::time::{Duration, Instant};

use lookout_core::announce;
use lookout_core::binding::SourceImage;
use lookout_core::config::AppConfig;
use lookout_core::dismissal::DismissalLog;
use lookout_core::reload::ReloadGuard;
use lookout_core::session::LoadedImage;

use crate::convert::loaded_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{ConnectionState, DashboardState, NoticeState, UIState, ViewerSurface};
use crate::worker;

pub struct LookoutApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: AppConfig,
    pub ui_state: UIState,
    pub dashboard: DashboardState,
    /// Lazily created overlay viewer; lives for the rest of the session once
    /// the first screenshot is opened.
    pub viewer: Option<ViewerSurface>,
    pub notices: NoticeState,
    pub dismissals: DismissalLog,
    pub reload_guard: ReloadGuard,
    pub show_about: bool,
}

impl LookoutApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let reload_guard = ReloadGuard::new(
            config.reload.enabled,
            Duration::from_secs(config.reload.delay_secs),
        );

        let app = Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            dashboard: DashboardState::default(),
            viewer: None,
            notices: NoticeState::default(),
            dismissals: DismissalLog::open_default(),
            reload_guard,
            show_about: false,
            config,
        };

        if let Some(root) = app.config.session.root.clone() {
            app.send_command(WorkerCommand::Watch { root });
        }
        app
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Watching { root } => {
                    self.ui_state.session_root = Some(root);
                    self.ui_state.connection = ConnectionState::Live;
                    self.reload_guard.connection_restored();
                    // A fresh watch re-reports its screenshot on first poll;
                    // anything still on screen belongs to the previous root.
                    self.dashboard.source = None;
                    self.dashboard.binding.rebind(None);
                    self.dashboard.texture = None;
                    self.dashboard.image_size = None;
                }
                WorkerResult::Screenshot { source, image } => {
                    self.update_dashboard_texture(ctx, &image);
                    self.dashboard.source = Some(source);
                    // Structural change notification: re-resolve and rebind.
                    if self.dashboard.binding.rebind(self.dashboard.source.as_ref()) {
                        tracing::debug!("screenshot binding refreshed");
                    }
                }
                WorkerResult::ScreenshotGone => {
                    self.dashboard.source = None;
                    self.dashboard.binding.rebind(None);
                    self.dashboard.texture = None;
                    self.dashboard.image_size = None;
                }
                WorkerResult::ViewerImage { source, image } => {
                    self.open_viewer(ctx, &source, &image);
                }
                WorkerResult::Notices { feed } => {
                    self.notices.feed = feed;
                    self.show_next_notice();
                }
                WorkerResult::ConnectionLost => {
                    if self.ui_state.connection != ConnectionState::Lost {
                        self.ui_state.add_log("Session connection lost".into());
                    }
                    self.ui_state.connection = ConnectionState::Lost;
                    self.reload_guard.connection_lost(Instant::now());
                }
                WorkerResult::ConnectionRestored => {
                    if self.ui_state.connection == ConnectionState::Lost {
                        self.ui_state.add_log("Session connection restored".into());
                    }
                    self.ui_state.connection = ConnectionState::Live;
                    self.reload_guard.connection_restored();
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_dashboard_texture(&mut self, ctx: &egui::Context, image: &LoadedImage) {
        let color_image = loaded_to_color_image(image);
        let size = color_image.size;
        let texture =
            ctx.load_texture("dashboard-screenshot", color_image, egui::TextureOptions::LINEAR);
        self.dashboard.texture = Some(texture);
        self.dashboard.image_size = Some(size);
    }

    fn open_viewer(&mut self, ctx: &egui::Context, source: &SourceImage, image: &LoadedImage) {
        let color_image = loaded_to_color_image(image);
        let size = color_image.size;
        let texture =
            ctx.load_texture("viewer-screenshot", color_image, egui::TextureOptions::LINEAR);
        let label = source
            .viewer_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.viewer {
            Some(ref mut surface) => surface.open_with(texture, size, label),
            None => {
                self.viewer = Some(ViewerSurface::new(texture, size, label, self.config.viewer));
            }
        }
    }

    /// Show the first unseen notice, unless a modal is already on screen.
    pub fn show_next_notice(&mut self) {
        if self.notices.active.is_some() {
            return;
        }
        self.notices.active = announce::next_unseen(&self.notices.feed, &self.dismissals).cloned();
    }

    pub fn dismiss_active_notice(&mut self) {
        if let Some(notice) = self.notices.active.take() {
            self.dismissals.mark_shown(&notice.id);
            self.notices.feed.retain(|n| n.id != notice.id);
            self.show_next_notice();
        }
    }

    fn handle_auto_reload(&mut self) {
        if self.reload_guard.take_reload(Instant::now()) {
            self.ui_state.add_log("Re-arming session watch".into());
            self.send_command(WorkerCommand::Reload);
        }
    }
}

impl eframe::App for LookoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_auto_reload();

        // The pending-reload countdown has no worker event to wake us up.
        if self.reload_guard.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::dashboard::show(ctx, self);
        panels::viewer::show(ctx, self);
        panels::notice::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Lookout")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Lookout");
                        ui.label("Agent Session Companion");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
