use crate::app::LookoutApp;
use crate::state::ConnectionState;

pub fn show(ctx: &egui::Context, app: &mut LookoutApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            connection_label(ui, app);
            ui.separator();
            if let Some(size) = app.dashboard.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(ref source) = app.dashboard.source {
                ui.label(format!("Screenshot #{}", source.revision));
                ui.separator();
            }
            if let Some(ref surface) = app.viewer {
                if surface.open {
                    ui.label(format!(
                        "Zoom: {:.0}%",
                        surface.controller.transform().scale * 100.0
                    ));
                }
            }
        });

        ui.add_space(2.0);
    });
}

fn connection_label(ui: &mut egui::Ui, app: &LookoutApp) {
    match app.ui_state.connection {
        ConnectionState::Idle => {
            ui.label(egui::RichText::new("No session").color(egui::Color32::from_gray(140)));
        }
        ConnectionState::Live => {
            ui.label(egui::RichText::new("Live").color(egui::Color32::from_rgb(80, 180, 80)));
        }
        ConnectionState::Lost => {
            let text = match app.reload_guard.remaining_secs(std::time::Instant::now()) {
                Some(secs) => format!("Connection lost, reloading in {secs}s"),
                None if app.reload_guard.is_enabled() => "Connection lost".to_string(),
                None => "Connection lost (auto-reload off)".to_string(),
            };
            ui.label(egui::RichText::new(text).color(egui::Color32::from_rgb(220, 90, 80)));
        }
    }
}
