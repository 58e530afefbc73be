use lookout_core::announce::Notice;

use crate::app::LookoutApp;

const PANEL_WIDTH: f32 = 420.0;

pub fn show(ctx: &egui::Context, app: &mut LookoutApp) {
    let Some(notice) = app.notices.active.clone() else {
        return;
    };

    let screen = ctx.screen_rect();
    let mut dismiss = false;

    // Backdrop: dims the app and catches the click-outside dismissal.
    egui::Area::new(egui::Id::new("notice-backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));
            if response.clicked() {
                dismiss = true;
            }
        });

    egui::Area::new(egui::Id::new("notice-panel"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Frame::window(&ctx.style()).show(ui, |ui| {
                ui.set_max_width(PANEL_WIDTH);
                draw_notice(ui, ctx, &notice, &mut dismiss);
            });
        });

    if dismiss {
        app.dismiss_active_notice();
    }
}

fn draw_notice(ui: &mut egui::Ui, ctx: &egui::Context, notice: &Notice, dismiss: &mut bool) {
    // The accent follows the app theme; only the notice modal consumes it.
    let accent = if ctx.style().visuals.dark_mode {
        egui::Color32::from_rgb(79, 195, 247)
    } else {
        egui::Color32::from_rgb(9, 132, 227)
    };

    ui.heading(egui::RichText::new(&notice.title).color(accent));
    ui.separator();

    if let Some(ref body) = notice.body {
        ui.add_space(4.0);
        ui.label(body);
    }

    if let Some(ref url) = notice.url {
        ui.add_space(4.0);
        if ui.button("Open page").clicked() {
            if let Err(e) = open::that(url) {
                tracing::warn!("could not open {url}: {e}");
            }
        }
    }

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        if ui.button("Got it").clicked() {
            *dismiss = true;
        }
    });
}
