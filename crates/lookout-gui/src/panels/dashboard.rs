use crate::app::LookoutApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut LookoutApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .dashboard
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let img_rect = fit_rect(rect, egui::vec2(tex_size[0], tex_size[1]));
            let response = ui.allocate_rect(img_rect, egui::Sense::click());

            ui.painter().image(
                texture_id,
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            handle_click(ctx, &response, app);
        } else {
            show_placeholder(ui, app);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Contain-fit of the screenshot into the panel, never upscaled.
fn fit_rect(rect: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let avail = rect.size();
    let scale = (avail.x / image_size.x)
        .min(avail.y / image_size.y)
        .min(1.0);
    egui::Rect::from_center_size(rect.center(), image_size * scale)
}

fn handle_click(ctx: &egui::Context, response: &egui::Response, app: &mut LookoutApp) {
    let Some(source) = app.dashboard.source.clone() else {
        return;
    };
    // Only a bound screenshot opens the viewer; the binding is refreshed on
    // every change notification, so this is normally always true.
    if !app.dashboard.binding.is_bound_to(&source) {
        return;
    }

    if response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::ZoomIn);
    }
    if response.clicked() {
        app.send_command(WorkerCommand::OpenViewer { source });
    }
}

fn show_placeholder(ui: &mut egui::Ui, app: &LookoutApp) {
    let text = if app.ui_state.session_root.is_some() {
        "Waiting for a session screenshot"
    } else {
        "Open a session folder to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
