use lookout_core::transform::Vec2;

use crate::app::LookoutApp;
use crate::state::ViewerSurface;

/// Padding between the overlay edge and the image at identity scale.
const OVERLAY_PADDING: f32 = 20.0;

pub fn show(ctx: &egui::Context, app: &mut LookoutApp) {
    let Some(surface) = app.viewer.as_mut() else {
        return;
    };
    if !surface.open {
        return;
    }

    // Escape closes the viewer wherever focus is.
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        surface.close();
        return;
    }

    let screen = ctx.screen_rect();

    egui::Area::new(egui::Id::new("screenshot-viewer"))
        .order(egui::Order::Foreground)
        .fixed_pos(egui::Pos2::ZERO)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(166));

            // Hit-testing uses the pre-input rect; a drag that starts on the
            // image stays attached to it even if the first move shifts it.
            let img_rect = image_rect(screen, surface);
            handle_zoom(ui, &response, surface, screen);
            handle_drag(ui, &response, surface, img_rect);

            if response.double_clicked() && pointer_over(&response, img_rect) {
                surface.controller.double_click();
            } else if response.clicked() && !pointer_over(&response, img_rect) {
                // Backdrop click dismisses without touching anything else.
                surface.close();
                return;
            }

            // Recompute so this frame already shows the mutated transform.
            let img_rect = image_rect(screen, surface);
            ui.painter().image(
                surface.texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            draw_viewing_label(ui, screen, &surface.viewing_label);
            update_cursor(ctx, &response, surface);
        });
}

fn handle_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    surface: &mut ViewerSurface,
    screen: egui::Rect,
) {
    // The platform zoom modifier is reserved for egui's own scaling.
    if ui.input(|i| i.modifiers.command) {
        return;
    }
    let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_y == 0.0 || !response.hovered() {
        return;
    }
    let Some(pos) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };

    let center = screen.center();
    surface.controller.wheel(
        Vec2::new(pos.x, pos.y),
        Vec2::new(center.x, center.y),
        scroll_y > 0.0,
    );
}

fn handle_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    surface: &mut ViewerSurface,
    img_rect: egui::Rect,
) {
    let controller = &mut surface.controller;

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            if img_rect.contains(pos) {
                controller.pointer_down(Vec2::new(pos.x, pos.y));
            }
        }
    }

    // Panning follows the pointer across the whole overlay, not just the
    // image, so a fast drag cannot escape mid-gesture.
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
            controller.pointer_move(Vec2::new(pos.x, pos.y));
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        controller.pointer_up();
    }
}

fn pointer_over(response: &egui::Response, rect: egui::Rect) -> bool {
    response
        .interact_pointer_pos()
        .is_some_and(|pos| rect.contains(pos))
}

fn update_cursor(ctx: &egui::Context, response: &egui::Response, surface: &ViewerSurface) {
    if surface.controller.is_panning() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
}

fn image_rect(screen: egui::Rect, surface: &ViewerSurface) -> egui::Rect {
    let t = surface.controller.transform();
    let base = base_size(screen, surface.image_size);
    let center = screen.center() + egui::vec2(t.translate.x, t.translate.y);
    egui::Rect::from_center_size(center, base * t.scale)
}

/// Contain-fit of the image into the padded overlay, never upscaled.
fn base_size(screen: egui::Rect, image_size: [usize; 2]) -> egui::Vec2 {
    let avail = screen.size() - egui::vec2(OVERLAY_PADDING * 2.0, OVERLAY_PADDING * 2.0);
    let size = egui::vec2(image_size[0] as f32, image_size[1] as f32);
    let scale = (avail.x / size.x).min(avail.y / size.y).min(1.0);
    size * scale
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}
