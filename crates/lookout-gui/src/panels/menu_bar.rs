use crate::app::LookoutApp;
use crate::messages::WorkerCommand;

pub fn show(ctx: &egui::Context, app: &mut LookoutApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open Session Folder...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_session_folder(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Session", |ui| {
                let can_reconnect = app.ui_state.session_root.is_some();
                if ui
                    .add_enabled(can_reconnect, egui::Button::new("Reconnect Now"))
                    .clicked()
                {
                    ui.close();
                    app.ui_state.add_log("Reconnecting on request".into());
                    app.send_command(WorkerCommand::Reload);
                }

                let mut enabled = app.reload_guard.is_enabled();
                if ui
                    .checkbox(&mut enabled, "Auto-reload after disconnect")
                    .changed()
                {
                    app.reload_guard.set_enabled(enabled);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_session_folder(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_session_folder(app: &LookoutApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(root) = rfd::FileDialog::new().pick_folder() {
            let _ = cmd_tx.send(WorkerCommand::Watch { root });
        }
    });
}
