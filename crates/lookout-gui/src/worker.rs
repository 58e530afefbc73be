use std::sync::mpsc;
use std::time::Duration;

use lookout_core::announce;
use lookout_core::binding::SourceImage;
use lookout_core::consts::POLL_INTERVAL_MS;
use lookout_core::session::{load_screenshot, SessionEvent, SessionWatcher};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("lookout-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut watcher: Option<SessionWatcher> = None;
    let poll_interval = Duration::from_millis(POLL_INTERVAL_MS);

    loop {
        match cmd_rx.recv_timeout(poll_interval) {
            Ok(WorkerCommand::Watch { root }) => {
                send(
                    &tx,
                    &ctx,
                    WorkerResult::Watching { root: root.clone() },
                );
                send_log(&tx, &ctx, format!("Watching {}", root.display()));
                watcher = Some(SessionWatcher::new(root));
            }
            Ok(WorkerCommand::Reload) => {
                if let Some(current) = watcher.take() {
                    let root = current.paths().root().to_path_buf();
                    send_log(&tx, &ctx, "Reconnecting to session...");
                    watcher = Some(SessionWatcher::new(root));
                }
            }
            Ok(WorkerCommand::OpenViewer { source }) => {
                handle_open_viewer(source, &tx, &ctx);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if let Some(ref mut w) = watcher {
                    for event in w.poll() {
                        handle_event(event, &tx, &ctx);
                    }
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn handle_event(event: SessionEvent, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match event {
        SessionEvent::ScreenshotChanged(source) => {
            match load_screenshot(&source.display_path) {
                Ok(image) => send(tx, ctx, WorkerResult::Screenshot { source, image }),
                // The agent may still be writing the file; completing the
                // write bumps the mtime again, so the next poll retries.
                Err(e) => send_log(tx, ctx, format!("Screenshot not readable yet: {e}")),
            }
        }
        SessionEvent::ScreenshotRemoved => send(tx, ctx, WorkerResult::ScreenshotGone),
        SessionEvent::ConnectionLost => send(tx, ctx, WorkerResult::ConnectionLost),
        SessionEvent::ConnectionRestored => send(tx, ctx, WorkerResult::ConnectionRestored),
        SessionEvent::FeedChanged(path) => {
            let feed = announce::load_feed(&path);
            if !feed.is_empty() {
                send(tx, ctx, WorkerResult::Notices { feed });
            }
        }
    }
}

fn handle_open_viewer(
    source: SourceImage,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_screenshot(source.viewer_path()) {
        Ok(image) => send(tx, ctx, WorkerResult::ViewerImage { source, image }),
        Err(e) => send_error(tx, ctx, format!("Could not open screenshot: {e}")),
    }
}
