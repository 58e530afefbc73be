use std::path::PathBuf;

use lookout_core::announce::Notice;
use lookout_core::binding::SourceImage;
use lookout_core::session::LoadedImage;

/// Commands sent from the UI thread to the worker thread.
pub enum WorkerCommand {
    /// Start watching a session directory, replacing any previous watch.
    Watch { root: PathBuf },

    /// Drop and re-create the current watch after a connection loss.
    Reload,

    /// Decode the image the viewer should display for `source`.
    OpenViewer { source: SourceImage },
}

/// Results sent from the worker thread back to the UI thread.
pub enum WorkerResult {
    /// A watch was installed on `root`.
    Watching { root: PathBuf },

    /// The dashboard screenshot was created or replaced.
    Screenshot {
        source: SourceImage,
        image: LoadedImage,
    },

    /// The screenshot disappeared from the session directory.
    ScreenshotGone,

    /// Decoded image for the viewer, in answer to [`WorkerCommand::OpenViewer`].
    ViewerImage {
        source: SourceImage,
        image: LoadedImage,
    },

    /// The notice feed was created or replaced.
    Notices { feed: Vec<Notice> },

    ConnectionLost,
    ConnectionRestored,
    Error { message: String },
    Log { message: String },
}
