use crate::config::ViewerConfig;
use crate::transform::{TransformState, Vec2};

/// Translates pointer and wheel input into [`TransformState`] mutations.
///
/// Drag panning is a two-state machine (idle / panning). While panning, each
/// move event contributes only its incremental delta and re-anchors, so a
/// dropped intermediate event cannot cause drift.
pub struct InputController {
    config: ViewerConfig,
    transform: TransformState,
    drag_anchor: Option<Vec2>,
}

impl InputController {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            transform: TransformState::identity(),
            drag_anchor: None,
        }
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn is_panning(&self) -> bool {
        self.transform.panning
    }

    /// Back to identity, dropping any in-progress drag.
    pub fn reset(&mut self) {
        self.transform.reset();
        self.drag_anchor = None;
    }

    /// Anchored wheel zoom: the content under `cursor` stays put while the
    /// scale changes. `surface_center` is where the image center would render
    /// with zero translation.
    pub fn wheel(&mut self, cursor: Vec2, surface_center: Vec2, scroll_up: bool) {
        // Scaling is about the image center, so translation alone moves it.
        let rendered_center = surface_center + self.transform.translate;
        let offset = cursor - rendered_center;

        let factor = if scroll_up {
            self.config.zoom_in_factor
        } else {
            self.config.zoom_out_factor
        };

        let scale = self.transform.scale;
        let new_scale = (scale * factor).clamp(self.config.min_scale, self.config.max_scale);

        // The correction must use the pre-update scale and cursor offset.
        self.transform.translate.x -= offset.x * (new_scale - scale);
        self.transform.translate.y -= offset.y * (new_scale - scale);
        self.transform.scale = new_scale;
    }

    /// Pointer pressed on the image: start panning from `pos`.
    pub fn pointer_down(&mut self, pos: Vec2) {
        self.drag_anchor = Some(pos);
        self.transform.panning = true;
    }

    /// Pointer moved anywhere in the window while panning.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if let Some(anchor) = self.drag_anchor {
            self.transform.translate += pos - anchor;
            self.drag_anchor = Some(pos);
        }
    }

    /// Pointer released anywhere in the window.
    pub fn pointer_up(&mut self) {
        self.drag_anchor = None;
        self.transform.panning = false;
    }

    /// Double-click: unconditional identity reset.
    pub fn double_click(&mut self) {
        self.reset();
    }
}
