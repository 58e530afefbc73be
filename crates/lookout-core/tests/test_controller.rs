use approx::assert_relative_eq;

use lookout_core::config::ViewerConfig;
use lookout_core::controller::InputController;
use lookout_core::transform::Vec2;

const CENTER: Vec2 = Vec2::new(400.0, 300.0);

fn controller() -> InputController {
    InputController::new(ViewerConfig::default())
}

// ---------------------------------------------------------------------------
// Wheel zoom
// ---------------------------------------------------------------------------

#[test]
fn test_zoom_in_at_center_leaves_translate_unchanged() {
    let mut c = controller();
    c.wheel(CENTER, CENTER, true);
    let t = c.transform();
    assert_relative_eq!(t.scale, 1.12, epsilon = 1e-6);
    assert_relative_eq!(t.translate.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(t.translate.y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_zoom_out_at_center() {
    let mut c = controller();
    c.wheel(CENTER, CENTER, false);
    let t = c.transform();
    assert_relative_eq!(t.scale, 0.88, epsilon = 1e-6);
    assert_relative_eq!(t.translate.x, 0.0, epsilon = 1e-6);
}

#[test]
fn test_zoom_in_then_out_roughly_round_trips() {
    let mut c = controller();
    c.wheel(CENTER, CENTER, true);
    c.wheel(CENTER, CENTER, false);
    assert_relative_eq!(c.transform().scale, 1.12 * 0.88, epsilon = 1e-6);
}

#[test]
fn test_scale_clamped_above() {
    let mut c = controller();
    for _ in 0..100 {
        c.wheel(CENTER, CENTER, true);
    }
    assert_relative_eq!(c.transform().scale, 6.0, epsilon = 1e-6);
}

#[test]
fn test_scale_clamped_below() {
    let mut c = controller();
    for _ in 0..100 {
        c.wheel(CENTER, CENTER, false);
    }
    assert_relative_eq!(c.transform().scale, 0.3, epsilon = 1e-6);
}

#[test]
fn test_scale_stays_in_bounds_for_mixed_sequences() {
    let mut c = controller();
    let cursor = Vec2::new(123.0, 456.0);
    for i in 0..500 {
        c.wheel(cursor, CENTER, i % 3 != 0);
        let t = c.transform();
        assert!(
            (0.3..=6.0).contains(&t.scale),
            "scale {} out of bounds at tick {i}",
            t.scale
        );
        assert!(t.translate.x.is_finite());
        assert!(t.translate.y.is_finite());
    }
}

#[test]
fn test_anchored_zoom_keeps_cursor_content_fixed_from_identity() {
    let mut c = controller();
    let cursor = Vec2::new(520.0, 180.0);

    // Content offset (in unscaled image pixels from the center) that renders
    // under the cursor before the tick.
    let before = *c.transform();
    let content = Vec2::new(
        (cursor.x - CENTER.x - before.translate.x) / before.scale,
        (cursor.y - CENTER.y - before.translate.y) / before.scale,
    );

    c.wheel(cursor, CENTER, true);

    let after = c.transform();
    let rendered_x = CENTER.x + after.translate.x + content.x * after.scale;
    let rendered_y = CENTER.y + after.translate.y + content.y * after.scale;
    assert_relative_eq!(rendered_x, cursor.x, epsilon = 1e-3);
    assert_relative_eq!(rendered_y, cursor.y, epsilon = 1e-3);
}

#[test]
fn test_two_zoom_out_ticks_accumulate_anchor_correction() {
    let mut c = controller();
    let cursor = Vec2::new(CENTER.x + 100.0, CENTER.y + 50.0);

    c.wheel(cursor, CENTER, false);
    c.wheel(cursor, CENTER, false);

    let t = c.transform();
    assert_relative_eq!(t.scale, 0.7744, epsilon = 1e-5);
    // First tick: offset (100, 50), scale 1 -> 0.88, translate += (12, 6).
    // Second tick: offset (88, 44), scale 0.88 -> 0.7744,
    // translate += (9.2928, 4.6464).
    assert_relative_eq!(t.translate.x, 21.2928, epsilon = 1e-3);
    assert_relative_eq!(t.translate.y, 10.6464, epsilon = 1e-3);
}

#[test]
fn test_custom_limits_are_respected() {
    let config = ViewerConfig {
        min_scale: 0.5,
        max_scale: 2.0,
        ..ViewerConfig::default()
    };
    let mut c = InputController::new(config);
    for _ in 0..50 {
        c.wheel(CENTER, CENTER, true);
    }
    assert_relative_eq!(c.transform().scale, 2.0, epsilon = 1e-6);
    for _ in 0..50 {
        c.wheel(CENTER, CENTER, false);
    }
    assert_relative_eq!(c.transform().scale, 0.5, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// Drag panning
// ---------------------------------------------------------------------------

#[test]
fn test_drag_moves_by_pointer_delta() {
    let mut c = controller();
    c.pointer_down(Vec2::new(10.0, 10.0));
    assert!(c.is_panning());

    c.pointer_move(Vec2::new(25.0, 4.0));
    let t = c.transform();
    assert_relative_eq!(t.translate.x, 15.0, epsilon = 1e-6);
    assert_relative_eq!(t.translate.y, -6.0, epsilon = 1e-6);

    c.pointer_up();
    assert!(!c.is_panning());
}

#[test]
fn test_drag_delta_is_incremental_not_cumulative() {
    let mut c = controller();
    c.pointer_down(Vec2::new(0.0, 0.0));
    c.pointer_move(Vec2::new(5.0, 0.0));
    // A repeated position adds nothing.
    c.pointer_move(Vec2::new(5.0, 0.0));
    c.pointer_move(Vec2::new(9.0, 2.0));
    let t = c.transform();
    assert_relative_eq!(t.translate.x, 9.0, epsilon = 1e-6);
    assert_relative_eq!(t.translate.y, 2.0, epsilon = 1e-6);
}

#[test]
fn test_pan_speed_is_scale_independent() {
    let mut c = controller();
    for _ in 0..5 {
        c.wheel(CENTER, CENTER, true);
    }
    let before = c.transform().translate;

    c.pointer_down(Vec2::new(100.0, 100.0));
    c.pointer_move(Vec2::new(130.0, 80.0));

    let t = c.transform();
    assert_relative_eq!(t.translate.x - before.x, 30.0, epsilon = 1e-3);
    assert_relative_eq!(t.translate.y - before.y, -20.0, epsilon = 1e-3);
}

#[test]
fn test_move_without_down_is_ignored() {
    let mut c = controller();
    c.pointer_move(Vec2::new(50.0, 50.0));
    assert!(c.transform().is_identity());
    assert!(!c.is_panning());
}

#[test]
fn test_move_after_up_is_ignored() {
    let mut c = controller();
    c.pointer_down(Vec2::new(0.0, 0.0));
    c.pointer_move(Vec2::new(5.0, 5.0));
    c.pointer_up();
    c.pointer_move(Vec2::new(100.0, 100.0));
    let t = c.transform();
    assert_relative_eq!(t.translate.x, 5.0, epsilon = 1e-6);
    assert_relative_eq!(t.translate.y, 5.0, epsilon = 1e-6);
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn test_pan_then_double_click_resets_to_identity() {
    let mut c = controller();
    c.pointer_down(Vec2::new(0.0, 0.0));
    c.pointer_move(Vec2::new(37.0, -12.0));
    c.pointer_move(Vec2::new(90.0, 44.0));
    c.pointer_up();
    c.wheel(Vec2::new(200.0, 140.0), CENTER, true);

    c.double_click();
    assert!(c.transform().is_identity());
    assert!(!c.is_panning());
}

#[test]
fn test_double_click_mid_drag_resets_and_drops_anchor() {
    let mut c = controller();
    c.pointer_down(Vec2::new(10.0, 10.0));
    c.double_click();
    assert!(c.transform().is_identity());

    // The dropped anchor means further moves are ignored.
    c.pointer_move(Vec2::new(99.0, 99.0));
    assert!(c.transform().is_identity());
}
