//! Pure geometry for the floating player: where the widget sits, where a
//! drag puts it, and how it stays inside the viewport. Viewport dimensions
//! are always passed in so this stays unit-testable.

use serde::{Deserialize, Serialize};

/// Logical size of the floating panel used for clamping.
pub const WIDGET_WIDTH: f64 = 320.0;
pub const WIDGET_HEIGHT: f64 = 180.0;
/// Inset from the viewport edges for the first-run position.
pub const EDGE_MARGIN: f64 = 24.0;
/// Below this viewport width the widget becomes a fixed bar and dragging is
/// disabled.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Top-left corner of the widget in viewport pixels. Persisted across
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub x: f64,
    pub y: f64,
}

/// Offset of the grab point from the widget's top-left corner, captured on
/// pointer-down so the widget doesn't jump under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGrab {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Keep the widget's full bounding box inside the viewport.
pub fn clamp_to_viewport(x: f64, y: f64, viewport_w: f64, viewport_h: f64) -> WidgetPosition {
    let max_x = (viewport_w - WIDGET_WIDTH).max(0.0);
    let max_y = (viewport_h - WIDGET_HEIGHT).max(0.0);
    WidgetPosition {
        x: x.clamp(0.0, max_x),
        y: y.clamp(0.0, max_y),
    }
}

/// First-run placement: anchored to the bottom-right corner, inset by the
/// widget's own size plus a margin.
pub fn default_position(viewport_w: f64, viewport_h: f64) -> WidgetPosition {
    clamp_to_viewport(
        viewport_w - WIDGET_WIDTH - EDGE_MARGIN,
        viewport_h - WIDGET_HEIGHT - EDGE_MARGIN,
        viewport_w,
        viewport_h,
    )
}

/// Resolve the mount-time position: the persisted value if there is one
/// (re-clamped in case the viewport shrank since last session), otherwise
/// the computed default.
pub fn initial_position(
    saved: Option<WidgetPosition>,
    viewport_w: f64,
    viewport_h: f64,
) -> WidgetPosition {
    match saved {
        Some(position) => clamp_to_viewport(position.x, position.y, viewport_w, viewport_h),
        None => default_position(viewport_w, viewport_h),
    }
}

/// Position for the current pointer location mid-drag.
pub fn drag_position(
    pointer_x: f64,
    pointer_y: f64,
    grab: DragGrab,
    viewport_w: f64,
    viewport_h: f64,
) -> WidgetPosition {
    clamp_to_viewport(
        pointer_x - grab.offset_x,
        pointer_y - grab.offset_y,
        viewport_w,
        viewport_h,
    )
}

pub fn is_desktop_viewport(viewport_w: f64) -> bool {
    viewport_w >= MOBILE_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_by_the_pointer_delta() {
        // Widget at (100, 100), grabbed at (110, 120).
        let grab = DragGrab {
            offset_x: 10.0,
            offset_y: 20.0,
        };
        let moved = drag_position(110.0 + 45.0, 120.0 + 30.0, grab, 1920.0, 1080.0);
        assert_eq!(moved, WidgetPosition { x: 145.0, y: 130.0 });
    }

    #[test]
    fn drag_clamps_to_viewport_bounds() {
        // 1000x800 viewport with a 320x180 widget: max corner is (680, 620).
        let grab = DragGrab {
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let clamped = drag_position(950.0, 750.0, grab, 1000.0, 800.0);
        assert_eq!(clamped, WidgetPosition { x: 680.0, y: 620.0 });

        let clamped = drag_position(-40.0, -5.0, grab, 1000.0, 800.0);
        assert_eq!(clamped, WidgetPosition { x: 0.0, y: 0.0 });
    }

    #[test]
    fn default_position_sits_inside_the_bottom_right_corner() {
        let position = default_position(1920.0, 1080.0);
        assert_eq!(
            position,
            WidgetPosition {
                x: 1920.0 - WIDGET_WIDTH - EDGE_MARGIN,
                y: 1080.0 - WIDGET_HEIGHT - EDGE_MARGIN,
            }
        );
    }

    #[test]
    fn initial_position_round_trips_a_saved_value() {
        let saved = WidgetPosition { x: 100.0, y: 200.0 };
        assert_eq!(initial_position(Some(saved), 1920.0, 1080.0), saved);
    }

    #[test]
    fn initial_position_reclamps_when_the_viewport_shrank() {
        let saved = WidgetPosition { x: 900.0, y: 700.0 };
        assert_eq!(
            initial_position(Some(saved), 1000.0, 800.0),
            WidgetPosition { x: 680.0, y: 620.0 }
        );
    }

    #[test]
    fn initial_position_falls_back_to_the_default() {
        assert_eq!(
            initial_position(None, 1000.0, 800.0),
            default_position(1000.0, 800.0)
        );
    }

    #[test]
    fn breakpoint_gates_desktop_layout() {
        assert!(is_desktop_viewport(MOBILE_BREAKPOINT));
        assert!(is_desktop_viewport(1920.0));
        assert!(!is_desktop_viewport(MOBILE_BREAKPOINT - 1.0));
    }
}
