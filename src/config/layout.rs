//! Display and layout configuration constants.
//!
//! All positions are in the 240x240 local space of the round GC9A01 panel,
//! (0,0) is the top-left corner of the bounding square.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Positions derived from the screen size are computed at compile time as `const`
//! and used by the screens instead of recalculating them every frame.

use embedded_graphics::prelude::{Point, Size};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (GC9A01 round panel: 240x240)
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Dial center, the pivot for every rotation on the compass page.
pub const CENTER: Point = Point::new(CENTER_X, CENTER_Y);

// =============================================================================
// Compass Layout
// =============================================================================

/// Distance from the dial center to each cardinal label's visual center.
pub const CARDINAL_RADIUS: i32 = 67;

/// Designed visual-center anchors of the cardinal labels, 90 degrees apart.
pub const NORTH_ANCHOR: Point = Point::new(CENTER_X, CENTER_Y - CARDINAL_RADIUS);
pub const EAST_ANCHOR: Point = Point::new(CENTER_X + CARDINAL_RADIUS, CENTER_Y);
pub const SOUTH_ANCHOR: Point = Point::new(CENTER_X, CENTER_Y + CARDINAL_RADIUS);
pub const WEST_ANCHOR: Point = Point::new(CENTER_X - CARDINAL_RADIUS, CENTER_Y);

/// Inner dial ring diameter.
pub const INNER_RING_DIAMETER: u32 = 168;

/// Outer dial ring diameter.
pub const OUTER_RING_DIAMETER: u32 = 210;

/// Stroke width of both dial rings.
pub const RING_WIDTH: u32 = 2;

/// Top-left of the fixed "you are facing here" marker at 12 o'clock.
pub const FIXED_MARKER_POS: Point = Point::new(113, 0);

/// Fixed marker footprint.
pub const FIXED_MARKER_SIZE: Size = Size::new(14, 14);

/// Top-left of the rotating north marker before rotation.
pub const NORTH_MARKER_POS: Point = Point::new(113, 18);

/// North marker footprint.
pub const NORTH_MARKER_SIZE: Size = Size::new(14, 12);

/// Rotation pivot of the north marker, relative to [`NORTH_MARKER_POS`].
/// Lands one pixel above the dial center.
pub const NORTH_MARKER_PIVOT: Point = Point::new(7, 101);

/// Vertical offset of the temperature readout from the dial center.
pub const TEMPERATURE_OFFSET_Y: i32 = -22;

// =============================================================================
// Image Viewer Layout
// =============================================================================

/// Diameter of the round refresh/rotate button.
pub const VIEWER_BUTTON_DIAMETER: u32 = 50;

/// Button alignment offset from the bottom-right corner (x, y).
pub const VIEWER_BUTTON_OFFSET: Point = Point::new(-20, -10);

/// Top-left of the button, bottom-right aligned with [`VIEWER_BUTTON_OFFSET`].
pub const VIEWER_BUTTON_POS: Point = Point::new(
    SCREEN_WIDTH as i32 - VIEWER_BUTTON_DIAMETER as i32 + VIEWER_BUTTON_OFFSET.x,
    SCREEN_HEIGHT as i32 - VIEWER_BUTTON_DIAMETER as i32 + VIEWER_BUTTON_OFFSET.y,
);

/// Half-extent of the square that bounds the emblem at any rotation.
pub const EMBLEM_RADIUS: i32 = 56;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchors_match_design_positions() {
        assert_eq!(NORTH_ANCHOR, Point::new(120, 53));
        assert_eq!(EAST_ANCHOR, Point::new(187, 120));
        assert_eq!(SOUTH_ANCHOR, Point::new(120, 187));
        assert_eq!(WEST_ANCHOR, Point::new(53, 120));
    }

    #[test]
    fn test_viewer_button_position() {
        assert_eq!(VIEWER_BUTTON_POS, Point::new(170, 180));
    }

    #[test]
    fn test_north_marker_pivot_near_center() {
        let pivot = NORTH_MARKER_POS + NORTH_MARKER_PIVOT;
        assert_eq!(pivot, Point::new(CENTER_X, CENTER_Y - 1));
    }
}
