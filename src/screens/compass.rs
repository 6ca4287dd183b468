//! Compass page: orbiting cardinal labels, north marker and readouts.
//!
//! # Layout
//!
//! ```text
//!            v           fixed marker (12 o'clock)
//!        .-- ^ --.       north marker, turns with heading
//!      /     N     \     cardinal labels orbit on radius 67
//!     |  W  21.50C  E |  temperature, 22 px above center
//!     |     23° NE    |  azimuth readout, centered
//!      \     S     /     rings: 168 and 210 px
//!        '-------'
//! ```
//!
//! Each heading sample recomputes all four label placements from their
//! heading-0 layout. Nothing is accumulated between samples.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Triangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::colors::{ACCENT, BLACK, RED, WHITE};
use crate::config::MarkerRotation;
use crate::config::layout::{
    CENTER,
    EAST_ANCHOR,
    FIXED_MARKER_POS,
    FIXED_MARKER_SIZE,
    INNER_RING_DIAMETER,
    NORTH_ANCHOR,
    NORTH_MARKER_PIVOT,
    NORTH_MARKER_POS,
    NORTH_MARKER_SIZE,
    OUTER_RING_DIAMETER,
    RING_WIDTH,
    SOUTH_ANCHOR,
    TEMPERATURE_OFFSET_Y,
    WEST_ANCHOR,
};
use crate::geometry::{CardinalLabel, CompassReading, classify_heading, layout_cardinal, normalize_heading, rotate_about, rotate_position};
use crate::scene::{SceneError, ScreenSlot};
use crate::styles::{CARDINAL_FONT, CENTERED, READOUT_STYLE, TOP_LEFT};

/// Readout text capacity. "359° NW" and "-40.00°C" both fit.
const READOUT_LEN: usize = 16;

/// One of the four orbiting labels.
#[derive(Clone, Copy, Debug)]
struct Cardinal {
    text: &'static str,
    color: Rgb565,
    layout: CardinalLabel,
    position: Point,
}

impl Cardinal {
    fn new(
        text: &'static str,
        anchor: Point,
        color: Rgb565,
    ) -> Self {
        let style = MonoTextStyle::new(CARDINAL_FONT, color);
        let size = style.measure_string(text, Point::zero(), Baseline::Top).bounding_box.size;
        let layout = layout_cardinal(anchor, size);
        Self {
            text,
            color,
            layout,
            position: layout.base_anchor,
        }
    }
}

/// Live state of the compass page.
pub struct CompassScreen {
    cardinals: [Cardinal; 4],
    marker_rotation: MarkerRotation,
    /// North marker angle in tenths of a degree, positive is clockwise on screen.
    marker_angle: i32,
    azimuth_text: String<READOUT_LEN>,
    temperature_text: String<READOUT_LEN>,
}

impl CompassScreen {
    /// Build the page at heading 0 with an empty temperature readout.
    pub fn new(marker_rotation: MarkerRotation) -> Self {
        let mut azimuth_text = String::new();
        let _ = write!(azimuth_text, "{}", CompassReading::default());

        Self {
            cardinals: [
                Cardinal::new("N", NORTH_ANCHOR, RED),
                Cardinal::new("E", EAST_ANCHOR, BLACK),
                Cardinal::new("S", SOUTH_ANCHOR, BLACK),
                Cardinal::new("W", WEST_ANCHOR, BLACK),
            ],
            marker_rotation,
            marker_angle: 0,
            azimuth_text,
            temperature_text: String::new(),
        }
    }

    /// Apply a heading sample in degrees. Any integer is accepted.
    pub fn set_heading(
        &mut self,
        heading: i32,
    ) -> CompassReading {
        let heading = normalize_heading(heading);
        let reading = classify_heading(heading);

        self.azimuth_text.clear();
        let _ = write!(self.azimuth_text, "{reading}");

        for cardinal in &mut self.cardinals {
            cardinal.position = rotate_position(&cardinal.layout, heading, CENTER);
        }
        self.marker_angle = self.marker_rotation.sign() * heading * 10;
        reading
    }

    /// Apply a temperature sample in degrees Celsius.
    pub fn set_temperature(
        &mut self,
        celsius: f32,
    ) {
        self.temperature_text.clear();
        if write!(self.temperature_text, "{celsius:.2}\u{b0}C").is_err() {
            log_warn!("temperature out of range");
            self.temperature_text.clear();
        }
    }

    #[inline]
    pub fn azimuth_text(&self) -> &str { &self.azimuth_text }

    #[inline]
    pub fn temperature_text(&self) -> &str { &self.temperature_text }

    /// North marker angle in tenths of a degree.
    #[inline]
    pub const fn marker_angle(&self) -> i32 { self.marker_angle }

    /// Current top-left placements of N, E, S, W.
    pub fn cardinal_positions(&self) -> [Point; 4] { self.cardinals.map(|c| c.position) }

    /// Heading-0 layouts of N, E, S, W.
    pub fn cardinal_layouts(&self) -> [CardinalLabel; 4] { self.cardinals.map(|c| c.layout) }

    /// Draw the whole page.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(WHITE).ok();

        let ring_style = PrimitiveStyle::with_stroke(ACCENT, RING_WIDTH);
        Circle::with_center(CENTER, OUTER_RING_DIAMETER)
            .into_styled(ring_style)
            .draw(display)
            .ok();
        Circle::with_center(CENTER, INNER_RING_DIAMETER)
            .into_styled(ring_style)
            .draw(display)
            .ok();

        draw_fixed_marker(display);

        Text::with_text_style(&self.azimuth_text, CENTER, READOUT_STYLE, CENTERED)
            .draw(display)
            .ok();
        if !self.temperature_text.is_empty() {
            let pos = CENTER + Point::new(0, TEMPERATURE_OFFSET_Y);
            Text::with_text_style(&self.temperature_text, pos, READOUT_STYLE, CENTERED)
                .draw(display)
                .ok();
        }

        self.draw_north_marker(display);

        for cardinal in &self.cardinals {
            let style = MonoTextStyle::new(CARDINAL_FONT, cardinal.color);
            Text::with_text_style(cardinal.text, cardinal.position, style, TOP_LEFT)
                .draw(display)
                .ok();
        }
    }

    /// Triangle pointing outward, turned around its pivot by the marker angle.
    fn draw_north_marker<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let w = NORTH_MARKER_SIZE.width as i32;
        let h = NORTH_MARKER_SIZE.height as i32;
        let pivot = NORTH_MARKER_POS + NORTH_MARKER_PIVOT;
        // Screen-clockwise marker angle, rotate_about turns the other way
        let degrees = -(self.marker_angle as f32) / 10.0;

        let tip = rotate_about(NORTH_MARKER_POS + Point::new(w / 2, 0), pivot, degrees);
        let left = rotate_about(NORTH_MARKER_POS + Point::new(0, h), pivot, degrees);
        let right = rotate_about(NORTH_MARKER_POS + Point::new(w, h), pivot, degrees);

        Triangle::new(tip, left, right)
            .into_styled(PrimitiveStyle::with_fill(RED))
            .draw(display)
            .ok();
    }
}

/// Downward triangle at 12 o'clock marking the direction the wearer faces.
fn draw_fixed_marker<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let w = FIXED_MARKER_SIZE.width as i32;
    let h = FIXED_MARKER_SIZE.height as i32;
    Triangle::new(
        FIXED_MARKER_POS,
        FIXED_MARKER_POS + Point::new(w, 0),
        FIXED_MARKER_POS + Point::new(w / 2, h),
    )
    .into_styled(PrimitiveStyle::with_fill(BLACK))
    .draw(display)
    .ok();
}

// =============================================================================
// Compass App
// =============================================================================

/// Owner of the compass page lifecycle.
///
/// Sensor callbacks may keep firing after the page is removed, so the setters
/// quietly ignore samples while the page is absent.
pub struct CompassApp {
    marker_rotation: MarkerRotation,
    slot: ScreenSlot<CompassScreen>,
}

impl CompassApp {
    pub const fn new(marker_rotation: MarkerRotation) -> Self {
        Self {
            marker_rotation,
            slot: ScreenSlot::new("compass"),
        }
    }

    /// Build the page. Errors if it is already shown.
    pub fn show(&mut self) -> Result<(), SceneError> {
        self.slot.show(CompassScreen::new(self.marker_rotation))?;
        log_info!("Compass shown");
        Ok(())
    }

    /// Drop the page. Errors if it is not shown.
    pub fn remove(&mut self) -> Result<(), SceneError> {
        self.slot.remove()?;
        log_info!("Compass removed");
        Ok(())
    }

    #[inline]
    pub const fn is_shown(&self) -> bool { self.slot.is_shown() }

    /// Forward a heading sample. `None` while the page is absent.
    pub fn set_heading(
        &mut self,
        heading: i32,
    ) -> Option<CompassReading> {
        self.slot.get_mut().map(|screen| screen.set_heading(heading))
    }

    /// Forward a temperature sample. Ignored while the page is absent.
    pub fn set_temperature(
        &mut self,
        celsius: f32,
    ) {
        if let Some(screen) = self.slot.get_mut() {
            screen.set_temperature(celsius);
        }
    }

    #[inline]
    pub fn screen(&self) -> Option<&CompassScreen> { self.slot.get() }

    /// Draw the page if shown.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        if let Some(screen) = self.slot.get() {
            screen.draw(display);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::Rectangle;

    use super::*;
    use crate::geometry::CompassPoint;
    use crate::test_canvas::TestCanvas;

    fn shown_app(rotation: MarkerRotation) -> CompassApp {
        let mut app = CompassApp::new(rotation);
        app.show().unwrap();
        app
    }

    #[test]
    fn test_new_screen_initial_text() {
        let screen = CompassScreen::new(MarkerRotation::CounterClockwise);
        assert_eq!(screen.azimuth_text(), "0° N");
        assert_eq!(screen.temperature_text(), "");
        assert_eq!(screen.marker_angle(), 0);
    }

    #[test]
    fn test_cardinals_centered_on_anchors() {
        let screen = CompassScreen::new(MarkerRotation::CounterClockwise);
        let anchors = [NORTH_ANCHOR, EAST_ANCHOR, SOUTH_ANCHOR, WEST_ANCHOR];
        for (layout, anchor) in screen.cardinal_layouts().iter().zip(anchors) {
            assert_eq!(layout.visual_center(), anchor);
            assert!(layout.center_offset.x > 0 && layout.center_offset.y > 0);
        }
        assert_eq!(screen.cardinal_positions(), screen.cardinal_layouts().map(|l| l.base_anchor));
    }

    #[test]
    fn test_set_heading_updates_readout() {
        let mut screen = CompassScreen::new(MarkerRotation::CounterClockwise);
        let reading = screen.set_heading(45);
        assert_eq!(reading.degrees, 314);
        assert_eq!(reading.point, CompassPoint::NW);
        assert_eq!(screen.azimuth_text(), "314° NW");

        screen.set_heading(-24);
        assert_eq!(screen.azimuth_text(), "23° NE");
    }

    #[test]
    fn test_quarter_turn_moves_labels() {
        let mut screen = CompassScreen::new(MarkerRotation::CounterClockwise);
        let layouts = screen.cardinal_layouts();
        screen.set_heading(90);
        let positions = screen.cardinal_positions();

        // N takes W's place, E takes N's place
        assert_eq!(positions[0] + layouts[0].center_offset, layouts[0].visual_center() + Point::new(-67, 67));
        assert_eq!(positions[1] + layouts[1].center_offset, layouts[1].visual_center() + Point::new(-67, -67));
    }

    #[test]
    fn test_heading_wraps_before_rotation() {
        let mut a = CompassScreen::new(MarkerRotation::Clockwise);
        let mut b = CompassScreen::new(MarkerRotation::Clockwise);
        a.set_heading(30);
        b.set_heading(390);
        assert_eq!(a.cardinal_positions(), b.cardinal_positions());
        assert_eq!(a.marker_angle(), b.marker_angle());
        assert_eq!(a.azimuth_text(), b.azimuth_text());

        a.set_heading(127);
        b.set_heading(i32::MAX);
        assert_eq!(a.cardinal_positions(), b.cardinal_positions());
        assert_eq!(b.marker_angle(), 1270);
        assert_eq!(b.azimuth_text(), "232° SW");
    }

    #[test]
    fn test_marker_angle_sign_per_platform() {
        let mut breadboard = CompassScreen::new(MarkerRotation::Clockwise);
        let mut pcb = CompassScreen::new(MarkerRotation::CounterClockwise);
        breadboard.set_heading(37);
        pcb.set_heading(37);
        assert_eq!(breadboard.marker_angle(), 370);
        assert_eq!(pcb.marker_angle(), -370);
    }

    #[test]
    fn test_temperature_format() {
        let mut screen = CompassScreen::new(MarkerRotation::CounterClockwise);
        screen.set_temperature(21.5);
        assert_eq!(screen.temperature_text(), "21.50°C");
        screen.set_temperature(-3.256);
        assert_eq!(screen.temperature_text(), "-3.26°C");
    }

    #[test]
    fn test_setters_ignored_while_absent() {
        let mut app = CompassApp::new(MarkerRotation::CounterClockwise);
        assert_eq!(app.set_heading(90), None);
        app.set_temperature(20.0);
        assert!(app.screen().is_none());
    }

    #[test]
    fn test_reshow_starts_from_scratch() {
        let mut app = shown_app(MarkerRotation::CounterClockwise);
        app.set_heading(200);
        app.set_temperature(30.0);
        app.remove().unwrap();
        assert!(!app.is_shown());

        app.show().unwrap();
        let screen = app.screen().unwrap();
        assert_eq!(screen.azimuth_text(), "0° N");
        assert_eq!(screen.temperature_text(), "");
        assert_eq!(screen.marker_angle(), 0);
    }

    #[test]
    fn test_draw_heading_zero() {
        let app = shown_app(MarkerRotation::CounterClockwise);
        let mut canvas = TestCanvas::new();
        app.draw(&mut canvas);

        assert_eq!(canvas.pixel(5, 5), WHITE);
        assert!(canvas.count(ACCENT) > 0);
        // Fixed marker at the top edge
        assert_eq!(canvas.pixel(120, 3), BLACK);
        // North marker points up between the rings
        assert_eq!(canvas.pixel(120, 25), RED);
        // Red "N" around its anchor
        let north_box = Rectangle::with_center(NORTH_ANCHOR, Size::new(30, 36));
        assert!(canvas.count_in(north_box, RED) > 0);
    }

    #[test]
    fn test_draw_marker_turns_with_platform() {
        let mut pcb = shown_app(MarkerRotation::CounterClockwise);
        pcb.set_heading(90);
        let mut canvas = TestCanvas::new();
        pcb.draw(&mut canvas);
        assert_eq!(canvas.pixel(26, 119), RED);
        assert_eq!(canvas.pixel(214, 119), WHITE);

        let mut breadboard = shown_app(MarkerRotation::Clockwise);
        breadboard.set_heading(90);
        let mut canvas = TestCanvas::new();
        breadboard.draw(&mut canvas);
        assert_eq!(canvas.pixel(214, 119), RED);
    }

    #[test]
    fn test_draw_absent_leaves_target_untouched() {
        let app = CompassApp::new(MarkerRotation::CounterClockwise);
        let mut canvas = TestCanvas::new();
        app.draw(&mut canvas);
        assert_eq!(canvas.count(WHITE), 0);
    }
}
