//! Image viewer page: a spinning emblem and a round rotate button.
//!
//! The emblem spins one full turn every two seconds, forever. Each press on
//! the emblem or the button adds a further 10 degree step on top of the
//! animation, and a reset clears the step.
//!
//! All angles are in tenths of a degree, positive clockwise on screen.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, ContainsPoint, PrimitiveStyle, Rectangle, Triangle};

use crate::colors::{ACCENT, EMBLEM_SHADE, VIEWER_BACKGROUND, WHITE};
use crate::config::layout::{CENTER, EMBLEM_RADIUS, VIEWER_BUTTON_DIAMETER, VIEWER_BUTTON_POS};
use crate::geometry::rotate_about;
use crate::scene::{SceneError, ScreenSlot};

/// Tenths of a degree added per press.
pub const ROTATION_STEP: u16 = 100;

/// Tenths of a degree in a full turn.
pub const FULL_TURN: u16 = 3600;

/// Duration of one animation turn.
pub const ROTATION_PERIOD_MS: u32 = 2000;

/// Length of the long emblem kite, tip to center.
const EMBLEM_LONG: i32 = 50;
/// Length of the short emblem kite.
const EMBLEM_SHORT: i32 = 34;
/// Half width of each kite at the center.
const EMBLEM_WAIST: i32 = 14;

/// Looping linear rotation from 0 to a full turn, no delay between loops.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationAnimation {
    start_ms: Option<u32>,
}

impl RotationAnimation {
    /// Animation that starts on its first sample.
    pub const fn new() -> Self { Self { start_ms: None } }

    /// Animation angle at `now_ms`, in tenths of a degree.
    pub fn angle_at(
        &mut self,
        now_ms: u32,
    ) -> u16 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let phase = now_ms.wrapping_sub(start) % ROTATION_PERIOD_MS;
        (phase * u32::from(FULL_TURN) / ROTATION_PERIOD_MS) as u16
    }
}

/// Live state of the image viewer page.
pub struct ImageViewerScreen {
    animation: RotationAnimation,
    animation_angle: u16,
    rotation: u16,
}

impl ImageViewerScreen {
    pub const fn new() -> Self {
        Self {
            animation: RotationAnimation::new(),
            animation_angle: 0,
            rotation: 0,
        }
    }

    /// Advance the looping animation to `now_ms`.
    pub fn tick(
        &mut self,
        now_ms: u32,
    ) {
        self.animation_angle = self.animation.angle_at(now_ms);
    }

    /// Add one rotation step, wrapping at a full turn. Returns the new step total.
    pub fn advance_rotation(&mut self) -> u16 {
        self.rotation = (self.rotation + ROTATION_STEP) % FULL_TURN;
        self.rotation
    }

    /// Clear the press rotation. The animation keeps running.
    pub fn reset_rotation(&mut self) { self.rotation = 0; }

    /// Accumulated press rotation.
    #[inline]
    pub const fn rotation(&self) -> u16 { self.rotation }

    /// Current animation angle.
    #[inline]
    pub const fn animation_angle(&self) -> u16 { self.animation_angle }

    /// Angle the emblem is drawn at.
    #[inline]
    pub const fn display_angle(&self) -> u16 { (self.animation_angle + self.rotation) % FULL_TURN }

    /// Area that accepts presses: the emblem or the round button.
    pub fn is_press_target(
        &self,
        point: Point,
    ) -> bool {
        emblem_bounds().contains(point) || button().contains(point)
    }

    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(VIEWER_BACKGROUND).ok();
        self.draw_emblem(display);
        draw_button(display);
    }

    fn draw_emblem<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        Circle::with_center(CENTER, (EMBLEM_RADIUS * 2) as u32)
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 2))
            .draw(display)
            .ok();

        let degrees = -f32::from(self.display_angle()) / 10.0;
        let at = |x: i32, y: i32| rotate_about(CENTER + Point::new(x, y), CENTER, degrees);
        let fill = |color| PrimitiveStyle::with_fill(color);

        // Short east-west kite underneath
        for (tip, color) in [(EMBLEM_SHORT, WHITE), (-EMBLEM_SHORT, EMBLEM_SHADE)] {
            Triangle::new(at(tip, 0), at(0, -EMBLEM_WAIST), at(0, EMBLEM_WAIST))
                .into_styled(fill(color))
                .draw(display)
                .ok();
        }

        // Long north-south kite, light half pointing up at angle 0
        for (tip, color) in [(-EMBLEM_LONG, WHITE), (EMBLEM_LONG, EMBLEM_SHADE)] {
            Triangle::new(at(0, tip), at(-EMBLEM_WAIST, 0), at(EMBLEM_WAIST, 0))
                .into_styled(fill(color))
                .draw(display)
                .ok();
        }
    }
}

impl Default for ImageViewerScreen {
    fn default() -> Self { Self::new() }
}

/// Square the emblem occupies at any angle.
fn emblem_bounds() -> Rectangle {
    let side = (EMBLEM_RADIUS * 2) as u32;
    Rectangle::with_center(CENTER, Size::new(side, side))
}

/// Round button in the bottom-right corner.
fn button() -> Circle { Circle::new(VIEWER_BUTTON_POS, VIEWER_BUTTON_DIAMETER) }

/// Filled button with a refresh glyph: an open ring and an arrowhead.
fn draw_button<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let button = button();
    let center = button.center();
    button
        .into_styled(PrimitiveStyle::with_fill(ACCENT))
        .draw(display)
        .ok();

    let glyph = PrimitiveStyle::with_stroke(WHITE, 3);
    Arc::with_center(center, 26, Angle::from_degrees(0.0), Angle::from_degrees(270.0))
        .into_styled(glyph)
        .draw(display)
        .ok();
    // Arc ends at 12 o'clock, arrowhead points along the sweep
    Triangle::new(
        center + Point::new(-1, -18),
        center + Point::new(-1, -8),
        center + Point::new(5, -13),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(display)
    .ok();
}

// =============================================================================
// Image Viewer App
// =============================================================================

/// Owner of the image viewer page lifecycle.
pub struct ImageViewerApp {
    slot: ScreenSlot<ImageViewerScreen>,
}

impl ImageViewerApp {
    pub const fn new() -> Self {
        Self {
            slot: ScreenSlot::new("image viewer"),
        }
    }

    /// Build the page. Errors if it is already shown.
    pub fn show(&mut self) -> Result<(), SceneError> {
        self.slot.show(ImageViewerScreen::new())?;
        log_info!("Image viewer shown");
        Ok(())
    }

    /// Drop the page. Errors if it is not shown.
    pub fn remove(&mut self) -> Result<(), SceneError> {
        self.slot.remove()?;
        log_info!("Image viewer removed");
        Ok(())
    }

    #[inline]
    pub const fn is_shown(&self) -> bool { self.slot.is_shown() }

    /// Add one rotation step. `None` while the page is absent.
    pub fn advance_rotation(&mut self) -> Option<u16> {
        let rotation = self.slot.get_mut()?.advance_rotation();
        log_debug!("Image rotation {}", rotation);
        Some(rotation)
    }

    /// Clear the press rotation. Ignored while the page is absent.
    pub fn reset_rotation(&mut self) {
        if let Some(screen) = self.slot.get_mut() {
            screen.reset_rotation();
            log_debug!("Image rotation reset");
        }
    }

    /// Advance the animation. Ignored while the page is absent.
    pub fn tick(
        &mut self,
        now_ms: u32,
    ) {
        if let Some(screen) = self.slot.get_mut() {
            screen.tick(now_ms);
        }
    }

    /// Handle a press at `point`. Returns true if it landed on the emblem or button.
    pub fn press(
        &mut self,
        point: Point,
    ) -> bool {
        let hit = self.slot.get().is_some_and(|screen| screen.is_press_target(point));
        if hit {
            self.advance_rotation();
        }
        hit
    }

    #[inline]
    pub fn screen(&self) -> Option<&ImageViewerScreen> { self.slot.get() }

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

impl Default for ImageViewerApp {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_canvas::TestCanvas;

    // =========================================================================
    // Rotation
    // =========================================================================

    #[test]
    fn test_advance_full_turn_returns_to_zero() {
        let mut screen = ImageViewerScreen::new();
        for _ in 0..35 {
            assert_ne!(screen.advance_rotation(), 0);
        }
        assert_eq!(screen.advance_rotation(), 0);
    }

    #[test]
    fn test_advance_and_reset() {
        let mut screen = ImageViewerScreen::new();
        assert_eq!(screen.advance_rotation(), 100);
        assert_eq!(screen.advance_rotation(), 200);
        screen.reset_rotation();
        assert_eq!(screen.rotation(), 0);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    #[test]
    fn test_animation_is_linear_and_loops() {
        let mut anim = RotationAnimation::new();
        assert_eq!(anim.angle_at(5_000), 0);
        assert_eq!(anim.angle_at(5_500), 900);
        assert_eq!(anim.angle_at(6_000), 1800);
        assert_eq!(anim.angle_at(6_999), 3598);
        assert_eq!(anim.angle_at(7_000), 0);
        assert_eq!(anim.angle_at(7_500), 900);
    }

    #[test]
    fn test_animation_survives_clock_wrap() {
        let mut anim = RotationAnimation::new();
        assert_eq!(anim.angle_at(u32::MAX - 499), 0);
        assert_eq!(anim.angle_at(500), 1800);
    }

    #[test]
    fn test_display_angle_combines_animation_and_presses() {
        let mut screen = ImageViewerScreen::new();
        screen.tick(0);
        screen.tick(1_900);
        assert_eq!(screen.animation_angle(), 3420);
        screen.advance_rotation();
        screen.advance_rotation();
        assert_eq!(screen.display_angle(), 20);
    }

    // =========================================================================
    // App Lifecycle
    // =========================================================================

    #[test]
    fn test_operations_ignored_while_absent() {
        let mut app = ImageViewerApp::new();
        assert_eq!(app.advance_rotation(), None);
        app.reset_rotation();
        app.tick(1_000);
        assert!(!app.press(CENTER));
        assert!(app.screen().is_none());
    }

    #[test]
    fn test_reshow_clears_rotation() {
        let mut app = ImageViewerApp::new();
        app.show().unwrap();
        app.advance_rotation();
        app.remove().unwrap();
        app.show().unwrap();
        assert_eq!(app.screen().unwrap().rotation(), 0);
    }

    #[test]
    fn test_press_targets() {
        let mut app = ImageViewerApp::new();
        app.show().unwrap();
        assert!(app.press(CENTER));
        assert!(app.press(button().center()));
        assert!(!app.press(Point::new(5, 5)));
        assert!(!app.press(Point::new(232, 232)));
        assert_eq!(app.screen().unwrap().rotation(), 200);
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    #[test]
    fn test_draw_layout() {
        let mut app = ImageViewerApp::new();
        app.show().unwrap();
        let mut canvas = TestCanvas::new();
        app.draw(&mut canvas);

        assert_eq!(canvas.pixel(5, 5), VIEWER_BACKGROUND);
        let c = button().center();
        assert_eq!(canvas.pixel(c.x, c.y), ACCENT);
        // Light half of the emblem points up at angle 0
        assert_eq!(canvas.pixel(120, 80), WHITE);
        assert_eq!(canvas.pixel(120, 160), EMBLEM_SHADE);
    }

    #[test]
    fn test_draw_half_turn_flips_emblem() {
        let mut app = ImageViewerApp::new();
        app.show().unwrap();
        app.tick(0);
        app.tick(1_000);
        let mut canvas = TestCanvas::new();
        app.draw(&mut canvas);

        assert_eq!(canvas.pixel(120, 80), EMBLEM_SHADE);
        assert_eq!(canvas.pixel(120, 160), WHITE);
    }
}
