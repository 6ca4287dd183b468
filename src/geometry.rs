//! Compass geometry: heading normalisation, label placement and rotation.
//!
//! Everything here is a pure function of its inputs. Nothing in this module
//! knows about fonts, colors or draw targets; the compass screen measures its
//! labels and hands the sizes in.
//!
//! # Coordinate System
//!
//! Screen coordinates, y grows downward. A positive rotation angle turns a
//! point counter-clockwise as seen on the panel, so a label that starts at
//! 12 o'clock sits at 9 o'clock after 90 degrees.
//!
//! # Azimuth Convention
//!
//! The displayed azimuth is `359 - heading`, not `heading`. The readout has
//! always used this mirrored value and the eight-point table below is keyed on
//! it, so both are kept together in [`classify_heading`].

use core::f32::consts::PI;
use core::fmt;

use embedded_graphics::prelude::{Point, Size};

/// Degrees in a full turn.
pub const FULL_CIRCLE: i32 = 360;

/// Wrap any heading into `[0, 360)`.
#[inline]
pub const fn normalize_heading(heading: i32) -> i32 { heading.rem_euclid(FULL_CIRCLE) }

// =============================================================================
// Cardinal Labels
// =============================================================================

/// Placement of one cardinal label before any rotation is applied.
///
/// `base_anchor` is the top-left corner the text is drawn at, `center_offset`
/// is half the rendered text size. Both are fixed once the label is laid out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CardinalLabel {
    /// Top-left placement at heading 0.
    pub base_anchor: Point,
    /// Half width and half height of the rendered text.
    pub center_offset: Point,
}

impl CardinalLabel {
    /// Visual center of the label at heading 0.
    #[inline]
    pub fn visual_center(&self) -> Point { self.base_anchor + self.center_offset }
}

/// Lay out a label so its visual center lands on `anchor`.
pub fn layout_cardinal(
    anchor: Point,
    rendered_size: Size,
) -> CardinalLabel {
    let center_offset = Point::new((rendered_size.width / 2) as i32, (rendered_size.height / 2) as i32);
    CardinalLabel {
        base_anchor: anchor - center_offset,
        center_offset,
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Rotate `point` around `pivot` by `degrees`, rounded to the nearest pixel.
///
/// The angle is wrapped into `[0, 360)` first, so `d` and `d + 360` give the
/// same pixel.
pub fn rotate_about(
    point: Point,
    pivot: Point,
    degrees: f32,
) -> Point {
    let mut wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped += 360.0;
    }
    let rad = wrapped * PI / 180.0;
    let cos = micromath::F32(rad).cos().0;
    let sin = micromath::F32(rad).sin().0;

    let dx = (point.x - pivot.x) as f32;
    let dy = (point.y - pivot.y) as f32;
    let rx = dx * cos + dy * sin;
    let ry = dy * cos - dx * sin;

    Point::new(pivot.x + round_to_i32(rx), pivot.y + round_to_i32(ry))
}

/// Top-left placement of `label` with the dial turned by `heading` degrees.
///
/// The label's visual center is rotated around `pivot` and the result is
/// shifted back by the center offset.
pub fn rotate_position(
    label: &CardinalLabel,
    heading: i32,
    pivot: Point,
) -> Point {
    let center = rotate_about(label.visual_center(), pivot, normalize_heading(heading) as f32);
    center - label.center_offset
}

/// Round half away from zero. `f32::round` is not available in `core`.
#[inline]
fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 { (value + 0.5) as i32 } else { (value - 0.5) as i32 }
}

// =============================================================================
// Compass Points
// =============================================================================

/// The eight compass points, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum CompassPoint {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

impl CompassPoint {
    /// All points, indexed by [`CompassPoint::index`].
    pub const ALL: [Self; 8] = [Self::N, Self::NE, Self::E, Self::SE, Self::S, Self::SW, Self::W, Self::NW];

    /// Position in the eight-point ring, `0..=7`.
    #[inline]
    pub const fn index(self) -> u8 { self as u8 }

    /// Short name shown in the azimuth readout.
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }

    /// Classify an already-mirrored display azimuth in `[0, 359]`.
    ///
    /// Bands are 45 degrees wide and inclusive on both ends. Anything outside
    /// the seven listed bands is north.
    pub const fn from_display_degrees(degrees: u16) -> Self {
        match degrees {
            23..=67 => Self::NE,
            68..=112 => Self::E,
            113..=157 => Self::SE,
            158..=202 => Self::S,
            203..=247 => Self::SW,
            248..=292 => Self::W,
            293..=337 => Self::NW,
            _ => Self::N,
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Azimuth readout for one heading sample.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct CompassReading {
    /// Displayed azimuth, `0..=359`.
    pub degrees: u16,
    /// Compass point the azimuth falls in.
    pub point: CompassPoint,
}

impl Default for CompassReading {
    fn default() -> Self {
        Self {
            degrees: 0,
            point: CompassPoint::N,
        }
    }
}

impl fmt::Display for CompassReading {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}\u{b0} {}", self.degrees, self.point)
    }
}

/// Derive the azimuth readout for a raw heading.
pub const fn classify_heading(heading: i32) -> CompassReading {
    let adjusted = (FULL_CIRCLE - 1 - normalize_heading(heading)) as u16;
    CompassReading {
        degrees: adjusted,
        point: CompassPoint::from_display_degrees(adjusted),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PIVOT: Point = Point::new(120, 120);

    fn north_label() -> CardinalLabel { layout_cardinal(Point::new(120, 53), Size::new(17, 24)) }

    // =========================================================================
    // Normalisation
    // =========================================================================

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0), 0);
        assert_eq!(normalize_heading(359), 359);
        assert_eq!(normalize_heading(360), 0);
        assert_eq!(normalize_heading(-1), 359);
        assert_eq!(normalize_heading(-361), 359);
        assert_eq!(normalize_heading(725), 5);
        assert_eq!(normalize_heading(i32::MAX), 127);
        assert_eq!(normalize_heading(i32::MIN), 232);
    }

    #[test]
    fn test_classify_matches_normalised_heading() {
        for heading in -1080..=1080 {
            assert_eq!(classify_heading(heading), classify_heading(heading.rem_euclid(360)), "heading {heading}");
        }
        for heading in [i32::MIN, i32::MIN + 1, i32::MAX - 1, i32::MAX] {
            assert_eq!(classify_heading(heading), classify_heading(heading.rem_euclid(360)), "heading {heading}");
        }
        assert_eq!(
            classify_heading(i32::MAX),
            CompassReading {
                degrees: 232,
                point: CompassPoint::SW
            }
        );
        assert_eq!(
            classify_heading(i32::MIN),
            CompassReading {
                degrees: 127,
                point: CompassPoint::SE
            }
        );
    }

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn test_classify_known_headings() {
        assert_eq!(
            classify_heading(0),
            CompassReading {
                degrees: 359,
                point: CompassPoint::N
            }
        );
        assert_eq!(
            classify_heading(45),
            CompassReading {
                degrees: 314,
                point: CompassPoint::NW
            }
        );
    }

    #[test]
    fn test_display_degree_boundaries() {
        let table = [
            (0, CompassPoint::N),
            (22, CompassPoint::N),
            (23, CompassPoint::NE),
            (67, CompassPoint::NE),
            (68, CompassPoint::E),
            (112, CompassPoint::E),
            (113, CompassPoint::SE),
            (157, CompassPoint::SE),
            (158, CompassPoint::S),
            (202, CompassPoint::S),
            (203, CompassPoint::SW),
            (247, CompassPoint::SW),
            (248, CompassPoint::W),
            (292, CompassPoint::W),
            (293, CompassPoint::NW),
            (337, CompassPoint::NW),
            (338, CompassPoint::N),
            (359, CompassPoint::N),
        ];
        for (adjusted, expected) in table {
            assert_eq!(CompassPoint::from_display_degrees(adjusted), expected, "adjusted {adjusted}");

            let reading = classify_heading(359 - i32::from(adjusted));
            assert_eq!(reading.degrees, adjusted);
            assert_eq!(reading.point, expected);
        }
    }

    #[test]
    fn test_reading_degrees_in_range() {
        for heading in -720..720 {
            let reading = classify_heading(heading);
            assert!(reading.degrees <= 359);
            assert!(reading.point.index() <= 7);
        }
    }

    #[test]
    fn test_reading_display_text() {
        assert_eq!(classify_heading(0).to_string(), "359° N");
        assert_eq!(classify_heading(336).to_string(), "23° NE");
        assert_eq!(CompassReading::default().to_string(), "0° N");
    }

    #[test]
    fn test_compass_point_indices() {
        for (i, point) in CompassPoint::ALL.iter().enumerate() {
            assert_eq!(point.index() as usize, i);
        }
        assert_eq!(CompassPoint::NW.index(), 7);
    }

    // =========================================================================
    // Layout and Rotation
    // =========================================================================

    #[test]
    fn test_layout_cardinal_centers_on_anchor() {
        let label = layout_cardinal(Point::new(187, 120), Size::new(17, 24));
        assert_eq!(label.center_offset, Point::new(8, 12));
        assert_eq!(label.base_anchor, Point::new(179, 108));
        assert_eq!(label.visual_center(), Point::new(187, 120));
    }

    #[test]
    fn test_rotation_identity_at_zero() {
        let label = north_label();
        assert_eq!(rotate_position(&label, 0, PIVOT), label.base_anchor);
    }

    #[test]
    fn test_rotation_quarter_turn_moves_north_to_west() {
        let label = north_label();
        let placed = rotate_position(&label, 90, PIVOT);
        assert_eq!(placed + label.center_offset, Point::new(53, 120));
    }

    #[test]
    fn test_rotation_half_turn_moves_north_to_south() {
        let label = north_label();
        let placed = rotate_position(&label, 180, PIVOT);
        assert_eq!(placed + label.center_offset, Point::new(120, 187));
    }

    #[test]
    fn test_rotation_full_turn_periodicity() {
        let label = north_label();
        for heading in (0..360).step_by(7) {
            assert_eq!(
                rotate_position(&label, heading, PIVOT),
                rotate_position(&label, heading + 360, PIVOT),
                "heading {heading}"
            );
            assert_eq!(
                rotate_position(&label, heading, PIVOT),
                rotate_position(&label, heading - 360, PIVOT)
            );
        }
    }

    #[test]
    fn test_rotation_is_idempotent() {
        let label = north_label();
        let first = rotate_position(&label, 123, PIVOT);
        let second = rotate_position(&label, 123, PIVOT);
        assert_eq!(first, second);
        // Base placement is not mutated by rotating
        assert_eq!(label, north_label());
    }

    #[test]
    fn test_rotation_keeps_radius() {
        let label = north_label();
        for heading in (0..360).step_by(15) {
            let center = rotate_position(&label, heading, PIVOT) + label.center_offset;
            let d = center - PIVOT;
            let r2 = d.x * d.x + d.y * d.y;
            // 67 px radius, one pixel of rounding slack either way
            assert!((66 * 66..=68 * 68).contains(&r2), "heading {heading}: {r2}");
        }
    }

    #[test]
    fn test_rotate_about_negative_angle_wraps() {
        let p = Point::new(120, 53);
        assert_eq!(rotate_about(p, PIVOT, -90.0), rotate_about(p, PIVOT, 270.0));
        assert_eq!(rotate_about(p, PIVOT, -90.0), Point::new(187, 120));
    }

    #[test]
    fn test_round_to_i32() {
        assert_eq!(round_to_i32(1.4), 1);
        assert_eq!(round_to_i32(1.5), 2);
        assert_eq!(round_to_i32(-1.4), -1);
        assert_eq!(round_to_i32(-1.5), -2);
    }
}
