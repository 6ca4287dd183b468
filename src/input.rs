//! Button debounce and input mapping.
//!
//! Provides time-based edge detection with debouncing to prevent multiple
//! triggers from contact bounce on physical buttons, and converts the
//! resulting presses into page actions.
//!
//! Time is passed in as milliseconds so the same logic runs under the
//! firmware's embassy clock, the simulator's wall clock and the unit tests.

use crate::pages::Page;

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u32 = 50;

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change_ms: Option<u32>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change_ms: None,
        }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low` means pressed. A level change
    /// within [`DEBOUNCE_MS`] of the previous accepted change is ignored.
    pub fn just_pressed(
        &mut self,
        is_low: bool,
        now_ms: u32,
    ) -> bool {
        if is_low != self.was_pressed {
            if let Some(last) = self.last_change_ms
                && now_ms.wrapping_sub(last) < DEBOUNCE_MS
            {
                return false;
            }

            self.was_pressed = is_low;
            self.last_change_ms = Some(now_ms);

            // Press is the falling edge
            return is_low;
        }

        false
    }
}

impl Default for ButtonState {
    fn default() -> Self { Self::new() }
}

/// Page action requested by one frame of button input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Action {
    /// Switch to the given page.
    SwitchPage(Page),
    /// Add one image rotation step.
    AdvanceRotation,
    /// Clear the image rotation.
    ResetRotation,
}

/// Result of processing button inputs for a single frame.
#[derive(Default, Debug)]
pub struct InputResult {
    /// New page if Y was pressed
    pub new_page: Option<Page>,
    /// A pressed on the image viewer
    pub advance_requested: bool,
    /// B pressed on the image viewer
    pub reset_requested: bool,
}

impl InputResult {
    /// Actions in the order they should be applied.
    pub fn actions(&self) -> impl Iterator<Item = Action> {
        let rotation = [
            self.advance_requested.then_some(Action::AdvanceRotation),
            self.reset_requested.then_some(Action::ResetRotation),
        ];
        rotation
            .into_iter()
            .chain(core::iter::once(self.new_page.map(Action::SwitchPage)))
            .flatten()
    }
}

/// Debounce state for the three watch buttons.
#[derive(Default)]
pub struct Buttons {
    pub a: ButtonState,
    pub b: ButtonState,
    pub y: ButtonState,
}

/// Raw button levels for one frame, `true` when held down.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonLevels {
    pub a: bool,
    pub b: bool,
    pub y: bool,
}

/// Process button inputs and return the resulting actions.
///
/// * Y cycles pages from any page.
/// * A advances and B resets the image rotation, image viewer only.
pub fn process_buttons(
    buttons: &mut Buttons,
    levels: ButtonLevels,
    current_page: Page,
    now_ms: u32,
) -> InputResult {
    let mut result = InputResult::default();

    if buttons.y.just_pressed(levels.y, now_ms) {
        result.new_page = Some(current_page.toggle());
    }

    // A/B are sampled on every page so their debounce state tracks the pin
    let a = buttons.a.just_pressed(levels.a, now_ms);
    let b = buttons.b.just_pressed(levels.b, now_ms);
    if current_page == Page::ImageViewer {
        result.advance_requested = a;
        result.reset_requested = b;
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
