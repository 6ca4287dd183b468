//! Page coordinator shared by the firmware and the simulator.
//!
//! Owns the compass and image viewer lifecycles. Only the current page's
//! screen is shown; switching pages removes the old screen and builds the new
//! one from scratch. The latest sensor sample is kept so a freshly shown
//! compass does not flash heading 0 until the next sample arrives.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::WatchConfig;
use crate::demo::SensorSample;
use crate::geometry::CompassReading;
use crate::input::{Action, InputResult};
use crate::pages::Page;
use crate::scene::SceneError;
use crate::screens::{CompassApp, ImageViewerApp, draw_logs_page};

pub struct WatchApp {
    page: Page,
    compass: CompassApp,
    viewer: ImageViewerApp,
    last_sample: Option<SensorSample>,
}

impl WatchApp {
    /// Coordinator with no page shown yet. Call [`WatchApp::start`] next.
    pub const fn new(config: WatchConfig) -> Self {
        Self {
            page: Page::Compass,
            compass: CompassApp::new(config.platform.marker_rotation()),
            viewer: ImageViewerApp::new(),
            last_sample: None,
        }
    }

    /// Show the default page.
    pub fn start(&mut self) -> Result<(), SceneError> {
        log_info!("Starting on {} page", self.page.name());
        self.show_page(self.page)
    }

    #[inline]
    pub const fn page(&self) -> Page { self.page }

    #[inline]
    pub const fn compass(&self) -> &CompassApp { &self.compass }

    #[inline]
    pub const fn viewer(&self) -> &ImageViewerApp { &self.viewer }

    /// Remove the current page's screen and show `page`.
    pub fn switch_to(
        &mut self,
        page: Page,
    ) -> Result<(), SceneError> {
        if page == self.page {
            return Ok(());
        }
        self.remove_page(self.page)?;
        self.page = page;
        log_info!("Page: {}", page.name());
        self.show_page(page)
    }

    /// Apply one frame of button input.
    pub fn apply(
        &mut self,
        input: &InputResult,
    ) -> Result<(), SceneError> {
        for action in input.actions() {
            match action {
                Action::AdvanceRotation => {
                    self.viewer.advance_rotation();
                }
                Action::ResetRotation => self.viewer.reset_rotation(),
                Action::SwitchPage(page) => self.switch_to(page)?,
            }
        }
        Ok(())
    }

    /// Forward a sensor sample. Returns the azimuth reading if the compass is shown.
    pub fn on_sample(
        &mut self,
        sample: SensorSample,
    ) -> Option<CompassReading> {
        self.last_sample = Some(sample);
        self.compass.set_temperature(sample.temperature_c);
        self.compass.set_heading(sample.heading)
    }

    /// Advance animations to `now_ms`.
    pub fn tick(
        &mut self,
        now_ms: u32,
    ) {
        self.viewer.tick(now_ms);
    }

    /// Touch or mouse press at `point`. Returns true if a screen handled it.
    pub fn on_press(
        &mut self,
        point: Point,
    ) -> bool {
        match self.page {
            Page::ImageViewer => self.viewer.press(point),
            Page::Compass | Page::Logs => false,
        }
    }

    /// Draw the current page.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.page {
            Page::Compass => self.compass.draw(display),
            Page::ImageViewer => self.viewer.draw(display),
            Page::Logs => draw_logs_page(display),
        }
    }

    fn show_page(
        &mut self,
        page: Page,
    ) -> Result<(), SceneError> {
        match page {
            Page::Compass => {
                self.compass.show()?;
                if let Some(sample) = self.last_sample {
                    self.compass.set_temperature(sample.temperature_c);
                    self.compass.set_heading(sample.heading);
                }
            }
            Page::ImageViewer => self.viewer.show()?,
            Page::Logs => {}
        }
        Ok(())
    }

    fn remove_page(
        &mut self,
        page: Page,
    ) -> Result<(), SceneError> {
        match page {
            Page::Compass => self.compass.remove(),
            Page::ImageViewer => self.viewer.remove(),
            Page::Logs => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
