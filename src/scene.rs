//! Screen lifecycle: a slot that holds at most one live screen.
//!
//! A screen is either absent or shown. Showing builds it, removing drops it,
//! nothing survives a remove. Calling `show` on a shown slot or `remove` on an
//! absent one is a caller bug: debug builds panic, release builds log the
//! violation and return [`SceneError`] with the slot unchanged.

use thiserror::Error;

/// Screen lifecycle violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SceneError {
    /// `show` was called while the screen is already displayed.
    #[error("{0} screen is already shown")]
    AlreadyShown(&'static str),
    /// `remove` was called while the screen is not displayed.
    #[error("{0} screen is not shown")]
    NotShown(&'static str),
}

/// Owner of one screen's live state.
pub struct ScreenSlot<S> {
    name: &'static str,
    screen: Option<S>,
}

impl<S> ScreenSlot<S> {
    /// Empty slot. `name` is used in log messages and errors.
    pub const fn new(name: &'static str) -> Self { Self { name, screen: None } }

    #[inline]
    pub const fn is_shown(&self) -> bool { self.screen.is_some() }

    /// Install a freshly built screen.
    pub fn show(
        &mut self,
        screen: S,
    ) -> Result<&mut S, SceneError> {
        if self.screen.is_some() {
            return Err(self.violation(SceneError::AlreadyShown(self.name)));
        }
        log_debug!("{} shown", self.name);
        Ok(self.screen.insert(screen))
    }

    /// Take the live screen out, leaving the slot absent.
    pub fn remove(&mut self) -> Result<S, SceneError> {
        match self.screen.take() {
            Some(screen) => {
                log_debug!("{} removed", self.name);
                Ok(screen)
            }
            None => Err(self.violation(SceneError::NotShown(self.name))),
        }
    }

    /// Live screen, if shown.
    #[inline]
    pub fn get(&self) -> Option<&S> { self.screen.as_ref() }

    /// Live screen, if shown.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut S> { self.screen.as_mut() }

    fn violation(
        &self,
        err: SceneError,
    ) -> SceneError {
        log_error!("{}", err);
        if cfg!(debug_assertions) {
            panic!("screen lifecycle violation: {err}");
        }
        err
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
