// Canvas settings: the selected trailer and its dimensions.
//
// A single [`CanvasSettingsProvider`] owns the state for the lifetime of the
// page. Everything else reaches it through [`CanvasSettingsHandle`]s, which
// stop working once the provider is gone.

use super::catalog::{Dimensions, TrailerKey};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSettings {
    pub trailer: TrailerKey,
    pub dimensions: Dimensions,
    /// Bumped on every effective selection change.
    pub revision: u64,
}

impl CanvasSettings {
    fn new(trailer: TrailerKey) -> Self {
        Self {
            trailer,
            dimensions: trailer.dimensions(),
            revision: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("canvas settings accessed outside of their provider")]
    OutsideProvider,
}

pub struct CanvasSettingsProvider {
    state: Rc<RefCell<CanvasSettings>>,
}

impl CanvasSettingsProvider {
    pub fn new(initial: TrailerKey) -> Self {
        Self {
            state: Rc::new(RefCell::new(CanvasSettings::new(initial))),
        }
    }

    pub fn handle(&self) -> CanvasSettingsHandle {
        CanvasSettingsHandle {
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Default for CanvasSettingsProvider {
    fn default() -> Self {
        Self::new(TrailerKey::default())
    }
}

#[derive(Clone, Debug)]
pub struct CanvasSettingsHandle {
    state: Weak<RefCell<CanvasSettings>>,
}

impl CanvasSettingsHandle {
    pub fn try_get(&self) -> Result<CanvasSettings, SettingsError> {
        let state = self.state.upgrade().ok_or(SettingsError::OutsideProvider)?;
        let settings = *state.borrow();
        Ok(settings)
    }

    /// Current settings.
    ///
    /// # Panics
    ///
    /// Panics when the provider has been dropped or never existed; that is a
    /// wiring mistake, not a runtime condition.
    pub fn get(&self) -> CanvasSettings {
        match self.try_get() {
            Ok(s) => s,
            Err(e) => panic!("{e}"),
        }
    }

    /// Select a trailer. Returns whether anything changed.
    pub fn set_trailer(&self, trailer: TrailerKey) -> Result<bool, SettingsError> {
        let state = self.state.upgrade().ok_or(SettingsError::OutsideProvider)?;
        let mut s = state.borrow_mut();
        if s.trailer == trailer {
            return Ok(false);
        }
        s.trailer = trailer;
        s.dimensions = trailer.dimensions();
        s.revision += 1;
        log::info!(
            "[settings] trailer={} dims={}x{}x{}cm rev={}",
            trailer,
            s.dimensions.width,
            s.dimensions.length,
            s.dimensions.height,
            s.revision
        );
        Ok(true)
    }
}
