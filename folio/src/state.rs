//! The page's view state.
//!
//! DESIGN
//! ======
//! One record owned by one controller. Renderers read it; only
//! [`crate::update`] mutates it. Operations over finite domains (theme,
//! menu, tab) are total; overlay operations validate their indices.

use crate::contact::{ContactState, FormError};
use crate::content::{self, Project, ProjectTab};
use crate::overlay::{Overlay, OverlayItem};
use crate::theme::Theme;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// A transition the current state does not allow. The state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("overlay needs at least one item")]
    EmptyOverlay,
    #[error("overlay index {index} out of range for {len} items")]
    OverlayIndexOutOfRange { index: usize, len: usize },
    #[error("no overlay is open")]
    NoOverlay,
    #[error("a contact submission is already in flight")]
    SubmitInFlight,
    #[error("no contact submission is in flight")]
    NoSubmitInFlight,
    #[error(transparent)]
    Form(#[from] FormError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub theme: Theme,
    pub menu_open: bool,
    pub active_tab: ProjectTab,
    pub overlay: Option<Overlay>,
    pub contact: ContactState,
}

impl PageState {
    /// Flip the theme and return the new one.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_active_tab(&mut self, tab: ProjectTab) {
        self.active_tab = tab;
    }

    /// Show `items` in the overlay, replacing any open one.
    ///
    /// # Errors
    ///
    /// See [`Overlay::new`]. A failed open leaves the current overlay as is.
    pub fn open_overlay(
        &mut self,
        title: impl Into<String>,
        items: Vec<OverlayItem>,
        active_index: usize,
    ) -> Result<(), ViewError> {
        self.overlay = Some(Overlay::new(title, items, active_index)?);
        Ok(())
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// # Errors
    ///
    /// [`ViewError::NoOverlay`] when nothing is open,
    /// [`ViewError::OverlayIndexOutOfRange`] for a bad index.
    pub fn set_overlay_active_index(&mut self, index: usize) -> Result<(), ViewError> {
        self.overlay.as_mut().ok_or(ViewError::NoOverlay)?.select(index)
    }

    /// Projects for the active tab, and only those.
    pub fn visible_projects(&self) -> impl Iterator<Item = &'static Project> + use<> {
        content::projects_for(self.active_tab)
    }
}
