//! Modal image viewer state.
//!
//! An overlay shows one document image at a time with a sidebar listing
//! every item by label. Construction guarantees at least one item and an
//! in-range active index, so [`Overlay::active_item`] never fails.

use crate::state::ViewError;

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// One selectable entry in the overlay sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayItem {
    pub label: String,
    /// Image URL rendered in the main pane.
    pub image: String,
}

impl OverlayItem {
    #[must_use]
    pub fn new(label: impl Into<String>, image: impl Into<String>) -> Self {
        Self { label: label.into(), image: image.into() }
    }
}

/// An open overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    title: String,
    items: Vec<OverlayItem>,
    active_index: usize,
}

impl Overlay {
    /// Build an overlay showing `items[active_index]`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EmptyOverlay`] when `items` is empty and
    /// [`ViewError::OverlayIndexOutOfRange`] when `active_index` does not
    /// address an item.
    pub fn new(title: impl Into<String>, items: Vec<OverlayItem>, active_index: usize) -> Result<Self, ViewError> {
        if items.is_empty() {
            return Err(ViewError::EmptyOverlay);
        }
        check_index(active_index, items.len())?;
        Ok(Self { title: title.into(), items, active_index })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[OverlayItem] {
        &self.items
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn active_item(&self) -> &OverlayItem {
        &self.items[self.active_index]
    }

    /// Make `index` the active item.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::OverlayIndexOutOfRange`] and keeps the current
    /// selection when `index` is past the end.
    pub fn select(&mut self, index: usize) -> Result<(), ViewError> {
        check_index(index, self.items.len())?;
        self.active_index = index;
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), ViewError> {
    if index < len { Ok(()) } else { Err(ViewError::OverlayIndexOutOfRange { index, len }) }
}
