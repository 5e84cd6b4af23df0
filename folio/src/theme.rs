//! Color theme selection.
//!
//! The active theme is reflected in the `data-theme` attribute on the
//! document root; stylesheet rules key off that attribute. Nothing is
//! persisted past the page lifetime.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Page color theme. The page starts dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Glyph shown on the toggle button: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Tooltip for the toggle button.
    #[must_use]
    pub fn toggle_title(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light theme",
            Self::Light => "Switch to dark theme",
        }
    }
}
