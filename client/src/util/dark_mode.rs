//! Theme attribute on the document root.
//!
//! Writes the `data-theme` attribute on the `<html>` element; stylesheet
//! rules select on it. The server shell renders the default theme, so only
//! toggles need to touch the DOM. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The theme is not persisted; a reload starts from the default. SSR paths
//! no-op to keep server rendering deterministic.

use folio::Theme;

#[cfg(feature = "hydrate")]
const THEME_ATTR: &str = "data-theme";

/// Apply `theme` to the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if el.set_attribute(THEME_ATTR, theme.as_attr()).is_err() {
                    log::warn!("failed to set {THEME_ATTR}");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
