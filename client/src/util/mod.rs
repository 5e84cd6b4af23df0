//! Small helpers behind the components.
//!
//! `css` builds state-dependent class strings; `dark_mode` writes the theme
//! attribute on `<html>` and is the only module here that touches the DOM.

pub mod css;
pub mod dark_mode;
