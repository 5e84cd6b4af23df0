//! Page sections and shared widgets.
//!
//! ARCHITECTURE
//! ============
//! Each section is a component reading `folio` content directly; only the
//! sections with interactive state (navbar, projects, contact, overlay)
//! touch the page signal. Every state change goes through the dispatcher.

pub mod achievements;
pub mod card_action;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod experience;
pub mod navbar;
pub mod overlay_viewer;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod skills;
pub mod tech_tags;
