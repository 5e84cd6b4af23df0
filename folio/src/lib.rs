//! View-state model for the portfolio page.
//!
//! This crate owns everything about the page that is not markup: the state
//! record, the messages that change it, the side effects those changes
//! request, the static profile content and the request shape sent to the
//! email-delivery service. It has no browser or server dependency so both
//! `client` and the test suite can drive it directly.
//!
//! DESIGN
//! ======
//! Every user interaction becomes a [`Msg`]. [`update`] applies it to a
//! [`PageState`] and returns the [`Effect`]s the caller must execute
//! (write the theme attribute, send the contact email, arm or cancel the
//! reset timer). Rejected transitions come back as [`ViewError`] and leave
//! the state untouched.

pub mod contact;
pub mod content;
pub mod emailjs;
pub mod overlay;
pub mod state;
pub mod theme;
pub mod update;

pub use contact::{ContactField, ContactForm, ContactState, ContactSubmission, FormError, FormStatus, Purpose, RESET_DELAY, ResetToken};
pub use content::ProjectTab;
pub use emailjs::{DeliveryError, EmailJsConfig, EmailJsRequest};
pub use overlay::{Overlay, OverlayItem};
pub use state::{PageState, ViewError};
pub use theme::Theme;
pub use update::{Effect, Msg, update};
