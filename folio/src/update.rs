//! Messages, effects and the reducer.
//!
//! ```text
//! PageState + Msg  ->  update()  ->  PageState' + [Effect]
//! ```
//!
//! `update` performs no I/O. The caller executes the returned effects and
//! feeds their outcomes back in as further messages (`SubmitSucceeded`,
//! `SubmitFailed`, `ResetElapsed`).

use std::time::Duration;

use crate::contact::{ContactField, ContactSubmission, ResetToken};
use crate::content::ProjectTab;
use crate::emailjs::DeliveryError;
use crate::overlay::OverlayItem;
use crate::state::{PageState, ViewError};
use crate::theme::Theme;

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;

/// Everything that can happen on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    ToggleTheme,
    /// Hamburger button.
    ToggleMenu,
    /// A mobile menu link was followed.
    CloseMenu,
    SelectTab(ProjectTab),
    OpenOverlay { title: String, items: Vec<OverlayItem>, active_index: usize },
    /// Sidebar entry clicked.
    SelectOverlayItem(usize),
    /// Close button, backdrop click or Escape.
    CloseOverlay,
    EditContact(ContactField, String),
    SubmitContact,
    SubmitSucceeded,
    SubmitFailed(DeliveryError),
    ResetElapsed(ResetToken),
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write the theme to the document's `data-theme` attribute.
    ApplyTheme(Theme),
    /// Deliver the message through the email service.
    SendContact(ContactSubmission),
    /// Arm a timer that sends `Msg::ResetElapsed(token)` after `after`.
    ScheduleReset { token: ResetToken, after: Duration },
    /// Disarm the timer for `token`.
    CancelReset(ResetToken),
}

/// Apply `msg` to `state`.
///
/// # Errors
///
/// Returns a [`ViewError`] when the transition is not allowed; `state` is
/// left unchanged in that case.
pub fn update(state: &mut PageState, msg: Msg) -> Result<Vec<Effect>, ViewError> {
    match msg {
        Msg::ToggleTheme => {
            let theme = state.toggle_theme();
            Ok(vec![Effect::ApplyTheme(theme)])
        }
        Msg::ToggleMenu => {
            state.toggle_menu();
            Ok(Vec::new())
        }
        Msg::CloseMenu => {
            state.close_menu();
            Ok(Vec::new())
        }
        Msg::SelectTab(tab) => {
            state.set_active_tab(tab);
            Ok(Vec::new())
        }
        Msg::OpenOverlay { title, items, active_index } => {
            state.open_overlay(title, items, active_index)?;
            Ok(Vec::new())
        }
        Msg::SelectOverlayItem(index) => {
            state.set_overlay_active_index(index)?;
            Ok(Vec::new())
        }
        Msg::CloseOverlay => {
            state.close_overlay();
            Ok(Vec::new())
        }
        Msg::EditContact(field, value) => {
            state.contact.form.set(field, value);
            Ok(Vec::new())
        }
        Msg::SubmitContact => state.contact.submit(),
        Msg::SubmitSucceeded => state.contact.finish(true),
        Msg::SubmitFailed(_) => state.contact.finish(false),
        Msg::ResetElapsed(token) => {
            state.contact.reset_elapsed(token);
            Ok(Vec::new())
        }
    }
}
