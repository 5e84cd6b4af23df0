//! Message dispatch and effect execution.
//!
//! `Dispatcher::dispatch` runs `folio::update` against the page signal and
//! then executes each returned effect:
//!
//! - `ApplyTheme`: write `data-theme` on `<html>`.
//! - `SendContact`: POST to EmailJS on a local task, then dispatch
//!   `SubmitSucceeded` or `SubmitFailed`.
//! - `ScheduleReset` / `CancelReset`: arm or drop the single reset timeout.
//!
//! Effects other than the theme need a browser and are inert outside the
//! `hydrate` build.

use folio::{Effect, Msg, PageState, ViewError};
use leptos::prelude::*;

use crate::util::dark_mode;

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

/// Copyable handle that components use to send messages.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<PageState>,
    #[cfg(feature = "hydrate")]
    reset_timer: StoredValue<Option<(folio::ResetToken, gloo_timers::callback::Timeout)>, LocalStorage>,
}

impl Dispatcher {
    pub fn new(state: RwSignal<PageState>) -> Self {
        Self {
            state,
            #[cfg(feature = "hydrate")]
            reset_timer: StoredValue::new_local(None),
        }
    }

    pub fn state(self) -> RwSignal<PageState> {
        self.state
    }

    /// Apply `msg` and run the resulting effects. Rejected transitions are
    /// logged and otherwise ignored.
    pub fn dispatch(self, msg: Msg) {
        let Some(result) = self.state.try_update(|state| folio::update(state, msg)) else {
            return;
        };
        match result {
            Ok(effects) => {
                for effect in effects {
                    self.run(effect);
                }
            }
            Err(err) => report_rejected(&err),
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::ApplyTheme(theme) => dark_mode::apply(theme),
            Effect::SendContact(submission) => self.send_contact(submission),
            Effect::ScheduleReset { token, after } => self.schedule_reset(token, after),
            Effect::CancelReset(token) => self.cancel_reset(token),
        }
    }

    #[cfg(feature = "hydrate")]
    fn send_contact(self, submission: folio::ContactSubmission) {
        leptos::task::spawn_local(async move {
            let config = crate::net::emailjs::config();
            match crate::net::emailjs::send(&config, &submission).await {
                Ok(()) => {
                    log::info!("contact message delivered");
                    self.dispatch(Msg::SubmitSucceeded);
                }
                Err(err) => {
                    log::error!("contact message failed: {err}");
                    self.dispatch(Msg::SubmitFailed(err));
                }
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn send_contact(self, submission: folio::ContactSubmission) {
        let _ = submission;
    }

    #[cfg(feature = "hydrate")]
    fn schedule_reset(self, token: folio::ResetToken, after: std::time::Duration) {
        let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
        // The fired handle stays in the slot; dropping it from inside its
        // own callback would free the running closure.
        let timeout = gloo_timers::callback::Timeout::new(millis, move || self.dispatch(Msg::ResetElapsed(token)));
        // Replacing the slot drops (and so clears) any earlier timeout.
        self.reset_timer.set_value(Some((token, timeout)));
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_reset(self, token: folio::ResetToken, after: std::time::Duration) {
        let _ = (token, after);
    }

    #[cfg(feature = "hydrate")]
    fn cancel_reset(self, token: folio::ResetToken) {
        self.reset_timer.update_value(|slot| {
            if slot.as_ref().is_some_and(|(armed, _)| *armed == token) {
                *slot = None;
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn cancel_reset(self, token: folio::ResetToken) {
        let _ = token;
    }
}

fn report_rejected(err: &ViewError) {
    #[cfg(feature = "hydrate")]
    log::warn!("ignored page event: {err}");
    #[cfg(not(feature = "hydrate"))]
    let _ = err;
}
