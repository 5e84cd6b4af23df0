//! Drives the reducer the way the browser dispatcher does, with a simulated
//! clock in place of real timers and a recorder in place of the email
//! service.

use std::time::Duration;

use folio::{ContactField, ContactSubmission, Effect, Msg, PageState, ResetToken, Theme, ViewError, update};

pub struct Harness {
    pub state: PageState,
    /// Submissions handed to the email service, oldest first.
    pub sent: Vec<ContactSubmission>,
    /// Last theme written to the document.
    pub applied_theme: Option<Theme>,
    now: Duration,
    timers: Vec<(Duration, ResetToken)>,
}

impl Harness {
    pub fn new() -> Self {
        Self { state: PageState::default(), sent: Vec::new(), applied_theme: None, now: Duration::ZERO, timers: Vec::new() }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Result<(), ViewError> {
        for effect in update(&mut self.state, msg)? {
            match effect {
                Effect::ApplyTheme(theme) => self.applied_theme = Some(theme),
                Effect::SendContact(submission) => self.sent.push(submission),
                Effect::ScheduleReset { token, after } => self.timers.push((self.now + after, token)),
                Effect::CancelReset(token) => self.timers.retain(|(_, t)| *t != token),
            }
        }
        Ok(())
    }

    pub fn fill_form(&mut self, email: &str, purpose: &str, message: &str) {
        for (field, value) in [(ContactField::Email, email), (ContactField::Purpose, purpose), (ContactField::Message, message)] {
            self.dispatch(Msg::EditContact(field, value.to_owned())).expect("editing a field always succeeds");
        }
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        loop {
            self.timers.sort_by_key(|(due, _)| *due);
            match self.timers.first() {
                Some(&(due, token)) if due <= target => {
                    self.timers.remove(0);
                    self.now = due;
                    self.dispatch(Msg::ResetElapsed(token)).expect("reset never fails");
                }
                _ => break,
            }
        }
        self.now = target;
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
