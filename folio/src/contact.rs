//! Contact form fields and the submission state machine.
//!
//! ```text
//! Idle --submit--> Sending --delivered--> Success --4s--> Idle
//!                          \--failed----> Error   --4s--> Idle
//! ```
//!
//! Only one submission may be in flight. Each entry into `Success` or
//! `Error` arms a reset identified by a fresh [`ResetToken`]; a new submit
//! cancels the armed reset, and a reset carrying any other token is ignored.

use std::time::Duration;

use crate::state::ViewError;
use crate::update::Effect;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Delay between a finished submission and the status returning to idle.
pub const RESET_DELAY: Duration = Duration::from_millis(4000);

/// Outcome-driven status of the contact form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl FormStatus {
    /// Label shown on the submit button.
    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Success => "✅ Sent!",
            Self::Error => "❌ Failed — Try Again",
        }
    }

    /// The submit control is disabled while a request is in flight.
    #[must_use]
    pub fn submit_disabled(self) -> bool {
        matches!(self, Self::Sending)
    }

    /// CSS modifier suffix for the submit button.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Reason for getting in touch. The label doubles as the submitted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Purpose {
    JobOpportunity,
    Collaboration,
    ProjectInquiry,
    General,
}

impl Purpose {
    pub const ALL: [Self; 4] = [Self::JobOpportunity, Self::Collaboration, Self::ProjectInquiry, Self::General];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JobOpportunity => "Job Opportunity",
            Self::Collaboration => "Collaboration",
            Self::ProjectInquiry => "Project Inquiry",
            Self::General => "General",
        }
    }

    /// Parse a `<select>` value. The empty placeholder option yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == raw.trim())
    }
}

/// Form inputs, named as they are submitted to the email template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Purpose,
    Message,
}

impl ContactField {
    /// Input `name` attribute and email template parameter.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "from_email",
            Self::Purpose => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Your Email",
            Self::Purpose => "Purpose",
            Self::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("enter a valid email address")]
    InvalidEmail,
}

/// Raw, possibly incomplete form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub from_email: String,
    pub purpose: Option<Purpose>,
    pub message: String,
}

impl ContactForm {
    /// Replace one field with the value typed or selected by the user.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Email => self.from_email = value,
            ContactField::Purpose => self.purpose = Purpose::parse(&value),
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check the same constraints the browser enforces (`required`,
    /// `type=email`) and produce the payload to deliver.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint in field order.
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        let from_email = self.from_email.trim();
        if from_email.is_empty() {
            return Err(FormError::Missing(ContactField::Email));
        }
        if !is_valid_email(from_email) {
            return Err(FormError::InvalidEmail);
        }
        let purpose = self.purpose.ok_or(FormError::Missing(ContactField::Purpose))?;
        if self.message.trim().is_empty() {
            return Err(FormError::Missing(ContactField::Message));
        }
        Ok(ContactSubmission { from_email: from_email.to_owned(), purpose, message: self.message.clone() })
    }
}

/// A validated message ready for the email-delivery service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub from_email: String,
    pub purpose: Purpose,
    pub message: String,
}

/// Identifies one armed auto-reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResetToken(u64);

/// Form contents plus submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    status: FormStatus,
    pending_reset: Option<ResetToken>,
    next_token: u64,
}

impl ContactState {
    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn pending_reset(&self) -> Option<ResetToken> {
        self.pending_reset
    }

    /// `Idle|Success|Error -> Sending`.
    ///
    /// # Errors
    ///
    /// [`ViewError::SubmitInFlight`] while sending, [`ViewError::Form`] when
    /// validation fails. Either way the status is unchanged.
    pub fn submit(&mut self) -> Result<Vec<Effect>, ViewError> {
        if self.status == FormStatus::Sending {
            return Err(ViewError::SubmitInFlight);
        }
        let submission = self.form.validate()?;

        let mut effects = Vec::with_capacity(2);
        if let Some(token) = self.pending_reset.take() {
            effects.push(Effect::CancelReset(token));
        }
        self.status = FormStatus::Sending;
        effects.push(Effect::SendContact(submission));
        Ok(effects)
    }

    /// `Sending -> Success` (fields cleared) or `Sending -> Error` (fields kept).
    ///
    /// # Errors
    ///
    /// [`ViewError::NoSubmitInFlight`] when nothing is being sent.
    pub fn finish(&mut self, delivered: bool) -> Result<Vec<Effect>, ViewError> {
        if self.status != FormStatus::Sending {
            return Err(ViewError::NoSubmitInFlight);
        }
        if delivered {
            self.status = FormStatus::Success;
            self.form.clear();
        } else {
            self.status = FormStatus::Error;
        }

        let token = ResetToken(self.next_token);
        self.next_token += 1;
        self.pending_reset = Some(token);
        Ok(vec![Effect::ScheduleReset { token, after: RESET_DELAY }])
    }

    /// Return to idle if `token` is the armed reset. Returns whether it was.
    pub fn reset_elapsed(&mut self, token: ResetToken) -> bool {
        if self.pending_reset != Some(token) {
            return false;
        }
        self.pending_reset = None;
        self.status = FormStatus::Idle;
        true
    }
}

/// Approximates the HTML `type=email` rule: `local@domain` where the local
/// part uses the permitted symbol set and each domain label is 1..=63
/// alphanumerics or inner hyphens.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    const LOCAL_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(|c| c.is_ascii_alphanumeric() || LOCAL_SYMBOLS.contains(c)) {
        return false;
    }
    !domain.is_empty()
        && domain.split('.').all(|label| {
            let bytes = label.as_bytes();
            (1..=63).contains(&bytes.len())
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
                && bytes[0] != b'-'
                && bytes[bytes.len() - 1] != b'-'
        })
}
