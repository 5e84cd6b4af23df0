//! Request shape for the EmailJS REST API.
//!
//! The contact form is delivered by one `POST` to EmailJS: the service and
//! template identifiers select the hosted template, the public key
//! authorises the call, and `template_params` fills the template fields.
//! Any 2xx response means the message was accepted.

use serde::Serialize;

use crate::contact::ContactSubmission;

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifies the hosted template and the account allowed to use it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsConfig {
    #[must_use]
    pub fn new(service_id: impl Into<String>, template_id: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Override the API endpoint. Trailing slashes are dropped.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_owned();
        self
    }
}

/// JSON body of a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id` on the wire.
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

/// Template fields, named after the form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams<'a> {
    pub from_email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> EmailJsRequest<'a> {
    #[must_use]
    pub fn new(config: &'a EmailJsConfig, submission: &'a ContactSubmission) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                from_email: &submission.from_email,
                subject: submission.purpose.label(),
                message: &submission.message,
            },
        }
    }
}

/// Why a delivery attempt failed. Only logged; the form just shows an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("email request failed: {0}")]
    Transport(String),
    #[error("email service rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Map an HTTP response to the delivery outcome.
///
/// # Errors
///
/// Returns [`DeliveryError::Rejected`] for any non-2xx status.
pub fn classify_response(status: u16, body: String) -> Result<(), DeliveryError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(DeliveryError::Rejected { status, body }) }
}
