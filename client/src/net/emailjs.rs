//! Contact delivery through the EmailJS REST API.
//!
//! Client-side (hydrate): one `POST` via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since the form only
//! submits in the browser.
//!
//! CONFIGURATION
//! =============
//! Identifiers are baked in at build time from `EMAILJS_SERVICE_ID`,
//! `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY` and `EMAILJS_ENDPOINT`.
//! The public key is meant to ship to browsers; EmailJS restricts it by
//! allowed origin.

#![allow(clippy::unused_async)]

use folio::emailjs::DEFAULT_ENDPOINT;
use folio::{ContactSubmission, DeliveryError, EmailJsConfig};

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

const DEFAULT_SERVICE_ID: &str = "service_yz0loki";
const DEFAULT_TEMPLATE_ID: &str = "template_l6gz1sw";
const DEFAULT_PUBLIC_KEY: &str = "HuSx4Klqxsq8QXvDL";

/// Delivery settings for this build.
pub fn config() -> EmailJsConfig {
    config_from(
        option_env!("EMAILJS_SERVICE_ID"),
        option_env!("EMAILJS_TEMPLATE_ID"),
        option_env!("EMAILJS_PUBLIC_KEY"),
        option_env!("EMAILJS_ENDPOINT"),
    )
}

fn config_from(
    service_id: Option<&str>,
    template_id: Option<&str>,
    public_key: Option<&str>,
    endpoint: Option<&str>,
) -> EmailJsConfig {
    EmailJsConfig::new(
        pick(service_id, DEFAULT_SERVICE_ID),
        pick(template_id, DEFAULT_TEMPLATE_ID),
        pick(public_key, DEFAULT_PUBLIC_KEY),
    )
    .with_endpoint(&pick(endpoint, DEFAULT_ENDPOINT))
}

fn pick(value: Option<&str>, default: &str) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(default).to_owned()
}

/// Send `submission` to the configured template.
///
/// # Errors
///
/// Returns [`DeliveryError::Transport`] if the request cannot be built or
/// sent, and [`DeliveryError::Rejected`] for a non-2xx response.
pub async fn send(config: &EmailJsConfig, submission: &ContactSubmission) -> Result<(), DeliveryError> {
    #[cfg(feature = "hydrate")]
    {
        let body = folio::EmailJsRequest::new(config, submission);
        let resp = gloo_net::http::Request::post(&config.endpoint)
            .json(&body)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        folio::emailjs::classify_response(status, text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, submission);
        Err(DeliveryError::Transport("not available on server".to_owned()))
    }
}
