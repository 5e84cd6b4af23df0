use super::*;
use crate::contact::Purpose;

fn sample_config() -> EmailJsConfig {
    EmailJsConfig::new("service_x", "template_y", "public_z")
}

fn sample_submission() -> ContactSubmission {
    ContactSubmission {
        from_email: "visitor@example.com".to_owned(),
        purpose: Purpose::JobOpportunity,
        message: "Are you available?".to_owned(),
    }
}

#[test]
fn new_config_uses_default_endpoint() {
    assert_eq!(sample_config().endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn with_endpoint_strips_trailing_slash() {
    let config = sample_config().with_endpoint("https://mail.example.test/send/");
    assert_eq!(config.endpoint, "https://mail.example.test/send");
}

#[test]
fn request_serializes_to_emailjs_shape() {
    let config = sample_config();
    let submission = sample_submission();
    let body = serde_json::to_value(EmailJsRequest::new(&config, &submission)).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "service_id": "service_x",
            "template_id": "template_y",
            "user_id": "public_z",
            "template_params": {
                "from_email": "visitor@example.com",
                "subject": "Job Opportunity",
                "message": "Are you available?"
            }
        })
    );
}

#[test]
fn classify_response_accepts_2xx() {
    assert_eq!(classify_response(200, "OK".to_owned()), Ok(()));
    assert_eq!(classify_response(204, String::new()), Ok(()));
}

#[test]
fn classify_response_rejects_other_statuses() {
    let err = classify_response(400, "The public key is invalid".to_owned()).unwrap_err();
    assert_eq!(err, DeliveryError::Rejected { status: 400, body: "The public key is invalid".to_owned() });
    assert_eq!(err.to_string(), "email service rejected request (400): The public key is invalid");
    assert!(classify_response(302, String::new()).is_err());
}
