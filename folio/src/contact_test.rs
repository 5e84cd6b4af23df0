use super::*;

fn filled_form() -> ContactForm {
    ContactForm {
        from_email: "visitor@example.com".to_owned(),
        purpose: Some(Purpose::Collaboration),
        message: "Hello there".to_owned(),
    }
}

fn filled_state() -> ContactState {
    ContactState { form: filled_form(), ..ContactState::default() }
}

// =============================================================
// Field helpers
// =============================================================

#[test]
fn purpose_parse_matches_labels() {
    for purpose in Purpose::ALL {
        assert_eq!(Purpose::parse(purpose.label()), Some(purpose));
    }
    assert_eq!(Purpose::parse(""), None);
    assert_eq!(Purpose::parse("Spam"), None);
}

#[test]
fn field_names_match_template_parameters() {
    assert_eq!(ContactField::Email.name(), "from_email");
    assert_eq!(ContactField::Purpose.name(), "subject");
    assert_eq!(ContactField::Message.name(), "message");
}

#[test]
fn set_updates_each_field() {
    let mut form = ContactForm::default();
    form.set(ContactField::Email, "a@b.co".to_owned());
    form.set(ContactField::Purpose, "General".to_owned());
    form.set(ContactField::Message, "hi".to_owned());
    assert_eq!(form.from_email, "a@b.co");
    assert_eq!(form.purpose, Some(Purpose::General));
    assert_eq!(form.message, "hi");

    form.set(ContactField::Purpose, String::new());
    assert_eq!(form.purpose, None);
}

#[test]
fn status_labels_and_disabled_flag() {
    assert_eq!(FormStatus::Idle.submit_label(), "Send Message");
    assert_eq!(FormStatus::Sending.submit_label(), "Sending...");
    assert_eq!(FormStatus::Success.submit_label(), "✅ Sent!");
    assert_eq!(FormStatus::Error.submit_label(), "❌ Failed — Try Again");
    assert!(FormStatus::Sending.submit_disabled());
    assert!(!FormStatus::Idle.submit_disabled());
    assert!(!FormStatus::Error.submit_disabled());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_reports_missing_fields_in_order() {
    let mut form = filled_form();
    form.from_email = "   ".to_owned();
    assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Email)));

    let mut form = filled_form();
    form.purpose = None;
    assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Purpose)));

    let mut form = filled_form();
    form.message = "\n".to_owned();
    assert_eq!(form.validate(), Err(FormError::Missing(ContactField::Message)));
}

#[test]
fn validate_rejects_malformed_email() {
    let mut form = filled_form();
    form.from_email = "not-an-email".to_owned();
    assert_eq!(form.validate(), Err(FormError::InvalidEmail));
}

#[test]
fn validate_trims_email() {
    let mut form = filled_form();
    form.from_email = "  visitor@example.com ".to_owned();
    let submission = form.validate().unwrap();
    assert_eq!(submission.from_email, "visitor@example.com");
    assert_eq!(submission.purpose, Purpose::Collaboration);
}

#[test]
fn email_rule_accepts_common_addresses() {
    for ok in ["a@b", "first.last+tag@mail.example.co", "o'neil@host-name.io"] {
        assert!(is_valid_email(ok), "{ok}");
    }
}

#[test]
fn email_rule_rejects_bad_addresses() {
    for bad in ["", "@example.com", "user@", "user@@example.com", "us er@example.com", "user@-host.com", "user@host..com", "user@host-.com"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn form_error_messages_name_the_field() {
    assert_eq!(FormError::Missing(ContactField::Message).to_string(), "Message is required");
}

// =============================================================
// State machine
// =============================================================

#[test]
fn submit_with_empty_field_stays_idle() {
    let mut state = ContactState::default();
    let err = state.submit().unwrap_err();
    assert_eq!(err, ViewError::Form(FormError::Missing(ContactField::Email)));
    assert_eq!(state.status(), FormStatus::Idle);
}

#[test]
fn submit_enters_sending_and_requests_delivery() {
    let mut state = filled_state();
    let effects = state.submit().unwrap();
    assert_eq!(state.status(), FormStatus::Sending);
    assert!(state.status().submit_disabled());
    assert_eq!(effects, vec![Effect::SendContact(filled_form().validate().unwrap())]);
}

#[test]
fn submit_while_sending_is_rejected() {
    let mut state = filled_state();
    state.submit().unwrap();
    assert_eq!(state.submit().unwrap_err(), ViewError::SubmitInFlight);
    assert_eq!(state.status(), FormStatus::Sending);
}

#[test]
fn finish_success_clears_form_and_arms_reset() {
    let mut state = filled_state();
    state.submit().unwrap();
    let effects = state.finish(true).unwrap();
    assert_eq!(state.status(), FormStatus::Success);
    assert_eq!(state.form, ContactForm::default());
    let token = state.pending_reset().unwrap();
    assert_eq!(effects, vec![Effect::ScheduleReset { token, after: RESET_DELAY }]);
}

#[test]
fn finish_failure_keeps_form() {
    let mut state = filled_state();
    state.submit().unwrap();
    state.finish(false).unwrap();
    assert_eq!(state.status(), FormStatus::Error);
    assert_eq!(state.form, filled_form());
}

#[test]
fn finish_without_submit_is_rejected() {
    let mut state = filled_state();
    assert_eq!(state.finish(true).unwrap_err(), ViewError::NoSubmitInFlight);
}

#[test]
fn resubmit_cancels_armed_reset() {
    let mut state = filled_state();
    state.submit().unwrap();
    state.finish(false).unwrap();
    let first = state.pending_reset().unwrap();

    let effects = state.submit().unwrap();
    assert_eq!(effects[0], Effect::CancelReset(first));
    assert_eq!(state.pending_reset(), None);
    assert!(!state.reset_elapsed(first));
    assert_eq!(state.status(), FormStatus::Sending);
}

#[test]
fn tokens_are_unique_per_finish() {
    let mut state = filled_state();
    state.submit().unwrap();
    state.finish(false).unwrap();
    let first = state.pending_reset().unwrap();
    state.submit().unwrap();
    state.finish(false).unwrap();
    let second = state.pending_reset().unwrap();
    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn reset_elapsed_returns_to_idle_once() {
    let mut state = filled_state();
    state.submit().unwrap();
    state.finish(true).unwrap();
    let token = state.pending_reset().unwrap();
    assert!(state.reset_elapsed(token));
    assert_eq!(state.status(), FormStatus::Idle);
    assert!(!state.reset_elapsed(token));
}
