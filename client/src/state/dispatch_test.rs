#![cfg(not(feature = "hydrate"))]

use super::*;
use folio::{ContactField, FormStatus, ProjectTab, Theme};

#[test]
fn dispatch_applies_reducer_to_signal() {
    let state = RwSignal::new(PageState::default());
    let dispatcher = Dispatcher::new(state);

    dispatcher.dispatch(Msg::ToggleTheme);
    dispatcher.dispatch(Msg::SelectTab(ProjectTab::Completed));
    dispatcher.dispatch(Msg::ToggleMenu);

    state.with_untracked(|s| {
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.active_tab, ProjectTab::Completed);
        assert!(s.menu_open);
    });
}

#[test]
fn rejected_message_leaves_state_unchanged() {
    let state = RwSignal::new(PageState::default());
    let dispatcher = Dispatcher::new(state);

    dispatcher.dispatch(Msg::SelectOverlayItem(3));
    dispatcher.dispatch(Msg::SubmitContact);

    assert_eq!(state.get_untracked(), PageState::default());
}

#[test]
fn valid_submit_enters_sending_without_a_browser() {
    let state = RwSignal::new(PageState::default());
    let dispatcher = Dispatcher::new(state);

    dispatcher.dispatch(Msg::EditContact(ContactField::Email, "visitor@example.com".to_owned()));
    dispatcher.dispatch(Msg::EditContact(ContactField::Purpose, "General".to_owned()));
    dispatcher.dispatch(Msg::EditContact(ContactField::Message, "Hi!".to_owned()));
    dispatcher.dispatch(Msg::SubmitContact);

    assert_eq!(state.with_untracked(|s| s.contact.status()), FormStatus::Sending);
    assert_eq!(dispatcher.state().with_untracked(|s| s.contact.form.message.clone()), "Hi!");
}
