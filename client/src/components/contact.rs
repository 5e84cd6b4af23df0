//! Contact section: the message form and the direct contact links.
//!
//! The inputs carry `required` / `type=email` so the browser blocks an
//! incomplete submit before it reaches the dispatcher; the reducer repeats
//! the same checks.

use folio::content::{CONTACT_BLURB, CONTACT_LINKS, ContactLink};
use folio::{ContactField, FormStatus, Msg, Purpose};
use leptos::prelude::*;

use crate::state::dispatch::Dispatcher;
use crate::util::css::modifier_class;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="contact-section">
            <h2 class="section-title">"Contact"</h2>
            <div class="contact-wrapper">
                <ContactForm/>
                <ContactInfo/>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let status = move || state.with(|s| s.contact.status());
    let email = move || state.with(|s| s.contact.form.from_email.clone());
    let purpose = move || state.with(|s| s.contact.form.purpose.map_or("", Purpose::label));
    let message = move || state.with(|s| s.contact.form.message.clone());
    let edit = move |field: ContactField, ev: leptos::ev::Event| {
        dispatcher.dispatch(Msg::EditContact(field, event_target_value(&ev)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatcher.dispatch(Msg::SubmitContact);
    };

    view! {
        <div class="contact-form-card">
            <h3 class="contact-card-title">"Send a Message"</h3>
            <form class="contact-form" on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for=ContactField::Email.name()>
                        {ContactField::Email.label()}
                    </label>
                    <input
                        id=ContactField::Email.name()
                        name=ContactField::Email.name()
                        type="email"
                        class="form-input"
                        placeholder="you@example.com"
                        required=true
                        prop:value=email
                        on:input=move |ev| edit(ContactField::Email, ev)
                    />
                </div>
                <div class="form-group">
                    <label class="form-label" for=ContactField::Purpose.name()>
                        {ContactField::Purpose.label()}
                    </label>
                    <select
                        id=ContactField::Purpose.name()
                        name=ContactField::Purpose.name()
                        class="form-input"
                        required=true
                        prop:value=purpose
                        on:change=move |ev| edit(ContactField::Purpose, ev)
                    >
                        <option value="">"Select a reason..."</option>
                        {Purpose::ALL
                            .into_iter()
                            .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label" for=ContactField::Message.name()>
                        {ContactField::Message.label()}
                    </label>
                    <textarea
                        id=ContactField::Message.name()
                        name=ContactField::Message.name()
                        class="form-input form-textarea"
                        placeholder="Write your message here..."
                        rows="5"
                        required=true
                        prop:value=message
                        on:input=move |ev| edit(ContactField::Message, ev)
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class=move || submit_class(status())
                    disabled=move || status().submit_disabled()
                >
                    {move || status().submit_label()}
                </button>
            </form>
        </div>
    }
}

fn submit_class(status: FormStatus) -> String {
    modifier_class("form-submit", Some(&format!("form-submit--{}", status.css_modifier())))
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-info-card">
            <h3 class="contact-card-title">"Get in Touch"</h3>
            <p class="contact-description">{CONTACT_BLURB}</p>
            <div class="contact-links">
                {CONTACT_LINKS.iter().map(contact_link).collect_view()}
            </div>
        </div>
    }
}

fn contact_link(link: &'static ContactLink) -> impl IntoView {
    let (target, rel) = if link.external { (Some("_blank"), Some("noopener noreferrer")) } else { (None, None) };
    view! {
        <a href=link.href class="contact-link-item" target=target rel=rel>
            <span class="contact-icon">{link.icon}</span>
            <div>
                <p class="contact-link-label">{link.label}</p>
                <p class="contact-link-value">{link.value}</p>
            </div>
        </a>
    }
}
