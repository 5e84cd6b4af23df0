//! Resume view/download links.

use folio::content::{CardAction, RESUME};
use leptos::prelude::*;

use crate::components::card_action::CardActionButton;

const VIEW_LABEL: &str = "📄 View Resume";
const DOWNLOAD_LABEL: &str = "⬇️ Download Resume";

#[component]
pub fn ResumeSection() -> impl IntoView {
    let view_action = CardAction { label: VIEW_LABEL, href: RESUME.view_href, documents: RESUME.pages };

    view! {
        <section id="resume" class="section-wrapper">
            <h2 class="section-title">"Resume"</h2>
            <p class="section-content section-content--lead">{RESUME.blurb}</p>
            <div class="resume-section">
                <CardActionButton title="Resume" action=view_action/>
                {match RESUME.download_href {
                    Some(href) => view! { <a class="card-button" href=href download="">{DOWNLOAD_LABEL}</a> }.into_any(),
                    None => view! {
                        <button class="card-button" disabled=true title="Not available yet">{DOWNLOAD_LABEL}</button>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
