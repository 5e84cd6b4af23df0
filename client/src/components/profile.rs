//! Profile header and the about/interests section.

use folio::content::PROFILE;
use leptos::prelude::*;

#[component]
pub fn ProfileSection() -> impl IntoView {
    view! {
        <section id="profile" class="profile-section">
            <div class="profile-content">
                <div class="profile-pic">
                    <img src=PROFILE.photo alt="Profile"/>
                </div>
                <h1 class="title">{PROFILE.name}</h1>
                {PROFILE.tags.iter().map(|tag| view! { <p class="tag">{*tag}</p> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="aboutme" class="aboutme-section">
            <h2 class="section-title">"About Me"</h2>
            <Paragraphs text=PROFILE.about/>

            <h2 class="section-title section-title--spaced">"Interests"</h2>
            <Paragraphs text=PROFILE.interests/>
        </section>
    }
}

#[component]
fn Paragraphs(text: &'static [&'static str]) -> impl IntoView {
    text.iter()
        .enumerate()
        .map(|(i, para)| {
            let class = if i == 0 { "section-content" } else { "section-content section-content--spaced" };
            view! { <p class=class>{*para}</p> }
        })
        .collect_view()
}
