//! Work experience cards.

use folio::content::EXPERIENCE;
use leptos::prelude::*;

use crate::components::card_action::CardActionButton;
use crate::components::tech_tags::{StatusBadge, TechTags};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="section-wrapper">
            <h2 class="section-title">"Experience"</h2>
            <div class="cards-container">
                {EXPERIENCE
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="card card-wide">
                                <StatusBadge progress=entry.progress/>
                                <h3 class="card-title">{entry.title}</h3>
                                <p class="card-content card-company">{entry.company}</p>
                                <p class="card-content">{entry.period}</p>
                                <p class="card-content card-summary">{entry.summary}</p>
                                <TechTags tags=entry.tags/>
                                <CardActionButton title=entry.title action=entry.action/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
