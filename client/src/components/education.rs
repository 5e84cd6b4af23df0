//! Education cards.

use folio::content::EDUCATION;
use leptos::prelude::*;

use crate::components::card_action::CardActionButton;
use crate::components::tech_tags::StatusBadge;

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section-wrapper">
            <h2 class="section-title">"Education"</h2>
            <div class="cards-container">
                {EDUCATION
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="card">
                                <StatusBadge progress=entry.progress/>
                                <h3 class="card-title">{entry.title}</h3>
                                <p class="card-content">{entry.institution}</p>
                                <p class="card-content">{entry.period}</p>
                                <p class="card-content">
                                    {entry.score_label}
                                    ": "
                                    <strong>{entry.score}</strong>
                                    {entry.score_note.map(|note| format!(" {note}"))}
                                </p>
                                <CardActionButton title=entry.title action=entry.action/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
