//! Skills grouped by category.

use folio::content::SKILLS;
use leptos::prelude::*;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="skills-section">
            <h2 class="section-title">"Skills"</h2>
            {SKILLS
                .iter()
                .map(|category| {
                    view! {
                        <div class="skills-category">
                            <h3 class="skills-category-title">{category.title}</h3>
                            <div class="skills-grid">
                                {category
                                    .skills
                                    .iter()
                                    .map(|skill| view! { <span class="skill-block">{*skill}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
