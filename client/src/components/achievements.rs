//! Achievements list.

use folio::content::ACHIEVEMENTS;
use leptos::prelude::*;

#[component]
pub fn AchievementsSection() -> impl IntoView {
    view! {
        <section id="achievements" class="section-wrapper">
            <h2 class="section-title">"Achievements"</h2>
            <div class="achievements-list">
                {ACHIEVEMENTS
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="achievement-item">
                                <span class="achievement-icon">{item.icon}</span>
                                <div>
                                    <h3 class="achievement-title">{item.title}</h3>
                                    <p class="achievement-sub">{item.detail}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
