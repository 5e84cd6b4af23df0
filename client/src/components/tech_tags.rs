//! Inline list of technology tags and the status badge shared by cards.

use folio::content::Progress;
use leptos::prelude::*;

use crate::util::css::modifier_class;

#[component]
pub fn TechTags(tags: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="tech-tags">
            {tags.iter().map(|tag| view! { <span class="tech-tag">{*tag}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn StatusBadge(progress: Progress) -> impl IntoView {
    view! {
        <span class=modifier_class("status-badge", Some(progress.css_modifier()))>{progress.label()}</span>
    }
}
