//! Projects section: tab strip plus the cards for the active tab.

use folio::content::{Progress, Project, ProjectTab};
use folio::Msg;
use leptos::prelude::*;

use crate::components::card_action::CardActionButton;
use crate::components::tech_tags::{StatusBadge, TechTags};
use crate::state::dispatch::Dispatcher;
use crate::util::css::active_class;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let active_tab = move || state.with(|s| s.active_tab);
    let visible = move || state.with(|s| s.visible_projects().collect::<Vec<_>>());

    view! {
        <section id="projects" class="section-wrapper">
            <h2 class="section-title">"Projects"</h2>
            <div class="project-tabs" role="tablist">
                {ProjectTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                class=move || active_class("tab-button", active_tab() == tab)
                                aria-selected=move || (active_tab() == tab).to_string()
                                on:click=move |_| dispatcher.dispatch(Msg::SelectTab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="cards-container">
                {move || visible().into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let class = if project.wide { "card card-wide" } else { "card" };
    view! {
        <div class=class>
            <StatusBadge progress=Progress::from(project.tab)/>
            <h3 class="card-title">{project.title}</h3>
            <p class="card-content">{project.summary}</p>
            <TechTags tags=project.tags/>
            {project.action.map(|action| view! { <CardActionButton title=project.title action=action/> })}
        </div>
    }
}
