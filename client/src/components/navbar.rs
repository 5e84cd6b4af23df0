//! Top navigation bar: section links, theme toggle and the mobile menu.

use folio::Msg;
use folio::content::{NAV_SECTIONS, PROFILE};
use leptos::prelude::*;

use crate::state::dispatch::Dispatcher;
use crate::util::css::active_class;

#[component]
pub fn Navbar() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let theme = move || state.with(|s| s.theme);
    let menu_open = move || state.with(|s| s.menu_open);
    let line_class = move || active_class("hamburger-line", menu_open());

    view! {
        <div class="navbar">
            <a class="profile-pic-nav" href="#profile">
                <img src=PROFILE.photo alt="NavProfile"/>
            </a>
            <h3 class="name">{PROFILE.name}</h3>

            <div class="nav-links-desktop">
                {NAV_SECTIONS
                    .iter()
                    .map(|section| view! { <a class="nav-link" href=section.href()>{section.label}</a> })
                    .collect_view()}
            </div>

            <button
                class="displayToggle"
                title=move || theme().toggle_title()
                on:click=move |_| dispatcher.dispatch(Msg::ToggleTheme)
            >
                {move || theme().toggle_icon()}
            </button>

            <button
                class="hamburger"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| dispatcher.dispatch(Msg::ToggleMenu)
            >
                <span class=line_class></span>
                <span class=line_class></span>
                <span class=line_class></span>
            </button>

            <Show when=menu_open>
                <div class="mobile-menu">
                    {NAV_SECTIONS
                        .iter()
                        .map(|section| {
                            view! {
                                <a
                                    class="mobile-nav-link"
                                    href=section.href()
                                    on:click=move |_| dispatcher.dispatch(Msg::CloseMenu)
                                >
                                    {section.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
