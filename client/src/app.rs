//! Root application component and SSR document shell.

use folio::{Msg, PageState, Theme};
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::portfolio::PortfolioPage;
use crate::state::dispatch::Dispatcher;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=Theme::default().as_attr()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page state and provides it, with its dispatcher, as context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(PageState::default());
    let dispatcher = Dispatcher::new(state);
    provide_context(state);
    provide_context(dispatcher);

    // Escape closes the overlay from anywhere on the page.
    let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.with_untracked(|s| s.overlay.is_some()) {
            dispatcher.dispatch(Msg::CloseOverlay);
        }
    });

    view! {
        <Title text=folio::content::PROFILE.name/>
        <Meta name="description" content="Portfolio: projects, skills, education and contact."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
