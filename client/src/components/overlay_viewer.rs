//! Modal document viewer.
//!
//! Renders nothing while `PageState::overlay` is `None`. Clicking the
//! backdrop or the close button closes it; clicks inside the panel are
//! stopped so they never reach the backdrop.

use folio::{Msg, Overlay};
use leptos::prelude::*;

use crate::state::dispatch::Dispatcher;
use crate::util::css::active_class;

#[cfg(test)]
#[path = "overlay_viewer_test.rs"]
mod overlay_viewer_test;

#[component]
pub fn OverlayViewer() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let overlay = Memo::new(move |_| state.with(|s| s.overlay.clone()));

    move || overlay.get().map(|overlay| overlay_panel(dispatcher, &overlay))
}

fn overlay_panel(dispatcher: Dispatcher, overlay: &Overlay) -> impl IntoView + use<> {
    let close = move |_| dispatcher.dispatch(Msg::CloseOverlay);
    let active_index = overlay.active_index();
    let active = overlay.active_item().clone();

    let sidebar = overlay
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            view! {
                <button
                    class=active_class("overlay-sidebar-item", i == active_index)
                    on:click=move |_| dispatcher.dispatch(Msg::SelectOverlayItem(i))
                >
                    {item.label.clone()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="overlay-backdrop" on:click=close>
            <div class="overlay-panel" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                <div class="overlay-sidebar">
                    <h3 class="overlay-sidebar-title">{overlay.title().to_owned()}</h3>
                    {sidebar}
                </div>
                <div class="overlay-main">
                    <button class="overlay-close" title="Close" on:click=close>
                        "✕"
                    </button>
                    <img class="overlay-image" src=active.image alt=active.label/>
                </div>
            </div>
        </div>
    }
}
