//! Card footer button.
//!
//! A hosted link opens in a new tab; bundled documents open in the overlay
//! viewer; an action with neither renders disabled.

use folio::Msg;
use folio::content::{CardAction, overlay_items};
use leptos::prelude::*;

use crate::state::dispatch::Dispatcher;

#[component]
pub fn CardActionButton(
    /// Overlay title when the action opens documents.
    title: &'static str,
    action: CardAction,
) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();

    if let Some(href) = action.href {
        return view! {
            <a class="card-button" href=href target="_blank" rel="noopener noreferrer">
                {action.label}
            </a>
        }
        .into_any();
    }

    if action.is_unavailable() {
        return view! {
            <button class="card-button" disabled=true title="Not available yet">
                {action.label}
            </button>
        }
        .into_any();
    }

    let open = move |_| {
        dispatcher.dispatch(Msg::OpenOverlay {
            title: title.to_owned(),
            items: overlay_items(action.documents),
            active_index: 0,
        });
    };
    view! {
        <button class="card-button" on:click=open>
            {action.label}
        </button>
    }
    .into_any()
}
