//! Client-side state plumbing.
//!
//! DESIGN
//! ======
//! The state model itself lives in `folio`. This module only connects it
//! to Leptos: a reactive `RwSignal<PageState>` plus the [`dispatch::Dispatcher`]
//! that runs the reducer and executes its effects.

pub mod dispatch;
