//! Top-level pages.

pub mod portfolio;
