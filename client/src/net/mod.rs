//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page makes exactly one kind of outbound call: delivering the contact
//! form through `emailjs`.

pub mod emailjs;
