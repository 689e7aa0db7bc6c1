//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep guard and notification plumbing out of page and
//! component bodies so every route applies identical behavior.

pub mod auth;
pub mod toast;
