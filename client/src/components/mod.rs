//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared auth/toast state from Leptos context providers.
//! `protected` is the wrapper form of the route guard.

pub mod loading_screen;
pub mod nav_bar;
pub mod protected;
pub mod toast_host;
