//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its guard form: `Protected` for role-gated views, the
//! `use_protected_route` hook where the page renders its own loading state.

pub mod admin;
pub mod dashboard;
pub mod financial;
pub mod login;
