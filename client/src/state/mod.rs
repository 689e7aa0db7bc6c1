//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `toast`) so guards and components can
//! depend on small focused models provided through context.

pub mod auth;
pub mod toast;
