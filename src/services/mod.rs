//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session bookkeeping and the account directory so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod session;
pub mod users;
