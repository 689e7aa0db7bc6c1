//! Access-gating policy shared by the `server` boundary and the `client` guards.
//!
//! This crate owns the one decision function every enforcement point applies.
//! It performs no I/O: navigation, notifications and cookie handling live in
//! the callers, which feed a [`Session`] snapshot and a path in and act on the
//! returned [`GuardDecision`].

pub mod boundary;
pub mod error;
pub mod permissions;
pub mod policy;
pub mod role;
pub mod route;
pub mod session;

pub use boundary::{BoundaryAction, BoundaryRequest};
pub use error::AccessError;
pub use permissions::Permissions;
pub use policy::{Evaluation, GuardConfig, GuardDecision, GuardPolicy, decide, evaluate};
pub use role::{ParseRoleError, Role};
pub use route::{RouteClassification, RouteTable};
pub use session::{Session, UserRef};
